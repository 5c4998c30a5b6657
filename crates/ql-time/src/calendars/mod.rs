//! Concrete calendar implementations (country / exchange specific).

pub mod south_korea;

pub use south_korea::{SouthKorea, SouthKoreaMarket};
