//! Object patterns shared across the workspace.

pub mod observable;
