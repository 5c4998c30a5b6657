//! Change notification (translates `ql/patterns/observable.hpp`).
//!
//! A model shared by several engines through `Arc` announces refits to them
//! through this registry. The registry stores `Weak` handles, so it never
//! keeps an engine alive, and handles whose target is gone are dropped at the
//! next notification.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Something that announces its own changes.
pub trait Observable {
    /// Start delivering change notifications to `observer`.
    fn register_observer(&self, observer: Weak<dyn Observer>);

    /// Stop delivering to `observer`; matched by pointer.
    fn unregister_observer(&self, observer: &Weak<dyn Observer>);

    /// Deliver a change notification to every live observer.
    fn notify_observers(&self);
}

/// Receiver of change notifications.
pub trait Observer: Send + Sync {
    /// The observed object changed. Called from whichever thread made the
    /// change.
    fn update(&self);
}

/// Thread-safe list of observers, embedded by types that implement
/// [`Observable`].
#[derive(Default)]
pub struct ObserverList {
    entries: Mutex<Vec<Weak<dyn Observer>>>,
}

impl ObserverList {
    /// No observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `observer`.
    pub fn register(&self, observer: Weak<dyn Observer>) {
        self.entries().push(observer);
    }

    /// Remove every handle pointing at the same observer.
    pub fn unregister(&self, observer: &Weak<dyn Observer>) {
        self.entries().retain(|entry| !entry.ptr_eq(observer));
    }

    /// Observers still alive.
    pub fn len(&self) -> usize {
        self.entries().iter().filter(|e| e.strong_count() > 0).count()
    }

    /// No observer is alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call `update` on every live observer and forget the dead ones.
    ///
    /// The lock is released before the callbacks run, so an observer may
    /// register or unregister from inside `update`.
    pub fn notify(&self) {
        let live: Vec<Arc<dyn Observer>> = {
            let mut entries = self.entries();
            entries.retain(|e| e.strong_count() > 0);
            entries.iter().filter_map(Weak::upgrade).collect()
        };
        live.iter().for_each(|observer| observer.update());
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Weak<dyn Observer>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObserverList({} live)", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Tally(AtomicUsize);

    impl Tally {
        fn get(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    impl Observer for Tally {
        fn update(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn handle(tally: &Arc<Tally>) -> Weak<dyn Observer> {
        Arc::downgrade(tally) as Weak<dyn Observer>
    }

    #[test]
    fn each_notify_reaches_each_observer() {
        let (first, second) = (Arc::new(Tally::default()), Arc::new(Tally::default()));
        let list = ObserverList::new();
        list.register(handle(&first));
        list.register(handle(&second));
        list.notify();
        list.notify();
        assert_eq!((first.get(), second.get()), (2, 2));
    }

    #[test]
    fn unregistered_observer_hears_nothing() {
        let tally = Arc::new(Tally::default());
        let list = ObserverList::new();
        list.register(handle(&tally));
        list.unregister(&handle(&tally));
        list.notify();
        assert_eq!(tally.get(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn dropped_observer_is_forgotten() {
        let list = ObserverList::new();
        let tally = Arc::new(Tally::default());
        list.register(handle(&tally));
        assert_eq!(list.len(), 1);
        drop(tally);
        list.notify();
        assert_eq!(list.entries().len(), 0);
    }

    #[test]
    fn notify_across_threads() {
        let tally = Arc::new(Tally::default());
        let list = Arc::new(ObserverList::new());
        list.register(handle(&tally));
        let remote = Arc::clone(&list);
        std::thread::spawn(move || remote.notify()).join().unwrap();
        assert_eq!(tally.get(), 1);
    }
}
