use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::{on_cleanup, AnimationFrameRequestHandle, IntervalHandle, TimeoutHandle};

/// A scheduled browser callback that can be withdrawn.
pub trait Cancel {
    fn cancel(self);
}

impl Cancel for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

impl Cancel for IntervalHandle {
    fn cancel(self) {
        self.clear();
    }
}

impl Cancel for AnimationFrameRequestHandle {
    fn cancel(self) {
        AnimationFrameRequestHandle::cancel(&self);
    }
}

/// Cancels `handle` when the current reactive owner is cleaned up, so a
/// timer started by a view never fires after the view is gone.
pub fn cancel_on_teardown<C>(handle: C)
where
    C: Cancel + Send + Sync + 'static,
{
    on_cleanup(move || handle.cancel());
}

/// Holds at most one pending handle for a view. Replacing the handle
/// cancels the old one, and whatever is pending when the owner is cleaned
/// up is cancelled then. Only one cleanup is registered however many
/// handles pass through.
pub struct CancelSlot<C> {
    pending: Arc<Mutex<Option<C>>>,
}

impl<C> Clone for CancelSlot<C> {
    fn clone(&self) -> Self {
        Self {
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<C> CancelSlot<C>
where
    C: Cancel + Send + 'static,
{
    /// Must be called under the owner whose cleanup should cancel.
    pub fn new() -> Self {
        let slot = Self {
            pending: Arc::new(Mutex::new(None)),
        };
        cancel_on_teardown(slot.clone());
        slot
    }

    pub fn replace(&self, handle: C) {
        let previous = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);
        if let Some(previous) = previous {
            previous.cancel();
        }
    }
}

impl<C> Default for CancelSlot<C>
where
    C: Cancel + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cancel> Cancel for CancelSlot<C> {
    fn cancel(self) {
        let pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(handle) = pending {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use leptos::reactive::owner::Owner;

    use super::*;

    struct Counted(Arc<AtomicUsize>);

    impl Cancel for Counted {
        fn cancel(self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_cancelled_when_owner_cleans_up() {
        let cancelled = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();
        owner.with(|| {
            cancel_on_teardown(Counted(cancelled.clone()));
            cancel_on_teardown(Counted(cancelled.clone()));
        });
        assert_eq!(cancelled.load(Ordering::SeqCst), 0);

        owner.cleanup();
        assert_eq!(cancelled.load(Ordering::SeqCst), 2);

        owner.cleanup();
        assert_eq!(cancelled.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_child_owner_cleanup_is_scoped() {
        let cancelled = Arc::new(AtomicUsize::new(0));
        let parent = Owner::new();
        let child = parent.with(|| {
            let child = Owner::new();
            child.with(|| cancel_on_teardown(Counted(cancelled.clone())));
            child
        });
        parent.with(|| cancel_on_teardown(Counted(cancelled.clone())));

        child.cleanup();
        assert_eq!(cancelled.load(Ordering::SeqCst), 1);
        parent.cleanup();
        assert_eq!(cancelled.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_slot_cancels_replaced_handles() {
        let cancelled = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();
        let slot = owner.with(CancelSlot::new);
        for _ in 0..3 {
            slot.replace(Counted(cancelled.clone()));
        }
        assert_eq!(cancelled.load(Ordering::SeqCst), 2);

        owner.cleanup();
        assert_eq!(cancelled.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_slot_cancels_pending_once() {
        let cancelled = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();
        let slot = owner.with(CancelSlot::new);
        slot.replace(Counted(cancelled.clone()));
        owner.cleanup();
        assert_eq!(cancelled.load(Ordering::SeqCst), 1);

        // an empty slot cancels nothing
        owner.cleanup();
        assert_eq!(cancelled.load(Ordering::SeqCst), 1);
    }
}
