//! Document-level pointer listeners
//!
//! The host owns one `DocumentListeners` registry and feeds every pointer
//! press through `dispatch`. Components register a listener with `add` and
//! keep the returned `ListenerGuard`; dropping the guard unregisters the
//! listener, so a component cannot outlive its registration or leak it.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// A primary-button press anywhere on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDown {
    pub column: u16,
    pub row: u16,
}

impl PointerDown {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

type Listener<M> = Box<dyn Fn(&PointerDown) -> Option<M>>;

struct Registry<M> {
    next_id: u64,
    entries: Vec<(u64, Listener<M>)>,
}

/// Registry of document-level pointer listeners producing messages of type `M`
pub struct DocumentListeners<M> {
    inner: Rc<RefCell<Registry<M>>>,
}

impl<M> Clone for DocumentListeners<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<M: 'static> Default for DocumentListeners<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for DocumentListeners<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentListeners")
            .field("len", &self.len())
            .finish()
    }
}

impl<M: 'static> DocumentListeners<M> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a listener; it stays registered until the guard is dropped
    #[must_use = "dropping the guard unregisters the listener immediately"]
    pub fn add<F>(&self, listener: F) -> ListenerGuard<M>
    where
        F: Fn(&PointerDown) -> Option<M> + 'static,
    {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push((id, Box::new(listener)));
        tracing::trace!(id, live = registry.entries.len(), "document listener added");

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Run every listener against `event` and collect their messages
    ///
    /// The registry borrow ends before this returns, so callers may add or
    /// drop listeners while acting on the messages.
    pub fn dispatch(&self, event: &PointerDown) -> Vec<M> {
        let registry = self.inner.borrow();
        registry
            .entries
            .iter()
            .filter_map(|(_, listener)| listener(event))
            .collect()
    }
}

impl<M> DocumentListeners<M> {
    /// Number of live registrations
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scoped registration; unregisters its listener on drop
pub struct ListenerGuard<M> {
    id: u64,
    registry: Weak<RefCell<Registry<M>>>,
}

impl<M> fmt::Debug for ListenerGuard<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

impl<M> Drop for ListenerGuard<M> {
    fn drop(&mut self) {
        // Registry already gone: nothing left to unregister from
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.borrow_mut();
        registry.entries.retain(|(id, _)| *id != self.id);
        tracing::trace!(id = self.id, live = registry.entries.len(), "document listener removed");
    }
}
