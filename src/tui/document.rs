//! Document-level click listeners.
//!
//! Clicks that no component claimed (see [`ClickEvent::stop_propagation`])
//! are delivered to every listener registered here. Listeners are held by
//! [`Subscription`] guards and removed when the guard is dropped, so a
//! listener can never outlive whatever registered it.
//!
//! The event loop is single threaded, hence `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::component::ClickEvent;

type Listener = Box<dyn FnMut(&ClickEvent)>;

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
    dispatching: bool,
    removed_while_dispatching: Vec<u64>,
}

/// Registry of document-level click listeners.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct Document {
    table: Rc<RefCell<ListenerTable>>,
}

impl Document {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for unclaimed clicks.
    ///
    /// The listener stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription removes the listener immediately"]
    pub fn subscribe(&self, listener: impl FnMut(&ClickEvent) + 'static) -> Subscription {
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.entries.push((id, Box::new(listener)));
        tracing::trace!(id, "document listener added");

        Subscription {
            table: Rc::downgrade(&self.table),
            id,
        }
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.table.borrow().entries.len()
    }

    /// Delivers a click to every listener and returns how many were notified.
    ///
    /// Listeners may subscribe or drop subscriptions while being notified; those
    /// changes take effect after this call returns.
    pub fn dispatch(&self, click: &ClickEvent) -> usize {
        let mut listeners = {
            let mut table = self.table.borrow_mut();
            table.dispatching = true;
            std::mem::take(&mut table.entries)
        };

        for (_, listener) in &mut listeners {
            listener(click);
        }

        let notified = listeners.len();
        let removed = {
            let mut table = self.table.borrow_mut();
            table.dispatching = false;
            std::mem::take(&mut table.removed_while_dispatching)
        };
        let (kept, dropped): (Vec<_>, Vec<_>) = listeners
            .into_iter()
            .partition(|(id, _)| !removed.contains(id));
        {
            let mut table = self.table.borrow_mut();
            let added = std::mem::replace(&mut table.entries, kept);
            table.entries.extend(added);
        }
        // Dropped outside the borrow; a listener may own subscriptions itself
        drop(dropped);
        notified
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Guard for a document listener; dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    table: Weak<RefCell<ListenerTable>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Registry already gone: nothing left to detach from.
        let Some(table) = self.table.upgrade() else {
            return;
        };
        let mut table = table.borrow_mut();
        let before = table.entries.len();
        let id = self.id;
        table.entries.retain(|(entry, _)| *entry != id);
        if table.entries.len() == before && table.dispatching {
            table.removed_while_dispatching.push(id);
        }
        tracing::trace!(id, "document listener removed");
    }
}
