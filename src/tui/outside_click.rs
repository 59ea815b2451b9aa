//! Close-on-outside-click behavior for popover panels.
//!
//! While the owner reports itself open, a document listener is kept
//! subscribed; a click whose cell lies outside the owner's root region calls
//! the owner's setter with `false`. The listener is released as soon as the
//! owner reports itself closed, and when this value is dropped.

use std::cell::Cell;
use std::rc::Rc;

use ratatui::layout::Rect;

use super::document::{Document, Subscription};

/// Scoped outside-click subscription for one panel.
#[derive(Debug, Default)]
pub struct OutsideClickClose {
    root: Rc<Cell<Rect>>,
    subscription: Option<Subscription>,
}

impl OutsideClickClose {
    /// Creates the behavior with an empty root region and no listener.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the root region; an active listener reads the latest value.
    pub fn set_root(&self, area: Rect) {
        self.root.set(area);
    }

    /// Returns true while a document listener is attached.
    #[must_use]
    pub const fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    /// Reconciles the subscription with the owner's open flag.
    ///
    /// Subscribes on the first call with `is_open == true` and unsubscribes on
    /// the first call with `is_open == false`; repeated calls with the same flag
    /// are no-ops. `on_change` is only ever called with `false`.
    pub fn sync<F>(&mut self, is_open: bool, document: &Document, on_change: F)
    where
        F: Fn(bool) + 'static,
    {
        match (is_open, self.subscription.is_some()) {
            (true, false) => {
                let root = Rc::clone(&self.root);
                self.subscription = Some(document.subscribe(move |click| {
                    if !click.is_inside(root.get()) {
                        on_change(false);
                    }
                }));
                tracing::debug!("outside-click listener attached");
            }
            (false, true) => {
                self.subscription = None;
                tracing::debug!("outside-click listener released");
            }
            _ => {}
        }
    }
}
