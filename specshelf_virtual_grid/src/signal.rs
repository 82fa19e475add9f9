// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport-size change notification with scoped listener registration.
//!
//! The host owns one [`ViewportSignal`] per scroll container and calls
//! [`ViewportSignal::notify`] from its resize handler. Interested parties
//! subscribe and keep the returned [`Subscription`] alive for as long as they
//! want updates; dropping it removes the listener.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`), matching a UI event
//! loop. Listeners run synchronously, once per notification, in subscription
//! order. A listener may subscribe or drop subscriptions while being notified;
//! those changes apply from the next notification on.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::Viewport;

type Listener = Rc<RefCell<Box<dyn FnMut(Viewport)>>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Broadcasts viewport sizes to subscribed listeners.
#[derive(Default)]
pub struct ViewportSignal {
    registry: Rc<RefCell<Registry>>,
    last: Cell<Option<Viewport>>,
}

impl fmt::Debug for ViewportSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportSignal")
            .field("listeners", &self.listener_count())
            .field("last", &self.last.get())
            .finish()
    }
}

impl ViewportSignal {
    /// Creates a signal with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`; it stays registered until the returned guard drops.
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl FnMut(Viewport) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry
            .listeners
            .push((id, Rc::new(RefCell::new(Box::new(listener)))));
        Subscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Delivers `viewport` to every current listener.
    ///
    /// Repeated identical sizes are delivered too; listeners decide whether
    /// anything changed. A listener that is already running (re-entrant notify)
    /// is skipped for the nested call.
    pub fn notify(&self, viewport: Viewport) {
        self.last.set(Some(viewport));
        let snapshot: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            if let Ok(mut callback) = listener.try_borrow_mut() {
                (callback)(viewport);
            }
        }
    }

    /// The most recently notified size, if any.
    #[must_use]
    pub fn last(&self) -> Option<Viewport> {
        self.last.get()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Keeps a listener registered on a [`ViewportSignal`].
///
/// Dropping the guard deregisters the listener. Outliving the signal is fine.
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Subscription {
    /// Returns `true` while the signal still exists and holds this listener.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            registry
                .borrow()
                .listeners
                .iter()
                .any(|(id, _)| *id == self.id)
        })
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}
