//! Explicit resize subscription.
//!
//! The engine never binds itself to a global notification source. The host
//! owns a [`ResizeBus`], delivers viewport-resize notifications into it,
//! and controls each listener's lifetime through the RAII [`Subscription`]
//! it got back when subscribing. Everything is single-threaded and
//! synchronous: `notify` runs every live callback to completion before
//! returning.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<S> = Box<dyn FnMut(&mut S)>;

struct BusInner<S> {
    subscribers: Vec<(u64, Callback<S>)>,
    // Unsubscribes observed while a delivery had the list checked out.
    dead: Vec<u64>,
    next_id: u64,
}

/// Single-threaded registry of resize listeners.
pub struct ResizeBus<S> {
    inner: Rc<RefCell<BusInner<S>>>,
}

impl<S> Default for ResizeBus<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ResizeBus<S> {
    /// An empty bus.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                subscribers: Vec::new(),
                dead: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Register a callback; it stays live until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, callback: impl FnMut(&mut S) + 'static) -> Subscription<S> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(callback)));
        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Whether the bus has no live subscriptions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver one resize notification, running every live callback
    /// synchronously in subscription order.
    pub fn notify(&self, surface: &mut S) {
        // Check the list out so callbacks may subscribe or drop
        // subscriptions reentrantly without aliasing the borrow.
        let mut delivering = std::mem::take(&mut self.inner.borrow_mut().subscribers);
        for (_, callback) in &mut delivering {
            callback(surface);
        }

        let mut inner = self.inner.borrow_mut();
        let added = std::mem::take(&mut inner.subscribers);
        delivering.extend(added);
        let dead = std::mem::take(&mut inner.dead);
        delivering.retain(|(id, _)| !dead.contains(id));
        inner.subscribers = delivering;
    }
}

fn unsubscribe<S>(inner: &RefCell<BusInner<S>>, id: u64) {
    let mut inner = inner.borrow_mut();
    let before = inner.subscribers.len();
    inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
    if inner.subscribers.len() == before {
        // The entry is checked out for delivery right now.
        inner.dead.push(id);
    }
}

/// RAII handle for one bus subscription; dropping it detaches the callback.
pub struct Subscription<S> {
    id: u64,
    bus: Weak<RefCell<BusInner<S>>>,
}

impl<S> Subscription<S> {
    /// Detach explicitly. Equivalent to dropping the handle.
    pub fn detach(self) {}
}

impl<S> Drop for Subscription<S> {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            unsubscribe(&bus, self.id);
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/resize.rs"]
mod tests;
