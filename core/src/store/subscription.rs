//! Change listeners.
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: usize,
    listeners: Vec<(usize, Listener<T>)>,
}

struct Inner<T> {
    registry: RefCell<Registry<T>>,

    /// Values waiting to be delivered.
    pending: RefCell<VecDeque<T>>,
    notifying: Cell<bool>,
}

/// Set of listeners notified with each new value.
///
/// Values are delivered in the order they are published.
/// If a listener publishes while being notified, the new value is
/// delivered to every listener after the current one has been.
pub struct Listeners<T> {
    inner: Rc<Inner<T>>,
}

impl<T: Clone + 'static> Listeners<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                registry: RefCell::new(Registry {
                    next_id: 0,
                    listeners: Vec::new(),
                }),
                pending: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
            }),
        }
    }

    /// Registers `listener`.
    /// The listener stays registered until the returned [`Subscription`] is dropped.
    #[must_use = "the listener is removed when the subscription is dropped"]
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut registry = self.inner.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;

            let listener: Listener<T> = Rc::new(listener);
            registry.listeners.push((id, listener));
            id
        };

        let inner: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner
                    .registry
                    .borrow_mut()
                    .listeners
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    /// Delivers `value` to all listeners.
    pub fn notify(&self, value: T) {
        self.inner.pending.borrow_mut().push_back(value);
        if self.inner.notifying.replace(true) {
            return;
        }

        loop {
            let Some(value) = self.inner.pending.borrow_mut().pop_front() else {
                break;
            };

            let listeners = self
                .inner
                .registry
                .borrow()
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect::<Vec<_>>();

            for listener in listeners {
                listener(&value);
            }
        }

        self.inner.notifying.set(false);
    }

    pub fn len(&self) -> usize {
        self.inner.registry.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + 'static> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.inner.registry.borrow().listeners.len())
            .finish()
    }
}

/// Handle to a registered listener.
/// Dropping it removes the listener.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Removes the listener.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "./subscription_test.rs"]
mod subscription_test;
