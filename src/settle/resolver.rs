use std::cell::OnceCell;

use log::trace;

use crate::Outcome;

/// A single-assignment cell handed to an executor, deciding the state of the container being
/// constructed.
///
/// The first call to [`resolve`](Resolver::resolve) or [`reject`](Resolver::reject) wins, every
/// later call is ignored and returns false. This guarantees at most one state transition per
/// container.
///
/// Optional executors receive a `Resolver<T, ()>`, which additionally offers
/// [`some`](Resolver::some) and [`none`](Resolver::none).
#[derive(Debug)]
pub struct Resolver<T, E> {
    slot: OnceCell<Outcome<T, E>>,
}

impl<T, E> Resolver<T, E> {
    pub(crate) const fn new() -> Resolver<T, E> {
        Resolver {
            slot: OnceCell::new(),
        }
    }

    /// Settles the container with a success value. Returns false if it was already settled.
    pub fn resolve(&self, value: T) -> bool {
        self.settle(Outcome::Ok(value))
    }

    /// Settles the container with an error. Returns false if it was already settled.
    pub fn reject(&self, error: E) -> bool {
        self.settle(Outcome::Err(error))
    }

    /// Returns true once either [`resolve`](Resolver::resolve) or [`reject`](Resolver::reject)
    /// has taken effect.
    pub fn is_settled(&self) -> bool {
        self.slot.get().is_some()
    }

    pub(crate) fn settle(&self, outcome: Outcome<T, E>) -> bool {
        match self.slot.set(outcome) {
            Ok(()) => true,
            Err(_) => {
                trace!("Resolver already settled, ignoring later settlement");
                false
            },
        }
    }

    pub(crate) fn into_inner(self) -> Option<Outcome<T, E>> {
        self.slot.into_inner()
    }
}

impl<T> Resolver<T, ()> {
    /// Settles the Optional with a value. Returns false if it was already settled.
    pub fn some(&self, value: T) -> bool {
        self.resolve(value)
    }

    /// Settles the Optional as empty. Returns false if it was already settled.
    pub fn none(&self) -> bool {
        self.reject(())
    }
}
