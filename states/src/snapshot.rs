use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use crate::{Error, State};

/// Owned copies of every snapshot-able state and compute, taken when a command is flushed.
///
/// Commands read their inputs from here instead of the live context, so later UI
/// edits never leak into a request that is already in flight.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<T: State + Clone>(&mut self, value: T) {
        self.inner.insert(TypeId::of::<T>(), Box::new(value));
    }

    pub(crate) fn insert_boxed(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or(Error::SnapshotMissing(type_name::<T>()))
    }

    /// Borrow a snapshot value.
    ///
    /// # Panics
    /// Panics when `T` was not registered or does not implement `State::snapshot`.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Computes live in the same map; this reads better at call sites.
    pub fn compute<T: State>(&self) -> &T {
        self.state::<T>()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
