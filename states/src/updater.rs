use std::any::{TypeId, type_name};
use std::fmt;

use flume::Sender;
use log::warn;

use crate::Compute;

pub(crate) type ComputeUpdate = (TypeId, Box<dyn Compute>);

/// Send side of the compute update channel.
///
/// Cloned into every spawned command. Values are applied on the next
/// `StateCtx::sync_computes`, in the order they were sent.
#[derive(Clone)]
pub struct Updater {
    send: Sender<ComputeUpdate>,
}

impl Updater {
    pub(crate) fn new(send: Sender<ComputeUpdate>) -> Self {
        Self { send }
    }

    /// Publish a new value for the compute `T`.
    pub fn set<T: Compute>(&self, value: T) {
        if self.send.send((TypeId::of::<T>(), Box::new(value))).is_err() {
            warn!(
                "Updater: state context is gone, dropping update for {}",
                type_name::<T>()
            );
        }
    }
}

impl fmt::Debug for Updater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Updater")
            .field("pending", &self.send.len())
            .finish()
    }
}
