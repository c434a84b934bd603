use std::future::Future;
use std::pin::Pin;

use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, Updater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A manual-only side effect.
///
/// Commands never run implicitly: the caller enqueues one with
/// `StateCtx::enqueue_command` (or `dispatch`) and the context spawns the returned
/// future on the current Tokio runtime. All inputs come from the snapshot, and all
/// outputs go through the updater.
pub trait Command: Send + Sync + 'static {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}
