use crate::State;

/// A command-updated cache.
///
/// Computes never perform side effects. Commands publish a whole new value through
/// [`Updater::set`](crate::Updater::set) and `StateCtx::sync_computes` swaps it in,
/// so the UI only ever observes complete values.
pub trait Compute: State {}
