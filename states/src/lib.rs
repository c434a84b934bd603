//! State context shared by the business layer and the UI.
//!
//! The model has three kinds of entries:
//! - [`State`]: plain values owned by the context (inputs, view-model, config)
//! - [`Compute`]: caches the UI reads, replaced only through an [`Updater`]
//! - [`Command`]: manual-only async side effects, spawned with a [`CommandSnapshot`]
//!
//! The UI thread owns the [`StateCtx`]. Commands run on Tokio and publish results
//! back through the updater channel; `StateCtx::sync_computes` applies them once per frame.

mod command;
mod compute;
mod ctx;
mod error;
mod snapshot;
mod state;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::Compute;
pub use ctx::StateCtx;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::State;
pub use updater::Updater;
