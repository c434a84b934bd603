//! Users domain module.
//!
//! This module is the single home for:
//! - the remote collection client (`api`) and its wire types (`model`)
//! - the view-model stored in `StateCtx` (`state`)
//! - computes caching the list and the last mutation, and the commands filling them
//! - the controller translating UI events into state changes and commands
//!
//! UI code should not define domain `State`/`Compute`/`Command`. It reads via
//! `ctx.cached::<T>()` / `ctx.state::<T>()` and reports clicks as `UserListEvent`s.

pub mod api;
pub mod controller;
pub mod list_compute;
pub mod model;
pub mod mutation_compute;
pub mod state;

use roster_states::StateCtx;

pub use api::{ApiResult, UsersApiError};
pub use controller::{UserListController, UserListEvent};
pub use list_compute::{RefreshUsersCommand, UserListCompute, UserListStatus};
pub use model::{FieldsError, INVALID_DATE, UserFields, UserRecord};
pub use mutation_compute::{
    CreateUserCommand, CreateUserInput, DeleteUserCommand, DeleteUserInput, UpdateUserCommand,
    UpdateUserInput, UserMutationCompute, UserMutationKind, UserMutationState,
};
pub use state::{EditDraft, UserAction, UserListState};

/// Register every users state, compute and command.
pub fn register(ctx: &mut StateCtx) {
    ctx.add_state(UserListState::default());
    ctx.add_state(CreateUserInput::default());
    ctx.add_state(UpdateUserInput::default());
    ctx.add_state(DeleteUserInput::default());

    ctx.record_compute(UserListCompute::default());
    ctx.record_compute(UserMutationCompute::default());

    ctx.record_command(RefreshUsersCommand);
    ctx.record_command(CreateUserCommand);
    ctx.record_command(UpdateUserCommand);
    ctx.record_command(DeleteUserCommand);
}
