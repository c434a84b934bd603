//! Domain layer of the roster client: the remote users collection, the
//! view-model of the users table and the commands keeping both in sync.

mod config;
pub mod http;
pub mod users;

#[cfg(test)]
mod test_utils;

use roster_states::StateCtx;

pub use config::{BusinessConfig, DEFAULT_API_BASE_URL, USERS_COLLECTION_PATH};
pub use users::{
    CreateUserCommand, CreateUserInput, DeleteUserCommand, DeleteUserInput, EditDraft,
    FieldsError, INVALID_DATE, RefreshUsersCommand, UpdateUserCommand, UpdateUserInput,
    UserAction, UserFields, UserListCompute, UserListController, UserListEvent, UserListState,
    UserListStatus, UserMutationCompute, UserMutationKind, UserMutationState, UserRecord,
    UsersApiError,
};

/// Build a context with `config` and every users state, compute and command registered.
pub fn build_state_ctx(config: BusinessConfig) -> StateCtx {
    let mut ctx = StateCtx::new();
    ctx.add_state(config);
    users::register(&mut ctx);
    ctx
}
