//! Binds UI events to the users view-model and commands.
//!
//! Widgets never touch commands or remote calls themselves; they return a
//! [`UserListEvent`] and the app hands it to [`UserListController::handle`].

use log::{debug, info};
use roster_states::StateCtx;
use ustr::Ustr;

use super::list_compute::{RefreshUsersCommand, UserListCompute};
use super::mutation_compute::{
    CreateUserCommand, CreateUserInput, DeleteUserCommand, DeleteUserInput, UpdateUserCommand,
    UpdateUserInput,
};
use super::state::UserListState;

/// Everything a user can do to the users table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserListEvent {
    /// Add button of the create form.
    SubmitCreate,
    Refresh,
    BeginEdit(Ustr),
    SaveEdit,
    CancelEdit,
    RequestDelete(Ustr),
    ConfirmDelete,
    DeclineDelete,
    DismissAlert,
}

pub struct UserListController;

impl UserListController {
    /// Queue the initial fetch; the app loop flushes it at the end of the first frame.
    pub fn start(ctx: &mut StateCtx) {
        info!("UserListController: initial list fetch");
        ctx.enqueue_command::<RefreshUsersCommand>();
    }

    pub fn handle(ctx: &mut StateCtx, event: UserListEvent) {
        debug!("UserListController: {event:?}");

        match event {
            UserListEvent::SubmitCreate => Self::submit_create(ctx),
            UserListEvent::Refresh => ctx.dispatch::<RefreshUsersCommand>(),
            UserListEvent::BeginEdit(id) => {
                let record = ctx
                    .cached::<UserListCompute>()
                    .and_then(|list| list.find(id.as_str()))
                    .cloned();
                ctx.state_mut::<UserListState>()
                    .begin_edit(id, record.as_ref());
            }
            UserListEvent::SaveEdit => Self::save_edit(ctx),
            UserListEvent::CancelEdit => {
                ctx.state_mut::<UserListState>().close_action();
                ctx.dispatch::<RefreshUsersCommand>();
            }
            UserListEvent::RequestDelete(id) => {
                ctx.state_mut::<UserListState>().request_delete(id);
            }
            UserListEvent::ConfirmDelete => Self::confirm_delete(ctx),
            UserListEvent::DeclineDelete => {
                ctx.state_mut::<UserListState>().close_action();
            }
            UserListEvent::DismissAlert => {
                ctx.state_mut::<UserListState>().dismiss_alert();
            }
        }
    }

    fn submit_create(ctx: &mut StateCtx) {
        let state = ctx.state_mut::<UserListState>();
        match state.take_create_fields() {
            Ok(fields) => {
                info!("UserListController: creating '{}'", fields.name);
                ctx.update::<CreateUserInput>(|input| input.fields = Some(fields));
                ctx.dispatch::<CreateUserCommand>();
            }
            Err(err) => state.show_alert(err.to_string()),
        }
    }

    fn save_edit(ctx: &mut StateCtx) {
        let state = ctx.state_mut::<UserListState>();
        let Some(id) = state.editing_id() else {
            return;
        };

        match state.draft_fields() {
            Ok(fields) => {
                state.close_action();
                info!("UserListController: saving user {id}");
                ctx.update::<UpdateUserInput>(|input| {
                    input.id = Some(id);
                    input.fields = Some(fields);
                });
                ctx.dispatch::<UpdateUserCommand>();
            }
            Err(err) => state.show_alert(err.to_string()),
        }
    }

    fn confirm_delete(ctx: &mut StateCtx) {
        let state = ctx.state_mut::<UserListState>();
        let Some(id) = state.pending_delete() else {
            return;
        };
        state.close_action();

        info!("UserListController: deleting user {id}");
        ctx.update::<DeleteUserInput>(|input| input.id = Some(id));
        ctx.dispatch::<DeleteUserCommand>();
    }
}
