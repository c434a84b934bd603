//! Create / update / delete commands for the users collection.
//
// - Controller writes the matching `*Input` state, then dispatches the command.
// - Command performs the mutation, publishes `UserMutationCompute`, then reloads the list.
// - The reload happens whether or not the mutation succeeded.

use std::any::Any;

use log::{error, info, warn};
use roster_states::{Command, CommandFuture, CommandSnapshot, Compute, State, Updater};
use tokio_util::sync::CancellationToken;
use ustr::Ustr;

use super::api::{self as users_api, ApiResult};
use super::list_compute::{UserListCompute, reload_users};
use super::model::UserFields;
use crate::BusinessConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMutationKind {
    Create,
    Update,
    Delete,
}

impl UserMutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserMutationState {
    #[default]
    Idle,

    InFlight {
        kind: UserMutationKind,
        id: Option<Ustr>,
    },

    /// The remote accepted the mutation.
    Done {
        kind: UserMutationKind,
        id: Option<Ustr>,
    },

    Error {
        kind: UserMutationKind,
        id: Option<Ustr>,
        message: String,
    },
}

/// Outcome of the most recent mutation.
#[derive(Debug, Clone, Default)]
pub struct UserMutationCompute {
    pub state: UserMutationState,
}

impl UserMutationCompute {
    pub fn state(&self) -> &UserMutationState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, UserMutationState::InFlight { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            UserMutationState::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl State for UserMutationCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl Compute for UserMutationCompute {}

macro_rules! snapshot_input {
    ($ty:ty) => {
        impl State for $ty {
            fn as_any(&self) -> &dyn Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn Any {
                self
            }

            fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
                Some(Box::new(self.clone()))
            }
        }
    };
}

/// Input for `CreateUserCommand`.
#[derive(Debug, Clone, Default)]
pub struct CreateUserInput {
    pub fields: Option<UserFields>,
}

/// Input for `UpdateUserCommand`.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    pub id: Option<Ustr>,
    pub fields: Option<UserFields>,
}

/// Input for `DeleteUserCommand`.
#[derive(Debug, Clone, Default)]
pub struct DeleteUserInput {
    pub id: Option<Ustr>,
}

snapshot_input!(CreateUserInput);
snapshot_input!(UpdateUserInput);
snapshot_input!(DeleteUserInput);

const MISSING_INPUT: &str = "missing required input field";

/// Everything a mutation task needs, captured on the UI thread.
struct MutationJob {
    kind: UserMutationKind,
    id: Option<Ustr>,
    config: BusinessConfig,
    previous: UserListCompute,
}

impl MutationJob {
    fn capture(snap: &CommandSnapshot, kind: UserMutationKind, id: Option<Ustr>) -> Self {
        Self {
            kind,
            id,
            config: snap.state::<BusinessConfig>().clone(),
            previous: snap.compute::<UserListCompute>().clone(),
        }
    }

    fn set(&self, updater: &Updater, state: UserMutationState) {
        updater.set(UserMutationCompute { state });
    }

    fn fail(&self, updater: &Updater, message: impl Into<String>) {
        let message = message.into();
        error!("{} user {:?}: {message}", self.kind.as_str(), self.id);
        self.set(
            updater,
            UserMutationState::Error {
                kind: self.kind,
                id: self.id,
                message,
            },
        );
    }

    /// Publish the outcome of `result`, then refresh the list.
    async fn finish(self, updater: Updater, result: ApiResult<()>) {
        match result {
            Ok(()) => {
                info!("{} user {:?}: done", self.kind.as_str(), self.id);
                self.set(
                    &updater,
                    UserMutationState::Done {
                        kind: self.kind,
                        id: self.id,
                    },
                );
            }
            Err(err) => self.fail(&updater, err.to_string()),
        }

        reload_users(&updater, &self.previous, &self.config.collection_url()).await;
    }
}

/// POST the create form's fields.
#[derive(Debug, Default)]
pub struct CreateUserCommand;

impl Command for CreateUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let job = MutationJob::capture(&snap, UserMutationKind::Create, None);
        let fields = snap.state::<CreateUserInput>().fields.clone();

        Box::pin(async move {
            let Some(fields) = fields else {
                warn!("CreateUserCommand: {MISSING_INPUT}");
                job.fail(&updater, MISSING_INPUT);
                return;
            };

            job.set(
                &updater,
                UserMutationState::InFlight {
                    kind: job.kind,
                    id: None,
                },
            );
            let url = job.config.collection_url();
            info!("CreateUserCommand: POST {url}");
            let result = users_api::create_user(&url, &fields).await;
            job.finish(updater, result).await;
        })
    }
}

/// PUT the edit draft of one record.
#[derive(Debug, Default)]
pub struct UpdateUserCommand;

impl Command for UpdateUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let input = snap.state::<UpdateUserInput>().clone();
        let job = MutationJob::capture(&snap, UserMutationKind::Update, input.id);

        Box::pin(async move {
            let (Some(id), Some(fields)) = (input.id, input.fields) else {
                warn!("UpdateUserCommand: {MISSING_INPUT}");
                job.fail(&updater, MISSING_INPUT);
                return;
            };

            job.set(
                &updater,
                UserMutationState::InFlight {
                    kind: job.kind,
                    id: Some(id),
                },
            );
            let url = job.config.record_url(&id);
            info!("UpdateUserCommand: PUT {url}");
            let result = users_api::update_user(&url, &fields).await;
            job.finish(updater, result).await;
        })
    }
}

/// DELETE one record.
#[derive(Debug, Default)]
pub struct DeleteUserCommand;

impl Command for DeleteUserCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let id = snap.state::<DeleteUserInput>().id;
        let job = MutationJob::capture(&snap, UserMutationKind::Delete, id);

        Box::pin(async move {
            let Some(id) = id else {
                warn!("DeleteUserCommand: {MISSING_INPUT}");
                job.fail(&updater, MISSING_INPUT);
                return;
            };

            job.set(
                &updater,
                UserMutationState::InFlight {
                    kind: job.kind,
                    id: Some(id),
                },
            );
            let url = job.config.record_url(&id);
            info!("DeleteUserCommand: DELETE {url}");
            let result = users_api::delete_user(&url).await;
            job.finish(updater, result).await;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{TestContext, sample_user};

    fn fields(name: &str) -> UserFields {
        UserFields::new(name, "https://example.com/a.png").expect("valid fields")
    }

    #[tokio::test]
    async fn test_create_posts_then_refreshes() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_create_user(201, 1).await;
        test_ctx
            .mock_list_users(vec![sample_user("1", "Ada")])
            .await;

        test_ctx
            .ctx
            .update::<CreateUserInput>(|input| input.fields = Some(fields("Ada")));
        test_ctx.ctx.enqueue_command::<CreateUserCommand>();
        test_ctx.flush_and_wait().await;

        let mutation = test_ctx.ctx.compute::<UserMutationCompute>();
        assert_eq!(
            mutation.state(),
            &UserMutationState::Done {
                kind: UserMutationKind::Create,
                id: None
            }
        );
        let list = test_ctx.ctx.compute::<UserListCompute>();
        assert_eq!(list.users().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_update_still_refreshes() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_update_user("7", 500, 1).await;
        test_ctx
            .mock_list_users(vec![sample_user("7", "Unchanged")])
            .await;

        test_ctx.ctx.update::<UpdateUserInput>(|input| {
            input.id = Some(Ustr::from("7"));
            input.fields = Some(fields("Changed"));
        });
        test_ctx.ctx.enqueue_command::<UpdateUserCommand>();
        test_ctx.flush_and_wait().await;

        let mutation = test_ctx.ctx.compute::<UserMutationCompute>();
        assert_eq!(mutation.error_message(), Some("API returned status: 500"));
        let list = test_ctx.ctx.compute::<UserListCompute>();
        assert!(list.is_loaded());
        assert_eq!(list.find("7").map(|u| u.name.as_str()), Some("Unchanged"));
    }

    #[tokio::test]
    async fn test_delete_targets_record_url() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_delete_user("3", 200, 1).await;
        test_ctx.mock_list_users(Vec::new()).await;

        test_ctx
            .ctx
            .update::<DeleteUserInput>(|input| input.id = Some(Ustr::from("3")));
        test_ctx.ctx.enqueue_command::<DeleteUserCommand>();
        test_ctx.flush_and_wait().await;

        assert!(matches!(
            test_ctx.ctx.compute::<UserMutationCompute>().state(),
            UserMutationState::Done {
                kind: UserMutationKind::Delete,
                ..
            }
        ));
        assert!(test_ctx.ctx.compute::<UserListCompute>().users().is_empty());
    }

    #[tokio::test]
    async fn test_missing_input_sends_nothing() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_delete_user("3", 200, 0).await;
        test_ctx.mock_list_users_expect(Vec::new(), 0).await;

        test_ctx.ctx.enqueue_command::<DeleteUserCommand>();
        test_ctx.flush_and_wait().await;

        assert_eq!(
            test_ctx.ctx.compute::<UserMutationCompute>().error_message(),
            Some(MISSING_INPUT)
        );
    }
}
