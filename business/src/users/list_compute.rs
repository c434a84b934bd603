//! Users list compute + refresh command.
//!
//! - `UserListCompute` caches the latest fetched records and the status of the last fetch.
//! - `RefreshUsersCommand` performs the GET and publishes through `Updater::set()`.
//!
//! Mutation commands reuse `reload_users` so every Create/Update/Delete ends with a
//! fresh list, whatever the mutation's outcome.

use std::any::Any;

use log::{error, info};
use roster_states::{Command, CommandFuture, CommandSnapshot, Compute, State, Updater};
use tokio_util::sync::CancellationToken;

use super::api as users_api;
use super::model::UserRecord;
use crate::BusinessConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UserListStatus {
    /// No fetch has been issued yet.
    #[default]
    Idle,

    Loading,

    Loaded,

    /// The last fetch failed; `users` still holds the previous snapshot.
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct UserListCompute {
    pub users: Vec<UserRecord>,
    pub status: UserListStatus,
}

impl UserListCompute {
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn find(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, UserListStatus::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.status, UserListStatus::Loaded)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            UserListStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    fn with_status(&self, status: UserListStatus) -> Self {
        Self {
            users: self.users.clone(),
            status,
        }
    }
}

impl State for UserListCompute {
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

impl Compute for UserListCompute {}

/// Fetch the whole collection and publish it, replacing whatever was shown.
pub(crate) async fn reload_users(
    updater: &Updater,
    previous: &UserListCompute,
    collection_url: &str,
) {
    updater.set(previous.with_status(UserListStatus::Loading));

    match users_api::list_users(collection_url).await {
        Ok(users) => {
            info!("RefreshUsersCommand: received {} users", users.len());
            updater.set(UserListCompute {
                users,
                status: UserListStatus::Loaded,
            });
        }
        Err(err) => {
            error!("RefreshUsersCommand: {err}");
            updater.set(previous.with_status(UserListStatus::Error(err.to_string())));
        }
    }
}

/// Manual-only command that re-fetches the users collection.
#[derive(Debug, Default)]
pub struct RefreshUsersCommand;

impl Command for RefreshUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let collection_url = snap.state::<BusinessConfig>().collection_url();
        let previous = snap.compute::<UserListCompute>().clone();

        Box::pin(async move {
            info!("RefreshUsersCommand: GET {collection_url}");
            reload_users(&updater, &previous, &collection_url).await;
        })
    }
}
