//! Test utilities for business layer testing with mock servers.
//!
//! Sets up a `wiremock` server standing in for the users collection and a
//! `StateCtx` pointed at it, so commands run end to end without the real API.
//!
//! # Example
//!
//! ```ignore
//! let mut test_ctx = TestContext::new().await;
//! test_ctx.mock_list_users(vec![sample_user("1", "Ada")]).await;
//!
//! test_ctx.ctx.enqueue_command::<RefreshUsersCommand>();
//! test_ctx.flush_and_wait().await;
//!
//! let compute = test_ctx.ctx.compute::<UserListCompute>();
//! ```

use std::time::Duration;

use roster_states::StateCtx;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use crate::{BusinessConfig, USERS_COLLECTION_PATH, UserRecord, build_state_ctx};

/// Test context that holds a mock server and a configured StateCtx.
pub struct TestContext {
    pub mock_server: MockServer,
    /// Context whose `BusinessConfig` targets `mock_server`.
    pub ctx: StateCtx,
}

impl TestContext {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let ctx = build_state_ctx(BusinessConfig::new(mock_server.uri()));

        Self { mock_server, ctx }
    }

    /// Flush all pending commands and wait for async tasks to complete.
    ///
    /// Syncs after every finished task so intermediate updates are applied in order.
    pub async fn flush_and_wait(&mut self) {
        self.ctx.sync_computes();
        self.ctx.flush_commands();

        let timeout = Duration::from_secs(5);
        let start = std::time::Instant::now();

        while self.ctx.task_count() > 0 {
            if start.elapsed() > timeout {
                panic!(
                    "Timed out waiting for pending tasks ({} still in JoinSet)",
                    self.ctx.task_count()
                );
            }

            if self.ctx.task_set_mut().join_next().await.is_some() {
                self.ctx.sync_computes();
            }
        }

        self.ctx.sync_computes();
    }

    fn record_path(id: &str) -> String {
        format!("{USERS_COLLECTION_PATH}/{id}")
    }

    // =========================================================================
    // Mock endpoint helpers
    // =========================================================================

    pub async fn mock_list_users(&self, users: Vec<UserRecord>) {
        Mock::given(method("GET"))
            .and(path(USERS_COLLECTION_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(users))
            .mount(&self.mock_server)
            .await;
    }

    /// Like `mock_list_users`, asserting the number of GETs when the server drops.
    pub async fn mock_list_users_expect(&self, users: Vec<UserRecord>, times: u64) {
        Mock::given(method("GET"))
            .and(path(USERS_COLLECTION_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(users))
            .expect(times)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_list_users_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(USERS_COLLECTION_PATH))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_create_user(&self, status: u16, times: u64) {
        Mock::given(method("POST"))
            .and(path(USERS_COLLECTION_PATH))
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_update_user(&self, id: &str, status: u16, times: u64) {
        Mock::given(method("PUT"))
            .and(path(Self::record_path(id)))
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_delete_user(&self, id: &str, status: u16, times: u64) {
        Mock::given(method("DELETE"))
            .and(path(Self::record_path(id)))
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(&self.mock_server)
            .await;
    }
}

/// A record as the remote returns it, with a fixed creation time.
pub fn sample_user(id: &str, name: &str) -> UserRecord {
    UserRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        avatar: format!("https://example.com/{id}.png"),
        created_at: chrono::DateTime::from_timestamp(1_755_324_612, 0),
    }
}
