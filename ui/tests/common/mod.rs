use std::time::Duration;

use egui_kittest::Harness;
use roster_business::{UserListController, UserListEvent};
use roster_states::StateCtx;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const COLLECTION: &str = "/users/users";

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    /// App whose collection GET answers with `users`.
    pub async fn new_app(users: serde_json::Value) -> Self {
        let mock_server = start_mock_server().await;
        Mock::given(method("GET"))
            .and(path(COLLECTION))
            .respond_with(ResponseTemplate::new(200).set_body_json(users))
            .mount(&mock_server)
            .await;

        Self::with_server(mock_server)
    }

    /// App whose collection GET fails with `status_code`.
    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        let mock_server = start_mock_server().await;
        Mock::given(method("GET"))
            .and(path(COLLECTION))
            .respond_with(ResponseTemplate::new(status_code))
            .mount(&mock_server)
            .await;

        Self::with_server(mock_server)
    }

    fn with_server(mock_server: MockServer) -> Self {
        let state = State::test(mock_server.uri());
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    pub fn ctx(&mut self) -> &mut StateCtx {
        &mut self.harness.state_mut().state_mut().ctx
    }

    /// Feed an event through the controller, as a widget would.
    #[allow(unused)]
    pub fn handle(&mut self, event: UserListEvent) {
        UserListController::handle(self.ctx(), event);
    }

    /// Run a frame, give spawned requests time to finish, then render the results.
    pub async fn settle(&mut self) {
        self.harness.step();
        tokio::time::sleep(Duration::from_millis(200)).await;
        for _ in 0..10 {
            self.harness.step();
        }
    }
}

async fn start_mock_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}

/// Records in the remote's wire format. Avatars are left empty so no image is fetched.
#[allow(unused)]
pub fn users_json() -> serde_json::Value {
    serde_json::json!([
        { "id": "1", "name": "Ada Lovelace", "avatar": "", "createdAt": "2025-08-16T06:10:12.000Z" },
        { "id": "2", "name": "Grace Hopper", "avatar": "", "createdAt": "not a date" }
    ])
}
