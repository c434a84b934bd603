use roster_business::{BusinessConfig, build_state_ctx};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self {
            ctx: build_state_ctx(BusinessConfig::default()),
        }
    }
}

impl State {
    /// State whose remote collection lives under `base_url`, e.g. a mock server.
    pub fn test(base_url: String) -> Self {
        Self {
            ctx: build_state_ctx(BusinessConfig::new(base_url)),
        }
    }
}
