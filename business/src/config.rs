use roster_states::State;
use std::any::Any;

/// Host of the remote users collection.
pub const DEFAULT_API_BASE_URL: &str = "https://68a04cea6e38a02c58184c4b.mockapi.io";

/// Path of the users collection below the API base URL.
pub const USERS_COLLECTION_PATH: &str = "/users/users";

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Full URL of the users collection, e.g. `https://host/users/users`.
    pub fn collection_url(&self) -> String {
        format!(
            "{}{USERS_COLLECTION_PATH}",
            self.api_base_url.trim_end_matches('/')
        )
    }

    /// URL of one record of the collection.
    pub fn record_url(&self, id: &str) -> String {
        format!("{}/{id}", self.collection_url())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl State for BusinessConfig {
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
