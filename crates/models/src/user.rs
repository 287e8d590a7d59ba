use serde::{Deserialize, Serialize};

/// Identity of the caller once authentication succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_name: String,
}

impl AuthenticatedUser {
    /// Returns `None` for an empty or blank user name.
    pub fn new(user_name: impl Into<String>) -> Option<Self> {
        let user_name = user_name.into();
        if user_name.trim().is_empty() {
            None
        } else {
            Some(Self { user_name })
        }
    }
}

impl std::fmt::Display for AuthenticatedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.user_name)
    }
}
