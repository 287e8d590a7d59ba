use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Permission groups a user can hold within a merchant store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Group {
    Superadmin,
    Admin,
    AdminCatalogue,
    AdminStore,
    AdminOrder,
    AdminContent,
    AdminRetail,
    Shipping,
    Customer,
}

impl Group {
    pub const ALL: [Group; 9] = [
        Group::Superadmin,
        Group::Admin,
        Group::AdminCatalogue,
        Group::AdminStore,
        Group::AdminOrder,
        Group::AdminContent,
        Group::AdminRetail,
        Group::Shipping,
        Group::Customer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Superadmin => "SUPERADMIN",
            Group::Admin => "ADMIN",
            Group::AdminCatalogue => "ADMIN_CATALOGUE",
            Group::AdminStore => "ADMIN_STORE",
            Group::AdminOrder => "ADMIN_ORDER",
            Group::AdminContent => "ADMIN_CONTENT",
            Group::AdminRetail => "ADMIN_RETAIL",
            Group::Shipping => "SHIPPING",
            Group::Customer => "CUSTOMER",
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGroup(pub String);

impl std::fmt::Display for UnknownGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown group: {}", self.0)
    }
}

impl std::error::Error for UnknownGroup {}

impl FromStr for Group {
    type Err = UnknownGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Group::ALL
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownGroup(s.to_string()))
    }
}
