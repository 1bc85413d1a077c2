use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Placeholder returned in place of broker credentials on every read path.
pub const MASK: &str = "********";

/// Sentinel accepted by the `userType` filter meaning "no type filter".
pub const ALL_USER_TYPES: &str = "all";

#[derive(Debug, Serialize, Deserialize, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Superadmin,
    Admin,
    User,
}

impl UserType {
    pub const ALL: [UserType; 3] = [UserType::Superadmin, UserType::Admin, UserType::User];

    pub const fn as_str(self) -> &'static str {
        match self {
            UserType::Superadmin => "superadmin",
            UserType::Admin => "admin",
            UserType::User => "user",
        }
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        UserType::ALL
            .into_iter()
            .find(|user_type| user_type.as_str() == value)
            .ok_or_else(|| format!("userType must be one of: superadmin, admin, user (got {value:?})"))
    }
}

/// Stored broker connection profile. Never serialized directly; callers see
/// [`BrokerSettingsView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerProfile {
    pub broker_url: String,
    pub username: String,
    pub password: String,
    pub is_default: bool,
}

impl BrokerProfile {
    pub fn masked(&self) -> BrokerSettingsView {
        BrokerSettingsView {
            broker_url: self.broker_url.clone(),
            username: MASK.to_string(),
            password: MASK.to_string(),
            is_default: self.is_default,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BrokerSettingsView {
    pub broker_url: String,
    pub username: String,
    pub password: String,
    pub is_default: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrokerRequest {
    pub broker_url: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub admin_password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetBrokerRequest {
    #[serde(default)]
    pub admin_password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BrokerSettingsResponse {
    pub success: bool,
    pub message: String,
    pub data: BrokerSettingsView,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceTable {
    pub gasoline_price: f64,
    pub diesel_price: f64,
    pub electricity_price: f64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            gasoline_price: 58.5,
            diesel_price: 54.2,
            electricity_price: 7.8,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePricesRequest {
    pub gasoline_price: Option<f64>,
    pub diesel_price: Option<f64>,
    pub electricity_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub username: String,
    pub user_type: UserType,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub user_type: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub user_type: Option<String>,
}

/// Validated user fields ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub user_type: UserType,
}

/// Validated partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub user_type: Option<UserType>,
}

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    pub username: Option<String>,
    pub user_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserPage {
    pub data: Vec<UserRecord>,
    pub total: usize,
}
