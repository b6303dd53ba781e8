use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The authenticated account as returned by `GET me/`.
///
/// Fetched whole after every successful login, registration, and session
/// restore; cleared on logout. Never patched field-by-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_staff: bool,
}

impl User {
    /// Name to show in a header or greeting, falling back to the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Access/refresh pair returned by `POST token/`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Payload for `POST register/`. The backend enforces username/email
/// uniqueness, the password policy, and the minimum-age check.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: NaiveDate,
}
