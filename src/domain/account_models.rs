use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Status given to accounts created without one.
pub const DEFAULT_STATUS: &str = "active";

/// A stored row of the `accounts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    // ---
    /// Primary key.
    pub email: String,

    pub user: String,

    /// Never echoed back over the API.
    #[serde(skip_serializing, default)]
    pub password: Option<String>,

    pub token: String,

    /// Free-form usage quota, stored verbatim.
    pub usage_limit: Option<String>,

    /// Creation time as `YYYY-MM-DD HH:MM:SS` (UTC).
    pub created_at: Option<String>,

    pub status: String,

    /// Millisecond Unix timestamp, indexed for ordering.
    pub id: i64,
}

/// Payload for inserting an account.
///
/// `status`, `id` and `created_at` are filled in by [`NewAccount::into_account`]
/// when the caller leaves them out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAccount {
    // ---
    pub email: String,
    pub user: String,
    #[serde(default)]
    pub password: Option<String>,
    pub token: String,
    #[serde(default)]
    pub usage_limit: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

impl NewAccount {
    // ---
    pub fn new(email: impl Into<String>, user: impl Into<String>, token: impl Into<String>) -> Self {
        // ---
        Self {
            email: email.into(),
            user: user.into(),
            token: token.into(),
            ..Self::default()
        }
    }

    /// Resolve defaults and produce the row that will be inserted.
    pub fn into_account(self) -> Account {
        // ---
        let now = Utc::now();

        Account {
            email: self.email,
            user: self.user,
            password: self.password,
            token: self.token,
            usage_limit: self.usage_limit,
            created_at: self
                .created_at
                .or_else(|| Some(now.format("%Y-%m-%d %H:%M:%S").to_string())),
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            id: self.id.unwrap_or_else(|| now.timestamp_millis()),
        }
    }
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountUpdate {
    // ---
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub usage_limit: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl AccountUpdate {
    // ---
    pub fn is_empty(&self) -> bool {
        // ---
        self.user.is_none()
            && self.password.is_none()
            && self.token.is_none()
            && self.usage_limit.is_none()
            && self.status.is_none()
    }

    /// Merge the changes onto an existing row.
    pub fn apply(self, account: &mut Account) {
        // ---
        if let Some(user) = self.user {
            account.user = user;
        }
        if let Some(password) = self.password {
            account.password = Some(password);
        }
        if let Some(token) = self.token {
            account.token = token;
        }
        if let Some(usage_limit) = self.usage_limit {
            account.usage_limit = Some(usage_limit);
        }
        if let Some(status) = self.status {
            account.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn new_account_fills_defaults() {
        // ---
        let before = Utc::now().timestamp_millis();
        let account = NewAccount::new("bilbo@shire.me", "bilbo", "tok-1").into_account();
        let after = Utc::now().timestamp_millis();

        assert_eq!(account.status, DEFAULT_STATUS);
        assert!(account.id >= before && account.id <= after);
        assert_eq!(account.created_at.as_deref().map(str::len), Some(19));
        assert!(account.password.is_none());
    }

    #[test]
    fn new_account_keeps_explicit_values() {
        // ---
        let account = NewAccount {
            status: Some("disabled".to_string()),
            id: Some(42),
            created_at: Some("2024-01-01 00:00:00".to_string()),
            ..NewAccount::new("frodo@shire.me", "frodo", "tok-2")
        }
        .into_account();

        assert_eq!(account.status, "disabled");
        assert_eq!(account.id, 42);
        assert_eq!(account.created_at.as_deref(), Some("2024-01-01 00:00:00"));
    }

    #[test]
    fn update_only_touches_present_fields() {
        // ---
        let mut account = NewAccount::new("sam@shire.me", "sam", "tok-3").into_account();
        let changes = AccountUpdate {
            token: Some("tok-4".to_string()),
            status: Some("banned".to_string()),
            ..AccountUpdate::default()
        };
        assert!(!changes.is_empty());

        changes.apply(&mut account);

        assert_eq!(account.user, "sam");
        assert_eq!(account.token, "tok-4");
        assert_eq!(account.status, "banned");
        assert!(AccountUpdate::default().is_empty());
    }

    #[test]
    fn password_is_not_serialized() {
        // ---
        let account = NewAccount {
            password: Some("hunter2".to_string()),
            ..NewAccount::new("pippin@shire.me", "pippin", "tok-5")
        }
        .into_account();

        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "pippin@shire.me");
    }
}
