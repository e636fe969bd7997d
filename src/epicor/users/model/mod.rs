use serde::Serialize;

/// User identifier as understood by the ERP `UserFile` business object.
pub type UserId = String;

/// One row of an employee file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
}

impl Employee {
    /// Creates a new employee record from its two name fields.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display name sent to the ERP: first and last name joined by a space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload creating a new `UserFile` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUserFile {
    #[serde(rename = "UserID")]
    pub user_id: UserId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "EMailAddress")]
    pub email_address: String,
}

/// Payload disabling an existing `UserFile` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisabledUserFile {
    #[serde(rename = "UserID")]
    pub user_id: UserId,
    #[serde(rename = "UserDisabled")]
    pub user_disabled: bool,
}

impl DisabledUserFile {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            user_disabled: true,
        }
    }
}
