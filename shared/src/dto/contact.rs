use serde::{Deserialize, Serialize};

/// Message typed into the contact page form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// True when every field is blank.
    pub fn is_blank(&self) -> bool {
        [&self.first_name, &self.last_name, &self.email, &self.message]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}
