use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// What the provider hands back for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendConfirmation {
    pub id: String,
    #[serde(rename = "message")]
    pub response: String,
}
