//! Wire types exchanged with the mail relay.

use serde::{Deserialize, Serialize};

/// Contact form fields as sent to the relay template.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
