//! Login audit entity recording who signed in from where.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client metadata captured at the HTTP boundary for each login attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginContext {
    /// Remote address, when known
    pub ip: Option<String>,

    /// Browser name (`X-Browser`, else `User-Agent`)
    pub browser: Option<String>,

    /// Operating system (`X-OS`)
    pub os: Option<String>,

    /// Device description (`X-Device`)
    pub device: Option<String>,
}

/// One line of the login audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginAuditEntry {
    pub username: String,
    pub ip: Option<String>,
    pub browser: Option<String>,
    pub os: Option<String>,
    pub device: Option<String>,

    /// Whether the credentials were accepted
    pub success: bool,

    pub timestamp: DateTime<Utc>,
}

impl LoginAuditEntry {
    /// Build an entry stamped with the current time
    pub fn new(username: impl Into<String>, context: &LoginContext, success: bool) -> Self {
        Self {
            username: username.into(),
            ip: context.ip.clone(),
            browser: context.browser.clone(),
            os: context.os.clone(),
            device: context.device.clone(),
            success,
            timestamp: Utc::now(),
        }
    }
}
