use std::fmt;

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::domain::config::ServerConfig;

/// One entry of the persisted request history
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RequestRecord {
    pub ip: String,
    pub time: DateTime<FixedOffset>,
    pub content: String,
}

impl RequestRecord {
    /// Record for a request from `ip`, stamped with the current local time
    pub fn visit(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            time: Local::now().fixed_offset(),
            content: ServerConfig::REQUEST_CONTENT.to_string(),
        }
    }
}

impl fmt::Display for RequestRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ":: {} - {} - {} ::",
            self.time.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.content,
            self.ip
        )
    }
}
