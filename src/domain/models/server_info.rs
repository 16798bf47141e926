use serde::Serialize;

use crate::domain::config::ServerConfig;

/// Payload returned for every successful request
#[derive(Serialize, Debug, Clone)]
pub struct ServerInfo {
    pub status: String,
    pub hostname: String,
    pub host_ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_content: Option<String>,
}

impl ServerInfo {
    pub fn new(hostname: String, host_ip: String, other_content: Option<String>) -> Self {
        Self {
            status: ServerConfig::STATUS_OK.to_string(),
            hostname,
            host_ip,
            other_content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_other_content_omitted_when_none() {
        let info = ServerInfo::new("box".into(), "10.0.0.5".into(), None);
        let value: Value = serde_json::to_value(&info).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["status"], "ok");
        assert!(!obj.contains_key("other_content"));
    }

    #[test]
    fn test_empty_other_content_is_kept() {
        let info = ServerInfo::new("box".into(), "10.0.0.5".into(), Some(String::new()));
        let value: Value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["other_content"], "");
        assert_eq!(value.as_object().unwrap().len(), 4);
    }
}
