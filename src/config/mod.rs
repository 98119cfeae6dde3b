use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed application defaults; no flags, files or env vars feed into this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub default_url: String,
    pub default_field_name: String,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "灵活 Temp 服务测试客户端".to_string(),
            window_size: [500.0, 380.0],
            default_url: "http://localhost:5000/ypsl".to_string(),
            default_field_name: "ypxh".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}
