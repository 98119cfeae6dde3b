use crate::config::AppConfig;
use crate::core::model::QueryRequest;
use crate::utils::error::Result;
use crate::utils::validation;

pub const STATUS_IDLE: &str = "就绪";
pub const STATUS_SENDING: &str = "正在发送请求...";

/// Form and panel state owned by the UI thread. The in-flight flag doubles as
/// the submit gate: while set, the button stays disabled and no second
/// request can start.
#[derive(Debug)]
pub struct Session {
    pub url_input: String,
    pub field_name_input: String,
    pub field_value_input: String,
    pub result: String,
    pub status: String,
    pub warning: Option<String>,
    in_flight: bool,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            url_input: config.default_url.clone(),
            field_name_input: config.default_field_name.clone(),
            field_value_input: String::new(),
            result: String::new(),
            status: STATUS_IDLE.to_string(),
            warning: None,
            in_flight: false,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// 校驗通過則鎖定提交並返回待發送的請求；否則彈出警告、不發請求
    pub fn begin_submit(&mut self) -> Option<QueryRequest> {
        match self.build_request() {
            Ok(request) => {
                self.in_flight = true;
                self.status = STATUS_SENDING.to_string();
                Some(request)
            }
            Err(e) => {
                tracing::warn!("Form validation failed ({}): {}", e.category(), e);
                self.warning = Some(e.to_string());
                None
            }
        }
    }

    fn build_request(&self) -> Result<QueryRequest> {
        validation::require_form_fields(
            &self.url_input,
            &self.field_name_input,
            &self.field_value_input,
        )?;
        Ok(QueryRequest::from_form(
            &self.url_input,
            &self.field_name_input,
            &self.field_value_input,
        ))
    }

    /// Overwrites the result buffer and reopens the submit gate.
    pub fn finish(&mut self, panel: String) {
        self.result = panel;
        self.status = STATUS_IDLE.to_string();
        self.in_flight = false;
    }

    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_session() -> Session {
        let mut session = Session::new(&AppConfig::default());
        session.field_value_input = "A-001".to_string();
        session
    }

    #[test]
    fn test_new_session_is_idle_with_seeded_form() {
        let session = Session::new(&AppConfig::default());
        assert_eq!(session.url_input, "http://localhost:5000/ypsl");
        assert_eq!(session.field_name_input, "ypxh");
        assert_eq!(session.status, STATUS_IDLE);
        assert!(session.result.is_empty());
        assert!(!session.is_busy());
    }

    #[test]
    fn test_begin_submit_locks_the_gate() {
        let mut session = filled_session();
        let request = session.begin_submit().unwrap();
        assert_eq!(request.payload(), serde_json::json!({"ypxh": "A-001"}));
        assert!(session.is_busy());
        assert_eq!(session.status, STATUS_SENDING);
        assert!(session.warning.is_none());
    }

    #[test]
    fn test_blank_value_warns_and_keeps_gate_open() {
        let mut session = Session::new(&AppConfig::default());
        assert!(session.begin_submit().is_none());
        assert_eq!(session.warning.as_deref(), Some("请输入 ypxh 的值！"));
        assert!(!session.is_busy());
        assert_eq!(session.status, STATUS_IDLE);
    }

    #[test]
    fn test_finish_overwrites_result_and_resets() {
        let mut session = filled_session();
        session.result = "old".to_string();
        session.begin_submit().unwrap();

        session.finish("状态码: 200\n响应内容:\n{}".to_string());
        assert_eq!(session.result, "状态码: 200\n响应内容:\n{}");
        assert_eq!(session.status, STATUS_IDLE);
        assert!(!session.is_busy());
    }
}
