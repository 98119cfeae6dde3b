use serde::{Deserialize, Serialize};

/// One submission of the form; built fresh each time and dropped once the
/// response panel is rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub target_url: String,
    pub field_name: String,
    pub field_value: String,
}

impl QueryRequest {
    pub fn from_form(url: &str, field_name: &str, field_value: &str) -> Self {
        Self {
            target_url: url.trim().to_string(),
            field_name: field_name.trim().to_string(),
            field_value: field_value.trim().to_string(),
        }
    }

    /// 請求體固定為單鍵 JSON 對象
    pub fn payload(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert(
            self.field_name.clone(),
            serde_json::Value::String(self.field_value.clone()),
        );
        serde_json::Value::Object(body)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub status_code: u16,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_form_trims_inputs() {
        let request = QueryRequest::from_form(" http://localhost:5000/ypsl ", " ypxh ", " A-001 ");
        assert_eq!(request.target_url, "http://localhost:5000/ypsl");
        assert_eq!(request.field_name, "ypxh");
        assert_eq!(request.field_value, "A-001");
    }

    #[test]
    fn test_payload_is_single_key_object() {
        let request = QueryRequest::from_form("http://localhost:5000/ypsl", "ypxh", "A-001");
        assert_eq!(request.payload(), serde_json::json!({"ypxh": "A-001"}));
    }
}
