use crate::core::model::QueryResponse;
use crate::utils::error::TesterError;

/// 狀態碼前綴加響應體；能解析成 JSON 就美化輸出，否則原樣顯示
pub fn render_response(response: &QueryResponse) -> String {
    let body = match serde_json::from_str::<serde_json::Value>(&response.body) {
        Ok(value) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| response.body.clone())
        }
        Err(_) => response.body.clone(),
    };

    format!("状态码: {}\n响应内容:\n{}", response.status_code, body)
}

pub fn render_error(error: &TesterError) -> String {
    format!("❌ {}", error)
}
