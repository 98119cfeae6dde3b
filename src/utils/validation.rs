use crate::utils::error::{Result, TesterError};

pub fn require_non_empty(prompt: String, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TesterError::MissingField(prompt));
    }
    Ok(())
}

/// 表單校驗順序與提示文字固定：地址、字段名、字段值
pub fn require_form_fields(url: &str, field_name: &str, field_value: &str) -> Result<()> {
    require_non_empty("请输入服务地址！".to_string(), url)?;
    require_non_empty("请输入参数字段名！".to_string(), field_name)?;
    require_non_empty(format!("请输入 {} 的值！", field_name.trim()), field_value)?;
    Ok(())
}
