use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 单个字段的校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// 字段路径，例如 `testimonials[1].rating`
    pub field: String,
    /// 错误描述
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 区块校验错误，收集所有无效字段而不是只报告第一个
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("区块校验失败: {} 个字段无效", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// 是否包含指定字段的错误
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}
