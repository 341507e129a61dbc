//! 主题偏好接口
//!
//! 只确认不保存：请求体里的主题名会出现在确认消息中，但不会写入任何
//! 存储，调用方不能依赖该偏好在本次响应之后继续存在。

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

/// 主题接口响应 {success, message}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/theme
///
/// 请求体必须是 JSON；`theme` 字段缺省时取 `"light"`。
/// 非法 JSON 返回 400 和通用错误消息，不做任何部分处理。
pub async fn set_theme(body: String) -> (StatusCode, Json<ThemeResponse>) {
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(data) => {
            let theme = data
                .get("theme")
                .and_then(|v| v.as_str())
                .unwrap_or("light");
            (
                StatusCode::OK,
                Json(ThemeResponse {
                    success: true,
                    message: format!("Theme set to {}", theme),
                }),
            )
        }
        Err(_) => (
            StatusCode::BAD_REQUEST,
            Json(ThemeResponse {
                success: false,
                message: "Invalid JSON".to_string(),
            }),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_theme_dark() {
        let (status, Json(resp)) = set_theme(r#"{"theme":"dark"}"#.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(resp.success);
        assert_eq!(resp.message, "Theme set to dark");
    }

    #[tokio::test]
    async fn test_set_theme_invalid_json() {
        let (status, Json(resp)) = set_theme("not json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!resp.success);
        assert_eq!(resp.message, "Invalid JSON");
    }

    #[tokio::test]
    async fn test_set_theme_defaults_to_light() {
        // theme 字段缺省时取默认值
        let (status, Json(resp)) = set_theme("{}".to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(resp.success);
        assert_eq!(resp.message, "Theme set to light");
    }
}
