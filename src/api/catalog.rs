//! 静态内容目录
//!
//! 固定的功能/优势/统计清单，与页面存储无关，每次调用返回相同内容。

use axum::Json;
use serde::{Deserialize, Serialize};

/// 目录条目 {icon, title, description}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl CatalogEntry {
    fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// 统计条目 {value, label}，value 为数值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub value: u32,
    pub label: String,
}

/// 功能清单，固定 4 条
pub fn list_features() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "💡",
            "Innovative Solutions",
            "Cutting-edge HR technology to streamline your processes",
        ),
        CatalogEntry::new(
            "📊",
            "Data Analytics",
            "Gain valuable insights with our advanced analytics dashboard",
        ),
        CatalogEntry::new(
            "🔒",
            "Secure Platform",
            "Enterprise-grade security to protect your sensitive data",
        ),
        CatalogEntry::new(
            "📱",
            "Mobile Friendly",
            "Access HR tools anytime, anywhere on any device",
        ),
    ]
}

/// 优势清单，固定 4 条
pub fn list_benefits() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "⏱️",
            "Time Saving",
            "Automate repetitive tasks and focus on strategic initiatives",
        ),
        CatalogEntry::new(
            "💰",
            "Cost Effective",
            "Reduce operational costs with our efficient solutions",
        ),
        CatalogEntry::new(
            "👥",
            "Employee Satisfaction",
            "Improve workplace experience and boost engagement",
        ),
        CatalogEntry::new(
            "📈",
            "Performance Growth",
            "Track and enhance team productivity effectively",
        ),
    ]
}

/// 统计清单，固定 4 条
pub fn list_stats() -> Vec<StatEntry> {
    vec![
        StatEntry { value: 150, label: "Clients".to_string() },
        StatEntry { value: 98, label: "Satisfaction".to_string() },
        StatEntry { value: 24, label: "Countries".to_string() },
        StatEntry { value: 2500, label: "Employees".to_string() },
    ]
}

/// GET /api/features
pub async fn features() -> Json<Vec<CatalogEntry>> {
    Json(list_features())
}

/// GET /api/benefits
pub async fn benefits() -> Json<Vec<CatalogEntry>> {
    Json(list_benefits())
}

/// GET /api/stats
pub async fn stats() -> Json<Vec<StatEntry>> {
    Json(list_stats())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_are_fixed() {
        let features = list_features();
        assert_eq!(features.len(), 4);
        for entry in &features {
            assert!(!entry.icon.is_empty());
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty());
        }
        // 重复调用内容不变
        assert_eq!(features, list_features());
    }

    #[test]
    fn test_benefits_are_fixed() {
        let benefits = list_benefits();
        assert_eq!(benefits.len(), 4);
        assert_eq!(benefits, list_benefits());
    }

    #[test]
    fn test_stats_are_numeric() {
        let stats = list_stats();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats[0].value, 150);
        assert_eq!(stats[0].label, "Clients");
    }
}
