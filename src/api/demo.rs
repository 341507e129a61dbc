//! 主题演示接口
//!
//! 为演示页面提供固定的 JSON 数据，图标为内联 SVG 标记字符串。

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// 演示条目 {icon, title, description}，icon 为标记字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoEntry {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl DemoEntry {
    fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

const SVG_MOON: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24' fill='none' stroke='currentColor' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'><path d='M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z'></path></svg>";
const SVG_INFO: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24' fill='none' stroke='currentColor' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'><circle cx='12' cy='12' r='10'></circle><line x1='12' y1='8' x2='12' y2='12'></line><line x1='12' y1='16' x2='12.01' y2='16'></line></svg>";
const SVG_USERS: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24' fill='none' stroke='currentColor' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'><path d='M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2'></path><circle cx='9' cy='7' r='4'></circle><path d='M23 21v-2a4 4 0 0 0-3-3.87'></path><path d='M16 3.13a4 4 0 0 1 0 7.75'></path></svg>";
const SVG_ACTIVITY: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24' fill='none' stroke='currentColor' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'><polyline points='22 12 18 12 15 21 9 3 6 12 2 12'></polyline></svg>";
const SVG_SHIELD: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24' fill='none' stroke='currentColor' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'><path d='M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z'></path></svg>";
const SVG_HELP: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24' fill='none' stroke='currentColor' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'><circle cx='12' cy='12' r='10'></circle><path d='M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3'></path><line x1='12' y1='17' x2='12.01' y2='17'></line></svg>";
const SVG_COFFEE: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24' fill='none' stroke='currentColor' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'><path d='M18 8h1a4 4 0 0 1 0 8h-1'></path><path d='M2 8h16v9a4 4 0 0 1-4 4H6a4 4 0 0 1-4-4V8z'></path><line x1='6' y1='1' x2='6' y2='4'></line><line x1='10' y1='1' x2='10' y2='4'></line><line x1='14' y1='1' x2='14' y2='4'></line></svg>";
const SVG_STAR: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24' fill='none' stroke='currentColor' stroke-width='2' stroke-linecap='round' stroke-linejoin='round'><polygon points='12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2'></polygon></svg>";

/// 弹窗演示内容
const MODAL_CONTENT: &str = "
    <h4 class='text-xl font-semibold mb-4'>Modal Content</h4>
    <p class='mb-4'>This content was loaded dynamically via AJAX. The modal system supports:</p>
    <ul class='list-disc pl-6 mb-4'>
        <li>Dynamic content loading</li>
        <li>Multiple close methods</li>
        <li>Keyboard navigation</li>
        <li>Responsive design</li>
    </ul>
    <p>Try closing this modal by clicking the X, the Close button, clicking outside, or pressing Escape.</p>
    ";

/// 演示功能清单，固定 3 条
pub fn demo_features() -> Vec<DemoEntry> {
    vec![
        DemoEntry::new(
            SVG_MOON,
            "Dark/Light Theme",
            "Seamlessly toggle between dark and light themes with smooth transitions.",
        ),
        DemoEntry::new(
            SVG_INFO,
            "Dynamic Loading",
            "Load content dynamically via AJAX with retry logic and error handling.",
        ),
        DemoEntry::new(
            SVG_USERS,
            "Responsive Design",
            "Fully responsive design that works on all device sizes.",
        ),
    ]
}

/// 演示优势清单，固定 3 条
pub fn demo_benefits() -> Vec<DemoEntry> {
    vec![
        DemoEntry::new(
            SVG_ACTIVITY,
            "Improved Performance",
            "Optimized code with efficient loading and caching strategies.",
        ),
        DemoEntry::new(
            SVG_SHIELD,
            "Enhanced Security",
            "Built-in CSRF protection and secure data handling.",
        ),
        DemoEntry::new(
            SVG_HELP,
            "Easy Customization",
            "Simple to customize and extend with your own styles and functionality.",
        ),
    ]
}

/// 演示统计清单，固定 3 条
pub fn demo_stats() -> Vec<DemoEntry> {
    vec![
        DemoEntry::new(SVG_COFFEE, "99.9% Uptime", "Reliable performance with minimal downtime."),
        DemoEntry::new(SVG_USERS, "10K+ Users", "Trusted by thousands of satisfied users."),
        DemoEntry::new(SVG_STAR, "4.9 Rating", "Highly rated by our user community."),
    ]
}

/// GET /demo/features
pub async fn features() -> Json<Vec<DemoEntry>> {
    Json(demo_features())
}

/// GET /demo/benefits
pub async fn benefits() -> Json<Vec<DemoEntry>> {
    Json(demo_benefits())
}

/// GET /demo/stats
pub async fn stats() -> Json<Vec<DemoEntry>> {
    Json(demo_stats())
}

/// GET /demo/modal-content
pub async fn modal_content() -> Json<Value> {
    Json(json!({ "content": MODAL_CONTENT }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_lists_have_three_entries() {
        for list in [demo_features(), demo_benefits(), demo_stats()] {
            assert_eq!(list.len(), 3);
            for entry in &list {
                assert!(entry.icon.starts_with("<svg"));
                assert!(!entry.title.is_empty());
                assert!(!entry.description.is_empty());
            }
        }
    }

    #[tokio::test]
    async fn test_modal_content_shape() {
        let Json(value) = modal_content().await;
        let content = value["content"].as_str().unwrap();
        assert!(content.contains("Modal Content"));
    }
}
