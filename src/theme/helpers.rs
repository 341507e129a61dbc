//! 模板辅助函数
//!
//! 输出固定的标记片段，无状态、无校验、不会失败。

use crate::utils::ensure_trailing_slash;

/// 主题样式表的引入标签
pub fn theme_css(static_url: &str) -> String {
    format!(
        r#"<link rel="stylesheet" type="text/css" href="{}css/advanced_theme.css">"#,
        ensure_trailing_slash(static_url)
    )
}

/// 主题脚本的引入标签
pub fn theme_js(static_url: &str) -> String {
    format!(
        r#"<script src="{}js/advanced_theme.js"></script>"#,
        ensure_trailing_slash(static_url)
    )
}

/// 主题切换按钮
pub fn theme_toggle_button() -> &'static str {
    r#"
        <button class="theme-toggle" id="theme-toggle" aria-label="Toggle theme">
            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                <path id="theme-toggle-icon" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z" />
            </svg>
        </button>
    "#
}

/// 返回顶部按钮
pub fn back_to_top_button() -> &'static str {
    r#"
        <button class="back-to-top" aria-label="Back to top">
            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 15l7-7 7 7" />
            </svg>
        </button>
    "#
}

/// body 元素上的主题类属性
pub fn theme_classes() -> &'static str {
    r#"class="theme-plugin""#
}
