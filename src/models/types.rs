use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::blocks::Block;

/// 页面标识
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 落地页聚合根
///
/// `body` 是有序的区块流，顺序即展示顺序，允许为空。
/// 区块由页面独占，页面删除时区块随之消失。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingPage {
    /// 页面标识
    pub id: PageId,
    /// 页面标题
    pub title: String,
    /// URL 别名
    pub slug: String,
    /// 创建时间
    pub created: DateTime<Utc>,
    /// 更新时间
    pub updated: Option<DateTime<Utc>>,
    /// 区块流
    #[serde(default)]
    pub body: Vec<Block>,
}

/// 页面列表项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSummary {
    pub id: PageId,
    pub title: String,
    pub slug: String,
    /// 区块数量
    pub blocks: usize,
}

impl From<&LandingPage> for PageSummary {
    fn from(page: &LandingPage) -> Self {
        Self {
            id: page.id,
            title: page.title.clone(),
            slug: page.slug.clone(),
            blocks: page.body.len(),
        }
    }
}

// -------------------------------
// 关系型分区记录
// -------------------------------
// 以下七张分区表与区块流是同一内容的两套独立表示，互不派生、互不同步。
// 每条记录通过 page_id 归属唯一页面，页面删除时级联删除。

/// 首屏分区，每个页面最多一条
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSection {
    pub page_id: PageId,
    pub title: String,
    pub subtitle: Option<String>,
    pub background_image: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
}

/// 统计数字
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub page_id: PageId,
    pub value: String,
    pub label: String,
}

/// 功能特性
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub page_id: PageId,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
}

/// 产品优势
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benefit {
    pub page_id: PageId,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
}

/// 用户评价
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub page_id: PageId,
    pub name: String,
    pub role: Option<String>,
    pub content: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    5
}

/// 价格方案
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPlan {
    pub page_id: PageId,
    pub name: String,
    pub price: String,
    /// 方案包含的特性说明，自由文本
    pub features: String,
    #[serde(default)]
    pub most_popular: bool,
}

/// 行动号召分区，每个页面最多一条
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaSection {
    pub page_id: PageId,
    pub title: String,
    pub subtitle: Option<String>,
    pub cta_text: String,
    pub cta_link: String,
}
