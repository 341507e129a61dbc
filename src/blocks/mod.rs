use serde::{Deserialize, Serialize};
use url::Url;

mod error;

pub use error::{FieldError, ValidationError};

/// 页面内容区块，七种区块类型的和类型
///
/// 序列化时使用 `type` 字段作为区块类型标记，保证流在 YAML/JSON
/// 之间往返时类型名稳定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Hero(HeroBlock),
    StatsSection(StatsSectionBlock),
    FeaturesSection(FeaturesSectionBlock),
    BenefitsSection(BenefitsSectionBlock),
    TestimonialsSection(TestimonialsSectionBlock),
    PricingSection(PricingSectionBlock),
    CtaSection(CtaSectionBlock),
}

impl Block {
    /// 校验区块的所有字段，返回包含全部无效字段的错误
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();
        match self {
            Block::Hero(b) => b.collect_errors(&mut errors),
            Block::StatsSection(b) => b.collect_errors(&mut errors),
            Block::FeaturesSection(b) => b.collect_errors(&mut errors),
            Block::BenefitsSection(b) => b.collect_errors(&mut errors),
            Block::TestimonialsSection(b) => b.collect_errors(&mut errors),
            Block::PricingSection(b) => b.collect_errors(&mut errors),
            Block::CtaSection(b) => b.collect_errors(&mut errors),
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }

    /// 区块类型对应的模板路径
    pub fn template(&self) -> &'static str {
        match self {
            Block::Hero(_) => "blocks/hero_block.html",
            Block::StatsSection(_) => "landing/blocks/stats_section.html",
            Block::FeaturesSection(_) => "landing/blocks/features_section.html",
            Block::BenefitsSection(_) => "blocks/benefits_section.html",
            Block::TestimonialsSection(_) => "blocks/testimonials_section.html",
            Block::PricingSection(_) => "blocks/pricing_section.html",
            Block::CtaSection(_) => "blocks/cta_section.html",
        }
    }

    /// 后台展示用的区块名称
    pub fn label(&self) -> &'static str {
        match self {
            Block::Hero(_) => "Hero Section",
            Block::StatsSection(_) => "Stats Section",
            Block::FeaturesSection(_) => "Features Section",
            Block::BenefitsSection(_) => "Benefits Section",
            Block::TestimonialsSection(_) => "Testimonials Section",
            Block::PricingSection(_) => "Pricing Section",
            Block::CtaSection(_) => "CTA Section",
        }
    }

    /// 后台展示用的区块图标名
    pub fn icon(&self) -> &'static str {
        match self {
            Block::Hero(_) => "image",
            Block::StatsSection(_) => "placeholder",
            Block::FeaturesSection(_) => "cogs",
            Block::BenefitsSection(_) => "plus",
            Block::TestimonialsSection(_) => "user",
            Block::PricingSection(_) => "money",
            Block::CtaSection(_) => "placeholder",
        }
    }
}

/// 首屏区块
///
/// 反序列化时缺失的字段取默认值，留给校验阶段统一报告，
/// 这样一次调用就能枚举出所有无效字段。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroBlock {
    /// 徽章文字
    pub badge_text: String,
    /// 徽章图标名
    pub badge_icon: String,
    /// 主标题
    pub headline: String,
    /// 描述文字
    pub description: String,
    pub primary_cta_text: String,
    pub primary_cta_link: String,
    pub secondary_cta_text: Option<String>,
    pub secondary_cta_link: Option<String>,
    /// 首屏配图引用
    pub hero_image: String,
    /// 是否显示 KPI 卡片
    #[serde(default = "default_true")]
    pub show_kpi_card: bool,
    pub kpi_value: Option<String>,
    pub kpi_label: Option<String>,
}

impl Default for HeroBlock {
    fn default() -> Self {
        Self {
            badge_text: String::new(),
            badge_icon: String::new(),
            headline: String::new(),
            description: String::new(),
            primary_cta_text: String::new(),
            primary_cta_link: String::new(),
            secondary_cta_text: None,
            secondary_cta_link: None,
            hero_image: String::new(),
            show_kpi_card: true,
            kpi_value: None,
            kpi_label: None,
        }
    }
}

impl HeroBlock {
    fn collect_errors(&self, out: &mut Vec<FieldError>) {
        require(out, "badge_text", &self.badge_text);
        require(out, "badge_icon", &self.badge_icon);
        require(out, "headline", &self.headline);
        require(out, "description", &self.description);
        require(out, "primary_cta_text", &self.primary_cta_text);
        require_url(out, "primary_cta_link", &self.primary_cta_link);
        optional_url(out, "secondary_cta_link", self.secondary_cta_link.as_deref());
        require(out, "hero_image", &self.hero_image);
    }
}

/// 数据统计条目 {value, label}
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatItem {
    pub value: String,
    pub label: String,
}

/// 数据统计区块
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSectionBlock {
    /// 统计条目列表，允许为空
    #[serde(default)]
    pub stats: Vec<StatItem>,
}

impl StatsSectionBlock {
    fn collect_errors(&self, out: &mut Vec<FieldError>) {
        for (i, stat) in self.stats.iter().enumerate() {
            require(out, &format!("stats[{}].value", i), &stat.value);
            require(out, &format!("stats[{}].label", i), &stat.label);
        }
    }
}

/// 功能特性条目
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    pub icon: String,
    pub title: String,
    pub description: String,
    /// 用于图标着色的 CSS 类名
    pub color_class: String,
}

/// 功能特性区块
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesSectionBlock {
    #[serde(default)]
    pub features: Vec<FeatureItem>,
}

impl FeaturesSectionBlock {
    fn collect_errors(&self, out: &mut Vec<FieldError>) {
        for (i, feature) in self.features.iter().enumerate() {
            require(out, &format!("features[{}].icon", i), &feature.icon);
            require(out, &format!("features[{}].title", i), &feature.title);
            require(out, &format!("features[{}].description", i), &feature.description);
            require(out, &format!("features[{}].color_class", i), &feature.color_class);
        }
    }
}

/// 产品优势条目
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenefitItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// 产品优势区块，除列表外还带配图和标题
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenefitsSectionBlock {
    #[serde(default)]
    pub benefits: Vec<BenefitItem>,
    pub image: String,
    pub headline: String,
    pub description: String,
}

impl BenefitsSectionBlock {
    fn collect_errors(&self, out: &mut Vec<FieldError>) {
        for (i, benefit) in self.benefits.iter().enumerate() {
            require(out, &format!("benefits[{}].icon", i), &benefit.icon);
            require(out, &format!("benefits[{}].title", i), &benefit.title);
            require(out, &format!("benefits[{}].description", i), &benefit.description);
        }
        require(out, "image", &self.image);
        require(out, "headline", &self.headline);
        require(out, "description", &self.description);
    }
}

/// 用户评价条目，评分必须在 1 到 5 之间
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialItem {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
}

impl Default for TestimonialItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            content: String::new(),
            rating: 5,
        }
    }
}

/// 用户评价区块
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsSectionBlock {
    #[serde(default)]
    pub testimonials: Vec<TestimonialItem>,
}

impl TestimonialsSectionBlock {
    fn collect_errors(&self, out: &mut Vec<FieldError>) {
        for (i, t) in self.testimonials.iter().enumerate() {
            require(out, &format!("testimonials[{}].name", i), &t.name);
            require(out, &format!("testimonials[{}].role", i), &t.role);
            require(out, &format!("testimonials[{}].content", i), &t.content);
            if !(1..=5).contains(&t.rating) {
                out.push(FieldError::new(
                    format!("testimonials[{}].rating", i),
                    "rating must be between 1 and 5",
                ));
            }
        }
    }
}

/// 价格方案中的单行特性
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingFeatureItem {
    pub text: String,
}

/// 单个价格方案
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPlanBlock {
    pub title: String,
    pub price: String,
    #[serde(default)]
    pub features: Vec<PricingFeatureItem>,
    pub cta_text: String,
    pub cta_link: String,
    /// 是否高亮推荐该方案
    #[serde(default)]
    pub highlight: bool,
}

/// 价格区块
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSectionBlock {
    #[serde(default)]
    pub pricing_plans: Vec<PricingPlanBlock>,
}

impl PricingSectionBlock {
    fn collect_errors(&self, out: &mut Vec<FieldError>) {
        for (i, plan) in self.pricing_plans.iter().enumerate() {
            require(out, &format!("pricing_plans[{}].title", i), &plan.title);
            require(out, &format!("pricing_plans[{}].price", i), &plan.price);
            for (j, feature) in plan.features.iter().enumerate() {
                require(
                    out,
                    &format!("pricing_plans[{}].features[{}].text", i, j),
                    &feature.text,
                );
            }
            require(out, &format!("pricing_plans[{}].cta_text", i), &plan.cta_text);
            require_url(out, &format!("pricing_plans[{}].cta_link", i), &plan.cta_link);
        }
    }
}

/// 行动号召区块
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaSectionBlock {
    pub headline: String,
    pub description: String,
    pub primary_cta_text: String,
    pub primary_cta_link: String,
    pub secondary_cta_text: Option<String>,
    pub secondary_cta_link: Option<String>,
}

impl CtaSectionBlock {
    fn collect_errors(&self, out: &mut Vec<FieldError>) {
        require(out, "headline", &self.headline);
        require(out, "description", &self.description);
        require(out, "primary_cta_text", &self.primary_cta_text);
        require_url(out, "primary_cta_link", &self.primary_cta_link);
        optional_url(out, "secondary_cta_link", self.secondary_cta_link.as_deref());
    }
}

fn default_true() -> bool {
    true
}

/// 必填字段非空校验
fn require(out: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        out.push(FieldError::new(field, "required field must not be empty"));
    }
}

/// 必填 URL 字段：非空且语法合法
fn require_url(out: &mut Vec<FieldError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        out.push(FieldError::new(field, "required field must not be empty"));
    } else if Url::parse(value.trim()).is_err() {
        out.push(FieldError::new(field, "not a valid URL"));
    }
}

/// 可选 URL 字段：留空不参与 URL 格式校验
fn optional_url(out: &mut Vec<FieldError>, field: &str, value: Option<&str>) {
    if let Some(v) = value {
        if !v.trim().is_empty() && Url::parse(v.trim()).is_err() {
            out.push(FieldError::new(field, "not a valid URL"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_hero() -> HeroBlock {
        HeroBlock {
            badge_text: "New".to_string(),
            badge_icon: "sparkles".to_string(),
            headline: "Modern HR for modern teams".to_string(),
            description: "Everything you need in one place".to_string(),
            primary_cta_text: "Get Started".to_string(),
            primary_cta_link: "https://example.com/signup".to_string(),
            secondary_cta_text: None,
            secondary_cta_link: None,
            hero_image: "hero.png".to_string(),
            show_kpi_card: true,
            kpi_value: Some("98%".to_string()),
            kpi_label: Some("Satisfaction".to_string()),
        }
    }

    #[test]
    fn test_valid_hero_passes() {
        assert!(Block::Hero(valid_hero()).validate().is_ok());
    }

    #[test]
    fn test_hero_collects_all_invalid_fields() {
        // 多个字段同时无效时应全部上报
        let mut hero = valid_hero();
        hero.badge_text = String::new();
        hero.headline = "   ".to_string();
        hero.primary_cta_link = "not-a-url".to_string();

        let err = Block::Hero(hero).validate().unwrap_err();
        assert_eq!(err.errors.len(), 3);
        assert!(err.has_field("badge_text"));
        assert!(err.has_field("headline"));
        assert!(err.has_field("primary_cta_link"));
    }

    #[test]
    fn test_optional_blank_url_is_not_checked() {
        // 可选 URL 留空不应触发格式校验
        let mut hero = valid_hero();
        hero.secondary_cta_link = Some(String::new());
        assert!(Block::Hero(hero.clone()).validate().is_ok());

        // 可选 URL 一旦填写就必须合法
        hero.secondary_cta_link = Some("::broken::".to_string());
        let err = Block::Hero(hero).validate().unwrap_err();
        assert!(err.has_field("secondary_cta_link"));
    }

    #[test]
    fn test_rating_bounds() {
        for (rating, ok) in [(0u8, false), (1, true), (5, true), (6, false)] {
            let block = Block::TestimonialsSection(TestimonialsSectionBlock {
                testimonials: vec![TestimonialItem {
                    name: "Alex".to_string(),
                    role: "HR Manager".to_string(),
                    content: "Great platform".to_string(),
                    rating,
                }],
            });
            assert_eq!(block.validate().is_ok(), ok, "rating = {}", rating);
            if !ok {
                let err = block.validate().unwrap_err();
                assert!(err.has_field("testimonials[0].rating"));
            }
        }
    }

    #[test]
    fn test_empty_list_fields_pass() {
        // 列表字段允许为空
        let block = Block::StatsSection(StatsSectionBlock { stats: vec![] });
        assert!(block.validate().is_ok());

        let block = Block::PricingSection(PricingSectionBlock { pricing_plans: vec![] });
        assert!(block.validate().is_ok());
    }

    #[test]
    fn test_nested_field_paths() {
        let block = Block::PricingSection(PricingSectionBlock {
            pricing_plans: vec![PricingPlanBlock {
                title: "Pro".to_string(),
                price: "$29".to_string(),
                features: vec![PricingFeatureItem { text: String::new() }],
                cta_text: "Buy".to_string(),
                cta_link: "https://example.com/buy".to_string(),
                highlight: true,
            }],
        });
        let err = block.validate().unwrap_err();
        assert!(err.has_field("pricing_plans[0].features[0].text"));
    }

    #[test]
    fn test_block_serde_tag_names() {
        let block = Block::StatsSection(StatsSectionBlock {
            stats: vec![StatItem {
                value: "150".to_string(),
                label: "Clients".to_string(),
            }],
        });
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "stats_section");

        let back: Block = serde_json::from_value(json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn test_template_mapping() {
        let hero = Block::Hero(valid_hero());
        assert_eq!(hero.template(), "blocks/hero_block.html");
        assert_eq!(hero.label(), "Hero Section");
        assert_eq!(hero.icon(), "image");
    }
}
