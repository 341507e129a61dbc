use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::blocks::{
    BenefitItem, BenefitsSectionBlock, Block, CtaSectionBlock, FeatureItem, FeaturesSectionBlock,
    HeroBlock, PricingFeatureItem, PricingPlanBlock, PricingSectionBlock, StatItem,
    StatsSectionBlock, TestimonialItem, TestimonialsSectionBlock,
};
use crate::core::server::Server;
use crate::core::store::{PageStore, StoreSnapshot};
use crate::models::config::Config;
use crate::models::types::{
    Benefit, CtaSection, Feature, HeroSection, LandingPage, PricingPlan, Stat, Testimonial,
};

/// CMS 引擎的核心实现
#[derive(Clone)]
pub struct Engine {
    /// 站点目录
    pub base_dir: PathBuf,
    /// 数据目录
    pub data_dir: PathBuf,
    /// 静态资源目录
    pub static_dir: PathBuf,
    /// 站点配置
    pub config: Config,
    /// 页面存储
    pub store: PageStore,
}

impl Engine {
    /// 创建一个新的引擎实例
    pub fn new(base_dir: PathBuf) -> Result<Self> {
        info!("初始化 Pulse 引擎...");
        info!("工作目录: {}", base_dir.display());

        // 配置文件
        let config_path = base_dir.join("_config.yml");
        let config = if config_path.exists() {
            Config::load(&config_path)?
        } else {
            Config::default()
        };

        let data_dir = base_dir.join(config.data_dir.as_deref().unwrap_or("data"));
        let static_dir = base_dir.join(config.static_dir.as_deref().unwrap_or("static"));

        // 加载已有的页面数据
        let data_file = data_dir.join("pages.yml");
        let store = if data_file.exists() {
            let content = fs::read_to_string(&data_file)
                .with_context(|| format!("读取数据文件失败: {}", data_file.display()))?;
            let snapshot: StoreSnapshot = serde_yaml::from_str(&content)
                .with_context(|| format!("解析数据文件失败: {}", data_file.display()))?;
            info!("加载了 {} 个页面", snapshot.pages.len());
            PageStore::from_snapshot(snapshot)
        } else {
            PageStore::new()
        };

        Ok(Self {
            base_dir,
            data_dir,
            static_dir,
            config,
            store,
        })
    }

    /// 数据文件路径
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join("pages.yml")
    }

    /// 将存储快照写回数据文件
    pub fn persist(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("创建数据目录失败: {}", self.data_dir.display()))?;
        let yaml = serde_yaml::to_string(&self.store.snapshot())?;
        let data_file = self.data_file();
        fs::write(&data_file, yaml)
            .with_context(|| format!("写入数据文件失败: {}", data_file.display()))?;
        Ok(())
    }

    /// 创建新的落地页并持久化
    pub fn new_page(&self, title: &str) -> Result<LandingPage> {
        let page = self.store.create_page(title);
        self.persist()?;
        info!("创建页面: {} (id = {})", page.title, page.id);
        Ok(page)
    }

    /// 生成一个带全部七种区块和分区记录的示例首页
    pub fn seed_homepage(&self) -> Result<LandingPage> {
        let page = self.store.create_page("HR Pulse Homepage");
        let id = page.id;

        // 区块流
        self.store.append_block(id, demo_hero())?;
        self.store.append_block(id, demo_stats())?;
        self.store.append_block(id, demo_features())?;
        self.store.append_block(id, demo_benefits())?;
        self.store.append_block(id, demo_testimonials())?;
        self.store.append_block(id, demo_pricing())?;
        self.store.append_block(id, demo_cta())?;

        // 分区表，与区块流平行的第二套表示
        self.store.set_hero(HeroSection {
            page_id: id,
            title: "Transform Your HR Operations".to_string(),
            subtitle: Some("One platform for people, payroll and performance".to_string()),
            background_image: Some("hero_images/pulse.png".to_string()),
            cta_text: Some("Get Started".to_string()),
            cta_link: Some("https://example.com/signup".to_string()),
        })?;
        for (value, label) in [
            ("150", "Clients"),
            ("98", "Satisfaction"),
            ("24", "Countries"),
            ("2500", "Employees"),
        ] {
            self.store.add_stat(Stat {
                page_id: id,
                value: value.to_string(),
                label: label.to_string(),
            })?;
        }
        for (icon, title, description) in [
            ("💡", "Innovative Solutions", "Cutting-edge HR technology to streamline your processes"),
            ("📊", "Data Analytics", "Gain valuable insights with our advanced analytics dashboard"),
            ("🔒", "Secure Platform", "Enterprise-grade security to protect your sensitive data"),
            ("📱", "Mobile Friendly", "Access HR tools anytime, anywhere on any device"),
        ] {
            self.store.add_feature(Feature {
                page_id: id,
                title: title.to_string(),
                description: description.to_string(),
                icon: Some(icon.to_string()),
            })?;
        }
        for (icon, title, description) in [
            ("⏱️", "Time Saving", "Automate repetitive tasks and focus on strategic initiatives"),
            ("💰", "Cost Effective", "Reduce operational costs with our efficient solutions"),
            ("👥", "Employee Satisfaction", "Improve workplace experience and boost engagement"),
            ("📈", "Performance Growth", "Track and enhance team productivity effectively"),
        ] {
            self.store.add_benefit(Benefit {
                page_id: id,
                title: title.to_string(),
                description: description.to_string(),
                icon: Some(icon.to_string()),
            })?;
        }
        self.store.add_testimonial(Testimonial {
            page_id: id,
            name: "Sarah Chen".to_string(),
            role: Some("Head of People".to_string()),
            content: "HR Pulse cut our onboarding time in half.".to_string(),
            rating: 5,
        })?;
        self.store.add_testimonial(Testimonial {
            page_id: id,
            name: "Marcus Webb".to_string(),
            role: Some("HR Director".to_string()),
            content: "The analytics dashboard is a game changer.".to_string(),
            rating: 4,
        })?;
        for (name, price, features, most_popular) in [
            ("Starter", "$9", "Up to 25 employees\nCore HR records", false),
            ("Pro", "$29", "Unlimited employees\nAnalytics dashboard\nPriority support", true),
            ("Enterprise", "Custom", "Dedicated manager\nSSO and audit logs", false),
        ] {
            self.store.add_pricing_plan(PricingPlan {
                page_id: id,
                name: name.to_string(),
                price: price.to_string(),
                features: features.to_string(),
                most_popular,
            })?;
        }
        self.store.set_cta(CtaSection {
            page_id: id,
            title: "Ready to get started?".to_string(),
            subtitle: Some("Join hundreds of teams already on HR Pulse".to_string()),
            cta_text: "Start Free Trial".to_string(),
            cta_link: "https://example.com/trial".to_string(),
        })?;

        self.persist()?;
        info!("生成示例首页完成 (id = {})", id);
        self.store.get_page(id).map_err(Into::into)
    }

    /// 启动 HTTP 服务器
    pub async fn server(&self, port: u16) -> Result<()> {
        let server = Server::new(self.clone(), port);
        server.start().await
    }
}

// -------------------------------
// 示例区块
// -------------------------------

fn demo_hero() -> Block {
    Block::Hero(HeroBlock {
        badge_text: "New".to_string(),
        badge_icon: "sparkles".to_string(),
        headline: "Transform Your HR Operations".to_string(),
        description: "One platform for people, payroll and performance".to_string(),
        primary_cta_text: "Get Started".to_string(),
        primary_cta_link: "https://example.com/signup".to_string(),
        secondary_cta_text: Some("Book a Demo".to_string()),
        secondary_cta_link: Some("https://example.com/demo".to_string()),
        hero_image: "hero_images/pulse.png".to_string(),
        show_kpi_card: true,
        kpi_value: Some("98%".to_string()),
        kpi_label: Some("Satisfaction".to_string()),
    })
}

fn demo_stats() -> Block {
    Block::StatsSection(StatsSectionBlock {
        stats: vec![
            StatItem { value: "150".to_string(), label: "Clients".to_string() },
            StatItem { value: "98".to_string(), label: "Satisfaction".to_string() },
            StatItem { value: "24".to_string(), label: "Countries".to_string() },
            StatItem { value: "2500".to_string(), label: "Employees".to_string() },
        ],
    })
}

fn demo_features() -> Block {
    Block::FeaturesSection(FeaturesSectionBlock {
        features: vec![
            FeatureItem {
                icon: "💡".to_string(),
                title: "Innovative Solutions".to_string(),
                description: "Cutting-edge HR technology to streamline your processes".to_string(),
                color_class: "text-amber-500".to_string(),
            },
            FeatureItem {
                icon: "📊".to_string(),
                title: "Data Analytics".to_string(),
                description: "Gain valuable insights with our advanced analytics dashboard".to_string(),
                color_class: "text-blue-500".to_string(),
            },
            FeatureItem {
                icon: "🔒".to_string(),
                title: "Secure Platform".to_string(),
                description: "Enterprise-grade security to protect your sensitive data".to_string(),
                color_class: "text-green-500".to_string(),
            },
            FeatureItem {
                icon: "📱".to_string(),
                title: "Mobile Friendly".to_string(),
                description: "Access HR tools anytime, anywhere on any device".to_string(),
                color_class: "text-purple-500".to_string(),
            },
        ],
    })
}

fn demo_benefits() -> Block {
    Block::BenefitsSection(BenefitsSectionBlock {
        benefits: vec![
            BenefitItem {
                icon: "⏱️".to_string(),
                title: "Time Saving".to_string(),
                description: "Automate repetitive tasks and focus on strategic initiatives".to_string(),
            },
            BenefitItem {
                icon: "💰".to_string(),
                title: "Cost Effective".to_string(),
                description: "Reduce operational costs with our efficient solutions".to_string(),
            },
        ],
        image: "benefits.png".to_string(),
        headline: "Why teams choose HR Pulse".to_string(),
        description: "Less admin work, more time for people".to_string(),
    })
}

fn demo_testimonials() -> Block {
    Block::TestimonialsSection(TestimonialsSectionBlock {
        testimonials: vec![
            TestimonialItem {
                name: "Sarah Chen".to_string(),
                role: "Head of People".to_string(),
                content: "HR Pulse cut our onboarding time in half.".to_string(),
                rating: 5,
            },
            TestimonialItem {
                name: "Marcus Webb".to_string(),
                role: "HR Director".to_string(),
                content: "The analytics dashboard is a game changer.".to_string(),
                rating: 4,
            },
        ],
    })
}

fn demo_pricing() -> Block {
    Block::PricingSection(PricingSectionBlock {
        pricing_plans: vec![
            PricingPlanBlock {
                title: "Starter".to_string(),
                price: "$9".to_string(),
                features: vec![
                    PricingFeatureItem { text: "Up to 25 employees".to_string() },
                    PricingFeatureItem { text: "Core HR records".to_string() },
                ],
                cta_text: "Choose Starter".to_string(),
                cta_link: "https://example.com/signup?plan=starter".to_string(),
                highlight: false,
            },
            PricingPlanBlock {
                title: "Pro".to_string(),
                price: "$29".to_string(),
                features: vec![
                    PricingFeatureItem { text: "Unlimited employees".to_string() },
                    PricingFeatureItem { text: "Analytics dashboard".to_string() },
                    PricingFeatureItem { text: "Priority support".to_string() },
                ],
                cta_text: "Choose Pro".to_string(),
                cta_link: "https://example.com/signup?plan=pro".to_string(),
                highlight: true,
            },
        ],
    })
}

fn demo_cta() -> Block {
    Block::CtaSection(CtaSectionBlock {
        headline: "Ready to get started?".to_string(),
        description: "Join hundreds of teams already on HR Pulse".to_string(),
        primary_cta_text: "Start Free Trial".to_string(),
        primary_cta_link: "https://example.com/trial".to_string(),
        secondary_cta_text: None,
        secondary_cta_link: None,
    })
}
