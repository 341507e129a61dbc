use std::sync::{Arc, RwLock};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::blocks::{Block, ValidationError};
use crate::models::types::{
    Benefit, CtaSection, Feature, HeroSection, LandingPage, PageId, PageSummary, PricingPlan,
    Stat, Testimonial,
};
use crate::utils::slugify;

/// 存储层错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("页面不存在: {0}")]
    PageNotFound(PageId),

    #[error("区块索引越界: {index} (当前长度 {len})")]
    BlockIndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// 存储快照，持久化时整体序列化为 YAML
///
/// 页面持有区块流；七张分区表独立存放，通过 page_id 关联页面。
/// 分区表与区块流互不同步，删除页面时两者一并级联清除。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub pages: Vec<LandingPage>,
    #[serde(default)]
    pub heroes: Vec<HeroSection>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub benefits: Vec<Benefit>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub pricing_plans: Vec<PricingPlan>,
    #[serde(default)]
    pub ctas: Vec<CtaSection>,
}

/// 页面存储
#[derive(Clone, Default)]
pub struct PageStore {
    inner: Arc<RwLock<StoreSnapshot>>,
}

impl PageStore {
    /// 创建空的存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 从快照恢复
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// 导出当前快照
    pub fn snapshot(&self) -> StoreSnapshot {
        self.inner.read().unwrap().clone()
    }

    // -------------------------------
    // 页面
    // -------------------------------

    /// 创建新页面
    pub fn create_page(&self, title: &str) -> LandingPage {
        let mut inner = self.inner.write().unwrap();
        inner.next_id += 1;
        let page = LandingPage {
            id: PageId(inner.next_id),
            title: title.to_string(),
            slug: slugify(title),
            created: Utc::now(),
            updated: None,
            body: Vec::new(),
        };
        inner.pages.push(page.clone());
        page
    }

    /// 按标识取页面
    pub fn get_page(&self, id: PageId) -> Result<LandingPage, StoreError> {
        let inner = self.inner.read().unwrap();
        inner
            .pages
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::PageNotFound(id))
    }

    /// 页面列表
    pub fn list_pages(&self) -> Vec<PageSummary> {
        let inner = self.inner.read().unwrap();
        inner.pages.iter().map(PageSummary::from).collect()
    }

    /// 删除页面，级联删除区块流与全部分区记录
    pub fn delete_page(&self, id: PageId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        let before = inner.pages.len();
        inner.pages.retain(|p| p.id != id);
        if inner.pages.len() == before {
            return Err(StoreError::PageNotFound(id));
        }

        // 级联清除分区表，不允许留下孤儿记录
        inner.heroes.retain(|r| r.page_id != id);
        inner.stats.retain(|r| r.page_id != id);
        inner.features.retain(|r| r.page_id != id);
        inner.benefits.retain(|r| r.page_id != id);
        inner.testimonials.retain(|r| r.page_id != id);
        inner.pricing_plans.retain(|r| r.page_id != id);
        inner.ctas.retain(|r| r.page_id != id);
        Ok(())
    }

    // -------------------------------
    // 区块流
    // -------------------------------

    /// 取页面的有序区块流
    pub fn get_blocks(&self, id: PageId) -> Result<Vec<Block>, StoreError> {
        Ok(self.get_page(id)?.body)
    }

    /// 追加区块到流末尾，先校验后写入
    pub fn append_block(&self, id: PageId, block: Block) -> Result<(), StoreError> {
        block.validate()?;
        let mut inner = self.inner.write().unwrap();
        let page = page_mut(&mut inner, id)?;
        page.body.push(block);
        page.updated = Some(Utc::now());
        Ok(())
    }

    /// 在指定位置插入区块，其余区块顺序不变
    pub fn insert_block(&self, id: PageId, index: usize, block: Block) -> Result<(), StoreError> {
        block.validate()?;
        let mut inner = self.inner.write().unwrap();
        let page = page_mut(&mut inner, id)?;
        if index > page.body.len() {
            return Err(StoreError::BlockIndexOutOfRange {
                index,
                len: page.body.len(),
            });
        }
        page.body.insert(index, block);
        page.updated = Some(Utc::now());
        Ok(())
    }

    /// 按索引移除区块并返回它，其余区块顺序不变
    pub fn remove_block(&self, id: PageId, index: usize) -> Result<Block, StoreError> {
        let mut inner = self.inner.write().unwrap();
        let page = page_mut(&mut inner, id)?;
        if index >= page.body.len() {
            return Err(StoreError::BlockIndexOutOfRange {
                index,
                len: page.body.len(),
            });
        }
        let removed = page.body.remove(index);
        page.updated = Some(Utc::now());
        Ok(removed)
    }

    // -------------------------------
    // 分区表
    // -------------------------------

    /// 设置首屏分区，每页最多一条，重复设置即替换
    pub fn set_hero(&self, hero: HeroSection) -> Result<(), StoreError> {
        let page_id = hero.page_id;
        let mut inner = self.inner.write().unwrap();
        ensure_page(&inner, page_id)?;
        inner.heroes.retain(|r| r.page_id != page_id);
        inner.heroes.push(hero);
        Ok(())
    }

    /// 设置行动号召分区，每页最多一条，重复设置即替换
    pub fn set_cta(&self, cta: CtaSection) -> Result<(), StoreError> {
        let page_id = cta.page_id;
        let mut inner = self.inner.write().unwrap();
        ensure_page(&inner, page_id)?;
        inner.ctas.retain(|r| r.page_id != page_id);
        inner.ctas.push(cta);
        Ok(())
    }

    pub fn add_stat(&self, stat: Stat) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        ensure_page(&inner, stat.page_id)?;
        inner.stats.push(stat);
        Ok(())
    }

    pub fn add_feature(&self, feature: Feature) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        ensure_page(&inner, feature.page_id)?;
        inner.features.push(feature);
        Ok(())
    }

    pub fn add_benefit(&self, benefit: Benefit) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        ensure_page(&inner, benefit.page_id)?;
        inner.benefits.push(benefit);
        Ok(())
    }

    pub fn add_testimonial(&self, testimonial: Testimonial) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        ensure_page(&inner, testimonial.page_id)?;
        inner.testimonials.push(testimonial);
        Ok(())
    }

    pub fn add_pricing_plan(&self, plan: PricingPlan) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        ensure_page(&inner, plan.page_id)?;
        inner.pricing_plans.push(plan);
        Ok(())
    }

    pub fn hero_of(&self, id: PageId) -> Option<HeroSection> {
        let inner = self.inner.read().unwrap();
        inner.heroes.iter().find(|r| r.page_id == id).cloned()
    }

    pub fn cta_of(&self, id: PageId) -> Option<CtaSection> {
        let inner = self.inner.read().unwrap();
        inner.ctas.iter().find(|r| r.page_id == id).cloned()
    }

    pub fn stats_for(&self, id: PageId) -> Vec<Stat> {
        let inner = self.inner.read().unwrap();
        inner
            .stats
            .iter()
            .filter(|r| r.page_id == id)
            .cloned()
            .collect()
    }

    pub fn features_for(&self, id: PageId) -> Vec<Feature> {
        let inner = self.inner.read().unwrap();
        inner
            .features
            .iter()
            .filter(|r| r.page_id == id)
            .cloned()
            .collect()
    }

    pub fn benefits_for(&self, id: PageId) -> Vec<Benefit> {
        let inner = self.inner.read().unwrap();
        inner
            .benefits
            .iter()
            .filter(|r| r.page_id == id)
            .cloned()
            .collect()
    }

    pub fn testimonials_for(&self, id: PageId) -> Vec<Testimonial> {
        let inner = self.inner.read().unwrap();
        inner
            .testimonials
            .iter()
            .filter(|r| r.page_id == id)
            .cloned()
            .collect()
    }

    pub fn pricing_for(&self, id: PageId) -> Vec<PricingPlan> {
        let inner = self.inner.read().unwrap();
        inner
            .pricing_plans
            .iter()
            .filter(|r| r.page_id == id)
            .cloned()
            .collect()
    }
}

fn page_mut(inner: &mut StoreSnapshot, id: PageId) -> Result<&mut LandingPage, StoreError> {
    inner
        .pages
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(StoreError::PageNotFound(id))
}

fn ensure_page(inner: &StoreSnapshot, id: PageId) -> Result<(), StoreError> {
    if inner.pages.iter().any(|p| p.id == id) {
        Ok(())
    } else {
        Err(StoreError::PageNotFound(id))
    }
}
