// 页面存储的集成测试：区块流顺序、级联删除、分区表语义

use rust_pulse::blocks::{
    Block, CtaSectionBlock, StatItem, StatsSectionBlock, TestimonialItem,
    TestimonialsSectionBlock,
};
use rust_pulse::core::{PageStore, StoreError};
use rust_pulse::models::types::{CtaSection, Feature, HeroSection, Stat, Testimonial};

fn stats_block(label: &str) -> Block {
    Block::StatsSection(StatsSectionBlock {
        stats: vec![StatItem {
            value: "1".to_string(),
            label: label.to_string(),
        }],
    })
}

#[test]
fn test_append_block_preserves_order() {
    let store = PageStore::new();
    let page = store.create_page("Homepage");

    store.append_block(page.id, stats_block("first")).unwrap();
    store.append_block(page.id, stats_block("second")).unwrap();
    store.append_block(page.id, stats_block("third")).unwrap();

    // 追加的区块总在末尾
    let blocks = store.get_blocks(page.id).unwrap();
    assert_eq!(blocks.len(), 3);
    match &blocks[2] {
        Block::StatsSection(b) => assert_eq!(b.stats[0].label, "third"),
        other => panic!("unexpected block: {:?}", other),
    }

    // 没有写入时重复读取顺序不变
    assert_eq!(store.get_blocks(page.id).unwrap(), blocks);
    assert_eq!(store.get_blocks(page.id).unwrap(), blocks);
}

#[test]
fn test_insert_and_remove_block() {
    let store = PageStore::new();
    let page = store.create_page("Homepage");

    store.append_block(page.id, stats_block("a")).unwrap();
    store.append_block(page.id, stats_block("c")).unwrap();
    store.insert_block(page.id, 1, stats_block("b")).unwrap();

    let labels: Vec<String> = store
        .get_blocks(page.id)
        .unwrap()
        .iter()
        .map(|b| match b {
            Block::StatsSection(s) => s.stats[0].label.clone(),
            other => panic!("unexpected block: {:?}", other),
        })
        .collect();
    assert_eq!(labels, ["a", "b", "c"]);

    // 移除中间区块，其余顺序不变
    let removed = store.remove_block(page.id, 1).unwrap();
    match removed {
        Block::StatsSection(s) => assert_eq!(s.stats[0].label, "b"),
        other => panic!("unexpected block: {:?}", other),
    }
    let blocks = store.get_blocks(page.id).unwrap();
    assert_eq!(blocks.len(), 2);

    // 索引越界
    let err = store.remove_block(page.id, 5).unwrap_err();
    assert!(matches!(
        err,
        StoreError::BlockIndexOutOfRange { index: 5, len: 2 }
    ));
}

#[test]
fn test_append_invalid_block_is_rejected() {
    let store = PageStore::new();
    let page = store.create_page("Homepage");

    // 评分越界的区块不能进入流
    let bad = Block::TestimonialsSection(TestimonialsSectionBlock {
        testimonials: vec![TestimonialItem {
            name: "Alex".to_string(),
            role: "Manager".to_string(),
            content: "ok".to_string(),
            rating: 6,
        }],
    });
    let err = store.append_block(page.id, bad).unwrap_err();
    match err {
        StoreError::Invalid(validation) => {
            assert!(validation.has_field("testimonials[0].rating"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // 流保持为空
    assert!(store.get_blocks(page.id).unwrap().is_empty());
}

#[test]
fn test_unknown_page_is_not_found() {
    let store = PageStore::new();
    let page = store.create_page("Homepage");
    store.delete_page(page.id).unwrap();

    assert!(matches!(
        store.get_blocks(page.id).unwrap_err(),
        StoreError::PageNotFound(_)
    ));
    assert!(matches!(
        store.delete_page(page.id).unwrap_err(),
        StoreError::PageNotFound(_)
    ));
}

#[test]
fn test_delete_page_cascades_to_side_tables() {
    let store = PageStore::new();
    let page = store.create_page("Homepage");
    let other = store.create_page("Pricing");

    store
        .set_hero(HeroSection {
            page_id: page.id,
            title: "Hero".to_string(),
            subtitle: None,
            background_image: None,
            cta_text: None,
            cta_link: None,
        })
        .unwrap();
    store
        .set_cta(CtaSection {
            page_id: page.id,
            title: "CTA".to_string(),
            subtitle: None,
            cta_text: "Go".to_string(),
            cta_link: "https://example.com".to_string(),
        })
        .unwrap();
    store
        .add_stat(Stat {
            page_id: page.id,
            value: "150".to_string(),
            label: "Clients".to_string(),
        })
        .unwrap();
    store
        .add_feature(Feature {
            page_id: page.id,
            title: "Analytics".to_string(),
            description: "Dashboards".to_string(),
            icon: None,
        })
        .unwrap();
    store
        .add_testimonial(Testimonial {
            page_id: page.id,
            name: "Sarah".to_string(),
            role: None,
            content: "Great".to_string(),
            rating: 5,
        })
        .unwrap();

    // 另一个页面的记录不受影响
    store
        .add_stat(Stat {
            page_id: other.id,
            value: "24".to_string(),
            label: "Countries".to_string(),
        })
        .unwrap();

    store.append_block(page.id, stats_block("x")).unwrap();
    store.delete_page(page.id).unwrap();

    // 页面与区块流已消失
    assert!(matches!(
        store.get_page(page.id).unwrap_err(),
        StoreError::PageNotFound(_)
    ));

    // 全部分区记录级联删除，不留孤儿
    assert!(store.hero_of(page.id).is_none());
    assert!(store.cta_of(page.id).is_none());
    assert!(store.stats_for(page.id).is_empty());
    assert!(store.features_for(page.id).is_empty());
    assert!(store.testimonials_for(page.id).is_empty());
    assert!(store.benefits_for(page.id).is_empty());
    assert!(store.pricing_for(page.id).is_empty());

    // 其他页面的记录仍然存在
    assert_eq!(store.stats_for(other.id).len(), 1);
}

#[test]
fn test_hero_and_cta_are_one_to_one() {
    let store = PageStore::new();
    let page = store.create_page("Homepage");

    for title in ["First", "Second"] {
        store
            .set_hero(HeroSection {
                page_id: page.id,
                title: title.to_string(),
                subtitle: None,
                background_image: None,
                cta_text: None,
                cta_link: None,
            })
            .unwrap();
    }

    // 重复设置即替换，每页最多一条
    let hero = store.hero_of(page.id).unwrap();
    assert_eq!(hero.title, "Second");
}

#[test]
fn test_snapshot_round_trip() {
    let store = PageStore::new();
    let page = store.create_page("Homepage");
    store
        .append_block(
            page.id,
            Block::CtaSection(CtaSectionBlock {
                headline: "Ready?".to_string(),
                description: "Join us".to_string(),
                primary_cta_text: "Go".to_string(),
                primary_cta_link: "https://example.com".to_string(),
                secondary_cta_text: None,
                secondary_cta_link: None,
            }),
        )
        .unwrap();

    // 快照经 YAML 往返后内容不变
    let yaml = serde_yaml::to_string(&store.snapshot()).unwrap();
    let restored = PageStore::from_snapshot(serde_yaml::from_str(&yaml).unwrap());

    let blocks = restored.get_blocks(page.id).unwrap();
    assert_eq!(blocks, store.get_blocks(page.id).unwrap());

    // 恢复后新建页面的标识不冲突
    let next = restored.create_page("Another");
    assert_ne!(next.id, page.id);
}
