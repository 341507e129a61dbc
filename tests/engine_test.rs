// 引擎的集成测试：示例数据生成与持久化重载

use rust_pulse::blocks::Block;
use rust_pulse::core::Engine;

fn temp_site(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir()
        .join("rust-pulse-tests")
        .join(format!("engine-{}-{}", name, std::process::id()));
    // 保证每次测试从干净目录开始
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_seed_homepage_covers_all_block_kinds() {
    let base_dir = temp_site("seed");
    let engine = Engine::new(base_dir).unwrap();
    let page = engine.seed_homepage().unwrap();

    // 区块流包含全部七种区块，顺序固定
    assert_eq!(page.body.len(), 7);
    let labels: Vec<&str> = page.body.iter().map(Block::label).collect();
    assert_eq!(
        labels,
        [
            "Hero Section",
            "Stats Section",
            "Features Section",
            "Benefits Section",
            "Testimonials Section",
            "Pricing Section",
            "CTA Section",
        ]
    );

    // 每个区块都通过自身校验
    for block in &page.body {
        assert!(block.validate().is_ok(), "invalid block: {}", block.label());
    }

    // 七张分区表全部有记录
    assert!(engine.store.hero_of(page.id).is_some());
    assert!(engine.store.cta_of(page.id).is_some());
    assert_eq!(engine.store.stats_for(page.id).len(), 4);
    assert_eq!(engine.store.features_for(page.id).len(), 4);
    assert_eq!(engine.store.benefits_for(page.id).len(), 4);
    assert_eq!(engine.store.testimonials_for(page.id).len(), 2);
    assert_eq!(engine.store.pricing_for(page.id).len(), 3);
}

#[test]
fn test_persisted_pages_survive_reload() {
    let base_dir = temp_site("reload");

    let engine = Engine::new(base_dir.clone()).unwrap();
    let page = engine.new_page("Pricing").unwrap();
    assert!(engine.data_file().exists());

    // 重新打开站点目录后页面仍在
    let reopened = Engine::new(base_dir).unwrap();
    let restored = reopened.store.get_page(page.id).unwrap();
    assert_eq!(restored.title, "Pricing");
    assert_eq!(restored.slug, "pricing");
}
