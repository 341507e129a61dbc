use crate::core::Engine;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 指定站点目录
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 初始化新的站点
    Init(InitArgs),

    /// 创建新的落地页
    New(NewArgs),

    /// 生成带全部区块类型的示例首页
    Seed,

    /// 启动本地服务器
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// 站点目录名称
    #[arg(value_name = "NAME")]
    pub name: String,

    /// 站点标题
    #[arg(short, long)]
    pub title: Option<String>,
}

#[derive(Args)]
pub struct NewArgs {
    /// 页面标题
    pub title: String,
}

#[derive(Args)]
pub struct ServeArgs {
    /// 服务器端口
    #[arg(short, long)]
    pub port: Option<u16>,
}

// 嵌入的默认配置模板
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# 站点信息
title: {title}
subtitle: 'HR technology for modern teams'
description: 'Marketing site for the HR Pulse platform'
author: 'HR Pulse'
language: en

# URL配置
url: http://localhost:4000
root: /

# 目录配置
data_dir: data
static_dir: static
static_url: /static/

# 服务器配置
port: 4000

# 主题配置
default_theme: light
"#;

// 嵌入的默认主题样式
const DEFAULT_THEME_CSS: &str = r#"/* Advanced theme: light/dark variables and UI widgets */
:root {
  --bg: #ffffff;
  --fg: #1f2933;
  --accent: #2563eb;
}

[data-theme="dark"] {
  --bg: #111827;
  --fg: #f9fafb;
  --accent: #60a5fa;
}

body.theme-plugin {
  background: var(--bg);
  color: var(--fg);
  transition: background 0.3s ease, color 0.3s ease;
}

.theme-toggle {
  border: none;
  background: transparent;
  color: var(--fg);
  cursor: pointer;
}

.back-to-top {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  display: none;
  border: none;
  border-radius: 9999px;
  padding: 0.75rem;
  background: var(--accent);
  color: #fff;
  cursor: pointer;
}

.back-to-top.visible {
  display: block;
}
"#;

// 嵌入的默认主题脚本
const DEFAULT_THEME_JS: &str = r#"// Advanced theme: theme toggling and back-to-top behaviour
(function () {
  const stored = localStorage.getItem('theme');
  const system = window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light';
  let theme = stored || system;

  function apply(next) {
    theme = next;
    document.documentElement.setAttribute('data-theme', next);
    localStorage.setItem('theme', next);
    fetch('/api/theme', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ theme: next }),
    }).catch(() => {});
  }

  apply(theme);

  document.addEventListener('click', (event) => {
    if (event.target.closest('#theme-toggle')) {
      apply(theme === 'dark' ? 'light' : 'dark');
    }
    if (event.target.closest('.back-to-top')) {
      window.scrollTo({ top: 0, behavior: 'smooth' });
    }
  });

  window.addEventListener('scroll', () => {
    const button = document.querySelector('.back-to-top');
    if (button) {
      button.classList.toggle('visible', window.scrollY > 300);
    }
  });
})();
"#;

// 初始化站点文件结构，包括配置文件和默认静态资源
fn initialize_site_structure(site_path: &PathBuf, site_title: &str) -> Result<()> {
    // 创建目录结构
    let data_dir = site_path.join("data");
    let static_dir = site_path.join("static");
    let static_css_dir = static_dir.join("css");
    let static_js_dir = static_dir.join("js");

    for dir in &[&data_dir, &static_css_dir, &static_js_dir] {
        fs::create_dir_all(dir)?;
    }

    // 创建默认配置文件
    let config_content = DEFAULT_CONFIG_TEMPLATE.replace("{title}", site_title);
    fs::write(site_path.join("_config.yml"), config_content)?;

    // 创建默认静态资源
    fs::write(static_css_dir.join("advanced_theme.css"), DEFAULT_THEME_CSS)?;
    fs::write(static_js_dir.join("advanced_theme.js"), DEFAULT_THEME_JS)?;

    Ok(())
}

/// 执行命令
pub async fn execute(cli: Cli) -> Result<()> {
    let site_path = cli.path.clone();

    match cli.command {
        Commands::Init(args) => {
            // 使用提供的目录名称
            let site_path = site_path.join(&args.name);

            // 如果目录不为空，询问用户是否继续
            if site_path.exists() && site_path.read_dir()?.next().is_some() {
                println!("Directory is not empty. Do you want to continue? (y/N)");
                let mut input = String::new();
                std::io::stdin().read_line(&mut input)?;
                if !input.trim().eq_ignore_ascii_case("y") {
                    println!("Operation cancelled.");
                    return Ok(());
                }
            }

            // 创建站点目录
            fs::create_dir_all(&site_path)?;

            // 获取站点标题
            let site_title = args.title.unwrap_or_else(|| args.name.clone());

            // 初始化站点文件结构
            initialize_site_structure(&site_path, &site_title)?;

            info!("Initialized new site at: {}", site_path.display());
        }
        Commands::New(args) => {
            let engine = Engine::new(site_path)?;
            let page = engine.new_page(&args.title)?;
            println!("Created page \"{}\" (id = {})", page.title, page.id);
        }
        Commands::Seed => {
            let engine = Engine::new(site_path)?;
            let page = engine.seed_homepage()?;
            println!(
                "Seeded homepage \"{}\" with {} blocks (id = {})",
                page.title,
                page.body.len(),
                page.id
            );
        }
        Commands::Serve(args) => {
            let engine = Engine::new(site_path)?;
            let port = args.port.or(engine.config.port).unwrap_or(4000);
            info!(
                "Static assets served from {} under {}",
                engine.static_dir.display(),
                engine.config.static_url()
            );
            engine.server(port).await?;

            // 等待用户中断
            tokio::signal::ctrl_c().await?;
        }
    }

    Ok(())
}
