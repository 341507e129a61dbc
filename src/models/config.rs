use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub language: Option<String>,
    pub url: Option<String>,
    pub root: Option<String>,
    pub data_dir: Option<String>,
    pub static_dir: Option<String>,
    pub static_url: Option<String>,
    pub port: Option<u16>,
    pub default_theme: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "HR Pulse".to_string(),
            subtitle: None,
            description: None,
            author: None,
            language: Some("en".to_string()),
            url: Some("http://localhost:4000".to_string()),
            root: Some("/".to_string()),
            data_dir: Some("data".to_string()),
            static_dir: Some("static".to_string()),
            static_url: Some("/static/".to_string()),
            port: Some(4000),
            default_theme: Some("light".to_string()),
        }
    }
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置的别名
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_file(path)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// 保存配置的别名
    pub fn save(&self, path: &Path) -> Result<()> {
        self.save_to_file(path)
    }

    /// 静态资源的 URL 前缀，始终以斜杠结尾
    pub fn static_url(&self) -> String {
        crate::utils::ensure_trailing_slash(self.static_url.as_deref().unwrap_or("/static/"))
    }
}
