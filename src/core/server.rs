use anyhow::Result;
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tracing::info;

use crate::api;
use crate::core::engine::Engine;

/// HTTP 服务器共享状态
#[derive(Clone)]
pub struct AppState {
    /// CMS 引擎，持有存储与站点配置
    pub engine: Engine,
}

/// HTTP 服务器
pub struct Server {
    /// CMS 引擎
    engine: Engine,
    /// 端口
    port: u16,
}

impl Server {
    /// 创建新的服务器
    pub fn new(engine: Engine, port: u16) -> Self {
        Self { engine, port }
    }

    /// 组装全部路由
    pub fn router(&self) -> Router {
        let static_dir = self.engine.static_dir.clone();
        let state = AppState {
            engine: self.engine.clone(),
        };

        Router::new()
            // 静态内容目录
            .route("/api/features", get(api::catalog::features))
            .route("/api/benefits", get(api::catalog::benefits))
            .route("/api/stats", get(api::catalog::stats))
            // 主题偏好
            .route("/api/theme", post(api::theme::set_theme))
            // 主题演示
            .route("/demo/features", get(api::demo::features))
            .route("/demo/benefits", get(api::demo::benefits))
            .route("/demo/stats", get(api::demo::stats))
            .route("/demo/modal-content", get(api::demo::modal_content))
            // 页面与区块流
            .route("/api/pages", get(api::pages::list).post(api::pages::create))
            .route(
                "/api/pages/:id",
                get(api::pages::show).delete(api::pages::destroy),
            )
            .route(
                "/api/pages/:id/blocks",
                get(api::pages::blocks).post(api::pages::append_block),
            )
            .route("/api/pages/:id/blocks/:index", delete(api::pages::remove_block))
            // 静态资源
            .nest_service("/static", ServeDir::new(static_dir))
            .with_state(state)
    }

    /// 启动服务器
    pub async fn start(self) -> Result<()> {
        let app = self.router();

        let addr: SocketAddr = format!("0.0.0.0:{}", self.port).parse()?;
        info!("Server started at http://localhost:{}", self.port);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
