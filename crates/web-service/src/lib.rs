//! Web服务模块
//!
//! 提供作品集站点的全部HTTP页面和表单处理

use color_eyre::Result;
use database::{
    ProjectRepository, ProjectRepositoryTrait, UserRepository, UserRepositoryTrait,
};
use shared_lib::AppConfig;
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::info;

pub mod middleware;
pub mod models;
pub mod password;
pub mod routes;
pub mod session;
pub mod uploads;
pub mod views;

/// 应用共享状态
///
/// 以泛型参数持有仓库接口，handler只依赖trait，
/// 不依赖具体的Postgres实现。
pub struct AppState<PR: ProjectRepositoryTrait, UR: UserRepositoryTrait> {
    pub project_repository: Arc<PR>,
    pub user_repository: Arc<UR>,
    pub config: Arc<AppConfig>,
}

// 手动实现Clone，避免derive给泛型参数加多余的约束
impl<PR: ProjectRepositoryTrait, UR: UserRepositoryTrait> Clone for AppState<PR, UR> {
    fn clone(&self) -> Self {
        Self {
            project_repository: self.project_repository.clone(),
            user_repository: self.user_repository.clone(),
            config: self.config.clone(),
        }
    }
}

/// 具体的 AppState 类型别名
pub type ConcreteAppState = AppState<ProjectRepository, UserRepository>;

/// 启动 Web 服务
pub async fn start_web_service(
    pool: Pool<Postgres>,
    config: Arc<AppConfig>,
    mut shutdown_rx: Receiver<bool>,
) -> Result<()> {
    let shared_state: ConcreteAppState = AppState {
        project_repository: Arc::new(ProjectRepository::new(pool.clone())),
        user_repository: Arc::new(UserRepository::new(pool.clone())),
        config: config.clone(),
    };

    let router = routes::create_app_router(shared_state);

    info!("🚀 启动 Web Service 在 {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}
