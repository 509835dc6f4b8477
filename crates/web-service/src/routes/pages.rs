//! 普通页面（首页、联系页）

use crate::models::err::AppError;
use crate::models::projects::ProjectView;
use crate::session::AuthSession;
use crate::{views, AppState};
use axum::extract::State;
use axum::response::Html;
use database::{ProjectRepositoryTrait, UserRepositoryTrait};
use tracing::debug;

/// 首页
///
/// 展示全部项目卡片。会话元数据（登录状态 + flash）在这里
/// 被读取，flash读完即清。
pub async fn home<PR: ProjectRepositoryTrait, UR: UserRepositoryTrait>(
    State(state): State<AppState<PR, UR>>,
    auth: AuthSession,
) -> Result<Html<String>, AppError> {
    debug!("🏠 渲染首页");

    let projects = state.project_repository.list_projects().await?;
    let meta = auth.page_meta().await?;

    let cards: Vec<ProjectView> = projects.into_iter().map(Into::into).collect();
    Ok(views::index_page(&meta, &cards))
}

/// 联系页（静态内容 + 会话元数据）
pub async fn contact(auth: AuthSession) -> Result<Html<String>, AppError> {
    let meta = auth.page_meta().await?;
    Ok(views::contact_page(&meta))
}
