//! 项目管理页面（创建/详情/编辑/删除）
//!
//! 创建和编辑表单都是multipart提交（带图片文件），
//! 成功后统一303重定向回首页。

use crate::models::err::AppError;
use crate::models::projects::{ProjectForm, ProjectView};
use crate::session::AuthSession;
use crate::{uploads, views, AppState};
use axum::extract::{Multipart, Path, State};
use axum::response::{Html, Redirect};
use database::{ProjectRepositoryTrait, UserRepositoryTrait};
use tracing::{debug, info};
use validator::Validate;

/// 创建项目页（空表单）
pub async fn create_project_page(auth: AuthSession) -> Result<Html<String>, AppError> {
    let meta = auth.page_meta().await?;
    Ok(views::create_project_page(&meta))
}

/// 创建项目提交
///
/// 图片落盘成功后才写数据库，项目记录归属当前登录用户
pub async fn store_project<PR: ProjectRepositoryTrait, UR: UserRepositoryTrait>(
    State(state): State<AppState<PR, UR>>,
    auth: AuthSession,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    let user = auth
        .current_user()
        .await?
        .ok_or_else(|| AppError::AuthFailed("login required".to_string()))?;

    let form = ProjectForm::collect(multipart).await?;
    form.validate()?;

    let image = uploads::store_image(
        &state.config.upload_dir,
        &form.project_name,
        &form.image_name,
        &form.image_data,
    )
    .await?;

    let created = state
        .project_repository
        .create_project(form.to_create(image, Some(user.id)))
        .await?;

    info!("📝 新建项目: {} (id={})", created.project_name, created.id);
    Ok(Redirect::to("/"))
}

/// 项目详情页
pub async fn detail_project<PR: ProjectRepositoryTrait, UR: UserRepositoryTrait>(
    State(state): State<AppState<PR, UR>>,
    auth: AuthSession,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    debug!("🔍 查看项目详情: id={id}");

    let project = state.project_repository.get_project_by_id(id).await?;
    let meta = auth.page_meta().await?;

    Ok(views::detail_page(&meta, &ProjectView::from(project)))
}

/// 编辑项目页（表单带回显）
pub async fn edit_project_page<PR: ProjectRepositoryTrait, UR: UserRepositoryTrait>(
    State(state): State<AppState<PR, UR>>,
    auth: AuthSession,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let project = state.project_repository.get_project_by_id(id).await?;
    let meta = auth.page_meta().await?;

    Ok(views::edit_project_page(&meta, &ProjectView::from(project)))
}

/// 编辑项目提交
///
/// 编辑必须重新上传图片（表单字段与创建完全一致）
pub async fn update_project<PR: ProjectRepositoryTrait, UR: UserRepositoryTrait>(
    State(state): State<AppState<PR, UR>>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    let form = ProjectForm::collect(multipart).await?;
    form.validate()?;

    let image = uploads::store_image(
        &state.config.upload_dir,
        &form.project_name,
        &form.image_name,
        &form.image_data,
    )
    .await?;

    state
        .project_repository
        .update_project(id, form.to_update(image))
        .await?;

    info!("🔄 更新项目: id={id}");
    Ok(Redirect::to("/"))
}

/// 删除项目
///
/// 删除由页面上的GET链接直接触发，没有确认步骤
pub async fn delete_project<PR: ProjectRepositoryTrait, UR: UserRepositoryTrait>(
    State(state): State<AppState<PR, UR>>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    state.project_repository.delete_project(id).await?;

    info!("🗑️ 删除项目: id={id}");
    Ok(Redirect::to("/"))
}
