//! 注册/登录/退出

use crate::models::err::AppError;
use crate::models::users::{LoginForm, RegisterForm};
use crate::password::{hash_password, verify_password};
use crate::session::{AuthSession, SessionUser};
use crate::{views, AppState};
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use color_eyre::eyre::eyre;
use database::{ProjectRepositoryTrait, UserCreate, UserRepositoryTrait};
use tracing::info;
use validator::Validate;

/// 登录失败的统一提示，不区分"邮箱不存在"和"密码错误"
const BAD_CREDENTIALS: &str = "email or password is incorrect";

/// 注册页
///
/// 已登录用户直接跳回首页
pub async fn register_page(auth: AuthSession) -> Result<Response, AppError> {
    if auth.current_user().await?.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let meta = auth.page_meta().await?;
    Ok(views::register_page(&meta).into_response())
}

/// 注册提交
///
/// 密码哈希后入库，成功后带flash跳到登录页
pub async fn register<PR: ProjectRepositoryTrait, UR: UserRepositoryTrait>(
    State(state): State<AppState<PR, UR>>,
    auth: AuthSession,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, AppError> {
    form.validate()?;

    let password = hash_password(&form.password)
        .map_err(|e| AppError::InternalError(eyre!("密码哈希失败: {e}")))?;

    let user = state
        .user_repository
        .create_user(UserCreate {
            name: form.name,
            email: form.email,
            password,
        })
        .await?;

    info!("✅ 注册新用户: {} (id={})", user.email, user.id);

    auth.add_flash("Successfully registered!").await?;
    Ok(Redirect::to("/login"))
}

/// 登录页
///
/// 已登录用户直接跳回首页
pub async fn login_page(auth: AuthSession) -> Result<Response, AppError> {
    if auth.current_user().await?.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    let meta = auth.page_meta().await?;
    Ok(views::login_page(&meta).into_response())
}

/// 登录提交
pub async fn login<PR: ProjectRepositoryTrait, UR: UserRepositoryTrait>(
    State(state): State<AppState<PR, UR>>,
    auth: AuthSession,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    let user = state
        .user_repository
        .get_user_by_email(&form.email)
        .await?
        .ok_or_else(|| AppError::AuthFailed(BAD_CREDENTIALS.to_string()))?;

    let matched = verify_password(&form.password, &user.password)
        .map_err(|e| AppError::InternalError(eyre!("密码哈希解析失败: {e}")))?;
    if !matched {
        return Err(AppError::AuthFailed(BAD_CREDENTIALS.to_string()));
    }

    auth.login(SessionUser {
        id: user.id,
        name: user.name,
    })
    .await?;

    info!("✅ 用户登录: {} (id={})", user.email, user.id);

    auth.add_flash("Successfully login!").await?;
    Ok(Redirect::to("/"))
}

/// 退出登录：销毁会话后回首页
pub async fn logout(auth: AuthSession) -> Result<Redirect, AppError> {
    auth.logout().await?;
    Ok(Redirect::to("/"))
}
