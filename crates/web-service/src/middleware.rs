//! 请求中间件
//!
//! 登录检查统一做成中间件，挂在需要登录的路由上，
//! handler里不再单独判断。

use crate::session::AuthSession;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

/// 登录门禁
///
/// 未登录的请求一律303跳转到登录页；会话读取失败也按未登录处理。
pub async fn require_login(auth: AuthSession, request: Request, next: Next) -> Response {
    match auth.current_user().await {
        Ok(Some(_)) => next.run(request).await,
        _ => {
            debug!("🔐 未登录访问受保护页面，跳转到登录页");
            Redirect::to("/login").into_response()
        }
    }
}
