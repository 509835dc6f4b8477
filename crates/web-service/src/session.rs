//! 会话状态
//!
//! 对 [`tower_sessions::Session`] 的类型化封装。
//!
//! 登录信息和flash消息都通过这里的接口读写，handler不直接
//! 操作会话键值。读不到登录信息就按未登录处理，不会中断请求。

use crate::models::err::AppError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tower_sessions::{Expiry, Session};

/// 登录用户在会话里的存储键
const AUTH_USER_KEY: &str = "auth_user";

/// 一次性通知消息的存储键
const FLASH_KEY: &str = "flash";

/// 登录会话的固定有效期（小时），到期后需要重新登录，期间不续期
const SESSION_TTL_HOURS: i64 = 3;

/// 会话中记录的登录用户
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i32,
    pub name: String,
}

/// 每次页面渲染需要的会话元数据
///
/// `flash` 在读取时即被消费，同一条消息只会展示一次。
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    pub is_login: bool,
    pub user_name: String,
    pub flash: Option<String>,
}

/// 类型化的会话访问器
#[derive(Debug, Clone)]
pub struct AuthSession(Session);

impl AuthSession {
    /// 读取当前登录用户
    ///
    /// 未登录（或会话里没有合法数据）返回 `None`
    pub async fn current_user(&self) -> Result<Option<SessionUser>, AppError> {
        Ok(self.0.get::<SessionUser>(AUTH_USER_KEY).await?)
    }

    /// 登录：写入用户信息并设置固定3小时有效期
    pub async fn login(&self, user: SessionUser) -> Result<(), AppError> {
        self.0.insert(AUTH_USER_KEY, &user).await?;
        self.0.set_expiry(Some(Expiry::AtDateTime(
            OffsetDateTime::now_utc() + Duration::hours(SESSION_TTL_HOURS),
        )));
        Ok(())
    }

    /// 退出登录：销毁整个会话，flash等数据一并清除
    pub async fn logout(&self) -> Result<(), AppError> {
        Ok(self.0.flush().await?)
    }

    /// 追加一条一次性通知消息
    pub async fn add_flash(&self, message: &str) -> Result<(), AppError> {
        let mut flashes: Vec<String> = self.0.get(FLASH_KEY).await?.unwrap_or_default();
        flashes.push(message.to_string());
        self.0.insert(FLASH_KEY, &flashes).await?;
        Ok(())
    }

    /// 取出并清空全部通知消息
    ///
    /// 多条消息拼接成一条展示。读取即删除，
    /// 下次渲染不会再出现。
    pub async fn take_flash(&self) -> Result<Option<String>, AppError> {
        let flashes: Option<Vec<String>> = self.0.remove(FLASH_KEY).await?;
        Ok(flashes.filter(|f| !f.is_empty()).map(|f| f.join("")))
    }

    /// 组装页面渲染所需的会话元数据（登录状态 + 用户名 + flash）
    pub async fn page_meta(&self) -> Result<PageMeta, AppError> {
        let flash = self.take_flash().await?;

        Ok(match self.current_user().await? {
            Some(user) => PageMeta {
                is_login: true,
                user_name: user.name,
                flash,
            },
            None => PageMeta {
                is_login: false,
                user_name: String::new(),
                flash,
            },
        })
    }
}

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = <Session as FromRequestParts<S>>::Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tower_sessions::{MemoryStore, SessionStore};

    fn new_session() -> AuthSession {
        let store = Arc::new(MemoryStore::default());
        AuthSession(Session::new(None, store, None))
    }

    #[tokio::test]
    async fn test_empty_session_is_logged_out() {
        let auth = new_session();

        let meta = auth.page_meta().await.unwrap();
        assert!(!meta.is_login);
        assert!(meta.user_name.is_empty());
        assert!(meta.flash.is_none());
    }

    #[tokio::test]
    async fn test_login_and_logout() {
        let auth = new_session();

        auth.login(SessionUser {
            id: 1,
            name: "alice".to_string(),
        })
        .await
        .unwrap();

        let meta = auth.page_meta().await.unwrap();
        assert!(meta.is_login);
        assert_eq!(meta.user_name, "alice");

        auth.logout().await.unwrap();
        assert!(auth.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_flash_is_removed_on_read() {
        // 一次性消息：读一次就没了
        let auth = new_session();

        auth.add_flash("Successfully registered!").await.unwrap();
        assert_eq!(
            auth.take_flash().await.unwrap().as_deref(),
            Some("Successfully registered!")
        );
        assert!(auth.take_flash().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_multiple_flashes_join_into_one() {
        let auth = new_session();

        auth.add_flash("first").await.unwrap();
        auth.add_flash("second").await.unwrap();

        assert_eq!(auth.take_flash().await.unwrap().as_deref(), Some("firstsecond"));
    }

    #[tokio::test]
    async fn test_page_meta_consumes_flash() {
        let auth = new_session();

        auth.add_flash("Successfully login!").await.unwrap();

        let first = auth.page_meta().await.unwrap();
        assert_eq!(first.flash.as_deref(), Some("Successfully login!"));

        let second = auth.page_meta().await.unwrap();
        assert!(second.flash.is_none());
    }
}
