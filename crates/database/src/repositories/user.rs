//! 用户仓库
//!
//! 负责用户注册和登录查询

use crate::models::user::{UserCreate, UserInfo};
use crate::repositories::traits::UserRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// `users` 表的查询列
const COLUMNS: &str = "id, name, email, password";

/// 用户仓库结构体
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// 创建新的用户仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserRepositoryTrait for UserRepository {
    /// 注册新用户
    async fn create_user(&self, user: UserCreate) -> DatabaseResult<UserInfo> {
        // 日志里不要输出password哈希
        debug!("📝 注册用户: {}", user.email);

        let query = format!(
            "INSERT INTO users (name, email, password, created_at) \
             VALUES ($1, $2, $3, now()) \
             RETURNING {COLUMNS}"
        );
        let user_info = sqlx::query_as::<_, UserInfo>(&query)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password)
            .fetch_one(&self.pool)
            .await?;

        debug!("✅ 用户注册成功: id={}", user_info.id);
        Ok(user_info)
    }

    /// 根据邮箱查询用户
    ///
    /// 登录流程使用，用 `fetch_optional` 把"用户不存在"
    /// 作为正常返回值交给调用方处理。
    async fn get_user_by_email(&self, email: &str) -> DatabaseResult<Option<UserInfo>> {
        debug!("🔍 根据邮箱查询用户: {}", email);

        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1 LIMIT 1");
        let user = sqlx::query_as::<_, UserInfo>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        debug!("✅ 查询完成 - 命中: {}", user.is_some());
        Ok(user)
    }
}
