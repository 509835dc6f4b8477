//! 用户仓库 trait 定义

use crate::models::user::{UserCreate, UserInfo};
use crate::DatabaseResult;

/// 用户仓库抽象接口
///
/// 用户只有注册（插入）和登录查询两个操作，
/// 没有更新和删除用户的功能。
#[async_trait::async_trait]
pub trait UserRepositoryTrait: Send + Sync + Clone + 'static {
    /// 注册新用户
    ///
    /// `email` 列有唯一约束，重复注册会返回数据库错误
    async fn create_user(&self, user: UserCreate) -> DatabaseResult<UserInfo>;

    /// 根据邮箱查询用户（登录用）
    ///
    /// 用户不存在时返回 `None`，由调用方决定如何响应
    async fn get_user_by_email(&self, email: &str) -> DatabaseResult<Option<UserInfo>>;
}
