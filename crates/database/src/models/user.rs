//! 用户数据库模型

/// 用户信息结构体
///
/// `password` 字段存储的是PHC格式的argon2id哈希，不是明文。
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserInfo {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// 用户注册参数
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    /// 已经哈希过的密码
    pub password: String,
}
