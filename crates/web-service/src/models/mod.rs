//! Web层数据模型
//!
//! 表单输入、页面视图对象和错误类型

pub mod err;
pub mod projects;
pub mod users;

pub use err::AppError;
