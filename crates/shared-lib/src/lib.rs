//! 🔧 共享库模块
//!
//! 这个模块包含了在多个 crate 之间共享的通用代码，包括：
//! - 程序配置
//! - 项目工期计算
//! - slug 工具函数

pub mod duration;
pub mod models;
pub mod slug;

// 重新导出常用类型
pub use duration::{parse_date_or_default, project_duration, DATE_FORMAT};
pub use models::AppConfig;
pub use slug::slugify;
