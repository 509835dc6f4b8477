//! 项目数据库模型
//!
//! 定义项目相关的数据库模型结构体

use chrono::NaiveDate;

/// 项目信息结构体
///
/// 与 `projects` 表的一行对应。工期字符串不入库，
/// 由web层在渲染时根据两个日期派生。
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectInfo {
    pub id: i32,
    pub project_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    /// 创建该项目的用户，匿名时为None
    pub user_id: Option<i32>,
}

/// 项目创建参数
#[derive(Debug, Clone)]
pub struct ProjectCreate {
    pub project_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub user_id: Option<i32>,
}

/// 项目更新参数
///
/// 编辑表单会整体重新提交，所以这里是全量字段更新，
/// 只有user_id保持创建时的值不变。
#[derive(Debug, Clone)]
pub struct ProjectUpdate {
    pub project_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
}
