//! 项目仓库 trait 定义

use crate::models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
use crate::DatabaseResult;

/// 项目仓库抽象接口
///
/// 定义了项目相关的所有数据库操作
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + Clone + 'static {
    /// 获取全部项目列表（首页展示，新项目在前）
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>>;

    /// 根据 ID 获取项目信息
    ///
    /// 项目不存在时返回 `RowNotFound` 错误，由web层转换为404
    async fn get_project_by_id(&self, id: i32) -> DatabaseResult<ProjectInfo>;

    /// 创建新项目
    ///
    /// # 返回值
    /// 返回创建的项目信息
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo>;

    /// 更新项目信息
    ///
    /// # 参数
    /// - `id`: 项目 ID
    /// - `update`: 更新信息
    ///
    /// # 返回值
    /// 返回更新后的项目信息
    async fn update_project(&self, id: i32, update: ProjectUpdate) -> DatabaseResult<ProjectInfo>;

    /// 删除项目
    ///
    /// # 返回值
    /// 返回被删除的项目信息
    async fn delete_project(&self, id: i32) -> DatabaseResult<ProjectInfo>;
}
