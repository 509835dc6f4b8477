//! 项目仓库
//!
//! 负责项目相关的数据库操作

use crate::models::project::{ProjectCreate, ProjectInfo, ProjectUpdate};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

/// `projects` 表的查询列，保证所有语句返回同样的行结构
const COLUMNS: &str =
    "id, project_name, start_date, end_date, description, technologies, image, user_id";

/// 项目仓库结构体
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    /// 获取全部项目列表
    ///
    /// 首页一次性展示所有项目，新创建的排在前面。
    /// 作品集的数据量很小，这里不做分页。
    async fn list_projects(&self) -> DatabaseResult<Vec<ProjectInfo>> {
        debug!("🔍 查询全部项目");

        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id DESC");
        let projects = sqlx::query_as::<_, ProjectInfo>(&query)
            .fetch_all(&self.pool)
            .await?;

        debug!("✅ 查询完成 - 共 {} 个项目", projects.len());
        Ok(projects)
    }

    /// 根据 ID 获取项目信息
    ///
    /// 使用 `fetch_one`，项目不存在时返回 `RowNotFound`，
    /// 由web层的错误类型映射为404。
    async fn get_project_by_id(&self, id: i32) -> DatabaseResult<ProjectInfo> {
        debug!("🔍 根据 ID 获取项目: {}", id);

        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        let project = sqlx::query_as::<_, ProjectInfo>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        debug!("✅ 项目获取成功: {:#?}", project);
        Ok(project)
    }

    /// 创建新项目
    ///
    /// 根据用户输入参数创建项目信息，`user_id` 记录创建者。
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        debug!("📝 创建项目: {:#?}", project);

        let query = format!(
            "INSERT INTO projects \
             (project_name, start_date, end_date, description, technologies, image, user_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, now(), now()) \
             RETURNING {COLUMNS}"
        );
        let project_info = sqlx::query_as::<_, ProjectInfo>(&query)
            .bind(&project.project_name)
            .bind(project.start_date)
            .bind(project.end_date)
            .bind(&project.description)
            .bind(&project.technologies)
            .bind(&project.image)
            .bind(project.user_id)
            .fetch_one(&self.pool)
            .await?;

        debug!("✅ 项目创建成功: {:#?}", project_info);
        Ok(project_info)
    }

    /// 更新项目信息
    ///
    /// 编辑表单全量提交，所以这里直接覆盖所有可编辑字段。
    /// `user_id` 保持创建时的值不变。
    async fn update_project(&self, id: i32, update: ProjectUpdate) -> DatabaseResult<ProjectInfo> {
        debug!("🔄 更新项目 {} 信息: {:#?}", id, update);

        let query = format!(
            "UPDATE projects \
             SET project_name = $2, start_date = $3, end_date = $4, \
                 description = $5, technologies = $6, image = $7, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, ProjectInfo>(&query)
            .bind(id)
            .bind(&update.project_name)
            .bind(update.start_date)
            .bind(update.end_date)
            .bind(&update.description)
            .bind(&update.technologies)
            .bind(&update.image)
            .fetch_one(&self.pool)
            .await?;

        debug!("✅ 项目更新成功: {:#?}", project);
        Ok(project)
    }

    /// 删除项目
    async fn delete_project(&self, id: i32) -> DatabaseResult<ProjectInfo> {
        debug!("🗑️ 删除项目: {}", id);

        let query = format!("DELETE FROM projects WHERE id = $1 RETURNING {COLUMNS}");
        let project = sqlx::query_as::<_, ProjectInfo>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        debug!("✅ 项目删除成功: {:#?}", project);
        Ok(project)
    }
}
