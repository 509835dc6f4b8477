//! 项目相关的表单输入和页面视图对象

use crate::models::err::AppError;
use axum::extract::Multipart;
use database::{ProjectCreate, ProjectInfo, ProjectUpdate};
use shared_lib::{parse_date_or_default, project_duration, DATE_FORMAT};
use validator::Validate;

/// 创建/编辑项目的multipart表单
///
/// 两个表单字段完全相同，所以共用一个结构体。
/// 日期以原始字符串保存，入库前再解析（解析失败按零值处理）。
#[derive(Debug, Default, Validate)]
pub struct ProjectForm {
    #[validate(length(min = 1, message = "project name is required"))]
    pub project_name: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// 上传图片的原始文件名（用来取扩展名）
    pub image_name: String,
    pub image_data: Vec<u8>,
}

impl ProjectForm {
    /// 从multipart请求中收集表单字段
    ///
    /// 未知字段直接忽略；`technologies` 是复选框，同名字段会出现多次。
    /// 图片字段缺失时返回400，与其他字段"缺省为空"不同——
    /// 没有图片就没法派生存储路径。
    pub async fn collect(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ProjectForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(ToString::to_string) else {
                continue;
            };

            match name.as_str() {
                "project_name" => form.project_name = field.text().await?,
                "start_date" => form.start_date = field.text().await?,
                "end_date" => form.end_date = field.text().await?,
                "description" => form.description = field.text().await?,
                "technologies" => form.technologies.push(field.text().await?),
                "image" => {
                    form.image_name = field.file_name().unwrap_or("upload").to_string();
                    form.image_data = field.bytes().await?.to_vec();
                }
                _ => {}
            }
        }

        if form.image_data.is_empty() {
            return Err(AppError::BadRequest("image file is required".to_string()));
        }

        Ok(form)
    }

    /// 转换为数据库创建参数
    pub fn to_create(&self, image: String, user_id: Option<i32>) -> ProjectCreate {
        ProjectCreate {
            project_name: self.project_name.clone(),
            start_date: parse_date_or_default(&self.start_date),
            end_date: parse_date_or_default(&self.end_date),
            description: self.description.clone(),
            technologies: self.technologies.clone(),
            image,
            user_id,
        }
    }

    /// 转换为数据库更新参数
    pub fn to_update(&self, image: String) -> ProjectUpdate {
        ProjectUpdate {
            project_name: self.project_name.clone(),
            start_date: parse_date_or_default(&self.start_date),
            end_date: parse_date_or_default(&self.end_date),
            description: self.description.clone(),
            technologies: self.technologies.clone(),
            image,
        }
    }
}

/// 项目页面视图对象
///
/// 在数据库模型之上补充派生字段：格式化后的日期和工期字符串。
#[derive(Debug, Clone)]
pub struct ProjectView {
    pub id: i32,
    pub project_name: String,
    pub start_date: String,
    pub end_date: String,
    /// 根据起止日期派生的工期展示字符串，不入库
    pub duration: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: String,
}

impl From<ProjectInfo> for ProjectView {
    fn from(info: ProjectInfo) -> Self {
        Self {
            id: info.id,
            project_name: info.project_name,
            start_date: info.start_date.format(DATE_FORMAT).to_string(),
            end_date: info.end_date.format(DATE_FORMAT).to_string(),
            duration: project_duration(info.start_date, info.end_date),
            description: info.description,
            technologies: info.technologies,
            image: info.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_info() -> ProjectInfo {
        ProjectInfo {
            id: 7,
            project_name: "Portfolio Site".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 2, 10).unwrap(),
            description: "demo".to_string(),
            technologies: vec!["nodejs".to_string()],
            image: "public/uploads/portfolio-site.png".to_string(),
            user_id: Some(1),
        }
    }

    #[test]
    fn test_view_derives_duration() {
        let view = ProjectView::from(sample_info());
        assert_eq!(view.duration, "1 month 10 days");
        assert_eq!(view.start_date, "2023-01-01");
        assert_eq!(view.end_date, "2023-02-10");
    }

    #[test]
    fn test_form_to_create_parses_dates() {
        let form = ProjectForm {
            project_name: "demo".to_string(),
            start_date: "2023-01-01".to_string(),
            end_date: "2023-01-26".to_string(),
            ..Default::default()
        };
        let create = form.to_create("public/uploads/demo.png".to_string(), Some(3));
        assert_eq!(create.start_date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(create.user_id, Some(3));
    }

    #[test]
    fn test_form_bad_dates_fall_back_to_zero_value() {
        // 非法日期静默转为零值，不报错
        let form = ProjectForm {
            project_name: "demo".to_string(),
            start_date: "garbage".to_string(),
            end_date: "".to_string(),
            ..Default::default()
        };
        let create = form.to_create("img".to_string(), None);
        assert_eq!(create.start_date, NaiveDate::default());
        assert_eq!(create.end_date, NaiveDate::default());
    }

    #[test]
    fn test_form_requires_project_name() {
        let form = ProjectForm::default();
        assert!(form.validate().is_err());
    }
}
