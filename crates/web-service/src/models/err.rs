use axum::extract::multipart::MultipartError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use color_eyre::eyre::Error;
use database::DatabaseError;
use thiserror::Error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
///
/// 错误文本直接写入响应体（纯文本），数据库错误是500
/// （查不到记录是404），参数和认证错误是400。
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，通常是用户参数不正确导致的，转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// 会话读写错误
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),

    /// multipart表单解析错误
    #[error(transparent)]
    MultipartError(#[from] MultipartError),

    /// 上传文件落盘错误
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// 登录校验失败（邮箱不存在/密码不匹配/未登录）
    #[error("{0}")]
    AuthFailed(String),

    /// 请求数据不完整或非法
    #[error("{0}")]
    BadRequest(String),

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Error),
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => {
                (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")).into_response()
            }
            AppError::RepositoryError(err) if err.is_not_found() => {
                (StatusCode::NOT_FOUND, format!("Record not found: {err}")).into_response()
            }
            AppError::RepositoryError(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Repository error: {err}")).into_response()
            }
            AppError::SessionError(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Session error: {err}")).into_response()
            }
            AppError::MultipartError(err) => {
                (StatusCode::BAD_REQUEST, format!("Invalid form data: {err}")).into_response()
            }
            AppError::IoError(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("File error: {err}")).into_response()
            }
            AppError::AuthFailed(msg) => (StatusCode::BAD_REQUEST, format!("Message: {msg}")).into_response(),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, format!("Message: {msg}")).into_response(),
            AppError::InternalError(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Something went wrong: {err}")).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_record_maps_to_404() {
        // 查不到记录的数据库错误走仓库错误变体，映射为404
        let err = AppError::RepositoryError(DatabaseError::SqlxError(sqlx::Error::RowNotFound));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_repository_errors_map_to_500() {
        let err = AppError::RepositoryError(DatabaseError::connection("refused"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_auth_and_bad_request_map_to_400() {
        let auth = AppError::AuthFailed("email or password is incorrect".to_string());
        assert_eq!(auth.into_response().status(), StatusCode::BAD_REQUEST);

        let bad = AppError::BadRequest("image file is required".to_string());
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
