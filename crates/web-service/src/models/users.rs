//! 注册/登录表单

use serde::Deserialize;
use validator::Validate;

/// 注册表单（form-encoded POST）
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(email(message = "invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// 登录表单
///
/// 不做格式校验，查不到用户统一按"邮箱或密码错误"处理
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_form_rejects_bad_email() {
        let form = RegisterForm {
            name: "alice".to_string(),
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_register_form_accepts_valid_input() {
        let form = RegisterForm {
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(form.validate().is_ok());
    }
}
