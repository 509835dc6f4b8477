//! 密码哈希
//!
//! 使用 Argon2id（默认参数）+ 随机盐，存储PHC格式字符串，
//! 算法参数和盐都编码在哈希串里。

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// 哈希明文密码，返回PHC格式字符串
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// 校验明文密码与存储的哈希是否匹配
///
/// 匹配返回 `Ok(true)`，不匹配返回 `Ok(false)`，
/// 哈希串本身非法才返回 `Err`
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("my-secret").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("my-secret", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("my-secret").unwrap();
        assert!(!verify_password("not-my-secret", &hash).unwrap());
    }

    #[test]
    fn test_invalid_hash_is_error() {
        assert!(verify_password("whatever", "not-a-phc-string").is_err());
    }
}
