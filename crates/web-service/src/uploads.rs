//! 上传文件处理
//!
//! 把上传的项目图片写入固定目录，文件名由项目名slug化后
//! 加上原始扩展名派生。同名项目会派生出同一个文件名，
//! 后上传的文件静默覆盖之前的。

use crate::models::err::AppError;
use shared_lib::slugify;
use std::path::Path;
use tracing::info;

/// 上传文件对外暴露的URL前缀
const PUBLIC_PREFIX: &str = "public/uploads";

/// 根据项目名和原始文件名派生存储文件名
///
/// 扩展名取自原始文件名，没有扩展名就不加
pub fn upload_filename(project_name: &str, original_filename: &str) -> String {
    let ext = Path::new(original_filename)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    format!("{}{}", slugify(project_name), ext)
}

/// 保存上传的图片，返回页面可引用的公开路径
pub async fn store_image(
    upload_dir: &Path,
    project_name: &str,
    original_filename: &str,
    data: &[u8],
) -> Result<String, AppError> {
    tokio::fs::create_dir_all(upload_dir).await?;

    let filename = upload_filename(project_name, original_filename);
    tokio::fs::write(upload_dir.join(&filename), data).await?;

    info!("🖼️ 图片已保存: {} ({} bytes)", filename, data.len());
    Ok(format!("{PUBLIC_PREFIX}/{filename}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_filename() {
        assert_eq!(upload_filename("My First Project", "photo.PNG"), "my-first-project.PNG");
        assert_eq!(upload_filename("Demo", "noext"), "demo");
    }

    #[tokio::test]
    async fn test_store_image_writes_file() {
        let dir = std::env::temp_dir().join("portfolio-upload-test");

        let path = store_image(&dir, "Test Project", "photo.png", b"abc")
            .await
            .unwrap();
        assert_eq!(path, "public/uploads/test-project.png");

        let on_disk = tokio::fs::read(dir.join("test-project.png")).await.unwrap();
        assert_eq!(on_disk, b"abc");
    }

    #[tokio::test]
    async fn test_same_name_overwrites() {
        // 同名项目的上传会覆盖之前的文件
        let dir = std::env::temp_dir().join("portfolio-upload-overwrite-test");

        store_image(&dir, "Collide", "a.jpg", b"first").await.unwrap();
        store_image(&dir, "collide", "b.jpg", b"second").await.unwrap();

        let on_disk = tokio::fs::read(dir.join("collide.jpg")).await.unwrap();
        assert_eq!(on_disk, b"second");
    }
}
