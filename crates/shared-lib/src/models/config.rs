use color_eyre::eyre::Context;
use color_eyre::{Help, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// 程序配置
pub struct AppConfig {
    /// postgresql数据库链接字符串
    pub postgresql_conn_str: String,

    /// HTTP服务监听地址
    ///
    /// 可通过环境变量 `BIND_ADDR` 调整，默认 `0.0.0.0:5000`
    pub bind_addr: String,

    /// 静态文件目录，通过 `/public/` 前缀对外提供
    ///
    /// 可通过环境变量 `PUBLIC_DIR` 调整
    pub public_dir: PathBuf,

    /// 上传图片的存放目录
    ///
    /// 可通过环境变量 `UPLOAD_DIR` 调整，默认在静态文件目录下
    pub upload_dir: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        let _ = dotenvy::dotenv();

        // 读取数据库地址信息（仅支持postgresql）
        let db_url = std::env::var("DATABASE_URL")
            .context("Can not load DATABASE_URL in environment")
            .suggestion("设置 DATABASE_URL 环境变量")?;

        let config = AppConfig {
            postgresql_conn_str: db_url,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            public_dir: std::env::var("PUBLIC_DIR")
                .map_or_else(|_| PathBuf::from("public"), PathBuf::from),
            upload_dir: std::env::var("UPLOAD_DIR")
                .map_or_else(|_| PathBuf::from("public/uploads"), PathBuf::from),
        };
        Ok(Arc::new(config))
    }
}
