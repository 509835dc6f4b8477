//! 作品集站点启动入口
//!
//! 负责装配：加载配置、初始化数据库连接池、启动Web服务，
//! 并在收到退出信号时广播关闭通知。

use color_eyre::Result;
use database::initialize_database;
use shared_lib::AppConfig;
use tokio::signal;
use tokio::sync::watch;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = AppConfig::load()?;

    let pool = initialize_database(config.clone()).await?;

    // 关闭信号通过watch通道广播给服务
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        shutdown_signal().await;
        info!("🛑 收到退出信号，开始优雅关闭...");
        let _ = shutdown_tx.send(true);
    });

    web_service::start_web_service(pool, config, shutdown_rx).await?;

    info!("✅ 服务已全部退出");
    Ok(())
}

/// 等待 Ctrl+C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("安装 Ctrl+C 处理器失败");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("安装 SIGTERM 处理器失败")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
