//! Wren 启动强制部署工具
//!
//! 面向 OSS 部署：容器启动时对现有项目触发一次强制部署。
//! 用户可以更换 LLM/embedding 模型，旧的向量集合可能需要重建，
//! 这个工具在启动阶段自动完成这次部署。

use std::path::Path;

use tracing::{error, info};

use wren_force_deploy::{EngineMode, EnvConfig, RetryPolicy};

fn main() {
    // 开发环境下加载 .env.dev，覆盖已有的环境变量
    if Path::new(".env.dev").exists() {
        let _ = dotenvy::from_filename_override(".env.dev");
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = EnvConfig::from_env();

    // 只有 wren_ui 引擎需要启动部署，其他引擎模式直接退出
    if config.engine != EngineMode::WrenUi {
        info!(engine = ?config.engine, "Engine is not wren_ui, skipping force deploy");
        return;
    }

    let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let result = rt.block_on(wren_force_deploy::run(&config, RetryPolicy::default()));

    if let Err(e) = result {
        error!(error = %e, "Force deploy failed after retries");
        std::process::exit(1);
    }
}
