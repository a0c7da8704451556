//! Wren 启动强制部署工具
//!
//! OSS 镜像启动时对现有项目触发一次强制部署

pub mod config;
pub mod error;
pub mod infra;
pub mod retry;
pub mod services;

pub use config::{EngineMode, EnvConfig};
pub use error::BootstrapError;
pub use retry::RetryPolicy;
pub use services::bootstrap::{run, BootstrapOutcome};
