//! 服务层模块
//!
//! 包含启动部署的业务逻辑

pub mod bootstrap;

pub use bootstrap::{force_deploy, BootstrapOutcome, DeployPlan};
