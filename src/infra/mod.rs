//! 基础设施模块
//!
//! 封装外部依赖（HTTP client）

pub mod wren_ui;

pub use wren_ui::WrenUiClient;
