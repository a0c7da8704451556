//! 统一错误处理
//!
//! 启动部署过程中只有传输层错误会向外传播（并参与重试），
//! 其余异常在本地降级为跳过日志

/// 启动部署错误
#[derive(Debug)]
pub enum BootstrapError {
    /// 网络/传输层错误（连接失败、超时、响应体读取失败）
    Transport(reqwest::Error),
}

impl BootstrapError {
    /// 是否为可重试的传输层错误
    pub fn is_transport(&self) -> bool {
        matches!(self, BootstrapError::Transport(_))
    }
}

impl From<reqwest::Error> for BootstrapError {
    fn from(e: reqwest::Error) -> Self {
        BootstrapError::Transport(e)
    }
}

impl std::fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BootstrapError::Transport(e) => write!(f, "Transport error: {}", e),
        }
    }
}

impl std::error::Error for BootstrapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BootstrapError::Transport(e) => Some(e),
        }
    }
}
