//! 环境变量配置加载

use std::env;

/// 默认的 wren-ui 地址（docker compose 网络内的服务名）
const DEFAULT_WREN_UI_ENDPOINT: &str = "http://wren-ui:3000";

/// 引擎模式
///
/// 同一镜像可以在不同引擎模式下复用，只有 wren_ui 模式需要启动强制部署
#[derive(Clone, Debug, PartialEq)]
pub enum EngineMode {
    /// wren-ui 引擎（默认）
    WrenUi,
    /// 其他引擎，启动时不做任何事
    Other(String),
}

impl EngineMode {
    /// 从字符串解析，精确匹配 `wren_ui`
    pub fn from_str(s: &str) -> Self {
        match s {
            "wren_ui" => EngineMode::WrenUi,
            other => EngineMode::Other(other.to_string()),
        }
    }
}

impl Default for EngineMode {
    fn default() -> Self {
        EngineMode::WrenUi
    }
}

/// 环境配置
#[derive(Clone, Debug)]
pub struct EnvConfig {
    /// wren-ui 服务基础地址
    pub wren_ui_endpoint: String,
    /// 引擎模式
    pub engine: EngineMode,
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        let wren_ui_endpoint = env::var("WREN_UI_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_WREN_UI_ENDPOINT.to_string());

        let engine = env::var("ENGINE")
            .map(|v| EngineMode::from_str(&v))
            .unwrap_or_default();

        Self {
            wren_ui_endpoint,
            engine,
        }
    }

    /// GraphQL 接口地址：去掉基础地址末尾的 `/` 后追加 `/api/graphql`
    pub fn graphql_endpoint(&self) -> String {
        format!(
            "{}/api/graphql",
            self.wren_ui_endpoint.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_mode_from_str() {
        assert_eq!(EngineMode::from_str("wren_ui"), EngineMode::WrenUi);
        assert_eq!(
            EngineMode::from_str("wren_ibis"),
            EngineMode::Other("wren_ibis".to_string())
        );
        // 精确匹配，大小写不同视为其他引擎
        assert_eq!(
            EngineMode::from_str("WREN_UI"),
            EngineMode::Other("WREN_UI".to_string())
        );
        assert_eq!(EngineMode::default(), EngineMode::WrenUi);
    }

    #[test]
    fn test_graphql_endpoint() {
        let config = EnvConfig {
            wren_ui_endpoint: "http://host:1234/".to_string(),
            engine: EngineMode::WrenUi,
        };
        assert_eq!(config.graphql_endpoint(), "http://host:1234/api/graphql");

        let config = EnvConfig {
            wren_ui_endpoint: "http://host:1234".to_string(),
            engine: EngineMode::WrenUi,
        };
        assert_eq!(config.graphql_endpoint(), "http://host:1234/api/graphql");

        let config = EnvConfig {
            wren_ui_endpoint: "http://host:1234///".to_string(),
            engine: EngineMode::WrenUi,
        };
        assert_eq!(config.graphql_endpoint(), "http://host:1234/api/graphql");
    }

    #[test]
    fn test_from_env() {
        // 单个测试内顺序覆盖默认值与显式值，避免并发测试的环境变量竞争
        env::remove_var("WREN_UI_ENDPOINT");
        env::remove_var("ENGINE");

        let config = EnvConfig::from_env();
        assert_eq!(config.wren_ui_endpoint, "http://wren-ui:3000");
        assert_eq!(config.engine, EngineMode::WrenUi);
        assert_eq!(config.graphql_endpoint(), "http://wren-ui:3000/api/graphql");

        env::set_var("WREN_UI_ENDPOINT", "http://localhost:3000/");
        env::set_var("ENGINE", "wren_ibis");

        let config = EnvConfig::from_env();
        assert_eq!(config.wren_ui_endpoint, "http://localhost:3000/");
        assert_eq!(
            config.engine,
            EngineMode::Other("wren_ibis".to_string())
        );

        env::remove_var("WREN_UI_ENDPOINT");
        env::remove_var("ENGINE");
    }
}
