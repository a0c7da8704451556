//! wren-ui GraphQL HTTP Client
//!
//! 封装启动部署需要的两次 GraphQL 交互，复用连接池

use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::BootstrapError;

/// 单次请求的总超时（秒）
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// listProjects 查询
const LIST_PROJECTS_QUERY: &str = "query ListProjects { listProjects { projects { id } } }";

/// deploy 变更
const DEPLOY_MUTATION: &str =
    "mutation Deploy($projectId: Int!, $force: Boolean!) { deploy(projectId: $projectId, force: $force) }";

/// GraphQL 请求体
#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

/// wren-ui 客户端
///
/// 一次启动部署流程共用同一个客户端实例：
/// - 项目列表查询 (list_projects)
/// - 强制部署 (deploy)
#[derive(Clone)]
pub struct WrenUiClient {
    client: Client,
    graphql_url: String,
}

impl WrenUiClient {
    /// 创建新的 wren-ui 客户端
    ///
    /// # Arguments
    /// * `graphql_url` - GraphQL 接口完整地址
    pub fn new(graphql_url: impl Into<String>) -> Result<Self, BootstrapError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            graphql_url: graphql_url.into(),
        })
    }

    /// GraphQL 接口地址
    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    /// 查询现有项目列表
    pub async fn list_projects(&self) -> Result<Value, BootstrapError> {
        self.post(&list_projects_body()).await
    }

    /// 对指定项目执行强制部署
    pub async fn deploy(&self, project_id: i64) -> Result<Value, BootstrapError> {
        self.post(&deploy_body(project_id)).await
    }

    /// 发送 GraphQL 请求并解析 JSON 响应
    async fn post(&self, body: &GraphqlRequest<'_>) -> Result<Value, BootstrapError> {
        let res = self
            .client
            .post(&self.graphql_url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .json(body)
            .send()
            .await?
            .json::<Value>()
            .await?;

        Ok(res)
    }
}

/// 构造 listProjects 请求体
fn list_projects_body() -> GraphqlRequest<'static> {
    GraphqlRequest {
        query: LIST_PROJECTS_QUERY,
        variables: json!({}),
    }
}

/// 构造 deploy 请求体
fn deploy_body(project_id: i64) -> GraphqlRequest<'static> {
    GraphqlRequest {
        query: DEPLOY_MUTATION,
        variables: json!({ "force": true, "projectId": project_id }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_graphql_url() {
        let client = WrenUiClient::new("http://host:1234/api/graphql").unwrap();
        assert_eq!(client.graphql_url(), "http://host:1234/api/graphql");
    }

    #[test]
    fn test_list_projects_body() {
        let body = serde_json::to_value(list_projects_body()).unwrap();
        assert_eq!(
            body["query"],
            "query ListProjects { listProjects { projects { id } } }"
        );
        assert_eq!(body["variables"], json!({}));
    }

    #[test]
    fn test_deploy_body() {
        let body = serde_json::to_value(deploy_body(7)).unwrap();
        assert_eq!(
            body["query"],
            "mutation Deploy($projectId: Int!, $force: Boolean!) { deploy(projectId: $projectId, force: $force) }"
        );
        assert_eq!(body["variables"], json!({ "force": true, "projectId": 7 }));
    }
}
