//! 启动强制部署
//!
//! OSS 镜像启动时自动触发一次强制部署：用户可以更换 LLM/embedding 模型，
//! 之前索引的向量集合可能因此失效，需要重新部署模型定义

use serde_json::Value;
use tracing::info;

use crate::config::EnvConfig;
use crate::error::BootstrapError;
use crate::infra::WrenUiClient;
use crate::retry::RetryPolicy;

/// listProjects 响应的处理结论
#[derive(Clone, Debug, PartialEq)]
pub enum DeployPlan {
    /// 对第一个项目执行强制部署
    Deploy(i64),
    /// 还没有任何项目，跳过
    SkipNoProjects,
    /// 项目数据缺少可用的 id，跳过
    SkipInvalidPayload,
}

impl DeployPlan {
    /// 解析 listProjects 响应
    ///
    /// 响应结构不符合预期（顶层不是对象、嵌套字段缺失）时一律按"没有项目"处理
    pub fn from_response(res: &Value) -> Self {
        let projects = res
            .get("data")
            .and_then(|data| data.get("listProjects"))
            .and_then(|list| list.get("projects"))
            .and_then(Value::as_array);

        let projects = match projects {
            Some(projects) if !projects.is_empty() => projects,
            _ => return DeployPlan::SkipNoProjects,
        };

        match projects[0].get("id").and_then(Value::as_i64) {
            Some(id) => DeployPlan::Deploy(id),
            None => DeployPlan::SkipInvalidPayload,
        }
    }
}

/// 一次启动部署的终态
#[derive(Debug)]
pub enum BootstrapOutcome {
    /// 已触发部署，附带 wren-ui 的原始响应
    Deployed(Value),
    /// 跳过：还没有项目
    SkippedNoProjects,
    /// 跳过：项目数据无效
    SkippedInvalidPayload,
}

/// 执行一次完整的两步部署流程
pub async fn force_deploy(client: &WrenUiClient) -> Result<BootstrapOutcome, BootstrapError> {
    // Step 1: 查询现有项目（OSS docker 启动时用户可能还没创建项目）
    let res = client.list_projects().await?;

    let project_id = match DeployPlan::from_response(&res) {
        DeployPlan::Deploy(id) => id,
        DeployPlan::SkipNoProjects => {
            info!(
                "Forcing deployment skipped: no projects found yet. \
                 Create a project in wren-ui and deploy from the UI."
            );
            return Ok(BootstrapOutcome::SkippedNoProjects);
        }
        DeployPlan::SkipInvalidPayload => {
            info!("Forcing deployment skipped: listProjects returned invalid project payload.");
            return Ok(BootstrapOutcome::SkippedInvalidPayload);
        }
    };

    // Step 2: 强制部署，响应原样记录，不解析成功与否
    let res = client.deploy(project_id).await?;
    info!(project_id = project_id, response = %res, "Forcing deployment");

    Ok(BootstrapOutcome::Deployed(res))
}

/// 带重试地运行启动部署
///
/// 两次 HTTP 调用作为整体重试，只有传输层错误触发重试
pub async fn run(
    config: &EnvConfig,
    policy: RetryPolicy,
) -> Result<BootstrapOutcome, BootstrapError> {
    let client = WrenUiClient::new(config.graphql_endpoint())?;

    policy
        .run(|| force_deploy(&client), BootstrapError::is_transport)
        .await
}
