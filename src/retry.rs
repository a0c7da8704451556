//! 指数退避重试
//!
//! 数据驱动的重试策略：尝试次数、总耗时、初始延迟都是参数，
//! 测试可以注入零延迟策略

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tracing::warn;

/// 重试策略
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// 最大尝试次数（含首次）
    pub max_attempts: u32,
    /// 总耗时上限，连同待执行的退避延迟一起计算
    pub max_elapsed: Duration,
    /// 首次重试前的延迟，之后每次翻倍
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            max_elapsed: Duration::from_secs(60),
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// 第 `attempt` 次失败后的退避延迟（attempt 从 1 开始）
    pub fn delay_for(&self, attempt: u32) -> Duration {
        // 1s, 2s, 4s, ... 指数增长
        self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
    }

    /// 执行带重试的异步操作
    ///
    /// 只有 `retryable` 判定为真的错误才会触发重试；
    /// 尝试次数或总耗时任一超限后返回最后一次的错误
    pub async fn run<T, E, F, Fut, P>(&self, mut op: F, retryable: P) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        P: Fn(&E) -> bool,
        E: std::fmt::Display,
    {
        let started = Instant::now();
        let mut attempt = 0u32;

        loop {
            attempt += 1;

            let err = match op().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            if !retryable(&err) || attempt >= self.max_attempts {
                return Err(err);
            }

            let delay = self.delay_for(attempt);
            if started.elapsed() + delay >= self.max_elapsed {
                warn!(attempt = attempt, "Retry time budget exhausted, giving up");
                return Err(err);
            }

            warn!(
                attempt = attempt,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "Attempt failed, will retry"
            );
            tokio::time::sleep(delay).await;
        }
    }
}
