//! 解析会话控制器
//!
//! 职责: 独占持有会话状态,保证任意时刻至多一个"存活"请求
//! 策略: 每次submit为上一个未了结的请求打上取消标记,
//! 迟到的响应在写入前复查标记,确保最后发出者胜出,
//! 与网络到达顺序无关。

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::models::{DecodeEvent, DecodeResult, SessionState};
use crate::services::DecodeApiClient;

/// 一次submit的了结方式
#[derive(Debug)]
pub enum SubmitOutcome {
    /// 被更新的请求或dispose取代,结果已静默丢弃
    Superseded,

    /// 请求已了结,状态已更新; 失败时附带通知事件
    Settled(Option<DecodeEvent>),
}

impl SubmitOutcome {
    /// 是否被取代
    pub fn is_superseded(&self) -> bool {
        matches!(self, SubmitOutcome::Superseded)
    }

    /// 取出通知事件 (被取代或成功时为None)
    pub fn into_notification(self) -> Option<DecodeEvent> {
        match self {
            SubmitOutcome::Superseded => None,
            SubmitOutcome::Settled(event) => event,
        }
    }
}

/// 控制器内部状态
///
/// state与live token在同一把锁下变更:
/// 替换token与检查token必须原子,否则迟到响应可能写入旧状态。
#[derive(Default)]
struct SessionInner {
    state: SessionState,
    live: Option<CancellationToken>,
    disposed: bool,
}

/// 解析会话控制器
///
/// 展示层只通过三个入口与它交互:
/// - submit: 每次输入变化调用,取代旧请求
/// - snapshot: 读取当前状态渲染列表
/// - dispose: 卸载时调用,之后一切迟到响应均失效
pub struct DecodeSession {
    api: Arc<DecodeApiClient>,
    inner: Mutex<SessionInner>,
}

impl DecodeSession {
    /// 创建新的会话控制器
    pub fn new(api: Arc<DecodeApiClient>) -> Self {
        Self {
            api,
            inner: Mutex::new(SessionInner::default()),
        }
    }

    /// 提交一段口令文本
    ///
    /// # 副作用 (按顺序)
    /// 1. 取消上一个未了结的请求 (其响应届时将被丢弃)
    /// 2. 空输入: 清空状态,不发请求,直接了结
    /// 3. 非空输入: 同步置 is_loading=true,随后发出唯一一次POST
    ///
    /// # 了结方式 (恰好其一)
    /// - `Superseded`: 本请求在解析前被新submit或dispose取消
    /// - `Settled(None)`: 成功,结果已整体替换
    /// - `Settled(Some(event))`: 失败,结果已清空,事件供前端Toast
    pub async fn submit(&self, input: &str) -> SubmitOutcome {
        let request_id = Uuid::new_v4().to_string();

        let token = {
            let mut inner = self.inner.lock().await;

            if inner.disposed {
                tracing::debug!(request_id = %request_id, "Submit after dispose ignored");
                return SubmitOutcome::Superseded;
            }

            // 取消旧请求: 最后发出者胜出
            if let Some(old) = inner.live.take() {
                tracing::debug!(request_id = %request_id, "Superseding in-flight request");
                old.cancel();
            }

            // 空输入就地清空,不打扰解析服务
            if input.is_empty() {
                inner.state.clear();
                tracing::debug!(request_id = %request_id, "Empty input, state cleared locally");
                return SubmitOutcome::Settled(None);
            }

            inner.state.is_loading = true;
            let token = CancellationToken::new();
            inner.live = Some(token.clone());
            token
        };

        // 网络调用与取消标记竞速; 取消优先,避免同时就绪时误写状态
        let resolution = tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!(request_id = %request_id, "Request cancelled before resolution");
                return SubmitOutcome::Superseded;
            }
            result = self.api.decode(&request_id, input) => result,
        };

        let mut inner = self.inner.lock().await;

        // 响应与取消可能同时到达: 写入前在锁内复查
        if token.is_cancelled() {
            tracing::debug!(request_id = %request_id, "Late resolution discarded");
            return SubmitOutcome::Superseded;
        }

        inner.live = None;
        inner.state.is_loading = false;

        match resolution {
            Ok(result) => {
                inner.state.result = result;
                SubmitOutcome::Settled(None)
            }
            Err(error) => {
                inner.state.result = DecodeResult::default();
                let event = DecodeEvent::from_error(request_id.clone(), &error);
                match event.severity() {
                    "WARN" => tracing::warn!(
                        request_id = %request_id,
                        message = %event.message,
                        "Decode settled with service failure"
                    ),
                    _ => tracing::error!(
                        request_id = %request_id,
                        error = %error,
                        "Decode settled with transport failure"
                    ),
                }
                SubmitOutcome::Settled(Some(event))
            }
        }
    }

    /// 读取当前状态快照
    pub async fn snapshot(&self) -> SessionState {
        self.inner.lock().await.state.clone()
    }

    /// 销毁会话
    ///
    /// 展示层卸载时调用一次。无条件取消未了结的请求,
    /// 此后其响应既不会改写状态也不会产生通知; 再次dispose为无操作。
    pub async fn dispose(&self) {
        let mut inner = self.inner.lock().await;

        if inner.disposed {
            return;
        }
        inner.disposed = true;

        if let Some(live) = inner.live.take() {
            tracing::info!("Session disposed with request in flight, cancelling");
            live.cancel();
        } else {
            tracing::info!("Session disposed");
        }

        inner.state.clear();
    }
}
