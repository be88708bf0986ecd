use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::DecodeError;

/// 解析通知事件 (用于前端Toast提示和日志追踪)
///
/// 仅失败会产生通知: 成功直接体现在状态快照里,
/// 被取代的请求静默丢弃,两者都不打扰用户。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeEvent {
    /// 事件类型
    pub event_type: DecodeEventType,

    /// 时间戳
    pub timestamp: DateTime<Utc>,

    /// 请求ID (每次submit生成)
    pub request_id: String,

    /// 提示文案: 服务类失败为服务端原文,传输类失败为通用文案
    pub message: String,

    /// 额外详情 (JSON格式,灵活扩展)
    pub details: Value,
}

/// 解析事件类型
///
/// 对应两类可恢复失败:
/// - ServiceFailure: 服务端明确拒绝 (业务码非200或无data)
/// - TransportFailure: 网络/超时/响应格式问题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeEventType {
    /// 解析服务拒绝
    ServiceFailure,

    /// 传输层失败
    TransportFailure,
}

/// 传输类失败的通用提示文案
const TRANSPORT_FAILURE_MESSAGE: &str = "解析失败,请稍后重试";

impl DecodeEvent {
    /// 创建新的解析事件
    pub fn new(
        event_type: DecodeEventType,
        request_id: String,
        message: String,
        details: Value,
    ) -> Self {
        Self {
            event_type,
            timestamp: Utc::now(),
            request_id,
            message,
            details,
        }
    }

    /// 创建服务拒绝事件
    ///
    /// # 参数
    /// - `request_id`: 请求ID
    /// - `code`: 服务端业务码
    /// - `message`: 服务端消息原文
    pub fn service_failure(request_id: String, code: i64, message: String) -> Self {
        Self::new(
            DecodeEventType::ServiceFailure,
            request_id,
            message,
            serde_json::json!({ "code": code }),
        )
    }

    /// 创建传输失败事件
    ///
    /// 用户看到通用文案,具体错误进details供诊断。
    pub fn transport_failure(request_id: String, error: &DecodeError) -> Self {
        Self::new(
            DecodeEventType::TransportFailure,
            request_id,
            TRANSPORT_FAILURE_MESSAGE.to_string(),
            serde_json::json!({ "error": error.to_string() }),
        )
    }

    /// 从解析错误构造对应的通知事件
    pub fn from_error(request_id: String, error: &DecodeError) -> Self {
        match error {
            DecodeError::ServiceRejected { code, message } => {
                Self::service_failure(request_id, *code, message.clone())
            }
            other => Self::transport_failure(request_id, other),
        }
    }

    /// 获取事件的严重程度级别
    ///
    /// 用于日志输出时确定日志级别:
    /// - ServiceFailure -> WARN (多为用户输入问题)
    /// - TransportFailure -> ERROR
    pub fn severity(&self) -> &'static str {
        match self.event_type {
            DecodeEventType::ServiceFailure => "WARN",
            DecodeEventType::TransportFailure => "ERROR",
        }
    }
}
