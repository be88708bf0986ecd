use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 口令解析相关错误
///
/// 处理与解析服务交互时的各种失败场景。
/// 分为两类,全部就地恢复,不存在致命错误:
/// - 传输类: 网络/超时/HTTP状态/响应解析失败 -> 前端展示通用失败提示
/// - 服务类: 解析服务明确拒绝 -> 前端原样展示服务端消息
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum DecodeError {
    /// 网络请求失败
    ///
    /// 可能原因:
    /// - 网络连接中断
    /// - 解析服务不可达
    /// - DNS解析失败
    #[error("网络请求失败: {0}")]
    NetworkFailed(String),

    /// 请求超时
    ///
    /// 超过客户端配置的超时时间 (JCOMMAND_TIMEOUT_SECS)
    #[error("请求超时")]
    RequestTimeout,

    /// HTTP状态码错误
    ///
    /// 解析服务返回了非2xx状态码
    #[error("HTTP错误 {status}")]
    HttpStatusError { status: u16 },

    /// JSON解析失败
    ///
    /// 解析服务返回的数据格式不符合预期
    #[error("响应数据解析失败: {0}")]
    JsonParseFailed(String),

    /// 解析服务拒绝请求
    ///
    /// 响应格式正确,但业务码非200或缺少data字段。
    /// message为服务端原文,直接用于前端提示。
    #[error("口令解析被拒绝 (code {code}): {message}")]
    ServiceRejected { code: i64, message: String },
}

impl DecodeError {
    /// 是否为服务端业务拒绝 (区别于传输类失败)
    pub fn is_service_rejection(&self) -> bool {
        matches!(self, DecodeError::ServiceRejected { .. })
    }
}

/// 实现从reqwest::Error到DecodeError的转换
impl From<reqwest::Error> for DecodeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DecodeError::RequestTimeout
        } else if err.is_connect() {
            DecodeError::NetworkFailed("无法连接到解析服务".to_string())
        } else if let Some(status) = err.status() {
            DecodeError::HttpStatusError {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            DecodeError::JsonParseFailed(err.to_string())
        } else {
            DecodeError::NetworkFailed(err.to_string())
        }
    }
}

/// 实现从serde_json::Error到DecodeError的转换
impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::JsonParseFailed(err.to_string())
    }
}

/// 配置相关错误
///
/// 处理环境变量配置读取与校验的失败场景
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum ConfigError {
    /// 配置值无效
    ///
    /// 环境变量存在但无法解析或超出合法范围
    #[error("配置项 {key} 无效: {reason}")]
    InvalidValue { key: String, reason: String },
}
