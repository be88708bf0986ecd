use serde::{Deserialize, Serialize};

use crate::models::{DecodeError, DecodeResult};
use crate::services::config_service::DecodeConfig;

/// 口令解析API客户端
///
/// 职责:
/// - 向解析服务发送单次POST请求 (无重试)
/// - 将响应信封映射为 DecodeResult 或分类后的 DecodeError
///
/// 超时在构造时显式设置于reqwest客户端,不继承传输层默认值。
pub struct DecodeApiClient {
    http: reqwest::Client,
    endpoint: String,
}

/// 请求体: 原始口令文本置于code字段
#[derive(Debug, Serialize)]
struct DecodeRequest<'a> {
    code: &'a str,
}

/// 解析服务响应信封
///
/// - code: 业务码,200为成功哨兵
/// - msg: 服务端消息,业务失败时原样展示给用户
/// - data: 仅成功时存在的解析结果
#[derive(Debug, Deserialize)]
struct DecodeEnvelope {
    code: i64,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    data: Option<DecodeResult>,
}

/// 业务成功哨兵
const SUCCESS_CODE: i64 = 200;

/// msg缺失时的兜底文案
const FALLBACK_REJECT_MESSAGE: &str = "口令解析失败";

impl DecodeApiClient {
    /// 创建新的客户端
    ///
    /// # 错误
    /// - `DecodeError::NetworkFailed`: reqwest客户端构建失败
    pub fn new(config: &DecodeConfig) -> Result<Self, DecodeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DecodeError::NetworkFailed(format!("HTTP客户端构建失败: {}", e)))?;

        tracing::info!(
            endpoint = %config.api_url,
            timeout_secs = %config.timeout_secs,
            "Decode API client initialized"
        );

        Ok(Self {
            http,
            endpoint: config.api_url.clone(),
        })
    }

    /// 解析一段口令文本
    ///
    /// 单次POST,请求体 `{ "code": <原文> }`。
    /// 口令原文不进日志,只记录长度。
    ///
    /// # 返回值
    /// - `Ok(DecodeResult)`: 业务码200且data非空
    ///
    /// # 错误
    /// - `DecodeError::ServiceRejected`: 业务码非200或data缺失/为空
    /// - `DecodeError::HttpStatusError`: 非2xx HTTP状态
    /// - `DecodeError::NetworkFailed` / `RequestTimeout` / `JsonParseFailed`: 传输层失败
    pub async fn decode(&self, request_id: &str, input: &str) -> Result<DecodeResult, DecodeError> {
        tracing::debug!(
            request_id = %request_id,
            input_len = %input.len(),
            "Sending decode request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .json(&DecodeRequest { code: input })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(request_id = %request_id, error = %e, "Decode request failed");
                DecodeError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                request_id = %request_id,
                status = %status.as_u16(),
                "Decode service returned HTTP error"
            );
            return Err(DecodeError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!(request_id = %request_id, error = %e, "Failed to read response body");
            DecodeError::from(e)
        })?;

        let envelope: DecodeEnvelope = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                body_len = %body.len(),
                "Failed to parse decode response"
            );
            DecodeError::JsonParseFailed(e.to_string())
        })?;

        match envelope.data {
            Some(data) if envelope.code == SUCCESS_CODE && !data.is_empty() => {
                tracing::info!(
                    request_id = %request_id,
                    field_count = %data.field_count(),
                    "Decode succeeded"
                );
                Ok(data)
            }
            _ => {
                let message = envelope
                    .msg
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| FALLBACK_REJECT_MESSAGE.to_string());
                tracing::warn!(
                    request_id = %request_id,
                    code = %envelope.code,
                    msg = %message,
                    "Decode rejected by service"
                );
                Err(DecodeError::ServiceRejected {
                    code: envelope.code,
                    message,
                })
            }
        }
    }
}
