use crate::services::{DecodeApiClient, DecodeConfig, DecodeSession};
use std::sync::Arc;

/// 应用全局状态
///
/// 存在即合理: 唯一字段即应用的唯一能力
/// - session: 解析会话控制器,状态归属与请求取代的单一来源
pub struct AppState {
    /// 会话控制器: 前端一切交互的入口
    pub session: Arc<DecodeSession>,
}

impl AppState {
    /// 初始化应用状态
    ///
    /// # 错误处理
    /// HTTP客户端构建失败将导致整个应用无法启动 - 这是必然,
    /// 因为无法发出请求的解析器等同于无用
    pub fn new(config: &DecodeConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let api = Arc::new(DecodeApiClient::new(config)?);
        let session = Arc::new(DecodeSession::new(api));

        tracing::info!(
            api_url = %config.api_url,
            timeout_secs = %config.timeout_secs,
            "AppState initialized with decode session"
        );

        Ok(Self { session })
    }
}
