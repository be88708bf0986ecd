use std::env;

use crate::models::ConfigError;

/// 解析服务配置
///
/// 两个可调项,均有生产可用的默认值:
/// - 服务地址: 固定的口令解析端点
/// - 客户端超时: 显式设置,不依赖传输层默认值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeConfig {
    /// 解析服务端点URL
    pub api_url: String,

    /// 客户端超时 (秒)
    pub timeout_secs: u64,
}

/// 默认解析服务端点
const DEFAULT_API_URL: &str = "https://api.jds.codes/jd/jcommand";

/// 默认客户端超时 (秒)
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// 超时上限 (秒): 超过此值几乎必然是配置笔误
const MAX_TIMEOUT_SECS: u64 = 300;

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// 配置服务
///
/// 管理应用程序配置的读取,职责单一:
/// - 从环境变量加载解析服务配置 (.env 由 main via dotenvy 预加载)
/// - 校验取值合法性,非法值直接报错而非静默回退
pub struct ConfigService;

impl ConfigService {
    /// 从环境变量加载解析配置
    ///
    /// 读取环境变量:
    /// - JCOMMAND_API_URL: 解析服务地址 (默认: 官方端点)
    /// - JCOMMAND_TIMEOUT_SECS: 客户端超时秒数 (默认: 10, 范围: 1-300)
    pub fn load_decode_config() -> Result<DecodeConfig, ConfigError> {
        let api_url = match env::var("JCOMMAND_API_URL") {
            Ok(url) => {
                let trimmed = url.trim().to_string();
                if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
                    return Err(ConfigError::InvalidValue {
                        key: "JCOMMAND_API_URL".to_string(),
                        reason: format!("必须以http://或https://开头: {}", trimmed),
                    });
                }
                trimmed
            }
            Err(_) => DEFAULT_API_URL.to_string(),
        };

        let timeout_secs = match env::var("JCOMMAND_TIMEOUT_SECS") {
            Ok(raw) => {
                let parsed: u64 =
                    raw.trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue {
                            key: "JCOMMAND_TIMEOUT_SECS".to_string(),
                            reason: format!("无法解析为正整数: {}", raw),
                        })?;
                if parsed == 0 || parsed > MAX_TIMEOUT_SECS {
                    return Err(ConfigError::InvalidValue {
                        key: "JCOMMAND_TIMEOUT_SECS".to_string(),
                        reason: format!("取值范围为1-{}: {}", MAX_TIMEOUT_SECS, parsed),
                    });
                }
                parsed
            }
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let config = DecodeConfig {
            api_url,
            timeout_secs,
        };

        tracing::info!(
            api_url = %config.api_url,
            timeout_secs = %config.timeout_secs,
            "Decode config loaded"
        );

        Ok(config)
    }
}
