//! 服务层模块
//!
//! 包含所有业务逻辑服务:
//! - `config_service`: 配置服务,从环境变量加载端点与超时
//! - `decode_api`: 口令解析API客户端,发出单次POST并分类响应
//! - `session_controller`: 解析会话控制器,状态归属与请求取代的唯一仲裁者
//!
//! # 设计原则
//!
//! 1. **存在即合理**: 每个服务都有单一职责,互不重叠
//! 2. **优雅即简约**: 方法签名清晰,易于理解和使用
//! 3. **错误处理**: 所有外部调用都有完整错误处理和日志
//! 4. **日志安全**: 记录关键操作,不记录用户粘贴的口令原文
//!
//! # 服务架构
//!
//! ```text
//! ┌─────────────────┐
//! │  Tauri Commands │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌──────────────────────────┐
//! │      DecodeSession       │  状态 + 取消仲裁
//! └────────────┬─────────────┘
//!              │
//!              ▼
//! ┌──────────────────────────┐
//! │     DecodeApiClient      │  单次POST {code}
//! └────────────┬─────────────┘
//!              │
//!              ▼
//!         解析服务 (HTTP)
//! ```

pub mod config_service;
pub mod decode_api;
pub mod session_controller;

// 重导出常用类型,简化外部引用
pub use config_service::{ConfigService, DecodeConfig};
pub use decode_api::DecodeApiClient;
pub use session_controller::{DecodeSession, SubmitOutcome};
