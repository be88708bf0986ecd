//! 数据模型模块
//!
//! 包含所有核心数据结构:
//! - errors: 错误类型定义 (解析错误、配置错误)
//! - decode_result: 口令解析结果 (稀疏字段集)
//! - session_state: 会话状态快照 (结果 + 加载标记)
//! - decode_event: 前端通知事件 (失败提示与日志追踪)
//!
//! # 设计原则
//!
//! 1. **存在即合理**: 每个字段都有明确目的,无冗余
//! 2. **优雅即简约**: 类型名自文档化,代码自我阐述
//! 3. **错误处理**: 两类失败全部就地恢复,提供完整上下文
//! 4. **日志安全**: 用户粘贴的口令原文不记录到日志

pub mod decode_event;
pub mod decode_result;
pub mod errors;
pub mod session_state;

// 重导出常用类型,简化外部引用
pub use decode_event::{DecodeEvent, DecodeEventType};
pub use decode_result::DecodeResult;
pub use errors::{ConfigError, DecodeError};
pub use session_state::SessionState;
