/// Tauri命令模块
///
/// 包含所有前端可调用的命令:
/// - decode_commands: 口令提交、状态快照、会话销毁、打开跳转链接

pub mod decode_commands;
