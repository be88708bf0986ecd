//! 京东口令解析桌面应用
//!
//! 接收用户粘贴的口令文本,调用远端解析服务,
//! 将返回字段 (图片/标题/用户名/跳转链接) 以可复制的列表呈现。
//!
//! 核心为单一的解析会话控制器: 取消过期请求、发出唯一一次POST、
//! 将成功/业务失败/传输失败三种了结收敛为可渲染的状态。

pub mod commands;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use commands::decode_commands;
use services::ConfigService;
use state::AppState;

/// 启动Tauri应用
///
/// 初始化顺序: .env -> 日志 -> 配置 -> 应用状态 -> Tauri构建器。
/// 任何一步失败都直接终止启动 - 不完整的状态等同于无用。
pub fn run() {
    // 加载 .env (缺失时忽略,走默认配置)
    dotenvy::dotenv().ok();

    // 初始化日志系统
    utils::logger::init().expect("日志系统初始化失败");

    // 加载配置并构建应用状态
    let config = ConfigService::load_decode_config().expect("解析配置加载失败");
    let state = AppState::new(&config).expect("应用状态初始化失败");

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            decode_commands::submit_code,
            decode_commands::session_state,
            decode_commands::dispose_session,
            decode_commands::open_jump_url,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用时发生错误");
}
