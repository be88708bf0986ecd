use crate::models::{DecodeEvent, SessionState};
use crate::state::AppState;
use serde::{Deserialize, Serialize};
use tauri::State;
use tauri_plugin_shell::ShellExt;

/// 提交口令响应
///
/// 每次提交返回的完整快照:
/// - state: 了结后的会话状态,直接用于渲染列表
/// - notification: 失败时的Toast事件,成功与被取代时为None
/// - superseded: 本次提交是否已被更新的提交取代,指导前端忽略本响应
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitCodeResponse {
    /// 会话状态快照
    pub state: SessionState,

    /// 失败通知事件
    pub notification: Option<DecodeEvent>,

    /// 是否被取代
    pub superseded: bool,
}

/// 提交口令命令
///
/// 前端在搜索框每次变化时调用 (前端自行节流)。
/// 控制器保证旧请求被取消,最后提交者胜出。
///
/// # 错误处理哲学
/// 解析失败不是命令错误: 它作为notification返回,前端只需展示。
/// Err仅保留给命令层自身的意外情况。
#[tauri::command]
pub async fn submit_code(
    text: String,
    state: State<'_, AppState>,
) -> Result<SubmitCodeResponse, String> {
    tracing::debug!(input_len = %text.len(), "submit_code command called");

    let outcome = state.session.submit(&text).await;
    let superseded = outcome.is_superseded();
    let notification = outcome.into_notification();
    let snapshot = state.session.snapshot().await;

    Ok(SubmitCodeResponse {
        state: snapshot,
        notification,
        superseded,
    })
}

/// 读取会话状态命令
///
/// 供前端挂载或重绘时拉取当前快照。
#[tauri::command]
pub async fn session_state(state: State<'_, AppState>) -> Result<SessionState, String> {
    Ok(state.session.snapshot().await)
}

/// 销毁会话命令
///
/// 前端卸载时调用一次,未了结的请求被无条件取消。
#[tauri::command]
pub async fn dispose_session(state: State<'_, AppState>) -> Result<(), String> {
    tracing::info!("dispose_session command called");
    state.session.dispose().await;
    Ok(())
}

/// 打开跳转链接命令
///
/// 在系统浏览器中打开当前解析结果的jumpUrl。
/// 结果中没有链接时返回错误文案,前端直接展示。
#[tauri::command]
pub async fn open_jump_url(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let snapshot = state.session.snapshot().await;
    let url = snapshot
        .result
        .jump_url
        .ok_or_else(|| "当前结果中没有跳转链接".to_string())?;

    tracing::info!("Opening jump url in system browser");

    app.shell()
        .open(url, None)
        .map_err(|e| format!("无法打开链接: {}", e))
}
