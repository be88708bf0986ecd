use serde::{Deserialize, Serialize};

use crate::models::DecodeResult;

/// 会话状态快照
///
/// 控制器独占持有的可变状态,前端只能通过快照读取。
/// 生命周期与展示层一致: 挂载时创建,卸载时随dispose丢弃,
/// 不做任何持久化。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// 当前解析结果 (初始为空,任何失败后也为空)
    pub result: DecodeResult,

    /// 加载标记: 严格在请求发出与其了结之间为true
    pub is_loading: bool,
}

impl SessionState {
    /// 清空为初始状态 (保留加载标记语义由调用方决定)
    pub fn clear(&mut self) {
        self.result = DecodeResult::default();
        self.is_loading = false;
    }
}
