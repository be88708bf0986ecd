use serde::{Deserialize, Serialize};

/// 口令解析结果
///
/// 解析服务成功时返回的稀疏字段集,全部可选,无嵌套。
/// 不变量: 存在的字段恰好等于服务端本次返回的键;
/// 失败或空输入后整体清空,不保留旧字段。
///
/// 字段使用camelCase以对齐解析服务的JSON键名
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeResult {
    /// 附图URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,

    /// 头像URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_img: Option<String>,

    /// 解析出的标题文本
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// 解析出的用户名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// 解析出的跳转链接
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jump_url: Option<String>,
}

impl DecodeResult {
    /// 是否为空结果 (所有字段均缺失)
    pub fn is_empty(&self) -> bool {
        self.img.is_none()
            && self.head_img.is_none()
            && self.title.is_none()
            && self.user_name.is_none()
            && self.jump_url.is_none()
    }

    /// 存在字段的数量 (用于日志,不记录字段值)
    pub fn field_count(&self) -> usize {
        self.entries().len()
    }

    /// 按固定顺序展开存在的字段
    ///
    /// 键名与服务端JSON一致,前端直接用作列表行的标题,
    /// 值作为副标题与复制内容。
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut rows = Vec::new();
        if let Some(v) = &self.img {
            rows.push(("img", v.as_str()));
        }
        if let Some(v) = &self.head_img {
            rows.push(("headImg", v.as_str()));
        }
        if let Some(v) = &self.title {
            rows.push(("title", v.as_str()));
        }
        if let Some(v) = &self.user_name {
            rows.push(("userName", v.as_str()));
        }
        if let Some(v) = &self.jump_url {
            rows.push(("jumpUrl", v.as_str()));
        }
        rows
    }
}
