//! 测试公共模块
//!
//! 提供脚本化的Mock解析服务,让reqwest真实走一遍HTTP路径,
//! 而无需依赖远端服务。每个响应可单独设置延迟与状态码,
//! 用于构造成功/业务拒绝/慢响应等场景。

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

/// 脚本化响应
///
/// 按连接到达顺序逐个消费; 脚本耗尽后一律返回500。
pub struct ScriptedResponse {
    /// 读完请求后、写响应前的延迟
    pub delay: Duration,
    /// HTTP状态码
    pub status: u16,
    /// 响应体 (JSON文本)
    pub body: String,
}

impl ScriptedResponse {
    /// 业务成功响应 (HTTP 200 + code 200 + data)
    pub fn success(data: serde_json::Value) -> Self {
        Self::json(serde_json::json!({ "code": 200, "msg": "success", "data": data }))
    }

    /// 业务拒绝响应 (HTTP 200 + 非200业务码)
    pub fn rejected(code: i64, msg: &str) -> Self {
        Self::json(serde_json::json!({ "code": code, "msg": msg }))
    }

    /// 任意JSON信封响应
    pub fn json(envelope: serde_json::Value) -> Self {
        Self {
            delay: Duration::ZERO,
            status: 200,
            body: envelope.to_string(),
        }
    }

    /// 原始响应体 (用于构造格式错误的响应)
    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            status,
            body: body.to_string(),
        }
    }

    /// 追加延迟
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Mock解析服务
///
/// 监听本地随机端口,按连接顺序发放脚本化响应。
/// 连接计数用于断言"未发出请求"的场景。
pub struct MockDecodeServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl MockDecodeServer {
    /// 启动Mock服务
    pub async fn spawn(script: Vec<ScriptedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("无法绑定本地端口");
        let addr = listener.local_addr().expect("无法获取监听地址");
        let hits = Arc::new(AtomicUsize::new(0));

        let queue = Arc::new(Mutex::new(std::collections::VecDeque::from(script)));
        let hits_counter = Arc::clone(&hits);

        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                hits_counter.fetch_add(1, Ordering::SeqCst);

                let response = queue.lock().await.pop_front().unwrap_or_else(|| {
                    ScriptedResponse::raw(500, r#"{"code":500,"msg":"script exhausted"}"#)
                });

                // 每个连接独立处理,慢响应不阻塞后续连接
                tokio::spawn(async move {
                    // 被取消的请求会在此处断开连接,写失败属预期,忽略即可
                    let _ = serve_one(stream, response).await;
                });
            }
        });

        Self { addr, hits }
    }

    /// 解析端点URL
    pub fn url(&self) -> String {
        format!("http://{}/jd/jcommand", self.addr)
    }

    /// 已接收的连接数
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// 处理单个连接: 读完整请求,延迟后写响应并关闭
async fn serve_one(mut stream: TcpStream, response: ScriptedResponse) -> std::io::Result<()> {
    read_request(&mut stream).await?;

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    let reason = match response.status {
        200 => "OK",
        400 => "Bad Request",
        500 => "Internal Server Error",
        _ => "OK",
    };
    let payload = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    );
    stream.write_all(payload.as_bytes()).await?;
    stream.flush().await?;
    stream.shutdown().await
}

/// 读取一个完整的HTTP请求 (头部 + Content-Length指定的请求体)
async fn read_request(stream: &mut TcpStream) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut tmp = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut tmp).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&tmp[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (key, value) = line.split_once(':')?;
            if key.trim().eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    let mut body_read = buf.len() - header_end;
    while body_read < content_length {
        let n = stream.read(&mut tmp).await?;
        if n == 0 {
            break;
        }
        body_read += n;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_serves_scripted_body() {
        let server = MockDecodeServer::spawn(vec![ScriptedResponse::rejected(400, "无效口令")]).await;

        let client = reqwest::Client::new();
        let response = client
            .post(server.url())
            .json(&serde_json::json!({ "code": "x" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["code"], 400);
        assert_eq!(body["msg"], "无效口令");
        assert_eq!(server.hits(), 1);
    }

    #[tokio::test]
    async fn test_mock_server_exhausted_script_returns_500() {
        let server = MockDecodeServer::spawn(vec![]).await;

        let client = reqwest::Client::new();
        let response = client
            .post(server.url())
            .json(&serde_json::json!({ "code": "x" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 500);
    }
}
