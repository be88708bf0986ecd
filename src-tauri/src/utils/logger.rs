use std::io;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日志系统
///
/// 配置结构化日志输出:
/// - JSON格式: 便于机器解析和日志分析
/// - 按天轮转: 每天一个新文件,自动管理日志历史
/// - 双输出: 控制台(开发) + 文件(生产)
/// - 环境变量控制: RUST_LOG=debug 可调整日志级别
///
/// # 日志级别
/// - ERROR: 传输类失败等需要关注的问题
/// - WARN: 服务端拒绝解析等预期内的失败
/// - INFO: 关键业务事件 (默认级别)
/// - DEBUG: 请求发出/取消/取代的细节
///
/// # 示例日志
/// ```json
/// {
///   "timestamp": "2026-08-24T10:30:45.123Z",
///   "level": "INFO",
///   "target": "jcommand_decode::services::decode_api",
///   "fields": {
///     "request_id": "3f1c...",
///     "field_count": 3
///   },
///   "message": "Decode succeeded"
/// }
/// ```
pub fn init() -> Result<(), io::Error> {
    // 日志目录: ./logs
    let log_dir = "logs";

    // 按天轮转的文件写入器
    // 文件命名格式: jcommand-decode.2026-08-24.log
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY) // 每天轮转
        .filename_prefix("jcommand-decode") // 文件名前缀
        .filename_suffix("log") // 文件扩展名
        .build(log_dir)
        .expect("无法创建日志文件");

    // 环境变量过滤器
    // 默认: INFO级别
    // 可通过 RUST_LOG=debug 覆盖
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // 文件层: JSON格式,便于日志分析工具解析
    let file_layer = fmt::layer()
        .json()
        .with_writer(file_appender)
        .with_target(true) // 包含模块路径
        .with_thread_ids(false) // 不记录线程ID(减少噪音)
        .with_thread_names(false)
        .with_file(false) // 不记录文件名(target已足够)
        .with_line_number(false);

    // 控制台层: 人类可读格式,便于开发调试
    let console_layer = fmt::layer()
        .with_writer(io::stdout)
        .with_target(true)
        .with_level(true)
        .with_ansi(true); // 彩色输出

    // 组合订阅器
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{error, info, warn};

    #[test]
    fn test_logger_initialization() {
        // 测试日志系统可以正常初始化
        let result = init();
        assert!(result.is_ok());

        // 写入测试日志
        info!("日志系统测试: INFO级别");
        warn!("日志系统测试: WARN级别");
        error!("日志系统测试: ERROR级别");

        // 结构化日志测试
        info!(
            request_id = "test_req_123",
            field_count = 2,
            "结构化日志测试"
        );
    }
}
