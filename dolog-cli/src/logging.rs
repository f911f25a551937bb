//! tracing 后端的订阅者初始化
//!
//! 基于 `tracing-subscriber`，输出到标准输出，`RUST_LOG` 可覆盖默认过滤。

use std::io;

use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// 日志输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    #[default]
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 安装全局订阅者
pub fn init(format: LogFormat) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let layer = create_format_layer(format, io::stdout).with_filter(filter);
    tracing_subscriber::registry().with(layer).try_init()
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}
