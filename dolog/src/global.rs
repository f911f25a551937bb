//! 进程级日志器（供 CLI / 应用入口使用）
//!
//! 库代码应显式传递 `Arc<Logger>`；这里只是为入口程序提供便利。

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::logger::ConsoleSink;
use crate::{Error, Logger, Result};

static GLOBAL_LOGGER: OnceCell<Arc<Logger>> = OnceCell::new();

/// 安装进程级日志器（只能调用一次）
pub fn init(logger: Arc<Logger>) -> Result<()> {
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| Error::AlreadyInitialized)
}

/// 获取进程级日志器
///
/// 未初始化时安装默认日志器：标准输出，无时间戳，verbose 关闭。
/// 之后再调用 [`init`] 会失败。
pub fn logger() -> &'static Arc<Logger> {
    GLOBAL_LOGGER.get_or_init(|| Logger::new(false).with_sink(ConsoleSink::stdout(false)))
}

/// 已安装时返回进程级日志器
pub fn try_logger() -> Option<&'static Arc<Logger>> {
    GLOBAL_LOGGER.get()
}

/// 是否已安装
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}
