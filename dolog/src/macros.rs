//! 日志宏实现
//!
//! 参数按位置代入 `%` 占位符，可以是任意实现 `Display` 的值。宏丢弃 sink 错误；
//! 需要处理错误时直接调用 [`Logger::log`](crate::Logger::log)。

/// 记录 Info 级别日志
#[macro_export]
macro_rules! infolog {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::genlog!($logger, $crate::Severity::Info, $template $(, $arg)*)
    };
}

/// 记录 Warning 级别日志
#[macro_export]
macro_rules! warnlog {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::genlog!($logger, $crate::Severity::Warning, $template $(, $arg)*)
    };
}

/// 记录 Error 级别日志
#[macro_export]
macro_rules! errlog {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::genlog!($logger, $crate::Severity::Error, $template $(, $arg)*)
    };
}

/// 记录 verbose info
///
/// 惰性求值：verbose 关闭时模板和参数都不会被求值。
#[macro_export]
macro_rules! vinfolog {
    ($logger:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        let logger = &$logger;
        if logger.is_verbose() {
            $crate::infolog!(logger, $template $(, $arg)*)
        }
    }};
}

/// 通用日志宏
#[macro_export]
macro_rules! genlog {
    ($logger:expr, $severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        let _ = $logger.log(
            $severity,
            $template,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        );
    }};
}
