//! `%` 占位符格式化
//!
//! 与 `printf` 不同，占位符只看位置不看类型：`%` 加任意一个字符即消耗一个参数，
//! 参数按其 `Display` 实现输出。唯一有含义的说明符是 `%%`（输出一个 `%`）。
//!
//! ```
//! use dolog::format;
//!
//! assert_eq!(format("Bound to %s port %d", &[&"::1", &53]), "Bound to ::1 port 53");
//! assert_eq!(format("Query took %d milliseconds", &[&1232.4]), "Query took 1232.4 milliseconds");
//! ```

use core::fmt::{self, Display, Write};

/// 模板 + 参数，实现 `Display`，可直接用于 `write!` / `format!`
#[derive(Clone, Copy)]
pub struct Template<'a> {
    template: &'a str,
    args: &'a [&'a dyn Display],
}

impl<'a> Template<'a> {
    pub const fn new(template: &'a str, args: &'a [&'a dyn Display]) -> Self {
        Template { template, args }
    }
}

impl Display for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_template(f, self.template, self.args)
    }
}

impl fmt::Debug for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("template", &self.template)
            .field("args", &self.args.len())
            .finish()
    }
}

/// 格式化为字符串
///
/// 永不失败：某个参数的 `Display` 返回错误时，返回已生成的部分。
pub fn format(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    // 写入 String 本身不会失败；参数出错时保留已写入的部分
    let _ = write_template(&mut out, template, args);
    out
}

/// 将模板写入任意 `fmt::Write`
///
/// - 参数用完后，剩余占位符原样输出（`%%` 仍转义）
/// - 模板末尾单独的 `%` 原样输出，不消耗参数
/// - 多余的参数被忽略
///
/// 只有 `out` 或参数的 `Display` 出错时才返回 `Err`。
pub fn write_template<W: Write>(
    out: &mut W,
    template: &str,
    args: &[&dyn Display],
) -> fmt::Result {
    let mut args = args.iter();
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.write_str(&rest[..pos])?;

        let mut tail = rest[pos + 1..].chars();
        match tail.next() {
            Some('%') => out.write_char('%')?,
            Some(spec) => match args.next() {
                Some(arg) => write!(out, "{arg}")?,
                None => {
                    out.write_char('%')?;
                    out.write_char(spec)?;
                }
            },
            None => out.write_char('%')?,
        }
        rest = tail.as_str();
    }

    out.write_str(rest)
}
