//! dolog workspace facade
//!
//! ```text
//! dolog-config/  - 配置数据（LogSettings、Facility、Backend）
//! dolog/         - 格式化、sink、Logger、宏
//! dolog-cli/     - `dolog` 命令行工具
//! ```
//!
//! 应用直接依赖 `dolog` 即可；这里重导出两者，供端到端测试使用。

pub use dolog::*;
pub use dolog_config;
