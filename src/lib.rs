// requires - Library Root
//
// 为 Claude Code /requires 命令搭建需求驱动开发的目录结构

pub mod error;
pub mod output;
pub mod project;
pub mod templates;
pub mod utils;

// 重新导出常用类型
pub use error::InitError;
pub use project::{initialize, InitOptions, Roots, StatusReport};
pub use templates::{DirTemplates, EmbeddedTemplates, TemplateSource};
