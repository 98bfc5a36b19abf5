//! 嵌入资源管理
//!
//! 使用 rust-embed 将 `/requires` 命令和 README 模板编译进二进制

pub mod files;

pub use files::{DirTemplates, EmbeddedTemplates, Template, TemplateAssets, TemplateSource};
