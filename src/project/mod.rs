//! 项目管理模块
//!
//! 提供根目录解析、目录布局和初始化功能

pub mod initializer;
pub mod layout;
pub mod root_finder;

// 重导出
pub use initializer::*;
pub use layout::{Layout, Mode};
pub use root_finder::Roots;
