//! 根目录解析
//!
//! 进程级状态（当前目录、home 目录）只在启动时读取一次，之后显式传递

use std::env;
use std::path::{Path, PathBuf};

use crate::error::InitError;

/// `init` 可用的根目录
///
/// 两者都可能缺失；只有对应模式真正用到时才报错
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    /// 当前工作目录（project 模式的根）
    pub project: Option<PathBuf>,
    /// 用户 home 目录（global 模式的根）
    pub home: Option<PathBuf>,
}

impl Roots {
    pub fn new(project: Option<PathBuf>, home: Option<PathBuf>) -> Self {
        Self { project, home }
    }

    /// 从进程环境读取
    ///
    /// home 目录经由 `dirs::home_dir()`，在 Unix 上优先使用 `$HOME`
    pub fn from_env() -> Self {
        Self {
            project: env::current_dir().ok(),
            home: dirs::home_dir(),
        }
    }

    pub fn project(&self) -> Result<&Path, InitError> {
        self.project
            .as_deref()
            .ok_or(InitError::CurrentDirUnavailable)
    }

    pub fn home(&self) -> Result<&Path, InitError> {
        self.home.as_deref().ok_or(InitError::HomeDirUnavailable)
    }
}
