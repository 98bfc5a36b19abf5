//! 初始化错误类型

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// `init` 过程中的致命错误
///
/// 任何变体都会中止剩余步骤；已创建的目录不会回滚。
#[derive(Debug, Error)]
pub enum InitError {
    /// 模板源中缺少所需的模板文件
    #[error("template '{name}' not found in {source_desc}")]
    TemplateMissing { name: String, source_desc: String },

    /// 目录创建、文件读写等文件系统操作失败
    #[error("failed to {action} {}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// --global 模式下无法确定 home 目录
    #[error("could not determine the home directory (is $HOME set?)")]
    HomeDirUnavailable,

    /// project 模式下无法读取当前目录（例如已被删除）
    #[error("could not read the current directory (was it removed?)")]
    CurrentDirUnavailable,
}

impl InitError {
    pub(crate) fn fs(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        InitError::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}
