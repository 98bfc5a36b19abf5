//! 项目初始化
//!
//! 创建 `requires/` 和 `.claude/commands/` 目录结构并安装模板

use serde::Serialize;
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::debug;

use super::layout::{Layout, Mode};
use super::root_finder::Roots;
use crate::error::InitError;
use crate::templates::{Template, TemplateSource};
use crate::utils::{ensure_dir, install_file, DirStatus, FileStatus};

/// `init` 选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitOptions {
    /// 安装到 home 目录而不是当前项目
    pub global: bool,
    /// 覆盖已存在的文件
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirEntry {
    pub path: PathBuf,
    pub status: DirStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub template: Template,
    pub path: PathBuf,
    pub status: FileStatus,
}

/// 一次成功运行的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub mode: Mode,
    pub root: PathBuf,
    pub directories: Vec<DirEntry>,
    pub files: Vec<FileEntry>,
}

impl StatusReport {
    pub fn file(&self, template: Template) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.template == template)
    }

    pub fn created_dirs(&self) -> usize {
        self.directories
            .iter()
            .filter(|d| d.status == DirStatus::Created)
            .count()
    }
}

/// 初始化 requires 目录结构
///
/// 步骤按顺序执行，任何一步失败都会中止剩余步骤（不回滚已创建的目录）。
/// 模板在创建目录之前全部读取，缺少模板时不会触碰文件系统。
pub fn initialize(
    options: InitOptions,
    roots: &Roots,
    templates: &dyn TemplateSource,
) -> Result<StatusReport, InitError> {
    let layout = Layout::resolve(Mode::from_global(options.global), roots)?;
    debug!(mode = layout.mode.as_str(), root = %layout.root.display(), "resolved layout");

    debug!(source = %templates.describe(), "loading templates");
    let mut installs: Vec<(Template, PathBuf, Cow<'static, [u8]>)> = Vec::new();
    for (template, dest) in layout.installs() {
        installs.push((template, dest, templates.load(template)?));
    }

    let mut directories = Vec::new();
    for dir in layout.directories() {
        let status = ensure_dir(dir)?;
        debug!(path = %dir.display(), ?status, "directory");
        directories.push(DirEntry {
            path: dir.to_path_buf(),
            status,
        });
    }

    let mut files = Vec::new();
    for (template, dest, contents) in installs {
        let status = install_file(&dest, &contents, options.force)?;
        debug!(%template, path = %dest.display(), ?status, "template");
        files.push(FileEntry {
            template,
            path: dest,
            status,
        });
    }

    Ok(StatusReport {
        mode: layout.mode,
        root: layout.root,
        directories,
        files,
    })
}
