//! 目录布局
//!
//! 纯路径计算，不访问文件系统

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::root_finder::Roots;
use crate::error::InitError;
use crate::templates::Template;

pub const CLAUDE_DIR: &str = ".claude";
pub const COMMANDS_DIR: &str = "commands";
pub const REQUIRES_DIR: &str = "requires";
pub const REQUIREMENTS_DIR: &str = "requirements";
pub const DESIGNS_DIR: &str = "designs";

/// 初始化目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// 当前项目（默认）
    Project,
    /// 用户 home 目录（--global）
    Home,
}

impl Mode {
    pub fn from_global(global: bool) -> Self {
        if global {
            Mode::Home
        } else {
            Mode::Project
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Project => "project",
            Mode::Home => "home",
        }
    }
}

/// 某个模式下需要创建的目录和安装的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub mode: Mode,
    pub root: PathBuf,
    pub commands_dir: PathBuf,
    pub requires_dir: Option<PathBuf>,
    pub requirements_dir: Option<PathBuf>,
    pub designs_dir: Option<PathBuf>,
}

impl Layout {
    pub fn resolve(mode: Mode, roots: &Roots) -> Result<Self, InitError> {
        match mode {
            Mode::Home => Ok(Self::home(roots.home()?)),
            Mode::Project => Ok(Self::project(roots.project()?)),
        }
    }

    fn home(home: &Path) -> Self {
        Self {
            mode: Mode::Home,
            root: home.to_path_buf(),
            commands_dir: home.join(CLAUDE_DIR).join(COMMANDS_DIR),
            requires_dir: None,
            requirements_dir: None,
            designs_dir: None,
        }
    }

    fn project(cwd: &Path) -> Self {
        let requires_dir = cwd.join(REQUIRES_DIR);

        Self {
            mode: Mode::Project,
            root: cwd.to_path_buf(),
            commands_dir: cwd.join(CLAUDE_DIR).join(COMMANDS_DIR),
            requirements_dir: Some(requires_dir.join(REQUIREMENTS_DIR)),
            designs_dir: Some(requires_dir.join(DESIGNS_DIR)),
            requires_dir: Some(requires_dir),
        }
    }

    /// 按创建顺序列出目录
    pub fn directories(&self) -> Vec<&Path> {
        [
            self.requires_dir.as_deref(),
            self.requirements_dir.as_deref(),
            self.designs_dir.as_deref(),
            Some(self.commands_dir.as_path()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// 需要安装的模板及其目标路径
    pub fn installs(&self) -> Vec<(Template, PathBuf)> {
        let mut installs = vec![(
            Template::CommandFile,
            self.commands_dir.join(Template::CommandFile.file_name()),
        )];

        if let Some(requirements_dir) = &self.requirements_dir {
            installs.push((
                Template::RequirementsReadme,
                requirements_dir.join(Template::RequirementsReadme.file_name()),
            ));
        }

        installs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roots() -> Roots {
        Roots::new(
            Some(PathBuf::from("/work/app")),
            Some(PathBuf::from("/home/dev")),
        )
    }

    #[test]
    fn test_project_layout() {
        let layout = Layout::resolve(Mode::Project, &roots()).unwrap();

        assert_eq!(layout.root, PathBuf::from("/work/app"));
        assert_eq!(
            layout.directories(),
            vec![
                Path::new("/work/app/requires"),
                Path::new("/work/app/requires/requirements"),
                Path::new("/work/app/requires/designs"),
                Path::new("/work/app/.claude/commands"),
            ]
        );
        assert_eq!(
            layout.installs(),
            vec![
                (
                    Template::CommandFile,
                    PathBuf::from("/work/app/.claude/commands/requires.md")
                ),
                (
                    Template::RequirementsReadme,
                    PathBuf::from("/work/app/requires/requirements/README.md")
                ),
            ]
        );
    }

    #[test]
    fn test_home_layout_has_no_requirements_tree() {
        let layout = Layout::resolve(Mode::Home, &roots()).unwrap();

        assert_eq!(layout.root, PathBuf::from("/home/dev"));
        assert_eq!(
            layout.directories(),
            vec![Path::new("/home/dev/.claude/commands")]
        );
        assert_eq!(
            layout.installs(),
            vec![(
                Template::CommandFile,
                PathBuf::from("/home/dev/.claude/commands/requires.md")
            )]
        );
    }

    #[test]
    fn test_home_layout_without_home() {
        let roots = Roots::new(Some(PathBuf::from("/work/app")), None);
        assert!(matches!(
            Layout::resolve(Mode::Home, &roots),
            Err(InitError::HomeDirUnavailable)
        ));
        // project 模式不需要 home
        assert!(Layout::resolve(Mode::Project, &roots).is_ok());
    }

    #[test]
    fn test_home_layout_without_current_dir() {
        let roots = Roots::new(None, Some(PathBuf::from("/home/dev")));
        assert!(matches!(
            Layout::resolve(Mode::Project, &roots),
            Err(InitError::CurrentDirUnavailable)
        ));
        let layout = Layout::resolve(Mode::Home, &roots).unwrap();
        assert_eq!(layout.root, PathBuf::from("/home/dev"));
    }

    #[test]
    fn test_mode_from_global() {
        assert_eq!(Mode::from_global(true), Mode::Home);
        assert_eq!(Mode::from_global(false), Mode::Project);
        assert_eq!(Mode::Home.as_str(), "home");
    }
}
