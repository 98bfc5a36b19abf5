//! 模板文件嵌入
//!
//! 嵌入 `init` 安装的模板文件，并支持从目录覆盖模板源

use rust_embed::RustEmbed;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::InitError;

/// 模板文件资源（编译时嵌入）
#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct TemplateAssets;

/// `init` 会安装的模板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    /// `.claude/commands/requires.md` 斜杠命令
    CommandFile,
    /// `requires/requirements/README.md`
    RequirementsReadme,
}

impl Template {
    /// 模板源中的文件名（也是安装后的文件名）
    pub fn file_name(self) -> &'static str {
        match self {
            Template::CommandFile => "requires.md",
            Template::RequirementsReadme => "README.md",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// 模板内容的来源
pub trait TemplateSource {
    /// 读取模板原始字节
    fn load(&self, template: Template) -> Result<Cow<'static, [u8]>, InitError>;

    /// 用于错误信息和日志的来源描述
    fn describe(&self) -> String;
}

/// 默认来源：编译进二进制的模板
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplates;

impl TemplateSource for EmbeddedTemplates {
    fn load(&self, template: Template) -> Result<Cow<'static, [u8]>, InitError> {
        TemplateAssets::get(template.file_name())
            .map(|file| file.data)
            .ok_or_else(|| InitError::TemplateMissing {
                name: template.file_name().to_string(),
                source_desc: self.describe(),
            })
    }

    fn describe(&self) -> String {
        "embedded templates".to_string()
    }
}

/// 从目录读取模板（`--templates` / `REQUIRES_TEMPLATES_DIR`）
#[derive(Debug, Clone)]
pub struct DirTemplates {
    dir: PathBuf,
}

impl DirTemplates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateSource for DirTemplates {
    fn load(&self, template: Template) -> Result<Cow<'static, [u8]>, InitError> {
        let path = self.dir.join(template.file_name());

        match fs::read(&path) {
            Ok(bytes) => Ok(Cow::Owned(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(InitError::TemplateMissing {
                name: template.file_name().to_string(),
                source_desc: self.describe(),
            }),
            Err(e) => Err(InitError::fs("read template", path, e)),
        }
    }

    fn describe(&self) -> String {
        format!("template directory {}", self.dir.display())
    }
}

// ═══════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════
