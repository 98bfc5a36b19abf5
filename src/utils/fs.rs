//! 文件系统工具
//!
//! 幂等的目录创建和受 `--force` 控制的文件安装

use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::InitError;

/// `ensure_dir` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirStatus {
    Created,
    Existing,
}

/// `install_file` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// 目标不存在，已写入
    Installed,
    /// 目标已存在，--force 覆盖
    Overwritten,
    /// 目标已存在且内容不同，未覆盖
    Skipped,
    /// 目标已存在且内容与模板相同
    UpToDate,
}

/// 检查目录是否存在
pub fn dir_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// 确保目录存在（包括父目录）
///
/// 已存在时返回 `Existing`；路径被非目录占用时报错。
pub fn ensure_dir(path: &Path) -> Result<DirStatus, InitError> {
    if dir_exists(path) {
        return Ok(DirStatus::Existing);
    }

    fs::create_dir_all(path).map_err(|e| InitError::fs("create directory", path, e))?;
    Ok(DirStatus::Created)
}

/// 把模板内容安装到 `path`
///
/// 目标已存在时只有 `force` 才会覆盖。
pub fn install_file(path: &Path, contents: &[u8], force: bool) -> Result<FileStatus, InitError> {
    let status = match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            return Err(InitError::fs(
                "install file at",
                path,
                io::Error::new(io::ErrorKind::Other, "a directory is in the way"),
            ));
        }
        Ok(_) if force => FileStatus::Overwritten,
        Ok(_) => {
            let existing = fs::read(path).map_err(|e| InitError::fs("read file", path, e))?;
            return Ok(if existing == contents {
                FileStatus::UpToDate
            } else {
                FileStatus::Skipped
            });
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => FileStatus::Installed,
        Err(e) => return Err(InitError::fs("inspect", path, e)),
    };

    fs::write(path, contents).map_err(|e| InitError::fs("write file", path, e))?;
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a/b/c");

        assert_eq!(ensure_dir(&dir).unwrap(), DirStatus::Created);
        assert!(dir_exists(&dir));
        assert_eq!(ensure_dir(&dir).unwrap(), DirStatus::Existing);
    }

    #[test]
    fn test_ensure_dir_file_in_the_way() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requires");
        fs::write(&path, "not a dir").unwrap();

        let err = ensure_dir(&path).unwrap_err();
        assert!(matches!(err, InitError::Filesystem { .. }));
    }

    #[test]
    fn test_install_new_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requires.md");

        assert!(!path.exists());
        assert_eq!(
            install_file(&path, b"template", false).unwrap(),
            FileStatus::Installed
        );
        assert_eq!(fs::read(&path).unwrap(), b"template");
    }

    #[test]
    fn test_install_skips_existing_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requires.md");
        fs::write(&path, "existing content").unwrap();

        let status = install_file(&path, b"template", false).unwrap();
        assert_eq!(status, FileStatus::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing content");
    }

    #[test]
    fn test_install_reports_up_to_date() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requires.md");
        fs::write(&path, "template").unwrap();

        assert_eq!(
            install_file(&path, b"template", false).unwrap(),
            FileStatus::UpToDate
        );
    }

    #[test]
    fn test_install_overwrites_with_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requires.md");
        fs::write(&path, "existing content").unwrap();

        let status = install_file(&path, b"template", true).unwrap();
        assert_eq!(status, FileStatus::Overwritten);
        assert_eq!(fs::read_to_string(&path).unwrap(), "template");
    }

    #[test]
    fn test_install_directory_in_the_way() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requires.md");
        fs::create_dir(&path).unwrap();

        let err = install_file(&path, b"template", true).unwrap_err();
        assert!(matches!(err, InitError::Filesystem { .. }));
        assert!(dir_exists(&path));
    }

    #[test]
    fn test_install_into_missing_parent_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing/requires.md");

        let err = install_file(&path, b"template", false).unwrap_err();
        assert!(matches!(
            err,
            InitError::Filesystem {
                action: "write file",
                ..
            }
        ));
    }
}
