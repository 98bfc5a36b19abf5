//! 终端输出
//!
//! 把 `StatusReport` 渲染为状态行或 JSON

use colored::*;
use serde::Serialize;

use crate::project::{Mode, StatusReport};
use crate::templates::Template;
use crate::utils::{DirStatus, FileStatus};

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

fn summary_line(report: &StatusReport) -> String {
    format!(
        "requires: project directories created ({} mode, root: {})",
        report.mode.as_str(),
        report.root.display()
    )
}

fn file_line(mode: Mode, template: Template, status: FileStatus) -> String {
    let (what, location) = match template {
        Template::CommandFile => (
            "/requires command",
            format!("{} .claude directory", mode.as_str()),
        ),
        Template::RequirementsReadme => {
            ("requirements README", "requires/requirements".to_string())
        }
    };

    match status {
        FileStatus::Installed => format!("{what} installed in {location}"),
        FileStatus::Overwritten => format!("{what} installed in {location} (overwritten)"),
        FileStatus::UpToDate => format!("{what} already up to date in {location}"),
        FileStatus::Skipped => format!("{what} kept in {location} (use --force to overwrite)"),
    }
}

/// 打印状态行
pub fn print_report(report: &StatusReport) {
    for dir in &report.directories {
        let path = dir.path.display().to_string();
        match dir.status {
            DirStatus::Created => println!("   {} created {}", "+".green(), path.cyan()),
            DirStatus::Existing => println!("   {} exists  {}", "·".dimmed(), path.dimmed()),
        }
    }

    println!();
    println!("{} {}", "✅".green(), summary_line(report).green().bold());
    println!(
        "   📁 {} new, {} existing directories",
        report.created_dirs().to_string().yellow(),
        report.directories.len() - report.created_dirs()
    );

    for file in &report.files {
        let line = file_line(report.mode, file.template, file.status);
        match file.status {
            FileStatus::Installed | FileStatus::Overwritten => println!("{} {}", "✅".green(), line),
            FileStatus::UpToDate => println!("{} {}", "✓".green(), line),
            FileStatus::Skipped => println!("{} {}", "⚠️ ".yellow(), line.yellow()),
        }
    }

    if report.mode == Mode::Project {
        println!();
        println!(
            "💡 Tip: run {} in Claude Code to write your first requirement",
            "/requires \"your feature description\"".cyan()
        );
    }
}
