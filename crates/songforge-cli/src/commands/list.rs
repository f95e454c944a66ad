//! List command implementation.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use songforge_project::Workspace;

use crate::commands::default_workspace_dir;

/// Run the list command, printing every saved project in the workspace.
pub fn run(workspace_dir: Option<&Path>) -> Result<ExitCode> {
    let root = workspace_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(default_workspace_dir);

    let workspace = Workspace::new(&root).context("failed to open the workspace directory")?;
    let projects = workspace
        .list_projects()
        .context("failed to scan the workspace")?;

    if projects.is_empty() {
        println!("No projects in {}", root.display());
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "Workspace:".cyan().bold(), root.display());
    for path in &projects {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().replace('_', " "))
            .unwrap_or_default();
        println!("  {}", name);
    }

    Ok(ExitCode::SUCCESS)
}
