//! Sequential generation pipeline: scan, render, write, stage.

use std::fs::{create_dir_all, remove_dir_all, write};
use std::path::{Path, PathBuf};
use std::process::Command;

use log::error;

use crate::css::{FontFace, stylesheet};
use crate::error::{Error, Result};
use crate::naming::stylesheet_file_name;
use crate::scan::{family_dirs, font_files};

/// Options for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Root directory holding one subdirectory per font family.
    pub root: PathBuf,
    /// Output directory name, created under `root` and excluded from scanning.
    pub out_dir: String,
    /// CDN root prefixed to every generated font URL.
    pub base_url: String,
    /// Run `git add .` in `root` after all stylesheets are written.
    pub stage: bool,
}

/// Generate one stylesheet per non-empty family folder.
///
/// The output directory is created up front; every run overwrites every
/// output file unconditionally. Folders without recognized font files are
/// skipped with a printed notice. A staging failure is logged, never
/// escalated.
pub fn generate(opts: &GenerateOptions) -> Result<()> {
    let out_path = opts.root.join(&opts.out_dir);
    create_dir_all(&out_path).map_err(|source| Error::CreateOutputDir {
        path: out_path.clone(),
        source,
    })?;

    let mut written = 0;
    for family in family_dirs(&opts.root, &opts.out_dir)? {
        let files = font_files(&family.path)?;
        if files.is_empty() {
            println!("No fonts found in folder: {}, skipping.", family.name);
            continue;
        }

        let faces: Vec<FontFace> = files
            .iter()
            .map(|file| FontFace::new(&opts.base_url, &family.name, &file.name, file.format))
            .collect();

        let css_path = out_path.join(stylesheet_file_name(&family.name));
        write(&css_path, stylesheet(&faces)).map_err(|source| Error::WriteStylesheet {
            path: css_path.clone(),
            source,
        })?;
        println!("Created CSS for \"{}\" -> {}", family.name, css_path.display());
        written += 1;
    }
    println!("Generated {written} stylesheets");

    if opts.stage {
        stage_changes(&opts.root);
    }
    Ok(())
}

/// Remove the output directory if present.
pub fn clean(root: &Path, out_dir: &str) -> Result<()> {
    let out_path = root.join(out_dir);
    if out_path.exists() {
        remove_dir_all(&out_path).map_err(|source| Error::RemoveDir {
            path: out_path.clone(),
            source,
        })?;
        println!("Removed {}", out_path.display());
    } else {
        println!("Skipped {} (not found)", out_path.display());
    }
    Ok(())
}

/// Stage the whole working tree with `git add .`.
///
/// Best effort: a spawn failure, non-zero exit, or non-empty stderr is only
/// logged. Written stylesheets are never affected.
fn stage_changes(root: &Path) {
    match Command::new("git").args(["add", "."]).current_dir(root).output() {
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            if !output.status.success() {
                error!("git add failed ({}): {stderr}", output.status);
            } else if !stderr.is_empty() {
                error!("git add stderr: {stderr}");
            } else {
                println!("Staged changes with git add");
            }
        }
        Err(err) => error!("Failed to run git add: {err}"),
    }
}
