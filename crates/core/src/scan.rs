//! Discovery of family folders and the font files inside them.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::style::FontFormat;

/// A direct subdirectory of the scan root, holding one font family.
#[derive(Debug, Clone)]
pub struct FamilyDir {
    /// Directory name, used verbatim as the font family.
    pub name: String,
    pub path: PathBuf,
}

/// A recognized font file inside a family folder.
#[derive(Debug, Clone)]
pub struct FontFile {
    pub name: String,
    pub format: FontFormat,
}

/// List family folders under `root`.
///
/// Keeps directories only, excluding the output directory and anything
/// starting with a dot. Entries are sorted by name so generation order is
/// stable across platforms.
pub fn family_dirs(root: &Path, out_dir: &str) -> Result<Vec<FamilyDir>> {
    let entries = read_dir(root).map_err(|source| Error::ReadDir {
        path: root.to_path_buf(),
        source,
    })?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::ReadDir {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if name == out_dir || name.starts_with('.') {
            continue;
        }
        dirs.push(FamilyDir { name, path });
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(dirs)
}

/// List recognized font files in a family folder, sorted by name.
///
/// A file is recognized when its extension maps to a [`FontFormat`]
/// (case-insensitive). Everything else is ignored.
pub fn font_files(dir: &Path) -> Result<Vec<FontFile>> {
    let entries = read_dir(dir).map_err(|source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        let Some(format) = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(FontFormat::from_extension)
        else {
            continue;
        };
        files.push(FontFile { name, format });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}
