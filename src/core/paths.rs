//! Absolute path resolution for source and output locations.
//!
//! Resolution is non-strict: the existing prefix of a path is resolved
//! through the filesystem (symlinks followed), and the missing remainder is
//! appended lexically with `.` dropped and `..` applied to the resolved parent.
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::trace;

use crate::error::{Error, Result};

/// Resolve `path` to an absolute path. Relative paths are taken against the
/// current working directory. The path does not need to exist.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| Error::resolve(path, e))?
            .join(path)
    };

    let resolved = resolve_components(&absolute).map_err(|e| Error::resolve(path, e))?;
    trace!("Resolved {:?} -> {:?}", path, resolved);
    Ok(resolved)
}

fn resolve_components(absolute: &Path) -> std::io::Result<PathBuf> {
    let mut resolved = PathBuf::new();

    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                resolved = follow_link(resolved)?;
            }
        }
    }

    Ok(resolved)
}

/// Follow `candidate` if it is a symlink. Missing entries are kept as-is.
fn follow_link(candidate: PathBuf) -> std::io::Result<PathBuf> {
    let metadata = match fs::symlink_metadata(&candidate) {
        Ok(metadata) => metadata,
        Err(e) if is_missing(&e) => return Ok(candidate),
        Err(e) => return Err(e),
    };

    if !metadata.file_type().is_symlink() {
        return Ok(candidate);
    }

    match fs::canonicalize(&candidate) {
        Ok(target) => Ok(target),
        // Dangling link: keep resolving through its target lexically.
        Err(e) if is_missing(&e) => {
            let target = fs::read_link(&candidate)?;
            let base = candidate.parent().map(Path::to_path_buf).unwrap_or_default();
            resolve_components(&base.join(target))
        }
        Err(e) => Err(e),
    }
}

fn is_missing(e: &std::io::Error) -> bool {
    matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory)
}
