use crate::error::AppError;
use crate::models::file_entry::FileEntry;
use crate::models::operation::Operation;
use crate::models::properties::ItemProperties;
use crate::scope_path::{is_within_scope, normalize};
use crate::shell::safety::validate_item_name;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub fn list(dir: &Path) -> Result<Vec<FileEntry>, AppError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        entries.push(FileEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            is_directory: entry.path().is_dir(),
        });
    }
    Ok(entries)
}

pub fn make_directory(dir: &Path, name: &str) -> Result<PathBuf, AppError> {
    validate_item_name(name)?;
    let path = dir.join(name);
    fs::create_dir(&path).map_err(|e| AppError::from_io(e, Operation::Create, name))?;
    info!(item = name, "created directory");
    Ok(path)
}

pub fn rename(dir: &Path, old_name: &str, new_name: &str) -> Result<PathBuf, AppError> {
    validate_item_name(old_name)?;
    validate_item_name(new_name)?;

    let source = dir.join(old_name);
    let destination = dir.join(new_name);
    ensure_exists(&source, Operation::Rename, old_name)?;

    fs::rename(&source, &destination).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => AppError::AlreadyExists(new_name.to_string()),
        _ => AppError::from_io(e, Operation::Rename, old_name),
    })?;
    info!(from = old_name, to = new_name, "renamed item");
    Ok(destination)
}

/// Deletes a file, or a directory when it is empty. Directories are never
/// removed recursively.
pub fn remove(dir: &Path, name: &str) -> Result<(), AppError> {
    validate_item_name(name)?;
    let path = dir.join(name);
    let metadata = ensure_exists(&path, Operation::Delete, name)?;

    let result = if metadata.is_dir() {
        fs::remove_dir(&path)
    } else {
        fs::remove_file(&path)
    };
    result.map_err(|e| AppError::from_io(e, Operation::Delete, name))?;
    info!(item = name, directory = metadata.is_dir(), "deleted item");
    Ok(())
}

/// Copies `name` into `destination_dir`. Files overwrite an existing file of
/// the same name; directory trees refuse to land on an existing path.
pub fn copy(dir: &Path, name: &str, destination_dir: &Path) -> Result<PathBuf, AppError> {
    validate_item_name(name)?;
    let source = dir.join(name);
    let metadata = fs::metadata(&source).map_err(|e| AppError::from_io(e, Operation::Copy, name))?;
    ensure_directory(destination_dir, Operation::Copy, name)?;

    let target = destination_dir.join(name);
    if metadata.is_dir() {
        if is_within_scope(destination_dir, &source) {
            return Err(AppError::failed(
                Operation::Copy,
                name,
                "destination is inside the source directory",
            ));
        }
        if target.exists() {
            return Err(AppError::AlreadyExists(name.to_string()));
        }
        copy_dir_recursive(&source, &target)
            .map_err(|e| AppError::from_io(e, Operation::Copy, name))?;
    } else {
        if target.exists() && normalize(&target) == normalize(&source) {
            return Err(AppError::AlreadyExists(name.to_string()));
        }
        fs::copy(&source, &target).map_err(|e| AppError::from_io(e, Operation::Copy, name))?;
    }

    info!(item = name, destination = %destination_dir.display(), "copied item");
    Ok(target)
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> io::Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).map_err(io::Error::other)?;
        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

pub fn move_item(dir: &Path, name: &str, destination_dir: &Path) -> Result<PathBuf, AppError> {
    validate_item_name(name)?;
    let source = dir.join(name);
    let metadata = ensure_exists(&source, Operation::Move, name)?;
    ensure_directory(destination_dir, Operation::Move, name)?;

    if metadata.is_dir() && is_within_scope(destination_dir, &source) {
        return Err(AppError::failed(
            Operation::Move,
            name,
            "destination is inside the source directory",
        ));
    }

    let target = destination_dir.join(name);
    fs::rename(&source, &target).map_err(|e| AppError::from_io(e, Operation::Move, name))?;
    info!(item = name, destination = %destination_dir.display(), "moved item");
    Ok(target)
}

/// Walks every non-directory entry under `root` and returns the full paths
/// whose file name contains `term`. Matching is literal and case-sensitive.
/// Unreadable subtrees are skipped rather than reported.
pub fn search(root: &Path, term: &str) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("skipping unreadable entry during search: {err}");
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir())
        .filter(|entry| entry.file_name().to_string_lossy().contains(term))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

pub fn stat(path: &Path) -> Result<ItemProperties, AppError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    let metadata = fs::metadata(path).map_err(|e| AppError::from_io(e, Operation::Properties, &name))?;
    let modified = metadata
        .modified()
        .map_err(|e| AppError::from_io(e, Operation::Properties, &name))?;

    Ok(ItemProperties {
        name,
        path: path.to_path_buf(),
        size_bytes: metadata.len(),
        modified_at: chrono::DateTime::<chrono::Local>::from(modified),
    })
}

fn ensure_exists(path: &Path, operation: Operation, item: &str) -> Result<fs::Metadata, AppError> {
    fs::symlink_metadata(path).map_err(|e| AppError::from_io(e, operation, item))
}

fn ensure_directory(path: &Path, operation: Operation, item: &str) -> Result<(), AppError> {
    if !path.is_dir() {
        return Err(AppError::failed(
            operation,
            item,
            format!("destination is not a directory: {}", path.display()),
        ));
    }
    Ok(())
}
