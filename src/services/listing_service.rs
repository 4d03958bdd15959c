use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::file_entry::{FileEntry, ListingSnapshot};
use crate::services::file_service;

/// The rows the window shows for the browsing root, rebuilt wholesale on
/// every refresh. The selection is tracked by entry name, so a refresh can
/// drop it but never move it onto a different entry.
#[derive(Debug)]
pub struct Listing {
    root: PathBuf,
    entries: Vec<FileEntry>,
    selected: Option<String>,
}

impl Listing {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            entries: Vec::new(),
            selected: None,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn refresh(&mut self) -> Result<(), AppError> {
        let mut entries = file_service::list(&self.root)?;
        entries.sort_by(|a, b| {
            b.is_directory
                .cmp(&a.is_directory)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        self.entries = entries;

        if let Some(name) = self.selected.take() {
            if self.contains(&name) {
                self.selected = Some(name);
            }
        }
        Ok(())
    }

    pub fn select(&mut self, name: &str) -> Result<(), AppError> {
        if !self.contains(name) {
            return Err(AppError::NotFound(name.to_string()));
        }
        self.selected = Some(name.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selection(&self) -> Option<&str> {
        self.selected
            .as_deref()
            .filter(|name| self.contains(name))
    }

    pub fn snapshot(&self) -> ListingSnapshot {
        ListingSnapshot {
            root: self.root.to_string_lossy().to_string(),
            entries: self.entries().to_vec(),
            selected: self.selection().map(str::to_string),
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }
}
