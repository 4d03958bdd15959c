use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub is_directory: bool,
}

/// What the window draws: the rows of the last refresh plus the selected name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSnapshot {
    pub root: String,
    pub entries: Vec<FileEntry>,
    pub selected: Option<String>,
}
