use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemProperties {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub modified_at: DateTime<Local>,
}

impl ItemProperties {
    pub fn describe(&self) -> String {
        [
            format!("Name: {}", self.name),
            format!("Path: {}", self.path.display()),
            format!("Size: {} bytes", self.size_bytes),
            format!(
                "Last Modified: {}",
                self.modified_at.format("%Y-%m-%d %H:%M:%S%.6f")
            ),
        ]
        .join("\n")
    }
}
