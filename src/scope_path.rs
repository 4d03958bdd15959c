use std::path::{Path, PathBuf};

/// Resolves `path` as far as the filesystem allows so that two spellings of
/// the same location compare equal. Missing paths keep their lexical form.
pub fn normalize(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// True when `path` is `root` itself or lies somewhere beneath it.
pub fn is_within_scope(path: &Path, root: &Path) -> bool {
    let path = normalize(path);
    let root = normalize(root);

    if cfg!(windows) {
        let path_lower = path.to_string_lossy().to_ascii_lowercase();
        let root_lower = root.to_string_lossy().to_ascii_lowercase();
        return Path::new(&path_lower).starts_with(Path::new(&root_lower));
    }

    path.starts_with(&root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn normalize_resolves_dot_components() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();

        let dotted = dir.path().join("a").join(".");
        assert_eq!(normalize(&dotted), normalize(&dir.path().join("a")));
    }

    #[test]
    fn normalize_keeps_missing_paths() {
        let missing = Path::new("/nonexistent/path/1234567890");
        assert_eq!(normalize(missing), missing.to_path_buf());
    }

    #[test]
    fn within_scope_exact_match() {
        let dir = tempfile::tempdir().unwrap();
        assert!(is_within_scope(dir.path(), dir.path()));
    }

    #[test]
    fn within_scope_child_path() {
        let dir = tempfile::tempdir().unwrap();
        let child = dir.path().join("bar").join("baz");
        fs::create_dir_all(&child).unwrap();
        assert!(is_within_scope(&child, &dir.path().join("bar")));
    }

    #[test]
    fn not_within_scope_sibling_with_shared_prefix() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("bar")).unwrap();
        fs::create_dir(dir.path().join("barbaz")).unwrap();
        assert!(!is_within_scope(
            &dir.path().join("barbaz"),
            &dir.path().join("bar")
        ));
    }
}
