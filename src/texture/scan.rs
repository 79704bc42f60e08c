use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::sidecar;
use crate::error::{Error, Result};

/// An image file found during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Directory holding the image
    pub dir: PathBuf,
    /// File name only (e.g., "hero.png"), kept raw so any name round-trips
    pub file_name: OsString,
}

impl Candidate {
    /// Full path to the image
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Path of the sidecar that belongs next to this image
    pub fn sidecar_path(&self) -> PathBuf {
        sidecar::sidecar_path(&self.dir, &self.file_name)
    }
}

/// Enumerate candidate images under `root`.
///
/// Without `recursive` only direct children of `root` that are regular files
/// (or links to them) are considered. With `recursive` every entry that is not
/// a directory counts, dangling links included, at any depth.
/// Entries come out in file name order within each directory, and directory
/// symlinks are never descended. The first traversal error is yielded as an
/// `Err` item; callers are expected to stop there.
pub fn candidates(root: &Path, recursive: bool) -> impl Iterator<Item = Result<Candidate>> {
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let root = root.to_path_buf();
    walker.into_iter().filter_map(move |entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                return Some(Err(Error::Walk {
                    root: root.clone(),
                    source,
                }))
            }
        };

        let path = entry.path();
        let listed = if recursive { !path.is_dir() } else { path.is_file() };
        if !listed || !sidecar::is_candidate(entry.file_name()) {
            return None;
        }

        let dir = path.parent().unwrap_or(root.as_path()).to_path_buf();
        Some(Ok(Candidate {
            dir,
            file_name: entry.file_name().to_os_string(),
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn names(root: &Path, recursive: bool) -> Vec<PathBuf> {
        candidates(root, recursive)
            .map(|c| c.unwrap().path().strip_prefix(root).unwrap().to_path_buf())
            .collect()
    }

    #[test]
    fn flat_scan_only_sees_direct_children() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("b.png"), b"").unwrap();
        fs::write(root.join("a.png"), b"").unwrap();
        fs::write(root.join("c.txt"), b"").unwrap();
        fs::create_dir_all(root.join("sub/deeper")).unwrap();
        fs::write(root.join("sub/d.png"), b"").unwrap();
        fs::write(root.join("sub/deeper/e.png"), b"").unwrap();

        assert_eq!(names(root, false), vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
    }

    #[test]
    fn recursive_scan_reaches_any_depth() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("a.png"), b"").unwrap();
        fs::create_dir_all(root.join("sub/deeper")).unwrap();
        fs::write(root.join("sub/d.png"), b"").unwrap();
        fs::write(root.join("sub/notes.md"), b"").unwrap();
        fs::write(root.join("sub/deeper/e.png"), b"").unwrap();

        let mut found = names(root, true);
        found.sort();
        assert_eq!(
            found,
            vec![
                PathBuf::from("a.png"),
                PathBuf::from("sub/d.png"),
                PathBuf::from("sub/deeper/e.png"),
            ]
        );
    }

    #[test]
    fn directories_named_like_images_are_ignored() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("folder.png")).unwrap();

        assert!(names(root, false).is_empty());
        assert!(names(root, true).is_empty());
    }

    #[test]
    fn candidate_knows_its_sidecar() {
        let candidate = Candidate {
            dir: PathBuf::from("sprites"),
            file_name: OsString::from("hero.png"),
        };
        assert_eq!(candidate.path(), PathBuf::from("sprites/hero.png"));
        assert_eq!(candidate.sidecar_path(), PathBuf::from("sprites/hero.xml"));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_links_only_count_when_recursing() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let root = dir.path();
        symlink(root.join("missing.png"), root.join("ghost.png")).unwrap();
        fs::create_dir(root.join("art")).unwrap();
        symlink(root.join("art"), root.join("linked.png")).unwrap();

        assert!(names(root, false).is_empty());
        assert_eq!(names(root, true), vec![PathBuf::from("ghost.png")]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_found() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let root = dir.path();
        let name = OsStr::from_bytes(b"h\xffro.png");
        fs::write(root.join(name), b"").unwrap();

        assert_eq!(names(root, false), vec![PathBuf::from(name)]);
    }

    #[test]
    fn missing_root_is_a_walk_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let first = candidates(&missing, false).next();
        assert!(matches!(first, Some(Err(Error::Walk { .. }))));
    }
}
