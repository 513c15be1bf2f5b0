//! Publish directory reset and tree mirroring.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::PublishError;

/// Counts of what a mirror copied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorStats {
    /// Files copied
    pub files: usize,

    /// Directories created below the destination root
    pub dirs: usize,

    /// Bytes copied
    pub bytes: u64,
}

/// Remove whatever is at `path`: a directory with everything below it, or a
/// single file or symlink. A missing entry is fine.
pub fn reset_dir(path: &Path) -> Result<(), PublishError> {
    let removed = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) => Err(e),
    };

    match removed {
        Ok(()) => {
            tracing::debug!("Removed {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(PublishError::Reset {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Create `dst` and copy every file and directory of `src` into it at the
/// same relative path.
pub fn mirror_tree(src: &Path, dst: &Path) -> Result<MirrorStats, PublishError> {
    fs::create_dir_all(dst).map_err(|source| PublishError::Copy {
        path: dst.to_path_buf(),
        source,
    })?;

    let mut stats = MirrorStats::default();

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| PublishError::Copy {
            path: e.path().unwrap_or(src).to_path_buf(),
            source: e.into(),
        })?;

        let relative = match entry.path().strip_prefix(src) {
            Ok(relative) if relative.as_os_str().is_empty() => continue,
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|source| PublishError::Copy {
                path: target.clone(),
                source,
            })?;
            stats.dirs += 1;
        } else {
            let bytes = fs::copy(entry.path(), &target).map_err(|source| PublishError::Copy {
                path: entry.path().to_path_buf(),
                source,
            })?;
            tracing::debug!("Copied {}", relative.display());
            stats.files += 1;
            stats.bytes += bytes;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Relative paths of every file below `root`, sorted.
    fn files(root: &Path) -> Vec<String> {
        let mut files: Vec<String> = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                e.path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        files.sort();
        files
    }

    #[test]
    fn reset_removes_tree() {
        let temp = tempdir().unwrap();
        let public = temp.path().join("public");
        write(&public.join("a/b/stale.html"), "old");

        reset_dir(&public).unwrap();

        assert!(!public.exists());
    }

    #[test]
    fn reset_removes_regular_file() {
        let temp = tempdir().unwrap();
        let public = temp.path().join("public");
        fs::write(&public, "not a directory").unwrap();

        reset_dir(&public).unwrap();

        assert!(fs::symlink_metadata(&public).is_err());
    }

    #[test]
    fn reset_tolerates_missing_dir() {
        let temp = tempdir().unwrap();
        reset_dir(&temp.path().join("public")).unwrap();
    }

    #[test]
    fn mirrors_nested_tree() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("doc");
        let dst = temp.path().join("public");
        write(&src.join("lotus_script/index.html"), "<html>index</html>");
        write(&src.join("lotus_script/math/struct.Vec2.html"), "vec2");
        write(&src.join("static.files/rustdoc.css"), "body {}");
        fs::create_dir_all(src.join("empty")).unwrap();

        let stats = mirror_tree(&src, &dst).unwrap();

        assert_eq!(files(&dst), files(&src));
        assert_eq!(
            fs::read_to_string(dst.join("lotus_script/math/struct.Vec2.html")).unwrap(),
            "vec2"
        );
        assert!(dst.join("empty").is_dir());
        assert_eq!(stats.files, 3);
        assert_eq!(stats.dirs, 4);
        assert_eq!(stats.bytes, ("<html>index</html>".len() + 4 + 7) as u64);
    }

    #[test]
    fn missing_source_is_a_copy_error() {
        let temp = tempdir().unwrap();
        let dst = temp.path().join("public");

        let err = mirror_tree(&temp.path().join("target/doc"), &dst).unwrap_err();

        assert!(matches!(err, PublishError::Copy { .. }));
        assert!(dst.is_dir());
        assert!(files(&dst).is_empty());
    }

    #[test]
    fn binary_content_is_preserved() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("doc");
        let dst = temp.path().join("public");
        let bytes: Vec<u8> = (0..=255).collect();
        fs::create_dir_all(src.join("static.files")).unwrap();
        fs::write(src.join("static.files/font.woff2"), &bytes).unwrap();

        mirror_tree(&src, &dst).unwrap();

        assert_eq!(
            fs::read(dst.join("static.files/font.woff2")).unwrap(),
            bytes
        );
    }
}
