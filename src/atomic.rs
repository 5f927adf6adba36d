use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ErrorContext, TexthooksError, TexthooksResult};

/// Whole-file replacement through a sibling temporary file and a rename, so
/// readers see either the old or the new content. A symlink is followed and
/// its target replaced; the link itself stays a link.
pub struct AtomicFile {
    path: PathBuf,
    temp_path: PathBuf,
}

impl AtomicFile {
    pub fn new<P: AsRef<Path>>(path: P) -> TexthooksResult<Self> {
        let path = Self::resolve(path.as_ref())?;
        let temp_path = Self::temp_path(&path)?;

        Ok(Self { path, temp_path })
    }

    fn resolve(path: &Path) -> TexthooksResult<PathBuf> {
        match fs::symlink_metadata(path) {
            Ok(metadata) if metadata.file_type().is_symlink() => fs::canonicalize(path)
                .with_path_context(|| format!("Failed to resolve link {}", path.display())),
            _ => Ok(path.to_path_buf()),
        }
    }

    fn temp_path(path: &Path) -> TexthooksResult<PathBuf> {
        let file_name = path.file_name().ok_or_else(|| {
            TexthooksError::usage(format!("Not a file path: {}", path.display()))
        })?;

        let temp_name = format!(
            ".{}.texthooks.{}",
            file_name.to_string_lossy(),
            std::process::id()
        );

        Ok(path.with_file_name(temp_name))
    }

    /// Replace the file's content, keeping its permissions.
    pub fn write(&self, content: &[u8]) -> TexthooksResult<()> {
        let permissions = fs::metadata(&self.path)
            .map(|metadata| metadata.permissions())
            .ok();

        let result = self.write_temp(content, permissions);
        if result.is_err() {
            let _ = fs::remove_file(&self.temp_path);
            return result;
        }

        if let Err(err) = fs::rename(&self.temp_path, &self.path) {
            let _ = fs::remove_file(&self.temp_path);
            return Err(err)
                .with_path_context(|| format!("Failed to replace {}", self.path.display()));
        }

        Ok(())
    }

    fn write_temp(
        &self,
        content: &[u8],
        permissions: Option<fs::Permissions>,
    ) -> TexthooksResult<()> {
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.temp_path)
            .with_path_context(|| {
                format!("Failed to create temporary file {}", self.temp_path.display())
            })?;

        temp_file
            .write_all(content)
            .with_path_context(|| format!("Failed to write {}", self.temp_path.display()))?;

        temp_file
            .sync_all()
            .with_path_context(|| format!("Failed to sync {}", self.temp_path.display()))?;

        if let Some(permissions) = permissions {
            fs::set_permissions(&self.temp_path, permissions).with_path_context(|| {
                format!("Failed to set permissions on {}", self.temp_path.display())
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_replaces_content() -> TexthooksResult<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("notes.txt");
        fs::write(&file_path, "old content\n")?;

        AtomicFile::new(&file_path)?.write(b"new content\n")?;

        assert_eq!(fs::read_to_string(&file_path)?, "new content\n");
        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())?.collect();
        assert_eq!(leftovers.len(), 1);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_keeps_permissions() -> TexthooksResult<()> {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("run.sh");
        fs::write(&file_path, "echo \u{201C}hi\u{201D}\n")?;
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o755))?;

        AtomicFile::new(&file_path)?.write(b"echo \"hi\"\n")?;

        let mode = fs::metadata(&file_path)?.permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_through_symlink() -> TexthooksResult<()> {
        let temp_dir = TempDir::new()?;
        let target = temp_dir.path().join("real.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&target, "a\u{2013}b\n")?;
        std::os::unix::fs::symlink(&target, &link)?;

        AtomicFile::new(&link)?.write(b"a-b\n")?;

        assert!(fs::symlink_metadata(&link)?.file_type().is_symlink());
        assert_eq!(fs::read_link(&link)?, target);
        assert_eq!(fs::read_to_string(&target)?, "a-b\n");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_rename_removes_temp_file() -> TexthooksResult<()> {
        let temp_dir = TempDir::new()?;
        let occupied = temp_dir.path().join("occupied");
        fs::create_dir(&occupied)?;
        fs::write(occupied.join("inner.txt"), "x")?;

        let result = AtomicFile::new(&occupied)?.write(b"content\n");

        assert!(matches!(result, Err(TexthooksError::Io(_))));
        let names: Vec<_> = fs::read_dir(temp_dir.path())?
            .map(|entry| entry.map(|entry| entry.file_name()))
            .collect::<Result<_, _>>()?;
        assert_eq!(names, vec![std::ffi::OsString::from("occupied")]);
        Ok(())
    }

    #[test]
    fn test_rejects_path_without_file_name() {
        assert!(AtomicFile::new("/").is_err());
    }
}
