//! Best-effort removal of transient files.

use std::fs;
use std::path::Path;

/// Delete `path`, ignoring every failure.
///
/// Fire-and-forget: cleanup must never turn a successful scaffold into a
/// failed one, so no error channel exists. Permissions are relaxed first
/// so a read-only archive does not survive the attempt.
pub fn remove(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o777));
    }
    let _ = fs::remove_file(path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("prismic_test.zip");
        fs::write(&file, b"archive bytes").unwrap();

        remove(&file);

        assert!(!file.exists());
    }

    #[cfg(unix)]
    #[test]
    fn removes_a_read_only_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("prismic_test.zip");
        fs::write(&file, b"archive bytes").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o444)).unwrap();

        remove(&file);

        assert!(!file.exists());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        remove(&dir.path().join("never-existed.zip"));
    }
}
