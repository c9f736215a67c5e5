//! Placeholder rewriting across the scaffolded tree.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use regex::{NoExpand, Regex};
use walkdir::WalkDir;

use crate::error::{ScaffoldError, ScaffoldResult};

/// Token starter templates embed wherever the repository name belongs.
pub const PLACEHOLDER: &str = "your-repo-name";

/// Replace every occurrence of `pattern` under `root` with `replacement`.
///
/// The pattern is compiled as a regular expression; the replacement is
/// inserted verbatim, so repository names containing `$` never trigger
/// capture-group expansion. Only regular files are touched: directories
/// are skipped, symlinks are not followed, and files whose contents are
/// not valid UTF-8 are left alone rather than risking corruption of
/// binary assets. Files without a match are not rewritten at all, which
/// keeps the pass idempotent.
///
/// # Errors
///
/// Returns [`ScaffoldError::Pattern`] for a malformed pattern and
/// [`ScaffoldError::Rewrite`] when the tree cannot be walked or a file
/// cannot be read or written.
pub fn rewrite_all(root: &Path, pattern: &str, replacement: &str) -> ScaffoldResult<()> {
    let matcher = Regex::new(pattern).map_err(|e| ScaffoldError::Pattern(e.to_string()))?;

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| ScaffoldError::Rewrite {
            path: e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            reason: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        rewrite_file(entry.path(), &matcher, replacement)?;
    }

    Ok(())
}

/// Rewrite a single file in place, if it is text and contains a match.
fn rewrite_file(path: &Path, matcher: &Regex, replacement: &str) -> ScaffoldResult<()> {
    let rewrite_error = |reason: String| ScaffoldError::Rewrite {
        path: path.to_path_buf(),
        reason,
    };

    let bytes = fs::read(path).map_err(|e| rewrite_error(e.to_string()))?;
    let Ok(contents) = String::from_utf8(bytes) else {
        // Not text; leave binary assets untouched.
        return Ok(());
    };

    match matcher.replace_all(&contents, NoExpand(replacement)) {
        Cow::Borrowed(_) => Ok(()),
        Cow::Owned(patched) => fs::write(path, patched).map_err(|e| rewrite_error(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/config")).unwrap();
        fs::write(
            dir.path().join("README.md"),
            "Welcome to your-repo-name! Clone your-repo-name today.",
        )
        .unwrap();
        fs::write(
            dir.path().join("src/config/app.json"),
            "{\"repo\": \"your-repo-name\"}",
        )
        .unwrap();

        rewrite_all(dir.path(), PLACEHOLDER, "my-app").unwrap();

        let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert_eq!(readme, "Welcome to my-app! Clone my-app today.");
        let config = fs::read_to_string(dir.path().join("src/config/app.json")).unwrap();
        assert_eq!(config, "{\"repo\": \"my-app\"}");
    }

    #[test]
    fn replacement_is_inserted_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("note.txt"), "repo: your-repo-name").unwrap();

        // `$0` would expand to the whole match if the replacement were
        // treated as a substitution template.
        rewrite_all(dir.path(), PLACEHOLDER, "my$0app").unwrap();

        let note = fs::read_to_string(dir.path().join("note.txt")).unwrap();
        assert_eq!(note, "repo: my$0app");
    }

    #[test]
    fn binary_files_are_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let logo = dir.path().join("logo.png");
        let mut bytes = vec![0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe];
        bytes.extend_from_slice(PLACEHOLDER.as_bytes());
        fs::write(&logo, &bytes).unwrap();

        rewrite_all(dir.path(), PLACEHOLDER, "my-app").unwrap();

        assert_eq!(fs::read(&logo).unwrap(), bytes);
    }

    #[cfg(unix)]
    #[test]
    fn files_without_a_match_are_not_rewritten() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("untouched.txt");
        fs::write(&file, "nothing to see here").unwrap();
        // A write attempt would fail on a read-only file, so success
        // proves the rewrite pass skipped it.
        fs::set_permissions(&file, fs::Permissions::from_mode(0o444)).unwrap();

        rewrite_all(dir.path(), PLACEHOLDER, "my-app").unwrap();

        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "nothing to see here"
        );
    }

    #[test]
    fn malformed_pattern_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let error = rewrite_all(dir.path(), "(", "my-app").unwrap_err();
        assert!(matches!(error, ScaffoldError::Pattern(_)));
    }
}
