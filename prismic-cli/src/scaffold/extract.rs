//! Archive extraction and project directory materialization.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{ScaffoldError, ScaffoldResult};

/// Unpack `archive` under `work_dir`, then move the expected top-level
/// folder `inner` onto `target_dir`.
///
/// Starter archives contain exactly one top-level directory. Entries
/// whose paths would resolve outside the extraction root abort the
/// extraction. When `target_dir` is `work_dir` itself (scaffolding into
/// the directory the user is already in), the extracted folder's
/// contents are moved into it instead of renaming the folder.
///
/// # Errors
///
/// Returns [`ScaffoldError::Extraction`] if the archive cannot be opened
/// or parsed, an entry escapes the extraction root, or the expected
/// top-level folder is missing after extraction.
pub fn extract(
    archive: &Path,
    work_dir: &Path,
    target_dir: &Path,
    inner: &str,
) -> ScaffoldResult<()> {
    let file = fs::File::open(archive).map_err(|e| {
        ScaffoldError::Extraction(format!("cannot open {}: {e}", archive.display()))
    })?;
    let mut zip = zip::ZipArchive::new(file).map_err(|e| {
        ScaffoldError::Extraction(format!("cannot read {}: {e}", archive.display()))
    })?;

    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(|e| {
            ScaffoldError::Extraction(format!("cannot read archive entry {index}: {e}"))
        })?;

        let Some(entry_path) = entry.enclosed_name() else {
            return Err(ScaffoldError::Extraction(format!(
                "archive entry {:?} escapes the extraction root",
                entry.name()
            )));
        };
        let output_path = work_dir.join(entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&output_path).map_err(|e| io_error(&output_path, &e))?;
        } else {
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).map_err(|e| io_error(parent, &e))?;
            }
            let mut outfile =
                fs::File::create(&output_path).map_err(|e| io_error(&output_path, &e))?;
            io::copy(&mut entry, &mut outfile).map_err(|e| io_error(&output_path, &e))?;
        }
    }

    let unpacked_root = work_dir.join(inner);
    if !unpacked_root.is_dir() {
        return Err(ScaffoldError::Extraction(format!(
            "archive did not unpack to the expected folder {inner}"
        )));
    }

    rename_into_target(&unpacked_root, work_dir, target_dir)
}

fn io_error(path: &Path, source: &io::Error) -> ScaffoldError {
    ScaffoldError::Extraction(format!("{}: {source}", path.display()))
}

/// Move the unpacked root into its final place.
fn rename_into_target(
    unpacked_root: &Path,
    work_dir: &Path,
    target_dir: &Path,
) -> ScaffoldResult<()> {
    let scaffold_in_place = match (target_dir.canonicalize(), work_dir.canonicalize()) {
        (Ok(target), Ok(work)) => target == work,
        _ => false,
    };

    if scaffold_in_place {
        let entries = fs::read_dir(unpacked_root).map_err(|e| io_error(unpacked_root, &e))?;
        for dir_entry in entries {
            let dir_entry = dir_entry.map_err(|e| io_error(unpacked_root, &e))?;
            let destination = target_dir.join(dir_entry.file_name());
            fs::rename(dir_entry.path(), &destination)
                .map_err(|e| io_error(&destination, &e))?;
        }
        fs::remove_dir(unpacked_root).map_err(|e| io_error(unpacked_root, &e))?;
        return Ok(());
    }

    fs::rename(unpacked_root, target_dir).map_err(|e| {
        ScaffoldError::Extraction(format!(
            "cannot rename {} to {}: {e}",
            unpacked_root.display(),
            target_dir.display()
        ))
    })
}
