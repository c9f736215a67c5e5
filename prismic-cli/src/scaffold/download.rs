//! Template archive download.

use std::fs;
use std::path::Path;

use crate::error::{ScaffoldError, ScaffoldResult};

/// Fetch `url` and persist the response body to `dest`.
///
/// The whole body is buffered in memory before the write; starter
/// archives are small enough that streaming to disk is not worth the
/// machinery. An existing file at `dest` is overwritten.
///
/// # Errors
///
/// Returns [`ScaffoldError::Download`] on transport failure, a
/// non-success HTTP status, or a local write failure.
pub fn fetch(url: &str, dest: &Path) -> ScaffoldResult<()> {
    let download_error = |reason: String| ScaffoldError::Download {
        url: url.to_string(),
        reason,
    };

    let response = ureq::get(url)
        .call()
        .map_err(|e| download_error(e.to_string()))?;

    if response.status() != 200 {
        return Err(download_error(format!("HTTP {}", response.status())));
    }

    let body = response
        .into_body()
        .read_to_vec()
        .map_err(|e| download_error(e.to_string()))?;

    fs::write(dest, body).map_err(|e| download_error(e.to_string()))?;

    Ok(())
}
