//! Local storage for downloaded images.
//!
//! Path resolution derives a file name from the last path segment of the
//! image address and probes for a collision-free name in the output
//! directory. Resolution is not synchronized with the downloads that
//! follow it; two calls for the same name with no download in between can
//! return the same path, which the engine's image dedup set prevents from
//! happening for a single crawl.

use std::path::{Path, PathBuf};

use url::Url;

use crate::fetcher::{FetchError, HttpFetcher};
use crate::utils::constants::MAX_PATH_PROBES;

/// Produce a collision-free local path for an image in `directory`.
///
/// Tries the image's own name first, then `name(1)`, `name(2)`, … up to
/// [`MAX_PATH_PROBES`] candidates. Returns `None` once every candidate
/// exists on disk. The name is sanitized with Windows rules on every
/// platform so the same address maps to the same file name everywhere.
#[must_use]
pub fn resolve_local_path(image_link: &str, directory: &Path) -> Option<PathBuf> {
    let raw_name = image_link.rsplit('/').next().unwrap_or(image_link);
    let name = sanitize_filename::sanitize_with_options(
        raw_name,
        sanitize_filename::Options {
            windows: true,
            truncate: true,
            replacement: "",
        },
    );

    let mut candidate = directory.join(&name);
    let mut probe = 1;
    while candidate.exists() && probe < MAX_PATH_PROBES {
        candidate = directory.join(format!("{name}({probe})"));
        probe += 1;
    }

    if candidate.exists() {
        None
    } else {
        Some(candidate)
    }
}

/// Download the image at `url` and write its bytes to `path`.
///
/// # Errors
///
/// Returns an error if the fetch fails or the file cannot be written.
pub async fn download_to(
    fetcher: &HttpFetcher,
    url: &Url,
    path: &Path,
) -> Result<(), FetchError> {
    let bytes = fetcher.fetch_bytes(url).await?;
    tokio::fs::write(path, &bytes).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn uses_the_image_name_when_free() {
        let dir = TempDir::new().unwrap();
        let path = resolve_local_path("https://a.com/pics/cat.jpg", dir.path()).unwrap();
        assert_eq!(path, dir.path().join("cat.jpg"));
    }

    #[test]
    fn probes_past_an_existing_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cat.jpg"), b"x").unwrap();
        let path = resolve_local_path("https://a.com/cat.jpg", dir.path()).unwrap();
        assert_eq!(path, dir.path().join("cat.jpg(1)"));
    }

    #[test]
    fn consecutive_resolutions_yield_distinct_paths_once_materialized() {
        let dir = TempDir::new().unwrap();
        let first = resolve_local_path("https://a.com/cat.jpg", dir.path()).unwrap();
        fs::write(&first, b"x").unwrap();
        let second = resolve_local_path("https://a.com/cat.jpg", dir.path()).unwrap();
        assert_ne!(first, second);
        assert_eq!(second, dir.path().join("cat.jpg(1)"));
    }

    #[test]
    fn gives_up_after_a_hundred_collisions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cat.jpg"), b"x").unwrap();
        for i in 1..100 {
            fs::write(dir.path().join(format!("cat.jpg({i})")), b"x").unwrap();
        }
        assert_eq!(resolve_local_path("https://a.com/cat.jpg", dir.path()), None);
    }

    #[test]
    fn strips_filesystem_hostile_characters() {
        let dir = TempDir::new().unwrap();
        let path = resolve_local_path("https://a.com/img.jpg?v=2", dir.path()).unwrap();
        assert_eq!(path, dir.path().join("img.jpgv=2"));
    }
}
