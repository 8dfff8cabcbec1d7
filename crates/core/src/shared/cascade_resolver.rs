use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CascadeResolveError {
    #[error("failed to create cascade cache directory: {0}")]
    CacheDir(#[source] std::io::Error),
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write cascade to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not determine cascade cache directory")]
    NoCacheDir,
}

/// Progress callback: `(bytes_downloaded, total_bytes)`.
/// `total_bytes` is 0 if the server didn't provide Content-Length.
pub type ProgressFn = Box<dyn Fn(u64, u64) + Send>;

/// Resolve a cascade XML file by name, checking local locations before
/// downloading.
///
/// Resolution order:
/// 1. User cache directory (platform-specific)
/// 2. Bundled path (for development / pre-packaged installs)
/// 3. Download from URL to cache
pub fn resolve(
    name: &str,
    url: &str,
    bundled_dir: Option<&Path>,
    progress: Option<ProgressFn>,
) -> Result<PathBuf, CascadeResolveError> {
    let cache_dir = cascade_cache_dir()?;
    resolve_in(&cache_dir, name, url, bundled_dir, progress)
}

fn resolve_in(
    cache_dir: &Path,
    name: &str,
    url: &str,
    bundled_dir: Option<&Path>,
    progress: Option<ProgressFn>,
) -> Result<PathBuf, CascadeResolveError> {
    let cached = cache_dir.join(name);
    if cached.exists() {
        log::debug!("cascade cache hit: {}", cached.display());
        return Ok(cached);
    }

    if let Some(dir) = bundled_dir {
        let bundled = dir.join(name);
        if bundled.exists() {
            return Ok(bundled);
        }
    }

    fs::create_dir_all(cache_dir).map_err(CascadeResolveError::CacheDir)?;
    download(url, &cached, progress)?;
    Ok(cached)
}

/// Platform cascade cache: `$XDG_CACHE_HOME/facelive/cascades` on Linux and
/// the platform equivalents elsewhere.
pub fn cascade_cache_dir() -> Result<PathBuf, CascadeResolveError> {
    dirs::cache_dir()
        .map(|d| d.join("facelive").join("cascades"))
        .ok_or(CascadeResolveError::NoCacheDir)
}

fn download(
    url: &str,
    dest: &Path,
    progress: Option<ProgressFn>,
) -> Result<(), CascadeResolveError> {
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| CascadeResolveError::Download {
            url: url.to_string(),
            source: e,
        })?;

    let total = response.content_length().unwrap_or(0);
    let bytes = response.bytes().map_err(|e| CascadeResolveError::Download {
        url: url.to_string(),
        source: e,
    })?;

    write_atomic(dest, &bytes, total, progress)
}

/// Writes through a `.part` sibling and renames into place, so an aborted
/// download never leaves a truncated file at the final path.
fn write_atomic(
    dest: &Path,
    bytes: &[u8],
    total: u64,
    progress: Option<ProgressFn>,
) -> Result<(), CascadeResolveError> {
    let write_err = |path: &Path, source| CascadeResolveError::Write {
        path: path.to_path_buf(),
        source,
    };

    let temp_path = dest.with_extension("part");
    let mut file = fs::File::create(&temp_path).map_err(|e| write_err(&temp_path, e))?;

    // Report progress per chunk rather than per write syscall.
    let chunk_size = 256 * 1024;
    let mut written: u64 = 0;
    for chunk in bytes.chunks(chunk_size) {
        file.write_all(chunk).map_err(|e| write_err(&temp_path, e))?;
        written += chunk.len() as u64;
        if let Some(ref cb) = progress {
            cb(written, total);
        }
    }

    file.flush().map_err(|e| write_err(&temp_path, e))?;
    drop(file);

    fs::rename(&temp_path, dest).map_err(|e| write_err(dest, e))
}
