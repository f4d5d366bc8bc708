//! Locating input files under the input directory by glob pattern.
//!
//! Patterns match paths relative to the input directory. `*` does not cross
//! directory separators; use `**/` to reach into subdirectories.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use globset::{GlobBuilder, GlobMatcher};
use tracing::debug;
use walkdir::WalkDir;

use promosheet_core::{application::ApplicationError, error::PromoResult};

fn compile(pattern: &str) -> PromoResult<GlobMatcher> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|err| ApplicationError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        })?;
    Ok(glob.compile_matcher())
}

/// Every file under `dir` matching `pattern`, sorted by path.
pub fn discover(dir: &Path, pattern: &str) -> PromoResult<Vec<PathBuf>> {
    let matcher = compile(pattern)?;
    if !dir.is_dir() {
        return Err(ApplicationError::Io {
            path: dir.to_path_buf(),
            reason: "input directory does not exist".into(),
        }
        .into());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .strip_prefix(dir)
                .is_ok_and(|rel| matcher.is_match(rel))
        })
        .map(|entry| entry.into_path())
        .collect();
    files.sort();

    debug!(dir = %dir.display(), pattern, count = files.len(), "Discovered input files");
    Ok(files)
}

/// The most recently modified file matching `pattern`. Ties go to the
/// greater path.
pub fn newest(dir: &Path, pattern: &str) -> PromoResult<PathBuf> {
    let mut latest: Option<(SystemTime, PathBuf)> = None;
    for path in discover(dir, pattern)? {
        let modified = std::fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .map_err(|e| ApplicationError::Io {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        if latest.as_ref().is_none_or(|(best, _)| modified >= *best) {
            latest = Some((modified, path));
        }
    }

    latest.map(|(_, path)| path).ok_or_else(|| {
        ApplicationError::NoInputFiles {
            dir: dir.to_path_buf(),
            pattern: pattern.to_string(),
        }
        .into()
    })
}
