use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::RenderError;

/// Create `dir` (and parents) if it does not exist yet. Safe to call repeatedly.
pub fn ensure_output_dir(dir: &Path) -> Result<(), RenderError> {
    if !dir.is_dir() {
        debug!("creating output directory {}", dir.display());
    }
    fs::create_dir_all(dir).map_err(|source| RenderError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// `<dir>/<stem>_graph.png`
pub fn image_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}_graph.png"))
}

fn is_unsafe(c: char) -> bool {
    c.is_control() || matches!(c, '/' | '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*')
}

/// Replace characters that cannot appear in a file name with `_`.
pub fn sanitize_stem(domain: &str) -> String {
    let stem: String = domain
        .chars()
        .map(|c| if is_unsafe(c) { '_' } else { c })
        .collect();
    match stem.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => stem,
    }
}

/// One distinct file stem per domain, in the same order as `domains`.
///
/// Domains that are already valid file names keep their exact value. The
/// others are sanitized and, when that clashes with a stem already taken,
/// suffixed with `-2`, `-3`, ...
pub fn file_stems(domains: &[&str]) -> Vec<String> {
    let mut taken: HashSet<String> = domains
        .iter()
        .filter(|d| sanitize_stem(d) == **d)
        .map(|d| d.to_string())
        .collect();

    domains
        .iter()
        .map(|&domain| {
            let base = sanitize_stem(domain);
            if base == domain {
                return base;
            }
            let mut stem = base.clone();
            let mut k = 2;
            while taken.contains(&stem) {
                stem = format!("{base}-{k}");
                k += 1;
            }
            if stem != base {
                warn!("domain '{domain}' collides with another file name, writing it as '{stem}'");
            }
            taken.insert(stem.clone());
            stem
        })
        .collect()
}
