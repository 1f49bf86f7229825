//! Build cache for incremental site generation.
//!
//! Rendering a portfolio is cheap; rewriting every file on every build is
//! not free for downstream tooling. Deploy syncs, file watchers and `rsync`
//! all key off modification times, so a build that rewrites identical bytes
//! makes every page look changed. This module lets the generate stage skip
//! writes whose content has not changed since the last build.
//!
//! # Design
//!
//! The cache is **content-addressed per output path**: each entry maps a
//! site-relative output path (`apps/notes/index.html`) to the SHA-256 of the
//! bytes last written there. A page is fresh when:
//!
//! 1. An entry for its path exists with the same hash, and
//! 2. The file is still on disk.
//!
//! Anything else is a write. Config changes, catalog edits and stylesheet
//! changes all surface as different rendered bytes, so no separate parameter
//! hashing is needed.
//!
//! ## Storage
//!
//! The cache manifest is a JSON file at `<output_dir>/.build-cache.json`. It
//! lives next to the generated pages so it travels with the output directory.
//!
//! ## Bypassing the cache
//!
//! Pass `--no-cache` to `build` to start from an empty manifest; every page is
//! rewritten.

use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the cache manifest file within the output directory.
pub const MANIFEST_FILENAME: &str = ".build-cache.json";

/// Version of the cache manifest format. Bump this to invalidate all
/// existing caches when the format or key computation changes.
const MANIFEST_VERSION: u32 = 1;

/// On-disk map of output paths to the hash of their last written content.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BuildCache {
    pub version: u32,
    pub entries: HashMap<String, String>,
}

impl BuildCache {
    /// Create an empty manifest (used for `--no-cache` or first build).
    pub fn empty() -> Self {
        Self {
            version: MANIFEST_VERSION,
            entries: HashMap::new(),
        }
    }

    /// Load from the output directory. Returns an empty manifest if the
    /// file doesn't exist or can't be parsed (version mismatch, corruption).
    pub fn load(output_dir: &Path) -> Self {
        let path = output_dir.join(MANIFEST_FILENAME);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return Self::empty(),
        };
        let manifest: Self = match serde_json::from_str(&content) {
            Ok(m) => m,
            Err(_) => return Self::empty(),
        };
        if manifest.version != MANIFEST_VERSION {
            return Self::empty();
        }
        manifest
    }

    /// Save to the output directory.
    pub fn save(&self, output_dir: &Path) -> io::Result<()> {
        let path = output_dir.join(MANIFEST_FILENAME);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }

    /// Whether `output_path` already holds content with `content_hash`.
    pub fn is_fresh(&self, output_path: &str, content_hash: &str, output_dir: &Path) -> bool {
        self.entries
            .get(output_path)
            .is_some_and(|stored| stored == content_hash)
            && output_dir.join(output_path).exists()
    }

    /// Record the hash of content just written to `output_path`.
    pub fn insert(&mut self, output_path: String, content_hash: String) {
        self.entries.insert(output_path, content_hash);
    }

    /// Drop entries for paths not produced by the current build.
    pub fn retain_paths<'a>(&mut self, live: impl IntoIterator<Item = &'a str>) {
        let live: std::collections::HashSet<&str> = live.into_iter().collect();
        self.entries.retain(|path, _| live.contains(path.as_str()));
    }
}

/// SHA-256 hash of rendered content, returned as a hex string.
pub fn hash_content(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Summary of cache performance for a build run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub unchanged: u32,
    pub written: u32,
}

impl CacheStats {
    pub fn hit(&mut self) {
        self.unchanged += 1;
    }

    pub fn miss(&mut self) {
        self.written += 1;
    }

    pub fn total(&self) -> u32 {
        self.unchanged + self.written
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unchanged > 0 {
            write!(
                f,
                "{} unchanged, {} written ({} total)",
                self.unchanged,
                self.written,
                self.total()
            )
        } else {
            write!(f, "{} written", self.written)
        }
    }
}

/// Resolve the cache manifest path for an output directory.
pub fn manifest_path(output_dir: &Path) -> PathBuf {
    output_dir.join(MANIFEST_FILENAME)
}
