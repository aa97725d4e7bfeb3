//! On-disk background-track catalog.

use crate::Result;
use crate::wav::read_wav;
use clipfx_core::SampleBuffer;
use clipfx_pipeline::TrackSource;
use std::collections::BTreeMap;
use std::path::Path;

/// A catalog entry for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    /// Lookup id (the file stem).
    pub id: String,
    /// Human-readable display name.
    pub name: String,
}

/// Background tracks decoded once at startup and served read-only.
///
/// The catalog scans a directory for `.wav` files; each file becomes one
/// track whose id is its file stem (`beat1.wav` -> `beat1`). Files that
/// fail to decode are skipped with a warning rather than failing the whole
/// load. After loading, lookups never touch the filesystem.
pub struct TrackCatalog {
    tracks: BTreeMap<String, SampleBuffer>,
}

impl TrackCatalog {
    /// An empty catalog. Every lookup misses.
    pub fn empty() -> Self {
        Self {
            tracks: BTreeMap::new(),
        }
    }

    /// Load every decodable `.wav` file in `dir`.
    ///
    /// # Errors
    /// Fails only if the directory itself cannot be read; individual bad
    /// files are logged and skipped.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut tracks = BTreeMap::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("wav") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match read_wav(&path) {
                Ok(buffer) => {
                    tracing::info!(
                        track = stem,
                        duration_secs = buffer.duration_secs(),
                        "loaded background track"
                    );
                    tracks.insert(stem.to_string(), buffer);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping undecodable track");
                }
            }
        }
        Ok(Self { tracks })
    }

    /// All available tracks, sorted by id.
    pub fn list(&self) -> Vec<TrackInfo> {
        self.tracks
            .keys()
            .map(|id| TrackInfo {
                id: id.clone(),
                name: display_name(id),
            })
            .collect()
    }

    /// Number of loaded tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the catalog holds no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl TrackSource for TrackCatalog {
    fn get(&self, id: &str) -> Option<SampleBuffer> {
        self.tracks.get(id).cloned()
    }
}

/// `lofi_beat` -> `Lofi Beat`.
fn display_name(id: &str) -> String {
    id.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
