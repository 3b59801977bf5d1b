//! Flat-file result cache.
//!
//! One JSON file per (format, topic, facts) under `RESULT_CACHE_DIR`, named
//! `<format>-<slug>-<hash>.json`. The hash covers the facts snapshot, so
//! loading different portfolio data never serves old generations. Entries
//! carry their write time and the registry version; stale or mismatched
//! entries are misses. Any I/O or decode problem is logged and treated as a
//! miss.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::generation::generator::GenerationResult;
use crate::portfolio::FactsSnapshot;
use crate::templates::{FormatId, REGISTRY_VERSION};

const MAX_SLUG_LEN: usize = 40;
/// Upper bound on the TTL (ten years), well inside chrono's range.
const MAX_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cache entry is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    cached_at: DateTime<Utc>,
    registry_version: String,
    format: FormatId,
    topic: String,
    result: GenerationResult,
}

#[derive(Debug, Clone)]
pub struct ResultCache {
    dir: PathBuf,
    ttl: Duration,
}

impl ResultCache {
    /// Creates the directory if needed.
    pub fn new(dir: impl Into<PathBuf>, ttl_secs: u64) -> Result<Self, CacheError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| CacheError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self {
            dir,
            ttl: Duration::seconds(ttl_secs.min(MAX_TTL_SECS) as i64),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, format: FormatId, topic: &str, facts: &FactsSnapshot) -> PathBuf {
        let key = format!(
            "{}\n{}\n{}",
            format.as_str(),
            topic.trim().to_lowercase(),
            facts.as_str()
        );
        let hash = Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()).simple().to_string();
        self.dir
            .join(format!("{}-{}-{}.json", format.as_str(), slug(topic), &hash[..12]))
    }

    pub async fn get(
        &self,
        format: FormatId,
        topic: &str,
        facts: &FactsSnapshot,
    ) -> Option<GenerationResult> {
        self.get_at(format, topic, facts, Utc::now()).await
    }

    async fn get_at(
        &self,
        format: FormatId,
        topic: &str,
        facts: &FactsSnapshot,
        now: DateTime<Utc>,
    ) -> Option<GenerationResult> {
        let path = self.path_for(format, topic, facts);
        match self.load(&path).await {
            Ok(Some(entry)) => {
                if entry.registry_version != REGISTRY_VERSION {
                    debug!(path = %path.display(), "cache entry from another registry version");
                    return None;
                }
                if now - entry.cached_at > self.ttl {
                    debug!(path = %path.display(), "cache entry expired");
                    return None;
                }
                Some(entry.result)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Ignoring unreadable cache entry: {e}");
                None
            }
        }
    }

    async fn load(&self, path: &Path) -> Result<Option<CacheEntry>, CacheError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CacheError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Writes through a temporary file so readers never see half an entry.
    pub async fn put(
        &self,
        format: FormatId,
        topic: &str,
        facts: &FactsSnapshot,
        result: &GenerationResult,
    ) -> Result<(), CacheError> {
        let entry = CacheEntry {
            cached_at: Utc::now(),
            registry_version: REGISTRY_VERSION.to_string(),
            format,
            topic: topic.trim().to_string(),
            result: result.clone(),
        };
        let path = self.path_for(format, topic, facts);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(&entry)?;

        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|source| CacheError::Io {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|source| CacheError::Io {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), "cached generation result");
        Ok(())
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes; `any` when empty.
fn slug(topic: &str) -> String {
    let mut out = String::new();
    for c in topic.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
        if out.len() >= MAX_SLUG_LEN {
            break;
        }
    }
    let out = out.trim_end_matches('-');
    if out.is_empty() {
        "any".to_string()
    } else {
        out.to_string()
    }
}
