//! # Seeder Registry
//! In-memory mapping from source-system identifiers to backend-assigned
//! identifiers, partitioned by entity kind.
//!
//! The registry is the single source of truth for dependency resolution
//! during a seeding run: a lookup miss means the dependency was never
//! created (or failed creation) and the dependent row must be skipped,
//! never defaulted. The registry is rebuilt fresh on every process
//! invocation; the hydrator may pre-populate it from entities that already
//! exist remotely so that reruns do not create duplicates.
use std::collections::HashMap;

use seeder_shared::types::EntityKind;

/// Source-key → target-id store, partitioned by [`EntityKind`].
///
/// Entries are write-once in practice (one per successful remote creation,
/// plus hydration entries keyed by natural name); there is no removal.
/// Access is single-threaded for the whole run.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entries: HashMap<EntityKind, HashMap<String, String>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a source-key → target-id mapping for the given kind.
    ///
    /// Re-recording the same key overwrites silently; the seeders only do
    /// this when mapping a source id onto an already-hydrated natural key.
    pub fn record(
        &mut self,
        kind: EntityKind,
        source_key: impl Into<String>,
        target_id: impl Into<String>,
    ) {
        self.entries
            .entry(kind)
            .or_default()
            .insert(source_key.into(), target_id.into());
    }

    /// Resolves a source key to the backend identifier, if one was recorded.
    pub fn resolve(&self, kind: EntityKind, source_key: &str) -> Option<&str> {
        self.entries
            .get(&kind)?
            .get(source_key)
            .map(String::as_str)
    }

    pub fn contains(&self, kind: EntityKind, source_key: &str) -> bool {
        self.resolve(kind, source_key).is_some()
    }

    /// Number of mappings recorded for one kind.
    pub fn len(&self, kind: EntityKind) -> usize {
        self.entries.get(&kind).map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }
}
