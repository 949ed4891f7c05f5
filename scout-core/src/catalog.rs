use std::path::Path;

use crate::{AgentRecord, Result};

/// Read-only collection of agent records, loaded once at startup and shared
/// behind an `Arc` for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    agents: Vec<AgentRecord>,
}

impl Catalog {
    pub fn new(agents: Vec<AgentRecord>) -> Self {
        Self { agents }
    }

    /// Load a catalog from a JSON array on disk, failing on any IO or parse
    /// problem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let agents: Vec<AgentRecord> = serde_json::from_str(&raw)?;
        Ok(Self { agents })
    }

    /// Load a catalog, degrading to an empty one when the file is missing or
    /// unreadable. The service keeps answering (with zero candidates) rather
    /// than refusing to start.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to load agent catalog, continuing with an empty one"
                );
                Self::default()
            }
        }
    }

    pub fn agents(&self) -> &[AgentRecord] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
