//! The immutable destination catalog
//!
//! The catalog is an explicitly constructed value, fixed at startup and
//! shared read-only for the lifetime of the process. Construction validates
//! id uniqueness; after that every operation is an infallible pure read.

use std::collections::HashSet;
use std::path::Path;

use crate::error::ParawisError;
use crate::models::Destination;
use crate::Result;

/// Destination data compiled into the binary.
const BUILTIN_DATA: &str = include_str!("../data/destinations.json");

/// Fixed, ordered collection of destination records
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    /// Build a catalog from a list of destinations, preserving their order.
    ///
    /// Fails when two records share an id.
    pub fn new(destinations: Vec<Destination>) -> Result<Self> {
        let mut seen = HashSet::new();
        for destination in &destinations {
            if !seen.insert(destination.id) {
                return Err(ParawisError::catalog(format!(
                    "duplicate destination id {}",
                    destination.id
                )));
            }
        }
        Ok(Self { destinations })
    }

    /// The showcase data set embedded in the binary.
    pub fn builtin() -> Result<Self> {
        let destinations: Vec<Destination> = serde_json::from_str(BUILTIN_DATA)
            .map_err(|e| ParawisError::catalog(format!("builtin data: {e}")))?;
        Self::new(destinations)
    }

    /// Load a replacement data set from a JSON file.
    ///
    /// Lets deployments swap the showcase data without recompiling.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let destinations: Vec<Destination> = serde_json::from_str(&raw).map_err(|e| {
            ParawisError::catalog(format!("{}: {e}", path.as_ref().display()))
        })?;
        Self::new(destinations)
    }

    /// Full ordered sequence of destinations.
    pub fn all(&self) -> &[Destination] {
        &self.destinations
    }

    /// First destination whose id equals `id`.
    ///
    /// Linear scan; the catalog is small and no index is warranted.
    pub fn get_by_id(&self, id: u32) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
