use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ArtifactPath;

/// Definición de un actor atómico: nombre lógico + YAML resuelto.
///
/// Se obtiene siempre a través de `ActorResolver`; se renderiza como su
/// nombre, no como su ruta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomicActorDefinition {
    name: String,
    path: ArtifactPath,
}

impl AtomicActorDefinition {
    pub fn new(name: impl Into<String>, path: &Path) -> Self {
        Self { name: name.into(),
               path: ArtifactPath::from_path(path) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &ArtifactPath {
        &self.path
    }

    pub fn render(&self) -> String {
        self.name.clone()
    }
}
