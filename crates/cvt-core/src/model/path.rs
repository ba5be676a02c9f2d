use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Ruta de un artifact: absoluta y resuelta, o ausente.
///
/// La ausencia se modela explícitamente en lugar de con una cadena vacía;
/// se renderiza como `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ArtifactPath(Option<PathBuf>);

impl ArtifactPath {
    /// Resuelve `raw` respecto al directorio de trabajo. Vacío => ausente.
    pub fn new(raw: &str) -> Self {
        Self(paths::resolve(raw))
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn from_path(path: &Path) -> Self {
        Self(Some(paths::absolutize(path)))
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_path(&self) -> Option<&Path> {
        self.0.as_deref()
    }

    pub fn render(&self) -> String {
        match &self.0 {
            Some(p) => paths::display_relative(p),
            None => String::new(),
        }
    }
}
