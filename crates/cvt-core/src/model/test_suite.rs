//! `TestSuite`: colección de tests respaldada por un directorio.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::ArtifactPath;
use crate::errors::JoinError;
use crate::ids::IdGenerator;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    path: ArtifactPath,
}

impl TestSuite {
    pub fn new(raw: &str) -> Self {
        Self { path: ArtifactPath::new(raw) }
    }

    pub fn absent() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &ArtifactPath {
        &self.path
    }

    pub fn render(&self) -> String {
        self.path.render()
    }

    /// Fusiona `other` dentro de `self` por contención y devuelve `self`.
    ///
    /// - `self` ausente: adopta la ruta de `other` (sin copiar nada).
    /// - `other` presente: copia su árbol completo a `<self>/<id fresco>`.
    ///
    /// La ruta de nivel superior de `self` no cambia si ya existía.
    pub fn join(&mut self, other: &TestSuite, ids: &dyn IdGenerator) -> Result<&mut Self, JoinError> {
        let Some(own) = self.path.as_path().map(Path::to_path_buf) else {
            self.path = other.path.clone();
            return Ok(self);
        };
        if let Some(src) = other.path.as_path() {
            let id = ids.next_id();
            let dest = own.join(&id);
            let skip = fs::canonicalize(&own)?.join(&id);
            fs::create_dir(&dest)?;
            if let Err(e) = copy_contents(src, &dest, &skip) {
                // sin copias parciales
                let _ = fs::remove_dir_all(&dest);
                return Err(e.into());
            }
            debug!("join:test_suite copied src={} dest={}", src.display(), dest.display());
        }
        Ok(self)
    }
}

/// Copia recursiva del contenido de `src` en `dest`, que ya existe.
///
/// `skip` es la ruta canónica de la copia en construcción: si `src` contiene
/// a `dest`, ese directorio se omite en cualquier nivel.
fn copy_contents(src: &Path, dest: &Path, skip: &Path) -> io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            if fs::canonicalize(entry.path())? == skip {
                continue;
            }
            fs::create_dir(&target)?;
            copy_contents(&entry.path(), &target, skip)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
