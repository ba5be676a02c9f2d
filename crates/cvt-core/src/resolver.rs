//! Resolución de definiciones de actores atómicos.
//!
//! Dado un nombre lógico, busca `<nombre>.yml` primero en el directorio de
//! actores configurado y luego en el `actors/` empaquetado. Es una búsqueda
//! pura: no lee ni valida el YAML.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Configuration;
use crate::constants::ACTOR_FILE_EXTENSION;
use crate::errors::ResolveError;
use crate::model::AtomicActorDefinition;

pub struct ActorResolver<'a> {
    config: &'a Configuration,
}

impl<'a> ActorResolver<'a> {
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    /// Rutas candidatas en orden de prioridad.
    pub fn candidates(&self, name: &str) -> Vec<PathBuf> {
        let file = format!("{name}.{ACTOR_FILE_EXTENSION}");
        let mut out = Vec::with_capacity(2);
        if let Some(dir) = self.config.actor_config_dir() {
            out.push(dir.join(&file));
        }
        out.push(self.config.bundled_actor_dir().join(&file));
        out
    }

    /// Resuelve `name` a una definición.
    ///
    /// Si `name` es ya la ruta de un fichero `.yml`/`.yaml` existente se usa
    /// directamente y el nombre lógico es el stem del fichero.
    pub fn resolve(&self, name: &str) -> Result<AtomicActorDefinition, ResolveError> {
        if let Some(def) = direct_yaml(name) {
            debug!("resolve:direct name={} path={}", def.name(), name);
            return Ok(def);
        }
        let searched = self.candidates(name);
        match searched.iter().find(|p| p.is_file()) {
            Some(found) => {
                debug!("resolve:found name={name} path={}", found.display());
                Ok(AtomicActorDefinition::new(name, found))
            }
            None => Err(ResolveError::NotFound { name: name.to_string(),
                                                 searched }),
        }
    }
}

fn direct_yaml(name: &str) -> Option<AtomicActorDefinition> {
    let path = Path::new(name);
    let ext = path.extension()?.to_str()?;
    if !matches!(ext, "yml" | "yaml") || !path.is_file() {
        return None;
    }
    let stem = path.file_stem()?.to_string_lossy().into_owned();
    Some(AtomicActorDefinition::new(stem, path))
}
