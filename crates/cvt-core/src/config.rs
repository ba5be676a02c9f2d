//! Configuración de proceso: raíz de cache y directorios de actores.
//!
//! Se construye una sola vez al arrancar (`from_env`) y se pasa por
//! referencia a quien necesite rutas de cache. No se muta implícitamente;
//! sólo `--clean` borra los directorios que describe.
//!
//! Variables (también leídas desde `.env`):
//! - `COVERITEAM_CACHE_DIR`: raíz de cache (por defecto `./cache`).
//! - `COVERITEAM_ACTOR_CONFIG_PATH`: directorio de YAML de actores.
//! - `COVERITEAM_BUNDLED_ACTORS`: sustituye al directorio `actors/` empaquetado.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dotenvy::dotenv;
use log::debug;
use once_cell::sync::Lazy;

use crate::constants::{ACTOR_CONFIG_ENV, ARCHIVE_DIR_NAME, BUNDLED_ACTORS_DIR, BUNDLED_ACTORS_DIR_NAME, BUNDLED_ACTORS_ENV, CACHE_DIR_ENV,
                       DEFAULT_CACHE_ROOT, INSTALL_DIR_NAME, TOOL_INFO_DIR_NAME};
use crate::errors::ConfigError;
use crate::paths;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

/// `actors/` del árbol de compilación si sigue existiendo; si no, `actors/`
/// junto al ejecutable (binarios instalados).
fn default_bundled_actor_dir() -> PathBuf {
    let exe_dir = env::current_exe().ok()
                                    .and_then(|exe| exe.parent().map(Path::to_path_buf));
    pick_bundled_actor_dir(Path::new(BUNDLED_ACTORS_DIR), exe_dir.as_deref())
}

fn pick_bundled_actor_dir(build_dir: &Path, exe_dir: Option<&Path>) -> PathBuf {
    let build_dir = paths::normalize(build_dir);
    if build_dir.is_dir() {
        return build_dir;
    }
    match exe_dir {
        Some(dir) => dir.join(BUNDLED_ACTORS_DIR_NAME),
        None => build_dir,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    cache_root: PathBuf,
    actor_config_dir: Option<PathBuf>,
    bundled_actor_dir: PathBuf,
}

impl Configuration {
    /// Configuración con la raíz de cache dada y el directorio de actores
    /// empaquetado; sin directorio de actores configurado.
    pub fn new(cache_root: impl AsRef<Path>) -> Self {
        Self { cache_root: paths::absolutize(cache_root.as_ref()),
               actor_config_dir: None,
               bundled_actor_dir: default_bundled_actor_dir() }
    }

    /// Lee el entorno. `cache_override` (p. ej. `--cache-dir`) tiene
    /// prioridad sobre `COVERITEAM_CACHE_DIR`.
    pub fn from_env(cache_override: Option<&Path>) -> Self {
        Lazy::force(&DOTENV_LOADED);
        let cache_root = match cache_override {
            Some(p) => p.to_path_buf(),
            None => env::var_os(CACHE_DIR_ENV).map(PathBuf::from)
                                              .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_ROOT)),
        };
        let mut cfg = Self::new(cache_root);
        if let Some(dir) = env::var_os(ACTOR_CONFIG_ENV).filter(|v| !v.is_empty()) {
            cfg = cfg.with_actor_config_dir(PathBuf::from(dir));
        }
        if let Some(dir) = env::var_os(BUNDLED_ACTORS_ENV).filter(|v| !v.is_empty()) {
            cfg = cfg.with_bundled_actor_dir(PathBuf::from(dir));
        }
        debug!("config:loaded cache_root={} actor_config_dir={:?} bundled={}",
               cfg.cache_root.display(),
               cfg.actor_config_dir,
               cfg.bundled_actor_dir.display());
        cfg
    }

    pub fn with_actor_config_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.actor_config_dir = Some(paths::absolutize(dir.as_ref()));
        self
    }

    pub fn with_bundled_actor_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.bundled_actor_dir = paths::absolutize(dir.as_ref());
        self
    }

    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    pub fn install_dir(&self) -> PathBuf {
        self.cache_root.join(INSTALL_DIR_NAME)
    }

    pub fn archive_dir(&self) -> PathBuf {
        self.cache_root.join(ARCHIVE_DIR_NAME)
    }

    pub fn tool_info_dir(&self) -> PathBuf {
        self.cache_root.join(TOOL_INFO_DIR_NAME)
    }

    /// Directorios que borra `--clean`, en orden.
    pub fn cache_dirs(&self) -> [PathBuf; 3] {
        [self.install_dir(), self.archive_dir(), self.tool_info_dir()]
    }

    pub fn actor_config_dir(&self) -> Option<&Path> {
        self.actor_config_dir.as_deref()
    }

    pub fn bundled_actor_dir(&self) -> &Path {
        &self.bundled_actor_dir
    }

    /// Crea la raíz de cache y sus subdirectorios si faltan.
    pub fn prepare_cache_dirs(&self) -> Result<(), ConfigError> {
        if self.cache_root.exists() && !self.cache_root.is_dir() {
            return Err(ConfigError::NotADirectory(self.cache_root.clone()));
        }
        for dir in self.cache_dirs() {
            fs::create_dir_all(&dir)?;
        }
        debug!("config:cache_ready root={}", self.cache_root.display());
        Ok(())
    }
}
