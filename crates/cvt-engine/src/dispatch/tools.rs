//! Herramientas de actores: versión e instalación.
//!
//! La descarga/instalación real de binarios queda detrás de `ToolProvider`.
//! `YamlToolProvider` lee la definición YAML del actor, informa su versión y,
//! al "instalar", registra el tool-info en la cache y prepara el directorio
//! de instalación.

use std::fs;
use std::path::{Path, PathBuf};

use cvt_core::{AtomicActorDefinition, Configuration};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::ToolError;

/// Definición YAML de un actor. Claves desconocidas se ignoran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorConfig {
    pub actor_name: String,
    pub toolinfo_module: String,
    pub format_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub archives: Vec<ArchiveEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<ArchiveLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    pub version: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveLocation {
    pub location: String,
}

impl ActorConfig {
    pub fn load(path: &Path) -> Result<Self, ToolError> {
        let text = fs::read_to_string(path)?;
        serde_yaml::from_str(&text).map_err(|source| ToolError::Yaml { path: path.display().to_string(),
                                                                      source })
    }

    /// `version` explícita, o la del primer archivo.
    pub fn reported_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .or_else(|| self.archives.first().map(|a| a.version.as_str()))
    }
}

/// Frontera con la gestión de binarios de herramientas.
pub trait ToolProvider {
    /// Versión de la herramienta del actor.
    fn version(&self, actor: &AtomicActorDefinition) -> Result<String, ToolError>;
    /// Instala la herramienta y devuelve su directorio de instalación.
    fn install(&self, actor: &AtomicActorDefinition, config: &Configuration) -> Result<PathBuf, ToolError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlToolProvider;

impl YamlToolProvider {
    fn load(actor: &AtomicActorDefinition) -> Result<ActorConfig, ToolError> {
        let path = actor.path()
                        .as_path()
                        .ok_or_else(|| ToolError::MissingPath(actor.name().to_string()))?;
        ActorConfig::load(path)
    }
}

impl ToolProvider for YamlToolProvider {
    fn version(&self, actor: &AtomicActorDefinition) -> Result<String, ToolError> {
        let cfg = Self::load(actor)?;
        let version = cfg.reported_version()
                         .ok_or_else(|| ToolError::MissingVersion(cfg.actor_name.clone()))?;
        debug!("tool:version actor={} version={version}", cfg.actor_name);
        Ok(version.to_string())
    }

    fn install(&self, actor: &AtomicActorDefinition, config: &Configuration) -> Result<PathBuf, ToolError> {
        let cfg = Self::load(actor)?;
        config.prepare_cache_dirs()?;

        let info_path = config.tool_info_dir().join(format!("{}.json", actor.name()));
        fs::write(&info_path, serde_json::to_vec_pretty(&cfg)?)?;

        let install_dir = config.install_dir().join(actor.name());
        fs::create_dir_all(&install_dir)?;
        info!("tool:installed actor={} dir={} info={}",
              actor.name(),
              install_dir.display(),
              info_path.display());
        Ok(install_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPA: &str = r#"actor_name: cpachecker
toolinfo_module: cpachecker.py
format_version: '1.2'
archives:
  - version: '2.1'
    location: https://example.org/cpa-2.1.zip
  - version: '2.0'
    location: https://example.org/cpa-2.0.zip
options: ['-svcomp20']
"#;

    #[test]
    fn version_falls_back_to_first_archive() {
        let cfg: ActorConfig = serde_yaml::from_str(CPA).unwrap();
        assert_eq!(cfg.reported_version(), Some("2.1"));
        let explicit = ActorConfig { version: Some("3.0".into()),
                                     ..cfg };
        assert_eq!(explicit.reported_version(), Some("3.0"));
    }

    #[test]
    fn single_archive_form_has_no_version() {
        let cfg: ActorConfig = serde_yaml::from_str("actor_name: x\ntoolinfo_module: x.py\nformat_version: '1.0'\narchive:\n  location: ./x.zip\n").unwrap();
        assert_eq!(cfg.reported_version(), None);
        assert_eq!(cfg.archive.map(|a| a.location), Some("./x.zip".to_string()));
    }
}
