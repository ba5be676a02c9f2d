//! Mantenimiento de la cache de herramientas.

use std::fs;
use std::io;

use cvt_core::Configuration;
use log::info;

/// Borra los directorios de instalación, archivos y tool-info.
///
/// Destructivo e incondicional. Un directorio inexistente es un error del
/// sistema operativo y se propaga tal cual; los directorios anteriores ya
/// borrados no se restauran.
pub fn clean(config: &Configuration) -> io::Result<()> {
    for dir in config.cache_dirs() {
        fs::remove_dir_all(&dir)?;
        info!("clean:removed dir={}", dir.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_all_cache_dirs() {
        let root = tempfile::tempdir().unwrap();
        let cfg = Configuration::new(root.path());
        cfg.prepare_cache_dirs().unwrap();
        fs::write(cfg.install_dir().join("marker"), b"x").unwrap();

        clean(&cfg).unwrap();
        for dir in cfg.cache_dirs() {
            assert!(!dir.exists(), "{} still exists", dir.display());
        }
        assert!(root.path().exists());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let cfg = Configuration::new(root.path());
        let err = clean(&cfg).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
