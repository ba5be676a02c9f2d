//! Resolución léxica de rutas.
//!
//! Los artifacts guardan rutas absolutas calculadas al construirse, sin tocar
//! el sistema de ficheros: la ruta puede no existir todavía (un actor la
//! escribirá después).

use std::env;
use std::path::{Component, Path, PathBuf};

use log::warn;

/// Convierte `raw` en una ruta absoluta normalizada. `None` si `raw` está vacío.
pub fn resolve(raw: &str) -> Option<PathBuf> {
    if raw.is_empty() {
        return None;
    }
    Some(absolutize(Path::new(raw)))
}

/// Igual que [`resolve`] pero para rutas ya tipadas.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize(path);
    }
    match env::current_dir() {
        Ok(cwd) => normalize(&cwd.join(path)),
        Err(e) => {
            warn!("resolve:cwd unavailable path={} err={e}", path.display());
            normalize(path)
        }
    }
}

/// Normalización léxica: elimina `.` y pliega `..` sobre el componente previo.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }
    out.iter().collect()
}

/// Ruta de `path` relativa a `base` (ambas absolutas y normalizadas).
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_comps: Vec<Component<'_>> = path.components().collect();
    let base_comps: Vec<Component<'_>> = base.components().collect();
    let common = path_comps.iter().zip(base_comps.iter()).take_while(|(a, b)| a == b).count();

    let mut rel = PathBuf::new();
    for _ in common..base_comps.len() {
        rel.push("..");
    }
    for comp in &path_comps[common..] {
        rel.push(comp.as_os_str());
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    rel
}

/// Representación humana: relativa al directorio de trabajo actual.
pub fn display_relative(path: &Path) -> String {
    match env::current_dir() {
        Ok(cwd) => relative_to(path, &normalize(&cwd)).display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_dots() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize(Path::new("../a/b/..")), PathBuf::from("../a"));
    }

    #[test]
    fn relative_paths_walk_up_and_down() {
        assert_eq!(relative_to(Path::new("/w/p/foo.c"), Path::new("/w/p")), PathBuf::from("foo.c"));
        assert_eq!(relative_to(Path::new("/w/q/foo.c"), Path::new("/w/p")), PathBuf::from("../q/foo.c"));
        assert_eq!(relative_to(Path::new("/w/p"), Path::new("/w/p")), PathBuf::from("."));
    }

    #[test]
    fn empty_input_is_absent() {
        assert_eq!(resolve(""), None);
        assert!(resolve("x.c").map(|p| p.is_absolute()).unwrap_or(false));
    }
}
