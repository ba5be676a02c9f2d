//! Errores del core.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::ArtifactKind;

/// Errores del protocolo `join`.
///
/// `TypeMismatch` y `NotJoinable` indican un pipeline mal construido; no se
/// reintentan.
#[derive(Debug, Error)]
pub enum JoinError {
    #[error("cannot join {left} with {right}")]
    TypeMismatch { left: ArtifactKind, right: ArtifactKind },
    #[error("artifacts of kind {0} are not joinable")]
    NotJoinable(ArtifactKind),
    #[error("join io: {0}")]
    Io(#[from] std::io::Error),
}

/// Errores al construir un artifact desde valores del pipeline.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ArtifactError {
    #[error("{0} cannot be built from a list of paths")]
    ListNotAllowed(ArtifactKind),
    #[error("{0} is resolved by name, not constructed from a path")]
    ResolvedOnly(ArtifactKind),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("actor definition '{name}' not found (searched: {})", display_paths(.searched))]
    NotFound { name: String, searched: Vec<PathBuf> },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cache root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "<none>".to_string();
    }
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}
