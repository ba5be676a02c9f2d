//! Errores del motor y del dispatcher.

use std::io;

use cvt_core::{ArtifactError, ConfigError, JoinError, ResolveError};
use cvt_lang::TranslateError;
use thiserror::Error;

/// Errores de evaluación de un script. Se propagan sin recuperación
/// (fail-fast): la primera sentencia que falla termina la ejecución.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unbound variable '{0}'")]
    UnboundVariable(String),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("{function}() takes {expected} argument(s), {found} given")]
    Arity { function: String, expected: usize, found: usize },
    #[error("{function}() expects {expected}, got {found}")]
    Type { function: String, expected: &'static str, found: &'static str },
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error(transparent)]
    Join(#[from] JoinError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid actor definition {path}: {source}")]
    Yaml { path: String, source: serde_yaml::Error },
    #[error("actor '{0}' declares no version")]
    MissingVersion(String),
    #[error("actor definition '{0}' has no path")]
    MissingPath(String),
    #[error("tool info encoding: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("tool io: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote execution is not configured")]
    Unavailable,
    #[error("remote execution failed: {0}")]
    Failed(String),
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("conflicting flags: {}", .0.join(", "))]
    ConflictingFlags(Vec<&'static str>),
    #[error("malformed --input '{0}': expected KEY=VALUE")]
    MalformedInput(String),
    #[error("an input file is required")]
    MissingInputFile,
    #[error(transparent)]
    Translate(#[from] TranslateError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Tool(#[from] ToolError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

impl DispatchError {
    /// Errores de uso (combinación de flags, argumentos mal formados).
    pub fn is_usage(&self) -> bool {
        matches!(self,
                 DispatchError::ConflictingFlags(_) | DispatchError::MalformedInput(_) | DispatchError::MissingInputFile)
    }
}
