//! Programas bajo verificación.
//!
//! Un programa tiene una ruta (`Single`) o una lista ordenada de rutas
//! (`Multi`, p. ej. proyectos C de varios ficheros). La variante se fija al
//! construir y determina cómo se renderiza.

use serde::{Deserialize, Serialize};

use super::{ArtifactKind, ArtifactPath};

/// Lenguaje del programa; sólo afecta a la identidad del kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Generic,
    C,
    Java,
}

impl Language {
    pub fn kind(self) -> ArtifactKind {
        match self {
            Language::Generic => ArtifactKind::Program,
            Language::C => ArtifactKind::CProgram,
            Language::Java => ArtifactKind::JavaProgram,
        }
    }

    pub fn from_kind(kind: ArtifactKind) -> Option<Self> {
        match kind {
            ArtifactKind::Program => Some(Language::Generic),
            ArtifactKind::CProgram => Some(Language::C),
            ArtifactKind::JavaProgram => Some(Language::Java),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramPaths {
    Single(ArtifactPath),
    Multi(Vec<ArtifactPath>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    language: Language,
    paths: ProgramPaths,
}

impl Program {
    pub fn single(language: Language, raw: &str) -> Self {
        Self { language,
               paths: ProgramPaths::Single(ArtifactPath::new(raw)) }
    }

    /// Cada elemento se resuelve por separado; los vacíos quedan ausentes.
    pub fn multi<S: AsRef<str>>(language: Language, raws: &[S]) -> Self {
        Self { language,
               paths: ProgramPaths::Multi(raws.iter().map(|r| ArtifactPath::new(r.as_ref())).collect()) }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn kind(&self) -> ArtifactKind {
        self.language.kind()
    }

    pub fn paths(&self) -> &ProgramPaths {
        &self.paths
    }

    pub fn is_multi(&self) -> bool {
        matches!(self.paths, ProgramPaths::Multi(_))
    }

    pub fn is_absent(&self) -> bool {
        match &self.paths {
            ProgramPaths::Single(p) => p.is_absent(),
            ProgramPaths::Multi(_) => false,
        }
    }

    /// Rutas relativas al directorio de trabajo, una por fichero.
    pub fn rendered_paths(&self) -> Vec<String> {
        match &self.paths {
            ProgramPaths::Single(p) => vec![p.render()],
            ProgramPaths::Multi(ps) => ps.iter().map(ArtifactPath::render).collect(),
        }
    }

    pub fn render(&self) -> String {
        match &self.paths {
            ProgramPaths::Single(p) => p.render(),
            ProgramPaths::Multi(_) => serde_json::Value::from(self.rendered_paths()).to_string(),
        }
    }
}
