//! Artifact del pipeline.
//!
//! Un `Artifact` es la unidad de datos intercambiada entre actores. Es una
//! unión etiquetada: cada variante fija su representación (ruta, lista de
//! rutas, token) y `kind()` expone la etiqueta dinámica usada por `join` y
//! por los chequeos de tipo del intérprete.
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{ArtifactKind, ArtifactPath, AtomicActorDefinition, Language, Program, ProgramPaths, ResultClassPolicy, TestGoal,
            TestSuite, Verdict, VerdictClassifier};
use crate::errors::{ArtifactError, JoinError};
use crate::ids::IdGenerator;

/// Argumento de construcción: una ruta o una secuencia de rutas.
#[derive(Debug, Clone, Copy)]
pub enum PathInput<'a> {
    Single(&'a str),
    Many(&'a [String]),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Artifact {
    /// Kinds respaldados por una ruta y sin comportamiento propio
    /// (especificaciones, witnesses, condiciones, descripciones).
    File { kind: ArtifactKind, path: ArtifactPath },
    Program(Program),
    TestGoal(TestGoal),
    TestSuite(TestSuite),
    Verdict(Verdict),
    Actor(AtomicActorDefinition),
}

impl Artifact {
    /// Construye un artifact del `kind` dado.
    ///
    /// Los kinds de programa aceptan una lista (variante multi-ruta); el resto
    /// sólo una ruta. `Verdict` toma el valor tal cual, sin resolver rutas.
    /// `AtomicActorDefinition` no se construye aquí (ver `ActorResolver`).
    pub fn construct(kind: ArtifactKind, input: PathInput<'_>) -> Result<Self, ArtifactError> {
        if let Some(language) = Language::from_kind(kind) {
            return Ok(match input {
                          PathInput::Single(raw) => Artifact::Program(Program::single(language, raw)),
                          PathInput::Many(raws) => Artifact::Program(Program::multi(language, raws)),
                      });
        }
        let raw = match input {
            PathInput::Single(raw) => raw,
            PathInput::Many(_) => return Err(ArtifactError::ListNotAllowed(kind)),
        };
        match kind {
            ArtifactKind::Verdict => Ok(Artifact::Verdict(Verdict::new(raw))),
            ArtifactKind::TestGoal => Ok(Artifact::TestGoal(TestGoal::new(raw))),
            ArtifactKind::TestSuite => Ok(Artifact::TestSuite(TestSuite::new(raw))),
            ArtifactKind::AtomicActorDefinition => Err(ArtifactError::ResolvedOnly(kind)),
            _ => Ok(Artifact::File { kind,
                                     path: ArtifactPath::new(raw) }),
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        match self {
            Artifact::File { kind, .. } => *kind,
            Artifact::Program(p) => p.kind(),
            Artifact::TestGoal(_) => ArtifactKind::TestGoal,
            Artifact::TestSuite(_) => ArtifactKind::TestSuite,
            Artifact::Verdict(_) => ArtifactKind::Verdict,
            Artifact::Actor(_) => ArtifactKind::AtomicActorDefinition,
        }
    }

    /// Representación humana (ver módulo `paths`).
    pub fn render(&self) -> String {
        match self {
            Artifact::File { path, .. } => path.render(),
            Artifact::Program(p) => p.render(),
            Artifact::TestGoal(g) => g.render(),
            Artifact::TestSuite(s) => s.render(),
            Artifact::Verdict(v) => v.token().to_string(),
            Artifact::Actor(a) => a.render(),
        }
    }

    /// Ruta principal; `None` para veredictos y artifacts ausentes.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Artifact::File { path, .. } => path.as_path(),
            Artifact::Program(p) => match p.paths() {
                ProgramPaths::Single(path) => path.as_path(),
                ProgramPaths::Multi(paths) => paths.iter().find_map(ArtifactPath::as_path),
            },
            Artifact::TestGoal(g) => g.path().as_path(),
            Artifact::TestSuite(s) => s.path().as_path(),
            Artifact::Verdict(_) => None,
            Artifact::Actor(a) => a.path().as_path(),
        }
    }

    /// Descripción estable (rutas absolutas) para digests de eventos.
    pub fn describe(&self) -> Value {
        let location = match self {
            Artifact::Verdict(v) => json!({ "token": v.token(), "class": v.class() }),
            Artifact::Actor(a) => json!({ "name": a.name(), "path": abs(a.path()) }),
            Artifact::Program(p) => match p.paths() {
                ProgramPaths::Single(path) => json!({ "path": abs(path) }),
                ProgramPaths::Multi(paths) => json!({ "paths": paths.iter().map(abs).collect::<Vec<_>>() }),
            },
            Artifact::File { path, .. } => json!({ "path": abs(path) }),
            Artifact::TestGoal(g) => json!({ "path": abs(g.path()) }),
            Artifact::TestSuite(s) => json!({ "path": abs(s.path()) }),
        };
        json!({ "kind": self.kind().name(), "location": location })
    }

    /// Fusiona dos artifacts del mismo kind joinable.
    ///
    /// Kinds distintos => `TypeMismatch`; mismo kind no joinable =>
    /// `NotJoinable`. Ver `TestGoal::join` y `TestSuite::join`.
    pub fn join(self, other: Artifact, ids: &dyn IdGenerator) -> Result<Artifact, JoinError> {
        match (self, other) {
            (Artifact::TestGoal(a), Artifact::TestGoal(b)) => Ok(Artifact::TestGoal(a.join(b, ids)?)),
            (Artifact::TestSuite(mut a), Artifact::TestSuite(b)) => {
                a.join(&b, ids)?;
                Ok(Artifact::TestSuite(a))
            }
            (a, b) if a.kind() != b.kind() => Err(JoinError::TypeMismatch { left: a.kind(),
                                                                             right: b.kind() }),
            (a, _) => Err(JoinError::NotJoinable(a.kind())),
        }
    }

    /// Igualdad con una política de veredictos explícita.
    ///
    /// Veredictos por bucket, test goals por contenido, el resto por kind y
    /// ruta.
    pub fn equals_with(&self, other: &Artifact, classifier: &dyn VerdictClassifier) -> bool {
        match (self, other) {
            (Artifact::Verdict(a), Artifact::Verdict(b)) => a.equals_with(b, classifier),
            (Artifact::TestGoal(a), Artifact::TestGoal(b)) => a == b,
            (Artifact::TestSuite(a), Artifact::TestSuite(b)) => a == b,
            (Artifact::Program(a), Artifact::Program(b)) => a == b,
            (Artifact::Actor(a), Artifact::Actor(b)) => a == b,
            (Artifact::File { kind: k1, path: p1 }, Artifact::File { kind: k2, path: p2 }) => k1 == k2 && p1 == p2,
            _ => false,
        }
    }
}

impl PartialEq for Artifact {
    fn eq(&self, other: &Self) -> bool {
        self.equals_with(other, &ResultClassPolicy)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn abs(path: &ArtifactPath) -> Value {
    match path.as_path() {
        Some(p) => Value::String(p.display().to_string()),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    #[test]
    fn construct_dispatches_on_kind() {
        let p = Artifact::construct(ArtifactKind::JavaProgram, PathInput::Single("Main.java")).unwrap();
        assert_eq!(p.kind(), ArtifactKind::JavaProgram);
        let v = Artifact::construct(ArtifactKind::Verdict, PathInput::Single("TRUE")).unwrap();
        assert_eq!(v.render(), "TRUE");
        assert!(v.path().is_none());
        let w = Artifact::construct(ArtifactKind::ReachabilityWitness, PathInput::Single("w.graphml")).unwrap();
        assert_eq!(w.render(), "w.graphml");
    }

    #[test]
    fn lists_only_build_programs() {
        let many = vec!["a.c".to_string(), "b.c".to_string()];
        let p = Artifact::construct(ArtifactKind::CProgram, PathInput::Many(&many)).unwrap();
        assert_eq!(p.render(), r#"["a.c","b.c"]"#);
        let err = Artifact::construct(ArtifactKind::TestGoal, PathInput::Many(&many)).unwrap_err();
        assert_eq!(err, ArtifactError::ListNotAllowed(ArtifactKind::TestGoal));
    }

    #[test]
    fn actors_are_not_constructed_from_paths() {
        let err = Artifact::construct(ArtifactKind::AtomicActorDefinition, PathInput::Single("cpa")).unwrap_err();
        assert_eq!(err, ArtifactError::ResolvedOnly(ArtifactKind::AtomicActorDefinition));
    }

    #[test]
    fn joining_non_joinable_kinds_fails() {
        let ids = SequentialIds::new("t");
        let a = Artifact::construct(ArtifactKind::Verdict, PathInput::Single("TRUE")).unwrap();
        let b = Artifact::construct(ArtifactKind::Verdict, PathInput::Single("TRUE")).unwrap();
        assert!(matches!(a.join(b, &ids), Err(JoinError::NotJoinable(ArtifactKind::Verdict))));
    }

    #[test]
    fn describe_is_cwd_independent() {
        let v = Artifact::construct(ArtifactKind::Specification, PathInput::Single("/specs/unreach.prp")).unwrap();
        assert_eq!(v.describe(), json!({"kind": "Specification", "location": {"path": "/specs/unreach.prp"}}));
    }
}
