//! cvt-core: álgebra de artifacts de CoVeriTeam.
//!
//! Contiene los tipos que fluyen entre actores de un pipeline (programas,
//! especificaciones, justificaciones, veredictos, test goals/suites), el
//! protocolo `join` para fusionar resultados de invocaciones independientes,
//! la configuración de caches y la resolución de definiciones de actores.
pub mod config;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod ids;
pub mod model;
pub mod paths;
pub mod resolver;

pub use config::Configuration;
pub use errors::{ArtifactError, ConfigError, JoinError, ResolveError};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use model::{Artifact, ArtifactKind, ArtifactPath, AtomicActorDefinition, Language, PathInput, Program, ProgramPaths,
                ResultClassPolicy, TestGoal, TestSuite, Verdict, VerdictClass, VerdictClassifier};
pub use resolver::ActorResolver;
