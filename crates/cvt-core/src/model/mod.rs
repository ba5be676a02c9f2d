//! Modelo de artifacts (kinds, rutas, programas, veredictos, goals, suites).

pub mod actor;
pub mod artifact;
pub mod kind;
pub mod path;
pub mod program;
pub mod test_goal;
pub mod test_suite;
pub mod verdict;

pub use actor::AtomicActorDefinition;
pub use artifact::{Artifact, PathInput};
pub use kind::ArtifactKind;
pub use path::ArtifactPath;
pub use program::{Language, Program, ProgramPaths};
pub use test_goal::TestGoal;
pub use test_suite::TestSuite;
pub use verdict::{ResultClassPolicy, Verdict, VerdictClass, VerdictClassifier};
