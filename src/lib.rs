//! CoVeriTeam
//!
//! Fachada del workspace:
//! - `core`: artifacts, veredictos, `join`, configuración y resolución de actores.
//! - `lang`: traductor CoVeriLang -> IR.
//! - `engine`: intérprete, eventos de ejecución y dispatcher.
//!
//! El binario `coveriteam` vive en `crates/cvt-cli`.

pub use cvt_core as core;
pub use cvt_engine as engine;
pub use cvt_lang as lang;

pub use cvt_core::{Artifact, ArtifactKind, Configuration, Verdict};
pub use cvt_engine::{Dispatcher, Invocation, Mode};
