//! Constantes del motor.

/// Versión lógica de la IR y su semántica. Entra en los digests de
/// sentencias y en el fingerprint de la ejecución: cambiarla invalida
/// fingerprints previos aunque el script sea el mismo.
pub const IR_VERSION: &str = "cvl-ir/1";

/// Cabecera del código emitido por `--gen-code`.
pub const PREAMBLE_HEADER: &str = "// input bindings";
