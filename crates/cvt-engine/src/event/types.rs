//! Tipos de evento de una ejecución y estructura `ExecutionEvent`.
//!
//! - Cada ejecución del `Interpreter` emite eventos a un `EventStore`
//!   append-only, indexados por `run_id`.
//! - `RunInitialized` es siempre el primer evento de un `run_id`; una
//!   ejecución termina con `RunCompleted` o con el primer `StatementFailed`.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionEventKind {
    /// Fija el hash del script (IR renderizada) y el número de sentencias.
    RunInitialized { script_hash: String, statement_count: usize },
    StatementStarted { index: usize, statement: String },
    /// `digest` cubre la sentencia y la descripción de su resultado.
    StatementFinished { index: usize, digest: String },
    /// Fallo terminal. No hay más sentencias tras este evento.
    StatementFailed { index: usize, error: String, digest: String },
    /// Fingerprint agregado: hash de los digests de todas las sentencias.
    RunCompleted { run_fingerprint: String },
}

impl ExecutionEventKind {
    /// Código compacto de una letra, útil en tests.
    pub fn code(&self) -> char {
        match self {
            ExecutionEventKind::RunInitialized { .. } => 'I',
            ExecutionEventKind::StatementStarted { .. } => 'S',
            ExecutionEventKind::StatementFinished { .. } => 'F',
            ExecutionEventKind::StatementFailed { .. } => 'X',
            ExecutionEventKind::RunCompleted { .. } => 'C',
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionEvent {
    pub seq: u64, // asignado por el store (orden append)
    pub run_id: Uuid,
    pub kind: ExecutionEventKind,
    pub ts: DateTime<Utc>, // metadato, fuera de digests
}
