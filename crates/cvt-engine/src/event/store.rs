use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use super::{ExecutionEvent, ExecutionEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, run_id: Uuid, kind: ExecutionEventKind) -> ExecutionEvent;
    /// Eventos de una ejecución en orden ascendente de seq.
    fn list(&self, run_id: Uuid) -> Vec<ExecutionEvent>;
}

#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    inner: HashMap<Uuid, Vec<ExecutionEvent>>,
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, run_id: Uuid, kind: ExecutionEventKind) -> ExecutionEvent {
        let events = self.inner.entry(run_id).or_default();
        let ev = ExecutionEvent { seq: events.len() as u64,
                                  run_id,
                                  kind,
                                  ts: Utc::now() };
        events.push(ev.clone());
        ev
    }

    fn list(&self, run_id: Uuid) -> Vec<ExecutionEvent> {
        self.inner.get(&run_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_are_per_run() {
        let mut store = InMemoryEventStore::default();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        store.append_kind(a, ExecutionEventKind::RunCompleted { run_fingerprint: "x".into() });
        let ev = store.append_kind(a, ExecutionEventKind::RunCompleted { run_fingerprint: "y".into() });
        let other = store.append_kind(b, ExecutionEventKind::RunCompleted { run_fingerprint: "z".into() });
        assert_eq!(ev.seq, 1);
        assert_eq!(other.seq, 0);
        assert_eq!(store.list(a).len(), 2);
        assert!(store.list(Uuid::new_v4()).is_empty());
    }
}
