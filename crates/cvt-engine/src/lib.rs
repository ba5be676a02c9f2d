//! cvt-engine: ejecución de pipelines.
//!
//! - `interpreter`: evalúa la IR de `cvt-lang` sobre un entorno de bindings.
//! - `event`: log append-only de la ejecución con fingerprints blake3.
//! - `dispatch`: el driver del CLI (clean, tool-info, get-tool, remoto,
//!   gen-code, ejecución local).
pub mod constants;
pub mod dispatch;
pub mod errors;
pub mod event;
pub mod interpreter;

pub use dispatch::{collapse_inputs, Binding, Bindings, Dispatcher, Invocation, Mode, Preamble, RemoteExecutor,
                   ToolProvider, UnconfiguredRemote, YamlToolProvider};
pub use errors::{DispatchError, RemoteError, RuntimeError, ToolError};
pub use event::{EventStore, ExecutionEvent, ExecutionEventKind, InMemoryEventStore};
pub use interpreter::{Environment, Interpreter, Value};
