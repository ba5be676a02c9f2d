//! Ejecución remota: sólo la frontera.

use crate::errors::RemoteError;

/// Backend de ejecución remota. Recibe los pares `KEY=VALUE` sin procesar y
/// el código fuente del pipeline; devuelve el resultado textual.
pub trait RemoteExecutor {
    fn execute(&self, source: &str, inputs: &[String]) -> Result<String, RemoteError>;
}

/// Executor por defecto cuando no hay backend configurado.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredRemote;

impl RemoteExecutor for UnconfiguredRemote {
    fn execute(&self, _source: &str, _inputs: &[String]) -> Result<String, RemoteError> {
        Err(RemoteError::Unavailable)
    }
}
