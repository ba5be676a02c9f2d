use indexmap::IndexMap;

use super::Value;
use crate::dispatch::Bindings;

/// Entorno global de una ejecución: nombre -> valor, en orden de definición.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: IndexMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entorno inicial sembrado con los bindings de `--input`.
    pub fn from_bindings(bindings: &Bindings) -> Self {
        let vars = bindings.iter().map(|(k, b)| (k.clone(), Value::from(b))).collect();
        Self { vars }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }
}
