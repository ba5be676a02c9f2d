use std::fmt;

use cvt_core::model::Artifact;
use cvt_core::VerdictClassifier;
use serde_json::{json, Value as Json};

use crate::dispatch::Binding;

/// Valor del intérprete.
#[derive(Debug, Clone)]
pub enum Value {
    Str(String),
    List(Vec<Value>),
    Bool(bool),
    Artifact(Artifact),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Bool(_) => "bool",
            Value::Artifact(_) => "artifact",
        }
    }

    pub fn render(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Artifact(a) => a.render(),
            Value::List(items) => {
                let inner: Vec<String> = items.iter().map(Value::render).collect();
                format!("[{}]", inner.join(", "))
            }
        }
    }

    /// Descripción estable usada en los digests de sentencias.
    pub fn describe(&self) -> Json {
        match self {
            Value::Str(s) => json!({ "str": s }),
            Value::Bool(b) => json!({ "bool": b }),
            Value::List(items) => json!({ "list": items.iter().map(Value::describe).collect::<Vec<_>>() }),
            Value::Artifact(a) => a.describe(),
        }
    }

    /// Igualdad del operador `==`. Tipos distintos nunca son iguales.
    pub fn equals(&self, other: &Value, classifier: &dyn VerdictClassifier) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals(y, classifier))
            }
            (Value::Artifact(a), Value::Artifact(b)) => a.equals_with(b, classifier),
            _ => false,
        }
    }

    pub fn as_artifact(&self) -> Option<&Artifact> {
        match self {
            Value::Artifact(a) => Some(a),
            _ => None,
        }
    }
}

impl From<Artifact> for Value {
    fn from(a: Artifact) -> Self {
        Value::Artifact(a)
    }
}

impl From<&Binding> for Value {
    fn from(b: &Binding) -> Self {
        match b {
            Binding::Scalar(s) => Value::Str(s.clone()),
            Binding::List(vs) => Value::List(vs.iter().cloned().map(Value::Str).collect()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
