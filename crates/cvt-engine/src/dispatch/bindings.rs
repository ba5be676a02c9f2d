//! Bindings de entrada (`--input KEY=VALUE`).
//!
//! Una clave vista una vez se liga a un escalar; vista más de una vez, a la
//! lista ordenada de todos sus valores (orden de primera aparición). El mapa
//! resultante conserva el orden de inserción de las claves.

use std::fmt;

use cvt_lang::{Expr, Statement};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::PREAMBLE_HEADER;
use crate::errors::DispatchError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Binding {
    Scalar(String),
    List(Vec<String>),
}

pub type Bindings = IndexMap<String, Binding>;

impl Binding {
    fn push(&mut self, value: String) {
        match self {
            Binding::Scalar(first) => {
                let first = std::mem::take(first);
                *self = Binding::List(vec![first, value]);
            }
            Binding::List(values) => values.push(value),
        }
    }

    /// Expresión equivalente en la IR (literal o lista de literales).
    pub fn to_expr(&self) -> Expr {
        match self {
            Binding::Scalar(v) => Expr::str(v.as_str()),
            Binding::List(vs) => Expr::List(vs.iter().map(|v| Expr::str(v.as_str())).collect()),
        }
    }
}

/// Divide cada par en la primera `=` y agrupa por clave.
pub fn collapse_inputs<S: AsRef<str>>(pairs: &[S]) -> Result<Bindings, DispatchError> {
    let mut out = Bindings::new();
    for raw in pairs {
        let raw = raw.as_ref();
        let (key, value) = raw.split_once('=')
                              .filter(|(k, _)| !k.trim().is_empty())
                              .ok_or_else(|| DispatchError::MalformedInput(raw.to_string()))?;
        let key = key.trim().to_string();
        match out.get_mut(&key) {
            Some(existing) => existing.push(value.to_string()),
            None => {
                out.insert(key, Binding::Scalar(value.to_string()));
            }
        }
    }
    Ok(out)
}

/// Preámbulo de asignaciones que precede al script en `--gen-code`.
pub struct Preamble<'a>(pub &'a Bindings);

impl fmt::Display for Preamble<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        writeln!(f, "{PREAMBLE_HEADER}")?;
        for (name, binding) in self.0 {
            let stmt = Statement::Assign { name: name.clone(),
                                           value: binding.to_expr() };
            writeln!(f, "{stmt}")?;
        }
        Ok(())
    }
}
