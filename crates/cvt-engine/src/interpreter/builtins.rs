//! Funciones predefinidas del lenguaje.
//!
//! - Cada nombre de kind es un constructor: `Program("a.c")`,
//!   `CProgram(["a.c", "b.c"])`, `Verdict("TRUE")`, ...
//! - `AtomicActorDefinition("name")` pasa por el resolver de actores.
//! - `join(a, b)` aplica el protocolo de fusión.

use cvt_core::model::{Artifact, ArtifactKind, PathInput};
use cvt_core::{ActorResolver, Configuration, IdGenerator};
use log::debug;

use super::Value;
use crate::errors::RuntimeError;

pub(crate) const JOIN: &str = "join";

pub(crate) fn call(config: &Configuration,
                   ids: &dyn IdGenerator,
                   function: &str,
                   args: Vec<Value>)
                   -> Result<Value, RuntimeError> {
    if function == JOIN {
        let [left, right] = exact::<2>(function, args)?;
        let left = artifact_arg(function, left)?;
        let right = artifact_arg(function, right)?;
        debug!("builtin:join left={} right={}", left.kind(), right.kind());
        return Ok(left.join(right, ids)?.into());
    }

    let kind = ArtifactKind::from_name(function).ok_or_else(|| RuntimeError::UnknownFunction(function.to_string()))?;
    let [arg] = exact::<1>(function, args)?;

    if kind == ArtifactKind::AtomicActorDefinition {
        let name = string_arg(function, arg)?;
        let def = ActorResolver::new(config).resolve(&name)?;
        return Ok(Artifact::Actor(def).into());
    }

    let artifact = match arg {
        Value::Str(raw) => Artifact::construct(kind, PathInput::Single(&raw))?,
        Value::List(items) => {
            let raws = items.into_iter()
                            .map(|v| string_arg(function, v))
                            .collect::<Result<Vec<_>, _>>()?;
            Artifact::construct(kind, PathInput::Many(&raws))?
        }
        other => {
            return Err(RuntimeError::Type { function: function.to_string(),
                                            expected: "a string or a list of strings",
                                            found: other.type_name() })
        }
    };
    Ok(artifact.into())
}

fn exact<const N: usize>(function: &str, args: Vec<Value>) -> Result<[Value; N], RuntimeError> {
    let found = args.len();
    args.try_into().map_err(|_| RuntimeError::Arity { function: function.to_string(),
                                                      expected: N,
                                                      found })
}

fn string_arg(function: &str, value: Value) -> Result<String, RuntimeError> {
    match value {
        Value::Str(s) => Ok(s),
        other => Err(RuntimeError::Type { function: function.to_string(),
                                          expected: "a string",
                                          found: other.type_name() }),
    }
}

fn artifact_arg(function: &str, value: Value) -> Result<Artifact, RuntimeError> {
    match value {
        Value::Artifact(a) => Ok(a),
        other => Err(RuntimeError::Type { function: function.to_string(),
                                          expected: "an artifact",
                                          found: other.type_name() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvt_core::SequentialIds;

    fn cfg() -> Configuration {
        Configuration::new("/tmp/cvt-builtins-cache")
    }

    #[test]
    fn kind_names_construct_artifacts() {
        let ids = SequentialIds::new("b");
        let v = call(&cfg(), &ids, "Verdict", vec![Value::Str("TRUE".into())]).unwrap();
        assert_eq!(v.as_artifact().map(Artifact::kind), Some(ArtifactKind::Verdict));
        let p = call(&cfg(),
                     &ids,
                     "CProgram",
                     vec![Value::List(vec![Value::Str("a.c".into()), Value::Str("b.c".into())])]).unwrap();
        assert_eq!(p.render(), r#"["a.c","b.c"]"#);
    }

    #[test]
    fn arity_and_type_are_checked() {
        let ids = SequentialIds::new("b");
        let err = call(&cfg(), &ids, "Program", vec![]).unwrap_err();
        assert!(matches!(err, RuntimeError::Arity { expected: 1, found: 0, .. }));
        let err = call(&cfg(), &ids, "join", vec![Value::Str("a".into()), Value::Str("b".into())]).unwrap_err();
        assert!(matches!(err, RuntimeError::Type { found: "string", .. }));
        let err = call(&cfg(), &ids, "Program", vec![Value::Bool(true)]).unwrap_err();
        assert!(matches!(err, RuntimeError::Type { found: "bool", .. }));
    }

    #[test]
    fn unknown_names_are_reported() {
        let ids = SequentialIds::new("b");
        let err = call(&cfg(), &ids, "execute", vec![]).unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownFunction(name) if name == "execute"));
    }
}
