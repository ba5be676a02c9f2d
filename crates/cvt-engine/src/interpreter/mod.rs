//! Intérprete de la IR de pipelines.
//!
//! Ejecuta las sentencias de un `Script` en orden sobre un `Environment`
//! global. La primera sentencia que falla termina la ejecución y su error se
//! propaga tal cual. Cada ejecución deja un rastro de eventos en un
//! `EventStore` con digests blake3 por sentencia y un fingerprint final.

mod builtins;
mod env;
mod value;

use std::io::Write;

use cvt_core::hashing::{hash_str, hash_value};
use cvt_core::{Configuration, IdGenerator, ResultClassPolicy, UuidGenerator, VerdictClassifier};
use cvt_lang::{CmpOp, Expr, Script, Statement};
use log::{debug, warn};
use serde_json::json;
use uuid::Uuid;

pub use env::Environment;
pub use value::Value;

use crate::constants::IR_VERSION;
use crate::errors::RuntimeError;
use crate::event::{EventStore, ExecutionEvent, ExecutionEventKind, InMemoryEventStore};

pub struct Interpreter<'c, E: EventStore = InMemoryEventStore> {
    config: &'c Configuration,
    env: Environment,
    ids: Box<dyn IdGenerator>,
    classifier: Box<dyn VerdictClassifier>,
    events: E,
    run_id: Uuid,
}

impl<'c> Interpreter<'c, InMemoryEventStore> {
    /// Intérprete con ids uuid, política de veredictos por defecto y eventos
    /// en memoria.
    pub fn new(config: &'c Configuration, env: Environment) -> Self {
        Self { config,
               env,
               ids: Box::new(UuidGenerator),
               classifier: Box::new(ResultClassPolicy),
               events: InMemoryEventStore::default(),
               run_id: Uuid::new_v4() }
    }
}

impl<'c, E: EventStore> Interpreter<'c, E> {
    pub fn with_event_store<S: EventStore>(self, events: S) -> Interpreter<'c, S> {
        Interpreter { config: self.config,
                      env: self.env,
                      ids: self.ids,
                      classifier: self.classifier,
                      events,
                      run_id: self.run_id }
    }

    pub fn with_ids(self, ids: impl IdGenerator + 'static) -> Self {
        self.with_boxed_ids(Box::new(ids))
    }

    pub fn with_boxed_ids(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_classifier(mut self, classifier: impl VerdictClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn events(&self) -> Vec<ExecutionEvent> {
        self.events.list(self.run_id)
    }

    pub fn event_codes(&self) -> String {
        self.events().iter().map(|e| e.kind.code()).collect()
    }

    pub fn run_fingerprint(&self) -> Option<String> {
        self.events().into_iter().rev().find_map(|e| match e.kind {
                                              ExecutionEventKind::RunCompleted { run_fingerprint } => Some(run_fingerprint),
                                              _ => None,
                                          })
    }

    /// Ejecuta `script`; `print` escribe en `out`.
    /// El entorno persiste entre llamadas; cada llamada es una ejecución
    /// nueva con su propio `run_id`.
    pub fn run(&mut self, script: &Script, out: &mut dyn Write) -> Result<(), RuntimeError> {
        if !self.events.list(self.run_id).is_empty() {
            self.run_id = Uuid::new_v4();
        }
        let script_hash = hash_str(&script.to_string());
        self.events.append_kind(self.run_id,
                                ExecutionEventKind::RunInitialized { script_hash: script_hash.clone(),
                                                                     statement_count: script.len() });
        debug!("interp:start run_id={} statements={}", self.run_id, script.len());

        let mut digests = Vec::with_capacity(script.len());
        for (index, stmt) in script.statements.iter().enumerate() {
            let rendered = stmt.to_string();
            self.events.append_kind(self.run_id,
                                    ExecutionEventKind::StatementStarted { index,
                                                                           statement: rendered.clone() });
            match self.execute(stmt, out) {
                Ok(result) => {
                    let digest = hash_value(&json!({
                        "ir_version": IR_VERSION,
                        "index": index,
                        "statement": rendered,
                        "result": result.describe()
                    }));
                    self.events.append_kind(self.run_id,
                                            ExecutionEventKind::StatementFinished { index,
                                                                                    digest: digest.clone() });
                    digests.push(digest);
                }
                Err(e) => {
                    let digest = hash_value(&json!({
                        "ir_version": IR_VERSION,
                        "index": index,
                        "statement": rendered,
                        "error": e.to_string()
                    }));
                    warn!("interp:failed run_id={} index={index} err={e}", self.run_id);
                    self.events.append_kind(self.run_id,
                                            ExecutionEventKind::StatementFailed { index,
                                                                                  error: e.to_string(),
                                                                                  digest });
                    return Err(e);
                }
            }
        }

        let run_fingerprint = hash_value(&json!({
            "ir_version": IR_VERSION,
            "script_hash": script_hash,
            "statement_digests": digests
        }));
        debug!("interp:done run_id={} fingerprint={run_fingerprint}", self.run_id);
        self.events.append_kind(self.run_id, ExecutionEventKind::RunCompleted { run_fingerprint });
        Ok(())
    }

    fn execute(&mut self, stmt: &Statement, out: &mut dyn Write) -> Result<Value, RuntimeError> {
        match stmt {
            Statement::Assign { name, value } => {
                let v = self.eval(value)?;
                self.env.set(name.as_str(), v.clone());
                Ok(v)
            }
            Statement::Print(expr) => {
                let v = self.eval(expr)?;
                writeln!(out, "{}", v.render())?;
                Ok(v)
            }
            Statement::Eval(expr) => self.eval(expr),
        }
    }

    pub fn eval(&self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Str(s) => Ok(Value::Str(s.clone())),
            Expr::Var(name) => self.env
                                   .get(name)
                                   .cloned()
                                   .ok_or_else(|| RuntimeError::UnboundVariable(name.clone())),
            Expr::List(items) => Ok(Value::List(items.iter().map(|e| self.eval(e)).collect::<Result<_, _>>()?)),
            Expr::Compare { op, left, right } => {
                let l = self.eval(left)?;
                let r = self.eval(right)?;
                let eq = l.equals(&r, self.classifier.as_ref());
                Ok(Value::Bool(match op {
                                   CmpOp::Eq => eq,
                                   CmpOp::Ne => !eq,
                               }))
            }
            Expr::Call { function, args } => {
                let args = args.iter().map(|e| self.eval(e)).collect::<Result<Vec<_>, _>>()?;
                builtins::call(self.config, self.ids.as_ref(), function, args)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvt_lang::{CoVeriLangTranslator, Translator};

    fn run(src: &str) -> (Result<(), RuntimeError>, String, String) {
        let cfg = Configuration::new("/tmp/cvt-interp-cache");
        let script = CoVeriLangTranslator.translate(src).unwrap();
        let mut interp = Interpreter::new(&cfg, Environment::new());
        let mut out = Vec::new();
        let res = interp.run(&script, &mut out);
        let codes = interp.event_codes();
        (res, String::from_utf8(out).unwrap(), codes)
    }

    #[test]
    fn prints_rendered_values() {
        let (res, out, codes) = run("v = Verdict(\"TRUE\")\nprint(v)\nprint(v == Verdict(\"true\"))");
        res.unwrap();
        assert_eq!(out, "TRUE\ntrue\n");
        assert_eq!(codes, "ISFSFSFC");
    }

    #[test]
    fn unbound_variables_stop_the_run() {
        let (res, out, codes) = run("print(\"a\")\nprint(missing)\nprint(\"b\")");
        assert!(matches!(res, Err(RuntimeError::UnboundVariable(name)) if name == "missing"));
        assert_eq!(out, "a\n");
        assert_eq!(codes, "ISFSX");
    }

    #[test]
    fn comparison_of_mixed_types_is_false() {
        let (res, out, _) = run("print(\"TRUE\" == Verdict(\"TRUE\"))\nprint([\"a\"] != [\"a\"])");
        res.unwrap();
        assert_eq!(out, "false\nfalse\n");
    }
}
