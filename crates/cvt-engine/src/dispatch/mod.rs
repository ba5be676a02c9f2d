//! Driver de ejecución.
//!
//! Orden de una invocación:
//! 1. modo a partir de los flags (conflictos => error, sin efectos)
//! 2. `--clean`: borra la cache y termina
//! 3. tool-info / get-tool / remoto / gen-code / ejecución local
//!
//! El logging lo instala el binario; la configuración llega ya construida.

mod bindings;
mod cache;
mod invocation;
mod remote;
mod tools;

use std::fs;
use std::io::Write;

use cvt_core::{ActorResolver, Configuration, IdGenerator, UuidGenerator};
use cvt_lang::{CoVeriLangTranslator, Translator};
use log::{debug, info};

pub use bindings::{collapse_inputs, Binding, Bindings, Preamble};
pub use cache::clean;
pub use invocation::{Invocation, Mode};
pub use remote::{RemoteExecutor, UnconfiguredRemote};
pub use tools::{ActorConfig, ArchiveEntry, ArchiveLocation, ToolProvider, YamlToolProvider};

use crate::errors::DispatchError;
use crate::interpreter::{Environment, Interpreter};

pub struct Dispatcher<'c> {
    config: &'c Configuration,
    translator: Box<dyn Translator>,
    tools: Box<dyn ToolProvider>,
    remote: Box<dyn RemoteExecutor>,
    ids: Box<dyn Fn() -> Box<dyn IdGenerator>>,
}

impl<'c> Dispatcher<'c> {
    pub fn new(config: &'c Configuration) -> Self {
        Self { config,
               translator: Box::new(CoVeriLangTranslator),
               tools: Box::new(YamlToolProvider),
               remote: Box::new(UnconfiguredRemote),
               ids: Box::new(|| Box::new(UuidGenerator) as Box<dyn IdGenerator>) }
    }

    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    pub fn with_tool_provider(mut self, tools: impl ToolProvider + 'static) -> Self {
        self.tools = Box::new(tools);
        self
    }

    pub fn with_remote(mut self, remote: impl RemoteExecutor + 'static) -> Self {
        self.remote = Box::new(remote);
        self
    }

    /// Fábrica de generadores de ids para cada ejecución local.
    pub fn with_ids<F, G>(mut self, make: F) -> Self
        where F: Fn() -> G + 'static,
              G: IdGenerator + 'static
    {
        self.ids = Box::new(move || Box::new(make()) as Box<dyn IdGenerator>);
        self
    }

    pub fn config(&self) -> &Configuration {
        self.config
    }

    /// Ejecuta la invocación; toda salida de usuario va a `out`.
    pub fn run(&self, inv: &Invocation, out: &mut dyn Write) -> Result<Mode, DispatchError> {
        let mode = inv.mode()?;
        debug!("dispatch:mode mode={mode:?} cache_root={}", self.config.cache_root().display());
        match mode {
            Mode::Clean => {
                clean(self.config)?;
                info!("dispatch:clean done");
            }
            Mode::ToolInfo => {
                let actor = self.resolve_actor(inv)?;
                let version = self.tools.version(&actor)?;
                writeln!(out, "{version}")?;
            }
            Mode::GetTool => {
                let actor = self.resolve_actor(inv)?;
                let dir = self.tools.install(&actor, self.config)?;
                writeln!(out, "{}", dir.display())?;
            }
            Mode::Remote => {
                let source = fs::read_to_string(inv.require_input()?)?;
                let result = self.remote.execute(&source, &inv.inputs)?;
                writeln!(out, "{result}")?;
            }
            Mode::GenCode | Mode::Execute => self.run_local(inv, mode, out)?,
        }
        Ok(mode)
    }

    fn resolve_actor(&self, inv: &Invocation) -> Result<cvt_core::AtomicActorDefinition, DispatchError> {
        let name = inv.require_input()?.to_string_lossy().into_owned();
        Ok(ActorResolver::new(self.config).resolve(&name)?)
    }

    fn run_local(&self, inv: &Invocation, mode: Mode, out: &mut dyn Write) -> Result<(), DispatchError> {
        let bindings = collapse_inputs(&inv.inputs)?;
        let path = inv.require_input()?;
        let source = fs::read_to_string(path)?;
        let script = self.translator.translate(&source)?;
        debug!("dispatch:translated file={} statements={} bindings={}",
               path.display(),
               script.len(),
               bindings.len());

        if mode == Mode::GenCode {
            write!(out, "{}{script}", Preamble(&bindings))?;
            return Ok(());
        }

        let env = Environment::from_bindings(&bindings);
        let mut interp = Interpreter::new(self.config, env).with_boxed_ids((self.ids)());
        interp.run(&script, out)?;
        info!("dispatch:run_complete run_id={} events={} fingerprint={}",
              interp.run_id(),
              interp.event_codes(),
              interp.run_fingerprint().unwrap_or_default());
        Ok(())
    }
}
