use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cvt_core::Configuration;
use cvt_engine::{DispatchError, Dispatcher, Invocation, Mode};
use log::debug;
use tracing_subscriber::EnvFilter;

const ENV_HELP: &str = "Environment:
  COVERITEAM_CACHE_DIR          cache root (default ./cache; --cache-dir wins)
  COVERITEAM_ACTOR_CONFIG_PATH  directory searched first for actor YAML files
  COVERITEAM_BUNDLED_ACTORS     bundled actor directory (default: actors/ of the
                                build tree, else actors/ next to the executable)
  RUST_LOG                      log filter (ignored with --debug)";

/// Ejecuta pipelines CoVeriLang de herramientas de verificación.
#[derive(Parser, Debug)]
#[command(name = "coveriteam")]
#[command(about = "Compose verification and testing tools into pipelines")]
#[command(version)]
#[command(after_help = ENV_HELP)]
struct Cli {
    /// Pipeline source; an actor name or tool YAML with --tool-info/--get-tool
    #[arg(value_name = "INPUT_FILE", required_unless_present = "clean")]
    input_file: Option<PathBuf>,

    /// Input binding; repeat a key to bind a list
    #[arg(long = "input", value_name = "KEY=VALUE")]
    inputs: Vec<String>,

    /// Print the translated pipeline instead of running it
    #[arg(long)]
    gen_code: bool,

    /// Delete the tool, archive and tool-info caches, then exit
    #[arg(long)]
    clean: bool,

    /// Debug logging on stderr
    #[arg(long)]
    debug: bool,

    /// Cache root (overrides COVERITEAM_CACHE_DIR)
    #[arg(long, value_name = "PATH")]
    cache_dir: Option<PathBuf>,

    /// Run the pipeline on the remote execution backend
    #[arg(long)]
    remote: bool,

    /// Download and install the tool of an actor
    #[arg(long)]
    get_tool: bool,

    /// Print the version of the tool of an actor
    #[arg(long)]
    tool_info: bool,
}

impl From<Cli> for Invocation {
    fn from(cli: Cli) -> Self {
        Invocation { input_file: cli.input_file,
                     inputs: cli.inputs,
                     gen_code: cli.gen_code,
                     clean: cli.clean,
                     debug: cli.debug,
                     cache_dir: cli.cache_dir,
                     remote: cli.remote,
                     get_tool: cli.get_tool,
                     tool_info: cli.tool_info }
    }
}

fn init_logging(debug: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) if !debug => f,
        _ => EnvFilter::new(if debug { "debug" } else { "warn" }),
    };
    // `init` también instala el puente log -> tracing.
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();
}

fn exit_code(err: &DispatchError) -> ExitCode {
    if err.is_usage() {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn main() -> ExitCode {
    cvt_core::config::init_dotenv();
    let invocation = Invocation::from(Cli::parse());

    // conflictos antes de cualquier efecto
    let mode = match invocation.mode() {
        Ok(m) => m,
        Err(e) => {
            eprintln!("coveriteam: {e}");
            return exit_code(&e);
        }
    };
    if mode != Mode::Clean {
        init_logging(invocation.debug);
    }

    let config = Configuration::from_env(invocation.cache_dir.as_deref());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match Dispatcher::new(&config).run(&invocation, &mut out) {
        Ok(mode) => {
            if let Err(e) = out.flush() {
                eprintln!("coveriteam: {e}");
                return ExitCode::from(1);
            }
            debug!("main:done mode={mode:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = out.flush();
            eprintln!("coveriteam: {e}");
            exit_code(&e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn help_lists_the_environment_overrides() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("COVERITEAM_BUNDLED_ACTORS"));
        assert!(help.contains("COVERITEAM_ACTOR_CONFIG_PATH"));
    }

    #[test]
    fn repeated_inputs_are_collected() {
        let cli = Cli::try_parse_from(["coveriteam", "p.cvt", "--input", "a=1", "--input", "a=2"]).unwrap();
        let inv = Invocation::from(cli);
        assert_eq!(inv.inputs, vec!["a=1", "a=2"]);
        assert_eq!(inv.mode().unwrap(), Mode::Execute);
    }

    #[test]
    fn clean_needs_no_input_file() {
        let cli = Cli::try_parse_from(["coveriteam", "--clean"]).unwrap();
        assert_eq!(Invocation::from(cli).mode().unwrap(), Mode::Clean);
        assert!(Cli::try_parse_from(["coveriteam"]).is_err());
    }

    #[test]
    fn flag_conflicts_are_detected_after_parsing() {
        let cli = Cli::try_parse_from(["coveriteam", "a.yml", "--tool-info", "--get-tool"]).unwrap();
        let err = Invocation::from(cli).mode().unwrap_err();
        assert!(err.is_usage());
        assert_eq!(err.to_string(), "conflicting flags: --tool-info, --get-tool");
    }
}
