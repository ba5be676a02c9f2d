//! Invocación del driver y selección de modo.

use std::path::PathBuf;

use crate::errors::DispatchError;

/// Modo de ejecución, derivado de los flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Clean,
    ToolInfo,
    GetTool,
    Remote,
    GenCode,
    Execute,
}

/// Configuración de una invocación, ya parseada por el CLI.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub input_file: Option<PathBuf>,
    pub inputs: Vec<String>,
    pub gen_code: bool,
    pub clean: bool,
    pub debug: bool,
    pub cache_dir: Option<PathBuf>,
    pub remote: bool,
    pub get_tool: bool,
    pub tool_info: bool,
}

impl Invocation {
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self { input_file: Some(input_file.into()),
               ..Self::default() }
    }

    /// Modo seleccionado. Más de un flag de modo activo es un error de uso;
    /// se comprueba antes de cualquier efecto sobre el sistema de ficheros.
    pub fn mode(&self) -> Result<Mode, DispatchError> {
        let flags = [(self.clean, "--clean", Mode::Clean),
                     (self.tool_info, "--tool-info", Mode::ToolInfo),
                     (self.get_tool, "--get-tool", Mode::GetTool),
                     (self.remote, "--remote", Mode::Remote),
                     (self.gen_code, "--gen-code", Mode::GenCode)];
        let active: Vec<_> = flags.iter().filter(|(on, _, _)| *on).collect();
        match active.as_slice() {
            [] => Ok(Mode::Execute),
            [(_, _, mode)] => Ok(*mode),
            many => Err(DispatchError::ConflictingFlags(many.iter().map(|(_, name, _)| *name).collect())),
        }
    }

    /// Fichero de entrada; obligatorio salvo en `--clean`.
    pub fn require_input(&self) -> Result<&PathBuf, DispatchError> {
        self.input_file.as_ref().ok_or(DispatchError::MissingInputFile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_execute() {
        assert_eq!(Invocation::new("p.cvt").mode().unwrap(), Mode::Execute);
    }

    #[test]
    fn a_single_flag_selects_its_mode() {
        let inv = Invocation { gen_code: true,
                               ..Invocation::new("p.cvt") };
        assert_eq!(inv.mode().unwrap(), Mode::GenCode);
    }

    #[test]
    fn debug_and_cache_dir_are_not_modes() {
        let inv = Invocation { debug: true,
                               cache_dir: Some("/tmp/c".into()),
                               tool_info: true,
                               ..Invocation::new("a.yml") };
        assert_eq!(inv.mode().unwrap(), Mode::ToolInfo);
    }

    #[test]
    fn conflicting_flags_are_named() {
        let inv = Invocation { clean: true,
                               remote: true,
                               gen_code: true,
                               ..Invocation::default() };
        match inv.mode() {
            Err(DispatchError::ConflictingFlags(names)) => assert_eq!(names, vec!["--clean", "--remote", "--gen-code"]),
            other => panic!("unexpected {other:?}"),
        }
    }
}
