//! Constantes compartidas por el core.
//!
//! Nombres de directorios de cache y variables de entorno. Cambiar los
//! nombres de directorio invalida caches existentes en disco.

/// Extensión de los ficheros de definición de actores.
pub const ACTOR_FILE_EXTENSION: &str = "yml";

/// Raíz de cache por defecto (relativa al directorio de trabajo).
pub const DEFAULT_CACHE_ROOT: &str = "cache";

/// Subdirectorio donde se instalan las herramientas.
pub const INSTALL_DIR_NAME: &str = "tools";
/// Subdirectorio de archivos descargados.
pub const ARCHIVE_DIR_NAME: &str = "archives";
/// Subdirectorio con la información de herramientas ya registradas.
pub const TOOL_INFO_DIR_NAME: &str = "toolinfocache";

pub const CACHE_DIR_ENV: &str = "COVERITEAM_CACHE_DIR";
pub const ACTOR_CONFIG_ENV: &str = "COVERITEAM_ACTOR_CONFIG_PATH";
pub const BUNDLED_ACTORS_ENV: &str = "COVERITEAM_BUNDLED_ACTORS";

/// Nombre del directorio de actores empaquetados.
pub const BUNDLED_ACTORS_DIR_NAME: &str = "actors";

/// Directorio `actors/` del árbol de compilación.
pub const BUNDLED_ACTORS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../actors");
