//! Hash helpers sobre blake3 (hex de 64 caracteres).

use std::fs::File;
use std::io;
use std::path::Path;

use blake3::Hasher;
use serde_json::Value;

use super::to_canonical_json;

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    let mut h = Hasher::new();
    h.update(input.as_bytes());
    h.finalize().to_hex().to_string()
}

/// Hash del JSON canonicalizado; independiente del orden de claves.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}

/// Hash del contenido de un fichero, leído en streaming.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut h = Hasher::new();
    io::copy(&mut file, &mut h)?;
    Ok(h.finalize().to_hex().to_string())
}
