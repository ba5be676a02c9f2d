//! `TestGoal`: condición de test respaldada por un único fichero.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::ArtifactPath;
use crate::errors::JoinError;
use crate::hashing::hash_file;
use crate::ids::IdGenerator;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestGoal {
    path: ArtifactPath,
}

impl TestGoal {
    pub fn new(raw: &str) -> Self {
        Self { path: ArtifactPath::new(raw) }
    }

    pub fn absent() -> Self {
        Self::default()
    }

    pub fn from_path(path: ArtifactPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &ArtifactPath {
        &self.path
    }

    pub fn render(&self) -> String {
        self.path.render()
    }

    /// Compara contenidos byte a byte (longitud y digest blake3).
    /// Dos goals ausentes son iguales; uno ausente nunca iguala a uno presente.
    pub fn same_content(&self, other: &TestGoal) -> io::Result<bool> {
        match (self.path.as_path(), other.path.as_path()) {
            (None, None) => Ok(true),
            (Some(a), Some(b)) => files_identical(a, b),
            _ => Ok(false),
        }
    }

    /// Fusiona dos goals.
    ///
    /// - ausente ⋈ g = g, g ⋈ ausente = g
    /// - contenidos idénticos: devuelve `self` sin crear ficheros
    /// - si no, escribe `self ‖ other` en un fichero nuevo junto a `self`
    ///
    /// No es conmutativa: el contenido de `self` siempre va primero.
    pub fn join(self, other: TestGoal, ids: &dyn IdGenerator) -> Result<TestGoal, JoinError> {
        let (left, right) = match (self.path.as_path().map(Path::to_path_buf), other.path.as_path().map(Path::to_path_buf)) {
            (None, _) => return Ok(other),
            (_, None) => return Ok(self),
            (Some(l), Some(r)) => (l, r),
        };

        if files_identical(&left, &right)? {
            debug!("join:test_goal identical left={} right={}", left.display(), right.display());
            return Ok(self);
        }

        let parent = left.parent()
                         .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "test goal has no parent directory"))?;
        let mut name = ids.next_id();
        if let Some(ext) = left.extension() {
            name.push('.');
            name.push_str(&ext.to_string_lossy());
        }
        let target = parent.join(name);

        let mut out = OpenOptions::new().write(true).create_new(true).open(&target)?;
        io::copy(&mut File::open(&left)?, &mut out)?;
        io::copy(&mut File::open(&right)?, &mut out)?;
        out.flush()?;

        debug!("join:test_goal merged left={} right={} out={}",
               left.display(),
               right.display(),
               target.display());
        Ok(TestGoal::from_path(ArtifactPath::from_path(&target)))
    }
}

impl PartialEq for TestGoal {
    fn eq(&self, other: &Self) -> bool {
        self.same_content(other).unwrap_or(false)
    }
}

fn files_identical(a: &Path, b: &Path) -> io::Result<bool> {
    if fs::metadata(a)?.len() != fs::metadata(b)?.len() {
        return Ok(false);
    }
    Ok(hash_file(a)? == hash_file(b)?)
}
