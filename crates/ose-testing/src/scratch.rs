//! Fresh scratch directories.

use std::path::Path;

use ose_core::errors::HarnessError;
use rand::distributions::Uniform;
use rand::Rng;

/// A random lowercase ASCII name of `length` characters.
pub fn random_dirname(length: usize) -> String {
    let letters = Uniform::new_inclusive(b'a', b'z');
    rand::thread_rng()
        .sample_iter(letters)
        .take(length)
        .map(char::from)
        .collect()
}

/// Run `body` inside a new directory under `base`, then remove it.
///
/// The directory gets a random `length`-character name. Removal also happens
/// when `body` panics.
pub fn with_fresh_directory<T>(
    base: &Path,
    length: usize,
    body: impl FnOnce(&Path) -> T,
) -> Result<T, HarnessError> {
    let name = random_dirname(length);
    let dir = tempfile::Builder::new()
        .prefix(&name)
        .rand_bytes(0)
        .tempdir_in(base)
        .map_err(|e| HarnessError::Scratch {
            path: base.join(&name).display().to_string(),
            message: e.to_string(),
        })?;
    tracing::debug!(dir = %dir.path().display(), "entered fresh directory");

    let result = body(dir.path());

    let path = dir.path().display().to_string();
    dir.close().map_err(|e| HarnessError::Scratch {
        path,
        message: e.to_string(),
    })?;
    Ok(result)
}
