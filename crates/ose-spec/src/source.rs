//! Input forms a spec can be built from.

use std::path::{Path, PathBuf};

use crate::value::SpecMapping;

/// Where a [`crate::ModelSpec`] comes from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SpecSource {
    /// Field values supplied in memory.
    Mapping(SpecMapping),
    /// A YAML document on disk.
    Path(PathBuf),
    /// Draw field values at random, subject to constraints.
    #[default]
    Random,
}

impl SpecSource {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "mapping",
            Self::Path(_) => "path",
            Self::Random => "random",
        }
    }
}

impl From<SpecMapping> for SpecSource {
    fn from(mapping: SpecMapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<PathBuf> for SpecSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for SpecSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

/// `None` means "generate randomly".
impl<T: Into<SpecSource>> From<Option<T>> for SpecSource {
    fn from(source: Option<T>) -> Self {
        source.map_or(Self::Random, Into::into)
    }
}
