use super::record::Record;
use crate::CACHE_DIR_DEFAULT;
use crate::CACHE_DIR_VAR;
use crate::CACHE_EXTENSION;
use crate::Error;
use crate::PARTIAL_EXTENSION;
use crate::Result;
use crate::cards::hand::Hand;
use crate::cards::street::Street;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Where cache files live: `root/<Street>/<opponents>/<pockets>.dat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLayout {
    root: PathBuf,
}

impl CacheLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
    /// Root from `CACHE_DIR`, else `./cache`.
    pub fn from_env() -> Self {
        Self::new(std::env::var(CACHE_DIR_VAR).unwrap_or_else(|_| CACHE_DIR_DEFAULT.to_string()))
    }
    pub fn root(&self) -> &Path {
        &self.root
    }
    /// Directory holding one (street, opponents) table.
    pub fn dir(&self, street: Street, opponents: usize) -> PathBuf {
        self.root.join(street.label()).join(opponents.to_string())
    }
    pub fn file(&self, street: Street, opponents: usize, pockets: Hand) -> PathBuf {
        self.dir(street, opponents).join(Self::filename(pockets))
    }
    /// `AsKs.dat`
    pub fn filename(pockets: Hand) -> String {
        format!("{}.{}", pockets, CACHE_EXTENSION)
    }

    /// Pockets named by a cache file's stem.
    pub fn pockets(path: &Path) -> Result<Hand> {
        let notation = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        let invalid = |reason: String| Error::InvalidPocketNotation {
            notation: notation.to_string(),
            reason,
        };
        let pockets = Hand::try_from(notation).map_err(invalid)?;
        match pockets.size() {
            2 => Ok(pockets),
            n => Err(invalid(format!("expected 2 cards, found {}", n))),
        }
    }
    pub fn is_cache(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == CACHE_EXTENSION)
    }
    pub fn is_partial(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == PARTIAL_EXTENSION)
    }

    /// Write a whole cache file so that readers see all of it or none.
    ///
    /// Records go to `<path>.tmp` first, which is flushed and synced
    /// before being renamed over `path`.
    pub fn persist(path: &Path, records: &[Record]) -> Result<()> {
        let mut partial = path.as_os_str().to_owned();
        partial.push(".");
        partial.push(PARTIAL_EXTENSION);
        let partial = PathBuf::from(partial);
        let file = std::fs::File::create(&partial)?;
        let mut writer = BufWriter::new(file);
        for record in records {
            record.write(&mut writer)?;
        }
        writer.flush()?;
        writer.into_inner().map_err(|e| e.into_error())?.sync_all()?;
        std::fs::rename(&partial, path)?;
        log::debug!("{:<32}{:<16}", path.display(), records.len());
        Ok(())
    }
}

impl Default for CacheLayout {
    fn default() -> Self {
        Self::from_env()
    }
}
