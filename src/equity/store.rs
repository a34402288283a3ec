use super::layout::CacheLayout;
use super::record::Equity;
use super::record::Record;
use crate::Error;
use crate::RECORD_BYTES;
use crate::Result;
use crate::cards::hand::Hand;
use crate::cards::isomorphism::Isomorphism;
use crate::cards::observation::Observation;
use crate::cards::street::Street;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Precomputed equity for one (street, opponents) table.
///
/// A two-level index, canonical pockets then canonical board, over the
/// records of every `.dat` file in a directory. Queries canonicalize first,
/// so one stored entry answers for all 24 suit relabelings of it.
///
/// Read-only once loaded. Every query takes `&self`, so a `Store` can be
/// shared across simulation threads behind an `Arc` with no locking.
#[derive(Debug, Default, Clone)]
pub struct Store {
    table: HashMap<Hand, HashMap<Hand, Equity>>,
}

impl Store {
    /// Load the table for `street` and `opponents` under `layout`.
    pub fn open(layout: &CacheLayout, street: Street, opponents: usize) -> Result<Self> {
        Self::load(layout.dir(street, opponents))
    }

    /// Load every cache file in `dir`.
    ///
    /// Files are decoded in parallel. Anything without the `.dat`
    /// extension is skipped with a warning. Any malformed file fails the
    /// whole load; nothing is silently dropped.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        log::info!("{:<32}{:<16}", "loading equity cache", dir.display());
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if CacheLayout::is_cache(&path) && path.is_file() {
                paths.push(path);
            } else {
                log::warn!("{:<32}{:<16}", "skipping non-cache entry", path.display());
            }
        }
        let files = paths
            .into_par_iter()
            .map(|path| Self::decode(&path).map(|boards| (path, boards)))
            .collect::<Result<Vec<_>>>()?;
        let mut table = HashMap::with_capacity(files.len());
        for (path, (pockets, boards)) in files {
            if table.insert(pockets, boards).is_some() {
                return Err(Error::CorruptCacheFile {
                    path: path.display().to_string(),
                    reason: format!("pockets {} appear in more than one file", pockets),
                });
            }
        }
        let store = Self { table };
        log::info!("{:<32}{:<16}", "loaded equity records", store.len());
        Ok(store)
    }

    /// One file's pockets and its board map.
    fn decode(path: &Path) -> Result<(Hand, HashMap<Hand, Equity>)> {
        let pockets = CacheLayout::pockets(path)?;
        let bytes = std::fs::read(path)?;
        let corrupt = |reason: String| Error::CorruptCacheFile {
            path: path.display().to_string(),
            reason,
        };
        if bytes.len() % RECORD_BYTES != 0 {
            return Err(corrupt(format!(
                "{} bytes is not a whole number of {}-byte records",
                bytes.len(),
                RECORD_BYTES
            )));
        }
        let n = bytes.len() / RECORD_BYTES;
        let mut reader = bytes.as_slice();
        let mut boards = HashMap::with_capacity(n);
        for i in 0..n {
            let record = Record::read(&mut reader)?;
            let board = Hand::from(record.board);
            if u64::from(board) != record.board {
                return Err(corrupt(format!("record {} has bits outside the deck", i)));
            }
            if Street::try_from(board.size()).is_err() {
                return Err(corrupt(format!("record {} board {} has {} cards", i, board, board.size())));
            }
            if board.overlaps(&pockets) {
                return Err(corrupt(format!("record {} board {} overlaps pockets {}", i, board, pockets)));
            }
            if boards.insert(board, record.equity).is_some() {
                return Err(corrupt(format!("record {} repeats board {}", i, board)));
            }
        }
        log::debug!("{:<32}{:<16}", path.display(), n);
        Ok((pockets, boards))
    }

    /// Write one file per pockets into `dir`, each atomically.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        for (pockets, boards) in self.table.iter() {
            let mut records = boards
                .iter()
                .map(|(board, equity)| Record::new(*board, *equity))
                .collect::<Vec<_>>();
            records.sort_by_key(|r| r.board);
            CacheLayout::persist(&dir.join(CacheLayout::filename(*pockets)), &records)?;
        }
        log::info!("{:<32}{:<16}", "saved equity records", self.len());
        Ok(())
    }

    /// Equity of a situation under any suit labeling.
    ///
    /// Fails with [`Error::CacheMiss`] when the canonical form was never
    /// loaded. Never interpolates and never recomputes.
    pub fn probabilities(&self, pockets: Hand, board: Hand) -> Result<Equity> {
        let observation = Observation::try_from((pockets, board)).map_err(Error::InvalidObservation)?;
        let isomorphism = Isomorphism::from(observation);
        self.get(&isomorphism).copied().ok_or_else(|| Error::CacheMiss {
            pockets: format!("{} {:#x}", isomorphism.pocket(), u64::from(*isomorphism.pocket())),
            board: format!("{} {:#x}", isomorphism.public(), u64::from(*isomorphism.public())),
        })
    }

    /// Direct lookup of an already canonical situation.
    pub fn get(&self, isomorphism: &Isomorphism) -> Option<&Equity> {
        self.table
            .get(isomorphism.pocket())
            .and_then(|boards| boards.get(isomorphism.public()))
    }

    /// Add or replace one entry, keyed by its canonical form.
    pub fn insert(&mut self, observation: Observation, equity: Equity) {
        let isomorphism = Isomorphism::from(observation);
        self.table
            .entry(*isomorphism.pocket())
            .or_default()
            .insert(*isomorphism.public(), equity);
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.table.values().map(HashMap::len).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Loaded pockets with their record counts, sorted by pockets.
    pub fn pockets(&self) -> Vec<(Hand, usize)> {
        let mut pockets = self
            .table
            .iter()
            .map(|(pockets, boards)| (*pockets, boards.len()))
            .collect::<Vec<_>>();
        pockets.sort();
        pockets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::cards::permutation::Permutation;
    use std::sync::Arc;

    fn situation(s: &str) -> Observation {
        Observation::try_from(s).unwrap()
    }

    fn sample() -> Store {
        let mut store = Store::default();
        for _ in 0..200 {
            store.insert(Observation::random(), Equity::random());
        }
        store
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let saved = sample();
        saved.save(dir.path()).unwrap();
        let loaded = Store::load(dir.path()).unwrap();
        assert!(loaded.len() == saved.len());
        assert!(loaded.table == saved.table);
    }

    #[test]
    fn query_under_any_relabeling() {
        let mut store = Store::default();
        let obs = situation("Ah Kh ~ 2c 7d 9c");
        let equity = Equity::from([0.1, 0.2, 0.3, 0.4]);
        store.insert(obs, equity);
        for permutation in Permutation::exhaust() {
            let relabeled = permutation.permute(&obs);
            let found = store.probabilities(*relabeled.pocket(), *relabeled.public()).unwrap();
            assert!(found == equity);
        }
    }

    #[test]
    fn cache_miss() {
        let mut store = Store::default();
        store.insert(situation("Ah Kh ~ 2c 7d 9c"), Equity::default());
        let pockets = Hand::try_from("2s 7h").unwrap();
        let board = Hand::try_from("Jd Qd Kc").unwrap();
        let result = store.probabilities(pockets, board);
        assert!(matches!(result, Err(Error::CacheMiss { .. })));
        let empty = Store::default();
        let result = empty.probabilities(pockets, board);
        assert!(matches!(result, Err(Error::CacheMiss { .. })));
    }

    #[test]
    fn board_miss_under_known_pockets() {
        let mut store = Store::default();
        store.insert(situation("Ah Kh ~ 2c 7d 9c"), Equity::default());
        let result = store.probabilities(Hand::try_from("AhKh").unwrap(), Hand::try_from("2c7d8c").unwrap());
        assert!(matches!(result, Err(Error::CacheMiss { .. })));
    }

    #[test]
    fn invalid_query() {
        let store = sample();
        let result = store.probabilities(Hand::try_from("AhKh").unwrap(), Hand::try_from("Ah7d8c").unwrap());
        assert!(matches!(result, Err(Error::InvalidObservation(_))));
    }

    #[test]
    fn empty_file_is_empty_class() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("AsKs.dat"), b"").unwrap();
        let store = Store::load(dir.path()).unwrap();
        assert!(store.is_empty());
        assert!(store.pockets() == vec![(Hand::try_from("AsKs").unwrap(), 0)]);
    }

    #[test]
    fn truncated_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("AsKs.dat"), [0u8; 30]).unwrap();
        let result = Store::load(dir.path());
        assert!(matches!(result, Err(Error::CorruptCacheFile { .. })));
    }

    #[test]
    fn repeated_board() {
        let dir = tempfile::tempdir().unwrap();
        let record = Record::new(Hand::try_from("2c3c4c").unwrap(), Equity::default());
        CacheLayout::persist(&dir.path().join("AsKs.dat"), &[record, record]).unwrap();
        let result = Store::load(dir.path());
        assert!(matches!(result, Err(Error::CorruptCacheFile { .. })));
    }

    #[test]
    fn board_overlapping_pockets() {
        let dir = tempfile::tempdir().unwrap();
        let record = Record::new(Hand::try_from("As3c4c").unwrap(), Equity::default());
        CacheLayout::persist(&dir.path().join("AsKs.dat"), &[record]).unwrap();
        let result = Store::load(dir.path());
        assert!(matches!(result, Err(Error::CorruptCacheFile { .. })));
    }

    #[test]
    fn bad_notation() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("AsK.dat"), b"").unwrap();
        let result = Store::load(dir.path());
        assert!(matches!(result, Err(Error::InvalidPocketNotation { .. })));
    }

    #[test]
    fn ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README"), b"hello").unwrap();
        std::fs::write(dir.path().join("AsKs.dat.tmp"), [0u8; 7]).unwrap();
        let store = Store::load(dir.path()).unwrap();
        assert!(store.is_empty());
        assert!(store.pockets().is_empty());
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = Store::load(dir.path().join("nope"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn open_by_layout() {
        let root = tempfile::tempdir().unwrap();
        let layout = CacheLayout::new(root.path());
        let saved = sample();
        saved.save(layout.dir(Street::Turn, 2)).unwrap();
        let loaded = Store::open(&layout, Street::Turn, 2).unwrap();
        assert!(loaded.len() == saved.len());
    }

    #[test]
    fn concurrent_readers() {
        let store = Arc::new(sample());
        let (obs, equity) = {
            let (pockets, boards) = store.table.iter().next().unwrap();
            let (board, equity) = boards.iter().next().unwrap();
            (Observation::new(*pockets, *board), *equity)
        };
        let handles = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let relabeled = Permutation::random().permute(&obs);
                    store.probabilities(*relabeled.pocket(), *relabeled.public()).unwrap()
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert!(handle.join().unwrap() == equity);
        }
    }
}
