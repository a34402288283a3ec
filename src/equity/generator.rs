use super::evaluator::Budget;
use super::evaluator::Evaluator;
use super::layout::CacheLayout;
use super::progress::Progress;
use super::record::Record;
use crate::Error;
use crate::Result;
use crate::cards::hand::Hand;
use crate::cards::hands::Boards;
use crate::cards::hole::Hole;
use crate::cards::isomorphism::Isomorphism;
use crate::cards::observation::Observation;
use crate::cards::street::Street;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::path::Path;
use std::path::PathBuf;

/// Offline builder of equity cache tables.
///
/// For each of the 169 starting-hand classes, enumerates every board of
/// the street's size, canonicalizes, and keeps one situation per
/// isomorphism class. Surviving situations are evaluated on a bounded
/// worker pool, grouped by canonical pockets, and each group is written
/// as one file.
///
/// Regeneration is incremental: pockets that already have a file in the
/// target directory are skipped, so an interrupted or partly failed run
/// can simply be repeated.
pub struct Generator<E> {
    layout: CacheLayout,
    evaluator: E,
    budget: Budget,
    threads: usize,
    classes: Vec<Hole>,
}

/// A situation, or a whole pockets group, that produced no record.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub pockets: Hand,
    pub board: Option<Hand>,
    pub reason: String,
}

/// What one [`Generator::generate`] run did.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub street: Street,
    pub opponents: usize,
    /// canonical situations enumerated
    pub situations: usize,
    /// situations whose pockets already had a file
    pub skipped: usize,
    /// successful evaluator calls
    pub evaluated: usize,
    /// files written
    pub written: usize,
    pub failures: Vec<Failure>,
}

impl<E: Evaluator> Generator<E> {
    pub fn new(layout: CacheLayout, evaluator: E) -> Self {
        Self {
            layout,
            evaluator,
            budget: Budget::default(),
            threads: num_cpus::get(),
            classes: Hole::classes(),
        }
    }
    pub fn budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
    /// Restrict the run to some starting-hand classes.
    pub fn classes(mut self, classes: Vec<Hole>) -> Self {
        self.classes = classes;
        self
    }

    /// Build (or complete) the table for one street and opponent count.
    pub fn generate(&self, street: Street, opponents: usize) -> Result<Report> {
        self.generate_range(street, opponents..=opponents)?
            .pop()
            .ok_or_else(|| Error::InvalidConfiguration("no opponent count".into()))
    }

    /// Build the tables for every opponent count in `opponents` at once.
    ///
    /// Each class is enumerated and deduplicated a single time; its
    /// canonical situations are then evaluated and written once per
    /// opponent count. Reports come back in opponent order.
    pub fn generate_range(
        &self,
        street: Street,
        opponents: RangeInclusive<usize>,
    ) -> Result<Vec<Report>> {
        if opponents.is_empty() {
            return Err(Error::InvalidConfiguration(format!(
                "empty opponent range {:?}",
                opponents
            )));
        }
        let mut tables = opponents
            .map(|n| Table::open(&self.layout, street, n))
            .collect::<Result<Vec<_>>>()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| Error::InvalidConfiguration(e.to_string()))?;
        let mut progress = Progress::new(self.classes.len());
        for hole in self.classes.iter() {
            let groups = situations(Hand::from(*hole), street);
            for table in tables.iter_mut() {
                self.fill(&pool, table, &groups);
            }
            progress.tick();
        }
        Ok(tables
            .into_iter()
            .map(|table| table.report)
            .inspect(|report| log::info!("{}", report))
            .collect())
    }

    /// Evaluate and write one class's groups into one table.
    fn fill(&self, pool: &rayon::ThreadPool, table: &mut Table, groups: &BTreeMap<Hand, Vec<Hand>>) {
        let opponents = table.report.opponents;
        for (pockets, boards) in groups.iter() {
            let pockets = *pockets;
            table.report.situations += boards.len();
            if table.existing.contains(&pockets) {
                table.report.skipped += boards.len();
                continue;
            }
            let results = pool.install(|| {
                boards
                    .par_iter()
                    .map(|board| {
                        self.evaluator
                            .evaluate(pockets, *board, opponents, &self.budget)
                            .map(|equity| Record::new(*board, equity))
                            .map_err(|e| Failure {
                                pockets,
                                board: Some(*board),
                                reason: format!("{:#}", e),
                            })
                    })
                    .collect::<Vec<_>>()
            });
            let (records, failures) = results.into_iter().partition::<Vec<_>, _>(|r| r.is_ok());
            let mut records = records.into_iter().flatten().collect::<Vec<Record>>();
            let failures = failures.into_iter().filter_map(|r| r.err()).collect::<Vec<Failure>>();
            table.report.evaluated += records.len();
            if !failures.is_empty() {
                log::warn!("{:<32}{:<16}", format!("{} evaluations failed", failures.len()), pockets);
                table.report.failures.extend(failures);
                continue;
            }
            records.sort_by_key(|r| r.board);
            let path = table.dir.join(CacheLayout::filename(pockets));
            match CacheLayout::persist(&path, &records) {
                Ok(()) => table.report.written += 1,
                Err(e) => {
                    log::error!("{:<32}{:<16}", format!("write failed {}", e), pockets);
                    table.report.failures.push(Failure {
                        pockets,
                        board: None,
                        reason: e.to_string(),
                    });
                    break;
                }
            }
        }
    }
}

/// One (street, opponents) output directory and what has happened to it.
struct Table {
    dir: PathBuf,
    existing: HashSet<Hand>,
    report: Report,
}

impl Table {
    fn open(layout: &CacheLayout, street: Street, opponents: usize) -> Result<Self> {
        let dir = layout.dir(street, opponents);
        log::info!("{:<32}{:<16}", "generating equity table", dir.display());
        std::fs::create_dir_all(&dir)?;
        let existing = Self::scan(&dir)?;
        Ok(Self {
            dir,
            existing,
            report: Report {
                street,
                opponents,
                situations: 0,
                skipped: 0,
                evaluated: 0,
                written: 0,
                failures: Vec::new(),
            },
        })
    }

    /// Pockets already on disk. Clears out partial files from
    /// interrupted runs.
    fn scan(dir: &Path) -> Result<HashSet<Hand>> {
        let mut existing = HashSet::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if CacheLayout::is_partial(&path) {
                log::warn!("{:<32}{:<16}", "removing partial file", path.display());
                std::fs::remove_file(&path)?;
            } else if CacheLayout::is_cache(&path) {
                existing.insert(CacheLayout::pockets(&path)?);
            }
        }
        if !existing.is_empty() {
            log::info!("{:<32}{:<16}", "skipping existing pockets", existing.len());
        }
        Ok(existing)
    }
}

/// Canonical situations for one starting hand, grouped by canonical
/// pockets. Each isomorphism class appears once.
pub fn situations(pockets: Hand, street: Street) -> BTreeMap<Hand, Vec<Hand>> {
    let mut seen = HashSet::new();
    let mut groups = BTreeMap::<Hand, Vec<Hand>>::new();
    for board in Boards::new(street.n_observed(), pockets) {
        let isomorphism = Isomorphism::from(Observation::new(pockets, board));
        if seen.insert(isomorphism) {
            groups
                .entry(*isomorphism.pocket())
                .or_default()
                .push(*isomorphism.public());
        }
    }
    groups
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} x{}: {} situations, {} skipped, {} evaluated, {} files, {} failures",
            self.street,
            self.opponents,
            self.situations,
            self.skipped,
            self.evaluated,
            self.written,
            self.failures.len()
        )
    }
}
