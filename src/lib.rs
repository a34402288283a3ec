//! Side-pot settlement and suit-isomorphic equity caching for
//! large-scale automated Hold'em play.
//!
//! - [`gameplay`]: the pot ledger, layered side pots and showdown awards
//! - [`cards`]: bit-mask card primitives and the suit canonicalizer
//! - [`equity`]: the on-disk equity cache and its generator
pub mod cards;
pub mod equity;
pub mod error;
pub mod gameplay;

pub use error::Error;
pub use error::Result;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Chip quantities: contributions, pot sizes, awards.
pub type Chips = u32;
/// Equity statistics: potentials, hand strength, win probability.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// EQUITY CACHE PARAMETERS
// ============================================================================
/// Default wall-clock budget handed to the equity evaluator per situation.
pub const EVALUATOR_TIME_BUDGET: std::time::Duration = std::time::Duration::from_millis(1);
/// Default minimum number of trials handed to the equity evaluator.
pub const EVALUATOR_MIN_TRIALS: usize = 1000;
/// Width of one on-disk record: u64 board + 4 x f32.
pub const RECORD_BYTES: usize = 8 + 4 * 4;
/// Extension of a completed cache file.
pub const CACHE_EXTENSION: &str = "dat";
/// Extension appended while a cache file is being written.
pub const PARTIAL_EXTENSION: &str = "tmp";
/// Environment variable overriding the cache root directory.
pub const CACHE_DIR_VAR: &str = "CACHE_DIR";
/// Cache root used when `CACHE_DIR` is unset.
pub const CACHE_DIR_DEFAULT: &str = "cache";
/// Interval between progress log messages during generation.
pub const PROGRESS_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
