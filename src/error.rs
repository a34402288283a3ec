//! Error taxonomy shared by the pot ledger and the equity cache.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything the ledger and the cache can fail with.
///
/// None of these are retried internally. `InconsistentLayer` and
/// `CacheMiss` indicate a bug upstream of the caller (a malformed action
/// stream, or a cache built for a different round or table size) and carry
/// enough context to diagnose it.
#[derive(Debug, Error)]
pub enum Error {
    /// Ledger constructed with an empty or duplicated roster.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An action named someone who is not seated.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    /// A chip-moving action from a player who can no longer put chips in.
    #[error("illegal action by {player}: {reason}")]
    IllegalAction { player: String, reason: String },

    /// Showdown was asked to rank an eligible player without a strength.
    #[error("no strength supplied for eligible player {0}")]
    MissingStrength(String),

    /// A pot layer holds chips that nobody is eligible to win.
    #[error("pot layer ({lower}, {upper}] of {size} chips has no eligible winner\n{context}")]
    InconsistentLayer {
        lower: crate::Chips,
        upper: String,
        size: crate::Chips,
        context: String,
    },

    /// Pockets and board that do not form a legal situation.
    #[error("invalid observation: {0}")]
    InvalidObservation(String),

    /// The queried situation was never loaded into the cache.
    #[error("cache miss: pockets {pockets} board {board} (canonical)")]
    CacheMiss { pockets: String, board: String },

    /// The equity evaluator gave up on a situation.
    #[error("evaluation failed for {pockets} ~ {board}: {reason}")]
    EvaluationFailed {
        pockets: String,
        board: String,
        reason: String,
    },

    /// A cache filename does not name exactly two cards.
    #[error("invalid pocket notation {notation:?}: {reason}")]
    InvalidPocketNotation { notation: String, reason: String },

    /// A cache file's body is not a whole sequence of valid records.
    #[error("corrupt cache file {path}: {reason}")]
    CorruptCacheFile { path: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
