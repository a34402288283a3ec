//! The pot ledger: layered side pots and showdown awards.
pub mod action;
pub use action::*;

pub mod ledger;
pub use ledger::*;

pub mod pot;
pub use pot::*;

pub mod seat;
pub use seat::*;

pub mod showdown;
pub use showdown::*;

pub mod winner;
pub use winner::*;
