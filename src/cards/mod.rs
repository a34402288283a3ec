//! Bit-mask card primitives and the suit canonicalizer.
pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod hand;
pub use hand::*;

pub mod hands;
pub use hands::*;

pub mod hole;
pub use hole::*;

pub mod isomorphism;
pub use isomorphism::*;

pub mod observation;
pub use observation::*;

pub mod permutation;
pub use permutation::*;

pub mod rank;
pub use rank::*;

pub mod street;
pub use street::*;

pub mod suit;
pub use suit::*;
