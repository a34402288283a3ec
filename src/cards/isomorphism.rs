use super::hand::Hand;
use super::observation::Observation;
use super::permutation::Permutation;

/// The canonical representative of an Observation's suit-isomorphism class.
///
/// Any two observations that differ only by a relabeling of suits produce
/// the same Isomorphism, so equity only has to be computed and stored once
/// per class. Canonical forms are fixed points: canonicalizing one again
/// returns it unchanged.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, PartialOrd, Ord)]
pub struct Isomorphism(Observation);

impl From<Observation> for Isomorphism {
    fn from(observation: Observation) -> Self {
        Self(Permutation::from(&observation).permute(&observation))
    }
}

impl From<Isomorphism> for Observation {
    fn from(isomorphism: Isomorphism) -> Self {
        isomorphism.0
    }
}

impl Isomorphism {
    pub fn is_canonical(observation: &Observation) -> bool {
        Self::from(*observation).0 == *observation
    }
    pub fn pocket(&self) -> &Hand {
        self.0.pocket()
    }
    pub fn public(&self) -> &Hand {
        self.0.public()
    }
}

impl std::fmt::Display for Isomorphism {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
