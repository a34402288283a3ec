use super::hand::Hand;
use super::observation::Observation;
use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;

/// an array of 4 unique Suits represents
/// any of the 4! = 24 elements in the Suit permutation group.
/// by assuming a "canonical" order of suits (C < D < H < S),
/// we use [Suit; 4] to map C -> P[0], D -> P[1], H -> P[2], S -> P[3].
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Permutation([Suit; 4]);

/// The relabeling that sends an Observation to its canonical form.
///
/// Suits are sorted ascending by [`Permutation::order`], then the i-th
/// suit in that order is relabeled to slot i. The most significant suit
/// lands on spades.
impl From<&Observation> for Permutation {
    fn from(observation: &Observation) -> Self {
        let mut permutation = Suit::all();
        let mut profiles = Suit::all().map(|suit| Profile::from((observation, suit)));
        profiles.sort_by(Self::order);
        profiles
            .into_iter()
            .enumerate()
            .for_each(|(slot, profile)| permutation[profile.suit as usize] = Suit::from(slot as u8));
        Self(permutation)
    }
}

/// Everything the canonical order looks at for one suit.
#[derive(Debug, Clone, Copy)]
struct Profile {
    suit: Suit,
    count: usize,
    top: Option<Rank>,
    pocket: u16,
    public: u16,
}

impl From<(&Observation, Suit)> for Profile {
    fn from((observation, suit): (&Observation, Suit)) -> Self {
        Self {
            suit,
            count: Hand::from(*observation).of(&suit).size(),
            top: observation.pocket().max_rank(&suit),
            pocket: observation.pocket().ranks(&suit),
            public: observation.public().ranks(&suit),
        }
    }
}

impl Permutation {
    pub const fn identity() -> Self {
        Self(Suit::all())
    }

    /// the image of an Observation under a Permutation
    /// is computed from applying the Permutation to
    /// its constituent Hands, pocket and public
    pub fn permute(&self, observation: &Observation) -> Observation {
        Observation::new(
            self.image(observation.pocket()),
            self.image(observation.public()),
        )
    }

    /// the image of a hand under a permutation
    /// is the union of its shifted sub-Hands
    pub fn image(&self, hand: &Hand) -> Hand {
        Suit::all()
            .iter()
            .map(|suit| self.shift(suit, hand))
            .fold(Hand::empty(), Hand::add)
    }

    /// get the image of a Suit under a Permutation
    pub fn map(&self, suit: &Suit) -> Suit {
        self.0[*suit as usize]
    }

    /// the inverse relabeling, so that p.inverse().image(p.image(h)) == h
    pub fn inverse(&self) -> Self {
        let mut inverse = Suit::all();
        Suit::all()
            .into_iter()
            .for_each(|suit| inverse[self.map(&suit) as usize] = suit);
        Self(inverse)
    }

    /// impose order by breaking symmetries, ascending
    /// 1. who has fewer cards overall?
    /// 2. who has the lower top pocket card? none sorts first
    /// 3. who has the weaker pocket rank set?
    /// 4. who has the weaker public rank set?
    /// 5. tie delegates to Suit order
    ///
    /// suits still tied at 5 hold identical ranks on both sides,
    /// so either assignment produces the same image.
    fn order(a: &Profile, b: &Profile) -> std::cmp::Ordering {
        std::cmp::Ordering::Equal
            .then_with(|| a.count.cmp(&b.count))
            .then_with(|| a.top.cmp(&b.top))
            .then_with(|| a.pocket.cmp(&b.pocket))
            .then_with(|| a.public.cmp(&b.public))
            .then_with(|| a.suit.cmp(&b.suit))
    }

    /// the hand here gets filtered by the "old" suit
    /// and then we shift whole 13-bit blocks so that it is in its "new" suit
    fn shift(&self, suit: &Suit, hand: &Hand) -> Hand {
        let old = suit.offset();
        let new = self.map(suit).offset();
        let ranks = (u64::from(*hand) >> old) & Rank::mask() as u64;
        Hand::from(ranks << new)
    }

    pub const fn exhaust() -> [Self; 24] {
        [
            Self([Suit::C, Suit::D, Suit::H, Suit::S]),
            Self([Suit::C, Suit::D, Suit::S, Suit::H]),
            Self([Suit::C, Suit::H, Suit::D, Suit::S]),
            Self([Suit::C, Suit::H, Suit::S, Suit::D]),
            Self([Suit::C, Suit::S, Suit::D, Suit::H]),
            Self([Suit::C, Suit::S, Suit::H, Suit::D]),
            Self([Suit::D, Suit::C, Suit::H, Suit::S]),
            Self([Suit::D, Suit::C, Suit::S, Suit::H]),
            Self([Suit::D, Suit::H, Suit::C, Suit::S]),
            Self([Suit::D, Suit::H, Suit::S, Suit::C]),
            Self([Suit::D, Suit::S, Suit::C, Suit::H]),
            Self([Suit::D, Suit::S, Suit::H, Suit::C]),
            Self([Suit::H, Suit::C, Suit::D, Suit::S]),
            Self([Suit::H, Suit::C, Suit::S, Suit::D]),
            Self([Suit::H, Suit::D, Suit::C, Suit::S]),
            Self([Suit::H, Suit::D, Suit::S, Suit::C]),
            Self([Suit::H, Suit::S, Suit::C, Suit::D]),
            Self([Suit::H, Suit::S, Suit::D, Suit::C]),
            Self([Suit::S, Suit::C, Suit::D, Suit::H]),
            Self([Suit::S, Suit::C, Suit::H, Suit::D]),
            Self([Suit::S, Suit::D, Suit::C, Suit::H]),
            Self([Suit::S, Suit::D, Suit::H, Suit::C]),
            Self([Suit::S, Suit::H, Suit::C, Suit::D]),
            Self([Suit::S, Suit::H, Suit::D, Suit::C]),
        ]
    }
}

impl Arbitrary for Permutation {
    fn random() -> Self {
        Self::exhaust()[rand::random_range(0..24)]
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for suit in Suit::all() {
            write!(f, "{}>{} ", suit, self.map(&suit))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_identity() {
        let identity = Permutation::identity();
        assert!(identity.map(&Suit::C) == Suit::C);
        assert!(identity.map(&Suit::D) == Suit::D);
        assert!(identity.map(&Suit::H) == Suit::H);
        assert!(identity.map(&Suit::S) == Suit::S);
    }

    #[test]
    fn map_arbitrary() {
        let permutation = Permutation([Suit::H, Suit::S, Suit::C, Suit::D]);
        assert!(permutation.map(&Suit::C) == Suit::H);
        assert!(permutation.map(&Suit::D) == Suit::S);
        assert!(permutation.map(&Suit::H) == Suit::C);
        assert!(permutation.map(&Suit::S) == Suit::D);
    }

    #[test]
    fn permute_unique() {
        let ref hand = Hand::try_from("Ac Kd Qh Js").unwrap();
        let mut unique = std::collections::HashSet::new();
        let n = Permutation::exhaust()
            .into_iter()
            .map(|p| p.image(hand))
            .inspect(|h| assert!(unique.insert(*h)))
            .count();
        assert!(n == 24);
    }

    #[test]
    fn permute_rotation() {
        let permutation = Permutation([Suit::S, Suit::C, Suit::D, Suit::H]);
        let original = Hand::try_from("Ac Kd Qh Js").unwrap();
        let permuted = Hand::try_from("As Kc Qd Jh").unwrap();
        assert!(permutation.image(&original) == permuted);
    }

    #[test]
    fn permute_interior() {
        let permutation = Permutation([Suit::C, Suit::H, Suit::D, Suit::S]);
        let original = Hand::try_from("2c 3d 4h 5s").unwrap();
        let permuted = Hand::try_from("2c 3h 4d 5s").unwrap();
        assert!(permutation.image(&original) == permuted);
    }

    #[test]
    fn permute_identity() {
        let permutation = Permutation::identity();
        let hand = Hand::random();
        assert!(permutation.image(&hand) == hand);
    }

    #[test]
    fn inverse_undoes() {
        let permutation = Permutation::random();
        let hand = Hand::random();
        assert!(permutation.inverse().image(&permutation.image(&hand)) == hand);
    }

    #[test]
    fn suited_pockets_land_on_spades() {
        let obs = Observation::try_from("Ah Kh ~ 2c 7d 9c").unwrap();
        let canonical = Permutation::from(&obs).permute(&obs);
        assert!(canonical.pocket().to_string() == "AsKs");
    }

    #[test]
    fn higher_top_pocket_rank_sorts_last() {
        // every suit holds one card; spades carry the ace, hearts the king
        let obs = Observation::new(Hand::try_from("As Kh").unwrap(), Hand::try_from("2d 3c").unwrap());
        let permutation = Permutation::from(&obs);
        assert!(permutation.map(&Suit::S) == Suit::S);
        assert!(permutation.map(&Suit::H) == Suit::H);
        assert!(permutation.map(&Suit::D) == Suit::C);
        assert!(permutation.map(&Suit::C) == Suit::D);
        // on a legal flop the same tie breaks the same way below clubs
        let obs = Observation::try_from("As Kh ~ 2c 3c 4d").unwrap();
        let permutation = Permutation::from(&obs);
        assert!(permutation.map(&Suit::D) == Suit::C);
        assert!(permutation.map(&Suit::H) == Suit::D);
        assert!(permutation.map(&Suit::S) == Suit::H);
        assert!(permutation.map(&Suit::C) == Suit::S);
    }

    #[test]
    fn empty_suits_sort_first() {
        // hearts absent, so hearts -> clubs
        let obs = Observation::try_from("As Kd ~ 2c 7d 9s").unwrap();
        let permutation = Permutation::from(&obs);
        assert!(permutation.map(&Suit::H) == Suit::C);
    }
}
