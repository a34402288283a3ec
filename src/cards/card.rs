use super::rank::Rank;
use super::suit::Suit;

/// A single playing card, stored as its bit index in a [`Hand`].
///
/// The index is `rank + 13 * suit`, so each suit occupies one contiguous
/// 13-bit block and a suit relabeling is a block shift.
///
/// Cards parse from two-character strings like `"As"` or `"Tc"`.
/// Use [`Card::parse`] for several cards at once.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % 13)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / 13)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) + 13 * u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its bit index 0..52
/// Ts
/// 8 + 13 * 3 = 47
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 isomorphism
/// each card is just one bit turned on
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << c.0
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        debug_assert!(n.count_ones() == 1);
        Self(n.trailing_zeros() as u8)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => {
                let rank = Rank::try_from(r.to_string().as_str())?;
                let suit = Suit::try_from(s.to_string().as_str())?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("invalid card str: {:?} is not 2 characters", s)),
        }
    }
}

impl Card {
    /// Parses a string of concatenated card notations, ignoring whitespace.
    ///
    /// `"AsKs"`, `"As Ks"` and `"as ks"` all yield the same two cards.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
