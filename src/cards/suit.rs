/// Card suit: clubs, diamonds, hearts, spades.
///
/// Suits are strategically interchangeable. Only the pattern of suit
/// matches matters, which is what [`Permutation`] exploits to collapse
/// equivalent situations onto one canonical representative.
///
/// Each suit owns a contiguous 13-bit block of a [`Hand`]: card bit index
/// is `rank + 13 * suit`.
///
/// [`Permutation`]: super::permutation::Permutation
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in index order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    /// Bit offset of this suit's block.
    pub const fn offset(&self) -> u32 {
        13 * (*self as u32)
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 representation
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        (super::rank::Rank::mask() as u64) << s.offset()
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "c" | "♣" => Ok(Suit::C),
            "d" | "♦" => Ok(Suit::D),
            "h" | "♥" => Ok(Suit::H),
            "s" | "♠" => Ok(Suit::S),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::C => write!(f, "c"),
            Suit::D => write!(f, "d"),
            Suit::H => write!(f, "h"),
            Suit::S => write!(f, "s"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let suit = Suit::D;
        assert!(suit == Suit::from(u8::from(suit)));
    }

    #[test]
    fn injective_u64() {
        assert!(u64::from(Suit::C) == 0x0000_0000_0000_1FFF);
        assert!(u64::from(Suit::D) == 0x0000_0000_03FF_E000);
        assert!(u64::from(Suit::H) == 0x0000_007F_FC00_0000);
        assert!(u64::from(Suit::S) == 0x000F_FF80_0000_0000);
    }

    #[test]
    fn blocks_cover_deck() {
        let deck = Suit::all().map(u64::from).into_iter().fold(0, |a, b| a | b);
        assert!(deck.count_ones() == 52);
    }
}
