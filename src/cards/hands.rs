use super::hand::Hand;

/// Every `n`-card subset of the deck that avoids a dead mask.
///
/// Walks bit patterns of fixed popcount in increasing numeric order using
/// Gosper's hack, skipping any pattern that touches the mask. Nothing is
/// materialized, and the order is deterministic so generated tables are
/// reproducible run to run.
pub struct HandIterator {
    next: u64,
    mask: u64,
}

impl HandIterator {
    /// Number of hands the iterator yields in total.
    pub fn combinations(&self) -> usize {
        let n = 52 - Hand::from(self.mask).size();
        let k = Hand::from(self.next).size();
        (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
    }

    fn exhausted(&self) -> bool {
        self.next == 0 || self.next & !Hand::mask() != 0
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        b | g
    }

    fn advance(&mut self) {
        loop {
            self.next = self.permute();
            if self.next & self.mask == 0 || self.exhausted() {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = Hand::from(self.next);
            self.advance();
            Some(hand)
        }
    }
}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        let mut this = Self {
            next: (1 << n) - 1,
            mask: u64::from(mask),
        };
        while this.next & this.mask != 0 && !this.exhausted() {
            this.next = this.permute();
        }
        this
    }
}

/// Boards of a given size around dead cards.
///
/// Same as [`HandIterator`] except that a size of zero yields the single
/// empty board, which is what preflop enumeration needs.
pub struct Boards {
    inner: Option<HandIterator>,
    empty: bool,
}

impl Boards {
    pub fn new(n: usize, dead: Hand) -> Self {
        match n {
            0 => Self {
                inner: None,
                empty: true,
            },
            n => Self {
                inner: Some(HandIterator::from((n, dead))),
                empty: false,
            },
        }
    }
}

impl Iterator for Boards {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.as_mut() {
            Some(inner) => inner.next(),
            None if self.empty => {
                self.empty = false;
                Some(Hand::empty())
            }
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_choose_three() {
        let mut iter = HandIterator::from((3, Hand::empty()));
        assert!(iter.next() == Some(Hand::from(0b00111)));
        assert!(iter.next() == Some(Hand::from(0b01011)));
        assert!(iter.next() == Some(Hand::from(0b01101)));
        assert!(iter.next() == Some(Hand::from(0b01110)));
        assert!(iter.next() == Some(Hand::from(0b10011)));
        assert!(iter.next() == Some(Hand::from(0b10101)));
        assert!(iter.next() == Some(Hand::from(0b10110)));
        assert!(iter.next() == Some(Hand::from(0b11001)));
        assert!(iter.next() == Some(Hand::from(0b11010)));
        assert!(iter.next() == Some(Hand::from(0b11100)));
    }

    #[test]
    fn five_choose_three_with_mask() {
        let mask = Hand::from(0b______________________11_0);
        let mut iter = HandIterator::from((3, mask));
        assert!(iter.next() == Some(Hand::from(0b0011_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0101_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0110_00_1)));
        assert!(iter.next() == Some(Hand::from(0b0111_00_0)));
        assert!(iter.next() == Some(Hand::from(0b1001_00_1)));
    }

    #[test]
    fn terminates_at_deck_edge() {
        let iter = HandIterator::from((2, Hand::empty()));
        assert!(iter.combinations() == 1326);
        assert!(iter.count() == 1326);
    }

    #[test]
    fn flops_around_pockets() {
        let pockets = Hand::try_from("AsKs").unwrap();
        let mut iter = HandIterator::from((3, pockets));
        assert!(iter.combinations() == 19600);
        assert!(iter.all(|board| !board.overlaps(&pockets) && board.size() == 3));
    }

    #[test]
    fn preflop_board_is_empty() {
        let boards = Boards::new(0, Hand::try_from("AsKs").unwrap()).collect::<Vec<_>>();
        assert!(boards == vec![Hand::empty()]);
    }
}
