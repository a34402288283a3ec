use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;

/// The cards not yet dealt. Random selection via [`Deck::draw`].
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }
    /// remove a uniformly random card from the deck
    pub fn draw(&mut self) -> Option<Card> {
        let n = self.0.size();
        if n == 0 {
            return None;
        }
        let card = self.0.into_iter().nth(rand::random_range(0..n))?;
        self.remove(card);
        Some(card)
    }
    /// deal `n` random cards as one hand
    pub fn deal(&mut self, n: usize) -> Hand {
        Hand::from((0..n).filter_map(|_| self.draw()).collect::<Vec<Card>>())
    }
    /// remove two cards from the deck
    /// to deal as a Hole
    pub fn hole(&mut self) -> Option<Hole> {
        Some(Hole::from((self.draw()?, self.draw()?)))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deals_without_replacement() {
        let mut deck = Deck::new();
        let hand = deck.deal(52);
        assert!(hand.size() == 52);
        assert!(deck.size() == 0);
        assert!(deck.draw().is_none());
    }

    #[test]
    fn dealt_cards_leave_deck() {
        let mut deck = Deck::new();
        let hole = deck.hole().unwrap();
        assert!(deck.size() == 50);
        assert!(!Hand::from(deck).overlaps(&Hand::from(hole)));
    }
}
