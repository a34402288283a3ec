use crate::Chips;

/// One layer of the pot: the band `(lower, upper]` of contribution space.
///
/// `size` counts every chip any player put inside the band, folded players
/// included. `eligible` lists, in seat order, the players who reached into
/// the band and have not folded. The top layer is open (`upper` is `None`)
/// and collects whatever live players have put in above the highest cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot<P> {
    lower: Chips,
    upper: Option<Chips>,
    size: Chips,
    eligible: Vec<P>,
}

impl<P> Pot<P> {
    pub(crate) fn new(lower: Chips, upper: Option<Chips>, size: Chips, eligible: Vec<P>) -> Self {
        Self {
            lower,
            upper,
            size,
            eligible,
        }
    }
    pub fn lower(&self) -> Chips {
        self.lower
    }
    pub fn upper(&self) -> Option<Chips> {
        self.upper
    }
    pub fn size(&self) -> Chips {
        self.size
    }
    pub fn eligible(&self) -> &[P] {
        &self.eligible
    }
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
    /// Chips a single contribution places inside this band.
    pub fn share(&self, contribution: Chips) -> Chips {
        let top = self.upper.map_or(contribution, |upper| contribution.min(upper));
        top.saturating_sub(self.lower)
    }
    /// Upper bound rendered for humans, `inf` for the open layer.
    pub fn ceiling(&self) -> String {
        self.upper.map_or_else(|| "inf".to_string(), |upper| upper.to_string())
    }
}

impl<P: std::fmt::Debug> std::fmt::Display for Pot<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({}, {}] {} {:?}",
            self.lower,
            self.ceiling(),
            self.size,
            self.eligible
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_clamps_to_band() {
        let pot = Pot::<usize>::new(125, Some(250), 0, vec![]);
        assert!(pot.share(100) == 0);
        assert!(pot.share(125) == 0);
        assert!(pot.share(200) == 75);
        assert!(pot.share(500) == 125);
    }

    #[test]
    fn share_open_band() {
        let pot = Pot::<usize>::new(500, None, 0, vec![]);
        assert!(pot.share(400) == 0);
        assert!(pot.share(650) == 150);
        assert!(pot.ceiling() == "inf");
    }
}
