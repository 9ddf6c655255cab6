use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_shoe, Card, Rank};

/// A dealing shoe built from several decks shuffled together.
///
/// Cards are drawn from the back of the internal vector. The shoe carries a
/// cut-card position (a fraction of the full shoe) and reports, but never acts
/// on, whether drawing has passed it. Drawing from an empty shoe triggers a
/// full rebuild: fresh multiset, fresh shuffle, counters and history reset.
#[derive(Debug)]
pub struct Shoe {
    num_decks: usize,
    cut_card_loc: f64,
    cards: Vec<Card>,
    cut_card_position: usize,
    cut_card_reached: bool,
    history: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Shoe {
    /// Creates a shuffled shoe of `num_decks` decks with the cut card placed
    /// at `cut_card_loc` (fraction of the full shoe size, measured from the
    /// bottom). `num_decks` must be at least 1.
    pub fn new(num_decks: usize, cut_card_loc: f64, seed: u64) -> Shoe {
        let mut shoe = Shoe {
            num_decks,
            cut_card_loc,
            cards: Vec::new(),
            cut_card_position: 0,
            cut_card_reached: false,
            history: Vec::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        shoe.rebuild();
        shoe
    }

    /// Depleted -> fresh transition: restores the full shuffled multiset,
    /// recomputes the cut-card position against the new size, clears the
    /// reached flag and discards the draw history. Called at construction and
    /// whenever a draw is requested on an empty shoe; there is no other way a
    /// shoe leaves the depleted state.
    fn rebuild(&mut self) {
        self.cards = full_shoe(self.num_decks);
        self.cards.shuffle(&mut self.rng);
        self.cut_card_position = (self.cards.len() as f64 * self.cut_card_loc) as usize;
        self.cut_card_reached = false;
        self.history.clear();
    }

    /// Removes and returns the next card. Never fails: an empty shoe rebuilds
    /// itself first. The cut-card flag is checked against the remaining size
    /// before the card comes off, so the flag trips on the first draw
    /// *requested* at or below the threshold.
    pub fn draw(&mut self) -> Card {
        if self.cards.is_empty() {
            self.rebuild();
        }
        if self.cards.len() <= self.cut_card_position && !self.cut_card_reached {
            self.cut_card_reached = true;
        }
        let card = self.cards.pop().expect("shoe is non-empty after rebuild");
        self.history.push(card);
        card
    }

    /// True once the remaining size has dropped to or below the cut-card
    /// position at least once since the last rebuild. Monotonic within one
    /// shoe lifetime. Callers use this to decide when to reshuffle between
    /// rounds; the shoe itself only reports it.
    pub fn cut_card_reached(&self) -> bool {
        self.cut_card_reached
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Cards drawn since the last rebuild, in draw order.
    pub fn history(&self) -> &[Card] {
        &self.history
    }

    /// Rearranges the shoe so the next draws yield `firsts` in order, leaving
    /// the rest of the shoe untouched. Intended for scenario setup in tests
    /// and tooling.
    ///
    /// # Panics
    ///
    /// Panics if the remaining shoe cannot supply the requested ranks.
    pub fn stack(&mut self, firsts: &[Rank]) {
        let mut placed = 0;
        for &rank in firsts.iter().rev() {
            let limit = self.cards.len() - placed;
            let pos = self.cards[..limit]
                .iter()
                .rposition(|c| c.rank == rank)
                .expect("requested rank not available in shoe");
            let card = self.cards.remove(pos);
            self.cards.push(card);
            placed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_forces_draw_order() {
        let mut shoe = Shoe::new(1, 0.75, 7);
        shoe.stack(&[Rank::Eight, Rank::Eight, Rank::Ace]);
        assert_eq!(shoe.draw().rank, Rank::Eight);
        assert_eq!(shoe.draw().rank, Rank::Eight);
        assert_eq!(shoe.draw().rank, Rank::Ace);
        assert_eq!(shoe.remaining(), 49);
    }

    #[test]
    #[should_panic]
    fn stack_panics_when_rank_exhausted() {
        let mut shoe = Shoe::new(1, 0.75, 7);
        // a single deck holds only four aces
        shoe.stack(&[Rank::Ace; 5]);
    }

    #[test]
    fn shuffle_is_deterministic_with_same_seed() {
        let mut a = Shoe::new(6, 0.75, 42);
        let mut b = Shoe::new(6, 0.75, 42);
        for _ in 0..20 {
            assert_eq!(a.draw(), b.draw());
        }
    }
}
