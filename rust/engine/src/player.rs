use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::shoe::Shoe;

/// A seat at the table: one or more hands (more only after splits), a
/// bankroll, and one bet per hand, positionally aligned with `hands`.
///
/// The dealer is a `Player` too; its bankroll and bets are simply never
/// exercised.
#[derive(Debug, Clone)]
pub struct Player {
    hands: Vec<Hand>,
    bankroll: f64,
    bets: Vec<f64>,
}

impl Player {
    pub fn new(bankroll: f64) -> Player {
        Player {
            hands: vec![Hand::new()],
            bankroll,
            bets: Vec::new(),
        }
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand(&self, index: usize) -> &Hand {
        &self.hands[index]
    }

    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }

    pub fn bankroll(&self) -> f64 {
        self.bankroll
    }

    pub fn bets(&self) -> &[f64] {
        &self.bets
    }

    pub fn deal_to(&mut self, index: usize, card: Card) {
        self.hands[index].push(card);
    }

    /// Appends a bet and debits it from the bankroll immediately. Payouts are
    /// additive against this debit: multiplier 1 is a push, 2 a win, 2.5 a
    /// natural, and no payout at all is a loss.
    pub fn place_bet(&mut self, amount: f64) {
        self.bets.push(amount);
        self.bankroll -= amount;
    }

    /// Credits `bets[index] * multiplier` to the bankroll and zeroes the bet.
    pub fn payout(&mut self, index: usize, multiplier: f64) {
        self.bankroll += self.bets[index] * multiplier;
        self.bets[index] = 0.0;
    }

    /// Doubles the bet on one hand. No bankroll check and no debit: only the
    /// originally placed amount has left the bankroll.
    pub fn double_bet(&mut self, index: usize) {
        self.bets[index] *= 2.0;
    }

    /// A hand may split when it is a pair and the bankroll still covers the
    /// bet already riding on it.
    pub fn can_split(&self, index: usize) -> bool {
        self.hands[index].is_pair() && self.bankroll >= self.bets[index]
    }

    /// Splits the pair at `index`: the second card moves into a new hand at
    /// the end of the hand list, each hand draws one fresh card (original
    /// first), and a mirrored bet is placed for the new hand. Fails without
    /// mutating anything when the hand is not a pair or funds are short.
    pub fn split(&mut self, index: usize, shoe: &mut Shoe) -> Result<(), GameError> {
        if !self.hands[index].is_pair() {
            return Err(GameError::SplitNonPair { hand: index });
        }
        if self.bankroll < self.bets[index] {
            return Err(GameError::SplitInsufficientBankroll {
                hand: index,
                needed: self.bets[index],
                available: self.bankroll,
            });
        }

        let split_card = self.hands[index]
            .pop()
            .ok_or(GameError::SplitNonPair { hand: index })?;
        let mut new_hand = Hand::new();
        new_hand.push(split_card);

        let drawn = shoe.draw();
        self.hands[index].push(drawn);
        new_hand.push(shoe.draw());
        self.hands.push(new_hand);

        let mirrored = self.bets[index];
        self.place_bet(mirrored);
        Ok(())
    }

    /// Discards all hands and bets, leaving one empty hand for the next deal.
    pub fn reset_hands(&mut self) {
        self.hands = vec![Hand::new()];
        self.bets.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn place_bet_debits_bankroll() {
        let mut p = Player::new(1000.0);
        p.place_bet(10.0);
        assert_eq!(p.bankroll(), 990.0);
        assert_eq!(p.bets(), &[10.0]);
    }

    #[test]
    fn payout_multipliers_match_outcomes() {
        // win: bet returned plus equal winnings
        let mut p = Player::new(1000.0);
        p.place_bet(10.0);
        p.payout(0, 2.0);
        assert_eq!(p.bankroll(), 1010.0);
        assert_eq!(p.bets()[0], 0.0);

        // push: breakeven
        let mut p = Player::new(1000.0);
        p.place_bet(10.0);
        p.payout(0, 1.0);
        assert_eq!(p.bankroll(), 1000.0);

        // natural: 3:2 premium
        let mut p = Player::new(1000.0);
        p.place_bet(10.0);
        p.payout(0, 2.5);
        assert_eq!(p.bankroll(), 1015.0);
    }

    #[test]
    fn double_bet_mutates_only_the_bet() {
        let mut p = Player::new(1000.0);
        p.place_bet(10.0);
        p.double_bet(0);
        assert_eq!(p.bets()[0], 20.0);
        assert_eq!(p.bankroll(), 990.0);
    }

    #[test]
    fn split_rejects_non_pair_without_mutation() {
        let mut shoe = Shoe::new(1, 0.75, 3);
        let mut p = Player::new(1000.0);
        p.place_bet(10.0);
        p.deal_to(0, Card::new(Rank::King));
        p.deal_to(0, Card::new(Rank::Queen));
        let before = shoe.remaining();

        let err = p.split(0, &mut shoe).unwrap_err();
        assert_eq!(err, GameError::SplitNonPair { hand: 0 });
        assert_eq!(p.hand_count(), 1);
        assert_eq!(p.bets().len(), 1);
        assert_eq!(shoe.remaining(), before);
    }

    #[test]
    fn split_rejects_insufficient_bankroll() {
        let mut shoe = Shoe::new(1, 0.75, 3);
        let mut p = Player::new(10.0);
        p.place_bet(10.0); // bankroll now 0, cannot mirror the bet
        p.deal_to(0, Card::new(Rank::Eight));
        p.deal_to(0, Card::new(Rank::Eight));

        assert!(!p.can_split(0));
        let err = p.split(0, &mut shoe).unwrap_err();
        assert!(matches!(
            err,
            GameError::SplitInsufficientBankroll { hand: 0, .. }
        ));
        assert_eq!(p.hand_count(), 1);
    }

    #[test]
    fn split_mirrors_bet_and_refills_both_hands() {
        let mut shoe = Shoe::new(6, 0.75, 11);
        let mut p = Player::new(1000.0);
        p.place_bet(10.0);
        p.deal_to(0, Card::new(Rank::Eight));
        p.deal_to(0, Card::new(Rank::Eight));

        p.split(0, &mut shoe).expect("pair with funds must split");
        assert_eq!(p.hand_count(), 2);
        assert_eq!(p.bets(), &[10.0, 10.0]);
        assert_eq!(p.bankroll(), 980.0);
        assert_eq!(p.hand(0).len(), 2);
        assert_eq!(p.hand(1).len(), 2);
        assert_eq!(p.hand(0).cards()[0].rank, Rank::Eight);
        assert_eq!(p.hand(1).cards()[0].rank, Rank::Eight);
    }

    #[test]
    fn reset_hands_leaves_one_empty_hand() {
        let mut p = Player::new(1000.0);
        p.place_bet(10.0);
        p.deal_to(0, Card::new(Rank::Five));
        p.reset_hands();
        assert_eq!(p.hand_count(), 1);
        assert!(p.hand(0).is_empty());
        assert!(p.bets().is_empty());
    }
}
