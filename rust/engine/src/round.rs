//! One round of play: deal, natural check, player turn, dealer turn,
//! settlement. The controller owns all mutation; the strategy tables only
//! name actions.

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::Hand;
use crate::player::Player;
use crate::records::{HandRecord, RoundRecord};
use crate::shoe::Shoe;
use crate::strategy::{self, Action};

/// Final result of a single player hand. Busts and losses carry no payout;
/// the bet was already debited at placement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandOutcome {
    /// Player natural, paid 3:2
    Blackjack,
    /// Dealer natural, round over immediately
    DealerBlackjack,
    Win,
    Push,
    Loss,
    Bust,
}

/// Fixed dealer policy: draw below 17, and on 17 itself only while soft.
/// Stands on hard 17 and on any 18 or better.
pub fn dealer_must_draw(hand: &Hand) -> bool {
    hand.value() < 17 || (hand.value() == 17 && hand.is_soft_total())
}

/// Plays one complete round and returns its record. `round` and `seed` on
/// the record are left for the session to fill in.
///
/// Errors only when the strategy requests a split the player cannot cover,
/// which is surfaced rather than papered over.
pub fn play_round(
    shoe: &mut Shoe,
    player: &mut Player,
    dealer: &mut Player,
    bet_size: f64,
) -> Result<RoundRecord, GameError> {
    player.reset_hands();
    dealer.reset_hands();
    player.place_bet(bet_size);

    // two cards to the player, then two to the dealer
    player.deal_to(0, shoe.draw());
    player.deal_to(0, shoe.draw());
    dealer.deal_to(0, shoe.draw());
    dealer.deal_to(0, shoe.draw());

    let mut actions: Vec<Vec<Action>> = vec![Vec::new()];

    // naturals short-circuit the round before any decisions
    let player_natural = player.hand(0).is_blackjack();
    let dealer_natural = dealer.hand(0).is_blackjack();
    if player_natural || dealer_natural {
        let wagers = player.bets().to_vec();
        let outcome = if player_natural && dealer_natural {
            player.payout(0, 1.0);
            HandOutcome::Push
        } else if dealer_natural {
            HandOutcome::DealerBlackjack
        } else {
            player.payout(0, 2.5);
            HandOutcome::Blackjack
        };
        return Ok(build_record(player, dealer, actions, wagers, vec![outcome]));
    }

    let upcard = dealer.hand(0).cards()[0].rank;

    // Index worklist over the player's hands. Splits append hands at the end
    // of the list, so the loop bound picks them up and each hand is visited
    // exactly once, in creation order.
    let mut i = 0;
    while i < player.hand_count() {
        loop {
            let action = strategy::decide(player.hand(i), upcard);
            actions[i].push(action);
            match action {
                Action::Hit => {
                    player.deal_to(i, shoe.draw());
                    if player.hand(i).value() > 21 {
                        break;
                    }
                }
                Action::Double => {
                    player.double_bet(i);
                    player.deal_to(i, shoe.draw());
                    break;
                }
                Action::Split => {
                    player.split(i, shoe)?;
                    actions.push(Vec::new());
                    // the original hand is two cards again; keep deciding it
                }
                Action::Stand => break,
            }
        }
        i += 1;
    }

    while dealer_must_draw(dealer.hand(0)) {
        dealer.deal_to(0, shoe.draw());
    }

    // settle each hand independently against the dealer total
    let dealer_value = dealer.hand(0).value();
    let wagers = player.bets().to_vec();
    let mut outcomes = Vec::with_capacity(player.hand_count());
    for idx in 0..player.hand_count() {
        let value = player.hand(idx).value();
        let outcome = if value > 21 {
            HandOutcome::Bust
        } else if dealer_value > 21 || value > dealer_value {
            player.payout(idx, 2.0);
            HandOutcome::Win
        } else if value == dealer_value {
            player.payout(idx, 1.0);
            HandOutcome::Push
        } else {
            HandOutcome::Loss
        };
        outcomes.push(outcome);
    }

    Ok(build_record(player, dealer, actions, wagers, outcomes))
}

fn build_record(
    player: &Player,
    dealer: &Player,
    actions: Vec<Vec<Action>>,
    wagers: Vec<f64>,
    outcomes: Vec<HandOutcome>,
) -> RoundRecord {
    let player_hands = player
        .hands()
        .iter()
        .zip(actions)
        .zip(wagers)
        .zip(outcomes)
        .map(|(((hand, actions), bet), outcome)| HandRecord {
            cards: hand.cards().to_vec(),
            value: hand.value(),
            actions,
            bet,
            outcome,
        })
        .collect();

    RoundRecord {
        round: 0,
        seed: 0,
        player_hands,
        dealer_cards: dealer.hand(0).cards().to_vec(),
        dealer_value: dealer.hand(0).value(),
        bankroll_after: player.bankroll(),
        ts: None,
    }
}
