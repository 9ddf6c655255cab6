//! The basic-strategy decision procedure.
//!
//! `decide` is a pure function of the player's hand and the dealer's face-up
//! rank. It names an action; applying it (drawing, doubling the bet,
//! splitting) is the round controller's job. Dispatch order is pair table,
//! then soft-total table, then hard-total table.
//!
//! Dealer-upcard comparisons are rank-literal throughout: a dealer jack,
//! queen or king is not a ten for table lookups.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Rank;
use crate::hand::Hand;

/// What the player does next with one hand. `Double` and `Split` are
/// terminal for the consultation that produced them: `Double` means one more
/// card and stop, `Split` means the hand divides and each half is consulted
/// on its own afterwards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Hit,
    Stand,
    Double,
    Split,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Hit => "hit",
            Action::Stand => "stand",
            Action::Double => "double",
            Action::Split => "split",
        };
        f.write_str(s)
    }
}

/// Looks up the basic-strategy action for `hand` against the dealer's
/// face-up rank. Pure and total: every rank combination maps to exactly one
/// action, and consulting the same hand twice yields the same answer.
pub fn decide(hand: &Hand, upcard: Rank) -> Action {
    if hand.is_pair() {
        pair_action(hand.cards()[0].rank, upcard)
    } else if hand.is_soft_total() {
        soft_action(hand.value(), upcard)
    } else {
        hard_action(hand.value(), upcard)
    }
}

fn pair_action(pair: Rank, upcard: Rank) -> Action {
    use Rank as R;
    match pair {
        R::Ace | R::Eight => Action::Split,
        R::Two | R::Three | R::Seven => {
            if matches!(
                upcard,
                R::Two | R::Three | R::Four | R::Five | R::Six | R::Seven
            ) {
                Action::Split
            } else {
                Action::Hit
            }
        }
        R::Six => {
            if matches!(upcard, R::Two | R::Three | R::Four | R::Five | R::Six) {
                Action::Split
            } else {
                Action::Stand
            }
        }
        R::Nine => {
            if matches!(upcard, R::Seven | R::Ten | R::Ace) {
                Action::Stand
            } else {
                Action::Split
            }
        }
        R::Four => {
            if matches!(upcard, R::Five | R::Six) {
                Action::Split
            } else {
                Action::Stand
            }
        }
        R::Five | R::Ten | R::Jack | R::Queen | R::King => Action::Stand,
    }
}

/// Soft-total table. `is_soft_total` only asserts an unbusted ace, so values
/// below 13 can arrive here (every ace already counting 1); those fall
/// through to Stand along with 20 and 21.
fn soft_action(value: u32, upcard: Rank) -> Action {
    use Rank as R;
    match value {
        13 | 14 => {
            if matches!(upcard, R::Five | R::Six) {
                Action::Double
            } else {
                Action::Hit
            }
        }
        15 | 16 => {
            if matches!(upcard, R::Four | R::Five | R::Six) {
                Action::Double
            } else {
                Action::Hit
            }
        }
        17 => {
            if matches!(upcard, R::Three | R::Four | R::Five | R::Six) {
                Action::Double
            } else {
                Action::Hit
            }
        }
        18 => {
            if matches!(upcard, R::Nine | R::Ten | R::Ace) {
                Action::Hit
            } else if matches!(upcard, R::Three | R::Four | R::Five | R::Six) {
                Action::Double
            } else {
                Action::Stand
            }
        }
        19 => {
            if upcard == R::Six {
                Action::Double
            } else {
                Action::Stand
            }
        }
        _ => Action::Stand,
    }
}

fn hard_action(value: u32, upcard: Rank) -> Action {
    use Rank as R;
    match value {
        0..=8 => Action::Hit,
        9 => {
            if matches!(upcard, R::Three | R::Four | R::Five | R::Six) {
                Action::Double
            } else {
                Action::Hit
            }
        }
        10 => {
            if matches!(upcard, R::Ten | R::Ace) {
                Action::Hit
            } else {
                Action::Double
            }
        }
        11 => Action::Double,
        12 => {
            if matches!(upcard, R::Four | R::Five | R::Six) {
                Action::Stand
            } else {
                Action::Hit
            }
        }
        13..=16 => {
            if matches!(upcard, R::Two | R::Three | R::Four | R::Five | R::Six) {
                Action::Stand
            } else {
                Action::Hit
            }
        }
        _ => Action::Stand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut h = Hand::new();
        for &r in ranks {
            h.push(Card::new(r));
        }
        h
    }

    #[test]
    fn eights_split_unconditionally() {
        let h = hand_of(&[Rank::Eight, Rank::Eight]);
        assert_eq!(decide(&h, Rank::Ten), Action::Split);
        assert_eq!(decide(&h, Rank::Ace), Action::Split);
    }

    #[test]
    fn nines_stand_against_seven_ten_ace() {
        let h = hand_of(&[Rank::Nine, Rank::Nine]);
        assert_eq!(decide(&h, Rank::Seven), Action::Stand);
        assert_eq!(decide(&h, Rank::Ten), Action::Stand);
        assert_eq!(decide(&h, Rank::Ace), Action::Stand);
        assert_eq!(decide(&h, Rank::Six), Action::Split);
        assert_eq!(decide(&h, Rank::Nine), Action::Split);
    }

    #[test]
    fn tens_and_faces_always_stand() {
        for pair in [Rank::Five, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            let h = hand_of(&[pair, pair]);
            assert_eq!(decide(&h, Rank::Six), Action::Stand, "pair of {pair}");
        }
    }

    #[test]
    fn soft_seventeen_doubles_against_four() {
        let h = hand_of(&[Rank::Ace, Rank::Six]);
        assert_eq!(decide(&h, Rank::Four), Action::Double);
        assert_eq!(decide(&h, Rank::Seven), Action::Hit);
    }

    #[test]
    fn soft_eighteen_three_way() {
        let h = hand_of(&[Rank::Ace, Rank::Seven]);
        assert_eq!(decide(&h, Rank::Nine), Action::Hit);
        assert_eq!(decide(&h, Rank::Ten), Action::Hit);
        assert_eq!(decide(&h, Rank::Ace), Action::Hit);
        assert_eq!(decide(&h, Rank::Three), Action::Double);
        assert_eq!(decide(&h, Rank::Two), Action::Stand);
        assert_eq!(decide(&h, Rank::Seven), Action::Stand);
    }

    #[test]
    fn soft_value_below_thirteen_stands() {
        // A,4,7: the ace counts 1, value 12, still reported soft
        let h = hand_of(&[Rank::Ace, Rank::Four, Rank::Seven]);
        assert!(h.is_soft_total());
        assert_eq!(decide(&h, Rank::Six), Action::Stand);
    }

    #[test]
    fn hard_fourteen_hits_above_six() {
        let h = hand_of(&[Rank::Six, Rank::Eight]);
        assert_eq!(decide(&h, Rank::Nine), Action::Hit);
        assert_eq!(decide(&h, Rank::Two), Action::Stand);
    }

    #[test]
    fn hard_ten_doubles_except_ten_and_ace() {
        let h = hand_of(&[Rank::Six, Rank::Four]);
        assert_eq!(decide(&h, Rank::Nine), Action::Double);
        assert_eq!(decide(&h, Rank::Ten), Action::Hit);
        assert_eq!(decide(&h, Rank::Ace), Action::Hit);
        // rank-literal dealer column: a king is not a ten
        assert_eq!(decide(&h, Rank::King), Action::Double);
    }

    #[test]
    fn hard_eleven_always_doubles() {
        let h = hand_of(&[Rank::Six, Rank::Five]);
        for up in crate::cards::all_ranks() {
            assert_eq!(decide(&h, up), Action::Double, "upcard {up}");
        }
    }

    #[test]
    fn decide_is_idempotent() {
        let h = hand_of(&[Rank::Ace, Rank::Six]);
        let first = decide(&h, Rank::Four);
        assert_eq!(decide(&h, Rank::Four), first);
        assert_eq!(decide(&h, Rank::Four), first);
    }
}
