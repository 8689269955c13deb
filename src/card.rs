use anyhow::{Context, Result, bail};
use std::fmt;

pub const MAX_RANK: u8 = 13;
pub const MAX_SUIT: u8 = 4;
pub const MAX_CARD: u8 = MAX_SUIT * MAX_RANK;

const RANKS: [char; 13] = [
    'A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K',
];
const SUITS: [char; 4] = ['c', 'd', 'h', 's'];

/// A playing card, encoded as `suit * 13 + rank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn new_with_rank_suit(rank: u8, suit: u8) -> Self {
        Self(suit * MAX_RANK + rank)
    }

    /// Parses a two-character identifier like `Ac` or `Th`. Case-sensitive.
    pub fn parse(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let (Some(rank_char), Some(suit_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            bail!("Invalid card '{s}': expected a rank and a suit character");
        };
        let rank = RANKS
            .iter()
            .position(|&r| r == rank_char)
            .with_context(|| format!("Invalid rank at card '{s}'"))?;
        let suit = SUITS
            .iter()
            .position(|&c| c == suit_char)
            .with_context(|| format!("Invalid suit at card '{s}'"))?;
        Ok(Self::new_with_rank_suit(rank as u8, suit as u8))
    }

    pub fn id(&self) -> u8 {
        self.0
    }

    pub fn rank(&self) -> u8 {
        self.0 % MAX_RANK
    }

    pub fn suit(&self) -> u8 {
        self.0 / MAX_RANK
    }

    pub fn rank_char(&self) -> char {
        RANKS[self.rank() as usize]
    }

    pub fn suit_char(&self) -> char {
        SUITS[self.suit() as usize]
    }

    /// True iff the ranks are adjacent on the 13-cycle A,2,..,K,A.
    /// K and A wrap; a rank is never adjacent to itself, suits are ignored.
    pub fn is_one_rank_apart(&self, other: Card) -> bool {
        let diff = (self.rank() + MAX_RANK - other.rank()) % MAX_RANK;
        diff == 1 || diff == MAX_RANK - 1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::standard_deck;

    #[test]
    fn test_parse_roundtrip() {
        for card in standard_deck() {
            let text = card.to_string();
            assert_eq!(card.rank_char(), text.chars().next().unwrap());
            assert_eq!(Card::parse(&text).unwrap(), card);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for s in ["", "A", "Acc", "ac", "AC", "1c", "Xs"] {
            assert!(Card::parse(s).is_err(), "accepted '{s}'");
        }
    }

    #[test]
    fn test_is_one_rank_apart() {
        let neighbors = |rank: char| -> &str {
            match rank {
                'A' => "K2",
                '2' => "A3",
                '3' => "24",
                '4' => "35",
                '5' => "46",
                '6' => "57",
                '7' => "68",
                '8' => "79",
                '9' => "8T",
                'T' => "9J",
                'J' => "TQ",
                'Q' => "JK",
                'K' => "QA",
                _ => unreachable!(),
            }
        };

        for card1 in standard_deck() {
            for card2 in standard_deck() {
                let expected = neighbors(card1.rank_char()).contains(card2.rank_char());
                assert_eq!(
                    expected,
                    card1.is_one_rank_apart(card2),
                    "{card1} vs {card2}"
                );
                assert_eq!(
                    card1.is_one_rank_apart(card2),
                    card2.is_one_rank_apart(card1),
                    "adjacency must be symmetric for {card1}/{card2}"
                );
            }
        }
    }

    #[test]
    fn test_same_rank_is_not_adjacent() {
        let ah = Card::parse("Ah").unwrap();
        let a_spades = Card::parse("As").unwrap();
        assert!(!ah.is_one_rank_apart(a_spades));
        assert!(!ah.is_one_rank_apart(ah));
    }
}
