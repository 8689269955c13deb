//! Validators for raw 52-card deals, checked before the solver touches them.

use crate::card::{Card, MAX_CARD, MAX_RANK, MAX_SUIT};

use anyhow::{Result, bail};

/// The 52-card universe: clubs, diamonds, hearts, spades, A..K within each suit.
pub fn standard_deck() -> Vec<Card> {
    (0..MAX_SUIT)
        .flat_map(|suit| (0..MAX_RANK).map(move |rank| Card::new_with_rank_suit(rank, suit)))
        .collect()
}

/// Tokens that are not a well-formed two-character card identifier.
pub fn malformed_cards<'a>(tokens: &[&'a str]) -> Vec<&'a str> {
    tokens
        .iter()
        .copied()
        .filter(|token| Card::parse(token).is_err())
        .collect()
}

/// Cards of the standard universe absent from the input, in canonical order.
pub fn missing_cards(cards: &[Card]) -> Vec<Card> {
    let mut seen = [false; MAX_CARD as usize];
    for card in cards {
        seen[card.id() as usize] = true;
    }
    standard_deck()
        .into_iter()
        .filter(|card| !seen[card.id() as usize])
        .collect()
}

/// Every occurrence of any card appearing more than once, in input order.
pub fn duplicate_cards(cards: &[Card]) -> Vec<Card> {
    let mut counts = [0u8; MAX_CARD as usize];
    for card in cards {
        counts[card.id() as usize] += 1;
    }
    cards
        .iter()
        .copied()
        .filter(|card| counts[card.id() as usize] > 1)
        .collect()
}

/// True iff the input is a permutation of the 52-card universe.
pub fn is_standard_deck(cards: &[Card]) -> bool {
    if cards.len() != MAX_CARD as usize {
        return false;
    }
    let mut seen = [false; MAX_CARD as usize];
    for card in cards {
        let id = card.id() as usize;
        if seen[id] {
            return false;
        }
        seen[id] = true;
    }
    true
}

/// Parses a whitespace-separated list of card identifiers.
pub fn parse_deck(content: &str) -> Result<Vec<Card>> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    let malformed = malformed_cards(&tokens);
    if !malformed.is_empty() {
        bail!("Malformed cards: {}", malformed.join(" "));
    }
    tokens.iter().map(|token| Card::parse(token)).collect()
}
