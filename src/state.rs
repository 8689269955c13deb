//! Immutable game snapshots and the legal-move generator.

use crate::card::Card;
use crate::deck;
use crate::layout::{self, TABLEAU_SIZE};

use anyhow::{Result, bail};
use smallvec::SmallVec;

/// Cards left hidden after the deal: 52 - 28 tableau - 1 waste.
pub const STOCK_SIZE: usize = 23;

pub type StockPile = SmallVec<[Card; STOCK_SIZE]>;
pub type Successors = SmallVec<[State; 8]>;

/// One snapshot of a game in progress. States are values: every play builds
/// a fresh `State`, and structural equality lets the solver recognize the
/// same position reached through different move orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    /// The 28 board slots in layout order; `None` marks a removed card.
    pub tableau: [Option<Card>; TABLEAU_SIZE],
    /// Remaining hidden cards, drawn from the front.
    pub stock_pile: StockPile,
    /// The single exposed card that the next play must match.
    pub waste_card: Card,
}

impl State {
    /// Deals a validated 52-card deck: the first 28 cards fill the tableau in
    /// layout order, the 29th starts the waste, the rest form the stock.
    pub fn initial_state(cards: &[Card]) -> Result<Self> {
        if !deck::is_standard_deck(cards) {
            bail!("Not a standard 52-card deck");
        }
        Ok(Self {
            tableau: std::array::from_fn(|i| Some(cards[i])),
            stock_pile: cards[TABLEAU_SIZE + 1..].iter().copied().collect(),
            waste_card: cards[TABLEAU_SIZE],
        })
    }

    /// Whether position `i` has both of its covering positions cleared.
    /// Bottom-row positions are always face-up; an emptied slot stays "face-up"
    /// (it no longer blocks anything, and there is nothing left to play).
    pub fn is_face_up(&self, i: usize) -> bool {
        layout::covering_positions(i)
            .iter()
            .all(|&j| self.tableau[j].is_none())
    }

    /// Whether `card` may be played on the current waste card. Rank adjacency
    /// only; face-up status is the move generator's concern.
    pub fn can_be_moved(&self, card: Card) -> bool {
        card.is_one_rank_apart(self.waste_card)
    }

    /// The goal predicate: every tableau slot cleared.
    pub fn is_tableau_empty(&self) -> bool {
        self.tableau.iter().all(Option::is_none)
    }

    /// All states one legal action away: each playable tableau card in
    /// ascending position order, then the unconditional stock draw. The
    /// successor's `waste_card` is the card that was played or drawn.
    pub fn successors(&self) -> Successors {
        let mut next = Successors::new();
        for (i, slot) in self.tableau.iter().enumerate() {
            let Some(card) = *slot else {
                continue;
            };
            if self.is_face_up(i) && self.can_be_moved(card) {
                let mut state = self.clone();
                state.tableau[i] = None;
                state.waste_card = card;
                next.push(state);
            }
        }
        if !self.stock_pile.is_empty() {
            let mut state = self.clone();
            state.waste_card = state.stock_pile.remove(0);
            next.push(state);
        }
        next
    }
}
