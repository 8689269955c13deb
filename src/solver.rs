//! Depth-first search over the state graph, pruned by a dead-state memo.

use crate::card::Card;
use crate::state::State;

use anyhow::{Result, bail};
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Finds a sequence of plays clearing the tableau, or proves there is none
/// (empty sequence). Unbounded: actions strictly consume cards, so the state
/// graph is finite and exploration always terminates.
pub fn solve(cards: &[Card]) -> Result<Vec<Card>> {
    let mut solver = Solver::new(usize::MAX);
    Ok(solver.solve(cards)?.solution)
}

#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Cards in play order, tableau removals and stock draws interleaved;
    /// empty means proven unsolvable.
    pub solution: Vec<Card>,
    /// Distinct states expanded.
    pub states: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct Solver {
    max_states: usize,
    dead: FxHashSet<State>,
    states: usize,
}

impl Solver {
    pub fn new(max_states: usize) -> Self {
        Self {
            max_states,
            dead: FxHashSet::default(),
            states: 0,
        }
    }

    pub fn solve(&mut self, cards: &[Card]) -> Result<SolveResult> {
        let timer = Instant::now();
        let initial = State::initial_state(cards)?;
        self.dead.clear();
        self.states = 0;

        let mut path = Vec::with_capacity(52);
        if !self.search(&initial, &mut path)? {
            path.clear();
        }

        Ok(SolveResult {
            solution: path,
            states: self.states,
            elapsed: timer.elapsed(),
        })
    }

    // Returns true once a cleared tableau is reached; the cards pushed onto
    // `path` along the way are the winning line. A state whose successors all
    // come back dead is memoized so that move-order permutations reaching it
    // again are cut off without re-expansion.
    fn search(&mut self, state: &State, path: &mut Vec<Card>) -> Result<bool> {
        if state.is_tableau_empty() {
            return Ok(true);
        }
        if self.dead.contains(state) {
            return Ok(false);
        }
        self.states += 1;
        if self.states >= self.max_states {
            bail!("Unable to settle the game; reached max states {}", self.max_states);
        }

        for next in state.successors() {
            path.push(next.waste_card);
            if self.search(&next, path)? {
                return Ok(true);
            }
            path.pop();
        }

        self.dead.insert(state.clone());
        Ok(false)
    }
}

/// Lays the winning line out in padded rows of ten plays.
pub fn format_solution(cards: &[Card]) -> String {
    let mut output = String::new();
    for chunk in cards.chunks(10) {
        let row: Vec<String> = chunk.iter().map(|card| card.to_string()).collect();
        output.push_str(&row.join(" "));
        output.push('\n');
    }
    output
}
