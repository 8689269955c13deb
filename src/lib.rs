//! Decides whether a TriPeaks solitaire deal can be fully cleared and, when it
//! can, produces a legal sequence of plays that clears it.

pub mod card;
pub mod deck;
pub mod layout;
pub mod solver;
pub mod state;
