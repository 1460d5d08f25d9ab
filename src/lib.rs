//! Heuristic win/draw/loss and goal-trend probabilities for football fixtures.
//! Scores each team from a weighted set of indicators (form, attack, defence, venue and so on),
//! turns the pair of scores into a banded probability triple, and derives total-goals and
//! both-teams-to-score tendencies. A lighter model works from recent results alone.

pub mod data;
pub mod engine;
pub mod file;
pub mod form;
pub mod goals;
pub mod heuristic;
pub mod indicators;
pub mod print;
pub mod probs;
pub mod profile;
pub mod weights;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
