//! Terminal detection and weighted-random transition resolution.
//!
//! A room resolves automatically only when every one of its transitions
//! carries a parseable integer weight and the weights sum to something
//! positive. Every other shape is the normal "ask the player" signal,
//! never an error.

use rand::Rng;
use rand::rngs::StdRng;

use crate::story::{Ending, Transition};

/// Sum of the weights, if every transition is weighted with a parseable
/// non-negative integer and the sum is positive.
///
/// `None` covers the whole "no automatic result" family: an empty
/// sequence, any terminal or plain transition, any weight that fails to
/// parse, and an all-zero sum.
pub fn total_weight(transitions: &[Transition]) -> Option<u64> {
    if transitions.is_empty() {
        return None;
    }
    let mut total: u64 = 0;
    for transition in transitions {
        let weight: u64 = transition.weight()?.parse().ok()?;
        total = total.checked_add(weight)?;
    }
    if total == 0 { None } else { Some(total) }
}

/// Target of the first transition whose weight pushes the running sum
/// *strictly* above `draw`, scanning in sequence order.
///
/// `draw` is expected in `[0, total_weight)`. The strict comparison is
/// what keeps a zero-weight transition unreachable at every boundary:
/// with weights `[1, 0]` and a draw of 0, the running sum after the
/// first entry is 1, which already exceeds 0.
pub fn pick_weighted(transitions: &[Transition], draw: u64) -> Option<&str> {
    let mut running: u64 = 0;
    for transition in transitions {
        running += transition.weight()?.parse::<u64>().ok()?;
        if running > draw {
            return transition.target();
        }
    }
    None
}

/// Resolve a transition sequence by weighted random draw.
///
/// Draws a uniform integer in `[0, total_weight)` and scans with
/// [`pick_weighted`]. `None` means the room needs a manual choice.
pub fn auto_resolve<'a>(transitions: &'a [Transition], rng: &mut StdRng) -> Option<&'a str> {
    let total = total_weight(transitions)?;
    let draw = rng.random_range(0..total);
    pick_weighted(transitions, draw)
}

/// The ending of a terminal room, if this sequence is terminal.
///
/// A terminal transition is always the sole member of its sequence, so
/// only the first entry needs inspecting.
pub fn terminal(transitions: &[Transition]) -> Option<Ending> {
    match transitions.first() {
        Some(Transition::Terminal(ending)) => Some(*ending),
        _ => None,
    }
}
