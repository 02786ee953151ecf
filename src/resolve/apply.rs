//! Move application.
//!
//! Turns a board and a chosen pit into the successor board: pick up the
//! pit's seeds, sow them one per slot along the traversal, and apply the
//! landing rule to the slot that received the final seed. The input board
//! is never touched; all mutation happens on a private copy.

use crate::board::player::Player;
use crate::board::state::Board;

/// Resolves a move and returns the successor board.
///
/// Deterministic: identical `(board, from, mover)` inputs always produce
/// the same board. Panics if `from` is out of range; `Board::plan_move`
/// is the checked entry point.
pub fn next_board(board: &Board, from: usize, mover: Player) -> Board {
    let mut next = board.clone();
    let mut seq = next.sowing(from, mover);

    // Pick up the chosen pit. The snapshot keeps the pre-move seed count.
    let picked = next.slot(seq.next_slot());
    let seeds = picked.value;
    next.write(picked.id, 0);

    let mut last = picked;
    for _ in 0..seeds {
        let slot = next.slot(seq.next_slot());
        next.write(slot.id, slot.value + 1);
        last = slot;
    }

    // An empty pick-up sows nothing, so no seed landed anywhere and the
    // landing rule has nothing to apply to.
    if seeds > 0 {
        last.capture(&mut next, mover);
    }

    next
}
