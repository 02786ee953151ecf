//! Slot addressing and the landing capture rule.
//!
//! A slot is one addressable location on the board: a seed pit or a goal.
//! A `Slot` handle pairs the address with the value the board held when
//! the handle was created. That snapshot is not refreshed by later writes
//! through other handles; the capture rule reads the landing pit's
//! pre-landing count through it.

use super::player::Player;
use super::state::Board;

/// Address of one slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    /// A seed pit; `index` runs along the owner's row in sowing order.
    Pit { owner: Player, index: usize },
    /// A player's goal.
    Goal { owner: Player },
}

impl SlotId {
    /// Returns the player owning this slot.
    pub fn owner(self) -> Player {
        match self {
            SlotId::Pit { owner, .. } => owner,
            SlotId::Goal { owner } => owner,
        }
    }
}

/// A slot handle carrying the value observed at creation time.
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub id: SlotId,
    /// Board value when the handle was created; stays fixed across later
    /// writes to the board.
    pub value: u32,
}

impl Board {
    /// Creates a handle for `id`, snapshotting its current value.
    pub fn slot(&self, id: SlotId) -> Slot {
        Slot {
            id,
            value: self.read(id),
        }
    }

    /// Reads the current value of a slot.
    ///
    /// Panics if a pit index is out of range.
    pub fn read(&self, id: SlotId) -> u32 {
        match id {
            SlotId::Pit { owner, index } => self.pits[owner.index()][index],
            SlotId::Goal { owner } => self.goals[owner.index()],
        }
    }

    pub(crate) fn write(&mut self, id: SlotId, value: u32) {
        match id {
            SlotId::Pit { owner, index } => self.pits[owner.index()][index] = value,
            SlotId::Goal { owner } => self.goals[owner.index()] = value,
        }
    }
}

impl Slot {
    /// Applies the landing rule to the slot that received the final seed.
    ///
    /// Landing in the mover's goal banks the seed and nothing more.
    /// Landing in a pit captures that pit and its mirror into the mover's
    /// goal iff the pit is on the mover's side, held no seeds before the
    /// landing, and the mirror pit currently holds seeds.
    pub fn capture(&self, board: &mut Board, mover: Player) {
        let (owner, index) = match self.id {
            SlotId::Pit { owner, index } => (owner, index),
            SlotId::Goal { .. } => return,
        };

        // self.value is the landing pit's count before the final seed fell.
        if owner != mover || self.value != 0 {
            return;
        }

        let mirror = board.slot(SlotId::Pit {
            owner: owner.opponent(),
            index: board.row_len() - 1 - index,
        });
        if mirror.value == 0 {
            return;
        }

        let landed = board.read(self.id);
        let goal = SlotId::Goal { owner: mover };
        board.write(goal, board.read(goal) + landed + mirror.value);
        board.write(self.id, 0);
        board.write(mirror.id, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pit(owner: Player, index: usize) -> SlotId {
        SlotId::Pit { owner, index }
    }

    #[test]
    fn snapshot_is_not_refreshed_by_later_writes() {
        let mut board = Board::new([vec![3, 0], vec![0, 0]], [0, 0]).unwrap();
        let slot = board.slot(pit(Player::South, 0));
        board.write(pit(Player::South, 0), 7);
        assert_eq!(slot.value, 3);
        assert_eq!(board.read(pit(Player::South, 0)), 7);
    }

    #[test]
    fn landing_on_own_empty_pit_captures_mirror() {
        // South's pit 1 just received its final seed (0 -> 1); the mirror
        // pit is North's pit 2 on a 4-pit row.
        let mut board = Board::new([vec![0, 1, 0, 0], vec![0, 0, 5, 0]], [2, 0]).unwrap();
        let last = Slot {
            id: pit(Player::South, 1),
            value: 0,
        };
        last.capture(&mut board, Player::South);

        assert_eq!(board.pit(Player::South, 1), 0);
        assert_eq!(board.pit(Player::North, 2), 0);
        assert_eq!(board.goal(Player::South), 8);
        assert_eq!(board.goal(Player::North), 0);
    }

    #[test]
    fn no_capture_on_opponent_side() {
        let mut board = Board::new([vec![0, 0, 5, 0], vec![0, 1, 0, 0]], [0, 0]).unwrap();
        let last = Slot {
            id: pit(Player::North, 1),
            value: 0,
        };
        last.capture(&mut board, Player::South);

        assert_eq!(board.pit(Player::North, 1), 1);
        assert_eq!(board.pit(Player::South, 2), 5);
        assert_eq!(board.goal(Player::South), 0);
    }

    #[test]
    fn no_capture_when_mirror_is_empty() {
        let mut board = Board::new([vec![0, 1, 0, 0], vec![0, 0, 0, 0]], [0, 0]).unwrap();
        let last = Slot {
            id: pit(Player::South, 1),
            value: 0,
        };
        last.capture(&mut board, Player::South);

        assert_eq!(board.pit(Player::South, 1), 1);
        assert_eq!(board.goal(Player::South), 0);
    }

    #[test]
    fn no_capture_when_pit_already_held_seeds() {
        let mut board = Board::new([vec![0, 3, 0, 0], vec![0, 0, 5, 0]], [0, 0]).unwrap();
        let last = Slot {
            id: pit(Player::South, 1),
            value: 2,
        };
        last.capture(&mut board, Player::South);

        assert_eq!(board.pit(Player::South, 1), 3);
        assert_eq!(board.pit(Player::North, 2), 5);
        assert_eq!(board.goal(Player::South), 0);
    }

    #[test]
    fn landing_in_goal_is_a_no_op() {
        let mut board = Board::new([vec![0, 0], vec![4, 4]], [3, 0]).unwrap();
        let last = Slot {
            id: SlotId::Goal {
                owner: Player::South,
            },
            value: 2,
        };
        last.capture(&mut board, Player::South);

        assert_eq!(board.goal(Player::South), 3);
        assert_eq!(board.row(Player::North), &[4, 4]);
    }
}
