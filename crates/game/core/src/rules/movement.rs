use crate::config::DEFAULT_MOVE_AP_COST;
use crate::state::{Board, Occupant, Position, Tank, TankId};

use super::MoveError;

/// Single-step movement onto an empty neighbouring cell (diagonals included).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MoveRule {
    pub ap_cost: u32,
}

impl MoveRule {
    pub const fn new(ap_cost: u32) -> Self {
        Self { ap_cost }
    }

    pub fn can_move(&self, board: &Board, tank: &Tank, target: Position) -> Result<(), MoveError> {
        if !tank.is_alive() {
            return Err(MoveError::ActorDestroyed);
        }

        if !board.contains(target) {
            return Err(MoveError::OutOfBounds {
                destination: target,
            });
        }

        let distance = tank.position.distance(target);
        if distance > 1 {
            return Err(MoveError::TooFar {
                from: tank.position,
                destination: target,
                distance,
            });
        }

        if board.is_space_occupied(target)? {
            return Err(MoveError::Occupied {
                destination: target,
            });
        }

        if !tank.has_ap(self.ap_cost) {
            return Err(MoveError::InsufficientAp {
                required: self.ap_cost,
                available: tank.ap,
            });
        }

        Ok(())
    }

    /// Relocates `tank` on the board and charges the move cost.
    pub fn perform_move(
        &self,
        board: &mut Board,
        id: TankId,
        tank: &mut Tank,
        target: Position,
    ) -> Result<(), MoveError> {
        self.can_move(board, tank, target)?;

        board.remove_entity(Occupant::Tank(id), tank.position)?;
        tank.perform_move(target, self.ap_cost);
        board.add_entity(Occupant::Tank(id), target)?;

        Ok(())
    }
}

impl Default for MoveRule {
    fn default() -> Self {
        Self::new(DEFAULT_MOVE_AP_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WallId;

    const ID: TankId = TankId(0);

    fn setup(ap: u32) -> (Board, Tank) {
        let mut board = Board::new(5, 5);
        let mut tank = Tank::new(Position::new(2, 2), "Ryan", None, 0);
        tank.ap = ap;
        board.add_entity(Occupant::Tank(ID), tank.position).unwrap();
        board
            .add_entity(Occupant::Wall(WallId(0)), Position::new(3, 3))
            .unwrap();
        (board, tank)
    }

    #[test]
    fn moves_diagonally_and_charges_ap() {
        let (mut board, mut tank) = setup(2);
        let rule = MoveRule::default();

        rule.perform_move(&mut board, ID, &mut tank, Position::new(1, 1))
            .unwrap();

        assert_eq!(tank.position, Position::new(1, 1));
        assert_eq!(tank.ap, 1);
        assert_eq!(tank.total_moves, 1);
        assert_eq!(board.occupant(Position::new(1, 1)), Ok(Some(Occupant::Tank(ID))));
        assert_eq!(board.occupant(Position::new(2, 2)), Ok(None));
    }

    #[test]
    fn rejects_long_moves() {
        let (board, tank) = setup(5);
        let err = MoveRule::default()
            .can_move(&board, &tank, Position::new(4, 2))
            .unwrap_err();
        assert!(matches!(err, MoveError::TooFar { distance: 2, .. }));
    }

    #[test]
    fn rejects_occupied_destination() {
        let (board, tank) = setup(5);
        let err = MoveRule::default()
            .can_move(&board, &tank, Position::new(3, 3))
            .unwrap_err();
        assert_eq!(
            err,
            MoveError::Occupied {
                destination: Position::new(3, 3)
            }
        );
    }

    #[test]
    fn rejects_without_ap() {
        let (mut board, mut tank) = setup(0);
        let err = MoveRule::default()
            .perform_move(&mut board, ID, &mut tank, Position::new(2, 3))
            .unwrap_err();
        assert_eq!(
            err,
            MoveError::InsufficientAp {
                required: 1,
                available: 0
            }
        );
        assert_eq!(tank.position, Position::new(2, 2));
    }

    #[test]
    fn rejects_off_board_destination() {
        let mut board = Board::new(3, 3);
        let mut tank = Tank::new(Position::new(0, 0), "Edge", None, 0);
        tank.ap = 3;
        board.add_entity(Occupant::Tank(ID), tank.position).unwrap();

        let err = MoveRule::default()
            .can_move(&board, &tank, Position::new(-1, 0))
            .unwrap_err();
        assert!(matches!(err, MoveError::OutOfBounds { .. }));
    }
}
