use crate::core::grid::Grid;
use crate::core::models::Cell::{Crate, CrateOnTarget, Floor, Mover, MoverOnTarget, Target, Wall};
use crate::core::models::{BlockReason, Direction, MoveKind, MoveOutcome, Position};

/// Attempts to move the mover one step in `direction`, pushing a crate if one is in the way.
///
/// On success the grid is updated in place and the new mover position is returned.
/// A blocked move leaves the grid untouched, including when `mover` does not
/// point at the mover's cell.
pub fn resolve(grid: &mut Grid, mover: Position, direction: Direction) -> MoveOutcome {
    if !grid.get(&mover).is_some_and(|c| c.has_mover()) {
        return MoveOutcome::Blocked(BlockReason::NoMover);
    }

    let dir = direction.unit();
    let target = mover + dir;

    let Some(dest) = grid.get(&target) else {
        return MoveOutcome::Blocked(BlockReason::OutOfBounds);
    };

    let change = match dest {
        Wall | Mover | MoverOnTarget => return MoveOutcome::Blocked(BlockReason::Wall),
        Floor => {
            grid[&target] = Mover;
            MoveKind::Walk
        }
        Target => {
            grid[&target] = MoverOnTarget;
            MoveKind::Walk
        }
        Crate | CrateOnTarget => {
            let crate_dest = mover + dir * 2;
            let change = match grid.get(&crate_dest) {
                Some(Floor) => {
                    grid[&crate_dest] = Crate;
                    MoveKind::Push
                }
                Some(Target) => {
                    grid[&crate_dest] = CrateOnTarget;
                    if dest == Crate { MoveKind::CrateCompleted } else { MoveKind::Push }
                }
                // walls, other crates and the grid edge all stop the push
                _ => return MoveOutcome::Blocked(BlockReason::CrateStuck),
            };

            // mover takes the vacated crate spot, keeping its target-ness
            grid[&target] = if dest == CrateOnTarget { MoverOnTarget } else { Mover };
            change
        }
    };

    grid[&mover] = if grid[&mover] == MoverOnTarget { Target } else { Floor };

    MoveOutcome::NewPosition { to: target, change }
}
