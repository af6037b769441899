mod spawn;

use board::domain::core_types::Position;

fn pos(x: i32, y: i32) -> Position {
    Position { x, y }
}
