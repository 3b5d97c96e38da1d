use crate::geometry::Direction;

/// Map a pointer/touch position to a direction by comparing it with the
/// centre of a `width` x `height` viewport. The dominant axis wins; ties
/// go to the vertical axis.
pub fn direction_by_touch(x: f32, y: f32, width: f32, height: f32) -> Direction {
    let dx = x - width / 2.0;
    let dy = y - height / 2.0;
    if dx.abs() > dy.abs() {
        if dx < 0.0 { Direction::Left } else { Direction::Right }
    } else if dy < 0.0 {
        Direction::Up
    } else {
        Direction::Down
    }
}
