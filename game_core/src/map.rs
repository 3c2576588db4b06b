use glam::Vec2;

/// Which wall of the arena an entity touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// Fixed-size playing field, origin at the top-left corner, y pointing down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Inclusive containment; points on the edge are still inside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// Clamp the top-left corner of a box so the whole box stays inside.
    /// Returns the clamped corner and the horizontal wall that was hit, if any.
    pub fn clamp_box(&self, corner: Vec2, size: Vec2) -> (Vec2, Option<Wall>) {
        let max = Vec2::new(self.width - size.x, self.height - size.y);
        let mut wall = None;
        let mut clamped = corner;

        if clamped.x < 0.0 {
            clamped.x = 0.0;
            wall = Some(Wall::Left);
        }
        if clamped.x > max.x {
            clamped.x = max.x;
            wall = Some(Wall::Right);
        }
        clamped.y = clamped.y.max(0.0).min(max.y);

        (clamped, wall)
    }

    /// Walls a circle of `radius` at `center` currently overlaps, x axis first.
    /// A circle can report both walls of an axis only if it is wider than the arena.
    pub fn walls_touched(&self, center: Vec2, radius: f32) -> Vec<Wall> {
        let mut walls = Vec::new();
        if center.x < radius {
            walls.push(Wall::Left);
        }
        if center.x > self.width - radius {
            walls.push(Wall::Right);
        }
        if center.y < radius {
            walls.push(Wall::Top);
        }
        if center.y > self.height - radius {
            walls.push(Wall::Bottom);
        }
        walls
    }
}
