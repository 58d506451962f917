//! Point-distance collision checks
//!
//! Player and obstacles are treated as points; two entities touch when their
//! centers are strictly closer than the collision distance.

use glam::Vec2;

use super::state::Obstacle;

/// True when `a` and `b` are strictly closer than `threshold`
#[inline]
pub fn within_distance(a: Vec2, b: Vec2, threshold: f32) -> bool {
    a.distance_squared(b) < threshold * threshold
}

/// First obstacle (in slice order) touching `target`
pub fn first_hit(obstacles: &[Obstacle], target: Vec2, threshold: f32) -> Option<&Obstacle> {
    obstacles
        .iter()
        .find(|o| within_distance(o.pos, target, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Direction;

    fn obstacle_at(id: u32, x: f32, y: f32) -> Obstacle {
        Obstacle {
            id,
            pos: Vec2::new(x, y),
            direction: Direction::LeftToRight,
            tint: 0,
        }
    }

    #[test]
    fn test_distance_threshold() {
        let player = Vec2::new(0.0, 0.0);
        assert!(within_distance(player, Vec2::new(10.0, 0.0), 24.0));
        assert!(!within_distance(player, Vec2::new(30.0, 0.0), 24.0));
        // Diagonal: (18, 18) is ~25.5 away
        assert!(!within_distance(player, Vec2::new(18.0, 18.0), 24.0));
        // Exactly on the threshold does not count
        assert!(!within_distance(player, Vec2::new(0.0, 24.0), 24.0));
    }

    #[test]
    fn test_first_hit_skips_distant_obstacles() {
        let obstacles = [
            obstacle_at(1, 200.0, 0.0),
            obstacle_at(2, -5.0, 8.0),
            obstacle_at(3, 3.0, 0.0),
        ];
        let hit = first_hit(&obstacles, Vec2::ZERO, 24.0).unwrap();
        assert_eq!(hit.id, 2);
        assert!(first_hit(&obstacles[..1], Vec2::ZERO, 24.0).is_none());
    }
}
