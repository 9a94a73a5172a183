//! Pairwise overlap detection and collision coloring
//!
//! Every unordered pair (i, j), i < j, is tested each frame. There is no
//! broad phase; scenes are a handful of circles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::circle::Circle;
use super::color::Color;

/// How overlapping pairs recolor the circles involved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// A circle overlapping any neighbour shows the collision color
    #[default]
    AnyContactWins,
    /// Each pair check overwrites both colors, so the last pair checked for
    /// a circle decides its color (colors can flicker with 3+ circles)
    LastPairWins,
}

/// Strict overlap test: centers closer than the sum of the radii
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// Mutable references to two distinct elements, `i < j`
fn pair_mut(circles: &mut [Circle], i: usize, j: usize) -> (&mut Circle, &mut Circle) {
    debug_assert!(i < j);
    let (head, tail) = circles.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Reset colors, then recolor every overlapping pair under `policy`.
///
/// Returns the number of overlapping pairs.
pub fn resolve_collisions(
    circles: &mut [Circle],
    policy: CollisionPolicy,
    collision_color: Color,
) -> usize {
    for circle in circles.iter_mut() {
        circle.reset_color();
    }

    let mut overlapping = 0;
    for i in 0..circles.len() {
        for j in (i + 1)..circles.len() {
            let (a, b) = pair_mut(circles, i, j);
            let hit = match policy {
                CollisionPolicy::LastPairWins => a.check_collision(b, collision_color),
                CollisionPolicy::AnyContactWins => {
                    let hit = a.overlaps(b);
                    if hit {
                        a.color = collision_color;
                        b.color = collision_color;
                    }
                    hit
                }
            };
            if hit {
                overlapping += 1;
            }
        }
    }
    overlapping
}
