//! The circle entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::circles_overlap;
use super::color::Color;
use crate::render::{Style, Surface};

/// Which velocity components flipped during a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// A labelled, outlined circle moving at constant speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub label: String,
    pub pos: Vec2,
    /// Per-frame displacement; only the signs ever change
    pub vel: Vec2,
    pub radius: f32,
    /// Current outline color (collision color while overlapping)
    pub color: Color,
    original_color: Color,
    speed: f32,
}

impl Circle {
    /// Create a circle heading right and down at `speed` pixels/frame on each axis
    pub fn new(label: impl Into<String>, pos: Vec2, radius: f32, color: Color, speed: f32) -> Self {
        debug_assert!(radius > 0.0, "radius must be positive");
        debug_assert!(speed > 0.0, "speed must be positive");
        Self {
            label: label.into(),
            pos,
            vel: Vec2::splat(speed),
            radius,
            color,
            original_color: color,
            speed,
        }
    }

    /// Color assigned at creation
    pub fn original_color(&self) -> Color {
        self.original_color
    }

    /// Scalar speed the initial velocity was derived from
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Outline at the current position and overlay the label
    pub fn draw(&self, surface: &mut dyn Surface, style: &Style) {
        surface.fill_text(&self.label, self.pos, style.label_color, &style.label_font);
        surface.stroke_circle(self.pos, self.radius, self.color, style.stroke_width);
    }

    /// Draw, then advance within the surface bounds
    pub fn update(&mut self, surface: &mut dyn Surface, style: &Style) -> Reflection {
        self.draw(surface, style);
        self.advance(surface.size())
    }

    /// Move by one velocity step and reflect off the edges of `bounds`
    ///
    /// The position is moved first and checked afterwards, so a circle can
    /// overshoot an edge by up to one step before it turns around.
    pub fn advance(&mut self, bounds: Vec2) -> Reflection {
        let mut reflection = Reflection::default();

        self.pos.x += self.vel.x;
        if self.pos.x + self.radius > bounds.x || self.pos.x - self.radius < 0.0 {
            self.vel.x = -self.vel.x;
            reflection.x = true;
        }

        self.pos.y += self.vel.y;
        if self.pos.y + self.radius > bounds.y || self.pos.y - self.radius < 0.0 {
            self.vel.y = -self.vel.y;
            reflection.y = true;
        }

        reflection
    }

    /// True if the two circles strictly overlap
    pub fn overlaps(&self, other: &Circle) -> bool {
        circles_overlap(self.pos, self.radius, other.pos, other.radius)
    }

    /// Paint both circles `collision_color` if they overlap, otherwise
    /// restore both to their original colors. Returns whether they overlap.
    pub fn check_collision(&mut self, other: &mut Circle, collision_color: Color) -> bool {
        let hit = self.overlaps(other);
        if hit {
            self.color = collision_color;
            other.color = collision_color;
        } else {
            self.reset_color();
            other.reset_color();
        }
        hit
    }

    pub fn reset_color(&mut self) {
        self.color = self.original_color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};
    use proptest::prelude::*;

    const BLUE: Color = Color::rgb(0, 0, 255);
    const GREEN: Color = Color::rgb(0, 255, 0);

    #[test]
    fn test_reflects_off_right_edge() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let mut circle = Circle::new("C1", Vec2::new(99.0, 50.0), 5.0, BLUE, 2.0);
        circle.vel = Vec2::new(2.0, 0.0);

        let reflection = circle.update(&mut surface, &Style::default());
        assert_eq!(circle.vel.x, -2.0);
        assert!(reflection.x);
        assert!(!reflection.y);
        // No clamping: the circle overshoots first
        assert_eq!(circle.pos.x, 101.0);
    }

    #[test]
    fn test_reflects_off_top_edge() {
        let mut circle = Circle::new("C1", Vec2::new(50.0, 6.0), 5.0, BLUE, 3.0);
        circle.vel = Vec2::new(0.0, -3.0);

        let reflection = circle.advance(Vec2::new(100.0, 100.0));
        assert_eq!(reflection, Reflection { x: false, y: true });
        assert_eq!(circle.vel.y, 3.0);
    }

    #[test]
    fn test_no_reflection_inside_bounds() {
        let mut circle = Circle::new("C1", Vec2::new(50.0, 50.0), 10.0, BLUE, 1.5);
        let reflection = circle.advance(Vec2::new(100.0, 100.0));
        assert!(!reflection.any());
        assert_eq!(circle.pos, Vec2::new(51.5, 51.5));
        assert_eq!(circle.vel, Vec2::splat(1.5));
    }

    #[test]
    fn test_update_draws_before_moving() {
        let mut surface = RecordingSurface::new(200.0, 200.0);
        let mut circle = Circle::new("C7", Vec2::new(40.0, 40.0), 20.0, GREEN, 2.0);
        let style = Style::default();

        circle.update(&mut surface, &style);

        let circles: Vec<_> = surface.circles().collect();
        assert_eq!(circles, vec![(Vec2::new(40.0, 40.0), 20.0, GREEN)]);
        assert_eq!(surface.labels().collect::<Vec<_>>(), vec!["C7"]);
        assert!(surface.commands().iter().any(|cmd| matches!(
            cmd,
            DrawCommand::Text { center, font, .. } if *center == Vec2::new(40.0, 40.0) && font == "20px Arial"
        )));
        assert_eq!(circle.pos, Vec2::new(42.0, 42.0));
    }

    #[test]
    fn test_collision_and_restore() {
        let mut a = Circle::new("C1", Vec2::new(0.0, 0.0), 10.0, BLUE, 1.0);
        let mut b = Circle::new("C2", Vec2::new(10.0, 0.0), 10.0, GREEN, 1.0);

        assert!(a.check_collision(&mut b, Color::RED));
        assert_eq!(a.color, Color::RED);
        assert_eq!(b.color, Color::RED);

        b.pos = Vec2::new(30.0, 0.0);
        assert!(!a.check_collision(&mut b, Color::RED));
        assert_eq!(a.color, BLUE);
        assert_eq!(b.color, GREEN);
        assert_eq!(a.original_color(), BLUE);
    }

    #[test]
    fn test_touching_is_not_colliding() {
        let mut a = Circle::new("C1", Vec2::new(0.0, 0.0), 10.0, BLUE, 1.0);
        let mut b = Circle::new("C2", Vec2::new(20.0, 0.0), 10.0, GREEN, 1.0);
        assert!(!a.check_collision(&mut b, Color::RED));
        assert_eq!(a.color, BLUE);
    }

    proptest! {
        #[test]
        fn velocity_magnitude_is_invariant(
            w in 200.0f32..2000.0,
            h in 200.0f32..2000.0,
            radius in 20.0f32..50.0,
            speed in 1.0f32..3.0,
            fx in 0.0f32..1.0,
            fy in 0.0f32..1.0,
            steps in 0usize..500,
        ) {
            let pos = Vec2::new(radius + fx * (w - 2.0 * radius), radius + fy * (h - 2.0 * radius));
            let mut circle = Circle::new("C1", pos, radius, BLUE, speed);
            let bounds = Vec2::new(w, h);
            for _ in 0..steps {
                let before = circle.vel;
                let reflection = circle.advance(bounds);
                prop_assert_eq!(circle.vel.x.abs(), speed);
                prop_assert_eq!(circle.vel.y.abs(), speed);
                // Sign changes exactly when the step reflected
                prop_assert_eq!(before.x != circle.vel.x, reflection.x);
                prop_assert_eq!(before.y != circle.vel.y, reflection.y);
            }
        }

        #[test]
        fn position_stays_near_bounds(
            w in 200.0f32..2000.0,
            h in 200.0f32..2000.0,
            radius in 20.0f32..50.0,
            speed in 1.0f32..3.0,
            fx in 0.0f32..1.0,
            fy in 0.0f32..1.0,
            steps in 0usize..2000,
        ) {
            let pos = Vec2::new(radius + fx * (w - 2.0 * radius), radius + fy * (h - 2.0 * radius));
            let mut circle = Circle::new("C1", pos, radius, BLUE, speed);
            let bounds = Vec2::new(w, h);
            for _ in 0..steps {
                circle.advance(bounds);
                prop_assert!(circle.pos.x >= -radius && circle.pos.x <= w + radius);
                prop_assert!(circle.pos.y >= -radius && circle.pos.y <= h + radius);
            }
        }

        #[test]
        fn check_collision_is_symmetric(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0, ar in 1.0f32..50.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0, br in 1.0f32..50.0,
        ) {
            let a = Circle::new("A", Vec2::new(ax, ay), ar, BLUE, 1.0);
            let b = Circle::new("B", Vec2::new(bx, by), br, GREEN, 1.0);

            let (mut a1, mut b1) = (a.clone(), b.clone());
            let (mut a2, mut b2) = (a.clone(), b.clone());
            let hit1 = a1.check_collision(&mut b1, Color::RED);
            let hit2 = b2.check_collision(&mut a2, Color::RED);

            prop_assert_eq!(hit1, hit2);
            prop_assert_eq!(a1.color, a2.color);
            prop_assert_eq!(b1.color, b2.color);
            let expected = a.pos.distance(b.pos) < ar + br;
            prop_assert_eq!(hit1, expected);
        }
    }
}
