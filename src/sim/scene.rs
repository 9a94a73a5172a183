//! Scene state and the per-frame loop body

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::circle::Circle;
use super::collision::{CollisionPolicy, resolve_collisions};
use super::color::Color;
use super::spawn::generate_circles;
use crate::config::SceneConfig;
use crate::render::{Style, Surface};

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// 1-based index of the frame just run
    pub frame: u64,
    /// Velocity components flipped at the edges this frame
    pub bounces: usize,
    /// Pairs overlapping after the move
    pub overlapping_pairs: usize,
}

/// The animated circles plus the rules for drawing and recoloring them
#[derive(Debug, Clone)]
pub struct Scene {
    /// Fixed for the lifetime of the scene, in draw and pair-check order
    pub circles: Vec<Circle>,
    pub style: Style,
    pub policy: CollisionPolicy,
    pub collision_color: Color,
    frame: u64,
    last_overlapping: usize,
}

impl Scene {
    /// Build a scene around existing circles
    pub fn with_circles(circles: Vec<Circle>, config: &SceneConfig) -> Self {
        Self {
            circles,
            style: Style::from(config),
            policy: config.collision_policy,
            collision_color: config.collision_color,
            frame: 0,
            last_overlapping: 0,
        }
    }

    /// Spawn `config.circle_count` random circles inside `bounds`
    pub fn generate(config: &SceneConfig, bounds: Vec2, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let circles = generate_circles(config.circle_count, bounds, config, &mut rng);
        log::info!(
            "Generated {} circles in {}x{} (seed {})",
            circles.len(),
            bounds.x,
            bounds.y,
            seed
        );
        Self::with_circles(circles, config)
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Run one frame: clear, draw and move every circle, then recolor
    /// overlapping pairs for the next draw
    pub fn frame(&mut self, surface: &mut dyn Surface) -> FrameStats {
        surface.clear();

        let mut bounces = 0;
        for circle in &mut self.circles {
            let reflection = circle.update(surface, &self.style);
            bounces += reflection.x as usize + reflection.y as usize;
        }

        let overlapping_pairs = resolve_collisions(&mut self.circles, self.policy, self.collision_color);
        self.frame += 1;

        if overlapping_pairs != self.last_overlapping {
            log::debug!(
                "frame {}: {} overlapping pair(s) (was {})",
                self.frame,
                overlapping_pairs,
                self.last_overlapping
            );
            self.last_overlapping = overlapping_pairs;
        }
        log::trace!("frame {}: {} bounce(s)", self.frame, bounces);

        FrameStats {
            frame: self.frame,
            bounces,
            overlapping_pairs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};

    const BLUE: Color = Color::rgb(0, 0, 255);
    const GREEN: Color = Color::rgb(0, 255, 0);

    #[test]
    fn test_frame_clears_then_draws_each_circle() {
        let config = SceneConfig::default();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut scene = Scene::generate(&config, surface.size(), 1);

        let stats = scene.frame(&mut surface);
        assert_eq!(stats.frame, 1);
        assert_eq!(scene.frame_count(), 1);
        assert_eq!(surface.commands().first(), Some(&DrawCommand::Clear));
        assert_eq!(surface.circles().count(), config.circle_count);

        let labels: Vec<_> = surface.labels().collect();
        let expected: Vec<_> = (1..=config.circle_count).map(|i| format!("C{i}")).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_collision_color_shows_on_next_frame() {
        let config = SceneConfig::default();
        let circles = vec![
            Circle::new("C1", Vec2::new(100.0, 100.0), 10.0, BLUE, 1.0),
            Circle::new("C2", Vec2::new(110.0, 100.0), 10.0, GREEN, 1.0),
        ];
        let mut scene = Scene::with_circles(circles, &config);
        let mut surface = RecordingSurface::new(400.0, 400.0);

        // First frame draws original colors, then detects the overlap
        let stats = scene.frame(&mut surface);
        assert_eq!(stats.overlapping_pairs, 1);
        assert!(surface.circles().all(|(_, _, color)| color != config.collision_color));

        scene.frame(&mut surface);
        assert!(surface.circles().all(|(_, _, color)| color == config.collision_color));
    }

    #[test]
    fn test_bounces_are_counted() {
        let config = SceneConfig::default();
        let mut circle = Circle::new("C1", Vec2::new(99.0, 50.0), 5.0, BLUE, 2.0);
        circle.vel = Vec2::new(2.0, 0.5);
        let mut scene = Scene::with_circles(vec![circle], &config);
        let mut surface = RecordingSurface::new(100.0, 100.0);

        let stats = scene.frame(&mut surface);
        assert_eq!(stats.bounces, 1);
        assert_eq!(scene.circles[0].vel.x, -2.0);
        assert_eq!(stats.overlapping_pairs, 0);
    }

    #[test]
    fn test_collection_is_stable_over_many_frames() {
        let config = SceneConfig::default();
        let mut surface = RecordingSurface::new(640.0, 480.0);
        let mut scene = Scene::generate(&config, surface.size(), 99);
        let labels: Vec<_> = scene.circles.iter().map(|c| c.label.clone()).collect();

        for _ in 0..1000 {
            scene.frame(&mut surface);
        }

        assert_eq!(scene.frame_count(), 1000);
        let after: Vec<_> = scene.circles.iter().map(|c| c.label.clone()).collect();
        assert_eq!(labels, after);
        for c in &scene.circles {
            assert!(c.pos.x >= -c.radius && c.pos.x <= 640.0 + c.radius);
            assert!(c.pos.y >= -c.radius && c.pos.y <= 480.0 + c.radius);
            assert_eq!(c.vel.abs(), Vec2::splat(c.speed()));
        }
    }
}
