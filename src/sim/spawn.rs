//! Randomized circle generation

use glam::Vec2;
use rand::Rng;

use super::circle::Circle;
use super::color::Color;
use crate::config::SceneConfig;

/// Uniform value in `[min, min + span)`; an empty span yields `min`
fn sample<R: Rng + ?Sized>(rng: &mut R, min: f32, span: f32) -> f32 {
    min + rng.random::<f32>() * span.max(0.0)
}

/// Generate `n` circles labelled `C1..Cn`, each fully inside `bounds`
/// (when the bounds are larger than its diameter)
pub fn generate_circles<R: Rng + ?Sized>(
    n: usize,
    bounds: Vec2,
    config: &SceneConfig,
    rng: &mut R,
) -> Vec<Circle> {
    (0..n)
        .map(|i| {
            let radius = sample(rng, config.min_radius, config.max_radius - config.min_radius);
            let x = sample(rng, radius, bounds.x - radius * 2.0);
            let y = sample(rng, radius, bounds.y - radius * 2.0);
            let color = Color::random(rng);
            let speed = sample(rng, config.min_speed, config.max_speed - config.min_speed);

            let mut circle = Circle::new(format!("C{}", i + 1), Vec2::new(x, y), radius, color, speed);
            if config.randomize_direction {
                if rng.random_bool(0.5) {
                    circle.vel.x = -circle.vel.x;
                }
                if rng.random_bool(0.5) {
                    circle.vel.y = -circle.vel.y;
                }
            }
            circle
        })
        .collect()
}
