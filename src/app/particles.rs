use leptos::prelude::*;

/// Placement strategies for the decorative particle layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticlePattern {
    Random,
    Grid,
    Spiral,
    Neural,
}

// Layout parameters are configuration data, keyed off the pattern where it
// matters and shared otherwise.
const SIZE_RANGE_PX: (f64, f64) = (2.0, 5.0);
const DURATION_RANGE_MS: (f64, f64) = (8_000.0, 15_000.0);
const MAX_DELAY_MS: f64 = 5_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub opacity: f64,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

/// Deterministic stand-in for random placement: a cheap sine hash over the
/// seed and particle index. Same seed, same field - no per-render shimmer
/// and no hydration mismatch between server and client markup.
fn jitter(seed: u64, index: usize, salt: u64) -> f64 {
    let mixed = seed
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add((index as u64).wrapping_mul(1_442_695_040_888_963_407))
        .wrapping_add(salt.wrapping_mul(2_862_933_555_777_941_757));
    let t = (mixed % 100_000) as f64 / 100_000.0;
    ((t * std::f64::consts::TAU).sin() * 43_758.545).fract().abs()
}

fn lerp(range: (f64, f64), t: f64) -> f64 {
    range.0 + (range.1 - range.0) * t
}

/// Computes the particle field for a pattern. Pure; positions are clamped
/// to the section's percent box.
pub fn particle_layout(pattern: ParticlePattern, count: usize, seed: u64) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let (x, y) = match pattern {
                ParticlePattern::Random => {
                    (jitter(seed, i, 1) * 100.0, jitter(seed, i, 2) * 100.0)
                }
                ParticlePattern::Grid => {
                    let cols = (count as f64).sqrt().ceil().max(1.0) as usize;
                    let rows = count.div_ceil(cols);
                    (
                        (i % cols) as f64 / cols as f64 * 100.0,
                        (i / cols) as f64 / rows as f64 * 100.0,
                    )
                }
                ParticlePattern::Spiral => {
                    let angle = i as f64 * 0.5;
                    let radius = i as f64 / count as f64 * 40.0;
                    (50.0 + angle.cos() * radius, 50.0 + angle.sin() * radius)
                }
                ParticlePattern::Neural => {
                    let node = i % 12;
                    let layer = i / 12;
                    (
                        20.0 + (node % 4) as f64 * 20.0 + jitter(seed, i, 1) * 10.0,
                        20.0 + layer as f64 * 25.0 + jitter(seed, i, 2) * 10.0,
                    )
                }
            };
            Particle {
                left_pct: x.clamp(0.0, 100.0),
                top_pct: y.clamp(0.0, 100.0),
                size_px: lerp(SIZE_RANGE_PX, jitter(seed, i, 3)),
                opacity: 0.3 + jitter(seed, i, 4) * 0.6,
                delay_ms: (jitter(seed, i, 5) * MAX_DELAY_MS) as u32,
                duration_ms: lerp(DURATION_RANGE_MS, jitter(seed, i, 6)) as u32,
            }
        })
        .collect()
}

/// Decorative floating-dot backdrop for a section. Purely presentational;
/// hidden from assistive tech and mouse events.
#[component]
pub fn ParticleField(
    #[prop(default = ParticlePattern::Random)] pattern: ParticlePattern,
    #[prop(default = 15)] count: usize,
    #[prop(default = 7)] seed: u64,
) -> impl IntoView {
    let particles = particle_layout(pattern, count, seed);

    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none opacity-20" aria-hidden="true">
            {particles
                .into_iter()
                .map(|p| {
                    view! {
                        <div
                            class="absolute rounded-full bg-purple-500/40 particle-pulse"
                            style=format!(
                                "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; opacity: {:.2}; animation-delay: {}ms; animation-duration: {}ms;",
                                p.left_pct,
                                p.top_pct,
                                p.size_px,
                                p.size_px,
                                p.opacity,
                                p.delay_ms,
                                p.duration_ms,
                            )
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_deterministic_for_a_seed() {
        let first = particle_layout(ParticlePattern::Random, 20, 7);
        let second = particle_layout(ParticlePattern::Random, 20, 7);
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_move_the_field() {
        let first = particle_layout(ParticlePattern::Random, 20, 7);
        let second = particle_layout(ParticlePattern::Random, 20, 8);
        assert_ne!(first, second);
    }

    #[test]
    fn test_positions_stay_inside_the_section() {
        for pattern in [
            ParticlePattern::Random,
            ParticlePattern::Grid,
            ParticlePattern::Spiral,
            ParticlePattern::Neural,
        ] {
            for p in particle_layout(pattern, 50, 42) {
                assert!((0.0..=100.0).contains(&p.left_pct));
                assert!((0.0..=100.0).contains(&p.top_pct));
                assert!(p.size_px >= SIZE_RANGE_PX.0 && p.size_px <= SIZE_RANGE_PX.1);
                assert!(p.opacity >= 0.3 && p.opacity <= 0.9);
            }
        }
    }

    #[test]
    fn test_layout_yields_requested_count() {
        assert_eq!(particle_layout(ParticlePattern::Grid, 13, 1).len(), 13);
        assert!(particle_layout(ParticlePattern::Spiral, 0, 1).is_empty());
    }
}
