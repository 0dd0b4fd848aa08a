//! Rejection-sampled placement of star footprints.
//!
//! Each star slot gets a bounded number of attempts to find a position
//! whose [`Footprint`] misses every footprint accepted so far. When the
//! budget runs out the last candidate is kept anyway, so generation always
//! returns exactly `num_stars` stars and always terminates.

use crate::types::{Footprint, Radius, Star, StarFieldParams};
use rand::Rng;
use tracing::{debug, trace};

/// Attempts spent on a single star slot before the fallback kicks in.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Probability that a radius is drawn from the lower half of the range.
const SMALL_RADIUS_BIAS: f64 = 0.7;

/// Result of one placement pass.
///
/// ### Fields
/// - `stars` - The accepted stars, in placement order.
/// - `attempts` - Attempts consumed per star (same order as `stars`),
///   each in `1..=MAX_PLACEMENT_ATTEMPTS`.
/// - `forced` - How many stars were accepted by the fallback while still
///   overlapping an earlier footprint.
#[derive(Debug, Clone, Default)]
pub struct Placement {
    pub stars: Vec<Star>,
    pub attempts: Vec<u32>,
    pub forced: usize,
}

impl Placement {
    pub fn into_stars(self) -> Vec<Star> {
        self.stars
    }
}

/// Samples a uniform value between `a` and `b`, in whichever order they
/// come. A zero-width span returns its single value.
///
/// Non-finite bounds (`inf`, `nan`) do not form a samplable range: the
/// finite bound is returned if there is one, otherwise `0.0`.
fn sample_span(rng: &mut impl Rng, a: f32, b: f32) -> f32 {
    let (lo, hi) = (a.min(b), a.max(b));
    if !(lo.is_finite() && hi.is_finite()) {
        return [a, b].into_iter().find(|v| v.is_finite()).unwrap_or(0.0);
    }
    if lo < hi {
        rng.random_range(lo..=hi)
    } else {
        lo
    }
}

/// Draws an integer radius biased toward smaller stars.
///
/// With probability 0.7 the radius is uniform over
/// `[min_radius, max_radius / 2]`, otherwise over `[min_radius, max_radius]`.
/// An upper bound below `min_radius` is lifted to `min_radius`, so an
/// inverted range collapses to `min_radius` instead of panicking.
///
/// ### Parameters
/// - `params` - Field parameters providing the radius range.
/// - `rng` - Random source.
///
/// ### Returns
/// A radius in `[min_radius, max(min_radius, max_radius)]`.
pub fn sample_radius(params: &StarFieldParams, rng: &mut impl Rng) -> Radius {
    let upper = if rng.random_bool(SMALL_RADIUS_BIAS) {
        params.max_radius / 2
    } else {
        params.max_radius
    };
    let upper = upper.max(params.min_radius);
    rng.random_range(params.min_radius..=upper)
}

/// Samples one candidate star anywhere inside the configured bounds.
pub fn sample_candidate(params: &StarFieldParams, rng: &mut impl Rng) -> Star {
    let x = sample_span(rng, params.min_x, params.max_x);
    let y = sample_span(rng, params.min_y, params.max_y);
    let radius = sample_radius(params, rng);
    Star::new(x, y, radius)
}

/// Places `params.num_stars` stars, keeping per-star attempt statistics.
///
/// For each slot:
///
/// 1. Sample a candidate via [`sample_candidate`].
/// 2. Accept it if its footprint intersects none of the accepted ones.
/// 3. Otherwise retry, up to [`MAX_PLACEMENT_ATTEMPTS`] in total; the last
///    candidate is accepted regardless and counted in `Placement::forced`.
///
/// ### Parameters
/// - `params` - Bounds, radius range and star count.
/// - `rng` - Random source; the same generator yields the same field.
///
/// ### Returns
/// A [`Placement`] holding exactly `num_stars` stars.
pub fn place_stars(params: &StarFieldParams, rng: &mut impl Rng) -> Placement {
    let mut placement = Placement {
        stars: Vec::with_capacity(params.num_stars),
        attempts: Vec::with_capacity(params.num_stars),
        forced: 0,
    };
    // Only needed for the overlap tests; dropped with this frame.
    let mut footprints: Vec<Footprint> = Vec::with_capacity(params.num_stars);

    for slot in 0..params.num_stars {
        let mut attempts = 0;
        let (star, footprint, clear) = loop {
            attempts += 1;
            let candidate = sample_candidate(params, rng);
            let footprint = candidate.footprint();
            let clear = !footprints.iter().any(|f| f.intersects(&footprint));
            trace!(slot, attempts, clear, "placement attempt");

            if clear || attempts >= MAX_PLACEMENT_ATTEMPTS {
                break (candidate, footprint, clear);
            }
        };

        if !clear {
            debug!(
                slot,
                radius = star.radius,
                "placement budget exhausted, keeping overlapping star"
            );
            placement.forced += 1;
        }

        footprints.push(footprint);
        placement.stars.push(star);
        placement.attempts.push(attempts);
    }

    debug!(
        stars = placement.stars.len(),
        forced = placement.forced,
        "star placement finished"
    );
    placement
}

/// Places `params.num_stars` stars and returns only the stars.
///
/// See [`place_stars`] for the algorithm.
pub fn generate_stars(params: &StarFieldParams, rng: &mut impl Rng) -> Vec<Star> {
    place_stars(params, rng).into_stars()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn example_params() -> StarFieldParams {
        StarFieldParams {
            min_x: 0.0,
            max_x: 400.0,
            min_y: 0.0,
            max_y: 400.0,
            min_radius: 5,
            max_radius: 25,
            num_stars: 25,
            star_gap: 20,
        }
    }

    #[test]
    fn example_field_has_requested_count_and_bounds() {
        let params = example_params();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let stars = generate_stars(&params, &mut rng);

        assert_eq!(stars.len(), 25);
        for s in &stars {
            assert!((5..=25).contains(&s.radius), "radius out of range: {s:?}");
            assert!((0.0..=400.0).contains(&s.center.x), "x out of range: {s:?}");
            assert!((0.0..=400.0).contains(&s.center.y), "y out of range: {s:?}");
        }
    }

    #[test]
    fn sampled_radii_stay_in_range() {
        let params = example_params();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let mut saw_large = false;
        for _ in 0..5_000 {
            let r = sample_radius(&params, &mut rng);
            assert!((params.min_radius..=params.max_radius).contains(&r));
            saw_large |= r > params.max_radius / 2;
        }
        // The 30% branch must be reachable.
        assert!(saw_large);
    }

    #[test]
    fn radius_sampling_prefers_small_stars() {
        let params = example_params();
        let mut rng = ChaCha8Rng::seed_from_u64(99);

        let samples = 10_000;
        let small = (0..samples)
            .filter(|_| sample_radius(&params, &mut rng) <= params.max_radius / 2)
            .count();

        // 0.7 + 0.3 * (8 / 21) ≈ 0.81 of draws land in [5, 12].
        let ratio = small as f64 / samples as f64;
        assert!(ratio > 0.75 && ratio < 0.87, "ratio = {ratio}");
    }

    #[test]
    fn narrow_radius_range_does_not_panic() {
        // max_radius / 2 = 4 is below min_radius.
        let params = StarFieldParams {
            min_radius: 5,
            max_radius: 8,
            ..example_params()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1_000 {
            let r = sample_radius(&params, &mut rng);
            assert!((5..=8).contains(&r));
        }

        let inverted = StarFieldParams {
            min_radius: 10,
            max_radius: 4,
            ..example_params()
        };
        assert_eq!(sample_radius(&inverted, &mut rng), 10);
    }

    #[test]
    fn inverted_bounds_sample_between_the_two_values() {
        let params = StarFieldParams {
            min_x: 100.0,
            max_x: 50.0,
            min_y: 20.0,
            max_y: 20.0,
            ..example_params()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let s = sample_candidate(&params, &mut rng);
            assert!((50.0..=100.0).contains(&s.center.x));
            assert_eq!(s.center.y, 20.0);
        }
    }

    #[test]
    fn non_finite_bounds_fall_back_to_finite_values() {
        let params = StarFieldParams {
            min_x: 10.0,
            max_x: f32::INFINITY,
            min_y: f32::NAN,
            max_y: f32::NEG_INFINITY,
            ..example_params()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..50 {
            let s = sample_candidate(&params, &mut rng);
            assert_eq!(s.center, glam::Vec2::new(10.0, 0.0));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert_eq!(sample_span(&mut rng, f32::NAN, f32::NAN), 0.0);
        assert_eq!(sample_span(&mut rng, f32::NAN, 3.0), 3.0);
    }

    #[test]
    fn sparse_field_is_overlap_free() {
        // Few small stars on a large canvas: every slot should find room.
        let params = StarFieldParams {
            max_x: 2_000.0,
            max_y: 2_000.0,
            num_stars: 20,
            ..example_params()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(2024);

        let placement = place_stars(&params, &mut rng);

        assert_eq!(placement.forced, 0);
        let fps: Vec<Footprint> = placement.stars.iter().map(Star::footprint).collect();
        for i in 0..fps.len() {
            for j in (i + 1)..fps.len() {
                assert!(!fps[i].intersects(&fps[j]), "stars {i} and {j} overlap");
            }
        }
    }

    #[test]
    fn exhausted_budget_falls_back_and_terminates() {
        // A single point of canvas: after the first star every candidate
        // overlaps, so each later slot burns its whole budget.
        let params = StarFieldParams {
            min_x: 50.0,
            max_x: 50.0,
            min_y: 50.0,
            max_y: 50.0,
            min_radius: 5,
            max_radius: 5,
            num_stars: 10,
            star_gap: 0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let placement = place_stars(&params, &mut rng);

        assert_eq!(placement.stars.len(), 10);
        assert_eq!(placement.attempts.len(), 10);
        assert_eq!(placement.attempts[0], 1);
        assert!(
            placement.attempts[1..]
                .iter()
                .all(|&a| a == MAX_PLACEMENT_ATTEMPTS)
        );
        assert_eq!(placement.forced, 9);
    }

    #[test]
    fn attempts_never_exceed_budget() {
        let params = StarFieldParams {
            max_x: 60.0,
            max_y: 60.0,
            num_stars: 40,
            ..example_params()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let placement = place_stars(&params, &mut rng);

        assert_eq!(placement.stars.len(), 40);
        assert!(
            placement
                .attempts
                .iter()
                .all(|&a| (1..=MAX_PLACEMENT_ATTEMPTS).contains(&a))
        );
    }

    #[test]
    fn zero_stars_yields_empty_placement() {
        let params = StarFieldParams {
            num_stars: 0,
            ..example_params()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let placement = place_stars(&params, &mut rng);
        assert!(placement.stars.is_empty());
        assert_eq!(placement.forced, 0);
    }

    #[test]
    fn same_seed_gives_same_field() {
        let params = example_params();
        let a = generate_stars(&params, &mut ChaCha8Rng::seed_from_u64(42));
        let b = generate_stars(&params, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
