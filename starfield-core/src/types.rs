use glam::Vec2;

/// Integer radius of a placed star, in canvas units.
pub type Radius = u32;

/// A placed circular region on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub center: Vec2,
    pub radius: Radius,
}

impl Star {
    pub fn new(x: f32, y: f32, radius: Radius) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }

    /// Axis-aligned box of half-extent `radius` around the center.
    pub fn footprint(&self) -> Footprint {
        Footprint::around(self.center, self.radius as f32)
    }
}

/// Bounds and counts describing one star field.
///
/// `star_gap` is carried along with the other parameters but placement
/// does not consult it: footprints are never inflated by the gap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarFieldParams {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub min_radius: Radius,
    pub max_radius: Radius,
    pub num_stars: usize,
    pub star_gap: u32,
}

impl StarFieldParams {
    /// Integer midpoint of the radius range.
    ///
    /// Computed in `u64` so radii near `u32::MAX` cannot overflow.
    pub fn radius_midpoint(&self) -> Radius {
        ((u64::from(self.min_radius) + u64::from(self.max_radius)) / 2) as Radius
    }
}

impl Default for StarFieldParams {
    fn default() -> Self {
        Self {
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
}

/// Axis-aligned bounding box used for overlap tests during placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    pub min: Vec2,
    pub max: Vec2,
}

impl Footprint {
    pub fn around(center: Vec2, half_extent: f32) -> Self {
        let h = Vec2::splat(half_extent);
        Self {
            min: center - h,
            max: center + h,
        }
    }

    /// Closed-interval intersection: boxes that only share an edge or a
    /// corner still intersect.
    #[inline]
    pub fn intersects(&self, other: &Footprint) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_spans_radius_in_each_direction() {
        let star = Star::new(10.0, 20.0, 5);
        let fp = star.footprint();
        assert_eq!(fp.min, Vec2::new(5.0, 15.0));
        assert_eq!(fp.max, Vec2::new(15.0, 25.0));
    }

    #[test]
    fn overlapping_footprints_intersect() {
        let a = Footprint::around(Vec2::new(0.0, 0.0), 5.0);
        let b = Footprint::around(Vec2::new(6.0, 3.0), 2.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_footprints_count_as_intersecting() {
        let a = Footprint::around(Vec2::new(0.0, 0.0), 5.0);
        let b = Footprint::around(Vec2::new(10.0, 0.0), 5.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn separated_footprints_do_not_intersect() {
        let a = Footprint::around(Vec2::new(0.0, 0.0), 5.0);
        // Separated on x only.
        let b = Footprint::around(Vec2::new(11.0, 0.0), 5.0);
        // Separated on y only.
        let c = Footprint::around(Vec2::new(0.0, -20.0), 5.0);
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn radius_midpoint_uses_integer_division() {
        let params = StarFieldParams::default();
        assert_eq!(params.radius_midpoint(), 15);

        let odd = StarFieldParams {
            min_radius: 4,
            max_radius: 9,
            ..StarFieldParams::default()
        };
        assert_eq!(odd.radius_midpoint(), 6);
    }

    #[test]
    fn radius_midpoint_handles_extreme_range() {
        let params = StarFieldParams {
            min_radius: u32::MAX - 1,
            max_radius: u32::MAX,
            ..StarFieldParams::default()
        };
        assert_eq!(params.radius_midpoint(), u32::MAX - 1);

        let wide = StarFieldParams {
            min_radius: 5,
            max_radius: u32::MAX,
            ..StarFieldParams::default()
        };
        assert_eq!(wide.radius_midpoint(), 2_147_483_650);
    }
}
