use glam::Vec3;
use serde::{Deserialize, Serialize};
use techart_locomotion::Raycast;

/// Axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Finite corners with `min <= max` on every axis.
    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }

    /// Distance along the ray to the first contact, if within `max_distance`.
    ///
    /// Slab test. A ray starting inside the box hits at distance 0.
    pub fn ray_hit(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32> {
        let mut t_min = 0.0_f32;
        let mut t_max = max_distance;
        for i in 0..3 {
            let o = origin[i];
            let d = direction[i];
            if d.abs() < f32::EPSILON {
                if o < self.min[i] || o > self.max[i] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let mut t0 = (self.min[i] - o) * inv;
            let mut t1 = (self.max[i] - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }
        Some(t_min)
    }

    /// Whether a vertical cylinder of `radius` around `center` overlaps the
    /// box in the XZ plane.
    pub fn overlaps_footprint(&self, center: Vec3, radius: f32) -> bool {
        let cx = center.x.clamp(self.min.x, self.max.x);
        let cz = center.z.clamp(self.min.z, self.max.z);
        let dx = center.x - cx;
        let dz = center.z - cz;
        dx * dx + dz * dz <= radius * radius
    }
}

/// Static level geometry: an infinite floor plus overhead obstacles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Level {
    pub floor_y: f32,
    /// Boxes the character can stand under and bump its head on.
    pub ceilings: Vec<Aabb>,
}

impl Default for Level {
    /// Flat floor with a low lintel over a doorway five units ahead (-Z).
    fn default() -> Self {
        Self {
            floor_y: 0.0,
            ceilings: vec![Aabb::new(
                Vec3::new(-1.0, 2.05, -7.0),
                Vec3::new(1.0, 2.6, -5.0),
            )],
        }
    }
}

impl Level {
    pub fn open() -> Self {
        Self {
            floor_y: 0.0,
            ceilings: Vec::new(),
        }
    }

    /// Lowest ceiling underside above `point` within a footprint of `radius`.
    pub fn ceiling_above(&self, point: Vec3, radius: f32) -> Option<f32> {
        self.ceilings
            .iter()
            .filter(|c| c.min.y >= point.y && c.overlaps_footprint(point, radius))
            .map(|c| c.min.y)
            .reduce(f32::min)
    }
}

impl Raycast for Level {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return false;
        }
        if direction.y < 0.0 && origin.y >= self.floor_y {
            let t = (origin.y - self.floor_y) / -direction.y;
            if t <= max_distance {
                return true;
            }
        }
        self.ceilings
            .iter()
            .any(|c| c.ray_hit(origin, direction, max_distance).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slab() -> Aabb {
        Aabb::new(Vec3::new(-1.0, 2.0, -1.0), Vec3::new(1.0, 3.0, 1.0))
    }

    #[test]
    fn well_formed_boxes() {
        assert!(slab().is_well_formed());
        let inverted = Aabb {
            min: Vec3::new(1.0, 3.0, 1.0),
            max: Vec3::new(-1.0, 4.0, -1.0),
        };
        assert!(!inverted.is_well_formed());
        let open = Aabb {
            min: Vec3::ZERO,
            max: Vec3::new(1.0, f32::INFINITY, 1.0),
        };
        assert!(!open.is_well_formed());
    }

    #[test]
    fn new_orders_corners() {
        let b = Aabb::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(b.min, Vec3::ZERO);
        assert_eq!(b.max, Vec3::ONE);
    }

    #[test]
    fn upward_ray_hits_within_reach() {
        let hit = slab().ray_hit(Vec3::new(0.0, 1.0, 0.0), Vec3::Y, 1.1);
        assert!((hit.unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn upward_ray_misses_beyond_reach() {
        assert!(slab().ray_hit(Vec3::new(0.0, 0.5, 0.0), Vec3::Y, 1.1).is_none());
    }

    #[test]
    fn ray_beside_box_misses() {
        assert!(slab().ray_hit(Vec3::new(2.0, 1.0, 0.0), Vec3::Y, 10.0).is_none());
    }

    #[test]
    fn ray_from_inside_hits_at_zero() {
        assert_eq!(slab().ray_hit(Vec3::new(0.0, 2.5, 0.0), Vec3::Y, 1.0), Some(0.0));
    }

    #[test]
    fn footprint_overlap_uses_radius() {
        let b = slab();
        assert!(b.overlaps_footprint(Vec3::new(1.4, 0.0, 0.0), 0.5));
        assert!(!b.overlaps_footprint(Vec3::new(1.6, 0.0, 0.0), 0.5));
    }

    #[test]
    fn level_raycast_sees_floor_and_ceilings() {
        let level = Level {
            floor_y: 0.0,
            ceilings: vec![slab()],
        };
        assert!(level.raycast(Vec3::new(5.0, 1.0, 5.0), Vec3::NEG_Y, 2.0));
        assert!(!level.raycast(Vec3::new(5.0, 1.0, 5.0), Vec3::Y, 100.0));
        assert!(level.raycast(Vec3::new(0.0, 1.0, 0.0), Vec3::Y, 1.1));
        assert!(!level.raycast(Vec3::ZERO, Vec3::ZERO, 1.0));
    }

    #[test]
    fn ceiling_above_picks_lowest() {
        let level = Level {
            floor_y: 0.0,
            ceilings: vec![
                slab(),
                Aabb::new(Vec3::new(-1.0, 4.0, -1.0), Vec3::new(1.0, 5.0, 1.0)),
            ],
        };
        assert_eq!(level.ceiling_above(Vec3::new(0.0, 1.0, 0.0), 0.5), Some(2.0));
        assert_eq!(level.ceiling_above(Vec3::new(9.0, 1.0, 0.0), 0.5), None);
    }

    #[test]
    fn default_level_has_a_lintel() {
        let level = Level::default();
        assert_eq!(level.ceilings.len(), 1);
        assert!(Level::open().ceilings.is_empty());
    }
}
