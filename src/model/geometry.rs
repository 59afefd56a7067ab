use glam::Vec3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min: min.min(max), max: min.max(max) }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self { min: center - half, max: center + half }
    }

    /// Touching faces count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(other.max.x < self.min.x || other.min.x > self.max.x
            || other.max.y < self.min.y || other.min.y > self.max.y
            || other.max.z < self.min.z || other.min.z > self.max.z)
    }

    /// True if `other` lies fully inside (or on the faces of) this box.
    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.cmple(other.min).all() && other.max.cmple(self.max).all()
    }

    /// Boxes packed as `[min x, min y, min z, max x, max y, max z]` runs.
    /// `None` if the length is not a multiple of six.
    pub fn from_flat(values: &[f32]) -> Option<Vec<Aabb>> {
        if values.len() % 6 != 0 {
            return None;
        }
        Some(
            values
                .chunks_exact(6)
                .map(|c| Aabb::new(Vec3::new(c[0], c[1], c[2]), Vec3::new(c[3], c[4], c[5])))
                .collect(),
        )
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// Slab test. Returns the distance along `dir` to the first surface hit,
    /// or the exit distance when `origin` is already inside.
    pub fn ray_distance(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            let o = origin[axis];
            let d = dir[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < f32::EPSILON {
                // Parallel to this slab: must already be between its planes
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let mut t0 = (lo - o) * inv;
            let mut t1 = (hi - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }

        if t_far < 0.0 {
            None
        } else if t_near >= 0.0 {
            Some(t_near)
        } else {
            Some(t_far)
        }
    }
}

/// Nearest-hit ray query against scene geometry.
pub trait RayQuery {
    /// `dir` need not be normalized; the returned point lies on the ray.
    fn raycast(&self, origin: Vec3, dir: Vec3) -> Option<Vec3>;
}

/// Obstacle boxes of the loaded scene plus the bound of the playable area.
///
/// Filled once by the scene loader and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct GeometryIndex {
    obstacles: Vec<Aabb>,
    bounds: Option<Aabb>,
}

impl GeometryIndex {
    pub fn new(obstacles: Vec<Aabb>, bounds: Option<Aabb>) -> Self {
        Self { obstacles, bounds }
    }

    /// Builds the index with the overall bound taken as the union of all
    /// obstacles, which is how the court scene is measured on load.
    pub fn from_obstacles(obstacles: Vec<Aabb>) -> Self {
        let bounds = obstacles
            .iter()
            .copied()
            .reduce(|acc, b| acc.union(&b));
        Self { obstacles, bounds }
    }

    pub fn obstacles(&self) -> &[Aabb] {
        &self.obstacles
    }

    pub fn bounds(&self) -> Option<&Aabb> {
        self.bounds.as_ref()
    }

    pub fn intersects_any(&self, candidate: &Aabb) -> bool {
        self.obstacles.iter().any(|o| o.intersects(candidate))
    }

    /// A candidate box may be occupied if it touches no obstacle and, when the
    /// playable bound is known, sits entirely inside it.
    pub fn permits(&self, candidate: &Aabb) -> bool {
        if self.intersects_any(candidate) {
            return false;
        }
        match &self.bounds {
            Some(bounds) => bounds.contains(candidate),
            None => true,
        }
    }
}

impl RayQuery for GeometryIndex {
    fn raycast(&self, origin: Vec3, dir: Vec3) -> Option<Vec3> {
        self.obstacles
            .iter()
            .filter_map(|b| b.ray_distance(origin, dir))
            .min_by(|a, b| a.total_cmp(b))
            .map(|t| origin + dir * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(center: Vec3) -> Aabb {
        Aabb::from_center_size(center, Vec3::ONE)
    }

    #[test]
    fn test_intersection_includes_touching_faces() {
        let a = unit_at(Vec3::ZERO);
        assert!(a.intersects(&unit_at(Vec3::new(1.0, 0.0, 0.0))), "faces touch at x=0.5");
        assert!(!a.intersects(&unit_at(Vec3::new(1.01, 0.0, 0.0))));
        assert!(!a.intersects(&unit_at(Vec3::new(0.0, 0.0, -3.0))));
    }

    #[test]
    fn test_containment() {
        let outer = Aabb::new(Vec3::splat(-10.0), Vec3::splat(10.0));
        assert!(outer.contains(&unit_at(Vec3::ZERO)));
        assert!(outer.contains(&Aabb::new(Vec3::splat(-10.0), Vec3::splat(-9.0))));
        assert!(!outer.contains(&unit_at(Vec3::new(9.8, 0.0, 0.0))));
    }

    #[test]
    fn test_from_flat() {
        let boxes = Aabb::from_flat(&[0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 5.0, 5.0, 5.0, 4.0, 4.0, 4.0]).unwrap();
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].max, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(boxes[1].min, Vec3::splat(4.0), "corners are reordered");
        assert!(Aabb::from_flat(&[1.0; 7]).is_none());
        assert_eq!(Aabb::from_flat(&[]), Some(Vec::new()));
    }

    #[test]
    fn test_from_obstacles_unions_bounds() {
        let index = GeometryIndex::from_obstacles(vec![
            Aabb::new(Vec3::new(-5.0, 0.0, -5.0), Vec3::new(0.0, 1.0, 0.0)),
            Aabb::new(Vec3::new(2.0, -1.0, 1.0), Vec3::new(4.0, 3.0, 6.0)),
        ]);
        let bounds = index.bounds().copied().unwrap();
        assert_eq!(bounds.min, Vec3::new(-5.0, -1.0, -5.0));
        assert_eq!(bounds.max, Vec3::new(4.0, 3.0, 6.0));

        assert!(GeometryIndex::from_obstacles(Vec::new()).bounds().is_none());
    }

    #[test]
    fn test_permits_respects_obstacles_and_bounds() {
        let wall = Aabb::new(Vec3::new(5.0, 0.0, -20.0), Vec3::new(6.0, 10.0, 20.0));
        let area = Aabb::new(Vec3::splat(-20.0), Vec3::splat(20.0));
        let index = GeometryIndex::new(vec![wall], Some(area));

        assert!(index.permits(&unit_at(Vec3::ZERO)));
        assert!(!index.permits(&unit_at(Vec3::new(5.5, 1.0, 0.0))), "inside the wall");
        assert!(!index.permits(&unit_at(Vec3::new(-19.9, 0.0, 0.0))), "pokes out of the area");

        let unbounded = GeometryIndex::new(vec![wall], None);
        assert!(unbounded.permits(&unit_at(Vec3::new(-100.0, 0.0, 0.0))));
    }

    #[test]
    fn test_raycast_returns_nearest_hit() {
        let near = Aabb::new(Vec3::new(4.0, -1.0, -1.0), Vec3::new(5.0, 1.0, 1.0));
        let far = Aabb::new(Vec3::new(9.0, -1.0, -1.0), Vec3::new(10.0, 1.0, 1.0));
        let index = GeometryIndex::from_obstacles(vec![far, near]);

        let hit = index.raycast(Vec3::ZERO, Vec3::X).unwrap();
        assert!(hit.abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), 1e-5), "hit at {hit:?}");

        assert!(index.raycast(Vec3::ZERO, Vec3::NEG_X).is_none());
        assert!(index.raycast(Vec3::new(0.0, 5.0, 0.0), Vec3::X).is_none(), "ray passes above");
    }

    #[test]
    fn test_ray_from_inside_reports_exit() {
        let b = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let t = b.ray_distance(Vec3::ZERO, Vec3::Y).unwrap();
        assert!((t - 1.0).abs() < 1e-6);
    }
}
