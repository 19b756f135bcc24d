use super::Region;
use crate::world::position::{BlockPos, ColumnPos};

/// Vertical cylinder: a disc footprint of `radius` around `center`,
/// spanning `min_y..=max_y`.
///
/// The bounds are stored as given. A region with `min_y > max_y` has a
/// footprint but no height. A negative, infinite or NaN radius has no
/// footprint at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderRegion {
    center: ColumnPos,
    radius: f64,
    min_y: i64,
    max_y: i64,
}

impl CylinderRegion {
    pub fn new(center: ColumnPos, radius: f64, min_y: i64, max_y: i64) -> Self {
        Self {
            center,
            radius,
            min_y,
            max_y,
        }
    }

    pub fn center(&self) -> ColumnPos {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn in_footprint(&self, x: i64, z: i64) -> bool {
        let dx = (x as i128 - self.center.x as i128) as f64;
        let dz = (z as i128 - self.center.z as i128) as f64;
        dx * dx + dz * dz <= self.radius * self.radius
    }
}

impl Region for CylinderRegion {
    fn min_y(&self) -> i64 {
        self.min_y
    }

    fn max_y(&self) -> i64 {
        self.max_y
    }

    fn columns(&self) -> Box<dyn Iterator<Item = ColumnPos> + '_> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Box::new(std::iter::empty());
        }
        let reach = self.radius.floor() as i64;
        let (cx, cz) = (self.center.x, self.center.z);
        let (x0, x1) = (cx.saturating_sub(reach), cx.saturating_add(reach));
        let (z0, z1) = (cz.saturating_sub(reach), cz.saturating_add(reach));
        Box::new(
            (x0..=x1)
                .flat_map(move |x| (z0..=z1).map(move |z| ColumnPos::new(x, z)))
                .filter(move |c| self.in_footprint(c.x, c.z)),
        )
    }

    fn contains(&self, pos: BlockPos) -> bool {
        (self.min_y..=self.max_y).contains(&pos.y) && self.in_footprint(pos.x, pos.z)
    }
}
