use crate::math::{Point, Real, Vector};
use crate::query::gjk;
use crate::query::SimplexError;

/// A simplex of the Minkowski difference of two shapes, with up to 4 vertices.
///
/// Each active slot holds a Minkowski-difference point `v = a - b`, the two
/// world-space witness points `a` and `b` it was built from, and the
/// barycentric weight assigned by the last reduction. Slot occupancy is
/// tracked by a 4-bit mask; the number of active slots is the dimension of
/// the simplex.
///
/// A simplex is created fresh for each query and never shared.
#[derive(Copy, Clone, Debug)]
pub struct Simplex {
    pub(crate) vertices: [Vector<Real>; 4],
    pub(crate) witnesses_a: [Point<Real>; 4],
    pub(crate) witnesses_b: [Point<Real>; 4],
    pub(crate) weights: [Real; 4],
    pub(crate) bitmask: u8,
}

impl Simplex {
    /// Creates a new empty simplex.
    pub fn new() -> Simplex {
        Simplex {
            vertices: [Vector::zeros(); 4],
            witnesses_a: [Point::origin(); 4],
            witnesses_b: [Point::origin(); 4],
            weights: [0.0; 4],
            bitmask: 0,
        }
    }

    /// The number of active vertices of this simplex.
    pub fn dimension(&self) -> usize {
        self.bitmask.count_ones() as usize
    }

    /// Does this simplex have all 4 slots in use?
    pub fn is_full(&self) -> bool {
        self.bitmask == 0b1111
    }

    /// Does this simplex have no active vertex?
    pub fn is_empty(&self) -> bool {
        self.bitmask == 0
    }

    /// The occupancy bitmask of this simplex.
    pub fn bitmask(&self) -> u8 {
        self.bitmask
    }

    /// The Minkowski-difference point stored in the `i`-th slot.
    pub fn vertex(&self, i: usize) -> &Vector<Real> {
        &self.vertices[i]
    }

    /// The witness point on the first shape stored in the `i`-th slot.
    pub fn witness_a(&self, i: usize) -> &Point<Real> {
        &self.witnesses_a[i]
    }

    /// The witness point on the second shape stored in the `i`-th slot.
    pub fn witness_b(&self, i: usize) -> &Point<Real> {
        &self.witnesses_b[i]
    }

    /// The barycentric weight of the `i`-th slot, set by the last reduction.
    pub fn weight(&self, i: usize) -> Real {
        self.weights[i]
    }

    /// Inserts a new vertex into the first free slot of this simplex.
    ///
    /// Fails with [`SimplexError::Full`] if all 4 slots are in use; the
    /// caller must reduce the simplex before inserting.
    pub fn add_point(
        &mut self,
        v: Vector<Real>,
        a: Point<Real>,
        b: Point<Real>,
    ) -> Result<(), SimplexError> {
        for i in 0..4 {
            let bit = 1u8 << i;

            if self.bitmask & bit == 0 {
                self.vertices[i] = v;
                self.witnesses_a[i] = a;
                self.witnesses_b[i] = b;
                self.weights[i] = 0.0;
                self.bitmask |= bit;
                return Ok(());
            }
        }

        Err(SimplexError::Full)
    }

    /// Tests if `v` is exactly equal to one of the active vertices.
    pub fn contains_point(&self, v: &Vector<Real>) -> bool {
        for i in 0..4 {
            if self.bitmask & (1u8 << i) != 0 && self.vertices[i] == *v {
                return true;
            }
        }

        false
    }

    /// Tests if `v` lies in the affine span of the active vertices.
    ///
    /// Inserting such a point would not increase the dimension of the
    /// simplex. A full simplex cannot be expanded, so every point is
    /// degenerate with respect to it.
    pub fn is_degenerate_point(&self, v: &Vector<Real>) -> bool {
        let eps = gjk::eps_tol();

        match self.dimension() {
            0 => false,
            1 => {
                let i = self.active_slots()[0];
                let d = v - self.vertices[i];
                d.norm_squared() <= eps * eps * (1.0 + self.vertices[i].norm_squared())
            }
            2 => {
                let slots = self.active_slots();
                let e = self.vertices[slots[1]] - self.vertices[slots[0]];
                let d = v - self.vertices[slots[0]];
                e.cross(&d).norm_squared() <= eps * eps * e.norm_squared() * d.norm_squared()
            }
            3 => {
                let slots = self.active_slots();
                let e1 = self.vertices[slots[1]] - self.vertices[slots[0]];
                let e2 = self.vertices[slots[2]] - self.vertices[slots[0]];
                let n = e1.cross(&e2);
                let d = v - self.vertices[slots[0]];
                let dist = n.dot(&d);
                dist * dist <= eps * eps * n.norm_squared() * d.norm_squared()
            }
            _ => true,
        }
    }

    /// The active slot index and bit flag of a 0-simplex.
    ///
    /// Fails with [`SimplexError::Empty`] if no slot is active.
    pub fn used_indices1(&self) -> Result<(usize, u8), SimplexError> {
        let used = self.used_indices(1)?;
        Ok(used[0])
    }

    /// The first two active slot indices and bit flags, in slot order.
    ///
    /// Fails with [`SimplexError::Empty`] if no slot is active, and with
    /// [`SimplexError::NotEnoughVertices`] if only one is.
    pub fn used_indices2(&self) -> Result<[(usize, u8); 2], SimplexError> {
        let used = self.used_indices(2)?;
        Ok([used[0], used[1]])
    }

    /// The first three active slot indices and bit flags, in slot order.
    ///
    /// Fails with [`SimplexError::Empty`] if no slot is active, and with
    /// [`SimplexError::NotEnoughVertices`] if fewer than three are.
    pub fn used_indices3(&self) -> Result<[(usize, u8); 3], SimplexError> {
        self.used_indices(3)
    }

    /// The weighted combination of the active Minkowski vertices and witness
    /// points, using the weights set by the last reduction.
    pub fn closest(&self) -> (Vector<Real>, Point<Real>, Point<Real>) {
        let mut v = Vector::zeros();
        let mut a = Vector::zeros();
        let mut b = Vector::zeros();

        for i in 0..4 {
            if self.bitmask & (1u8 << i) != 0 {
                v += self.vertices[i] * self.weights[i];
                a += self.witnesses_a[i].coords * self.weights[i];
                b += self.witnesses_b[i].coords * self.weights[i];
            }
        }

        (v, Point::from(a), Point::from(b))
    }

    fn used_indices(&self, requested: usize) -> Result<[(usize, u8); 3], SimplexError> {
        if self.bitmask == 0 {
            return Err(SimplexError::Empty);
        }

        let actual = self.dimension();
        if actual < requested {
            return Err(SimplexError::NotEnoughVertices { actual, requested });
        }

        let mut out = [(0usize, 0u8); 3];
        let mut k = 0;

        for i in 0..4 {
            let bit = 1u8 << i;
            if self.bitmask & bit != 0 && k < requested {
                out[k] = (i, bit);
                k += 1;
            }
        }

        Ok(out)
    }

    fn active_slots(&self) -> [usize; 4] {
        let mut out = [0usize; 4];
        let mut k = 0;

        for i in 0..4 {
            if self.bitmask & (1u8 << i) != 0 {
                out[k] = i;
                k += 1;
            }
        }

        out
    }
}

impl Default for Simplex {
    fn default() -> Self {
        Self::new()
    }
}
