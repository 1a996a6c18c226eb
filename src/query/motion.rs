use crate::math::{AngVector, Isometry, Real, Rotation, Translation, Vector};

/// A rigid motion with constant linear and angular velocities.
#[derive(Copy, Clone, Debug)]
pub struct RigidMotion {
    /// The pose at time zero.
    pub start: Isometry<Real>,
    /// The linear velocity, in world space.
    pub linvel: Vector<Real>,
    /// The angular velocity, in world space.
    pub angvel: AngVector<Real>,
}

impl RigidMotion {
    /// Creates a motion starting at `start` with the given velocities.
    pub fn new(start: Isometry<Real>, linvel: Vector<Real>, angvel: AngVector<Real>) -> Self {
        RigidMotion {
            start,
            linvel,
            angvel,
        }
    }

    /// Creates a motion that stays at `pos` forever.
    pub fn constant_position(pos: Isometry<Real>) -> Self {
        RigidMotion {
            start: pos,
            linvel: Vector::zeros(),
            angvel: AngVector::zeros(),
        }
    }

    /// Creates the constant-velocity motion that moves from `start` to `end`
    /// over the time interval `dt`.
    pub fn interpolating(start: &Isometry<Real>, end: &Isometry<Real>, dt: Real) -> Self {
        let linvel = (end.translation.vector - start.translation.vector) / dt;
        let angvel = (end.rotation * start.rotation.inverse()).scaled_axis() / dt;

        RigidMotion {
            start: *start,
            linvel,
            angvel,
        }
    }

    /// The pose reached at time `t`.
    pub fn position_at_time(&self, t: Real) -> Isometry<Real> {
        Isometry::from_parts(
            Translation::from(self.start.translation.vector + self.linvel * t),
            Rotation::new(self.angvel * t) * self.start.rotation,
        )
    }
}
