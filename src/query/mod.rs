//! Proximity and continuous-collision queries between convex shapes.

pub mod gjk;

mod closest_points;
mod conservative_advancement;
mod error;
mod growth_distance;
mod motion;

pub use self::closest_points::{
    compute_closest_points, compute_closest_points_with, ClosestPoints, QueryStatus,
    ToleranceConfig,
};
pub use self::conservative_advancement::{
    conservative_advancement, motion_interpolation, TimeOfImpact,
};
pub use self::error::SimplexError;
pub use self::growth_distance::{growth_distance, growth_distance_with, GrowthDistance};
pub use self::motion::RigidMotion;
