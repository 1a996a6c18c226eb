//! Convex shapes representable by support mappings.

mod ball;
mod capsule;
mod cone;
mod convex_polyhedron;
mod cuboid;
mod cylinder;
mod ellipsoid;
mod support_map;

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::convex_polyhedron::ConvexPolyhedron;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::ellipsoid::Ellipsoid;
pub use self::support_map::SupportMap;
