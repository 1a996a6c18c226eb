/*!
gjk3d
========

**gjk3d** is a 3-dimensional convex proximity library written with
the rust programming language.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]

extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    use na;

    /// The scalar type used throughout this crate.
    pub type Real = f64;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub type Point<N> = na::Point3<N>;

    /// The vector type.
    pub type Vector<N> = na::Vector3<N>;

    /// The angular vector type.
    pub type AngVector<N> = na::Vector3<N>;

    /// The unit vector type.
    pub type UnitVector<N> = na::UnitVector3<N>;

    /// The transformation matrix type.
    pub type Isometry<N> = na::Isometry3<N>;

    /// The rotation type.
    pub type Rotation<N> = na::UnitQuaternion<N>;

    /// The translation type.
    pub type Translation<N> = na::Translation3<N>;
}
