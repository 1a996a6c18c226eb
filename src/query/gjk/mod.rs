//! Building blocks of the Gilbert-Johnson-Keerthi distance algorithm.

mod simplex;
mod voronoi;

pub use self::simplex::Simplex;
pub use self::voronoi::{
    outside_edge_face_voronoi_plane, outside_vertex_edge_voronoi_plane, reduce_edge,
    reduce_simplex, reduce_tetrahedron, reduce_tetrahedron_with_plane_tolerance, reduce_triangle,
    signed_distance_to_edge_face_voronoi_plane, signed_distance_to_vertex_edge_voronoi_plane,
};

use crate::math::{Real, DEFAULT_EPSILON};

/// The absolute tolerance used by the degeneracy tests of the simplex.
pub fn eps_tol() -> Real {
    DEFAULT_EPSILON * 100.0
}
