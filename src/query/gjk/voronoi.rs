use crate::math::{Real, Vector};
use crate::query::gjk::Simplex;
use crate::query::SimplexError;

/// The signed distance from `p` to the Voronoi plane separating the region of
/// edge `ab` from the region of face `abc`.
///
/// The plane passes through `ab` and is orthogonal to the face; positive
/// distances are on the side of the edge region. The result is invariant
/// under swapping `a` and `b`, and does not depend on the height of `p` above
/// or below the face plane.
pub fn signed_distance_to_edge_face_voronoi_plane(
    p: &Vector<Real>,
    a: &Vector<Real>,
    b: &Vector<Real>,
    c: &Vector<Real>,
) -> Real {
    let e = b - a;
    let m = e.cross(&(c - a));
    let n = e.cross(&m).normalize();
    n.dot(&(p - a))
}

/// Is `p` on the edge-region side of the Voronoi plane between edge `ab` and
/// face `abc`?
///
/// Points lying exactly in the plane count as outside, so boundary queries
/// reduce to the lower-dimensional feature.
pub fn outside_edge_face_voronoi_plane(
    p: &Vector<Real>,
    a: &Vector<Real>,
    b: &Vector<Real>,
    c: &Vector<Real>,
) -> bool {
    signed_distance_to_edge_face_voronoi_plane(p, a, b, c) >= 0.0
}

/// The signed distance from `p` to the Voronoi plane separating the region of
/// vertex `a` from the region of edge `ab`.
///
/// The plane passes through `a` and is orthogonal to the edge; positive
/// distances are on the side of the vertex region.
pub fn signed_distance_to_vertex_edge_voronoi_plane(
    p: &Vector<Real>,
    a: &Vector<Real>,
    b: &Vector<Real>,
) -> Real {
    let n = (a - b).normalize();
    n.dot(&(p - a))
}

/// Is `p` on the vertex-region side of the Voronoi plane between vertex `a`
/// and edge `ab`?
pub fn outside_vertex_edge_voronoi_plane(
    p: &Vector<Real>,
    a: &Vector<Real>,
    b: &Vector<Real>,
) -> bool {
    signed_distance_to_vertex_edge_voronoi_plane(p, a, b) >= 0.0
}

/// Reduces a 2-vertex simplex to the feature whose Voronoi region contains
/// `p`, recomputing the barycentric weights of the retained vertices.
pub fn reduce_edge(p: &Vector<Real>, simplex: &mut Simplex) -> Result<(), SimplexError> {
    let [(ia, bit_a), (ib, bit_b)] = simplex.used_indices2()?;
    let a = simplex.vertices[ia];
    let b = simplex.vertices[ib];

    if outside_vertex_edge_voronoi_plane(p, &a, &b) {
        simplex.bitmask &= !bit_b;
        simplex.weights[ia] = 1.0;
    } else if outside_vertex_edge_voronoi_plane(p, &b, &a) {
        simplex.bitmask &= !bit_a;
        simplex.weights[ib] = 1.0;
    } else {
        let ab = b - a;
        let t = (p - a).dot(&ab) / ab.norm_squared();
        simplex.weights[ia] = 1.0 - t;
        simplex.weights[ib] = t;
    }

    Ok(())
}

/// Reduces a 3-vertex simplex to the feature whose Voronoi region contains
/// `p`, recomputing the barycentric weights of the retained vertices.
///
/// When `p` projects inside the face, all three vertices are kept and their
/// weights are the barycentric coordinates of the projection of `p` onto the
/// face plane.
pub fn reduce_triangle(p: &Vector<Real>, simplex: &mut Simplex) -> Result<(), SimplexError> {
    let [(ia, bit_a), (ib, bit_b), (ic, bit_c)] = simplex.used_indices3()?;
    let a = simplex.vertices[ia];
    let b = simplex.vertices[ib];
    let c = simplex.vertices[ic];

    // Vertex regions.
    if outside_vertex_edge_voronoi_plane(p, &a, &b) && outside_vertex_edge_voronoi_plane(p, &a, &c)
    {
        simplex.bitmask &= !(bit_b | bit_c);
        simplex.weights[ia] = 1.0;
        return Ok(());
    }
    if outside_vertex_edge_voronoi_plane(p, &b, &a) && outside_vertex_edge_voronoi_plane(p, &b, &c)
    {
        simplex.bitmask &= !(bit_a | bit_c);
        simplex.weights[ib] = 1.0;
        return Ok(());
    }
    if outside_vertex_edge_voronoi_plane(p, &c, &a) && outside_vertex_edge_voronoi_plane(p, &c, &b)
    {
        simplex.bitmask &= !(bit_a | bit_b);
        simplex.weights[ic] = 1.0;
        return Ok(());
    }

    // Edge regions. Being outside the edge-face plane is not enough: the
    // projection must also fall between the edge endpoints, so the point has
    // to be inside both vertex-edge planes of that edge. A point beyond an
    // endpoint that escaped the vertex tests above belongs to another edge.
    if outside_edge_face_voronoi_plane(p, &a, &b, &c)
        && !outside_vertex_edge_voronoi_plane(p, &a, &b)
        && !outside_vertex_edge_voronoi_plane(p, &b, &a)
    {
        let ab = b - a;
        let t = (p - a).dot(&ab) / ab.norm_squared();
        simplex.bitmask &= !bit_c;
        simplex.weights[ia] = 1.0 - t;
        simplex.weights[ib] = t;
        return Ok(());
    }
    if outside_edge_face_voronoi_plane(p, &b, &c, &a)
        && !outside_vertex_edge_voronoi_plane(p, &b, &c)
        && !outside_vertex_edge_voronoi_plane(p, &c, &b)
    {
        let bc = c - b;
        let t = (p - b).dot(&bc) / bc.norm_squared();
        simplex.bitmask &= !bit_a;
        simplex.weights[ib] = 1.0 - t;
        simplex.weights[ic] = t;
        return Ok(());
    }
    if outside_edge_face_voronoi_plane(p, &c, &a, &b)
        && !outside_vertex_edge_voronoi_plane(p, &c, &a)
        && !outside_vertex_edge_voronoi_plane(p, &a, &c)
    {
        let ca = a - c;
        let t = (p - c).dot(&ca) / ca.norm_squared();
        simplex.bitmask &= !bit_b;
        simplex.weights[ic] = 1.0 - t;
        simplex.weights[ia] = t;
        return Ok(());
    }

    // Face region: barycentric coordinates of the projection of `p` onto the
    // face plane.
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;
    let n = ab.cross(&ac);
    let nn = n.norm_squared();
    let wb = ap.cross(&ac).dot(&n) / nn;
    let wc = ab.cross(&ap).dot(&n) / nn;

    simplex.weights[ia] = 1.0 - wb - wc;
    simplex.weights[ib] = wb;
    simplex.weights[ic] = wc;

    Ok(())
}

/// Same as [`reduce_tetrahedron_with_plane_tolerance`] with an exact-zero
/// face-plane boundary.
pub fn reduce_tetrahedron(p: &Vector<Real>, simplex: &mut Simplex) -> Result<(), SimplexError> {
    reduce_tetrahedron_with_plane_tolerance(p, simplex, 0.0)
}

/// Reduces a 4-vertex simplex to the feature whose Voronoi region contains
/// `p`.
///
/// `p` is outside a face when its signed distance to the face plane (oriented
/// away from the opposite vertex) is at least `plane_tolerance`; among the
/// faces `p` is outside of, the one whose reduced feature is closest to `p`
/// wins. If `p` is outside no face it is enclosed: all four vertices are kept
/// and the weights become the barycentric coordinates of `p`.
///
/// With the default zero tolerance, a point lying exactly on a face reduces
/// to that face, but a near-degenerate tetrahedron can evaluate an on-face
/// point a hair inside the plane (signed distance on the order of `-1.0e-16`)
/// and report the full simplex instead.
pub fn reduce_tetrahedron_with_plane_tolerance(
    p: &Vector<Real>,
    simplex: &mut Simplex,
    plane_tolerance: Real,
) -> Result<(), SimplexError> {
    if simplex.is_empty() {
        return Err(SimplexError::Empty);
    }
    if !simplex.is_full() {
        return Err(SimplexError::NotEnoughVertices {
            actual: simplex.dimension(),
            requested: 4,
        });
    }

    let v = simplex.vertices;

    // Faces as (vertex, vertex, vertex, opposite vertex) slot indices.
    const FACES: [[usize; 4]; 4] = [[0, 1, 2, 3], [0, 1, 3, 2], [0, 2, 3, 1], [1, 2, 3, 0]];

    let mut best: Option<(Simplex, Real)> = None;

    for [i, j, k, opp] in FACES {
        let mut n = (v[j] - v[i]).cross(&(v[k] - v[i]));
        if n.dot(&(v[opp] - v[i])) > 0.0 {
            n = -n;
        }
        let sd = n.normalize().dot(&(p - v[i]));

        if sd >= plane_tolerance {
            let mut sub = *simplex;
            sub.bitmask &= !(1u8 << opp);
            reduce_triangle(p, &mut sub)?;

            let (q, _, _) = sub.closest();
            let dist = (q - p).norm_squared();

            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((sub, dist)),
            }
        }
    }

    if let Some((sub, _)) = best {
        *simplex = sub;
    } else {
        // Enclosed: barycentric coordinates of `p` in the tetrahedron.
        let e1 = v[1] - v[0];
        let e2 = v[2] - v[0];
        let e3 = v[3] - v[0];
        let pv = p - v[0];
        let det = e1.dot(&e2.cross(&e3));

        let w1 = pv.dot(&e2.cross(&e3)) / det;
        let w2 = e1.dot(&pv.cross(&e3)) / det;
        let w3 = e1.dot(&e2.cross(&pv)) / det;

        simplex.weights = [1.0 - w1 - w2 - w3, w1, w2, w3];
    }

    Ok(())
}

/// Reduces a simplex of any dimension against the query point `p`.
pub fn reduce_simplex(p: &Vector<Real>, simplex: &mut Simplex) -> Result<(), SimplexError> {
    match simplex.dimension() {
        0 => Err(SimplexError::Empty),
        1 => {
            let (ia, _) = simplex.used_indices1()?;
            simplex.weights[ia] = 1.0;
            Ok(())
        }
        2 => reduce_edge(p, simplex),
        3 => reduce_triangle(p, simplex),
        _ => reduce_tetrahedron(p, simplex),
    }
}
