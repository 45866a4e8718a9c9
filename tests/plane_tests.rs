use approx::assert_relative_eq;
use gfx_math::error::MathError;
use gfx_math::math::{Plane, PlaneD, Vector3, Vector3D};

#[test]
fn test_plane_from_point_and_normal() {
    let plane = Plane::from_point_and_normal(Vector3D::new(0.0, 0.0, 5.0), Vector3D::new(0.0, 0.0, 2.0));
    assert_eq!(plane.normal, Vector3D::new(0.0, 0.0, 2.0));
    assert_eq!(plane.offset, -10.0);

    assert_relative_eq!(plane.signed_distance(Vector3D::new(1.0, 1.0, 8.0)), 3.0, epsilon = 1e-12);
    assert_relative_eq!(plane.signed_distance(Vector3D::zero()), -5.0, epsilon = 1e-12);
    assert_relative_eq!(plane.distance(Vector3D::zero()), 5.0, epsilon = 1e-12);
    assert!(plane.contains(Vector3D::new(-4.0, 7.0, 5.0)));

    assert_relative_eq!(
        plane.project_point(Vector3D::new(1.0, 1.0, 8.0)),
        Vector3D::new(1.0, 1.0, 5.0),
        epsilon = 1e-12
    );
}

#[test]
fn test_plane_from_directions_and_points() {
    let point = Vector3D::new(1.0, 2.0, 3.0);
    let spanned = Plane::from_point_and_parallel_directions(point, Vector3D::unit_x(), Vector3D::unit_y());
    assert_eq!(spanned, Plane::from_point_and_normal(point, Vector3D::unit_z()));

    let through = Plane::from_points(point, point + Vector3D::unit_x(), point + Vector3D::unit_y());
    assert_eq!(through, spanned);
    assert!(through.contains(point + Vector3D::new(4.0, -2.0, 0.0)));
    assert_eq!(through.flipped().normal, -Vector3D::unit_z());
}

#[test]
fn test_plane_coefficients_and_normalization() {
    let plane = PlaneD::from_coefficients(0.0, 3.0, 4.0, -10.0);
    let unit = plane.normalized();
    assert_relative_eq!(unit.normal, Vector3D::new(0.0, 0.6, 0.8), epsilon = 1e-12);
    assert_relative_eq!(unit.offset, -2.0, epsilon = 1e-12);

    // scaling the equation keeps the distances
    let p = Vector3D::new(1.0, 1.0, 1.0);
    assert_relative_eq!(plane.signed_distance(p), unit.signed_distance(p), epsilon = 1e-12);
    assert_relative_eq!(unit.signed_distance(p), 1.4 - 2.0, epsilon = 1e-12);

    let degenerate = Plane::new(Vector3::<f32>::zero(), 1.0);
    assert_eq!(degenerate.try_normalize(), Err(MathError::ZeroLength));
    assert_eq!(degenerate.normalized(), degenerate);
}
