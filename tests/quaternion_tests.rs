use approx::assert_relative_eq;
use gfx_math::error::MathError;
use gfx_math::math::{Matrix3, Matrix3D, Quaternion, QuaternionD, Rotation, Vector3, Vector3D};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

fn random_unit_quaternion(rng: &mut StdRng) -> QuaternionD {
    QuaternionD::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    )
    .normalize()
}

#[test]
fn test_quaternion_identity() {
    let q = Quaternion::<f32>::identity();
    assert_eq!(q.w, 1.0);
    assert_eq!(q.vector(), Vector3::zero());
    assert!(q.is_identity());
    assert!(q.is_unit());

    let v = Vector3::new(1.0f32, 2.0, 3.0);
    assert_eq!(q.rotate_vector(v), v);
}

#[test]
fn test_component_order() {
    let q = Quaternion::from_slice(&[1.0f32, 2.0, 3.0, 4.0]);
    assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(q[0], q.w);
    assert_eq!(q[3], q.z);

    let p = Quaternion::from_vector_scalar(Vector3::new(2.0f32, 3.0, 4.0), 1.0);
    assert_eq!(p, q);

    let mut zero = q;
    zero.make_zero();
    assert!(zero.is_zero());
    zero.make_zero();
    assert_eq!((zero.w, zero.x, zero.y, zero.z), (0.0, 0.0, 0.0, 0.0));

    let mut identity = q;
    identity.make_identity().make_identity();
    assert!(identity.is_identity());
    assert_eq!((identity.w, identity.x, identity.y, identity.z), (1.0, 0.0, 0.0, 0.0));

    assert_eq!(Quaternion::<f32>::default(), Quaternion::IDENTITY);
    assert!(Quaternion::<f64>::default().is_identity());
}

#[test]
fn test_axis_angle() {
    let q = Quaternion::from_axis_angle(Vector3::new(0.0, 0.0, 2.0), FRAC_PI_2);
    assert!(q.is_unit());
    assert_relative_eq!(q.rotate_vector(Vector3D::unit_x()), Vector3D::unit_y(), epsilon = 1e-12);

    let (axis, angle) = q.to_axis_angle();
    assert_relative_eq!(axis, Vector3D::unit_z(), epsilon = 1e-12);
    assert_relative_eq!(angle, FRAC_PI_2, epsilon = 1e-12);
    assert_relative_eq!(q.angle(), FRAC_PI_2, epsilon = 1e-12);

    assert_eq!(Quaternion::from_axis_angle(Vector3D::zero(), 1.0), QuaternionD::IDENTITY);

    let (axis, angle) = QuaternionD::IDENTITY.to_axis_angle();
    assert_eq!(axis, Vector3D::unit_x());
    assert_eq!(angle, 0.0);
}

#[test]
fn test_axis_angle_round_trip() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let axis = Vector3D::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        if axis.length() < 1e-3 {
            continue;
        }
        let angle = rng.gen_range(1e-3..(2.0 * PI - 1e-3));
        if (angle - PI).abs() < 1e-3 {
            continue;
        }

        let q = Quaternion::from_axis_angle(axis, angle);
        let (recovered_axis, recovered_angle) = q.to_axis_angle();
        assert_relative_eq!(recovered_angle, angle, epsilon = 1e-9);
        assert_relative_eq!(recovered_axis, axis.normalize(), epsilon = 1e-9);
    }
}

#[test]
fn test_hamilton_product_composes_right_to_left() {
    let about_z = Quaternion::from_axis_angle(Vector3D::unit_z(), FRAC_PI_2);
    let about_x = Quaternion::from_axis_angle(Vector3D::unit_x(), FRAC_PI_2);

    // x → y under the z rotation, then y → z under the x rotation
    let combined = about_x * about_z;
    assert_relative_eq!(combined.rotate_vector(Vector3D::unit_x()), Vector3D::unit_z(), epsilon = 1e-12);

    let mut accumulated = about_x;
    accumulated *= about_z;
    assert_eq!(accumulated, combined);

    // i * j = k
    let i = QuaternionD::new(0.0, 1.0, 0.0, 0.0);
    let j = QuaternionD::new(0.0, 0.0, 1.0, 0.0);
    assert_eq!(i * j, QuaternionD::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(j * i, QuaternionD::new(0.0, 0.0, 0.0, -1.0));
}

#[test]
fn test_product_matches_matrix_product() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let a = random_unit_quaternion(&mut rng);
        let b = random_unit_quaternion(&mut rng);
        assert_relative_eq!(
            (a * b).to_rotation_matrix(),
            a.to_rotation_matrix() * b.to_rotation_matrix(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_rotation_matrix_round_trip() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let q = random_unit_quaternion(&mut rng);
        let m = q.to_rotation_matrix();
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);

        let back = Quaternion::from_rotation_matrix(&m);
        // q and -q are the same rotation
        let back = if back.dot(&q) < 0.0 { -back } else { back };
        assert_relative_eq!(back, q, epsilon = 1e-10);
    }
}

#[test]
fn test_from_rotation_matrix_branches() {
    // trace positive, then each of the dominant diagonal cases
    for (axis, angle) in [
        (Vector3D::new(1.0, 1.0, 1.0), 0.5),
        (Vector3D::unit_x(), PI * 0.9),
        (Vector3D::unit_y(), PI * 0.9),
        (Vector3D::unit_z(), PI * 0.9),
    ] {
        let m = Matrix3D::from_axis_angle(axis, angle);
        let q = Quaternion::from_rotation_matrix(&m);
        assert!(q.is_unit());
        assert_relative_eq!(q.to_rotation_matrix(), m, epsilon = 1e-12);
    }
}

#[test]
fn test_rotate_vector_matches_matrix() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..20 {
        let q = random_unit_quaternion(&mut rng);
        let v = Vector3D::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
        let m = q.to_rotation_matrix();
        assert_relative_eq!(q.rotate_vector(v), m.rotate_vector(v), epsilon = 1e-12);
        assert_relative_eq!(q.rotate_vector(v).length(), v.length(), epsilon = 1e-12);
    }
}

#[test]
fn test_non_unit_quaternion_to_matrix() {
    let q = Quaternion::from_axis_angle(Vector3D::unit_y(), 0.8);
    assert_relative_eq!((q * 3.0).to_rotation_matrix(), q.to_rotation_matrix(), epsilon = 1e-12);
    assert_eq!(QuaternionD::ZERO.to_rotation_matrix(), Matrix3D::IDENTITY);
}

#[test]
fn test_conjugate_and_inverse() {
    let q = QuaternionD::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q.conjugate(), QuaternionD::new(1.0, -2.0, -3.0, -4.0));

    let mut c = q;
    c.conjugate_mut();
    assert_eq!(c, q.conjugate());

    assert_relative_eq!(q * q.inverse(), QuaternionD::IDENTITY, epsilon = 1e-12);
    assert_relative_eq!(q.inverse() * q, QuaternionD::IDENTITY, epsilon = 1e-12);

    let unit = q.normalize();
    assert_relative_eq!(unit.inverse(), unit.conjugate(), epsilon = 1e-12);

    let mut inverted = q;
    inverted.invert();
    assert_eq!(inverted, q.inverse());

    assert_eq!(QuaternionD::ZERO.inverse(), QuaternionD::IDENTITY);
}

#[test]
fn test_normalize() {
    let q = QuaternionD::new(0.0, 3.0, 0.0, 4.0);
    assert_relative_eq!(q.length(), 5.0);
    assert_eq!(q.normalize(), QuaternionD::new(0.0, 0.6, 0.0, 0.8));

    let mut n = q;
    n.normalize_mut();
    assert!(n.is_unit());

    assert_eq!(QuaternionD::ZERO.normalize(), QuaternionD::ZERO);
    assert_eq!(QuaternionD::ZERO.try_normalize(), Err(MathError::ZeroLength));
    assert!(q.try_normalize().is_ok());
}

#[test]
fn test_from_vectors() {
    let from = Vector3D::new(1.0, 2.0, -0.5).normalize();
    let to = Vector3D::new(-2.0, 0.5, 1.0).normalize();
    let q = Quaternion::from_vectors(from, to);
    assert!(q.is_unit());
    assert_relative_eq!(q.rotate_vector(from), to, epsilon = 1e-12);

    let flipped = Quaternion::from_vectors(Vector3D::unit_y(), -Vector3D::unit_y());
    assert!(flipped.is_unit());
    assert_relative_eq!(flipped.rotate_vector(Vector3D::unit_y()), -Vector3D::unit_y(), epsilon = 1e-12);

    assert_eq!(
        Quaternion::from_vectors(Vector3D::unit_x(), Vector3D::unit_x()),
        QuaternionD::IDENTITY
    );
}

#[test]
fn test_slerp() {
    let a = QuaternionD::IDENTITY;
    let b = Quaternion::from_axis_angle(Vector3D::unit_z(), FRAC_PI_2);

    assert_relative_eq!(a.slerp(&b, 0.0), a, epsilon = 1e-12);
    assert_relative_eq!(a.slerp(&b, 1.0), b, epsilon = 1e-12);

    let halfway = a.slerp(&b, 0.5);
    assert_relative_eq!(
        halfway,
        Quaternion::from_axis_angle(Vector3D::unit_z(), FRAC_PI_2 * 0.5),
        epsilon = 1e-12
    );

    // the negated target is the same rotation, slerp takes the short way
    let short = a.slerp(&-b, 0.5);
    assert_relative_eq!(short, halfway, epsilon = 1e-12);
}

#[test]
fn test_nalgebra_round_trip() {
    let q = Quaternion::from_axis_angle(Vector3::new(1.0f32, 0.0, 1.0), 0.3);
    let na_q = q.to_nalgebra();
    assert_eq!(na_q.scalar(), q.w);
    assert_eq!(na_q.imag().x, q.x);
    assert_eq!(Quaternion::from_nalgebra(&na_q), q);
}

#[test]
fn test_matrix_rotation_trait() {
    let m = Matrix3::from_rotation_z(0.6f64);
    assert_relative_eq!(m.angle(), 0.6, epsilon = 1e-12);
    assert_relative_eq!(m.axis(), Vector3D::unit_z(), epsilon = 1e-12);
}
