use approx::assert_relative_eq;
use gfx_math::error::MathError;
use gfx_math::math::{
    approx_eq, clamp, lerp, orthonormalize, to_degrees, to_radians, Vector2, Vector3, Vector3D,
    Vector4,
};
use std::f32::consts::PI;

#[test]
fn test_vector3_operations() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(4.0, 5.0, 6.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum.x, 5.0);
    assert_eq!(sum.y, 7.0);
    assert_eq!(sum.z, 9.0);

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff, Vector3::new(3.0, 3.0, 3.0));

    // Scalar multiplication, both sides
    assert_eq!(v1 * 2.0, Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(2.0 * v1, v1 * 2.0);
    assert_eq!(v1 / 2.0, Vector3::new(0.5, 1.0, 1.5));
    assert_eq!(-v1, Vector3::new(-1.0, -2.0, -3.0));

    // Dot product
    assert_eq!(v1.dot(&v2), 1.0 * 4.0 + 2.0 * 5.0 + 3.0 * 6.0);

    // Cross product
    let cross = v1.cross(&v2);
    assert_eq!(cross, Vector3::new(-3.0, 6.0, -3.0));
    assert!(cross.is_orthogonal(&v1));
    assert!(cross.is_orthogonal(&v2));

    // Length
    let length = v1.length();
    assert_relative_eq!(length, 14.0f32.sqrt());

    // Normalize
    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized.x, v1.x / length);
    assert_relative_eq!(normalized.y, v1.y / length);
    assert_relative_eq!(normalized.z, v1.z / length);
}

#[test]
fn test_assign_operators() {
    let mut v = Vector3::new(1.0, 1.0, 1.0);
    v += Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));
    v -= Vector3::new(1.0, 1.0, 1.0);
    assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    v *= 3.0;
    assert_eq!(v, Vector3::new(3.0, 6.0, 9.0));
    v /= 3.0;
    assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_normalize_zero_vector_is_zero() {
    let zero = Vector3::<f32>::zero();
    assert_eq!(zero.normalize(), zero);

    let mut tiny = Vector2::new(1.0e-9f32, 0.0);
    tiny.normalize_mut();
    assert!(tiny.is_zero());

    assert_eq!(zero.try_normalize(), Err(MathError::ZeroLength));
    assert!(Vector3::new(0.0, 3.0, 4.0).try_normalize().is_ok());
}

#[test]
fn test_tolerant_equality() {
    let a = Vector3::new(1.0f32, 2.0, 3.0);
    let b = Vector3::new(1.0 + 1.0e-7, 2.0, 3.0 - 1.0e-7);
    assert_eq!(a, b);
    assert_ne!(a, Vector3::new(1.0, 2.0, 3.01));
}

#[test]
fn test_index_aliases_named_fields() {
    let mut v = Vector4::new(1.0f32, 2.0, 3.0, 4.0);
    assert_eq!(v[0], v.x);
    assert_eq!(v[3], v.w);

    v[1] = 10.0;
    assert_eq!(v.y, 10.0);

    v.z = -2.0;
    assert_eq!(v[2], -2.0);
    assert_eq!(v.as_array(), [1.0, 10.0, -2.0, 4.0]);
}

#[test]
#[should_panic]
fn test_index_out_of_range_panics() {
    let v = Vector2::new(1.0f32, 2.0);
    let _value: f32 = v[2];
}

#[test]
fn test_from_slice() {
    let short = Vector4::from_slice(&[1.0f32, 2.0]);
    assert_eq!(short, Vector4::new(1.0, 2.0, 0.0, 0.0));

    let long = Vector2::from_slice(&[5.0f32, 6.0, 7.0]);
    assert_eq!(long, Vector2::new(5.0, 6.0));

    let v: Vector3<f32> = [1.0, 2.0, 3.0].into();
    assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_projection_and_rejection() {
    let v = Vector3::new(3.0f32, 4.0, 0.0);
    let onto = Vector3::new(2.0, 0.0, 0.0);

    assert_eq!(v.project(&onto), Vector3::new(3.0, 0.0, 0.0));
    assert_eq!(v.project_on_unit(&Vector3::unit_x()), Vector3::new(3.0, 0.0, 0.0));
    assert_eq!(v.reject(&onto), Vector3::new(0.0, 4.0, 0.0));
    assert_eq!(v.project(&Vector3::zero()), Vector3::zero());
}

#[test]
fn test_angle_and_distance() {
    let x = Vector3::<f32>::unit_x();
    let y = Vector3::<f32>::unit_y();

    assert_relative_eq!(x.angle_between(&y), PI / 2.0, epsilon = 1e-6);
    assert_relative_eq!(x.angle_between(&-x), PI, epsilon = 1e-6);
    assert_eq!(x.angle_between(&Vector3::zero()), 0.0);

    assert_relative_eq!(x.distance(&y), 2.0f32.sqrt());
    assert_relative_eq!(x.distance_squared(&y), 2.0);
    assert_eq!(x.lerp(&y, 0.5), Vector3::new(0.5, 0.5, 0.0));
}

#[test]
fn test_triple_products() {
    let x = Vector3::<f32>::unit_x();
    let y = Vector3::<f32>::unit_y();
    let z = Vector3::<f32>::unit_z();

    assert_eq!(x.triple_scalar_product(&y, &z), 1.0);
    assert_eq!(y.triple_scalar_product(&x, &z), -1.0);

    // a × (b × c) = b(a·c) - c(a·b)
    let a = Vector3::new(1.0f32, 2.0, 3.0);
    let b = Vector3::new(-1.0, 0.5, 2.0);
    let c = Vector3::new(0.0, 1.0, -1.0);
    let expected = b * a.dot(&c) - c * a.dot(&b);
    assert_relative_eq!(a.triple_vector_product(&b, &c), expected, epsilon = 1e-5);
}

#[test]
fn test_any_orthogonal() {
    for v in [
        Vector3::new(1.0f32, 0.0, 0.0),
        Vector3::new(0.0, 0.0, -3.0),
        Vector3::new(1.0, 2.0, 3.0),
    ] {
        let o = v.any_orthogonal();
        assert!(o.is_unit());
        assert!(o.is_orthogonal(&v));
    }
}

#[test]
fn test_vector2_perpendicular() {
    let v = Vector2::new(1.0f32, 2.0);
    assert_eq!(v.perpendicular(true), Vector2::new(-2.0, 1.0));
    assert_eq!(v.perpendicular(false), Vector2::new(2.0, -1.0));
    assert_eq!(v.cross(&v.perpendicular(true)), v.length_squared());
}

#[test]
fn test_spherical_coordinates() {
    let v = Vector3D::new(1.0, 2.0, 3.0);
    let (radius, phi, theta) = v.to_spherical();
    assert_relative_eq!(radius, 14.0f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(Vector3D::from_spherical(radius, phi, theta), v, epsilon = 1e-12);

    // +y is the pole, +z the zero azimuth
    assert_relative_eq!(
        Vector3D::from_spherical(2.0, 0.0, 0.0),
        Vector3D::new(0.0, 2.0, 0.0),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        Vector3D::from_spherical(1.0, std::f64::consts::FRAC_PI_2, 0.0),
        Vector3D::unit_z(),
        epsilon = 1e-12
    );
}

#[test]
fn test_vector4_homogeneous() {
    let p = Vector3::new(1.0f32, 2.0, 3.0);

    let point = Vector4::as_affine_point(p);
    assert!(point.is_affine_point());
    assert_eq!(point.xyz(), p);

    let direction = Vector4::as_affine_vector(p);
    assert!(direction.is_affine_vector());
    assert_eq!(direction.homogeneous_divide(), p);

    let homogeneous = Vector4::as_homogeneous_point(p, 2.0);
    assert_eq!(homogeneous, Vector4::new(2.0, 4.0, 6.0, 2.0));
    assert_eq!(homogeneous.homogeneous_divide(), p);

    // arithmetic acts on all four components
    assert_eq!(point + direction, Vector4::new(2.0, 4.0, 6.0, 1.0));
}

#[test]
fn test_gram_schmidt_orthonormalizes() {
    let input = [
        Vector3D::new(1.0, 1.0, 0.0),
        Vector3D::new(1.0, 0.0, 1.0),
        Vector3D::new(0.0, 1.0, 1.0),
    ];
    let basis = orthonormalize(&input);

    assert_eq!(basis.len(), 3);
    for (i, u) in basis.iter().enumerate() {
        assert_relative_eq!(u.length(), 1.0, epsilon = 1e-12);
        for v in &basis[i + 1..] {
            assert_relative_eq!(u.dot(v), 0.0, epsilon = 1e-12);
        }
    }
    // the first output keeps the direction of the first input
    assert_relative_eq!(basis[0], input[0].normalize(), epsilon = 1e-12);
}

#[test]
fn test_gram_schmidt_dependent_input_yields_zero() {
    let input = [
        Vector4::new(1.0f32, 0.0, 0.0, 0.0),
        Vector4::new(2.0, 0.0, 0.0, 0.0),
        Vector4::new(1.0, 1.0, 0.0, 0.0),
    ];
    let basis = orthonormalize(&input);

    assert_eq!(basis[0], Vector4::unit_x());
    assert!(basis[1].is_zero());
    assert_eq!(basis[2], Vector4::unit_y());
}

#[test]
fn test_scalar_utilities() {
    assert_relative_eq!(to_radians(180.0f32), PI);
    assert_relative_eq!(to_degrees(PI), 180.0);
    assert_eq!(clamp(5.0f32, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0f32, 0.0, 1.0), 0.0);
    assert_eq!(lerp(2.0f32, 4.0, 0.25), 2.5);
    assert!(approx_eq(1.0f32, 1.0 + 5.0e-7));
    assert!(!approx_eq(1.0f64, 1.0 + 1.0e-7));
}

#[test]
fn test_nalgebra_conversion() {
    let v = Vector3::new(1.0f32, -2.0, 0.5);
    let na_v = v.to_nalgebra();
    assert_eq!(na_v.y, -2.0);
    assert_eq!(Vector3::from_nalgebra(&na_v), v);
}
