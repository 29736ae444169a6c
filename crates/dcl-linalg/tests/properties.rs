//! Randomized property sweeps over the public kernel API.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use dcl_linalg::{vec3, vec4, Axis, Matrix, Vector};

const ITERATIONS: usize = 500;

fn random_vector(rng: &mut fastrand::Rng) -> Vector {
    let mut c = || (rng.f64() - 0.5) * 200.0;
    vec4(c(), c(), c(), c())
}

fn random_point(rng: &mut fastrand::Rng) -> Vector {
    random_vector(rng).with_w(1.0)
}

fn random_degrees(rng: &mut fastrand::Rng) -> f64 {
    (rng.f64() - 0.5) * 720.0
}

#[test]
fn add_zero_is_identity() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0001);
    for _ in 0..ITERATIONS {
        let v = random_vector(&mut rng);
        assert_eq!(v.add(Vector::ZERO), v);
        assert_eq!(v.sub(Vector::ZERO), v);
        assert_eq!(v + Vector::ZERO, v);
    }
}

#[test]
fn magnitude_is_non_negative() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0002);
    for _ in 0..ITERATIONS {
        let v = random_vector(&mut rng);
        assert!(v.magnitude() > 0.0);
        assert_eq!((-v).magnitude(), v.magnitude());
    }
    assert_eq!(Vector::ZERO.magnitude(), 0.0);
}

#[test]
fn normalize_yields_unit_length() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0003);
    for _ in 0..ITERATIONS {
        let n = random_vector(&mut rng).normalize();
        assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn cross_and_dot() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0004);
    for _ in 0..ITERATIONS {
        let a = random_vector(&mut rng);
        let b = random_vector(&mut rng);

        assert_eq!(a.cross(a), Vector::ZERO);
        assert_eq!(a.dot(b), b.dot(a));

        // The cross product is perpendicular to both inputs.
        let c = a.cross(b);
        let scale = a.magnitude() * b.magnitude();
        assert_abs_diff_eq!(c.dot(a) / scale, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.dot(b) / scale, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn rotation_matrices_match_vector_rotations() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0005);
    for _ in 0..ITERATIONS {
        let v = random_point(&mut rng);
        let degrees = random_degrees(&mut rng);
        for axis in Axis::ALL {
            let rotated = match axis {
                Axis::X => v.rotate_x(degrees),
                Axis::Y => v.rotate_y(degrees),
                Axis::Z => v.rotate_z(degrees),
            };
            let transformed = v.transform_by(&Matrix::rotation(axis, degrees));
            assert_abs_diff_eq!(transformed, rotated.with_w(1.0), epsilon = 1e-9);
        }
    }
}

#[test]
fn composition_applies_left_first() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0006);
    for _ in 0..ITERATIONS {
        let v = random_point(&mut rng);
        let a = Matrix::rotation_x(random_degrees(&mut rng)).translate(1.0, -2.0, 3.0);
        let b = Matrix::scaling(2.0, 0.5, 3.0).rotate_axis(Axis::Z, random_degrees(&mut rng));

        let step_by_step = v.transform_by(&a).transform_by(&b);
        assert_abs_diff_eq!(v.transform_by(&(a * b)), step_by_step, epsilon = 1e-9);
    }
}

#[test]
fn fast_inverse_of_look_at() {
    let m = Matrix::look_at(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0), vec3(0.0, 1.0, 0.0));
    assert_abs_diff_eq!(m.multiply(&m.fast_inverse()), Matrix::IDENTITY, epsilon = 1e-6);

    let mut rng = fastrand::Rng::with_seed(0x5eed_0007);
    for _ in 0..ITERATIONS {
        let eye = random_point(&mut rng);
        let target = random_point(&mut rng);
        let m = Matrix::look_at(eye, target, Vector::Y);

        assert_abs_diff_eq!(m.multiply(&m.fast_inverse()), Matrix::IDENTITY, epsilon = 1e-6);
        assert_abs_diff_eq!(m.fast_inverse().multiply(&m), Matrix::IDENTITY, epsilon = 1e-6);
    }
}

#[test]
fn look_at_view_puts_target_ahead() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0008);
    for _ in 0..ITERATIONS {
        let eye = random_point(&mut rng);
        let target = random_point(&mut rng);
        let view = Matrix::look_at(eye, target, Vector::Y).fast_inverse();

        // In view space, the target sits on the +Z axis at its distance from the eye.
        let t = target.transform_by(&view);
        let distance = (target - eye).magnitude();
        assert_abs_diff_eq!(t.x / distance, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(t.y / distance, 0.0, epsilon = 1e-9);
        assert_relative_eq!(t.z, distance, max_relative = 1e-9);
    }
}

#[test]
fn general_inverse_round_trip() {
    let mut rng = fastrand::Rng::with_seed(0x5eed_0009);
    for _ in 0..ITERATIONS {
        let m = Matrix::scaling(1.0 + rng.f64(), 1.0 + rng.f64(), 1.0 + rng.f64())
            .rotate_axis(Axis::Y, random_degrees(&mut rng))
            .translate(rng.f64(), rng.f64(), rng.f64());
        let inv = m.try_inverse().expect("affine matrix with non-zero scale is invertible");

        assert_abs_diff_eq!(m * inv, Matrix::IDENTITY, epsilon = 1e-9);
        assert_relative_eq!(m.determinant() * inv.determinant(), 1.0, epsilon = 1e-9);
    }
}
