use veld_geom::{Aabb, Vec2};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec2_approx_eq(a: Vec2, b: Vec2, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

#[test]
fn vec2_constants() {
    assert!(vec2_approx_eq(Vec2::ZERO, Vec2::new(0.0, 0.0), 1e-6));
}

#[test]
fn vec2_add_sub() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(-4.0, 5.0);
    let c = a + b;
    assert!(vec2_approx_eq(c, Vec2::new(-3.0, 7.0), 1e-6));

    let d = c - a;
    assert!(vec2_approx_eq(d, b, 1e-6));
}

#[test]
fn vec2_add_assign_sub_assign() {
    let mut v = Vec2::new(1.0, 1.0);
    v += Vec2::new(2.0, 3.0);
    assert!(vec2_approx_eq(v, Vec2::new(3.0, 4.0), 1e-6));

    v -= Vec2::new(1.0, 2.0);
    assert!(vec2_approx_eq(v, Vec2::new(2.0, 2.0), 1e-6));
}

#[test]
fn vec2_scalar_mul_div() {
    let v = Vec2::new(1.5, -2.0);
    let m = v * 2.0;
    assert!(vec2_approx_eq(m, Vec2::new(3.0, -4.0), 1e-6));

    let d = m / 2.0;
    assert!(vec2_approx_eq(d, v, 1e-6));
}

#[test]
fn vec2_dot_length_normalized() {
    let v = Vec2::new(3.0, 4.0);
    assert!(approx_eq(v.dot(v), 25.0, 1e-6));
    assert!(approx_eq(v.length(), 5.0, 1e-6));

    let n = v.normalized();
    assert!(approx_eq(n.length(), 1.0, 1e-6));
    assert!(vec2_approx_eq(n, Vec2::new(0.6, 0.8), 1e-6));

    // Zero vector normalization should be a no-op (not NaN, unchanged)
    let z = Vec2::ZERO;
    let zn = z.normalized();
    assert!(vec2_approx_eq(zn, Vec2::ZERO, 1e-6));
}

#[test]
fn vec2_lerp_endpoints_and_midpoint() {
    let a = Vec2::new(-2.0, 4.0);
    let b = Vec2::new(6.0, -4.0);
    assert!(vec2_approx_eq(a.lerp(b, 0.0), a, 1e-6));
    assert!(vec2_approx_eq(a.lerp(b, 1.0), b, 1e-6));
    assert!(vec2_approx_eq(a.lerp(b, 0.5), Vec2::new(2.0, 0.0), 1e-6));
}

#[test]
fn aabb_new_and_contains() {
    let min = Vec2::new(-1.0, 0.0);
    let max = Vec2::new(2.0, 3.0);
    let aabb = Aabb::new(min, max);
    assert!(vec2_approx_eq(aabb.min, min, 1e-6));
    assert!(vec2_approx_eq(aabb.max, max, 1e-6));

    assert!(aabb.contains(Vec2::new(0.0, 1.0)));
    assert!(aabb.contains(min));
    // max edge is exclusive
    assert!(!aabb.contains(max));
    assert!(!aabb.contains(Vec2::new(-1.5, 1.0)));
}
