//! Transform and NodeState tests
//!
//! Tests for:
//! - Transform TRS + shear composition and dirty checking
//! - HPR round trips
//! - NodeState as a lerp target

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3, Vec4};

use node_lerp::animation::{LerpSample, LerpTarget, Rotation};
use node_lerp::scene::{NodeState, Transform};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn quat_approx(a: Quat, b: Quat) -> bool {
    // q and -q are the same rotation
    a.dot(b).abs() > 1.0 - 1e-6
}

// ============================================================================
// Transform
// ============================================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::new();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
    assert_eq!(t.shear, Vec3::ZERO);
}

#[test]
fn transform_update_local_matrix_dirty_check() {
    let mut t = Transform::new();

    // First call always recomposes
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.set_position(Vec3::new(1.0, 2.0, 3.0));
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.shear = Vec3::new(0.5, 0.0, 0.0);
    assert!(t.update_local_matrix());

    t.mark_dirty();
    assert!(t.update_local_matrix());
}

#[test]
fn transform_matrix_without_shear_matches_trs() {
    let mut t = Transform::new();
    t.position = Vec3::new(5.0, -3.0, 7.0);
    t.rotation = Quat::from_rotation_y(0.7);
    t.scale = Vec3::new(2.0, 3.0, 1.5);
    t.update_local_matrix();

    let expected = glam::Affine3A::from_scale_rotation_translation(t.scale, t.rotation, t.position);
    let p = Vec3::new(1.0, -2.0, 0.5);
    assert!(vec3_approx(
        t.local_matrix().transform_point3(p),
        expected.transform_point3(p)
    ));
}

#[test]
fn transform_shear_skews_after_scale() {
    let mut t = Transform::new();
    t.scale = Vec3::new(1.0, 2.0, 1.0);
    t.shear = Vec3::new(0.5, 0.0, 0.0);
    t.update_local_matrix();

    // y is scaled to 2, then contributes 0.5 * 2 to x
    let p = t.local_matrix().transform_point3(Vec3::new(0.0, 1.0, 0.0));
    assert!(vec3_approx(p, Vec3::new(1.0, 2.0, 0.0)));

    t.shear = Vec3::new(0.0, 1.0, 2.0);
    t.update_local_matrix();
    let p = t.local_matrix().transform_point3(Vec3::new(0.0, 0.0, 1.0));
    assert!(vec3_approx(p, Vec3::new(1.0, 2.0, 1.0)));
}

#[test]
fn transform_hpr_round_trip() {
    let mut t = Transform::new();
    let hpr = Vec3::new(0.3, -0.4, 1.1);
    t.set_hpr(hpr);
    assert!(vec3_approx(t.hpr(), hpr));
}

#[test]
fn transform_heading_turns_about_y() {
    let mut t = Transform::new();
    t.set_hpr(Vec3::new(FRAC_PI_2, 0.0, 0.0));
    assert!(quat_approx(t.rotation, Quat::from_rotation_y(FRAC_PI_2)));
}

// ============================================================================
// NodeState
// ============================================================================

#[test]
fn node_state_reports_current_values() {
    let mut node = NodeState::new();
    node.transform.position = Vec3::X;
    node.transform.shear = Vec3::Y;
    node.color = Vec4::new(0.2, 0.4, 0.6, 1.0);
    node.tex_rotation = 0.5;

    let values = node.property_values();
    assert_eq!(values.position, Vec3::X);
    assert_eq!(values.shear, Vec3::Y);
    assert_eq!(values.color, Vec4::new(0.2, 0.4, 0.6, 1.0));
    assert_eq!(values.scale, Vec3::ONE);
    assert_eq!(values.color_scale, Vec4::ONE);
    assert_eq!(values.tex_scale, Vec2::ONE);
    assert!(approx_eq(values.tex_rotation, 0.5));
}

#[test]
fn node_state_applies_only_present_fields() {
    let mut node = NodeState::new();
    node.transform.position = Vec3::splat(9.0);

    let sample = LerpSample {
        rotation: Some(Rotation::Hpr(Vec3::new(FRAC_PI_2, 0.0, 0.0))),
        tex_offset: Some(Vec2::new(0.5, 0.5)),
        ..Default::default()
    };
    node.apply_sample(&sample, 4);

    assert_eq!(node.transform.position, Vec3::splat(9.0));
    assert!(vec3_approx(node.transform.hpr(), Vec3::new(FRAC_PI_2, 0.0, 0.0)));
    assert_eq!(node.tex_offset, Vec2::new(0.5, 0.5));
    assert_eq!(node.override_priority(), 4);
}

#[test]
fn node_state_applies_quaternion_directly() {
    let mut node = NodeState::new();
    let quat = Quat::from_rotation_z(0.25);
    let sample = LerpSample {
        rotation: Some(Rotation::Quat(quat)),
        scale: Some(Vec3::splat(2.0)),
        ..Default::default()
    };
    node.apply_sample(&sample, 1);

    assert_eq!(node.transform.rotation, quat);
    assert_eq!(node.transform.scale, Vec3::splat(2.0));
    // Transform-only writes leave the attribute priority alone
    assert_eq!(node.override_priority(), 0);
}
