//! Integration tests for drape-mesh.

use drape_math::{Quat, Vec3};
use drape_mesh::generators::{garment_tube, grid_indices, quad_grid, uniform_tube};
use drape_mesh::normals::compute_vertex_normals;
use drape_mesh::{GarmentMesh, MorphTargets, SubMesh, Transform};
use drape_types::{BodyZone, GarmentSource};

// ─── SubMesh Tests ────────────────────────────────────────────

fn make_single_triangle() -> SubMesh {
    SubMesh::from_interleaved(
        "tri",
        &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        &[],
        &[0, 1, 2],
    )
    .unwrap()
}

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert!(!mesh.has_normals());
    assert!(!mesh.has_morph_targets());
}

#[test]
fn position_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.position(1), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(mesh.positions_interleaved().len(), 9);
}

#[test]
fn non_indexed_triangles() {
    let mesh = SubMesh::from_positions(
        "soup",
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    );
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.triangle(0), [0, 1, 2]);
    assert!(mesh.validate().is_ok());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn from_interleaved_rejects_bad_lengths() {
    assert!(SubMesh::from_interleaved("bad", &[0.0, 1.0], &[], &[]).is_err());
    assert!(SubMesh::from_interleaved("bad", &[0.0, 1.0, 2.0], &[0.0], &[]).is_err());
}

#[test]
fn validate_catches_morph_delta_mismatch() {
    let mut targets = MorphTargets::new();
    targets.add_target("bust_large", vec![[0.0, 0.0, 0.1]]);
    let mesh = make_single_triangle().with_morph_targets(targets);
    assert!(mesh.validate().is_err());
}

// ─── Rest Pose Tests ──────────────────────────────────────────

#[test]
fn rest_pose_is_captured_once() {
    let mut mesh = make_single_triangle();
    mesh.capture_rest();
    mesh.pos_x[1] = 5.0;
    mesh.capture_rest();
    assert_eq!(mesh.rest_position(1).x, 1.0);
    assert_eq!(mesh.position(1).x, 5.0);
}

#[test]
fn restore_rest_reports_change() {
    let mut mesh = make_single_triangle();
    assert!(!mesh.restore_rest()); // Nothing captured yet
    mesh.capture_rest();
    assert!(!mesh.restore_rest());
    mesh.pos_z[0] = 0.3;
    assert!(mesh.restore_rest());
    assert_eq!(mesh.pos_z[0], 0.0);
}

#[test]
fn rest_bounds_ignore_deformation() {
    let mut mesh = make_single_triangle();
    mesh.capture_rest();
    mesh.pos_x[1] = 10.0;
    assert_eq!(mesh.rest_bounds().width(), 1.0);
    assert_eq!(mesh.local_bounds().width(), 10.0);
}

// ─── Morph Target Tests ───────────────────────────────────────

#[test]
fn morph_dictionary_lookup() {
    let mut targets = MorphTargets::from_names(["chest_large", "waist_wide"]);
    assert_eq!(targets.len(), 2);
    assert_eq!(targets.index_of("waist_wide"), Some(1));
    assert!(targets.set_influence("chest_large", 0.6));
    assert!(!targets.set_influence("missing", 1.0));
    assert_eq!(targets.influence("chest_large"), Some(0.6));
    assert_eq!(targets.influence("missing"), None);
}

#[test]
fn morph_re_register_keeps_index() {
    let mut targets = MorphTargets::new();
    let a = targets.add_target("hips_wide", Vec::new());
    let b = targets.add_target("hips_wide", vec![[1.0, 0.0, 0.0]]);
    assert_eq!(a, b);
    assert_eq!(targets.len(), 1);
}

#[test]
fn morphed_positions_blend_deltas() {
    let mut targets = MorphTargets::new();
    targets.add_target("bust_large", vec![[0.0, 0.0, 1.0]; 3]);
    targets.set_influence("bust_large", 0.5);
    let mesh = make_single_triangle().with_morph_targets(targets);
    let morphed = mesh.morphed_positions();
    assert!((morphed[2] - 0.5).abs() < 1e-6);
    assert!((morphed[5] - 0.5).abs() < 1e-6);
    // Base buffer untouched
    assert_eq!(mesh.pos_z[0], 0.0);
}

#[test]
fn morph_targets_serialization() {
    let targets = MorphTargets::from_names(["a", "b"]);
    let json = serde_json::to_string(&targets).unwrap();
    let recovered: MorphTargets = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, targets);
}

// ─── Garment Tests ────────────────────────────────────────────

#[test]
fn garment_bounds_follow_transform() {
    let mut garment = GarmentMesh::new(vec![make_single_triangle()])
        .with_zone(BodyZone::Lower)
        .with_source(GarmentSource::Generated);
    assert_eq!(garment.world_bounds(), garment.local_bounds());

    garment.transform = Transform {
        translation: Vec3::new(0.0, 2.0, 0.0),
        rotation: Quat::IDENTITY,
        scale: 2.0,
    };
    let world = garment.world_bounds();
    assert!((world.height() - 2.0).abs() < 1e-6);
    assert!((world.min.y - 2.0).abs() < 1e-6);

    garment.reset_transform();
    assert!(garment.transform.is_identity());
    assert_eq!(garment.body_zone, BodyZone::Lower);
}

#[test]
fn garment_rest_bounds_follow_transform_not_deformation() {
    let mut garment = GarmentMesh::new(vec![make_single_triangle()]);
    assert_eq!(garment.rest_world_bounds(), garment.world_bounds());

    garment.sub_meshes[0].capture_rest();
    garment.sub_meshes[0].pos_x[1] = 10.0;
    garment.transform = Transform {
        translation: Vec3::new(1.0, 0.0, 0.0),
        rotation: Quat::IDENTITY,
        scale: 2.0,
    };

    let rest = garment.rest_world_bounds();
    assert!((rest.width() - 2.0).abs() < 1e-6);
    assert!((rest.min.x - 1.0).abs() < 1e-6);
    assert!((garment.world_bounds().width() - 20.0).abs() < 1e-6);
    assert_eq!(garment.rest_local_bounds().width(), 1.0);
}

#[test]
fn generators_start_without_rest_pose() {
    assert!(quad_grid(2, 2, 1.0, 1.0).rest().is_none());
    assert!(uniform_tube(0.2, 1.0, 3, 8).rest().is_none());
}

#[test]
fn garment_detects_morph_targets() {
    let plain = GarmentMesh::new(vec![make_single_triangle()]);
    assert!(!plain.has_morph_targets());

    let empty_dict = GarmentMesh::new(vec![make_single_triangle()
        .with_morph_targets(MorphTargets::new())]);
    assert!(!empty_dict.has_morph_targets());

    let morphed = GarmentMesh::new(vec![
        make_single_triangle(),
        make_single_triangle().with_morph_targets(MorphTargets::from_names(["bust_large"])),
    ]);
    assert!(morphed.has_morph_targets());
    assert_eq!(morphed.vertex_count(), 6);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn quad_grid_2x2() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.triangle_count(), 8);
    assert!(mesh.validate().is_ok());
}

#[test]
fn quad_grid_dimensions() {
    let mesh = quad_grid(4, 4, 2.0, 2.0);
    assert!((mesh.pos_x[0] - (-1.0)).abs() < 1e-6);
    assert!((mesh.pos_y[0] - 1.0).abs() < 1e-6);
    assert!((mesh.pos_x[4] - 1.0).abs() < 1e-6);
}

#[test]
fn grid_indices_count() {
    assert_eq!(grid_indices(3, 5).len(), 3 * 5 * 6);
}

#[test]
fn tube_shape() {
    let tube = garment_tube(&[0.3, 0.2, 0.25], 0.9, 12);
    assert_eq!(tube.vertex_count(), 36);
    assert_eq!(tube.triangle_count(), 2 * 2 * 12);
    assert!(tube.validate().is_ok());
    let bounds = tube.local_bounds();
    assert!((bounds.width() - 0.6).abs() < 1e-5);
    assert!((bounds.min.y).abs() < 1e-6);
}

#[test]
fn tube_requires_two_rings() {
    assert_eq!(garment_tube(&[0.3], 1.0, 8).vertex_count(), 0);
    assert_eq!(uniform_tube(0.3, 1.0, 4, 2).vertex_count(), 0);
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn tube_normals_point_outward() {
    let tube = uniform_tube(0.5, 1.0, 3, 16);
    assert!(tube.has_normals());
    for i in 0..tube.vertex_count() {
        let p = tube.position(i);
        let n = tube.normal(i);
        let radial = Vec3::new(p.x, 0.0, p.z).normalize();
        assert!(n.dot(radial) > 0.9, "vertex {i}: normal {n:?} not outward");
    }
}

#[test]
fn normals_of_flat_triangle() {
    let mut mesh = make_single_triangle();
    compute_vertex_normals(&mut mesh);
    assert!(mesh.has_normals());
    for i in 0..3 {
        assert!((mesh.normal(i) - Vec3::Z).length() < 1e-6);
    }
}

#[test]
fn normals_are_unit_length() {
    let mut mesh = quad_grid(4, 4, 1.0, 1.0);
    compute_vertex_normals(&mut mesh);
    for i in 0..mesh.vertex_count() {
        assert!((mesh.normal(i).length() - 1.0).abs() < 1e-5);
    }
}
