//! Integration tests for drape-fit.

use std::f32::consts::PI;

use drape_body::{BodyMeasurements, Landmark, MeasurementKey, ParametricMannequin, StaticMannequin};
use drape_fit::{
    classify_body_zone, AdaptReport, BodyDeformationAdapter, BoundsStandardizer, DeformStrategy,
    FitConfig, FitResult, GarmentDescriptor, GarmentFitter, GarmentNormalizer, IdentityStandardizer,
    MorphAliasTable, OrientationStandardizer,
};
use drape_math::{Aabb, Vec3};
use drape_mesh::generators::uniform_tube;
use drape_mesh::{GarmentMesh, MorphTargets, SubMesh};
use drape_telemetry::{EventBus, EventKind, VecSink};
use drape_types::{BodyZone, GarmentSource};

/// 1.7 m tall body: one world unit per meter, 0.01 per centimeter.
fn body() -> StaticMannequin {
    StaticMannequin::new(Aabb::new(
        Vec3::new(-0.25, 0.0, -0.15),
        Vec3::new(0.25, 1.7, 0.15),
    ))
}

/// Unit-height tube whose slice width is `width`.
fn tube_of_width(width: f32) -> GarmentMesh {
    GarmentMesh::new(vec![uniform_tube(width / 2.0, 1.0, 11, 16)])
}

fn top() -> GarmentDescriptor {
    GarmentDescriptor::new("Basic Tee", "tops", GarmentSource::Template)
}

fn jeans() -> GarmentDescriptor {
    GarmentDescriptor::new("Slim Jeans", "denim", GarmentSource::Generated)
}

fn standard_normalizer() -> GarmentNormalizer {
    GarmentNormalizer::default()
}

fn standard_fitter() -> GarmentFitter {
    GarmentFitter::default()
}

fn identity_normalizer() -> GarmentNormalizer<IdentityStandardizer> {
    GarmentNormalizer::new(
        drape_body::BodyZoneTable::DEFAULT,
        FitConfig::default(),
        IdentityStandardizer,
    )
}

// ─── Classification ───────────────────────────────────────────

#[test]
fn bottom_keywords_classify_lower() {
    assert_eq!(classify_body_zone("Slim Chino", ""), BodyZone::Lower);
    assert_eq!(classify_body_zone("Pleated SKIRT", "womens"), BodyZone::Lower);
    assert_eq!(classify_body_zone("Runner", "Joggers"), BodyZone::Lower);
    assert_eq!(classify_body_zone("Item 42", "bottoms"), BodyZone::Lower);
}

#[test]
fn everything_else_is_upper() {
    assert_eq!(classify_body_zone("Short-sleeve tee", "tops"), BodyZone::Upper);
    assert_eq!(classify_body_zone("", ""), BodyZone::Upper);
    assert_eq!(top().body_zone(), BodyZone::Upper);
}

// ─── Normalization ────────────────────────────────────────────

#[test]
fn baseline_upper_scale_is_one() {
    let measurements = BodyMeasurements::default();
    let target = 0.9 / PI; // 90 cm bust / π, in meters
    let mut mesh = tube_of_width(target);

    let result = identity_normalizer().normalize(&mut mesh, &top(), &measurements, &body());
    assert_eq!(result.body_zone, BodyZone::Upper);
    assert!(!result.slice.fallback);
    assert!(result.slice.samples >= 5);
    assert!((result.world_per_cm - 0.01).abs() < 1e-6);
    assert!((result.scale - 1.0).abs() < 1e-4, "scale = {}", result.scale);
}

#[test]
fn baseline_lower_scale_includes_ease() {
    let measurements = BodyMeasurements::default();
    let target = 0.95 / PI; // 95 cm hips / π
    let mut mesh = tube_of_width(target);

    let result = identity_normalizer().normalize(&mut mesh, &jeans(), &measurements, &body());
    assert_eq!(result.body_zone, BodyZone::Lower);
    assert_eq!(mesh.body_zone, BodyZone::Lower);
    assert_eq!(mesh.source, GarmentSource::Generated);
    assert!((result.scale - 1.08).abs() < 1e-4, "scale = {}", result.scale);
}

#[test]
fn scale_clamps_to_upper_bound() {
    let measurements = BodyMeasurements::default();
    let mut mesh = tube_of_width(0.9 / PI / 50.0);
    let result = identity_normalizer().normalize(&mut mesh, &top(), &measurements, &body());
    assert!((result.raw_ratio - 50.0).abs() < 0.05);
    assert_eq!(result.scale, 5.0);

    let mut mesh = tube_of_width(0.95 / PI / 50.0);
    let result = identity_normalizer().normalize(&mut mesh, &jeans(), &measurements, &body());
    assert_eq!(result.scale, 5.0);
}

#[test]
fn scale_clamps_to_lower_bound() {
    let measurements = BodyMeasurements::default();
    let mut mesh = tube_of_width(0.9 / PI / 0.01);
    let result = identity_normalizer().normalize(&mut mesh, &top(), &measurements, &body());
    assert!((result.raw_ratio - 0.01).abs() < 1e-5);
    assert_eq!(result.scale, 0.1);

    let mut mesh = tube_of_width(0.95 / PI / 0.01);
    let result = identity_normalizer().normalize(&mut mesh, &jeans(), &measurements, &body());
    assert_eq!(result.scale, 0.1);
}

#[test]
fn sparse_slice_falls_back_to_bounds() {
    // Two rings at y = 0 and y = 1: nothing inside the bust band.
    let mut mesh = GarmentMesh::new(vec![uniform_tube(0.2, 1.0, 2, 8)]);
    let result = identity_normalizer().normalize(
        &mut mesh,
        &top(),
        &BodyMeasurements::default(),
        &body(),
    );
    assert!(result.slice.fallback);
    assert_eq!(result.slice.samples, 0);
    assert!((result.slice.width - 0.4).abs() < 1e-5);
    assert!(result.scale.is_finite());
}

#[test]
fn degenerate_inputs_degrade_to_unit_scale() {
    let flat_body = StaticMannequin::new(Aabb::new(Vec3::ZERO, Vec3::ZERO));
    let mut mesh = tube_of_width(0.3);
    let result = identity_normalizer().normalize(
        &mut mesh,
        &top(),
        &BodyMeasurements::default(),
        &flat_body,
    );
    assert_eq!(result.scale, 1.0);

    let mut empty = GarmentMesh::default();
    let result = standard_normalizer().normalize(
        &mut empty,
        &top(),
        &BodyMeasurements::default(),
        &body(),
    );
    assert_eq!(result.scale, 1.0);
    assert_eq!(result.garment_height, 0.0);
}

#[test]
fn anchor_prefers_live_landmark() {
    let mannequin = body()
        .with_landmark(Landmark::Neck, Vec3::new(0.0, 1.52, 0.0))
        .with_landmark(Landmark::Waist, Vec3::new(0.0, 1.01, 0.0));
    let measurements = BodyMeasurements::default();

    let mut mesh = tube_of_width(0.3);
    let upper = identity_normalizer().normalize(&mut mesh, &top(), &measurements, &mannequin);
    assert_eq!(upper.anchor_y, 1.52);
    assert!(!upper.landmark_fallback);

    let lower = identity_normalizer().normalize(&mut mesh, &jeans(), &measurements, &mannequin);
    assert_eq!(lower.anchor_y, 1.01);
}

#[test]
fn anchor_falls_back_to_zone_fraction() {
    let measurements = BodyMeasurements::default();
    let mut mesh = tube_of_width(0.3);
    let upper = identity_normalizer().normalize(&mut mesh, &top(), &measurements, &body());
    assert!(upper.landmark_fallback);
    assert!((upper.anchor_y - 1.7 * 0.87).abs() < 1e-5);

    let lower = identity_normalizer().normalize(&mut mesh, &jeans(), &measurements, &body());
    assert!((lower.anchor_y - 1.7 * 0.62).abs() < 1e-5);
}

#[test]
fn bounds_standardizer_produces_unit_height_centered_frame() {
    let mut sub = uniform_tube(0.5, 2.0, 5, 12);
    for y in &mut sub.pos_y {
        *y += 3.0;
    }
    let mut mesh = GarmentMesh::new(vec![sub]);
    BoundsStandardizer.standardize(&mut mesh);

    let bounds = mesh.world_bounds();
    assert!((bounds.height() - 1.0).abs() < 1e-5);
    assert!(bounds.center().length() < 1e-5);
    assert!((mesh.transform.scale - 0.5).abs() < 1e-6);
}

#[test]
fn normalize_only_touches_transform() {
    let mut mesh = tube_of_width(0.3);
    let before = mesh.sub_meshes[0].positions_interleaved();
    standard_normalizer().normalize(
        &mut mesh,
        &top(),
        &BodyMeasurements::default(),
        &body(),
    );
    assert_eq!(mesh.sub_meshes[0].positions_interleaved(), before);
    assert!(!mesh.transform.is_identity());
}

// ─── Lattice Deformation ──────────────────────────────────────

/// Points spanning x ∈ [-1, 1], y ∈ [0, 1] with probes near the waist.
fn probe_garment() -> GarmentMesh {
    GarmentMesh::new(vec![SubMesh::from_positions(
        "probe",
        &[
            [-1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.5, 0.35, 0.0],  // waist center for an upper garment
            [0.5, 0.53, 0.0],  // edge of the waist falloff
            [-0.5, 0.44, 0.0], // half-way: t = 0.5
        ],
    )])
}

#[test]
fn lattice_is_noop_within_tolerance() {
    let adapter = BodyDeformationAdapter::default();
    let mut mesh = probe_garment();
    let before = mesh.sub_meshes[0].positions_interleaved();

    let near = BodyMeasurements::default()
        .with(MeasurementKey::Waist, 71.5)
        .with(MeasurementKey::Bust, 92.0);
    let report = adapter.adapt(&mut mesh, None, &near, BodyZone::Upper);

    assert_eq!(report.strategy, DeformStrategy::None);
    assert_eq!(report.displaced_vertices, 0);
    assert_eq!(mesh.sub_meshes[0].positions_interleaved(), before);
}

#[test]
fn lattice_waist_falloff() {
    let adapter = BodyDeformationAdapter::default();
    let mut mesh = probe_garment();
    let wide = BodyMeasurements::default().with(MeasurementKey::Waist, 84.0);
    let report = adapter.adapt(&mut mesh, None, &wide, BodyZone::Upper);
    assert_eq!(report.strategy, DeformStrategy::Lattice);
    assert!(report.displaced_vertices >= 2);

    let sub = &mesh.sub_meshes[0];
    // t = 0: full offset (0.5 − 0) × 0.2.
    assert!((sub.position(2).x - 0.6).abs() < 1e-5);
    assert_eq!(sub.position(2).y, 0.35);
    // t = 1: weight exp(−3) at most.
    let edge = sub.position(3).x - 0.5;
    assert!(edge.abs() <= 0.5 * 0.2 * (-3.0f32).exp() + 1e-5);
    // t = 0.5: weight exp(−0.75), pushed outward on the −X side.
    let expected = -0.5 * 0.2 * (-0.75f32).exp();
    assert!((sub.position(4).x - (-0.5 + expected)).abs() < 1e-4);
    // Far from every active zone.
    assert_eq!(sub.position(0), Vec3::new(-1.0, 0.0, 0.0));
}

#[test]
fn lattice_is_idempotent() {
    let adapter = BodyDeformationAdapter::default();
    let mut mesh = probe_garment();
    let body = BodyMeasurements::default()
        .with(MeasurementKey::Waist, 84.0)
        .with(MeasurementKey::Bust, 104.0);

    adapter.adapt(&mut mesh, None, &body, BodyZone::Upper);
    let once = mesh.sub_meshes[0].positions_interleaved();
    let second = adapter.adapt(&mut mesh, None, &body, BodyZone::Upper);
    assert_eq!(mesh.sub_meshes[0].positions_interleaved(), once);
    assert_eq!(second.modified_sub_meshes, 0);
}

#[test]
fn lattice_returns_to_rest_for_baseline_body() {
    let adapter = BodyDeformationAdapter::default();
    let mut mesh = probe_garment();
    let rest = mesh.sub_meshes[0].positions_interleaved();

    let wide = BodyMeasurements::default().with(MeasurementKey::Waist, 84.0);
    adapter.adapt(&mut mesh, None, &wide, BodyZone::Upper);
    adapter.adapt(&mut mesh, None, &BodyMeasurements::default(), BodyZone::Upper);
    assert_eq!(mesh.sub_meshes[0].positions_interleaved(), rest);
}

#[test]
fn zones_are_filtered_by_body_zone() {
    let adapter = BodyDeformationAdapter::default();

    // Hips do not apply to upper garments.
    let mut mesh = probe_garment();
    let hips = BodyMeasurements::default().with(MeasurementKey::Hips, 120.0);
    let report = adapter.adapt(&mut mesh, None, &hips, BodyZone::Upper);
    assert_eq!(report.strategy, DeformStrategy::None);

    // Shoulders and bust do not apply to lower garments.
    let mut mesh = probe_garment();
    let top_heavy = BodyMeasurements::default()
        .with(MeasurementKey::ShoulderWidth, 50.0)
        .with(MeasurementKey::Bust, 120.0);
    let report = adapter.adapt(&mut mesh, None, &top_heavy, BodyZone::Lower);
    assert_eq!(report.strategy, DeformStrategy::None);

    // Hips sit near the top of a lower garment.
    let mut mesh = GarmentMesh::new(vec![uniform_tube(0.2, 1.0, 11, 16)]);
    let report = adapter.adapt(&mut mesh, None, &hips, BodyZone::Lower);
    assert_eq!(report.strategy, DeformStrategy::Lattice);
    let ring = mesh.sub_meshes[0].position(8 * 16);
    assert!(ring.x > 0.2, "hip ring should flare outward, x = {}", ring.x);
}

#[test]
fn lattice_recomputes_normals() {
    let adapter = BodyDeformationAdapter::default();
    let mut mesh = GarmentMesh::new(vec![uniform_tube(0.2, 1.0, 11, 16)]);
    let before: Vec<f32> = mesh.sub_meshes[0].normal_y.clone();

    let wide = BodyMeasurements::default().with(MeasurementKey::Waist, 90.0);
    let report = adapter.adapt(&mut mesh, None, &wide, BodyZone::Upper);
    assert_eq!(report.modified_sub_meshes, 1);

    let sub = &mesh.sub_meshes[0];
    assert_ne!(sub.normal_y, before, "flared tube normals should tilt");
    for i in 0..sub.vertex_count() {
        assert!((sub.normal(i).length() - 1.0).abs() < 1e-4);
    }
}

// ─── Morph Mirroring ──────────────────────────────────────────

fn morph_garment(names: &[&str]) -> GarmentMesh {
    let sub = probe_garment().sub_meshes.remove(0);
    GarmentMesh::new(vec![sub.with_morph_targets(MorphTargets::from_names(names.iter().copied()))])
}

fn mannequin_morphs(name: &str, value: f32) -> MorphTargets {
    let mut morphs = MorphTargets::from_names([name]);
    morphs.set_influence(name, value);
    morphs
}

#[test]
fn morph_alias_is_mirrored() {
    let adapter = BodyDeformationAdapter::default();
    let mut mesh = morph_garment(&["chest_large"]);
    let before = mesh.sub_meshes[0].positions_interleaved();

    // A waist that would trigger the lattice if it ran.
    let wide = BodyMeasurements::default().with(MeasurementKey::Waist, 84.0);
    let morphs = mannequin_morphs("bust_large", 0.6);
    let report = adapter.adapt(&mut mesh, Some(&morphs), &wide, BodyZone::Upper);

    assert_eq!(
        report,
        AdaptReport {
            strategy: DeformStrategy::Morph,
            mapped_targets: 1,
            displaced_vertices: 0,
            modified_sub_meshes: 0,
        }
    );
    let targets = mesh.sub_meshes[0].morph_targets.as_ref().unwrap();
    assert_eq!(targets.influence("chest_large"), Some(0.6));
    assert_eq!(mesh.sub_meshes[0].positions_interleaved(), before);
}

#[test]
fn canonical_name_wins_over_alias() {
    let adapter = BodyDeformationAdapter::default();
    let mut mesh = morph_garment(&["bust_expand", "bust_large"]);
    let morphs = mannequin_morphs("bust_large", 0.4);
    adapter.adapt(&mut mesh, Some(&morphs), &BodyMeasurements::default(), BodyZone::Upper);

    let targets = mesh.sub_meshes[0].morph_targets.as_ref().unwrap();
    assert_eq!(targets.influence("bust_large"), Some(0.4));
    assert_eq!(targets.influence("bust_expand"), Some(0.0));
}

#[test]
fn below_threshold_falls_through_to_lattice() {
    let adapter = BodyDeformationAdapter::default();
    let mut mesh = morph_garment(&["bust_large"]);
    let wide = BodyMeasurements::default().with(MeasurementKey::Waist, 84.0);
    let morphs = mannequin_morphs("bust_large", 0.005);

    let report = adapter.adapt(&mut mesh, Some(&morphs), &wide, BodyZone::Upper);
    assert_eq!(report.mapped_targets, 0);
    assert_eq!(report.strategy, DeformStrategy::Lattice);
}

#[test]
fn unknown_garment_keys_fall_through() {
    let adapter = BodyDeformationAdapter::default();
    let mut mesh = morph_garment(&["sleeve_long"]);
    let morphs = mannequin_morphs("bust_large", 0.8);
    let report = adapter.adapt(&mut mesh, Some(&morphs), &BodyMeasurements::default(), BodyZone::Upper);
    assert_eq!(report.strategy, DeformStrategy::None);
}

#[test]
fn morph_path_reverts_lattice_offsets() {
    let adapter = BodyDeformationAdapter::default();
    let mut mesh = morph_garment(&["waist_wide"]);
    let rest = mesh.sub_meshes[0].positions_interleaved();
    let wide = BodyMeasurements::default().with(MeasurementKey::Waist, 84.0);

    adapter.adapt(&mut mesh, None, &wide, BodyZone::Upper);
    assert_ne!(mesh.sub_meshes[0].positions_interleaved(), rest);

    let morphs = ParametricMannequin::new(wide).morph_influences();
    let report = adapter.adapt(&mut mesh, Some(&morphs), &wide, BodyZone::Upper);
    assert_eq!(report.strategy, DeformStrategy::Morph);
    assert_eq!(report.modified_sub_meshes, 1);
    assert_eq!(mesh.sub_meshes[0].positions_interleaved(), rest);
}

#[test]
fn parametric_influences_drive_garment_keys() {
    let body = BodyMeasurements::default().with(MeasurementKey::Bust, 102.0);
    let morphs = ParametricMannequin::new(body).morph_influences();
    let adapter = BodyDeformationAdapter::default();
    let mut mesh = morph_garment(&["chest_large", "chest_small"]);

    let report = adapter.adapt(&mut mesh, Some(&morphs), &body, BodyZone::Upper);
    assert_eq!(report.mapped_targets, 1);
    let targets = mesh.sub_meshes[0].morph_targets.as_ref().unwrap();
    assert!((targets.influence("chest_large").unwrap() - 0.6).abs() < 1e-5);
    assert_eq!(targets.influence("chest_small"), Some(0.0));
}

#[test]
fn alias_table_tries_unknown_keys_verbatim() {
    let table = MorphAliasTable::default();
    assert_eq!(table.candidates("bust_large"), vec!["bust_large", "chest_large", "bust_expand"]);
    assert_eq!(table.candidates("custom_key"), vec!["custom_key"]);

    let targets = MorphTargets::from_names(["custom_key"]);
    assert_eq!(table.resolve("custom_key", &targets), Some("custom_key"));
    assert_eq!(table.resolve("bust_large", &targets), None);
}

// ─── Pipeline ─────────────────────────────────────────────────

#[test]
fn fitter_places_garment_top_on_anchor() {
    let measurements = BodyMeasurements::default();
    let mannequin = ParametricMannequin::new(measurements);
    let mut mesh = GarmentMesh::new(vec![uniform_tube(0.25, 0.7, 8, 16)]);

    let result = standard_fitter().fit(&mut mesh, &top(), &measurements, &mannequin, None, None);
    let placed = mesh.world_bounds();
    assert!((placed.max.y - result.normalize.anchor_y).abs() < 1e-4);
    assert!((placed.height() - result.normalize.scale).abs() < 1e-4);
    assert!(placed.center().x.abs() < 1e-4);
    assert_eq!(mesh.transform, result.placement);
}

#[test]
fn fitter_reports_events() {
    let sink = VecSink::new();
    let mut bus = EventBus::new().with_sink(Box::new(sink.clone()));
    let measurements = BodyMeasurements::default().with(MeasurementKey::Waist, 84.0);
    let mannequin = ParametricMannequin::new(measurements);
    let mut mesh = GarmentMesh::new(vec![uniform_tube(0.2, 1.0, 11, 16)]);

    let result = standard_fitter().fit(
        &mut mesh,
        &top(),
        &measurements,
        &mannequin,
        None,
        Some(&bus),
    );
    assert_eq!(result.adapt.strategy, DeformStrategy::Lattice);
    assert_eq!(bus.flush(), 2);

    let events = sink.events();
    let events = events.lock().unwrap();
    assert!(matches!(&events[0].kind, EventKind::Normalized { zone, .. } if zone == "upper"));
    assert!(matches!(&events[1].kind, EventKind::Deformed { strategy, .. } if strategy == "lattice"));
}

/// Fits a fresh 15-ring tube and returns it with its result.
fn fit_fresh(measurements: &BodyMeasurements) -> (GarmentMesh, FitResult) {
    let mannequin = ParametricMannequin::new(*measurements);
    let mut mesh = GarmentMesh::new(vec![uniform_tube(0.2, 1.0, 15, 16)]);
    let result = standard_fitter().fit(&mut mesh, &top(), measurements, &mannequin, None, None);
    (mesh, result)
}

fn assert_same_fit(a: &(GarmentMesh, FitResult), b: &(GarmentMesh, FitResult)) {
    let ((mesh_a, fit_a), (mesh_b, fit_b)) = (a, b);
    assert!(
        (fit_a.normalize.scale - fit_b.normalize.scale).abs() < 1e-6,
        "scale {} != {}",
        fit_a.normalize.scale,
        fit_b.normalize.scale
    );
    assert!((fit_a.normalize.slice.width - fit_b.normalize.slice.width).abs() < 1e-6);
    assert!((fit_a.placement.translation - fit_b.placement.translation).length() < 1e-5);
    assert!((fit_a.placement.scale - fit_b.placement.scale).abs() < 1e-6);
    assert_eq!(fit_a.adapt.strategy, fit_b.adapt.strategy);

    let (sa, sb) = (&mesh_a.sub_meshes[0], &mesh_b.sub_meshes[0]);
    for i in 0..sa.vertex_count() {
        assert!((sa.position(i) - sb.position(i)).length() < 1e-6, "vertex {i}");
    }
}

#[test]
fn refit_with_same_inputs_is_stable() {
    let measurements = BodyMeasurements::default().with(MeasurementKey::Bust, 115.0);
    let mannequin = ParametricMannequin::new(measurements);
    let fresh = fit_fresh(&measurements);

    let mut mesh = GarmentMesh::new(vec![uniform_tube(0.2, 1.0, 15, 16)]);
    let fitter = standard_fitter();
    fitter.fit(&mut mesh, &top(), &measurements, &mannequin, None, None);
    assert!(fresh.1.adapt.displaced_vertices > 0);

    let second = fitter.fit(&mut mesh, &top(), &measurements, &mannequin, None, None);
    assert_same_fit(&(mesh, second), &fresh);
}

#[test]
fn refit_after_measurement_change_matches_fresh_fit() {
    let large = BodyMeasurements::default().with(MeasurementKey::Bust, 115.0);
    let baseline = BodyMeasurements::default();

    let mut mesh = GarmentMesh::new(vec![uniform_tube(0.2, 1.0, 15, 16)]);
    let fitter = standard_fitter();
    fitter.fit(&mut mesh, &top(), &large, &ParametricMannequin::new(large), None, None);
    let refit = fitter.fit(
        &mut mesh,
        &top(),
        &baseline,
        &ParametricMannequin::new(baseline),
        None,
        None,
    );

    assert_same_fit(&(mesh, refit), &fit_fresh(&baseline));
}

// ─── Config ───────────────────────────────────────────────────

#[test]
fn config_defaults_validate() {
    let config = FitConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.min_scale, 0.1);
    assert_eq!(config.max_scale, 5.0);
    assert_eq!(config.min_slice_samples, 5);
}

#[test]
fn config_rejects_inverted_clamp() {
    let config = FitConfig {
        min_scale: 2.0,
        max_scale: 1.0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_partial_toml() {
    let config: FitConfig = toml::from_str("lower_body_ease = 1.1\nrecompute_normals = false").unwrap();
    assert_eq!(config.lower_body_ease, 1.1);
    assert!(!config.recompute_normals);
    assert_eq!(config.max_scale, 5.0);
}

#[test]
fn report_serializes() {
    let report = AdaptReport {
        strategy: DeformStrategy::Lattice,
        mapped_targets: 0,
        displaced_vertices: 12,
        modified_sub_meshes: 1,
    };
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"lattice\""));
}
