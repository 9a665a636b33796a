//! CLI command implementations.

use std::error::Error;
use std::f32::consts::TAU;
use std::path::Path;

use drape_body::{BodyMeasurements, BodyZoneTable, DeformationZoneTable, ParametricMannequin};
use drape_cloth::{create_mannequin_colliders, ClothWorld};
use drape_fit::{
    BodyDeformationAdapter, BoundsStandardizer, GarmentDescriptor, GarmentFitter,
    GarmentNormalizer, MorphAliasTable,
};
use drape_math::Vec3;
use drape_mesh::generators::garment_tube;
use drape_mesh::{GarmentMesh, MorphTargets, SubMesh};
use drape_telemetry::{EventBus, EventKind, TracingSink};
use drape_types::{BodyZone, GarmentSource};

use crate::config::DrapeConfig;

type CliResult = Result<(), Box<dyn Error>>;

/// Ring radii (m) of the demo garments, bottom to top.
const SHIRT_PROFILE: &[f32] = &[0.17, 0.16, 0.16, 0.17, 0.18, 0.19, 0.19, 0.18, 0.15];
const TROUSER_PROFILE: &[f32] = &[0.11, 0.12, 0.13, 0.15, 0.17, 0.19, 0.18, 0.16];

/// Garment shape keys the demo garment carries with `--morphs`.
const DEMO_MORPHS: &[&str] = &["chest_large", "chest_small", "waist_large", "hip_large", "shoulder_wide"];

fn load_config(path: Option<&Path>) -> Result<DrapeConfig, Box<dyn Error>> {
    let config = DrapeConfig::load_or_default(path)?;
    config.validate()?;
    Ok(config)
}

fn demo_garment(zone: BodyZone, with_morphs: bool) -> GarmentMesh {
    let (profile, height) = match zone {
        BodyZone::Upper => (SHIRT_PROFILE, 0.7),
        BodyZone::Lower => (TROUSER_PROFILE, 1.0),
    };
    let mut sub: SubMesh = garment_tube(profile, height, 24);
    if with_morphs {
        // Every key inflates the tube radially; the renderer blends by influence.
        let radial: Vec<[f32; 3]> = sub
            .positions()
            .map(|p| [p.x * 0.08, 0.0, p.z * 0.08])
            .collect();
        let mut targets = MorphTargets::new();
        for name in DEMO_MORPHS {
            targets.add_target(*name, radial.clone());
        }
        sub = sub.with_morph_targets(targets);
    }
    GarmentMesh::new(vec![sub])
}

/// Normalize and deform a procedural garment.
pub fn fit(
    name: &str,
    category: &str,
    with_morphs: bool,
    json: bool,
    config_path: Option<&Path>,
    measurements: &BodyMeasurements,
) -> CliResult {
    let config = load_config(config_path)?;
    measurements.validate()?;

    let descriptor = GarmentDescriptor::new(name, category, GarmentSource::Generated);
    let mut mesh = demo_garment(descriptor.body_zone(), with_morphs);
    let mannequin = ParametricMannequin::new(*measurements);
    let mannequin_morphs = with_morphs.then(|| mannequin.morph_influences());

    let fitter = GarmentFitter::new(
        GarmentNormalizer::new(BodyZoneTable::DEFAULT, config.fit.clone(), BoundsStandardizer),
        BodyDeformationAdapter::new(DeformationZoneTable::DEFAULT, MorphAliasTable::default(), config.fit),
    );
    let mut bus = EventBus::new().with_sink(Box::new(TracingSink::default()));
    let result = fitter.fit(
        &mut mesh,
        &descriptor,
        measurements,
        &mannequin,
        mannequin_morphs.as_ref(),
        Some(&bus),
    );
    bus.finish();

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let n = &result.normalize;
    let a = &result.adapt;
    println!("Drape Fit");
    println!("─────────");
    println!("Garment:      {name} ({})", n.body_zone.name());
    println!("Scale:        {:.4} (raw {:.4})", n.scale, n.raw_ratio);
    println!("Anchor Y:     {:.4}{}", n.anchor_y, if n.landmark_fallback { " (zone fraction)" } else { "" });
    println!(
        "Slice width:  {:.4} from {} samples{}",
        n.slice.width,
        n.slice.samples,
        if n.slice.fallback { " (bounding box)" } else { "" }
    );
    println!("Strategy:     {}", a.strategy.name());
    println!("Mapped keys:  {}", a.mapped_targets);
    println!("Displaced:    {} vertices", a.displaced_vertices);
    let bounds = mesh.world_bounds();
    println!(
        "World bounds: [{:.3}, {:.3}, {:.3}] – [{:.3}, {:.3}, {:.3}]",
        bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
    );
    Ok(())
}

/// Frame-loop parameters for `simulate`.
pub struct SimulateOptions {
    pub frames: u32,
    pub dt: f32,
    pub segments: usize,
    pub wind: f32,
    pub spin: f32,
}

/// Drape a panel hanging from the shoulders in front of the chest.
pub fn simulate(
    opts: &SimulateOptions,
    config_path: Option<&Path>,
    measurements: &BodyMeasurements,
) -> CliResult {
    let config = load_config(config_path)?;
    measurements.validate()?;

    let body_height = measurements.height_cm / 100.0;
    let chest_depth = measurements.bust_cm / TAU / 100.0;
    let origin = Vec3::new(0.0, body_height * 0.82, chest_depth + 0.05);
    let width = measurements.shoulder_width_cm / 100.0 * 1.2;
    let height = body_height * 0.4;

    let mut world = ClothWorld::new(config.cloth)?;
    world.build(width, height, opts.segments, opts.segments, origin, measurements)?;

    let mut bus = EventBus::new().with_sink(Box::new(TracingSink::new(tracing::Level::DEBUG)));
    if let Some(grid) = world.grid() {
        bus.record(EventKind::ClothBuilt {
            particles: grid.particle_count() as u32,
            constraints: grid.constraints.len() as u32,
            colliders: world.colliders().len() as u32,
        });
    }
    let pinned_before = pinned_positions(&world);

    let mut substeps = 0u64;
    for _ in 0..opts.frames {
        let report = world.advance(opts.dt, opts.wind, opts.spin);
        substeps += report.substeps as u64;
        bus.record(EventKind::ClothStep {
            substeps: report.substeps,
            sim_time: world.sim_time(),
            kinetic_energy: world.kinetic_energy(),
        });
        bus.flush();
        bus.next_frame();
    }
    bus.finish();

    let drift = pinned_positions(&world)
        .iter()
        .zip(&pinned_before)
        .map(|(a, b)| (*a - *b).length())
        .fold(0.0, f32::max);
    let lowest = world
        .positions()
        .chunks_exact(3)
        .map(|p| p[1])
        .fold(f32::INFINITY, f32::min);

    println!("Drape Simulation");
    println!("────────────────");
    println!("Solver:         {}", world.solver_name());
    println!("Frames:         {} ({} sub-steps)", opts.frames, substeps);
    println!("Sim time:       {:.3}s", world.sim_time());
    println!("Kinetic energy: {:.6e}", world.kinetic_energy());
    println!("Max error:      {:.6}m", world.max_constraint_error());
    println!("Pinned drift:   {:.6}m", drift);
    println!("Sag:            {:.4}m", origin.y - lowest);
    match world.min_clearance() {
        Some(c) => println!("Min clearance:  {:.4}m (colliders are not resolved)", c),
        None => println!("Min clearance:  n/a"),
    }
    Ok(())
}

fn pinned_positions(world: &ClothWorld) -> Vec<Vec3> {
    world
        .grid()
        .map(|g| g.particles().filter(|p| p.pinned).map(|p| p.position).collect())
        .unwrap_or_default()
}

/// Print the mannequin colliders.
pub fn colliders(measurements: &BodyMeasurements) -> CliResult {
    measurements.validate()?;
    let colliders = create_mannequin_colliders(measurements);
    println!("{}", serde_json::to_string_pretty(&colliders)?);
    Ok(())
}

/// Validate a config file.
pub fn validate(path: &Path) -> CliResult {
    println!("Drape Validator");
    println!("───────────────");
    println!();

    if path.extension().and_then(|e| e.to_str()) != Some("toml") {
        println!("Unsupported file format. Use .toml (config).");
        return Ok(());
    }
    println!("Validating config: {}", path.display());
    let config = DrapeConfig::load(path)?;
    match config.validate() {
        Ok(()) => println!("✅ Config is valid."),
        Err(e) => println!("❌ Config validation failed: {e}"),
    }
    Ok(())
}
