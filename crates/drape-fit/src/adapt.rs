//! Body-relative garment deformation.
//!
//! Two strategies, tried in order:
//! 1. **Morph mirroring**: copy mannequin shape-key influences onto the
//!    garment's own shape keys through the alias table.
//! 2. **Lattice**: displace vertices horizontally around the garment's
//!    vertical axis near each body landmark, weighted by a Gaussian falloff.
//!
//! Lattice offsets are always computed from the rest snapshot taken on the
//! first call, so adapting twice with the same inputs changes nothing.

use drape_body::{BodyMeasurements, DeformationZone, DeformationZoneTable};
use drape_math::{Aabb, Vec3};
use drape_mesh::normals::compute_vertex_normals;
use drape_mesh::{GarmentMesh, MorphTargets};
use drape_types::BodyZone;
use serde::{Deserialize, Serialize};

use crate::aliases::MorphAliasTable;
use crate::config::FitConfig;

/// Which strategy changed the garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeformStrategy {
    Morph,
    Lattice,
    None,
}

impl DeformStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Morph => "morph",
            Self::Lattice => "lattice",
            Self::None => "none",
        }
    }
}

/// Outcome of [`BodyDeformationAdapter::adapt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptReport {
    pub strategy: DeformStrategy,
    /// Mannequin morphs copied onto the garment.
    pub mapped_targets: usize,
    /// Vertices offset from their rest position by the lattice.
    pub displaced_vertices: usize,
    /// Sub-meshes whose vertex buffer changed during this call.
    pub modified_sub_meshes: usize,
}

/// A lattice zone resolved against one garment and one body.
#[derive(Debug, Clone, Copy)]
struct ActiveZone {
    y: f32,
    radius: f32,
    strength: f32,
    includes_z: bool,
}

/// Deforms garments toward a body's measurements.
#[derive(Debug, Clone)]
pub struct BodyDeformationAdapter {
    zones: DeformationZoneTable,
    aliases: MorphAliasTable,
    config: FitConfig,
}

impl Default for BodyDeformationAdapter {
    fn default() -> Self {
        Self::new(
            DeformationZoneTable::DEFAULT,
            MorphAliasTable::default(),
            FitConfig::default(),
        )
    }
}

impl BodyDeformationAdapter {
    pub fn new(zones: DeformationZoneTable, aliases: MorphAliasTable, config: FitConfig) -> Self {
        Self {
            zones,
            aliases,
            config,
        }
    }

    /// Deforms `mesh` in place for `measurements`.
    ///
    /// Morph mirroring runs when both the garment and `mannequin_morphs`
    /// carry shape keys; the lattice runs only if mirroring mapped nothing.
    pub fn adapt(
        &self,
        mesh: &mut GarmentMesh,
        mannequin_morphs: Option<&MorphTargets>,
        measurements: &BodyMeasurements,
        zone: BodyZone,
    ) -> AdaptReport {
        for sub in &mut mesh.sub_meshes {
            sub.capture_rest();
        }

        let mapped = match mannequin_morphs {
            Some(morphs) if mesh.has_morph_targets() => {
                mirror_morph_targets(mesh, morphs, &self.aliases, self.config.morph_threshold)
            }
            _ => 0,
        };

        if mapped > 0 {
            let modified = self.revert_to_rest(mesh);
            tracing::debug!(mapped, modified, "mirrored mannequin morph targets");
            return AdaptReport {
                strategy: DeformStrategy::Morph,
                mapped_targets: mapped,
                displaced_vertices: 0,
                modified_sub_meshes: modified,
            };
        }

        let (displaced, modified) = self.lattice_deform(mesh, measurements, zone);
        tracing::debug!(displaced, modified, zone = zone.name(), "lattice deformation");
        AdaptReport {
            strategy: if displaced > 0 {
                DeformStrategy::Lattice
            } else {
                DeformStrategy::None
            },
            mapped_targets: 0,
            displaced_vertices: displaced,
            modified_sub_meshes: modified,
        }
    }

    /// Applies the lattice from rest positions. Returns (displaced, modified sub-meshes).
    pub fn lattice_deform(
        &self,
        mesh: &mut GarmentMesh,
        measurements: &BodyMeasurements,
        zone: BodyZone,
    ) -> (usize, usize) {
        let mut bounds = Aabb::empty();
        for sub in &mesh.sub_meshes {
            bounds.union(&sub.rest_bounds());
        }
        let height = bounds.height();
        let active: Vec<ActiveZone> = if bounds.is_empty() || !(height > 0.0) {
            Vec::new()
        } else {
            self.zones
                .for_zone(zone)
                .filter_map(|z| self.activate(z, zone, measurements, &bounds))
                .collect()
        };

        let center = bounds.center();
        let sharpness = self.config.lattice_sharpness;
        let mut displaced = 0;
        let mut modified = 0;
        for sub in &mut mesh.sub_meshes {
            let mut changed = false;
            for i in 0..sub.vertex_count() {
                let rest = sub.rest_position(i);
                let offset = lattice_offset(rest, center, &active, sharpness);
                if offset != Vec3::ZERO {
                    displaced += 1;
                }
                let target = rest + offset;
                if target != sub.position(i) {
                    sub.set_position(i, target.x, target.y, target.z);
                    changed = true;
                }
            }
            if changed {
                modified += 1;
                if self.config.recompute_normals && sub.has_normals() {
                    compute_vertex_normals(sub);
                }
            }
        }
        (displaced, modified)
    }

    fn activate(
        &self,
        zone: &DeformationZone,
        body_zone: BodyZone,
        measurements: &BodyMeasurements,
        bounds: &Aabb,
    ) -> Option<ActiveZone> {
        let ratio = measurements.measurement(zone.measurement_key) / zone.baseline_cm;
        if !ratio.is_finite() {
            tracing::warn!(zone = zone.kind.name(), "non-finite measurement ratio, skipping zone");
            return None;
        }
        if (ratio - 1.0).abs() < self.config.lattice_tolerance {
            return None;
        }
        let height = bounds.height();
        Some(ActiveZone {
            y: bounds.y_at(zone.y_frac_for(body_zone)),
            radius: zone.falloff * height,
            strength: ratio - 1.0,
            includes_z: zone.axes.includes_z(),
        })
    }

    /// Puts lattice-displaced vertices back at rest. Returns modified sub-meshes.
    fn revert_to_rest(&self, mesh: &mut GarmentMesh) -> usize {
        let mut modified = 0;
        for sub in &mut mesh.sub_meshes {
            if sub.restore_rest() {
                modified += 1;
                if self.config.recompute_normals && sub.has_normals() {
                    compute_vertex_normals(sub);
                }
            }
        }
        modified
    }
}

/// Sum of every active zone's horizontal push on a rest position.
fn lattice_offset(p: Vec3, center: Vec3, zones: &[ActiveZone], sharpness: f32) -> Vec3 {
    let mut offset = Vec3::ZERO;
    for z in zones {
        let d = (p.y - z.y).abs();
        if !(z.radius > 0.0) || d > z.radius {
            continue;
        }
        let t = d / z.radius;
        let w = (-sharpness * t * t).exp();
        offset.x += (p.x - center.x) * z.strength * w;
        if z.includes_z {
            offset.z += (p.z - center.z) * z.strength * w;
        }
    }
    offset
}

/// Copies mannequin influences above `threshold` onto aliased garment keys.
///
/// Keys at or below the threshold zero their garment counterpart. Returns
/// the number of mannequin keys that found a counterpart above threshold.
pub fn mirror_morph_targets(
    mesh: &mut GarmentMesh,
    mannequin: &MorphTargets,
    aliases: &MorphAliasTable,
    threshold: f32,
) -> usize {
    let mut mapped = 0;
    for (key, influence) in mannequin.iter() {
        let active = influence > threshold;
        let mut hit = false;
        for sub in &mut mesh.sub_meshes {
            let Some(targets) = sub.morph_targets.as_mut() else {
                continue;
            };
            let Some(name) = aliases.resolve(key, targets) else {
                continue;
            };
            targets.set_influence(name, if active { influence } else { 0.0 });
            hit = true;
        }
        if !hit {
            tracing::trace!(key, "no garment morph for mannequin key");
        }
        if hit && active {
            mapped += 1;
        }
    }
    mapped
}
