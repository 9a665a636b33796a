//! Procedural mesh generators for tests and demos.
//!
//! These generators produce deterministic, resolution-configurable meshes
//! with consistent winding order.

use std::f32::consts::TAU;

use crate::mesh::SubMesh;
use crate::normals::compute_vertex_normals;

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0. Vertices are ordered row-major from the
/// top row down, which matches the cloth particle order.
///
/// # Arguments
/// - `cols`: Number of quads along X (vertex count = cols + 1).
/// - `rows`: Number of quads along Y (vertex count = rows + 1).
/// - `width`: Total width in meters.
/// - `height`: Total height in meters.
///
/// # Example
/// ```
/// use drape_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> SubMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;
    let mut mesh = SubMesh {
        name: "quad_grid".into(),
        ..Default::default()
    };

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols.max(1) as f32;
            let v = j as f32 / rows.max(1) as f32;

            mesh.pos_x.push(-half_w + u * width);
            mesh.pos_y.push(half_h - v * height); // Top to bottom
            mesh.pos_z.push(0.0);

            mesh.normal_x.push(0.0);
            mesh.normal_y.push(0.0);
            mesh.normal_z.push(1.0); // Facing +Z
        }
    }

    mesh.indices = grid_indices(cols, rows);
    mesh
}

/// Triangle indices for a row-major `(cols+1) × (rows+1)` vertex grid.
pub fn grid_indices(cols: usize, rows: usize) -> Vec<u32> {
    let verts_x = cols + 1;
    let mut indices = Vec::with_capacity(cols * rows * 6);
    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            indices.extend_from_slice(&[top_left, bot_left, top_right]);
            indices.extend_from_slice(&[top_right, bot_left, bot_right]);
        }
    }
    indices
}

/// Generates an open tube standing on the XZ plane, a stand-in for a garment.
///
/// `radii` gives one radius per ring from bottom (`y = 0`) to top
/// (`y = height`); at least two rings are required, otherwise an empty
/// sub-mesh is returned. Normals point outward.
///
/// # Example
/// ```
/// use drape_mesh::generators::garment_tube;
/// let tube = garment_tube(&[0.2, 0.15, 0.18], 0.6, 16);
/// assert_eq!(tube.vertex_count(), 3 * 16);
/// assert!((tube.local_bounds().height() - 0.6).abs() < 1e-6);
/// ```
pub fn garment_tube(radii: &[f32], height: f32, segments: usize) -> SubMesh {
    let mut mesh = SubMesh {
        name: "garment_tube".into(),
        ..Default::default()
    };
    let rings = radii.len();
    if rings < 2 || segments < 3 {
        return mesh;
    }

    for (k, &r) in radii.iter().enumerate() {
        let y = height * k as f32 / (rings - 1) as f32;
        for s in 0..segments {
            let theta = TAU * s as f32 / segments as f32;
            mesh.pos_x.push(r * theta.cos());
            mesh.pos_y.push(y);
            mesh.pos_z.push(r * theta.sin());
        }
    }

    for k in 0..rings - 1 {
        for s in 0..segments {
            let a = (k * segments + s) as u32;
            let b = (k * segments + (s + 1) % segments) as u32;
            let c = a + segments as u32;
            let d = b + segments as u32;
            // Counter-clockwise seen from outside.
            mesh.indices.extend_from_slice(&[a, c, b]);
            mesh.indices.extend_from_slice(&[b, c, d]);
        }
    }

    compute_vertex_normals(&mut mesh);
    mesh
}

/// Uniform-radius tube with `rings` rings.
pub fn uniform_tube(radius: f32, height: f32, rings: usize, segments: usize) -> SubMesh {
    garment_tube(&vec![radius; rings], height, segments)
}
