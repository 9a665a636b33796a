//! Vertex normal computation from triangle data.
//!
//! Computes area-weighted vertex normals by accumulating
//! face normals from each adjacent triangle.

use crate::mesh::SubMesh;

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Each triangle's face normal (weighted by its area) is accumulated
/// at each vertex and the result is normalized. Works for both indexed
/// and non-indexed sub-meshes. Allocates the normal buffers if the
/// sub-mesh had none.
pub fn compute_vertex_normals(mesh: &mut SubMesh) {
    let n = mesh.vertex_count();

    mesh.normal_x.clear();
    mesh.normal_y.clear();
    mesh.normal_z.clear();
    mesh.normal_x.resize(n, 0.0);
    mesh.normal_y.resize(n, 0.0);
    mesh.normal_z.resize(n, 0.0);

    for t in 0..mesh.triangle_count() {
        let [ia, ib, ic] = mesh.triangle(t);
        let a = ia as usize;
        let b = ib as usize;
        let c = ic as usize;
        if a >= n || b >= n || c >= n {
            continue;
        }

        let e1x = mesh.pos_x[b] - mesh.pos_x[a];
        let e1y = mesh.pos_y[b] - mesh.pos_y[a];
        let e1z = mesh.pos_z[b] - mesh.pos_z[a];

        let e2x = mesh.pos_x[c] - mesh.pos_x[a];
        let e2y = mesh.pos_y[c] - mesh.pos_y[a];
        let e2z = mesh.pos_z[c] - mesh.pos_z[a];

        // Cross product (magnitude = 2 × triangle area)
        let nx = e1y * e2z - e1z * e2y;
        let ny = e1z * e2x - e1x * e2z;
        let nz = e1x * e2y - e1y * e2x;

        for v in [a, b, c] {
            mesh.normal_x[v] += nx;
            mesh.normal_y[v] += ny;
            mesh.normal_z[v] += nz;
        }
    }

    for i in 0..n {
        let x = mesh.normal_x[i];
        let y = mesh.normal_y[i];
        let z = mesh.normal_z[i];
        let len = (x * x + y * y + z * z).sqrt();
        if len > 1e-10 {
            let inv = 1.0 / len;
            mesh.normal_x[i] = x * inv;
            mesh.normal_y[i] = y * inv;
            mesh.normal_z[i] = z * inv;
        }
    }
}
