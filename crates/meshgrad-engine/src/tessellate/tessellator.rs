use crate::error::{MeshError, MeshResult};
use crate::mesh::{ControlPoint, Grid};

use super::{hermite_basis, MeshVertex, Patch, TriangleMesh};

/// Tessellates `grid` into a new mesh. See [`tessellate_into`].
pub fn tessellate(grid: &Grid<ControlPoint>, subdivisions: usize) -> MeshResult<TriangleMesh> {
    let mut mesh = TriangleMesh::new();
    tessellate_into(grid, subdivisions, &mut mesh)?;
    Ok(mesh)
}

/// Tessellates `grid` into `mesh`, replacing its contents.
///
/// Every cell gets its own `(subdivisions + 1)²` vertices; the samples on a
/// shared edge are evaluated from the same control points and coincide exactly.
/// Triangles are counter-clockwise in render space for an unfolded grid.
///
/// Errors (checked before `mesh` is touched):
/// - `Parameter` if `subdivisions < 1` or the vertex count exceeds the `u32` index range
/// - `Topology` if the grid is smaller than 2×2
pub fn tessellate_into(
    grid: &Grid<ControlPoint>,
    subdivisions: usize,
    mesh: &mut TriangleMesh,
) -> MeshResult<()> {
    if subdivisions < 1 {
        return Err(MeshError::parameter(format!(
            "subdivisions must be at least 1, got {subdivisions}"
        )));
    }
    if grid.width() < 2 || grid.height() < 2 {
        return Err(MeshError::topology(format!(
            "tessellation needs at least a 2x2 grid, got {}x{}",
            grid.width(),
            grid.height()
        )));
    }

    let side = subdivisions + 1;
    let vertex_count = side
        .checked_mul(side)
        .and_then(|per_cell| per_cell.checked_mul(grid.cell_count()))
        .filter(|&n| u32::try_from(n).is_ok())
        .ok_or_else(|| {
            MeshError::parameter(format!(
                "{subdivisions} subdivisions over {} cells exceed the u32 index range",
                grid.cell_count()
            ))
        })?;
    let index_count = grid.cell_count() * subdivisions * subdivisions * 6;

    // Parameters and bases are shared by every cell.
    let params: Vec<f32> = (0..side).map(|i| i as f32 / subdivisions as f32).collect();
    let bases: Vec<[f32; 4]> = params.iter().map(|&s| hermite_basis(s)).collect();

    let stride = side as u32;

    mesh.clear();
    mesh.vertices.reserve(vertex_count);
    mesh.indices.reserve(index_count);

    for cy in 0..grid.height() - 1 {
        for cx in 0..grid.width() - 1 {
            let patch = Patch::from_grid(grid, cx, cy);
            // Bounded by the u32 check above.
            let base = mesh.vertices.len() as u32;

            for (bv, &t) in bases.iter().zip(&params) {
                for (bu, &s) in bases.iter().zip(&params) {
                    mesh.vertices.push(MeshVertex {
                        position: patch.position_with(s, t, bu, bv).to_array(),
                        color: patch.color(s, t).to_array(),
                    });
                }
            }

            for j in 0..subdivisions as u32 {
                for i in 0..subdivisions as u32 {
                    let a = base + j * stride + i;
                    let b = a + 1;
                    let c = a + stride;
                    let d = c + 1;
                    mesh.indices.extend_from_slice(&[a, c, b, b, c, d]);
                }
            }
        }
    }

    debug_assert_eq!(mesh.vertices.len(), vertex_count);
    debug_assert_eq!(mesh.indices.len(), index_count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgb, Vec2};
    use crate::mesh::BezierPoint;

    const RED: ColorRgb = ColorRgb::new(1.0, 0.0, 0.0);
    const GREEN: ColorRgb = ColorRgb::new(0.0, 1.0, 0.0);
    const BLUE: ColorRgb = ColorRgb::new(0.0, 0.0, 1.0);
    const WHITE: ColorRgb = ColorRgb::new(1.0, 1.0, 1.0);

    fn unit_square() -> Grid<ControlPoint> {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
        ];
        Grid::from_points(2, &points, &[RED, GREEN, BLUE, WHITE]).unwrap()
    }

    /// Irregular point-only grid with distinct colours per node.
    fn skewed(width: usize, height: usize) -> Grid<ControlPoint> {
        let mut points = Vec::new();
        let mut colors = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let u = x as f32 / (width - 1) as f32;
                let v = y as f32 / (height - 1) as f32;
                let wobble = if x > 0 && x < width - 1 { 0.05 * v } else { 0.0 };
                points.push(Vec2::new(u + wobble, v));
                colors.push(ColorRgb::new(u, v, (u * v).sqrt()));
            }
        }
        Grid::from_points(width, &points, &colors).unwrap()
    }

    fn curved(width: usize, height: usize) -> Grid<ControlPoint> {
        let mut points = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let p = Vec2::new(x as f32 / (width - 1) as f32, y as f32 / (height - 1) as f32);
                points.push(BezierPoint::symmetric(p, Vec2::new(0.12, 0.04), Vec2::new(-0.03, 0.1)));
            }
        }
        Grid::from_bezier_points(width, &points, &vec![WHITE; width * height]).unwrap()
    }

    fn bilinear(p: [Vec2; 4], s: f32, t: f32) -> Vec2 {
        p[0] * ((1.0 - s) * (1.0 - t)) + p[1] * (s * (1.0 - t)) + p[2] * ((1.0 - s) * t) + p[3] * (s * t)
    }

    fn vertex_at(mesh: &TriangleMesh, cell: usize, n: usize, i: usize, j: usize) -> MeshVertex {
        mesh.vertices[cell * (n + 1) * (n + 1) + j * (n + 1) + i]
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn zero_subdivisions_is_parameter_error() {
        assert!(matches!(tessellate(&unit_square(), 0), Err(MeshError::Parameter(_))));
    }

    #[test]
    fn grids_thinner_than_two_are_topology_errors() {
        let row = Grid::from_points(3, &[Vec2::zero(); 3], &[RED; 3]).unwrap();
        let col = Grid::from_points(1, &[Vec2::zero(); 3], &[RED; 3]).unwrap();
        assert!(matches!(tessellate(&row, 4), Err(MeshError::Topology(_))));
        assert!(matches!(tessellate(&col, 4), Err(MeshError::Topology(_))));
    }

    #[test]
    fn failed_call_leaves_mesh_untouched() {
        let mut mesh = tessellate(&unit_square(), 2).unwrap();
        let before = mesh.clone();
        assert!(tessellate_into(&unit_square(), 0, &mut mesh).is_err());
        assert_eq!(mesh, before);
    }

    // ── counts ────────────────────────────────────────────────────────────

    #[test]
    fn counts_follow_cells_and_subdivisions() {
        for (w, h, n) in [(2, 2, 1), (3, 2, 2), (4, 3, 5), (3, 3, 18)] {
            let mesh = tessellate(&skewed(w, h), n).unwrap();
            let cells = (w - 1) * (h - 1);
            assert_eq!(mesh.vertex_count(), cells * (n + 1) * (n + 1));
            assert_eq!(mesh.triangle_count(), cells * n * n * 2);
            assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
        }
    }

    // ── scenario: unit square, subdivisions = 2 ───────────────────────────

    #[test]
    fn unit_square_with_two_subdivisions() {
        let mesh = tessellate(&unit_square(), 2).unwrap();
        assert_eq!(mesh.triangle_count(), 8);
        assert_eq!(mesh.vertex_count(), 9);

        assert_eq!(mesh.vertices[0].position, [-1.0, 1.0]);
        assert_eq!(mesh.vertices[2].position, [1.0, 1.0]);
        assert_eq!(mesh.vertices[6].position, [-1.0, -1.0]);
        assert_eq!(mesh.vertices[8].position, [1.0, -1.0]);

        assert_eq!(mesh.vertices[0].color, RED.to_array());
        assert_eq!(mesh.vertices[2].color, GREEN.to_array());
        assert_eq!(mesh.vertices[6].color, BLUE.to_array());
        assert_eq!(mesh.vertices[8].color, WHITE.to_array());

        let mid = mesh.vertices[4];
        for ch in mid.color {
            assert!((ch - 0.5).abs() < 1e-6, "{:?}", mid.color);
        }
        assert!(mid.position[0].abs() < 1e-6 && mid.position[1].abs() < 1e-6);
    }

    #[test]
    fn triangles_are_counter_clockwise_in_render_space() {
        let mesh = tessellate(&skewed(3, 3), 3).unwrap();
        for [a, b, c] in mesh.triangles() {
            let (a, b, c) = (
                Vec2::from(mesh.vertices[a as usize].position),
                Vec2::from(mesh.vertices[b as usize].position),
                Vec2::from(mesh.vertices[c as usize].position),
            );
            let (e1, e2) = (b - a, c - a);
            assert!(e1.x * e2.y - e1.y * e2.x > 0.0);
        }
    }

    // ── zero tangents ─────────────────────────────────────────────────────

    #[test]
    fn point_grid_lies_on_the_bilinear_surface() {
        for n in [1, 2, 3, 6] {
            let grid = skewed(3, 3);
            let mesh = tessellate(&grid, n).unwrap();
            for cy in 0..2 {
                for cx in 0..2 {
                    let corners = [
                        grid[(cx, cy)].position,
                        grid[(cx + 1, cy)].position,
                        grid[(cx, cy + 1)].position,
                        grid[(cx + 1, cy + 1)].position,
                    ];
                    let cell = cy * 2 + cx;
                    for j in 0..=n {
                        for i in 0..=n {
                            let (s, t) = (i as f32 / n as f32, j as f32 / n as f32);
                            let want = bilinear(corners, s, t);
                            let got = Vec2::from(vertex_at(&mesh, cell, n, i, j).position);
                            assert!((got - want).length() < 1e-5, "n={n} {got:?} vs {want:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn unit_square_thirds_are_evenly_spaced() {
        let mesh = tessellate(&unit_square(), 3).unwrap();
        let got = Vec2::from(mesh.vertices[1].position);
        assert!((got - Vec2::new(-1.0 / 3.0, 1.0)).length() < 1e-6, "{got:?}");
    }

    #[test]
    fn point_grid_position_and_color_share_parameters() {
        // colour encodes authoring position, so both fields must agree at every vertex
        let width = 3;
        let height = 3;
        let mut points = Vec::new();
        let mut colors = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let p = Vec2::new(0.5 * x as f32 + 0.1 * y as f32, 0.5 * y as f32 - 0.05 * x as f32);
                points.push(p);
                colors.push(ColorRgb::new(p.x, p.y, 0.0));
            }
        }
        let grid = Grid::from_points(width, &points, &colors).unwrap();

        for n in [2, 4, 9] {
            let mesh = tessellate(&grid, n).unwrap();
            for vertex in &mesh.vertices {
                let authoring = crate::coords::to_authoring_space(Vec2::from(vertex.position));
                assert!((authoring.x - vertex.color[0]).abs() < 1e-5, "n={n} {vertex:?}");
                assert!((authoring.y - vertex.color[1]).abs() < 1e-5, "n={n} {vertex:?}");
            }
        }
    }

    // ── colour ────────────────────────────────────────────────────────────

    #[test]
    fn colors_are_bilinear_at_every_subdivision() {
        for grid in [skewed(3, 2), curved(3, 2)] {
            for n in [1, 2, 3, 4, 7] {
                let mesh = tessellate(&grid, n).unwrap();
                for cx in 0..2 {
                    let c = [
                        grid[(cx, 0)].color,
                        grid[(cx + 1, 0)].color,
                        grid[(cx, 1)].color,
                        grid[(cx + 1, 1)].color,
                    ];
                    for j in 0..=n {
                        for i in 0..=n {
                            let (s, t) = (i as f32 / n as f32, j as f32 / n as f32);
                            let want = c[0] * ((1.0 - s) * (1.0 - t))
                                + c[1] * (s * (1.0 - t))
                                + c[2] * ((1.0 - s) * t)
                                + c[3] * (s * t);
                            let got = vertex_at(&mesh, cx, n, i, j).color;
                            for (g, w) in got.iter().zip(want.to_array()) {
                                assert!((g - w).abs() < 1e-6);
                            }
                        }
                    }
                }
            }
        }
    }

    // ── seams ─────────────────────────────────────────────────────────────

    #[test]
    fn shared_edges_coincide_exactly() {
        let n = 5;
        let grid = curved(3, 3);
        let mesh = tessellate(&grid, n).unwrap();
        // vertical edge between cell 0 and cell 1
        for j in 0..=n {
            assert_eq!(vertex_at(&mesh, 0, n, n, j).position, vertex_at(&mesh, 1, n, 0, j).position);
        }
        // horizontal edge between cell 0 and cell 2
        for i in 0..=n {
            assert_eq!(vertex_at(&mesh, 0, n, i, n).position, vertex_at(&mesh, 2, n, i, 0).position);
        }
    }

    #[test]
    fn curved_grid_differs_from_flat_grid() {
        let bent = tessellate(&curved(2, 2), 4).unwrap();
        let flat_grid = curved(2, 2).map_indexed(|_, _, cp| ControlPoint::flat(cp.position, cp.color));
        let flat = tessellate(&flat_grid, 4).unwrap();
        assert_eq!(bent.vertices[0], flat.vertices[0]);
        // sample (1, 1) of 5x5; uniform tangents cancel at the exact centre
        let k = 5 + 1;
        let delta = Vec2::from(bent.vertices[k].position) - Vec2::from(flat.vertices[k].position);
        assert!(delta.length() > 1e-3);
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn repeated_tessellation_is_byte_identical() {
        let grid = curved(4, 3);
        let a = tessellate(&grid, 6).unwrap();
        let b = tessellate(&grid, 6).unwrap();
        assert_eq!(a.vertex_bytes(), b.vertex_bytes());
        assert_eq!(a.index_bytes(), b.index_bytes());
    }

    #[test]
    fn reused_buffer_matches_fresh_tessellation() {
        let mut mesh = tessellate(&curved(4, 4), 9).unwrap();
        tessellate_into(&unit_square(), 2, &mut mesh).unwrap();
        assert_eq!(mesh, tessellate(&unit_square(), 2).unwrap());
    }
}
