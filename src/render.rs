//! Turns a placement manifest into geometry instances the exporter can
//! walk. Each instance pairs a box mesh with a world matrix composed from
//! the placement's transform.
//!
//! Catalog parts render as solid boxes at their seated footprint; the
//! elevation filler shape authors its world size through its scale options,
//! so its box is the 2x1x2 unit the options were written against.

use glam::{EulerRot, Mat3, Mat4, Quat, Vec3};

use crate::catalog::color::ColorSystem;
use crate::catalog::piece::{self, PartId};
use crate::error::{BuilderError, Result};
use crate::map::Manifest;
use crate::types::{BRICK_WIDTH, PLATE_HEIGHT};

/// An axis-aligned box mesh, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    pub size: Vec3,
}

impl BoxGeometry {
    pub fn new(size: Vec3) -> Self {
        Self { size }
    }

    /// Pre-triangulated vertex stream: 36 position/normal pairs, three per
    /// face triangle, wound counter-clockwise seen from outside.
    pub fn vertices(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        // Per face: outward normal and the two in-plane axes spanning it.
        const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ];
        // Two triangles per face in fan order over the quad corners.
        const CORNERS: [(f32, f32); 6] = [
            (-1.0, -1.0),
            (1.0, -1.0),
            (1.0, 1.0),
            (-1.0, -1.0),
            (1.0, 1.0),
            (-1.0, 1.0),
        ];
        let half = self.size * 0.5;
        FACES.into_iter().flat_map(move |(normal, u, v)| {
            let normal = Vec3::from(normal);
            let u = Vec3::from(u);
            let v = Vec3::from(v);
            CORNERS.into_iter().map(move |(s, t)| {
                let direction = normal + u * s + v * t;
                (direction * half, normal)
            })
        })
    }
}

/// One renderable placement: shared box geometry plus a resolved world
/// transform and material.
#[derive(Debug, Clone)]
pub struct Instance {
    pub piece_name: String,
    pub screen_name: String,
    pub geometry: BoxGeometry,
    pub matrix: Mat4,
    /// Render RGB, packed 0xRRGGBB.
    pub color_rgb: u32,
    /// Render RGB as unit-range components.
    pub color: [f32; 3],
    pub opacity: f32,
}

impl Instance {
    /// Inverse-transpose of the world matrix's linear part, for normals.
    pub fn normal_matrix(&self) -> Mat3 {
        Mat3::from_mat4(self.matrix).inverse().transpose()
    }
}

/// World-space box for one part. Numbered parts size to their stacking
/// footprint; the procedural shape keeps the unit the filler was scaled
/// against.
fn part_geometry(part_id: PartId) -> Result<BoxGeometry> {
    match part_id {
        PartId::Shape(_) => Ok(BoxGeometry::new(Vec3::new(2.0, 1.0, 2.0))),
        PartId::Part(_) => {
            let piece = piece::by_part(part_id).ok_or_else(|| {
                BuilderError::CatalogLookup(format!("part {} has no catalog entry", part_id))
            })?;
            Ok(BoxGeometry::new(Vec3::new(
                BRICK_WIDTH,
                piece.plate_height as f32 * PLATE_HEIGHT,
                BRICK_WIDTH,
            )))
        }
    }
}

/// Expand a manifest into geometry instances, in manifest order.
pub fn instances(manifest: &Manifest, system: ColorSystem) -> Result<Vec<Instance>> {
    let mut out = Vec::with_capacity(manifest.len());
    for (part_id, buckets) in manifest.parts() {
        let geometry = part_geometry(*part_id)?;
        for placement in buckets.values().flatten() {
            let rotation = Quat::from_euler(
                EulerRot::XYZ,
                placement.rotation_x,
                placement.rotation_y,
                placement.rotation_z,
            );
            let matrix = Mat4::from_scale_rotation_translation(
                Vec3::new(placement.scale_x, placement.scale_y, placement.scale_z),
                rotation,
                Vec3::new(
                    placement.position_x,
                    placement.position_y,
                    placement.position_z,
                ),
            );
            out.push(Instance {
                piece_name: placement.piece_name.clone(),
                screen_name: placement.screen_name.clone(),
                geometry,
                matrix,
                color_rgb: placement.color.color_int(system),
                color: placement.color.rgb_f32(system),
                opacity: placement.opacity,
            });
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::piece::PartId;

    #[test]
    fn box_emits_twelve_triangles_with_unit_normals() {
        let geometry = BoxGeometry::new(Vec3::new(2.0, 1.0, 2.0));
        let vertices: Vec<_> = geometry.vertices().collect();
        assert_eq!(vertices.len(), 36);
        for (position, normal) in &vertices {
            assert!((normal.length() - 1.0).abs() < 1e-6);
            // Corners of a 2x1x2 box sit at (+-1, +-0.5, +-1).
            assert!(position.x.abs() == 1.0 && position.z.abs() == 1.0);
            assert!(position.y.abs() == 0.5);
        }
    }

    #[test]
    fn box_winding_faces_outward() {
        let geometry = BoxGeometry::new(Vec3::splat(2.0));
        let vertices: Vec<_> = geometry.vertices().collect();
        for triangle in vertices.chunks(3) {
            let [(a, normal), (b, _), (c, _)] = [triangle[0], triangle[1], triangle[2]];
            let face = (b - a).cross(c - a);
            assert!(face.dot(normal) > 0.0);
        }
    }

    #[test]
    fn parts_size_to_their_plate_height() {
        let brick = part_geometry(PartId::Part(3005)).unwrap();
        assert_eq!(brick.size, Vec3::new(20.0, 24.0, 20.0));
        let tile = part_geometry(PartId::Part(3070)).unwrap();
        assert_eq!(tile.size, Vec3::new(20.0, 8.0, 20.0));
        let filler = part_geometry(PartId::Shape("box")).unwrap();
        assert_eq!(filler.size, Vec3::new(2.0, 1.0, 2.0));
    }

    #[test]
    fn unknown_parts_fail_the_lookup() {
        assert!(part_geometry(PartId::Part(1)).is_err());
    }

    #[test]
    fn instance_normal_matrix_strips_scale() {
        let manifest = crate::map::compile(crate::map::MapSelection::Samples, 0.0, true, true)
            .unwrap();
        let instances = instances(&manifest, ColorSystem::Ldraw).unwrap();
        assert!(!instances.is_empty());
        let instance = &instances[0];
        let normal = instance
            .normal_matrix()
            .mul_vec3(Vec3::Y)
            .normalize();
        // A scaled, unrotated placement still maps up to up.
        if instance.matrix.to_scale_rotation_translation().1 == Quat::IDENTITY {
            assert!((normal - Vec3::Y).length() < 1e-5);
        }
    }
}
