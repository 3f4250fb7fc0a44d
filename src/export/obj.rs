//! Wavefront OBJ emission.
//!
//! One OBJ file per screen, one `o` group per piece instance. Vertices and
//! normals dedup within each group on their formatted text, so values that
//! agree to six decimals collapse to one pool entry. Face indices are
//! 1-based and file-global, with separate running offsets for the vertex
//! and normal pools.

use std::collections::HashMap;
use std::fmt::Write;

use crate::render::Instance;

/// Positions are shrunk by this factor on the way out, scaling one brick
/// stud to eight millimeters for printing.
pub const EXPORT_SCALE: f32 = 0.4;

fn color_components(color: [f32; 3]) -> String {
    format!("{:.3} {:.3} {:.3}", color[0], color[1], color[2])
}

/// Deterministic material key for a color/opacity pair.
pub fn material_name(color_rgb: u32, opacity: f32) -> String {
    format!("{:06x}-{}", color_rgb, opacity)
}

/// MTL entry for one material: diffuse color and dissolve only.
pub fn material_block(name: &str, color: [f32; 3], opacity: f32) -> String {
    format!(
        "newmtl {}\nKd {}\nd {:.3}\n",
        name,
        color_components(color),
        opacity
    )
}

/// Text pool that assigns each distinct line a zero-based index in first
/// appearance order.
#[derive(Default)]
struct LinePool {
    lines: Vec<String>,
    indices: HashMap<String, usize>,
}

impl LinePool {
    fn intern(&mut self, line: String) -> usize {
        match self.indices.get(&line) {
            Some(&index) => index,
            None => {
                let index = self.lines.len();
                self.indices.insert(line.clone(), index);
                self.lines.push(line);
                index
            }
        }
    }

    fn len(&self) -> usize {
        self.lines.len()
    }
}

/// Serialize one screen's instances to OBJ text.
pub fn screen_object(map_name: &str, instances: &[&Instance], export_scale: f32) -> String {
    let mut obj = String::new();
    writeln!(obj, "mtllib {}.mtl", map_name).unwrap();

    let mut v_offset = 1usize;
    let mut vn_offset = 1usize;

    for instance in instances {
        let normal_matrix = instance.normal_matrix();
        let color = color_components(instance.color);

        let mut v_pool = LinePool::default();
        let mut vn_pool = LinePool::default();
        let mut faces = String::new();
        let mut corner = Vec::with_capacity(3);

        for (position, normal) in instance.geometry.vertices() {
            let world = instance.matrix.transform_point3(position) * export_scale;
            let v_index = v_pool.intern(format!(
                "v {:.6} {:.6} {:.6} {}\n",
                world.x, world.y, world.z, color
            ));

            let world_normal = normal_matrix.mul_vec3(normal).normalize();
            let vn_index = vn_pool.intern(format!(
                "vn {:.6} {:.6} {:.6}\n",
                world_normal.x, world_normal.y, world_normal.z
            ));

            corner.push((v_index + v_offset, vn_index + vn_offset));
            if corner.len() == 3 {
                writeln!(
                    faces,
                    "f {}//{} {}//{} {}//{}",
                    corner[0].0, corner[0].1, corner[1].0, corner[1].1, corner[2].0, corner[2].1
                )
                .unwrap();
                corner.clear();
            }
        }

        writeln!(obj, "o {}", instance.piece_name).unwrap();
        for line in &v_pool.lines {
            obj.push_str(line);
        }
        for line in &vn_pool.lines {
            obj.push_str(line);
        }
        writeln!(
            obj,
            "usemtl {}",
            material_name(instance.color_rgb, instance.opacity)
        )
        .unwrap();
        obj.push_str(&faces);

        v_offset += v_pool.len();
        vn_offset += vn_pool.len();
    }

    obj
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec3};

    use crate::render::BoxGeometry;

    fn test_instance(name: &str, translation: Vec3) -> Instance {
        Instance {
            piece_name: name.to_string(),
            screen_name: "A1".to_string(),
            geometry: BoxGeometry::new(Vec3::new(2.0, 1.0, 2.0)),
            matrix: Mat4::from_translation(translation),
            color_rgb: 0x00852B,
            color: [0.0, 0.522, 0.169],
            opacity: 1.0,
        }
    }

    #[test]
    fn box_dedups_to_eight_vertices_and_six_normals() {
        let instance = test_instance("A1_01,01,01_3024_plate", Vec3::ZERO);
        let obj = screen_object("hyrule", &[&instance], 1.0);
        assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 8);
        assert_eq!(obj.lines().filter(|l| l.starts_with("vn ")).count(), 6);
        assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 12);
    }

    #[test]
    fn face_indices_continue_across_groups() {
        let first = test_instance("a", Vec3::ZERO);
        let second = test_instance("b", Vec3::new(20.0, 0.0, 0.0));
        let obj = screen_object("hyrule", &[&first, &second], 1.0);
        let last_face = obj.lines().rev().find(|l| l.starts_with("f ")).unwrap();
        // The second group's vertex pool starts at index 9.
        let index: usize = last_face
            .split(&[' ', '/'][..])
            .nth(1)
            .unwrap()
            .parse()
            .unwrap();
        assert!(index > 8);
    }

    #[test]
    fn header_references_the_shared_material_library() {
        let instance = test_instance("a", Vec3::ZERO);
        let obj = screen_object("overworld", &[&instance], EXPORT_SCALE);
        assert!(obj.starts_with("mtllib overworld.mtl\n"));
        assert!(obj.contains("usemtl 00852b-1\n"));
    }

    #[test]
    fn material_names_carry_opacity_verbatim() {
        assert_eq!(material_name(0xFFFFFF, 1.0), "ffffff-1");
        assert_eq!(material_name(0x1B2A34, 0.5), "1b2a34-0.5");
    }

    #[test]
    fn material_block_rounds_components_to_three_decimals() {
        let block = material_block("00852b-1", [0.0, 0.5219, 0.1687], 1.0);
        assert_eq!(block, "newmtl 00852b-1\nKd 0.000 0.522 0.169\nd 1.000\n");
    }
}
