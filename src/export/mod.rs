//! Archive export: OBJ/MTL text packed into a gzip-compressed tar.
//!
//! Screens become `{map}.{screen}.obj` entries in label order, followed by
//! one shared `{map}.mtl`. The progress callback fires once per screen
//! before that screen is serialized.

pub mod obj;
pub mod tar;

pub use obj::EXPORT_SCALE;

use std::collections::BTreeMap;
use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::Result;
use crate::render::Instance;

use self::tar::TarWriter;

/// Shared material library: one entry per distinct color/opacity pair, in
/// first-use order over the instance stream.
fn material_library(instances: &[Instance]) -> String {
    let mut seen = Vec::new();
    let mut mtl = String::new();
    for instance in instances {
        let name = obj::material_name(instance.color_rgb, instance.opacity);
        if !seen.contains(&name) {
            mtl.push_str(&obj::material_block(&name, instance.color, instance.opacity));
            seen.push(name);
        }
    }
    mtl
}

/// Serialize instances into a `.tar.gz` byte stream on `writer`.
///
/// Returns the writer once the gzip stream is finalized. `progress`
/// receives each screen label as its OBJ entry begins.
pub fn export_archive<W: Write>(
    instances: &[Instance],
    map_name: &str,
    writer: W,
    mut progress: impl FnMut(&str),
) -> Result<W> {
    let mut screens: BTreeMap<&str, Vec<&Instance>> = BTreeMap::new();
    for instance in instances {
        screens
            .entry(instance.screen_name.as_str())
            .or_default()
            .push(instance);
    }

    let encoder = GzEncoder::new(writer, Compression::default());
    let mut archive = TarWriter::new(encoder);

    for (screen_name, mut screen_instances) in screens {
        screen_instances.sort_by(|a, b| a.piece_name.cmp(&b.piece_name));
        progress(screen_name);
        let content = obj::screen_object(map_name, &screen_instances, EXPORT_SCALE);
        archive.append(
            &format!("{}.{}.obj", map_name, screen_name),
            content.as_bytes(),
        )?;
    }

    archive.append(
        &format!("{}.mtl", map_name),
        material_library(instances).as_bytes(),
    )?;

    let encoder = archive.finish()?;
    Ok(encoder.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::color::ColorSystem;
    use crate::map::{compile, MapSelection};
    use crate::render::instances;

    #[test]
    fn progress_reports_each_screen_in_label_order() {
        let manifest = compile(MapSelection::Samples, 0.0, true, true).unwrap();
        let records = instances(&manifest, ColorSystem::Ldraw).unwrap();
        let mut reported = Vec::new();
        export_archive(&records, "samples", Vec::new(), |screen| {
            reported.push(screen.to_string())
        })
        .unwrap();
        assert_eq!(reported, vec!["G10", "H10", "I10", "J10", "K10"]);
    }

    #[test]
    fn material_library_keeps_first_use_order_without_duplicates() {
        let manifest = compile(MapSelection::Samples, 0.0, true, true).unwrap();
        let records = instances(&manifest, ColorSystem::Ldraw).unwrap();
        let mtl = material_library(&records);
        let names: Vec<&str> = mtl
            .lines()
            .filter_map(|line| line.strip_prefix("newmtl "))
            .collect();
        assert!(!names.is_empty());
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names.len(), sorted.len());
    }

    #[test]
    fn archive_bytes_start_with_the_gzip_magic() {
        let manifest = compile(MapSelection::Samples, 0.0, false, false).unwrap();
        let records = instances(&manifest, ColorSystem::Ldraw).unwrap();
        let bytes = export_archive(&records, "samples", Vec::new(), |_| {}).unwrap();
        assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
    }
}
