//! End-to-end test: compile a map, export the archive to disk, decompress
//! it and walk the tar entries back out.

use std::fs;
use std::io::Read;

use flate2::read::GzDecoder;

use brickquest::{compile, export_archive, instances, ColorSystem, MapSelection};

struct TarEntry {
    name: String,
    content: Vec<u8>,
}

fn parse_octal(bytes: &[u8]) -> u64 {
    let text = std::str::from_utf8(bytes).expect("octal field is ascii");
    u64::from_str_radix(text.trim_end_matches(['\0', ' ']).trim_start(), 8)
        .expect("octal field parses")
}

fn read_tar(bytes: &[u8]) -> Vec<TarEntry> {
    let mut entries = Vec::new();
    let mut offset = 0;
    loop {
        let header = &bytes[offset..offset + 512];
        if header.iter().all(|&b| b == 0) {
            // Two zero blocks end the archive.
            assert!(bytes[offset + 512..offset + 1024].iter().all(|&b| b == 0));
            break;
        }

        let name_end = header.iter().position(|&b| b == 0).unwrap();
        let name = String::from_utf8(header[..name_end].to_vec()).unwrap();
        let length = parse_octal(&header[124..136]) as usize;

        // Checksum must validate over the header with its field blanked.
        let recorded = parse_octal(&header[148..156]);
        let mut blanked = header.to_vec();
        blanked[148..156].copy_from_slice(b"        ");
        let computed: u64 = blanked.iter().map(|&b| b as u64).sum();
        assert_eq!(recorded, computed, "checksum for {}", name);
        assert_eq!(header[156], b'0');
        assert_eq!(&header[257..263], b"ustar\0");

        let start = offset + 512;
        entries.push(TarEntry {
            name,
            content: bytes[start..start + length].to_vec(),
        });
        offset = start + length.div_ceil(512) * 512;
    }
    entries
}

#[test]
fn exported_archive_round_trips_through_gzip_and_tar() {
    let manifest = compile(MapSelection::Samples, 4.0, true, true).unwrap();
    let records = instances(&manifest, ColorSystem::Ldraw).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("samples.tar.gz");
    let file = fs::File::create(&path).unwrap();
    let mut reported = Vec::new();
    export_archive(&records, "samples", file, |screen| {
        reported.push(screen.to_string())
    })
    .unwrap();

    let compressed = fs::read(&path).unwrap();
    let mut tar_bytes = Vec::new();
    GzDecoder::new(compressed.as_slice())
        .read_to_end(&mut tar_bytes)
        .unwrap();
    assert_eq!(tar_bytes.len() % 512, 0);

    let entries = read_tar(&tar_bytes);
    let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "samples.G10.obj",
            "samples.H10.obj",
            "samples.I10.obj",
            "samples.J10.obj",
            "samples.K10.obj",
            "samples.mtl",
        ]
    );
    assert_eq!(reported, vec!["G10", "H10", "I10", "J10", "K10"]);

    // Every OBJ references the shared material library and contains
    // geometry; the MTL defines every material the OBJ files use.
    let mtl = String::from_utf8(entries.last().unwrap().content.clone()).unwrap();
    let defined: Vec<&str> = mtl
        .lines()
        .filter_map(|line| line.strip_prefix("newmtl "))
        .collect();
    assert!(!defined.is_empty());

    for entry in &entries[..entries.len() - 1] {
        let obj = String::from_utf8(entry.content.clone()).unwrap();
        assert!(obj.starts_with("mtllib samples.mtl\n"));
        assert!(obj.lines().any(|line| line.starts_with("v ")));
        assert!(obj.lines().any(|line| line.starts_with("f ")));
        for material in obj
            .lines()
            .filter_map(|line| line.strip_prefix("usemtl "))
        {
            assert!(defined.contains(&material), "undefined material {material}");
        }
    }
}

#[test]
fn compilation_is_deterministic_across_runs() {
    let first = compile(MapSelection::Underworld, 4.0, true, true).unwrap();
    let second = compile(MapSelection::Underworld, 4.0, true, true).unwrap();
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    assert_eq!(first.len(), second.len());
}

#[test]
fn flattened_export_still_produces_every_screen() {
    let manifest = compile(MapSelection::Caves, 0.0, false, false).unwrap();
    let records = instances(&manifest, ColorSystem::Nes).unwrap();
    let mut screens: Vec<String> = records
        .iter()
        .map(|record| record.screen_name.clone())
        .collect();
    screens.sort_unstable();
    screens.dedup();
    // 16 columns by 8 rows of caves, every cell populated.
    assert_eq!(screens.len(), 128);
}
