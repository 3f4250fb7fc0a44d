//! Minimal POSIX tar serialization for the export archive.
//!
//! Writes classic ustar headers with the handful of fields readers require:
//! name, a fixed file mode, octal size and mtime, the recomputed checksum,
//! a regular-file typeflag and the ustar magic. Entries pad to 512-byte
//! blocks and the stream ends with two zero blocks.

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Result;

const BLOCK: usize = 512;

/// Streams file entries into any writer, typically a gzip encoder.
pub struct TarWriter<W: Write> {
    inner: W,
    mtime: u64,
}

impl<W: Write> TarWriter<W> {
    pub fn new(inner: W) -> Self {
        let mtime = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        Self::with_mtime(inner, mtime)
    }

    pub fn with_mtime(inner: W, mtime: u64) -> Self {
        Self { inner, mtime }
    }

    /// Append one file entry: header, content, block padding.
    pub fn append(&mut self, name: &str, content: &[u8]) -> Result<()> {
        self.inner
            .write_all(&header(name, content.len(), self.mtime))?;
        self.inner.write_all(content)?;
        let remainder = content.len() % BLOCK;
        if remainder > 0 {
            self.inner.write_all(&vec![0u8; BLOCK - remainder])?;
        }
        Ok(())
    }

    /// Write the end-of-archive marker and hand back the writer.
    pub fn finish(mut self) -> Result<W> {
        self.inner.write_all(&[0u8; 2 * BLOCK])?;
        Ok(self.inner)
    }
}

fn set_field(header: &mut [u8; BLOCK], offset: usize, bytes: &[u8]) {
    header[offset..offset + bytes.len()].copy_from_slice(bytes);
}

fn octal_field(value: u64) -> [u8; 12] {
    let mut field = [b'0'; 12];
    field[11] = b' ';
    let digits = format!("{:o}", value);
    let digits = digits.as_bytes();
    let start = 11usize.saturating_sub(digits.len());
    field[start..11].copy_from_slice(&digits[digits.len().saturating_sub(11)..]);
    field
}

fn header(name: &str, length: usize, mtime: u64) -> [u8; BLOCK] {
    let mut header = [0u8; BLOCK];

    let name = name.as_bytes();
    set_field(&mut header, 0, &name[..name.len().min(99)]);
    set_field(&mut header, 100, b"0000644\0");
    set_field(&mut header, 124, &octal_field(length as u64));
    set_field(&mut header, 136, &octal_field(mtime));
    // Checksum is computed over the header with its own field blanked.
    set_field(&mut header, 148, b"        ");
    header[156] = b'0';
    set_field(&mut header, 257, b"ustar\0");
    set_field(&mut header, 263, b"00");

    let checksum: u32 = header.iter().map(|&byte| byte as u32).sum();
    let mut checksum_field = [0u8; 8];
    checksum_field[..6].copy_from_slice(format!("{:06o}", checksum).as_bytes());
    checksum_field[6] = 0;
    checksum_field[7] = b' ';
    set_field(&mut header, 148, &checksum_field);

    header
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_octal(bytes: &[u8]) -> u64 {
        let text = std::str::from_utf8(bytes).unwrap();
        u64::from_str_radix(text.trim_end_matches(['\0', ' ']).trim_start(), 8).unwrap()
    }

    #[test]
    fn entries_pad_to_block_boundaries() {
        let mut tar = TarWriter::with_mtime(Vec::new(), 0);
        tar.append("short.obj", b"v 0 0 0\n").unwrap();
        let bytes = tar.finish().unwrap();
        // Header block, one content block, two trailer blocks.
        assert_eq!(bytes.len(), 4 * BLOCK);
        assert!(bytes[BLOCK + 8..2 * BLOCK].iter().all(|&b| b == 0));
    }

    #[test]
    fn exact_block_content_gets_no_padding() {
        let mut tar = TarWriter::with_mtime(Vec::new(), 0);
        tar.append("a", &[b'x'; BLOCK]).unwrap();
        let bytes = tar.finish().unwrap();
        assert_eq!(bytes.len(), 4 * BLOCK);
        assert_eq!(bytes[2 * BLOCK - 1], b'x');
    }

    #[test]
    fn header_fields_round_trip() {
        let header = header("hyrule.A1.obj", 1234, 1_700_000_000);
        assert_eq!(&header[..13], b"hyrule.A1.obj");
        assert_eq!(&header[100..108], b"0000644\0");
        assert_eq!(parse_octal(&header[124..136]), 1234);
        assert_eq!(parse_octal(&header[136..148]), 1_700_000_000);
        assert_eq!(header[156], b'0');
        assert_eq!(&header[257..263], b"ustar\0");
        assert_eq!(&header[263..265], b"00");
    }

    #[test]
    fn checksum_validates_with_the_field_blanked() {
        let header = header("file", 42, 0);
        let recorded = parse_octal(&header[148..155]);
        let mut blanked = header;
        blanked[148..156].copy_from_slice(b"        ");
        let computed: u64 = blanked.iter().map(|&byte| byte as u64).sum();
        assert_eq!(recorded, computed);
    }
}
