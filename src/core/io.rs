use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub struct MmapSource {
    mmap: Mmap,
}

impl MmapSource {
    pub fn open(path: &Path) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        // SAFETY: read-only file mapping.
        let mmap = unsafe { Mmap::map(&file) }.with_context(|| "mmap failed")?;
        Ok(Self { mmap })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.mmap
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputKind {
    Plain,
    Gzip,
}

/// Chooses the decoder from the file name alone; content is never sniffed.
pub fn detect_input_kind(path: &Path) -> InputKind {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("gz") => InputKind::Gzip,
        _ => InputKind::Plain,
    }
}

pub fn open_gzip_reader(path: &Path) -> Result<Box<dyn Read + Send>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    // Multi-member aware, so BGZF and concatenated gzip read to the end.
    Ok(Box::new(MultiGzDecoder::new(reader)))
}

/// Decodes UTF-8, silently dropping every byte that is not part of a valid sequence.
pub fn decode_lossy_drop(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Splits on `\n`, `\r\n` and a lone `\r`, keeping terminators. A trailing
/// unterminated line is kept too.
pub fn split_lines(bytes: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0usize;
    while let Some(off) = memchr::memchr2(b'\n', b'\r', &bytes[start..]) {
        let mut end = start + off + 1;
        if bytes[end - 1] == b'\r' && bytes.get(end) == Some(&b'\n') {
            end += 1;
        }
        lines.push(decode_lossy_drop(&bytes[start..end]));
        start = end;
    }
    if start < bytes.len() {
        lines.push(decode_lossy_drop(&bytes[start..]));
    }
    lines
}

/// Every line of the file, materialized up front. Plain files are split
/// straight off the mapping; `.gz` files are inflated into memory first.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    match detect_input_kind(path) {
        InputKind::Plain => {
            let len = std::fs::metadata(path)
                .with_context(|| format!("failed to open {}", path.display()))?
                .len();
            if len == 0 {
                return Ok(Vec::new());
            }
            let source = MmapSource::open(path)?;
            Ok(split_lines(source.bytes()))
        }
        InputKind::Gzip => {
            let mut reader = open_gzip_reader(path)?;
            let mut out = Vec::new();
            reader
                .read_to_end(&mut out)
                .with_context(|| format!("gzip decompression error in {}", path.display()))?;
            Ok(split_lines(&out))
        }
    }
}
