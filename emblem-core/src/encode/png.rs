use crate::foundation::{
    core::Pixmap,
    error::{EmblemError, EmblemResult},
};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Fixed deflate level; byte-identical output for identical input.
const DEFLATE_LEVEL: u8 = 6;

/// CRC-32 (ISO 3309 / ITU-T V.42), the PNG chunk checksum.
const CRC32_TABLE: [u32; 256] = {
    let mut table = [0u32; 256];
    let mut i = 0u32;
    while i < 256 {
        let mut crc = i;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ 0xEDB8_8320;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i as usize] = crc;
        i += 1;
    }
    table
};

/// Serialize an RGB8 pixmap into a complete baseline PNG byte stream.
///
/// The output uses bit depth 8, color type 2 (truecolor, no alpha), no
/// interlacing, and filter type 0 on every scanline, with the IDAT payload
/// deflated as a single zlib stream. Any standard-compliant decoder can
/// read it, and repeated encodes of the same pixmap are byte-identical.
pub fn encode_png(pixmap: &Pixmap) -> EmblemResult<Vec<u8>> {
    if pixmap.width == 0 || pixmap.height == 0 {
        return Err(EmblemError::encode("pixmap dimensions must be > 0"));
    }
    let stride = pixmap.width as usize * 3;
    if pixmap.data.len() != stride * pixmap.height as usize {
        return Err(EmblemError::encode(format!(
            "pixmap buffer is {} bytes, expected {}",
            pixmap.data.len(),
            stride * pixmap.height as usize
        )));
    }

    // Filter byte 0 ("none") prefixes each raw scanline.
    let mut raw = Vec::with_capacity(pixmap.height as usize * (stride + 1));
    for row in pixmap.data.chunks_exact(stride) {
        raw.push(0);
        raw.extend_from_slice(row);
    }
    let idat = miniz_oxide::deflate::compress_to_vec_zlib(&raw, DEFLATE_LEVEL);

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&pixmap.width.to_be_bytes());
    ihdr.extend_from_slice(&pixmap.height.to_be_bytes());
    // depth 8, color type 2 (truecolor), compression 0, filter 0, interlace 0
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + ihdr.len() + idat.len() + 3 * 12);
    out.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr);
    write_chunk(&mut out, b"IDAT", &idat);
    write_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

/// Append one length-prefixed, CRC-trailed chunk.
fn write_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    let crc = crc32_update(crc32_update(0xFFFF_FFFF, kind), data) ^ 0xFFFF_FFFF;
    out.extend_from_slice(&crc.to_be_bytes());
}

fn crc32_update(mut crc: u32, data: &[u8]) -> u32 {
    for &b in data {
        crc = CRC32_TABLE[((crc ^ u32::from(b)) & 0xFF) as usize] ^ (crc >> 8);
    }
    crc
}
