/// Optimized binary primitives shared by the manifest and partition formats
///
/// Integers use an unsigned LEB128 variable-length encoding: seven value bits
/// per byte, high bit set on every byte except the last. Small magnitudes
/// (counts, ids, lengths) therefore cost one or two bytes. Strings and blobs
/// are length-prefixed with a varint followed by the raw bytes.

use super::error::{SnapshotError, SnapshotResult};
use std::io::{Read, Write};

/// Maximum number of bytes a u64 varint can occupy
const MAX_VARINT_LEN: usize = 10;

/// Upper bound for speculative buffer preallocation
///
/// Lengths come off the wire, so a corrupt stream can claim arbitrary sizes;
/// buffers only grow past this bound as actual bytes arrive.
const MAX_PREALLOC: usize = 64 * 1024;

/// Write a u64 with the variable-length integer encoding
pub fn write_varint<W: Write + ?Sized>(writer: &mut W, mut value: u64) -> SnapshotResult<()> {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            writer.write_all(&[byte])?;
            return Ok(());
        }
        writer.write_all(&[byte | 0x80])?;
    }
}

/// Read a u64 written by `write_varint`
pub fn read_varint<R: Read + ?Sized>(reader: &mut R) -> SnapshotResult<u64> {
    let mut value: u64 = 0;
    let mut shift: u32 = 0;
    for _ in 0..MAX_VARINT_LEN {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte)?;
        let b = byte[0];
        // The tenth byte of a u64 varint may only carry the final bit.
        if shift == 63 && b > 1 {
            return Err(SnapshotError::InvalidEncoding(
                "varint overflows u64".to_string(),
            ));
        }
        value |= u64::from(b & 0x7F) << shift;
        if b & 0x80 == 0 {
            return Ok(value);
        }
        shift += 7;
    }
    Err(SnapshotError::InvalidEncoding(
        "varint longer than 10 bytes".to_string(),
    ))
}

/// Write a length-prefixed byte sequence
pub fn write_blob<W: Write + ?Sized>(writer: &mut W, bytes: &[u8]) -> SnapshotResult<()> {
    write_varint(writer, bytes.len() as u64)?;
    writer.write_all(bytes)?;
    Ok(())
}

/// Read a byte sequence written by `write_blob`
pub fn read_blob<R: Read + ?Sized>(reader: &mut R) -> SnapshotResult<Vec<u8>> {
    let len = read_varint(reader)?;
    let len = usize::try_from(len)
        .map_err(|_| SnapshotError::InvalidEncoding(format!("blob length {} too large", len)))?;
    let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC));
    let read = (&mut *reader).take(len as u64).read_to_end(&mut buf)?;
    if read != len {
        return Err(SnapshotError::InvalidEncoding(format!(
            "blob truncated: expected {} bytes, got {}",
            len, read
        )));
    }
    Ok(buf)
}

/// Write a length-prefixed UTF-8 string
pub fn write_string<W: Write + ?Sized>(writer: &mut W, s: &str) -> SnapshotResult<()> {
    write_blob(writer, s.as_bytes())
}

/// Read a string written by `write_string`
pub fn read_string<R: Read + ?Sized>(reader: &mut R) -> SnapshotResult<String> {
    let bytes = read_blob(reader)?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn roundtrip_varint(value: u64) -> u64 {
        let mut buf = Vec::new();
        write_varint(&mut buf, value).unwrap();
        read_varint(&mut Cursor::new(buf)).unwrap()
    }

    #[test]
    fn test_varint_small_values_are_one_byte() {
        for value in [0u64, 1, 42, 127] {
            let mut buf = Vec::new();
            write_varint(&mut buf, value).unwrap();
            assert_eq!(buf.len(), 1, "value {} should fit one byte", value);
            assert_eq!(roundtrip_varint(value), value);
        }
    }

    #[test]
    fn test_varint_boundaries() {
        for value in [
            127u64,
            128,
            16_383,
            16_384,
            u64::from(u32::MAX),
            u64::MAX - 1,
            u64::MAX,
        ] {
            assert_eq!(roundtrip_varint(value), value);
        }
    }

    #[test]
    fn test_varint_max_is_ten_bytes() {
        let mut buf = Vec::new();
        write_varint(&mut buf, u64::MAX).unwrap();
        assert_eq!(buf.len(), 10);
    }

    #[test]
    fn test_varint_truncated_input() {
        // Continuation bit set but stream ends
        let result = read_varint(&mut Cursor::new(vec![0x80]));
        assert!(result.is_err());
    }

    #[test]
    fn test_varint_overflow_rejected() {
        // Eleven continuation bytes can never be a valid u64
        let result = read_varint(&mut Cursor::new(vec![0x80; 11]));
        assert!(matches!(result, Err(SnapshotError::InvalidEncoding(_))));
    }

    #[test]
    fn test_string_roundtrip() {
        let mut buf = Vec::new();
        write_string(&mut buf, "snapshot_0_to_42").unwrap();
        write_string(&mut buf, "").unwrap();
        write_string(&mut buf, "héllo wörld").unwrap();

        let mut cursor = Cursor::new(buf);
        assert_eq!(read_string(&mut cursor).unwrap(), "snapshot_0_to_42");
        assert_eq!(read_string(&mut cursor).unwrap(), "");
        assert_eq!(read_string(&mut cursor).unwrap(), "héllo wörld");
    }

    #[test]
    fn test_string_invalid_utf8() {
        let mut buf = Vec::new();
        write_blob(&mut buf, &[0xFF, 0xFE]).unwrap();
        let result = read_string(&mut Cursor::new(buf));
        assert!(matches!(result, Err(SnapshotError::Utf8Error(_))));
    }

    #[test]
    fn test_primitives_accept_trait_objects() {
        // Codec implementations hand these functions `&mut dyn Write` /
        // `&mut dyn Read`; the unsized instantiation must keep working.
        let mut buf: Vec<u8> = Vec::new();
        {
            let writer: &mut dyn Write = &mut buf;
            write_varint(writer, 300).unwrap();
            write_string(writer, "dyn").unwrap();
        }

        let mut cursor = Cursor::new(buf);
        let reader: &mut dyn Read = &mut cursor;
        assert_eq!(read_varint(reader).unwrap(), 300);
        assert_eq!(read_string(reader).unwrap(), "dyn");
    }

    #[test]
    fn test_blob_huge_length_claim() {
        // A corrupt length prefix far beyond the actual data must surface as
        // an error, not exhaust memory.
        let mut buf = Vec::new();
        write_varint(&mut buf, u64::MAX / 2).unwrap();
        buf.extend_from_slice(&[1, 2, 3]);
        let result = read_blob(&mut Cursor::new(buf));
        assert!(matches!(result, Err(SnapshotError::InvalidEncoding(_))));
    }

    #[test]
    fn test_blob_truncated() {
        let mut buf = Vec::new();
        write_varint(&mut buf, 100).unwrap();
        buf.extend_from_slice(&[1, 2, 3]);
        let result = read_blob(&mut Cursor::new(buf));
        assert!(result.is_err());
    }
}
