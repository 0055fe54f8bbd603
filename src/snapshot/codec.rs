//! Snapshot container encoding
//!
//! The whole entry map is serialized as JSON and framed with a magic tag,
//! an explicit payload length and a trailing xxhash64 checksum. Anything
//! that does not validate end to end is rejected; a snapshot cannot be
//! half-trusted the way an append-only log can.

use crate::error::{Result, StoreError};
use crate::store::StoreMap;
use xxhash_rust::xxh64::xxh64;

/// Magic tag identifying a snapshot container (format version 1)
pub const MAGIC: [u8; 4] = *b"CUP1";

/// Magic (4 bytes) + payload length (8 bytes)
const HEADER_LEN: usize = 12;

/// Trailing xxhash64 checksum
const CHECKSUM_LEN: usize = 8;

/// Serialize the entry map into a framed container
pub fn encode(entries: &StoreMap) -> Result<Vec<u8>> {
    let payload = serde_json::to_vec(entries).map_err(std::io::Error::from)?;

    let mut buf = Vec::with_capacity(HEADER_LEN + payload.len() + CHECKSUM_LEN);
    buf.extend_from_slice(&MAGIC);
    buf.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    buf.extend_from_slice(&payload);

    let checksum = xxh64(&payload, 0);
    buf.extend_from_slice(&checksum.to_le_bytes());

    Ok(buf)
}

/// Deserialize a framed container back into an entry map
///
/// Returns `StoreError::Corrupt` for bad magic, truncation, trailing
/// garbage, checksum mismatch or an undecodable payload.
pub fn decode(data: &[u8]) -> Result<StoreMap> {
    if data.len() < HEADER_LEN + CHECKSUM_LEN {
        return Err(StoreError::Corrupt(format!(
            "file too short for container framing: {} bytes",
            data.len()
        )));
    }

    if data[..MAGIC.len()] != MAGIC {
        return Err(StoreError::Corrupt("bad magic tag".to_string()));
    }

    let payload_len = u64::from_le_bytes(
        data[MAGIC.len()..HEADER_LEN]
            .try_into()
            .map_err(|_| StoreError::Corrupt("invalid payload length".to_string()))?,
    ) as usize;

    // The length field comes straight from disk; treat overflow as corruption
    let expected = HEADER_LEN
        .checked_add(payload_len)
        .and_then(|n| n.checked_add(CHECKSUM_LEN))
        .ok_or_else(|| StoreError::Corrupt("invalid payload length".to_string()))?;
    if data.len() != expected {
        return Err(StoreError::Corrupt(format!(
            "expected {} bytes, found {}",
            expected,
            data.len()
        )));
    }

    let payload = &data[HEADER_LEN..HEADER_LEN + payload_len];

    let stored_checksum = u64::from_le_bytes(
        data[HEADER_LEN + payload_len..]
            .try_into()
            .map_err(|_| StoreError::Corrupt("invalid checksum".to_string()))?,
    );
    let calculated_checksum = xxh64(payload, 0);
    if stored_checksum != calculated_checksum {
        return Err(StoreError::Corrupt(format!(
            "checksum mismatch: expected {}, got {}",
            stored_checksum, calculated_checksum
        )));
    }

    serde_json::from_slice(payload)
        .map_err(|e| StoreError::Corrupt(format!("payload decode failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Entry, Value};

    fn sample_map() -> StoreMap {
        let mut entries = StoreMap::default();
        entries.insert("alpha".to_string(), Entry::new(Value::string("one")));
        entries.insert(
            "beta".to_string(),
            Entry::with_expiration(Value::integer(2), 300),
        );
        entries
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let entries = sample_map();
        let bytes = encode(&entries).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, entries);
    }

    #[test]
    fn test_encode_decode_empty_map() {
        let entries = StoreMap::default();
        let bytes = encode(&entries).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_reject_truncated_container() {
        let bytes = encode(&sample_map()).unwrap();
        let truncated = &bytes[..bytes.len() - 5];
        assert!(matches!(decode(truncated), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_reject_flipped_payload_byte() {
        let mut bytes = encode(&sample_map()).unwrap();
        bytes[HEADER_LEN + 2] ^= 0xff;
        assert!(matches!(decode(&bytes), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_reject_bad_magic() {
        let mut bytes = encode(&sample_map()).unwrap();
        bytes[0] = b'X';
        assert!(matches!(decode(&bytes), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_reject_trailing_garbage() {
        let mut bytes = encode(&sample_map()).unwrap();
        bytes.extend_from_slice(b"junk");
        assert!(matches!(decode(&bytes), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_reject_empty_file() {
        assert!(matches!(decode(&[]), Err(StoreError::Corrupt(_))));
    }
}
