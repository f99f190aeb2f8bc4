//! Little-endian byte codec used for the session program's wire layouts.
//!
//! Every helper addresses a caller-owned buffer at an explicit offset and
//! returns the number of bytes it consumed or wrote, so callers can keep a
//! running cursor. Reads and writes are bounds-checked; the buffer is never
//! grown implicitly. Writers encode into an oversized scratch buffer which
//! the caller truncates to the written length.

use crate::error::{Result, SessionSdkError};
use solana_sdk::pubkey::Pubkey;

/// Width of a serialized public key.
pub const PUBKEY_LEN: usize = 32;

fn check_range(data: &[u8], offset: usize, width: usize) -> Result<usize> {
    let end = offset
        .checked_add(width)
        .filter(|end| *end <= data.len())
        .ok_or_else(|| {
            SessionSdkError::InvalidAccountData(format!(
                "need {width} bytes at offset {offset}, buffer holds {}",
                data.len()
            ))
        })?;
    Ok(end)
}

pub fn get_u8(data: &[u8], offset: usize) -> Result<u8> {
    check_range(data, offset, 1)?;
    Ok(data[offset])
}

pub fn get_bool(data: &[u8], offset: usize) -> Result<bool> {
    Ok(get_u8(data, offset)? != 0)
}

pub fn get_u64(data: &[u8], offset: usize) -> Result<u64> {
    let end = check_range(data, offset, 8)?;
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..end]);
    Ok(u64::from_le_bytes(bytes))
}

pub fn get_s64(data: &[u8], offset: usize) -> Result<i64> {
    let end = check_range(data, offset, 8)?;
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..end]);
    Ok(i64::from_le_bytes(bytes))
}

pub fn get_pubkey(data: &[u8], offset: usize) -> Result<Pubkey> {
    let end = check_range(data, offset, PUBKEY_LEN)?;
    let mut bytes = [0u8; PUBKEY_LEN];
    bytes.copy_from_slice(&data[offset..end]);
    Ok(Pubkey::from(bytes))
}

pub fn put_u8(data: &mut [u8], value: u8, offset: usize) -> Result<usize> {
    check_range(data, offset, 1)?;
    data[offset] = value;
    Ok(1)
}

pub fn put_bool(data: &mut [u8], value: bool, offset: usize) -> Result<usize> {
    put_u8(data, u8::from(value), offset)
}

pub fn put_u64(data: &mut [u8], value: u64, offset: usize) -> Result<usize> {
    let end = check_range(data, offset, 8)?;
    data[offset..end].copy_from_slice(&value.to_le_bytes());
    Ok(8)
}

pub fn put_s64(data: &mut [u8], value: i64, offset: usize) -> Result<usize> {
    let end = check_range(data, offset, 8)?;
    data[offset..end].copy_from_slice(&value.to_le_bytes());
    Ok(8)
}

pub fn put_pubkey(data: &mut [u8], value: &Pubkey, offset: usize) -> Result<usize> {
    let end = check_range(data, offset, PUBKEY_LEN)?;
    data[offset..end].copy_from_slice(value.as_ref());
    Ok(PUBKEY_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_at_offset() {
        let mut buf = vec![0u8; 64];
        let mut offset = 3;
        offset += put_u64(&mut buf, 0xDEAD_BEEF_0102_0304, offset).unwrap();
        offset += put_s64(&mut buf, -42, offset).unwrap();
        offset += put_bool(&mut buf, true, offset).unwrap();
        let key = Pubkey::new_unique();
        offset += put_pubkey(&mut buf, &key, offset).unwrap();
        assert_eq!(offset, 3 + 8 + 8 + 1 + 32);

        assert_eq!(get_u64(&buf, 3).unwrap(), 0xDEAD_BEEF_0102_0304);
        assert_eq!(get_s64(&buf, 11).unwrap(), -42);
        assert!(get_bool(&buf, 19).unwrap());
        assert_eq!(get_pubkey(&buf, 20).unwrap(), key);
    }

    #[test]
    fn integers_are_little_endian() {
        let mut buf = vec![0u8; 8];
        put_u64(&mut buf, 0x0102_0304_0506_0708, 0).unwrap();
        assert_eq!(buf, [8, 7, 6, 5, 4, 3, 2, 1]);

        put_s64(&mut buf, -1, 0).unwrap();
        assert_eq!(buf, [0xFF; 8]);
        assert_eq!(get_s64(&buf, 0).unwrap(), -1);
    }

    #[test]
    fn rejects_out_of_range_access() {
        let mut buf = vec![0u8; 10];
        assert!(get_u64(&buf, 3).is_err());
        assert!(get_pubkey(&buf, 0).is_err());
        assert!(get_u8(&buf, 10).is_err());
        assert!(put_u64(&mut buf, 1, 3).is_err());
        assert!(put_u8(&mut buf, 1, 10).is_err());
        // Offsets near usize::MAX must not overflow the range check.
        assert!(get_u64(&buf, usize::MAX - 2).is_err());
    }

    #[test]
    fn bool_reads_any_nonzero_as_true() {
        let buf = [0u8, 1, 7];
        assert!(!get_bool(&buf, 0).unwrap());
        assert!(get_bool(&buf, 1).unwrap());
        assert!(get_bool(&buf, 2).unwrap());
    }
}
