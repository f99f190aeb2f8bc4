//! Instruction builders for the GPL Session program.
//!
//! Account ordering, writable/signer flags, and data bytes are part of the
//! wire contract and reproduced exactly. Data is encoded into an oversized
//! scratch buffer and truncated to the written length, so absent optional
//! fields contribute only their one-byte presence tag.

use crate::codec;
use crate::core::constants::PROGRAM_ID;
use crate::error::Result;
use crate::types::{CreateSessionAccounts, RevokeSessionAccounts};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;

/// Instruction discriminator of `create_session`.
pub const CREATE_SESSION_DISCRIMINATOR: u64 = 16391441928816673266;

/// Instruction discriminator of `revoke_session`.
pub const REVOKE_SESSION_DISCRIMINATOR: u64 = 13981146387719806038;

// Fits the widest encoding: discriminator plus three present optionals.
const DATA_SCRATCH_LEN: usize = 64;

fn put_option_bool(data: &mut [u8], value: Option<bool>, offset: usize) -> Result<usize> {
    match value {
        Some(v) => {
            let mut written = codec::put_u8(data, 1, offset)?;
            written += codec::put_bool(data, v, offset + written)?;
            Ok(written)
        },
        None => codec::put_u8(data, 0, offset),
    }
}

fn put_option_s64(data: &mut [u8], value: Option<i64>, offset: usize) -> Result<usize> {
    match value {
        Some(v) => {
            let mut written = codec::put_u8(data, 1, offset)?;
            written += codec::put_s64(data, v, offset + written)?;
            Ok(written)
        },
        None => codec::put_u8(data, 0, offset),
    }
}

fn put_option_u64(data: &mut [u8], value: Option<u64>, offset: usize) -> Result<usize> {
    match value {
        Some(v) => {
            let mut written = codec::put_u8(data, 1, offset)?;
            written += codec::put_u64(data, v, offset + written)?;
            Ok(written)
        },
        None => codec::put_u8(data, 0, offset),
    }
}

fn encode_create_session_data(
    top_up: Option<bool>,
    valid_until: Option<i64>,
    top_up_lamports: Option<Option<u64>>,
) -> Result<Vec<u8>> {
    let mut data = vec![0u8; DATA_SCRATCH_LEN];
    let mut offset = codec::put_u64(&mut data, CREATE_SESSION_DISCRIMINATOR, 0)?;
    offset += put_option_bool(&mut data, top_up, offset)?;
    offset += put_option_s64(&mut data, valid_until, offset)?;
    if let Some(lamports) = top_up_lamports {
        offset += put_option_u64(&mut data, lamports, offset)?;
    }
    data.truncate(offset);
    Ok(data)
}

fn create_session_metas(accounts: &CreateSessionAccounts) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new(accounts.session_token, false),
        AccountMeta::new(accounts.session_signer, true),
        AccountMeta::new(accounts.authority, true),
        AccountMeta::new_readonly(accounts.target_program, false),
        AccountMeta::new_readonly(accounts.system_program, false),
    ]
}

/// Build a `create_session` instruction.
///
/// `program_id` falls back to the deployed session program when `None`.
pub fn create_session(
    accounts: &CreateSessionAccounts,
    top_up: Option<bool>,
    valid_until: Option<i64>,
    program_id: Option<Pubkey>,
) -> Instruction {
    let data = encode_create_session_data(top_up, valid_until, None)
        .expect("scratch buffer covers the widest encoding");
    Instruction {
        program_id: program_id.unwrap_or(PROGRAM_ID),
        accounts: create_session_metas(accounts),
        data,
    }
}

/// Build a `create_session` instruction for program builds that accept an
/// explicit top-up amount as a third optional field. The data layout matches
/// [`create_session`] with a presence-tagged `u64` appended.
pub fn create_session_with_top_up_lamports(
    accounts: &CreateSessionAccounts,
    top_up: Option<bool>,
    valid_until: Option<i64>,
    top_up_lamports: Option<u64>,
    program_id: Option<Pubkey>,
) -> Instruction {
    let data = encode_create_session_data(top_up, valid_until, Some(top_up_lamports))
        .expect("scratch buffer covers the widest encoding");
    Instruction {
        program_id: program_id.unwrap_or(PROGRAM_ID),
        accounts: create_session_metas(accounts),
        data,
    }
}

/// Build a `revoke_session` instruction. The data payload is the bare
/// discriminator; account values only affect the metadata list.
pub fn revoke_session(
    accounts: &RevokeSessionAccounts,
    program_id: Option<Pubkey>,
) -> Instruction {
    Instruction {
        program_id: program_id.unwrap_or(PROGRAM_ID),
        accounts: vec![
            AccountMeta::new(accounts.session_token, false),
            AccountMeta::new(accounts.authority, false),
            AccountMeta::new_readonly(accounts.system_program, false),
        ],
        data: REVOKE_SESSION_DISCRIMINATOR.to_le_bytes().to_vec(),
    }
}
