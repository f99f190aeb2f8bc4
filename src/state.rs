//! On-chain account types of the GPL Session program.

use crate::codec;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Proof that `authority` approved `session_signer` to act on its behalf
/// against `target_program` until `valid_until`.
///
/// PDA: ["session_token", target_program, session_signer, authority]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// The long-lived key that authorized the session.
    pub authority: Pubkey,

    /// The program the session is scoped to.
    pub target_program: Pubkey,

    /// The short-lived key permitted to sign on the authority's behalf.
    pub session_signer: Pubkey,

    /// Unix timestamp the session expires at. The program may use a sentinel
    /// for "no expiry"; the SDK passes the value through untouched.
    pub valid_until: i64,
}

impl SessionToken {
    /// Account discriminator at offset 0 of every SessionToken account.
    pub const DISCRIMINATOR: u64 = 1081168673100727529;

    /// Little-endian bytes of [`Self::DISCRIMINATOR`], as stored on-chain.
    pub const DISCRIMINATOR_BYTES: [u8; 8] = [233, 4, 115, 14, 46, 21, 1, 15];

    /// Serialized size: discriminator + three keys + timestamp.
    pub const ACCOUNT_LEN: usize = 8 + 32 * 3 + 8;

    /// Decode a SessionToken from raw account bytes.
    ///
    /// Returns `None` when the buffer is too short or the discriminator does
    /// not match, since fetch APIs routinely hand back accounts of other
    /// types at a probed address. Never yields a partially populated record.
    pub fn deserialize(data: &[u8]) -> Option<SessionToken> {
        if data.len() < Self::ACCOUNT_LEN {
            return None;
        }
        if codec::get_u64(data, 0).ok()? != Self::DISCRIMINATOR {
            return None;
        }
        Some(SessionToken {
            authority: codec::get_pubkey(data, 8).ok()?,
            target_program: codec::get_pubkey(data, 40).ok()?,
            session_signer: codec::get_pubkey(data, 72).ok()?,
            valid_until: codec::get_s64(data, 104).ok()?,
        })
    }

    /// Serialize into the on-chain account layout. The program writes this
    /// itself; the SDK only needs it for fixtures and local comparisons.
    pub fn to_account_data(&self) -> Vec<u8> {
        let mut data = vec![0u8; Self::ACCOUNT_LEN];
        data[0..8].copy_from_slice(&Self::DISCRIMINATOR_BYTES);
        data[8..40].copy_from_slice(self.authority.as_ref());
        data[40..72].copy_from_slice(self.target_program.as_ref());
        data[72..104].copy_from_slice(self.session_signer.as_ref());
        data[104..112].copy_from_slice(&self.valid_until.to_le_bytes());
        data
    }

    /// Check the session has not expired at `now` (Unix seconds). Sentinel
    /// expiry values are the caller's business.
    pub fn is_live(&self, now: i64) -> bool {
        now < self.valid_until
    }
}
