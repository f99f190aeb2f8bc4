use crate::core::connection::SolConnection;
use crate::core::constants::PROGRAM_ID;
use crate::error::{Result, SessionSdkError};
use crate::state::SessionToken;
use solana_sdk::pubkey::Pubkey;

//=============================================================================
// PDA Derivation Helpers
//=============================================================================

/// Seed prefix of the session token PDA.
pub const SESSION_TOKEN_SEED: &[u8] = b"session_token";

/// Derive the session token PDA for an (authority, target program, session
/// signer) triple under `program_id`.
pub fn derive_session_token_pda(
    program_id: &Pubkey,
    target_program: &Pubkey,
    session_signer: &Pubkey,
    authority: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            SESSION_TOKEN_SEED,
            target_program.as_ref(),
            session_signer.as_ref(),
            authority.as_ref(),
        ],
        program_id,
    )
}

/// The canonical session token address under the deployed session program.
pub fn session_token_address(
    authority: &Pubkey,
    target_program: &Pubkey,
    session_signer: &Pubkey,
) -> Pubkey {
    derive_session_token_pda(&PROGRAM_ID, target_program, session_signer, authority).0
}

//=============================================================================
// Account Fetching & Decoding
//=============================================================================

/// Fetch raw session token account data, erroring when the account is
/// missing. Use [`fetch_session_token`] for probe-style reads.
pub async fn fetch_session_token_account(
    connection: &impl SolConnection,
    address: &Pubkey,
) -> Result<Vec<u8>> {
    let account = connection
        .get_account(address)
        .await
        .map_err(|e| SessionSdkError::Connection(e.to_string()))?
        .ok_or(SessionSdkError::AccountNotFound(*address))?;
    Ok(account.data)
}

/// Fetch and decode the session token at `address`. A missing account or an
/// account holding other data decodes to `Ok(None)`.
pub async fn fetch_session_token(
    connection: &impl SolConnection,
    address: &Pubkey,
) -> Result<Option<SessionToken>> {
    let account = connection
        .get_account(address)
        .await
        .map_err(|e| SessionSdkError::Connection(e.to_string()))?;
    Ok(account.and_then(|acc| SessionToken::deserialize(&acc.data)))
}
