use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

/// Accounts required to create a GPL session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateSessionAccounts {
    /// The session token account (PDA the record is created at).
    pub session_token: Pubkey,

    /// The ephemeral session signer being authorized.
    pub session_signer: Pubkey,

    /// The authority granting the session.
    pub authority: Pubkey,

    /// The program the session is scoped to.
    pub target_program: Pubkey,

    /// The system program.
    pub system_program: Pubkey,
}

impl CreateSessionAccounts {
    /// Bundle the account set with the system program filled in.
    pub fn new(
        session_token: Pubkey,
        session_signer: Pubkey,
        authority: Pubkey,
        target_program: Pubkey,
    ) -> Self {
        Self {
            session_token,
            session_signer,
            authority,
            target_program,
            system_program: system_program::id(),
        }
    }
}

/// Accounts required to revoke a GPL session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevokeSessionAccounts {
    /// The session token account being closed.
    pub session_token: Pubkey,

    /// The authority the rent refund is returned to.
    pub authority: Pubkey,

    /// The system program.
    pub system_program: Pubkey,
}

impl RevokeSessionAccounts {
    pub fn new(session_token: Pubkey, authority: Pubkey) -> Self {
        Self {
            session_token,
            authority,
            system_program: system_program::id(),
        }
    }
}
