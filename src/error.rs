use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Errors defined by the on-chain GPL Session program.
///
/// The program reports these as custom error codes in the 6000 range; the
/// SDK only supplies the mapping, it never raises them itself.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GplSessionError {
    /// The requested session validity exceeds the program's limit.
    #[error("Requested validity is too long")]
    ValidityTooLong,

    /// The provided session token does not match the expected session.
    #[error("Invalid session token")]
    InvalidToken,

    /// No session token account was provided.
    #[error("No session token provided")]
    NoToken,
}

impl GplSessionError {
    /// Map a custom error code reported by the program to its kind.
    /// Codes outside the table return `None` and stay opaque to the caller.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            6000 => Some(Self::ValidityTooLong),
            6001 => Some(Self::InvalidToken),
            6002 => Some(Self::NoToken),
            _ => None,
        }
    }

    /// The custom error code the program uses for this kind.
    pub fn code(&self) -> u32 {
        match self {
            Self::ValidityTooLong => 6000,
            Self::InvalidToken => 6001,
            Self::NoToken => 6002,
        }
    }
}

/// SDK-specific error types for GPL Session operations
#[derive(Debug, Error)]
pub enum SessionSdkError {
    /// Connection or RPC error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Account not found on-chain
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    /// Invalid account data or deserialization error
    #[error("Invalid account data: {0}")]
    InvalidAccountData(String),

    /// The signing callback refused or failed to sign
    #[error("Signing error: {0}")]
    Signing(String),

    /// Custom error code reported by the session program
    #[error("Program error {code}: {kind:?}")]
    Program {
        code: u32,
        kind: Option<GplSessionError>,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl SessionSdkError {
    /// Wrap a program-reported custom error code, resolving it against the
    /// known error table where possible.
    pub fn program(code: u32) -> Self {
        Self::Program {
            code,
            kind: GplSessionError::from_code(code),
        }
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, SessionSdkError>;
