pub mod client;
pub mod codec;
pub mod core;
pub mod error;
pub mod instructions;
pub mod state;
pub mod types;
pub mod utils;

pub use crate::client::SessionClient;
pub use crate::core::connection::{AccountCallback, AccountSubscriber, RpcConnection, SolConnection};
pub use crate::core::constants::PROGRAM_ID;
pub use crate::core::signer::{LocalSigner, TransactionSigner};
pub use crate::error::{GplSessionError, Result, SessionSdkError};
pub use crate::state::SessionToken;
pub use crate::types::{CreateSessionAccounts, RevokeSessionAccounts};
pub use crate::utils::{derive_session_token_pda, session_token_address};
