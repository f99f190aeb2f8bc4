//! High-level client facade over the session program codecs.
//!
//! The facade is thin orchestration: it derives addresses, encodes
//! instructions, decodes fetched bytes, and hands finished buffers to the
//! injected connection/signer collaborators. It performs no blocking work,
//! holds no locks, and never retries network operations.

use crate::core::connection::{AccountSubscriber, SolConnection};
use crate::core::constants::PROGRAM_ID;
use crate::core::signer::TransactionSigner;
use crate::error::{Result, SessionSdkError};
use crate::instructions;
use crate::state::SessionToken;
use crate::types::{CreateSessionAccounts, RevokeSessionAccounts};
use crate::utils;
use log::debug;
use solana_sdk::account::Account;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

/// Client for the GPL Session program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClient {
    /// Program ID the client targets.
    pub program_id: Pubkey,
}

impl Default for SessionClient {
    fn default() -> Self {
        Self {
            program_id: PROGRAM_ID,
        }
    }
}

impl SessionClient {
    /// Client against the deployed session program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Client against a custom deployment of the program.
    pub fn with_program_id(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    /// Derive the session token PDA for the given role keys.
    pub fn derive_session_token(
        &self,
        target_program: &Pubkey,
        session_signer: &Pubkey,
        authority: &Pubkey,
    ) -> (Pubkey, u8) {
        utils::derive_session_token_pda(&self.program_id, target_program, session_signer, authority)
    }

    /// Fetch and decode the session token at `address`. Missing accounts and
    /// accounts holding other data are both `Ok(None)`.
    pub async fn get_session_token(
        &self,
        connection: &impl SolConnection,
        address: &Pubkey,
    ) -> Result<Option<SessionToken>> {
        debug!("fetching session token at {address}");
        utils::fetch_session_token(connection, address).await
    }

    /// Fetch every session token owned by the program. The node applies the
    /// discriminator prefilter; accounts that pass the filter but fail to
    /// decode are skipped.
    pub async fn get_session_tokens(
        &self,
        connection: &impl SolConnection,
    ) -> Result<Vec<(Pubkey, SessionToken)>> {
        debug!("scanning program {} for session tokens", self.program_id);
        let accounts = connection
            .get_program_accounts(&self.program_id, 0, &SessionToken::DISCRIMINATOR_BYTES)
            .await
            .map_err(|e| SessionSdkError::Connection(e.to_string()))?;
        Ok(accounts
            .into_iter()
            .filter_map(|(address, account)| {
                SessionToken::deserialize(&account.data).map(|token| (address, token))
            })
            .collect())
    }

    /// Subscribe to changes of the session token account at `address`.
    ///
    /// Every notification is forwarded; when the new account data no longer
    /// decodes as a session token (e.g. the account was closed or reused)
    /// the callback receives `None` rather than being suppressed.
    pub async fn subscribe_session_token<F>(
        &self,
        subscriber: &impl AccountSubscriber,
        address: &Pubkey,
        callback: F,
    ) -> Result<()>
    where
        F: Fn(Account, Option<SessionToken>) + Send + Sync + 'static,
    {
        debug!("subscribing to session token at {address}");
        subscriber
            .subscribe_account(
                address,
                Box::new(move |account: Account| {
                    let decoded = SessionToken::deserialize(&account.data);
                    callback(account, decoded);
                }),
            )
            .await
            .map_err(|e| SessionSdkError::Connection(e.to_string()))
    }

    /// Build, sign, and submit a `create_session` transaction.
    pub async fn send_create_session(
        &self,
        connection: &impl SolConnection,
        signer: &impl TransactionSigner,
        accounts: &CreateSessionAccounts,
        top_up: Option<bool>,
        valid_until: Option<i64>,
    ) -> Result<Signature> {
        let ix = instructions::create_session(accounts, top_up, valid_until, Some(self.program_id));
        self.sign_and_send(connection, signer, ix).await
    }

    /// [`Self::send_create_session`] for program builds that take an explicit
    /// top-up amount.
    pub async fn send_create_session_with_top_up_lamports(
        &self,
        connection: &impl SolConnection,
        signer: &impl TransactionSigner,
        accounts: &CreateSessionAccounts,
        top_up: Option<bool>,
        valid_until: Option<i64>,
        top_up_lamports: Option<u64>,
    ) -> Result<Signature> {
        let ix = instructions::create_session_with_top_up_lamports(
            accounts,
            top_up,
            valid_until,
            top_up_lamports,
            Some(self.program_id),
        );
        self.sign_and_send(connection, signer, ix).await
    }

    /// Build, sign, and submit a `revoke_session` transaction.
    pub async fn send_revoke_session(
        &self,
        connection: &impl SolConnection,
        signer: &impl TransactionSigner,
        accounts: &RevokeSessionAccounts,
    ) -> Result<Signature> {
        let ix = instructions::revoke_session(accounts, Some(self.program_id));
        self.sign_and_send(connection, signer, ix).await
    }

    /// Assemble a single-instruction transaction, collect one signature per
    /// required signer through the signing callback, and submit. The RPC
    /// outcome is returned unchanged; retrying is the collaborator's job.
    async fn sign_and_send(
        &self,
        connection: &impl SolConnection,
        signer: &impl TransactionSigner,
        ix: Instruction,
    ) -> Result<Signature> {
        let payer = signer.pubkey();
        let blockhash = connection
            .get_latest_blockhash()
            .await
            .map_err(|e| SessionSdkError::Connection(e.to_string()))?;

        let message = Message::new_with_blockhash(&[ix], Some(&payer), &blockhash);
        let mut tx = Transaction::new_unsigned(message);
        let message_data = tx.message_data();
        let required = tx.message.header.num_required_signatures as usize;
        for index in 0..required {
            let key = tx.message.account_keys[index];
            let signature = signer
                .sign_message(&message_data, &key)
                .await
                .map_err(SessionSdkError::Signing)?;
            tx.signatures[index] = signature;
        }

        debug!("submitting transaction with {required} signatures");
        connection
            .send_transaction(&tx)
            .await
            .map_err(|e| SessionSdkError::Connection(e.to_string()))
    }
}
