use async_trait::async_trait;
use solana_account_decoder::UiAccountEncoding;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::error::Error;

/// The RPC capabilities the SDK consumes. The SDK never does network I/O on
/// its own; everything goes through an implementation of this trait.
#[async_trait]
pub trait SolConnection: Send + Sync {
    async fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>>;

    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> Result<Option<Account>, Box<dyn Error + Send + Sync>>;

    /// Scan a program's accounts, keeping only those whose data equals
    /// `bytes` at `offset`. The filter is pushed down to the node.
    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
        offset: usize,
        bytes: &[u8],
    ) -> Result<Vec<(Pubkey, Account)>, Box<dyn Error + Send + Sync>>;

    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>>;
}

/// Per-notification callback for account change subscriptions.
pub type AccountCallback = Box<dyn Fn(Account) + Send + Sync>;

/// Push-based account change notifications. Delivery ordering and delivery
/// guarantees are whatever the implementing stream provides; the SDK does
/// not buffer, reorder, or deduplicate.
#[async_trait]
pub trait AccountSubscriber: Send + Sync {
    async fn subscribe_account(
        &self,
        pubkey: &Pubkey,
        callback: AccountCallback,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// [`SolConnection`] backed by a JSON-RPC node.
pub struct RpcConnection {
    rpc: RpcClient,
}

impl RpcConnection {
    pub fn new(url: &str) -> Self {
        Self {
            rpc: RpcClient::new(url.to_string()),
        }
    }

    pub fn new_with_commitment(url: &str, commitment: CommitmentConfig) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(url.to_string(), commitment),
        }
    }
}

#[async_trait]
impl SolConnection for RpcConnection {
    async fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<Signature, Box<dyn Error + Send + Sync>> {
        self.rpc
            .send_transaction(tx)
            .await
            .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)
    }

    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> Result<Option<Account>, Box<dyn Error + Send + Sync>> {
        let response = self
            .rpc
            .get_account_with_commitment(pubkey, self.rpc.commitment())
            .await
            .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)?;
        Ok(response.value)
    }

    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
        offset: usize,
        bytes: &[u8],
    ) -> Result<Vec<(Pubkey, Account)>, Box<dyn Error + Send + Sync>> {
        let config = RpcProgramAccountsConfig {
            filters: Some(vec![RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
                offset,
                bytes.to_vec(),
            ))]),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                commitment: Some(self.rpc.commitment()),
                ..RpcAccountInfoConfig::default()
            },
            ..RpcProgramAccountsConfig::default()
        };
        self.rpc
            .get_program_accounts_with_config(program_id, config)
            .await
            .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn Error + Send + Sync>> {
        self.rpc
            .get_latest_blockhash()
            .await
            .map_err(|e| Box::new(e) as Box<dyn Error + Send + Sync>)
    }
}
