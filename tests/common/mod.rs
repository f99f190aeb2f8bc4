use async_trait::async_trait;
use gpl_session_sdk::core::connection::{AccountCallback, AccountSubscriber, SolConnection};
use solana_sdk::{
    account::Account,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::Transaction,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory stand-in for the RPC collaborator: a keyed account store, a log
/// of submitted transactions, and manually triggered change notifications.
pub struct MockConnection {
    pub accounts: Mutex<HashMap<Pubkey, Account>>,
    pub sent: Mutex<Vec<Transaction>>,
    pub blockhash: Hash,
    pub fail_sends: bool,
    subscriptions: Mutex<HashMap<Pubkey, Vec<AccountCallback>>>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            sent: Mutex::new(Vec::new()),
            blockhash: Hash::new_unique(),
            fail_sends: false,
            subscriptions: Mutex::new(HashMap::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_sends: true,
            ..Self::new()
        }
    }

    pub async fn set_account(&self, address: Pubkey, owner: Pubkey, data: Vec<u8>) {
        let account = Account {
            lamports: 1_000_000,
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        };
        self.accounts.lock().await.insert(address, account);
    }

    /// Push an account change to every callback registered for `address`.
    pub async fn notify(&self, address: &Pubkey, owner: Pubkey, data: Vec<u8>) {
        let account = Account {
            lamports: 1_000_000,
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        };
        let subscriptions = self.subscriptions.lock().await;
        if let Some(callbacks) = subscriptions.get(address) {
            for callback in callbacks {
                callback(account.clone());
            }
        }
    }

    pub async fn sent_transactions(&self) -> Vec<Transaction> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl SolConnection for MockConnection {
    async fn send_transaction(
        &self,
        tx: &Transaction,
    ) -> Result<Signature, Box<dyn std::error::Error + Send + Sync>> {
        if self.fail_sends {
            return Err("custom program error: 0x1771".into());
        }
        let signature = *tx.signatures.first().ok_or("transaction has no signatures")?;
        self.sent.lock().await.push(tx.clone());
        Ok(signature)
    }

    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> Result<Option<Account>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.accounts.lock().await.get(pubkey).cloned())
    }

    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
        offset: usize,
        bytes: &[u8],
    ) -> Result<Vec<(Pubkey, Account)>, Box<dyn std::error::Error + Send + Sync>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts
            .iter()
            .filter(|(_, account)| {
                account.owner == *program_id
                    && account.data.len() >= offset + bytes.len()
                    && &account.data[offset..offset + bytes.len()] == bytes
            })
            .map(|(address, account)| (*address, account.clone()))
            .collect())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.blockhash)
    }
}

#[async_trait]
impl AccountSubscriber for MockConnection {
    async fn subscribe_account(
        &self,
        pubkey: &Pubkey,
        callback: AccountCallback,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.subscriptions
            .lock()
            .await
            .entry(*pubkey)
            .or_default()
            .push(callback);
        Ok(())
    }
}

/// Shared collector for subscription callbacks.
pub type Notifications = Arc<std::sync::Mutex<Vec<(usize, Option<gpl_session_sdk::SessionToken>)>>>;

pub fn notification_sink() -> Notifications {
    Arc::new(std::sync::Mutex::new(Vec::new()))
}
