use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;

/// Abstraction for an entity that can produce signatures for the keys a
/// transaction requires. This allows the SDK to work with:
/// 1. Local Keypairs (Backend/CLI)
/// 2. Wallet adapters or remote signers that sign message bytes per key
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// The fee payer this signer fronts.
    fn pubkey(&self) -> Pubkey;

    /// Sign serialized message bytes on behalf of `signer`.
    /// Returns Err if the key is unknown or signing failed.
    async fn sign_message(&self, message: &[u8], signer: &Pubkey) -> Result<Signature, String>;
}

/// [`TransactionSigner`] over a set of locally held keypairs. The first
/// keypair is the fee payer.
pub struct LocalSigner {
    keys: Vec<Keypair>,
}

impl LocalSigner {
    pub fn new(payer: Keypair) -> Self {
        Self { keys: vec![payer] }
    }

    /// Add a keypair this signer may be asked to sign for (e.g. the session
    /// signer or the authority of a create-session instruction).
    pub fn with_key(mut self, key: Keypair) -> Self {
        self.keys.push(key);
        self
    }
}

#[async_trait]
impl TransactionSigner for LocalSigner {
    fn pubkey(&self) -> Pubkey {
        self.keys[0].pubkey()
    }

    async fn sign_message(&self, message: &[u8], signer: &Pubkey) -> Result<Signature, String> {
        let keypair = self
            .keys
            .iter()
            .find(|k| k.pubkey() == *signer)
            .ok_or_else(|| format!("no keypair held for signer {signer}"))?;
        Ok(keypair.sign_message(message))
    }
}
