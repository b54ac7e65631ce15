use crate::crypto::chat_error::ChatResult;
use crate::crypto::chat_settings::ChatSettings;
use dh_crypto::{DiffieHellman, KeyExchangeAlgorithm, KeyPair};
use log::debug;
use num_bigint::BigUint;
use std::path::PathBuf;
use symmetric_cipher::{CipherContext, CipherTask};

/// Truncates or zero-extends a shared secret to `key_len` bytes.
pub fn derive_session_key(secret: &[u8], key_len: usize) -> Vec<u8> {
    let mut key = secret.to_vec();
    key.resize(key_len, 0);
    key
}

/// One long-lived cipher context per conversation.
#[derive(Clone)]
pub struct ChatSession {
    settings: ChatSettings,
    context: CipherContext,
}

impl ChatSession {
    pub fn new(settings: ChatSettings, session_key: &[u8]) -> ChatResult<Self> {
        let cipher = settings.algorithm.build_cipher(session_key)?;
        let context = CipherContext::new(cipher, settings.mode, settings.padding, Some(settings.iv.clone()))?;
        debug!(
            "chat session ready: {} / {} / {}",
            settings.algorithm, settings.mode, settings.padding
        );
        Ok(Self { settings, context })
    }

    pub fn from_shared_secret(settings: ChatSettings, secret: &[u8]) -> ChatResult<Self> {
        let key = derive_session_key(secret, settings.algorithm.key_len());
        Self::new(settings, &key)
    }

    /// Completes the key agreement with the peer's public value and builds
    /// the session from the resulting secret.
    pub fn from_key_exchange(
        settings: ChatSettings,
        dh: &DiffieHellman,
        own: &KeyPair,
        peer_public_key: &[u8],
    ) -> ChatResult<Self> {
        let peer = BigUint::from_bytes_be(peer_public_key);
        let secret = dh.compute_shared_secret(&own.private_key, &peer)?;
        Self::from_shared_secret(settings, &secret)
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    pub fn context(&self) -> &CipherContext {
        &self.context
    }

    pub async fn encrypt_message(&self, text: &str) -> ChatResult<Vec<u8>> {
        Ok(self.context.encrypt_async(text.as_bytes().to_vec())?.await?)
    }

    pub async fn decrypt_message(&self, data: Vec<u8>) -> ChatResult<String> {
        let plain = self.context.decrypt_async(data)?.await?;
        Ok(String::from_utf8(plain)?)
    }

    /// Starts a background file encryption; the returned task reports
    /// progress and can be cancelled.
    pub fn encrypt_file(&self, input: PathBuf, output: PathBuf) -> ChatResult<CipherTask<()>> {
        Ok(self.context.encrypt_file_async(input, output)?)
    }

    pub fn decrypt_file(&self, input: PathBuf, output: PathBuf) -> ChatResult<CipherTask<()>> {
        Ok(self.context.decrypt_file_async(input, output)?)
    }
}
