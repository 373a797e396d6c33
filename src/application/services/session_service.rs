//! Signed session tokens carrying an ephemeral owner id.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::owner::OwnerId;

type HmacSha256 = Hmac<Sha256>;

/// Issues and verifies the opaque session token stored in the owner cookie.
///
/// A token is `<owner uuid>.<hex HMAC-SHA256 of the uuid>`, keyed by the
/// server-side `signing_secret`. Clients can read their own owner id but cannot
/// mint a token for someone else's without the secret.
pub struct SessionService {
    signing_secret: String,
}

impl SessionService {
    /// Creates a new session service.
    ///
    /// # Arguments
    ///
    /// - `signing_secret` - HMAC key; tokens issued under a different key do not verify
    pub fn new(signing_secret: String) -> Self {
        Self { signing_secret }
    }

    fn sign(&self, payload: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        mac
    }

    /// Builds the session token for `owner`.
    pub fn issue(&self, owner: &OwnerId) -> String {
        let payload = owner.to_string();
        let signature = hex::encode(self.sign(&payload).finalize().into_bytes());
        format!("{payload}.{signature}")
    }

    /// Returns the owner id carried by `token` if its signature is valid.
    ///
    /// Malformed, tampered or foreign tokens yield `None`.
    pub fn verify(&self, token: &str) -> Option<OwnerId> {
        let (payload, signature) = token.split_once('.')?;
        let signature = hex::decode(signature).ok()?;

        self.sign(payload).verify_slice(&signature).ok()?;

        payload.parse().ok()
    }
}
