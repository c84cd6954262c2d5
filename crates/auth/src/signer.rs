//! IW1 HMAC-SHA256 request signing.
//!
//! The signing key is derived by chaining HMAC-SHA256 over the signed
//! fields: `"IW1" + secret` keys the first step, and the raw 32-byte
//! output of each step keys the next. A final HMAC over `"iw1_request"`
//! produces the signature. The server re-derives the same chain, so the
//! order and encoding of every step is fixed.

use crate::context::SignatureContext;
use crate::credentials::ApiCredentials;
use crate::error::AuthError;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Scheme name that prefixes the `Authorization` header value.
pub const AUTH_SCHEME: &str = "IW1-HMAC-SHA256";

/// RPC identifier signed when requesting a session token.
pub const GENERATE_TOKEN_METHOD_PATH: &str = "ai.inworld.engine.WorldEngine/GenerateToken";

const KEY_PREFIX: &str = "IW1";
const REQUEST_TERMINATOR: &str = "iw1_request";
const DEFAULT_TLS_PORT_SUFFIX: &str = ":443";

fn hmac_sha256(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

/// Derive the IW1 signature over `params` and return it as lowercase hex.
///
/// `params` must be, in order: timestamp, bare host, method path without
/// leading slash, nonce. Empty parameters are signed as-is; callers that
/// want them rejected go through [`SignatureContext`].
///
/// # Errors
/// Returns `AuthError::EmptyField` if `secret` is empty.
pub fn derive_signature(secret: &str, params: &[&str; 4]) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::EmptyField("secret"));
    }

    let mut key = format!("{}{}", KEY_PREFIX, secret).into_bytes();
    for param in params {
        key = hmac_sha256(&key, param.as_bytes());
    }

    Ok(hex::encode(hmac_sha256(&key, REQUEST_TERMINATOR.as_bytes())))
}

/// Strip a trailing `:443` from `host`. Any other port is kept.
pub fn normalize_host(host: &str) -> &str {
    host.strip_suffix(DEFAULT_TLS_PORT_SUFFIX).unwrap_or(host)
}

/// Strip one leading `/` from `method_path`.
pub fn normalize_method_path(method_path: &str) -> &str {
    method_path.strip_prefix('/').unwrap_or(method_path)
}

/// Build the `Authorization` header value for `context`.
///
/// Format: `IW1-HMAC-SHA256 ApiKey=<key>,DateTime=<ts>,Nonce=<nonce>,Signature=<sig>`.
pub fn build_authorization_header(
    credentials: &ApiCredentials,
    context: &SignatureContext,
) -> Result<String, AuthError> {
    let signature = derive_signature(
        credentials.expose_secret(),
        &[
            context.timestamp(),
            normalize_host(context.host()),
            normalize_method_path(context.method_path()),
            context.nonce(),
        ],
    )?;

    Ok(format!(
        "{} ApiKey={},DateTime={},Nonce={},Signature={}",
        AUTH_SCHEME,
        credentials.api_key(),
        context.timestamp(),
        context.nonce(),
        signature
    ))
}

/// Request signer for authenticated Inworld API calls.
pub struct RequestSigner<'a> {
    credentials: &'a ApiCredentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the given credentials.
    pub fn new(credentials: &'a ApiCredentials) -> Self {
        Self { credentials }
    }

    /// Sign an explicit context and return the header value.
    pub fn authorization_header(&self, context: &SignatureContext) -> Result<String, AuthError> {
        build_authorization_header(self.credentials, context)
    }

    /// Sign a call to `method_path` on `host` with a fresh timestamp and nonce.
    pub fn sign_request(&self, host: &str, method_path: &str) -> Result<String, AuthError> {
        let context = SignatureContext::generate(host, method_path)?;
        self.authorization_header(&context)
    }
}
