//! Session tokens (HS256 JWTs).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::common::MemberId;
use crate::domains::member::models::Member;

pub const SESSION_LIFETIME_HOURS: i64 = 24;

/// What a session token says about its holder.
///
/// The coordinator flag is a snapshot taken at sign-in. Authorization reloads
/// the member on every request and uses the stored role instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: MemberId,
    pub login: String,
    #[serde(rename = "coord")]
    pub is_coordinator: bool,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    pub fn new(secret: &str, issuer: impl Into<String>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.into(),
        }
    }

    /// Sign a token for `member`, valid for [`SESSION_LIFETIME_HOURS`].
    pub fn issue(&self, member: &Member) -> Result<String, JwtError> {
        let issued_at = Utc::now();
        let claims = SessionClaims {
            sub: member.id,
            login: member.login.clone(),
            is_coordinator: member.is_coordinator(),
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::hours(SESSION_LIFETIME_HOURS)).timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Check signature, issuer and expiry.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.issuer.as_str()]);

        decode::<SessionClaims>(token, &self.decoding_key, &validation).map(|data| data.claims)
    }
}
