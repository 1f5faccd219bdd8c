//! Versioned session encoding
//!
//! The stored form wraps the session in an envelope carrying the schema
//! version, so a restore from an incompatible build fails loudly instead of
//! producing a half-populated session.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::session::Session;
use crate::Result;

pub const SESSION_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    session: &'a Session,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    session: serde_json::Value,
}

impl Session {
    /// Encode the session as a versioned JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&EnvelopeRef {
            version: SESSION_SCHEMA_VERSION,
            session: self,
        })?)
    }

    /// Decode a session produced by [`Session::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        let envelope: Envelope = serde_json::from_str(json)?;

        // Check the version before looking at the payload, its shape may differ
        if envelope.version != SESSION_SCHEMA_VERSION {
            return Err(SessionError::UnsupportedVersion {
                found: envelope.version,
                expected: SESSION_SCHEMA_VERSION,
            });
        }

        Ok(serde_json::from_value(envelope.session)?)
    }
}
