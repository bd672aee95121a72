//! Ephemeral per-upload resume profiles, keyed by session id.
//!
//! Nothing is persisted: profiles vanish on process restart and are evicted
//! once older than the configured TTL.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::contact::ContactInfo;

/// Request header carrying the id returned by the upload endpoint.
pub const SESSION_HEADER: &str = "x-session-id";

/// Everything derived from one resume upload.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeProfile {
    pub text: String,
    pub skills: Vec<String>,
    pub contact_info: ContactInfo,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct SessionStore {
    ttl: Duration,
    profiles: Arc<RwLock<HashMap<Uuid, ResumeProfile>>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Stores a profile under a fresh session id, sweeping expired entries first.
    pub async fn create(&self, profile: ResumeProfile) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let mut profiles = self.profiles.write().await;
        let before = profiles.len();
        profiles.retain(|_, p| !self.is_expired(p, now));
        if profiles.len() < before {
            debug!("Evicted {} expired sessions", before - profiles.len());
        }
        profiles.insert(id, profile);
        id
    }

    /// Returns the live profile for `id`; an expired one is evicted and treated as absent.
    pub async fn get(&self, id: Uuid) -> Option<ResumeProfile> {
        let now = Utc::now();
        {
            let profiles = self.profiles.read().await;
            match profiles.get(&id) {
                None => return None,
                Some(p) if !self.is_expired(p, now) => return Some(p.clone()),
                Some(_) => {}
            }
        }
        self.profiles.write().await.remove(&id);
        None
    }

    /// Resolves the caller's profile from the session header.
    /// A missing, malformed, unknown or expired id all read as an expired session.
    pub async fn require(&self, headers: &HeaderMap) -> Result<ResumeProfile, AppError> {
        let id = headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v.trim()).ok())
            .ok_or(AppError::SessionExpired)?;
        self.get(id).await.ok_or(AppError::SessionExpired)
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    fn is_expired(&self, profile: &ResumeProfile, now: DateTime<Utc>) -> bool {
        now - profile.uploaded_at >= self.ttl
    }
}
