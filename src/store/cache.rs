//! Minimal key/value cache facade
//!
//! A cache for remote-fetched ciphertext, never for decoded key material.
//! Only single-key operations are supported; the batch operations fail
//! loudly instead of degrading to partial results.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Cache facade errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CacheError {
    #[error("Batch operation {operation} is not supported")]
    BatchUnsupported { operation: &'static str },

    #[error("Cache backend failure: {message}")]
    Backend { message: String },
}

/// Key/value cache surface with TTL-aware writes.
pub trait KeyValueCache {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store a value; `ttl` of `None` means the entry never expires.
    fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<(), CacheError>;

    /// Remove a value, reporting whether it was present.
    fn delete(&self, key: &str) -> Result<bool, CacheError>;

    fn has(&self, key: &str) -> Result<bool, CacheError>;

    fn clear(&self) -> Result<(), CacheError>;

    fn get_many(&self, _keys: &[&str]) -> Result<Vec<Option<Vec<u8>>>, CacheError> {
        Err(CacheError::BatchUnsupported {
            operation: "get_many",
        })
    }

    fn set_many(
        &self,
        _entries: &[(&str, &[u8])],
        _ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        Err(CacheError::BatchUnsupported {
            operation: "set_many",
        })
    }

    fn delete_many(&self, _keys: &[&str]) -> Result<(), CacheError> {
        Err(CacheError::BatchUnsupported {
            operation: "delete_many",
        })
    }
}

struct CacheSlot {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl CacheSlot {
    fn is_expired(&self) -> bool {
        self.expires_at.map_or(false, |at| at <= Instant::now())
    }
}

/// In-process cache with lazy expiry: entries past their TTL are dropped on
/// the next read that touches them.
#[derive(Default)]
pub struct MemoryCache {
    slots: Mutex<HashMap<String, CacheSlot>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheSlot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut slots = self.lock();
        let expired = slots.get(key).map_or(false, CacheSlot::is_expired);
        if expired {
            slots.remove(key);
            return Ok(None);
        }

        Ok(slots.get(key).map(|slot| slot.value.clone()))
    }

    fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<(), CacheError> {
        let slot = CacheSlot {
            value: value.to_vec(),
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.lock().insert(key.to_owned(), slot);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.lock().remove(key).is_some())
    }

    fn has(&self, key: &str) -> Result<bool, CacheError> {
        let mut slots = self.lock();
        match slots.get(key) {
            Some(slot) if slot.is_expired() => {
                slots.remove(key);
                Ok(false)
            }
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }

    fn clear(&self) -> Result<(), CacheError> {
        self.lock().clear();
        Ok(())
    }
}
