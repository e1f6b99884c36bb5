//! Environment variable management for testing
//!
//! The process environment is shared by every test thread, so tests that
//! read or write variables hold [`env_lock`] for their whole body.

use std::env;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize access to the process environment across tests.
///
/// A test that panicked while holding the lock poisons it; the guard is
/// recovered anyway since every [`EnvVarGuard`] restores its variable on drop.
pub fn env_lock() -> MutexGuard<'static, ()> {
  ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Overrides a single environment variable and restores the original value
/// when dropped
pub struct EnvVarGuard {
  key: String,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Remember the current value of `key`; the variable itself is untouched
  /// until [`set`](Self::set) or [`remove`](Self::remove) is called
  pub fn new(key: &str) -> Self {
    Self {
      key: key.to_string(),
      original: env::var(key).ok(),
    }
  }

  pub fn set(&self, value: &str) {
    // SAFETY: callers hold `env_lock`, so no other test thread touches the
    // environment concurrently.
    unsafe {
      env::set_var(&self.key, value);
    }
  }

  pub fn remove(&self) {
    // SAFETY: see `set`.
    unsafe {
      env::remove_var(&self.key);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      // SAFETY: see `set`.
      Some(value) => unsafe {
        env::set_var(&self.key, value);
      },
      // SAFETY: see `set`.
      None => unsafe {
        env::remove_var(&self.key);
      },
    }
  }
}
