//!
//! Test doubles for exercising registry delegation. Compiled only with the
//! `test-utils` feature.

use std::sync::{Mutex, PoisonError};

use crate::error::RegistryError;
use crate::registry::RolesRegistry;
use crate::types::Grant;

/// One delegated registry call, as observed by [`RecordingRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryCall {
    AddCap {
        role: String,
        cap: String,
        grant: Grant,
    },
    RemoveCap {
        role: String,
        cap: String,
    },
}

/// Registry double that accepts every delegation and records it for later
/// assertion.
#[derive(Debug, Default)]
pub struct RecordingRegistry {
    calls: Mutex<Vec<RegistryCall>>,
}

impl RecordingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The delegations observed so far, in call order.
    pub fn calls(&self) -> Vec<RegistryCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: RegistryCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl RolesRegistry for RecordingRegistry {
    fn add_cap(&self, role_name: &str, cap: &str, grant: Grant) -> Result<(), RegistryError> {
        self.record(RegistryCall::AddCap {
            role: role_name.to_string(),
            cap: cap.to_string(),
            grant,
        });
        Ok(())
    }

    fn remove_cap(&self, role_name: &str, cap: &str) -> Result<(), RegistryError> {
        self.record(RegistryCall::RemoveCap {
            role: role_name.to_string(),
            cap: cap.to_string(),
        });
        Ok(())
    }
}

/// Registry double that refuses every delegation with a storage error.
/// Useful for asserting that a failed delegation leaves the local map
/// untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingRegistry;

impl FailingRegistry {
    /// The error every call returns.
    pub fn error() -> RegistryError {
        RegistryError::Storage("registry unavailable".to_string())
    }
}

impl RolesRegistry for FailingRegistry {
    fn add_cap(&self, _role_name: &str, _cap: &str, _grant: Grant) -> Result<(), RegistryError> {
        Err(Self::error())
    }

    fn remove_cap(&self, _role_name: &str, _cap: &str) -> Result<(), RegistryError> {
        Err(Self::error())
    }
}
