// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Environment-sourced defaults for Designate role specifications.
//!
//! The operator resolves [`DesignateDefaults`] once at startup and hands the
//! value (usually behind an `Arc`) to whatever performs admission-time
//! defaulting. There is no global: resolving again with an unchanged
//! environment simply yields an equal value.
//!
//! # Example
//!
//! ```rust
//! use designate_operator::defaults::DesignateDefaults;
//! use designate_operator::role::Role;
//!
//! let defaults = DesignateDefaults::from_lookup(|name| {
//!     (name == "DESIGNATE_WORKER_IMAGE_URL_DEFAULT").then(|| "registry.local/worker:1".to_string())
//! });
//! assert_eq!(defaults.image_for(Role::Worker), "registry.local/worker:1");
//! ```

use crate::role::Role;
use tracing::debug;

/// Default container image per Designate role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesignateDefaults {
    pub api_container_image_url: String,
    pub central_container_image_url: String,
    pub mdns_container_image_url: String,
    pub producer_container_image_url: String,
    pub worker_container_image_url: String,
}

impl DesignateDefaults {
    /// Resolves defaults from the process environment.
    ///
    /// Each role reads `DESIGNATE_<ROLE>_IMAGE_URL_DEFAULT`; unset or empty
    /// variables fall back to the compiled-in image.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves defaults through an arbitrary name -> value lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |role: Role| -> String {
            match lookup(role.image_env_var()) {
                Some(value) if !value.is_empty() => {
                    debug!(
                        role = %role,
                        env_var = role.image_env_var(),
                        image = %value,
                        "Using image default from environment"
                    );
                    value
                }
                _ => role.fallback_image().to_string(),
            }
        };

        Self {
            api_container_image_url: resolve(Role::Api),
            central_container_image_url: resolve(Role::Central),
            mdns_container_image_url: resolve(Role::Mdns),
            producer_container_image_url: resolve(Role::Producer),
            worker_container_image_url: resolve(Role::Worker),
        }
    }

    /// Default image for `role`
    #[must_use]
    pub fn image_for(&self, role: Role) -> &str {
        match role {
            Role::Api => &self.api_container_image_url,
            Role::Central => &self.central_container_image_url,
            Role::Mdns => &self.mdns_container_image_url,
            Role::Producer => &self.producer_container_image_url,
            Role::Worker => &self.worker_container_image_url,
        }
    }
}

impl Default for DesignateDefaults {
    /// Compiled-in fall-backs only, ignoring the environment.
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
