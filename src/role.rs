// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Designate service roles.
//!
//! Every Designate role shares the same defaulting and synthesis pattern. They
//! differ only in the container image, the on-disk config directory and the
//! component name used in labels and container names.

use crate::constants::{
    DESIGNATE_API_CONTAINER_IMAGE, DESIGNATE_CENTRAL_CONTAINER_IMAGE,
    DESIGNATE_MDNS_CONTAINER_IMAGE, DESIGNATE_PRODUCER_CONTAINER_IMAGE,
    DESIGNATE_WORKER_CONTAINER_IMAGE, ENV_API_IMAGE_URL_DEFAULT, ENV_CENTRAL_IMAGE_URL_DEFAULT,
    ENV_MDNS_IMAGE_URL_DEFAULT, ENV_PRODUCER_IMAGE_URL_DEFAULT, ENV_WORKER_IMAGE_URL_DEFAULT,
    SERVICE_NAME,
};
use crate::errors::RenderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five Designate service variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// REST API endpoint
    Api,
    /// Central coordinator owning the database
    Central,
    /// Mini-DNS server answering zone transfers
    Mdns,
    /// Periodic task producer
    Producer,
    /// Backend worker pushing changes to DNS servers
    Worker,
}

impl Role {
    /// All roles, in a fixed order.
    pub const ALL: [Role; 5] = [
        Role::Api,
        Role::Central,
        Role::Mdns,
        Role::Producer,
        Role::Worker,
    ];

    /// Lowercase role name, e.g. `producer`
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Api => "api",
            Role::Central => "central",
            Role::Mdns => "mdns",
            Role::Producer => "producer",
            Role::Worker => "worker",
        }
    }

    /// Custom resource kind deploying this role, e.g. `DesignateProducer`
    #[must_use]
    pub fn kind(self) -> &'static str {
        match self {
            Role::Api => "DesignateAPI",
            Role::Central => "DesignateCentral",
            Role::Mdns => "DesignateMdns",
            Role::Producer => "DesignateProducer",
            Role::Worker => "DesignateWorker",
        }
    }

    /// `{service}-{role}`, used for container names, labels and the config directory
    #[must_use]
    pub fn component_name(self) -> String {
        format!("{SERVICE_NAME}-{}", self.as_str())
    }

    /// Name of the environment variable overriding this role's default image
    #[must_use]
    pub fn image_env_var(self) -> &'static str {
        match self {
            Role::Api => ENV_API_IMAGE_URL_DEFAULT,
            Role::Central => ENV_CENTRAL_IMAGE_URL_DEFAULT,
            Role::Mdns => ENV_MDNS_IMAGE_URL_DEFAULT,
            Role::Producer => ENV_PRODUCER_IMAGE_URL_DEFAULT,
            Role::Worker => ENV_WORKER_IMAGE_URL_DEFAULT,
        }
    }

    /// Compiled-in image used when the environment does not override it
    #[must_use]
    pub fn fallback_image(self) -> &'static str {
        match self {
            Role::Api => DESIGNATE_API_CONTAINER_IMAGE,
            Role::Central => DESIGNATE_CENTRAL_CONTAINER_IMAGE,
            Role::Mdns => DESIGNATE_MDNS_CONTAINER_IMAGE,
            Role::Producer => DESIGNATE_PRODUCER_CONTAINER_IMAGE,
            Role::Worker => DESIGNATE_WORKER_CONTAINER_IMAGE,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RenderError::UnknownRole {
                role: s.to_string(),
            })
    }
}
