// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for the render boundary.
//!
//! Defaulting and synthesis are total and never fail. Errors only arise where
//! user input enters the process: role names and spec documents read from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a role spec document for rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Role name does not match any Designate role
    #[error(
        "Unknown Designate role '{role}' (expected one of: api, central, mdns, producer, worker)"
    )]
    UnknownRole {
        /// The role string that was supplied
        role: String,
    },

    /// Spec file could not be read
    #[error("Failed to read spec file {}: {source}", .path.display())]
    ReadSpec {
        /// Path of the spec file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Spec document is not valid YAML for the role kind
    #[error("Failed to parse {kind} spec: {source}")]
    ParseSpec {
        /// Kind that was expected, e.g. `DesignateProducer`
        kind: String,
        /// Underlying YAML error
        #[source]
        source: serde_yaml::Error,
    },

    /// Rendered Deployment could not be serialized
    #[error("Failed to serialize Deployment: {reason}")]
    Serialize {
        /// Serializer error message
        reason: String,
    },
}
