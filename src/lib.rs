// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

#![allow(unexpected_cfgs)]

//! # Designate Operator - workload synthesis for Designate on Kubernetes
//!
//! This library builds the Kubernetes workloads for the five Designate DNS
//! service roles (API, Central, Mdns, Producer, Worker) from their declarative
//! specifications.
//!
//! ## Overview
//!
//! - Image defaults resolved once from the environment at startup
//! - Admission-time defaulting of role specifications
//! - Deterministic, pure synthesis of role Deployments: service container,
//!   bootstrap init container, volumes, soft anti-affinity and node selection
//!
//! ## Modules
//!
//! - [`crd`] - Custom Resource Definition types for the Designate roles
//! - [`defaults`] - Environment-sourced image defaults
//! - [`deployment`] - Deployment builder for a role
//! - [`init_container`] - Bootstrap init container builder
//! - [`env`] - Environment variable setters and merging
//! - [`render`] - Parse, default and render a role resource document
//!
//! ## Example
//!
//! ```rust
//! use designate_operator::crd::{DesignateProducer, DesignateProducerSpec, DesignateServiceSpec};
//! use designate_operator::defaults::DesignateDefaults;
//! use designate_operator::deployment::build_deployment;
//! use designate_operator::labels::service_labels;
//! use designate_operator::role::Role;
//! use std::collections::BTreeMap;
//!
//! let defaults = DesignateDefaults::from_env();
//!
//! let mut spec = DesignateServiceSpec::default();
//! spec.apply_defaults(Role::Producer, &defaults);
//!
//! let producer = DesignateProducer::new("designate-producer", DesignateProducerSpec { service: spec });
//! let deployment = build_deployment(
//!     &producer,
//!     "abc123",
//!     &service_labels(Role::Producer),
//!     &BTreeMap::new(),
//! );
//! assert!(deployment.spec.is_some());
//! ```

pub mod affinity;
pub mod config_hash;
pub mod constants;
pub mod crd;
pub mod defaults;
pub mod deployment;
pub mod env;
pub mod errors;
pub mod init_container;
pub mod labels;
pub mod network;
pub mod render;
pub mod role;
pub mod volumes;

#[cfg(test)]
mod config_hash_tests;
#[cfg(test)]
mod crd_tests;
#[cfg(test)]
mod env_tests;
#[cfg(test)]
mod init_container_tests;
#[cfg(test)]
mod render_tests;
