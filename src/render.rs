// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Render a Deployment from a role resource document.
//!
//! This is the boundary where user input enters: a YAML document for one of the
//! Designate role kinds is parsed, defaulted the way admission would default it,
//! and handed to the workload builder together with the standard labels and the
//! network attachment annotations.

use crate::config_hash::compute_config_hash;
use crate::crd::{
    DesignateAPI, DesignateCentral, DesignateMdns, DesignateProducer, DesignateService,
    DesignateWorker,
};
use crate::defaults::DesignateDefaults;
use crate::deployment::build_deployment;
use crate::errors::RenderError;
use crate::labels::service_labels;
use crate::network::network_annotations;
use crate::role::Role;
use k8s_openapi::api::apps::v1::Deployment;
use kube::ResourceExt;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Serialization format of rendered output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unsupported output format '{other}'")),
        }
    }
}

/// Reads `path` and renders the Deployment for `role`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as the role's kind.
pub fn render_file(
    role: Role,
    path: &Path,
    config_hash: Option<&str>,
    defaults: &DesignateDefaults,
) -> Result<Deployment, RenderError> {
    let document = std::fs::read_to_string(path).map_err(|source| RenderError::ReadSpec {
        path: path.to_path_buf(),
        source,
    })?;
    render_document(role, &document, config_hash, defaults)
}

/// Renders the Deployment for `role` from a YAML document.
///
/// When `config_hash` is `None` the hash is computed from the defaulted spec.
///
/// # Errors
///
/// Returns an error if the document does not parse as the role's kind.
pub fn render_document(
    role: Role,
    document: &str,
    config_hash: Option<&str>,
    defaults: &DesignateDefaults,
) -> Result<Deployment, RenderError> {
    match role {
        Role::Api => render_as::<DesignateAPI>(document, config_hash, defaults),
        Role::Central => render_as::<DesignateCentral>(document, config_hash, defaults),
        Role::Mdns => render_as::<DesignateMdns>(document, config_hash, defaults),
        Role::Producer => render_as::<DesignateProducer>(document, config_hash, defaults),
        Role::Worker => render_as::<DesignateWorker>(document, config_hash, defaults),
    }
}

fn render_as<T>(
    document: &str,
    config_hash: Option<&str>,
    defaults: &DesignateDefaults,
) -> Result<Deployment, RenderError>
where
    T: DesignateService + DeserializeOwned,
{
    let role = T::ROLE;
    let mut instance: T =
        serde_yaml::from_str(document).map_err(|source| RenderError::ParseSpec {
            kind: role.kind().to_string(),
            source,
        })?;

    instance.service_spec_mut().apply_defaults(role, defaults);

    let config_hash = config_hash.map_or_else(
        || compute_config_hash(instance.service_spec()),
        str::to_string,
    );
    debug!(role = %role, config_hash = %config_hash, "Resolved config hash");

    let labels = service_labels(role);
    let annotations = network_annotations(
        &instance.namespace().unwrap_or_default(),
        &instance.service_spec().service_template.network_attachments,
    );

    let deployment = build_deployment(&instance, &config_hash, &labels, &annotations);
    info!(
        role = %role,
        name = %instance.name_any(),
        "Rendered Designate Deployment"
    );
    Ok(deployment)
}

/// Serializes a rendered Deployment.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_output(deployment: &Deployment, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(deployment).map_err(|e| RenderError::Serialize {
                reason: e.to_string(),
            })
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(deployment).map_err(|e| RenderError::Serialize {
                reason: e.to_string(),
            })
        }
    }
}
