// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Network attachment annotations.
//!
//! Extra networks are requested through the Multus `k8s.v1.cni.cncf.io/networks`
//! pod annotation, a JSON list of `{name, namespace}` objects. Callers merge the
//! result into the annotations they hand to the workload builder.

use crate::constants::NETWORKS_ANNOTATION;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct NetworkSelection<'a> {
    name: &'a str,
    namespace: &'a str,
}

/// Builds the networks annotation for `attachments` in `namespace`.
///
/// Returns an empty map when there are no attachments.
#[must_use]
pub fn network_annotations(namespace: &str, attachments: &[String]) -> BTreeMap<String, String> {
    let mut annotations = BTreeMap::new();
    if attachments.is_empty() {
        return annotations;
    }

    let selections: Vec<NetworkSelection<'_>> = attachments
        .iter()
        .map(|name| NetworkSelection {
            name: name.as_str(),
            namespace,
        })
        .collect();

    // Serializing plain string pairs cannot fail.
    let value = serde_json::to_string(&selections).unwrap_or_default();
    annotations.insert(NETWORKS_ANNOTATION.to_string(), value);
    annotations
}
