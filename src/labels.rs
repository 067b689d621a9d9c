// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Common label and annotation constants used across all Designate roles.
//!
//! This module defines standard Kubernetes labels and the Designate selector labels
//! so that Deployments, selectors and anti-affinity terms agree with each other.

use crate::constants::SERVICE_NAME;
use crate::role::Role;
use std::collections::BTreeMap;

// ============================================================================
// Kubernetes Standard Labels
// https://kubernetes.io/docs/concepts/overview/working-with-objects/common-labels/
// ============================================================================

/// Standard label for the component name within the architecture
pub const K8S_COMPONENT: &str = "app.kubernetes.io/component";

/// Standard label for the tool being used to manage the operation of an application
pub const K8S_MANAGED_BY: &str = "app.kubernetes.io/managed-by";

/// Standard label for the name of the application
pub const K8S_NAME: &str = "app.kubernetes.io/name";

/// Standard label for the name of a higher-level application this one is part of
pub const K8S_PART_OF: &str = "app.kubernetes.io/part-of";

// ============================================================================
// Designate Selector Labels
// ============================================================================

/// Selector label carrying the logical service name (`designate`)
pub const APP_SELECTOR: &str = "service";

/// Selector label carrying the per-role component name (e.g. `designate-producer`)
pub const COMPONENT_SELECTOR: &str = "component";

// ============================================================================
// Label Values
// ============================================================================

/// Value for `app.kubernetes.io/part-of`
pub const PART_OF_OPENSTACK: &str = "openstack";

/// Value for `app.kubernetes.io/managed-by`
pub const MANAGED_BY_DESIGNATE_OPERATOR: &str = "designate-operator";

/// Builds the standard label set for the pods of one Designate role.
///
/// The `component` label is what the soft anti-affinity term selects on, so two
/// replicas of the same role repel each other while different roles do not.
#[must_use]
pub fn service_labels(role: Role) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert(APP_SELECTOR.into(), SERVICE_NAME.into());
    labels.insert(COMPONENT_SELECTOR.into(), role.component_name());
    labels.insert(K8S_NAME.into(), SERVICE_NAME.into());
    labels.insert(K8S_COMPONENT.into(), role.component_name());
    labels.insert(K8S_MANAGED_BY.into(), MANAGED_BY_DESIGNATE_OPERATOR.into());
    labels.insert(K8S_PART_OF.into(), PART_OF_OPENSTACK.into());
    labels
}
