// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Custom Resource Definitions (CRDs) for the Designate service roles.
//!
//! This module defines the declarative specification every Designate role is
//! built from, plus one Kubernetes custom resource per role.
//!
//! # Resource Types
//!
//! - [`DesignateAPI`] - REST API endpoint
//! - [`DesignateCentral`] - Central coordinator
//! - [`DesignateMdns`] - Mini-DNS zone transfer server
//! - [`DesignateProducer`] - Periodic task producer
//! - [`DesignateWorker`] - Backend worker
//!
//! All five wrap the same [`DesignateServiceSpec`], which combines the shared
//! [`DesignateTemplate`] (users, credential Secret, password selectors) with the
//! per-role [`DesignateServiceTemplate`] (image, node selector, debug flags,
//! custom config, resources, network attachments).
//!
//! # Example
//!
//! ```rust,no_run
//! use designate_operator::crd::{DesignateProducer, DesignateProducerSpec, DesignateServiceSpec};
//!
//! let mut spec = DesignateServiceSpec::default();
//! spec.service_template.container_image = "img:1".to_string();
//! spec.database_hostname = "openstack.openstack.svc".to_string();
//!
//! let producer = DesignateProducer::new("designate-producer", DesignateProducerSpec { service: spec });
//! ```

use crate::constants::{
    DEFAULT_DATABASE_PASSWORD_SELECTOR, DEFAULT_REPLICAS, DEFAULT_SERVICE_PASSWORD_SELECTOR,
    DEFAULT_SERVICE_USER,
};
use crate::defaults::DesignateDefaults;
use crate::role::Role;
use k8s_openapi::api::core::v1::ResourceRequirements;
use kube::{CustomResource, ResourceExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_service_user() -> String {
    DEFAULT_SERVICE_USER.to_string()
}

fn default_database_selector() -> String {
    DEFAULT_DATABASE_PASSWORD_SELECTOR.to_string()
}

fn default_service_selector() -> String {
    DEFAULT_SERVICE_PASSWORD_SELECTOR.to_string()
}

/// Identifies which keys of the credential Secret hold the database and
/// service user passwords.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordSelector {
    /// Secret key holding the database user password.
    #[serde(default = "default_database_selector")]
    pub database: String,

    /// Secret key holding the service user password.
    #[serde(default = "default_service_selector")]
    pub service: String,
}

impl Default for PasswordSelector {
    fn default() -> Self {
        Self {
            database: default_database_selector(),
            service: default_service_selector(),
        }
    }
}

/// Common input parameters shared by all Designate roles.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DesignateTemplate {
    /// Username the service registers with in keystone.
    #[serde(default = "default_service_user")]
    pub service_user: String,

    /// Username used for the designate database.
    #[serde(default = "default_service_user")]
    pub database_user: String,

    /// Secret containing the database and service passwords.
    #[serde(default)]
    pub secret: String,

    /// Selectors identifying the passwords inside `secret`.
    #[serde(default)]
    pub password_selectors: PasswordSelector,
}

impl Default for DesignateTemplate {
    fn default() -> Self {
        Self {
            service_user: default_service_user(),
            database_user: default_service_user(),
            secret: String::new(),
            password_selectors: PasswordSelector::default(),
        }
    }
}

impl DesignateTemplate {
    /// Fills empty user names and password selectors with the fixed defaults.
    ///
    /// Running it again on an already defaulted template changes nothing.
    pub fn apply_defaults(&mut self) {
        if self.service_user.is_empty() {
            self.service_user = default_service_user();
        }
        if self.database_user.is_empty() {
            self.database_user = default_service_user();
        }
        if self.password_selectors.database.is_empty() {
            self.password_selectors.database = default_database_selector();
        }
        if self.password_selectors.service.is_empty() {
            self.password_selectors.service = default_service_selector();
        }
    }
}

/// Whether a deployment stage runs normally or is held for manual inspection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DebugMode {
    #[default]
    Normal,
    Debug,
}

impl DebugMode {
    #[must_use]
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            DebugMode::Debug
        } else {
            DebugMode::Normal
        }
    }

    #[must_use]
    pub fn is_debug(self) -> bool {
        self == DebugMode::Debug
    }
}

/// Debug mode of the two independently toggled stages of a role's pod.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebugStages {
    /// Bootstrap init container
    pub init: DebugMode,
    /// Service container
    pub service: DebugMode,
}

/// Debug switches for the stages of a Designate service deployment.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DesignateServiceDebug {
    /// Hold the init container until `/tmp/stop-init-container` is removed.
    #[serde(default)]
    pub init_container: bool,

    /// Start the service container with `sleep infinity` instead of the service.
    #[serde(default)]
    pub service: bool,
}

impl DesignateServiceDebug {
    #[must_use]
    pub fn stages(&self) -> DebugStages {
        DebugStages {
            init: DebugMode::from_flag(self.init_container),
            service: DebugMode::from_flag(self.service),
        }
    }
}

/// Input parameters that can be set for a given Designate role.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesignateServiceTemplate {
    /// Container image URL. Set to the environment default when empty.
    #[serde(default)]
    pub container_image: String,

    /// Restricts the role's pods to nodes carrying these labels.
    ///
    /// An empty map places no constraint.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub node_selector: BTreeMap<String, String>,

    /// Debug switches for the init and service stages.
    #[serde(default)]
    pub debug: DesignateServiceDebug,

    /// Raw config overlay added to `/etc/designate/designate.conf.d` as `custom.conf`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub custom_service_config: String,

    /// Secrets whose content is added to `/etc/designate/designate.conf.d`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_service_config_secrets: Vec<String>,

    /// Per-file overrides for default config files such as `policy.json`.
    ///
    /// Carried for schema compatibility; nothing consumes it yet.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default_config_overwrite: BTreeMap<String, String>,

    /// Compute resources (requests/limits) for the service container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,

    /// `NetworkAttachmentDefinition` names the pods attach to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_attachments: Vec<String>,
}

impl DesignateServiceTemplate {
    /// Fills an empty container image with the role's resolved default.
    pub fn apply_defaults(&mut self, role: Role, defaults: &DesignateDefaults) {
        if self.container_image.is_empty() {
            self.container_image = defaults.image_for(role).to_string();
        }
    }
}

/// Full specification of one Designate role, as consumed by the workload builder.
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesignateServiceSpec {
    #[serde(flatten)]
    pub template: DesignateTemplate,

    #[serde(flatten)]
    pub service_template: DesignateServiceTemplate,

    /// Number of pod replicas. Defaults to 1.
    #[serde(default)]
    #[schemars(range(min = 0, max = 32))]
    pub replicas: Option<i32>,

    /// Service account the pods run as.
    #[serde(default)]
    pub service_account: String,

    /// Hostname of the database the init container syncs against.
    #[serde(default)]
    pub database_hostname: String,

    /// Secret holding the message transport URL.
    #[serde(default, rename = "transportURLSecret")]
    pub transport_url_secret: String,
}

impl DesignateServiceSpec {
    /// Admission-time defaulting: fills every empty field that has a default.
    pub fn apply_defaults(&mut self, role: Role, defaults: &DesignateDefaults) {
        self.template.apply_defaults();
        self.service_template.apply_defaults(role, defaults);
        if self.replicas.is_none() {
            self.replicas = Some(DEFAULT_REPLICAS);
        }
    }
}

/// A Designate role resource the workload builder can render.
pub trait DesignateService: ResourceExt {
    /// Role this resource kind deploys
    const ROLE: Role;

    /// The role's specification
    fn service_spec(&self) -> &DesignateServiceSpec;

    /// Mutable access for admission-time defaulting
    fn service_spec_mut(&mut self) -> &mut DesignateServiceSpec;
}

macro_rules! impl_designate_service {
    ($kind:ident, $role:expr) => {
        impl DesignateService for $kind {
            const ROLE: Role = $role;

            fn service_spec(&self) -> &DesignateServiceSpec {
                &self.spec.service
            }

            fn service_spec_mut(&mut self) -> &mut DesignateServiceSpec {
                &mut self.spec.service
            }
        }
    };
}

/// `DesignateAPI` deploys the Designate REST API.
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "designate.openstack.org",
    version = "v1beta1",
    kind = "DesignateAPI",
    namespaced,
    doc = "DesignateAPI deploys the Designate REST API service."
)]
pub struct DesignateAPISpec {
    #[serde(flatten)]
    pub service: DesignateServiceSpec,
}

/// `DesignateCentral` deploys the Designate central coordinator.
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "designate.openstack.org",
    version = "v1beta1",
    kind = "DesignateCentral",
    namespaced,
    doc = "DesignateCentral deploys the Designate central service, which owns the database."
)]
pub struct DesignateCentralSpec {
    #[serde(flatten)]
    pub service: DesignateServiceSpec,
}

/// `DesignateMdns` deploys the Designate mini-DNS server.
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "designate.openstack.org",
    version = "v1beta1",
    kind = "DesignateMdns",
    namespaced,
    doc = "DesignateMdns deploys the Designate mini-DNS server that serves zone transfers to backends."
)]
pub struct DesignateMdnsSpec {
    #[serde(flatten)]
    pub service: DesignateServiceSpec,
}

/// `DesignateProducer` deploys the Designate periodic task producer.
///
/// # Example
///
/// ```yaml
/// apiVersion: designate.openstack.org/v1beta1
/// kind: DesignateProducer
/// metadata:
///   name: designate-producer
///   namespace: openstack
/// spec:
///   containerImage: quay.io/podified-antelope-centos9/openstack-designate-producer:current-podified
///   databaseHostname: openstack.openstack.svc
///   secret: osp-secret
///   transportURLSecret: rabbitmq-transport-url
///   replicas: 2
/// ```
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "designate.openstack.org",
    version = "v1beta1",
    kind = "DesignateProducer",
    namespaced,
    doc = "DesignateProducer deploys the Designate producer service, which runs periodic tasks."
)]
pub struct DesignateProducerSpec {
    #[serde(flatten)]
    pub service: DesignateServiceSpec,
}

/// `DesignateWorker` deploys the Designate backend worker.
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "designate.openstack.org",
    version = "v1beta1",
    kind = "DesignateWorker",
    namespaced,
    doc = "DesignateWorker deploys the Designate worker service, which pushes zone changes to DNS backends."
)]
pub struct DesignateWorkerSpec {
    #[serde(flatten)]
    pub service: DesignateServiceSpec,
}

impl_designate_service!(DesignateAPI, Role::Api);
impl_designate_service!(DesignateCentral, Role::Central);
impl_designate_service!(DesignateMdns, Role::Mdns);
impl_designate_service!(DesignateProducer, Role::Producer);
impl_designate_service!(DesignateWorker, Role::Worker);
