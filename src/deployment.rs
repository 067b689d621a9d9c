// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Designate workload builder.
//!
//! Builds the Kubernetes `Deployment` for one Designate role from its resolved
//! specification. All functions are pure: they read their inputs, allocate a
//! fresh value and perform no I/O, so they can run concurrently for any number
//! of roles.
//!
//! The pod always has exactly one init container (`initContainers[0]`, the
//! bootstrap container) and exactly one service container (`containers[0]`).
//!
//! # Example
//!
//! ```rust
//! use designate_operator::crd::{DesignateProducer, DesignateProducerSpec, DesignateServiceSpec};
//! use designate_operator::deployment::build_deployment;
//! use designate_operator::labels::service_labels;
//! use designate_operator::role::Role;
//! use std::collections::BTreeMap;
//!
//! let mut spec = DesignateServiceSpec::default();
//! spec.service_template.container_image = "img:1".to_string();
//! let producer = DesignateProducer::new("designate-producer", DesignateProducerSpec { service: spec });
//!
//! let deployment = build_deployment(
//!     &producer,
//!     "abc123",
//!     &service_labels(Role::Producer),
//!     &BTreeMap::new(),
//! );
//! let pod = deployment.spec.unwrap().template.spec.unwrap();
//! assert_eq!(pod.containers[0].name, "designate-producer");
//! ```

use crate::affinity::distribute_pods;
use crate::constants::{
    CUSTOM_SERVICE_CONFIG_FILE_NAME, DATABASE_NAME, DEBUG_COMMAND, DEFAULT_REPLICAS,
    ENV_CONFIG_HASH, ENV_CUSTOM_CONF, ENV_KOLLA_CONFIG_STRATEGY, KIND_DESIGNATE,
    KOLLA_CONFIG_STRATEGY_COPY_ALWAYS, KOLLA_START_COMMAND, LABEL_HOSTNAME, ROOT_UID,
    SHELL_COMMAND,
};
use crate::crd::{DebugMode, DesignateService, DesignateServiceSpec};
use crate::env::{merge_envs, EnvSetter};
use crate::init_container::{build_init_containers, InitContainerDetails};
use crate::labels::COMPONENT_SELECTOR;
use crate::role::Role;
use crate::volumes::{build_init_volume_mounts, build_service_volume_mounts, build_volumes};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, PodSpec, PodTemplateSpec, SecurityContext};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use kube::ResourceExt;
use std::collections::BTreeMap;
use tracing::debug;

/// Arguments passed to the service container's shell.
///
/// In debug mode the container sleeps forever instead of starting the service.
#[must_use]
pub fn service_args(mode: DebugMode) -> Vec<String> {
    let command = match mode {
        DebugMode::Debug => DEBUG_COMMAND,
        DebugMode::Normal => KOLLA_START_COMMAND,
    };
    vec!["-c".to_string(), command.to_string()]
}

/// Name of the `Designate` resource owning `instance`.
///
/// Taken from the owner reference of kind `Designate`; a role resource
/// created on its own owns its volumes itself.
#[must_use]
pub fn owning_designate_name<T: ResourceExt>(instance: &T) -> String {
    instance
        .owner_references()
        .iter()
        .find(|owner| owner.kind == KIND_DESIGNATE)
        .map_or_else(|| instance.name_any(), |owner| owner.name.clone())
}

/// Builds the Deployment for a Designate role resource.
///
/// `config_hash` is embedded verbatim as `CONFIG_HASH` so that any change of
/// the rendered config changes the pod template and rolls the pods. `labels`
/// become the Deployment labels, the selector and the pod labels; `annotations`
/// are set on the pod template as given.
///
/// # Arguments
///
/// * `instance` - Role resource with a fully defaulted spec
/// * `config_hash` - Fingerprint of the rendered config
/// * `labels` - Labels for the Deployment, its selector and its pods
/// * `annotations` - Pod template annotations
///
/// # Returns
///
/// A Kubernetes Deployment ready for apply
#[must_use]
pub fn build_deployment<T: DesignateService>(
    instance: &T,
    config_hash: &str,
    labels: &BTreeMap<String, String>,
    annotations: &BTreeMap<String, String>,
) -> Deployment {
    let role = T::ROLE;
    let spec = instance.service_spec();

    debug!(
        name = %instance.name_any(),
        namespace = ?instance.namespace(),
        role = %role,
        "Building Deployment for Designate role"
    );

    let pod_spec = build_pod_spec(role, &owning_designate_name(instance), spec, config_hash);

    Deployment {
        metadata: ObjectMeta {
            name: Some(instance.name_any()),
            namespace: instance.namespace(),
            labels: Some(labels.clone()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(spec.replicas.unwrap_or(DEFAULT_REPLICAS)),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels.clone()),
                    annotations: Some(annotations.clone()),
                    ..Default::default()
                }),
                spec: Some(pod_spec),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Builds the pod spec for one Designate role.
///
/// # Arguments
///
/// * `role` - Role being deployed
/// * `owner_name` - Name of the owning `Designate` resource, used for volumes
/// * `spec` - The role's resolved specification
/// * `config_hash` - Fingerprint of the rendered config
#[must_use]
pub fn build_pod_spec(
    role: Role,
    owner_name: &str,
    spec: &DesignateServiceSpec,
    config_hash: &str,
) -> PodSpec {
    let template = &spec.service_template;
    let stages = template.debug.stages();

    let mut env_vars = BTreeMap::new();
    env_vars.insert(
        ENV_KOLLA_CONFIG_STRATEGY.to_string(),
        EnvSetter::value(KOLLA_CONFIG_STRATEGY_COPY_ALWAYS),
    );
    env_vars.insert(ENV_CONFIG_HASH.to_string(), EnvSetter::value(config_hash));

    let service_container = Container {
        name: role.component_name(),
        image: Some(template.container_image.clone()),
        command: Some(vec![SHELL_COMMAND.into()]),
        args: Some(service_args(stages.service)),
        security_context: Some(SecurityContext {
            run_as_user: Some(ROOT_UID),
            ..Default::default()
        }),
        env: Some(merge_envs(Vec::new(), &env_vars)),
        volume_mounts: Some(build_service_volume_mounts(&role.component_name())),
        resources: template.resources.clone(),
        ..Default::default()
    };

    let mut init_envs = BTreeMap::new();
    init_envs.insert(
        ENV_CUSTOM_CONF.to_string(),
        EnvSetter::value(CUSTOM_SERVICE_CONFIG_FILE_NAME),
    );

    let init_details = InitContainerDetails {
        container_image: template.container_image.clone(),
        database_host: spec.database_hostname.clone(),
        database_user: spec.template.database_user.clone(),
        database_name: DATABASE_NAME.to_string(),
        osp_secret: spec.template.secret.clone(),
        transport_url_secret: spec.transport_url_secret.clone(),
        db_password_selector: spec.template.password_selectors.database.clone(),
        user_password_selector: spec.template.password_selectors.service.clone(),
        volume_mounts: build_init_volume_mounts(),
        debug: stages.init,
        extra_envs: init_envs,
    };

    // Spread replicas of the same role across nodes when possible.
    let affinity = distribute_pods(COMPONENT_SELECTOR, &[role.component_name()], LABEL_HOSTNAME);

    let node_selector = if template.node_selector.is_empty() {
        None
    } else {
        Some(template.node_selector.clone())
    };

    let service_account_name = if spec.service_account.is_empty() {
        None
    } else {
        Some(spec.service_account.clone())
    };

    PodSpec {
        service_account_name,
        volumes: Some(build_volumes(owner_name)),
        init_containers: Some(build_init_containers(&init_details)),
        containers: vec![service_container],
        affinity: Some(affinity),
        node_selector,
        ..Default::default()
    }
}
