// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Bootstrap init container for Designate pods.
//!
//! The init container runs before the service container. It merges rendered
//! config with the custom overlays and wires database and credential details
//! into the config, using the same image as the service.

use crate::constants::{
    ENV_DATABASE_HOST, ENV_DATABASE_NAME, ENV_DATABASE_PASSWORD, ENV_DATABASE_USER,
    ENV_DESIGNATE_PASSWORD, ENV_TRANSPORT_URL, INIT_CONTAINER_COMMAND, INIT_CONTAINER_NAME,
    INIT_DEBUG_COMMAND, ROOT_UID, SHELL_COMMAND, TRANSPORT_URL_SECRET_KEY,
};
use crate::crd::DebugMode;
use crate::env::{merge_envs, EnvSetter};
use k8s_openapi::api::core::v1::{Container, SecurityContext, VolumeMount};
use std::collections::BTreeMap;

/// Everything the bootstrap init container is parameterized with.
#[derive(Clone, Debug, Default)]
pub struct InitContainerDetails {
    pub container_image: String,
    pub database_host: String,
    pub database_user: String,
    pub database_name: String,
    /// Secret holding the database and service passwords
    pub osp_secret: String,
    pub transport_url_secret: String,
    /// Key of the database password inside `osp_secret`
    pub db_password_selector: String,
    /// Key of the service user password inside `osp_secret`
    pub user_password_selector: String,
    pub volume_mounts: Vec<VolumeMount>,
    pub debug: DebugMode,
    /// Merged after the construction-time variables; same-name entries win
    pub extra_envs: BTreeMap<String, EnvSetter>,
}

/// Builds the init containers for a Designate pod.
///
/// Always returns exactly one container. Its environment is computed in a
/// single merge: database and credential wiring first, then `extra_envs`.
#[must_use]
pub fn build_init_containers(details: &InitContainerDetails) -> Vec<Container> {
    let command = if details.debug.is_debug() {
        format!("{INIT_CONTAINER_COMMAND} && {INIT_DEBUG_COMMAND}")
    } else {
        INIT_CONTAINER_COMMAND.to_string()
    };

    let mut env_vars = BTreeMap::new();
    env_vars.insert(
        ENV_DATABASE_HOST.to_string(),
        EnvSetter::value(&details.database_host),
    );
    env_vars.insert(
        ENV_DATABASE_NAME.to_string(),
        EnvSetter::value(&details.database_name),
    );
    env_vars.insert(
        ENV_DATABASE_USER.to_string(),
        EnvSetter::value(&details.database_user),
    );
    env_vars.insert(
        ENV_DATABASE_PASSWORD.to_string(),
        EnvSetter::secret_key_ref(&details.osp_secret, &details.db_password_selector),
    );
    env_vars.insert(
        ENV_DESIGNATE_PASSWORD.to_string(),
        EnvSetter::secret_key_ref(&details.osp_secret, &details.user_password_selector),
    );
    env_vars.insert(
        ENV_TRANSPORT_URL.to_string(),
        EnvSetter::secret_key_ref(&details.transport_url_secret, TRANSPORT_URL_SECRET_KEY),
    );
    env_vars.extend(
        details
            .extra_envs
            .iter()
            .map(|(name, setter)| (name.clone(), setter.clone())),
    );

    vec![Container {
        name: INIT_CONTAINER_NAME.into(),
        image: Some(details.container_image.clone()),
        command: Some(vec![SHELL_COMMAND.into()]),
        args: Some(vec!["-c".into(), command]),
        security_context: Some(SecurityContext {
            run_as_user: Some(ROOT_UID),
            ..Default::default()
        }),
        env: Some(merge_envs(Vec::new(), &env_vars)),
        volume_mounts: Some(details.volume_mounts.clone()),
        ..Default::default()
    }]
}
