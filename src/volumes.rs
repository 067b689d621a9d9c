// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Volumes and volume mounts shared by every Designate role.
//!
//! The pod volume set depends only on the owning Designate resource name:
//! - `scripts` - `ConfigMap` `{owner}-scripts` with the bootstrap scripts
//! - `config-data` - `ConfigMap` `{owner}-config-data` with rendered config
//! - `config-data-merged` - `EmptyDir` the init container merges config into
//!
//! The init container sees all three. The service container sees the scripts,
//! the merged config and its role's kolla `config.json`.

use crate::constants::{
    CONFIG_DATA_MERGED_MOUNT_PATH, CONFIG_DATA_MOUNT_PATH, KOLLA_CONFIG_MOUNT_PATH,
    SCRIPTS_DEFAULT_MODE, SCRIPTS_MOUNT_PATH, VOLUME_CONFIG_DATA, VOLUME_CONFIG_DATA_MERGED,
    VOLUME_SCRIPTS,
};
use k8s_openapi::api::core::v1::{
    ConfigMapVolumeSource, EmptyDirVolumeSource, Volume, VolumeMount,
};

/// Builds the pod volumes for a Designate deployment owned by `owner_name`.
#[must_use]
pub fn build_volumes(owner_name: &str) -> Vec<Volume> {
    vec![
        Volume {
            name: VOLUME_SCRIPTS.into(),
            config_map: Some(ConfigMapVolumeSource {
                name: format!("{owner_name}-scripts"),
                default_mode: Some(SCRIPTS_DEFAULT_MODE),
                ..Default::default()
            }),
            ..Default::default()
        },
        Volume {
            name: VOLUME_CONFIG_DATA.into(),
            config_map: Some(ConfigMapVolumeSource {
                name: format!("{owner_name}-config-data"),
                ..Default::default()
            }),
            ..Default::default()
        },
        Volume {
            name: VOLUME_CONFIG_DATA_MERGED.into(),
            empty_dir: Some(EmptyDirVolumeSource {
                medium: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        },
    ]
}

/// Volume mounts for the bootstrap init container
#[must_use]
pub fn build_init_volume_mounts() -> Vec<VolumeMount> {
    vec![
        VolumeMount {
            name: VOLUME_SCRIPTS.into(),
            mount_path: SCRIPTS_MOUNT_PATH.into(),
            read_only: Some(true),
            ..Default::default()
        },
        VolumeMount {
            name: VOLUME_CONFIG_DATA.into(),
            mount_path: CONFIG_DATA_MOUNT_PATH.into(),
            read_only: Some(true),
            ..Default::default()
        },
        VolumeMount {
            name: VOLUME_CONFIG_DATA_MERGED.into(),
            mount_path: CONFIG_DATA_MERGED_MOUNT_PATH.into(),
            ..Default::default()
        },
    ]
}

/// Volume mounts for a role's service container.
///
/// `config_dir` selects the role's kolla config file inside the merged config,
/// e.g. `designate-producer` mounts `designate-producer-config.json`.
#[must_use]
pub fn build_service_volume_mounts(config_dir: &str) -> Vec<VolumeMount> {
    vec![
        VolumeMount {
            name: VOLUME_SCRIPTS.into(),
            mount_path: SCRIPTS_MOUNT_PATH.into(),
            read_only: Some(true),
            ..Default::default()
        },
        VolumeMount {
            name: VOLUME_CONFIG_DATA_MERGED.into(),
            mount_path: CONFIG_DATA_MERGED_MOUNT_PATH.into(),
            ..Default::default()
        },
        VolumeMount {
            name: VOLUME_CONFIG_DATA_MERGED.into(),
            mount_path: KOLLA_CONFIG_MOUNT_PATH.into(),
            sub_path: Some(format!("{config_dir}-config.json")),
            read_only: Some(true),
            ..Default::default()
        },
    ]
}
