// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the Designate workload builders.
//!
//! This module contains all string and numeric constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// API Constants
// ============================================================================

/// Kind of the top-level resource that owns every Designate role
pub const KIND_DESIGNATE: &str = "Designate";

/// Logical service name shared by every Designate role
pub const SERVICE_NAME: &str = "designate";

/// Database name used by all Designate roles
pub const DATABASE_NAME: &str = "designate";

// ============================================================================
// Container Image Fall-back Defaults
// ============================================================================

/// Fall-back container image for `DesignateAPI`
pub const DESIGNATE_API_CONTAINER_IMAGE: &str =
    "quay.io/podified-antelope-centos9/openstack-designate-api:current-podified";

/// Fall-back container image for `DesignateCentral`
pub const DESIGNATE_CENTRAL_CONTAINER_IMAGE: &str =
    "quay.io/podified-antelope-centos9/openstack-designate-central:current-podified";

/// Fall-back container image for `DesignateMdns`
pub const DESIGNATE_MDNS_CONTAINER_IMAGE: &str =
    "quay.io/podified-antelope-centos9/openstack-designate-mdns:current-podified";

/// Fall-back container image for `DesignateProducer`
pub const DESIGNATE_PRODUCER_CONTAINER_IMAGE: &str =
    "quay.io/podified-antelope-centos9/openstack-designate-producer:current-podified";

/// Fall-back container image for `DesignateWorker`
pub const DESIGNATE_WORKER_CONTAINER_IMAGE: &str =
    "quay.io/podified-antelope-centos9/openstack-designate-worker:current-podified";

// ============================================================================
// Environment Variable Names (image defaults)
// ============================================================================

pub const ENV_API_IMAGE_URL_DEFAULT: &str = "DESIGNATE_API_IMAGE_URL_DEFAULT";
pub const ENV_CENTRAL_IMAGE_URL_DEFAULT: &str = "DESIGNATE_CENTRAL_IMAGE_URL_DEFAULT";
pub const ENV_MDNS_IMAGE_URL_DEFAULT: &str = "DESIGNATE_MDNS_IMAGE_URL_DEFAULT";
pub const ENV_PRODUCER_IMAGE_URL_DEFAULT: &str = "DESIGNATE_PRODUCER_IMAGE_URL_DEFAULT";
pub const ENV_WORKER_IMAGE_URL_DEFAULT: &str = "DESIGNATE_WORKER_IMAGE_URL_DEFAULT";

// ============================================================================
// Template Defaults
// ============================================================================

/// Default service and database user name
pub const DEFAULT_SERVICE_USER: &str = "designate";

/// Default Secret key holding the database password
pub const DEFAULT_DATABASE_PASSWORD_SELECTOR: &str = "DesignateDatabasePassword";

/// Default Secret key holding the service user password
pub const DEFAULT_SERVICE_PASSWORD_SELECTOR: &str = "DesignatePassword";

/// Default replica count for every role
pub const DEFAULT_REPLICAS: i32 = 1;

// ============================================================================
// Container Commands
// ============================================================================

/// Shell used as the command vehicle for every container
pub const SHELL_COMMAND: &str = "/bin/bash";

/// Copies rendered config into place and starts the service process
pub const KOLLA_START_COMMAND: &str =
    "/usr/local/bin/kolla_set_configs && /usr/local/bin/kolla_start";

/// Keeps a debug container alive without starting the service
pub const DEBUG_COMMAND: &str = "/bin/sleep infinity";

/// Bootstrap script run by the init container
pub const INIT_CONTAINER_COMMAND: &str = "/usr/local/bin/container-scripts/init.sh";

/// Holds the init container open until `/tmp/stop-init-container` is removed
pub const INIT_DEBUG_COMMAND: &str =
    "touch /tmp/stop-init-container && while [ -f /tmp/stop-init-container ]; do sleep 5; done";

/// Name of the bootstrap init container
pub const INIT_CONTAINER_NAME: &str = "init";

// ============================================================================
// Environment Variables Set On Containers
// ============================================================================

pub const ENV_KOLLA_CONFIG_STRATEGY: &str = "KOLLA_CONFIG_STRATEGY";

/// Always copy rendered config, never merge it with what is in the image
pub const KOLLA_CONFIG_STRATEGY_COPY_ALWAYS: &str = "COPY_ALWAYS";

pub const ENV_CONFIG_HASH: &str = "CONFIG_HASH";
pub const ENV_DATABASE_HOST: &str = "DatabaseHost";
pub const ENV_DATABASE_NAME: &str = "DatabaseName";
pub const ENV_DATABASE_USER: &str = "DatabaseUser";
pub const ENV_DATABASE_PASSWORD: &str = "DatabasePassword";
pub const ENV_DESIGNATE_PASSWORD: &str = "DesignatePassword";
pub const ENV_TRANSPORT_URL: &str = "TransportURL";
pub const ENV_CUSTOM_CONF: &str = "CustomConf";

/// Key inside the transport URL Secret
pub const TRANSPORT_URL_SECRET_KEY: &str = "transport_url";

/// File name the custom service config overlay is rendered to
pub const CUSTOM_SERVICE_CONFIG_FILE_NAME: &str = "custom.conf";

// ============================================================================
// Security
// ============================================================================

/// kolla start scripts fix file ownership as root before dropping privileges
pub const ROOT_UID: i64 = 0;

// ============================================================================
// Scheduling
// ============================================================================

/// Node label used as the anti-affinity topology key
pub const LABEL_HOSTNAME: &str = "kubernetes.io/hostname";

/// Weight of the preferred anti-affinity term
pub const ANTI_AFFINITY_WEIGHT: i32 = 1;

// ============================================================================
// Volumes
// ============================================================================

/// Mode applied to the mounted container scripts
pub const SCRIPTS_DEFAULT_MODE: i32 = 0o755;

pub const VOLUME_SCRIPTS: &str = "scripts";
pub const VOLUME_CONFIG_DATA: &str = "config-data";
pub const VOLUME_CONFIG_DATA_MERGED: &str = "config-data-merged";

pub const SCRIPTS_MOUNT_PATH: &str = "/usr/local/bin/container-scripts";
pub const CONFIG_DATA_MOUNT_PATH: &str = "/var/lib/config-data/default";
pub const CONFIG_DATA_MERGED_MOUNT_PATH: &str = "/var/lib/config-data/merged";
pub const KOLLA_CONFIG_MOUNT_PATH: &str = "/var/lib/kolla/config_files/config.json";

// ============================================================================
// Annotations
// ============================================================================

/// Multus annotation listing the extra networks a pod attaches to
pub const NETWORKS_ANNOTATION: &str = "k8s.v1.cni.cncf.io/networks";
