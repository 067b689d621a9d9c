// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Container environment variable setters and merging.
//!
//! Environment variables are collected as a map from name to [`EnvSetter`] and
//! merged into a base list with [`merge_envs`]. Merging is keyed by name and the
//! last writer wins, so the result never contains duplicate names.

use k8s_openapi::api::core::v1::{EnvVar, EnvVarSource, ObjectFieldSelector, SecretKeySelector};
use std::collections::BTreeMap;

/// Where an environment variable takes its value from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnvSetter {
    /// Literal value
    Value(String),
    /// Key of a Secret in the pod's namespace
    SecretKeyRef { name: String, key: String },
    /// Field of the pod itself, e.g. `metadata.namespace`
    FieldRef(String),
}

impl EnvSetter {
    pub fn value(value: impl Into<String>) -> Self {
        EnvSetter::Value(value.into())
    }

    pub fn secret_key_ref(name: impl Into<String>, key: impl Into<String>) -> Self {
        EnvSetter::SecretKeyRef {
            name: name.into(),
            key: key.into(),
        }
    }

    pub fn field_ref(field_path: impl Into<String>) -> Self {
        EnvSetter::FieldRef(field_path.into())
    }

    /// Overwrites the value of `env`, clearing whichever source it had before.
    fn apply(&self, env: &mut EnvVar) {
        match self {
            EnvSetter::Value(value) => {
                env.value = Some(value.clone());
                env.value_from = None;
            }
            EnvSetter::SecretKeyRef { name, key } => {
                env.value = None;
                env.value_from = Some(EnvVarSource {
                    secret_key_ref: Some(SecretKeySelector {
                        name: name.clone(),
                        key: key.clone(),
                        optional: None,
                    }),
                    ..Default::default()
                });
            }
            EnvSetter::FieldRef(field_path) => {
                env.value = None;
                env.value_from = Some(EnvVarSource {
                    field_ref: Some(ObjectFieldSelector {
                        field_path: field_path.clone(),
                        ..Default::default()
                    }),
                    ..Default::default()
                });
            }
        }
    }
}

/// Merges `setters` into `base`.
///
/// Duplicates already present in `base` collapse to their last occurrence, kept
/// at the position of the first. Setters then update the entry with the same
/// name or are appended in name order.
#[must_use]
pub fn merge_envs(base: Vec<EnvVar>, setters: &BTreeMap<String, EnvSetter>) -> Vec<EnvVar> {
    let mut merged: Vec<EnvVar> = Vec::with_capacity(base.len() + setters.len());

    for env in base {
        match merged.iter_mut().find(|existing| existing.name == env.name) {
            Some(existing) => *existing = env,
            None => merged.push(env),
        }
    }

    for (name, setter) in setters {
        if let Some(existing) = merged.iter_mut().find(|env| &env.name == name) {
            setter.apply(existing);
        } else {
            let mut env = EnvVar {
                name: name.clone(),
                ..Default::default()
            };
            setter.apply(&mut env);
            merged.push(env);
        }
    }

    merged
}
