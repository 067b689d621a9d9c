// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `env`

#[cfg(test)]
mod tests {
    use crate::env::{merge_envs, EnvSetter};
    use k8s_openapi::api::core::v1::EnvVar;
    use std::collections::BTreeMap;

    fn literal(name: &str, value: &str) -> EnvVar {
        EnvVar {
            name: name.into(),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_into_empty_base() {
        let mut setters = BTreeMap::new();
        setters.insert("B".to_string(), EnvSetter::value("2"));
        setters.insert("A".to_string(), EnvSetter::value("1"));

        let envs = merge_envs(Vec::new(), &setters);

        let names: Vec<_> = envs.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(envs[0].value.as_deref(), Some("1"));
    }

    #[test]
    fn test_setter_overrides_existing_entry_in_place() {
        let base = vec![literal("CONFIG_HASH", "old"), literal("OTHER", "x")];
        let mut setters = BTreeMap::new();
        setters.insert("CONFIG_HASH".to_string(), EnvSetter::value("new"));

        let envs = merge_envs(base, &setters);

        assert_eq!(envs.len(), 2);
        assert_eq!(envs[0].name, "CONFIG_HASH");
        assert_eq!(envs[0].value.as_deref(), Some("new"));
        assert_eq!(envs[1].value.as_deref(), Some("x"));
    }

    #[test]
    fn test_duplicate_base_entries_collapse_last_wins() {
        let base = vec![
            literal("CONFIG_HASH", "first"),
            literal("KEEP", "k"),
            literal("CONFIG_HASH", "second"),
        ];

        let envs = merge_envs(base, &BTreeMap::new());

        assert_eq!(envs.len(), 2);
        let hashes: Vec<_> = envs.iter().filter(|e| e.name == "CONFIG_HASH").collect();
        assert_eq!(hashes.len(), 1);
        assert_eq!(hashes[0].value.as_deref(), Some("second"));
    }

    #[test]
    fn test_secret_ref_replaces_literal_value() {
        let base = vec![literal("DatabasePassword", "plaintext")];
        let mut setters = BTreeMap::new();
        setters.insert(
            "DatabasePassword".to_string(),
            EnvSetter::secret_key_ref("osp-secret", "DesignateDatabasePassword"),
        );

        let envs = merge_envs(base, &setters);

        assert!(envs[0].value.is_none());
        let selector = envs[0]
            .value_from
            .as_ref()
            .and_then(|v| v.secret_key_ref.as_ref())
            .unwrap();
        assert_eq!(selector.name, "osp-secret");
        assert_eq!(selector.key, "DesignateDatabasePassword");
    }

    #[test]
    fn test_field_ref_setter() {
        let mut setters = BTreeMap::new();
        setters.insert(
            "POD_NAMESPACE".to_string(),
            EnvSetter::field_ref("metadata.namespace"),
        );

        let envs = merge_envs(Vec::new(), &setters);

        let field = envs[0]
            .value_from
            .as_ref()
            .and_then(|v| v.field_ref.as_ref())
            .unwrap();
        assert_eq!(field.field_path, "metadata.namespace");
        assert!(envs[0].value.is_none());
    }
}
