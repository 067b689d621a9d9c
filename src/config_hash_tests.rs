// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `config_hash`

#[cfg(test)]
mod tests {
    use crate::config_hash::compute_config_hash;
    use std::collections::BTreeMap;

    #[test]
    fn test_hash_is_stable_and_hex() {
        let mut data = BTreeMap::new();
        data.insert("designate.conf", "[DEFAULT]\n");

        let first = compute_config_hash(&data);
        let second = compute_config_hash(&data);

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_changes_with_content() {
        let mut data = BTreeMap::new();
        data.insert("custom.conf", "[DEFAULT]\ndebug = false\n");
        let before = compute_config_hash(&data);

        data.insert("custom.conf", "[DEFAULT]\ndebug = true\n");
        let after = compute_config_hash(&data);

        assert_ne!(before, after);
    }
}
