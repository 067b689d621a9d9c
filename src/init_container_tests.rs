// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `init_container`

#[cfg(test)]
mod tests {
    use crate::crd::DebugMode;
    use crate::env::EnvSetter;
    use crate::init_container::{build_init_containers, InitContainerDetails};
    use k8s_openapi::api::core::v1::{Container, EnvVar};
    use std::collections::BTreeMap;

    fn create_test_details() -> InitContainerDetails {
        InitContainerDetails {
            container_image: "img:1".into(),
            database_host: "db.example".into(),
            database_user: "designate".into(),
            database_name: "designate".into(),
            osp_secret: "osp-secret".into(),
            transport_url_secret: "rabbitmq-transport-url".into(),
            db_password_selector: "DesignateDatabasePassword".into(),
            user_password_selector: "DesignatePassword".into(),
            volume_mounts: Vec::new(),
            debug: DebugMode::Normal,
            extra_envs: BTreeMap::new(),
        }
    }

    fn env<'a>(container: &'a Container, name: &str) -> &'a EnvVar {
        container
            .env
            .as_ref()
            .unwrap()
            .iter()
            .find(|e| e.name == name)
            .unwrap_or_else(|| panic!("missing env {name}"))
    }

    #[test]
    fn test_single_init_container() {
        let containers = build_init_containers(&create_test_details());

        assert_eq!(containers.len(), 1);
        let init = &containers[0];
        assert_eq!(init.name, "init");
        assert_eq!(init.image.as_deref(), Some("img:1"));
        assert_eq!(init.command, Some(vec!["/bin/bash".to_string()]));
        assert_eq!(
            init.security_context.as_ref().unwrap().run_as_user,
            Some(0)
        );
    }

    #[test]
    fn test_database_and_credential_wiring() {
        let containers = build_init_containers(&create_test_details());
        let init = &containers[0];

        assert_eq!(env(init, "DatabaseHost").value.as_deref(), Some("db.example"));
        assert_eq!(env(init, "DatabaseName").value.as_deref(), Some("designate"));
        assert_eq!(env(init, "DatabaseUser").value.as_deref(), Some("designate"));

        let secret_ref = |name: &str| {
            env(init, name)
                .value_from
                .as_ref()
                .and_then(|v| v.secret_key_ref.clone())
                .unwrap()
        };
        let db = secret_ref("DatabasePassword");
        assert_eq!(db.name, "osp-secret");
        assert_eq!(db.key, "DesignateDatabasePassword");

        let svc = secret_ref("DesignatePassword");
        assert_eq!(svc.key, "DesignatePassword");

        let transport = secret_ref("TransportURL");
        assert_eq!(transport.name, "rabbitmq-transport-url");
        assert_eq!(transport.key, "transport_url");
    }

    #[test]
    fn test_extra_envs_added_without_loss() {
        let mut details = create_test_details();
        details
            .extra_envs
            .insert("CustomConf".into(), EnvSetter::value("custom.conf"));

        let containers = build_init_containers(&details);
        let envs = containers[0].env.as_ref().unwrap();

        assert_eq!(envs.len(), 7);
        assert_eq!(env(&containers[0], "CustomConf").value.as_deref(), Some("custom.conf"));
        assert_eq!(env(&containers[0], "DatabaseHost").value.as_deref(), Some("db.example"));
    }

    #[test]
    fn test_debug_holds_init_container() {
        let mut details = create_test_details();

        let normal = build_init_containers(&details);
        assert_eq!(
            normal[0].args,
            Some(vec![
                "-c".to_string(),
                "/usr/local/bin/container-scripts/init.sh".to_string()
            ])
        );

        details.debug = DebugMode::Debug;
        let debug = build_init_containers(&details);
        let args = debug[0].args.as_ref().unwrap();
        assert!(args[1].starts_with("/usr/local/bin/container-scripts/init.sh && "));
        assert!(args[1].contains("/tmp/stop-init-container"));
    }
}
