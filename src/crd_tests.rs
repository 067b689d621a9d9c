// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `crd`

#[cfg(test)]
mod tests {
    use crate::crd::*;
    use crate::defaults::DesignateDefaults;
    use crate::role::Role;
    use kube::CustomResourceExt;

    #[test]
    fn test_password_selector_default() {
        let selector = PasswordSelector::default();
        assert_eq!(selector.database, "DesignateDatabasePassword");
        assert_eq!(selector.service, "DesignatePassword");
    }

    #[test]
    fn test_template_serde_defaults() {
        let template: DesignateTemplate = serde_json::from_str(r#"{"secret": "osp-secret"}"#).unwrap();

        assert_eq!(template.service_user, "designate");
        assert_eq!(template.database_user, "designate");
        assert_eq!(template.secret, "osp-secret");
        assert_eq!(template.password_selectors, PasswordSelector::default());
    }

    #[test]
    fn test_template_apply_defaults_fills_empty_fields() {
        let mut template = DesignateTemplate {
            service_user: String::new(),
            database_user: "custom".into(),
            secret: "osp-secret".into(),
            password_selectors: PasswordSelector {
                database: String::new(),
                service: "MyPassword".into(),
            },
        };

        template.apply_defaults();

        assert_eq!(template.service_user, "designate");
        assert_eq!(template.database_user, "custom");
        assert_eq!(template.password_selectors.database, "DesignateDatabasePassword");
        assert_eq!(template.password_selectors.service, "MyPassword");
    }

    #[test]
    fn test_debug_stages_all_combinations() {
        for (init, service) in [(false, false), (true, false), (false, true), (true, true)] {
            let stages = DesignateServiceDebug {
                init_container: init,
                service,
            }
            .stages();

            assert_eq!(stages.init.is_debug(), init);
            assert_eq!(stages.service.is_debug(), service);
        }
    }

    #[test]
    fn test_service_spec_camel_case_fields() {
        let spec: DesignateServiceSpec = serde_json::from_str(
            r#"{
                "containerImage": "img:1",
                "nodeSelector": {"zone": "a"},
                "debug": {"initContainer": true},
                "databaseHostname": "db.example",
                "transportURLSecret": "rabbit",
                "serviceAccount": "designate-designate",
                "networkAttachments": ["internalapi"]
            }"#,
        )
        .unwrap();

        assert_eq!(spec.service_template.container_image, "img:1");
        assert_eq!(spec.service_template.node_selector.get("zone").unwrap(), "a");
        assert!(spec.service_template.debug.init_container);
        assert!(!spec.service_template.debug.service);
        assert_eq!(spec.database_hostname, "db.example");
        assert_eq!(spec.transport_url_secret, "rabbit");
        assert_eq!(spec.service_account, "designate-designate");
        assert_eq!(spec.service_template.network_attachments, vec!["internalapi"]);
        assert_eq!(spec.template.service_user, "designate");
    }

    #[test]
    fn test_service_spec_apply_defaults_keeps_explicit_image() {
        let defaults = DesignateDefaults::from_lookup(|_| Some("env:image".to_string()));
        let mut spec = DesignateServiceSpec::default();
        spec.service_template.container_image = "explicit:1".into();

        spec.apply_defaults(Role::Worker, &defaults);

        assert_eq!(spec.service_template.container_image, "explicit:1");
        assert_eq!(spec.replicas, Some(1));
    }

    #[test]
    fn test_service_spec_apply_defaults_is_idempotent() {
        let defaults = DesignateDefaults::default();
        let mut spec = DesignateServiceSpec::default();

        spec.apply_defaults(Role::Central, &defaults);
        let once = spec.clone();
        spec.apply_defaults(Role::Central, &defaults);

        assert_eq!(spec, once);
        assert_eq!(
            spec.service_template.container_image,
            Role::Central.fallback_image()
        );
    }

    #[test]
    fn test_role_kinds_map_to_roles() {
        assert_eq!(<DesignateAPI as DesignateService>::ROLE, Role::Api);
        assert_eq!(<DesignateCentral as DesignateService>::ROLE, Role::Central);
        assert_eq!(<DesignateMdns as DesignateService>::ROLE, Role::Mdns);
        assert_eq!(<DesignateProducer as DesignateService>::ROLE, Role::Producer);
        assert_eq!(<DesignateWorker as DesignateService>::ROLE, Role::Worker);
    }

    #[test]
    fn test_crd_names() {
        let crd = DesignateProducer::crd();
        assert_eq!(
            crd.metadata.name.as_deref(),
            Some("designateproducers.designate.openstack.org")
        );
        assert_eq!(crd.spec.names.kind, Role::Producer.kind());
        assert_eq!(DesignateAPI::crd().spec.names.kind, Role::Api.kind());
    }
}
