// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `render`

#[cfg(test)]
mod tests {
    use crate::config_hash::compute_config_hash;
    use crate::crd::DesignateServiceSpec;
    use crate::defaults::DesignateDefaults;
    use crate::errors::RenderError;
    use crate::render::{render_document, to_output, OutputFormat};
    use crate::role::Role;

    const WORKER_DOC: &str = r"
apiVersion: designate.openstack.org/v1beta1
kind: DesignateWorker
metadata:
  name: designate-worker
  namespace: openstack
spec:
  databaseHostname: openstack.openstack.svc
  secret: osp-secret
  transportURLSecret: rabbitmq-transport-url
  networkAttachments:
    - internalapi
";

    #[test]
    fn test_render_applies_image_default() {
        let defaults = DesignateDefaults::from_lookup(|name| {
            (name == "DESIGNATE_WORKER_IMAGE_URL_DEFAULT").then(|| "env/worker:1".to_string())
        });

        let deployment = render_document(Role::Worker, WORKER_DOC, Some("abc123"), &defaults).unwrap();
        let pod = deployment.spec.unwrap().template.spec.unwrap();

        assert_eq!(pod.containers[0].image.as_deref(), Some("env/worker:1"));
        assert_eq!(
            pod.init_containers.unwrap()[0].image.as_deref(),
            Some("env/worker:1")
        );
    }

    #[test]
    fn test_render_sets_network_annotation_and_labels() {
        let deployment =
            render_document(Role::Worker, WORKER_DOC, Some("abc123"), &DesignateDefaults::default())
                .unwrap();
        let template_meta = deployment.spec.unwrap().template.metadata.unwrap();

        let annotations = template_meta.annotations.unwrap();
        assert!(annotations
            .get("k8s.v1.cni.cncf.io/networks")
            .unwrap()
            .contains("\"internalapi\""));
        assert_eq!(
            template_meta.labels.unwrap().get("component").unwrap(),
            "designate-worker"
        );
    }

    #[test]
    fn test_render_computes_hash_when_absent() {
        let defaults = DesignateDefaults::default();
        let deployment = render_document(Role::Worker, WORKER_DOC, None, &defaults).unwrap();
        let pod = deployment.spec.unwrap().template.spec.unwrap();
        let hash = pod.containers[0]
            .env
            .as_ref()
            .unwrap()
            .iter()
            .find(|e| e.name == "CONFIG_HASH")
            .and_then(|e| e.value.clone())
            .unwrap();

        let doc: serde_yaml::Value = serde_yaml::from_str(WORKER_DOC).unwrap();
        let mut spec: DesignateServiceSpec = serde_yaml::from_value(doc["spec"].clone()).unwrap();
        spec.apply_defaults(Role::Worker, &defaults);
        assert_eq!(hash, compute_config_hash(&spec));
    }

    #[test]
    fn test_render_rejects_malformed_document() {
        let err = render_document(
            Role::Producer,
            "spec: [not, a, map]",
            None,
            &DesignateDefaults::default(),
        )
        .unwrap_err();

        assert!(matches!(err, RenderError::ParseSpec { ref kind, .. } if kind == "DesignateProducer"));
    }

    #[test]
    fn test_output_formats() {
        let deployment =
            render_document(Role::Worker, WORKER_DOC, Some("abc123"), &DesignateDefaults::default())
                .unwrap();

        let yaml = to_output(&deployment, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("kind: Deployment"));

        let json = to_output(&deployment, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "Deployment");
        assert_eq!(value["metadata"]["name"], "designate-worker");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("toml".parse::<OutputFormat>().is_err());
    }
}
