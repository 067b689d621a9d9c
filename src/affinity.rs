// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Pod placement rules.

use crate::constants::ANTI_AFFINITY_WEIGHT;
use k8s_openapi::api::core::v1::{
    Affinity, PodAffinityTerm, PodAntiAffinity, WeightedPodAffinityTerm,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, LabelSelectorRequirement};

/// Builds a soft anti-affinity that spreads pods matching
/// `selector_key In selector_values` across distinct `topology_key` domains.
///
/// The term is preferred, not required: when there are fewer domains than
/// replicas the scheduler still co-locates pods.
#[must_use]
pub fn distribute_pods(
    selector_key: &str,
    selector_values: &[String],
    topology_key: &str,
) -> Affinity {
    Affinity {
        pod_anti_affinity: Some(PodAntiAffinity {
            preferred_during_scheduling_ignored_during_execution: Some(vec![
                WeightedPodAffinityTerm {
                    weight: ANTI_AFFINITY_WEIGHT,
                    pod_affinity_term: PodAffinityTerm {
                        label_selector: Some(LabelSelector {
                            match_expressions: Some(vec![LabelSelectorRequirement {
                                key: selector_key.to_string(),
                                operator: "In".to_string(),
                                values: Some(selector_values.to_vec()),
                            }]),
                            ..Default::default()
                        }),
                        topology_key: topology_key.to_string(),
                        ..Default::default()
                    },
                },
            ]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
