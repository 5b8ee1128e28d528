// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod listing and creation

use crate::constants::pod::{CONTAINER_NAME, GENERATE_NAME, IMAGE};
use crate::deadline::Deadline;
use crate::error::{PodrunError, Result};
use k8s_openapi::api::core::v1::{Container, Pod, PodSpec};
use kube::{
    api::{ListParams, ObjectMeta, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, instrument};

/// List the names of all pods in `namespace`, in the order the API server returns them
#[instrument(skip(client, deadline))]
pub async fn list_pod_names(
    client: &Client,
    namespace: &str,
    deadline: &Deadline,
) -> Result<Vec<String>> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);

    let list = deadline
        .run(pods.list(&ListParams::default()))
        .await
        .map_err(|source| PodrunError::List {
            namespace: namespace.to_string(),
            source,
        })?;

    debug!("Found {} pods in namespace {}", list.items.len(), namespace);
    Ok(list.items.iter().map(|pod| pod.name_any()).collect())
}

/// Create a pod from the fixed template and return the name the API server assigned
#[instrument(skip(client, deadline))]
pub async fn create_pod(client: &Client, namespace: &str, deadline: &Deadline) -> Result<String> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let pod = pod_template(namespace);

    let created = deadline
        .run(pods.create(&PostParams::default(), &pod))
        .await
        .map_err(|source| PodrunError::Create {
            namespace: namespace.to_string(),
            source,
        })?;

    Ok(created.name_any())
}

/// Pod manifest with a generated name and a single container running the pinned image
pub fn pod_template(namespace: &str) -> Pod {
    Pod {
        metadata: ObjectMeta {
            generate_name: Some(GENERATE_NAME.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: Some(PodSpec {
            containers: vec![Container {
                name: CONTAINER_NAME.to_string(),
                image: Some(IMAGE.to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }),
        ..Default::default()
    }
}
