// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from a kubeconfig file

use crate::config::Config;
use crate::error::{PodrunError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, instrument};

/// Create a Kubernetes client from the configured kubeconfig file
#[instrument(skip(config), fields(kubeconfig = %config.kubeconfig.display()))]
pub async fn connect(config: &Config) -> Result<Client> {
    let client_config = build_client_config(&config.kubeconfig).await?;
    debug!("Using cluster URL {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| PodrunError::SessionConstruction(e.to_string()))
}

/// Read and parse a kubeconfig file into connection parameters for its current context
pub async fn build_client_config(path: &Path) -> Result<KConfig> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        PodrunError::ConnectionBuild(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let kubeconfig: Kubeconfig = serde_yaml::from_str(&raw).map_err(|e| {
        PodrunError::ConnectionBuild(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| PodrunError::ConnectionBuild(format!("Failed to create config: {}", e)))
}
