// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as vars, DEFAULT_NAMESPACE};
use crate::error::{PodrunError, Result};
use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Session configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Kubeconfig file used to build the client
    pub kubeconfig: PathBuf,
    /// Namespace to list and create pods in
    pub namespace: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let kubeconfig = get(vars::KUBECONFIG)
            .map(PathBuf::from)
            .ok_or(PodrunError::MissingConfiguration(vars::KUBECONFIG))?;

        let namespace = get(vars::NAMESPACE).unwrap_or_else(|| {
            warn!("{} is not set, using default namespace", vars::NAMESPACE);
            DEFAULT_NAMESPACE.to_string()
        });

        Ok(Config {
            kubeconfig,
            namespace,
        })
    }
}
