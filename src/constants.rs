// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read at startup
pub mod env {
    /// Path to the kubeconfig file (required)
    pub const KUBECONFIG: &str = "KUBECONFIG";
    /// Namespace to list and create pods in (optional)
    pub const NAMESPACE: &str = "NAMESPACE";
}

/// Namespace used when NAMESPACE is not set
pub const DEFAULT_NAMESPACE: &str = "default";

/// Time budget in seconds shared by the list and create calls
pub const DEADLINE_SECS: u64 = 30;

/// Template for the pod created on every run
pub mod pod {
    pub const GENERATE_NAME: &str = "main-";
    pub const CONTAINER_NAME: &str = "main";
    pub const IMAGE: &str = "prasadb89/prasad89.github.io";
}
