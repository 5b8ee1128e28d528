// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation and pod management.

pub mod client;
pub mod pods;

pub use client::connect;
pub use pods::{create_pod, list_pod_names, pod_template};
