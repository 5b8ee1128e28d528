// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PodrunError {
    #[error("{0} is not set")]
    MissingConfiguration(&'static str),

    #[error("Error building kubeconfig: {0}")]
    ConnectionBuild(String),

    #[error("Error creating Kubernetes client: {0}")]
    SessionConstruction(String),

    #[error("Error listing pods in namespace {namespace}")]
    List {
        namespace: String,
        source: CallError,
    },

    #[error("Error creating pod in namespace {namespace}")]
    Create {
        namespace: String,
        source: CallError,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Failure of a single API call made under a deadline
#[derive(Error, Debug)]
pub enum CallError {
    #[error(transparent)]
    Kube(#[from] kube::Error),

    #[error("deadline exceeded")]
    DeadlineExceeded,
}

pub type Result<T> = std::result::Result<T, PodrunError>;
