// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Session runner - lists the pods in the target namespace, then creates one.

use crate::config::Config;
use crate::deadline::Deadline;
use crate::error::Result;
use crate::kubernetes::{create_pod, list_pod_names};
use kube::Client;
use std::io::Write;
use tracing::debug;

pub struct Runner {
    client: Client,
    config: Config,
    deadline: Deadline,
}

impl Runner {
    pub fn new(client: Client, config: Config, deadline: Deadline) -> Self {
        Self {
            client,
            config,
            deadline,
        }
    }

    /// Run the list and create phases, writing their results to `out`
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let namespace = &self.config.namespace;

        debug!("Listing pods, {:?} left before deadline", self.deadline.remaining());
        let names = list_pod_names(&self.client, namespace, &self.deadline).await?;
        write_pod_names(out, namespace, &names)?;

        debug!("Creating pod, {:?} left before deadline", self.deadline.remaining());
        let created = create_pod(&self.client, namespace, &self.deadline).await?;
        debug!("Created pod {} in namespace {}", created, namespace);
        writeln!(out, "Pod created successfully: {}", created)?;

        // Updating and deleting the created pod are not supported yet.
        Ok(())
    }
}

fn write_pod_names<W: Write>(out: &mut W, namespace: &str, names: &[String]) -> Result<()> {
    if names.is_empty() {
        writeln!(out, "No pods found in namespace: {}", namespace)?;
    } else {
        for name in names {
            writeln!(out, "{}", name)?;
        }
    }
    Ok(())
}
