// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

use anyhow::{Context, Result};
use serde::Serialize;
use sortlab::{AlgorithmId, AlgorithmInfo};

use crate::OutputFormat;

#[derive(Serialize)]
struct CatalogueEntry {
    key: &'static str,
    stable: bool,
    #[serde(flatten)]
    info: &'static AlgorithmInfo,
}

/// List the algorithm catalogue.
pub fn algorithms(format: OutputFormat) -> Result<()> {
    let entries: Vec<CatalogueEntry> = AlgorithmId::ALL
        .iter()
        .map(|algorithm| CatalogueEntry {
            key: algorithm.key(),
            stable: algorithm.is_stable(),
            info: algorithm.info(),
        })
        .collect();

    if format == OutputFormat::Json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).context("Failed to serialize catalogue")?
        );
        return Ok(());
    }

    println!("Available algorithms ({}):\n", entries.len());
    for entry in &entries {
        println!("  {:<10} {}", entry.key, entry.info.name);
        println!(
            "    best {}, average {}, worst {}, space {}",
            entry.info.best, entry.info.average, entry.info.worst, entry.info.space
        );
        println!("    {}", entry.info.properties);
        println!("    {}", entry.info.description);
        println!();
    }

    Ok(())
}
