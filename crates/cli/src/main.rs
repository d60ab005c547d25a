// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use core_model::{expr::DeployParams, resource::Resource};

mod logging;

#[derive(Parser)]
#[command(name = "graft", version, about = "Schema-to-resource-graph transform engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transform a schema and emit the resource graph and partition map
    Build {
        /// Schema file (SDL)
        schema: PathBuf,
        /// Write the artifact to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the invocation targets a deployment would resolve
    Preview {
        /// Schema file (SDL)
        schema: PathBuf,
        /// Environment parameter binding
        #[arg(long)]
        env: Option<String>,
        #[arg(long, default_value = "us-east-1")]
        region: String,
        #[arg(long, default_value = "123456789012")]
        account_id: String,
    },
}

fn main() -> Result<()> {
    logging::init();

    match Cli::parse().command {
        Command::Build { schema, output } => build(&schema, output.as_deref()),
        Command::Preview {
            schema,
            env,
            region,
            account_id,
        } => preview(
            &schema,
            DeployParams {
                env,
                region,
                account_id,
            },
        ),
    }
}

fn build(schema: &std::path::Path, output: Option<&std::path::Path>) -> Result<()> {
    let system = builder::build_system(schema)?;
    let artifact = serde_json::to_string_pretty(&system)?;

    match output {
        Some(path) => {
            fs::write(path, artifact)?;
            eprintln!(
                "Wrote {} resources to {}",
                system.graph.len(),
                path.display()
            );
        }
        None => println!("{artifact}"),
    }
    Ok(())
}

fn preview(schema: &std::path::Path, params: DeployParams) -> Result<()> {
    let system = builder::build_system(schema)?;

    for (id, resource) in system.graph.iter() {
        if let Resource::DataSource(data_source) = resource {
            println!("{id}\t{}", data_source.target.evaluate(&params));
        }
    }
    Ok(())
}
