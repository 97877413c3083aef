use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use joinery_codegen::{RequestStatus, render_request, run_batch};
use joinery_core::SourceTree;
use joinery_manifest::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to joinery.toml (defaults to ./joinery.toml)
    #[arg(short, long, default_value = "joinery.toml")]
    pub config: PathBuf,

    /// Root directory of the generated source tree
    #[arg(short, long, default_value = "generated")]
    pub output: PathBuf,

    /// Preview generated sources without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let requests = manifest.requests();

        if self.dry_run {
            return Self::run_preview(&requests);
        }

        let sink = SourceTree::java(&self.output);
        let report = run_batch(&requests, &sink);

        for outcome in &report.outcomes {
            match &outcome.status {
                RequestStatus::Written { qualified_builder } => {
                    println!("  + {}", sink.path_for(qualified_builder).display());
                }
                RequestStatus::Failed(error) => {
                    eprintln!(
                        "  - {}: builder `{}`: {}",
                        outcome.type_name, outcome.builder_name, error
                    );
                }
            }
        }

        println!();
        println!("{} generated, {} failed", report.succeeded(), report.failed());

        if !report.is_clean() {
            std::process::exit(1);
        }
        Ok(())
    }

    fn run_preview(requests: &[joinery_ir::GenerationRequest]) -> Result<()> {
        let mut failed = 0;
        for request in requests {
            match render_request(request) {
                Ok(artifact) => {
                    println!("── {} ──", artifact.qualified_name);
                    println!("{}", artifact.source);
                }
                Err(e) => {
                    failed += 1;
                    eprintln!("error: {}: {}", request.qualified_name, e);
                }
            }
        }

        println!("── Summary ──");
        println!("{} sources would be generated", requests.len() - failed);

        if failed > 0 {
            std::process::exit(1);
        }
        Ok(())
    }
}
