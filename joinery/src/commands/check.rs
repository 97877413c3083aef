use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use joinery_codegen::render_request;
use joinery_manifest::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to joinery.toml (defaults to ./joinery.toml)
    #[arg(short, long, default_value = "joinery.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let requests = manifest.requests();

        let mut has_errors = false;
        for request in &requests {
            match render_request(request) {
                Ok(artifact) => {
                    println!("{} -> {}", request.qualified_name, artifact.qualified_name);
                }
                Err(e) => {
                    has_errors = true;
                    eprintln!("error: {}: {}", request.qualified_name, e);
                }
            }
        }

        println!();
        println!("{} types checked", requests.len());

        if has_errors {
            std::process::exit(1);
        }
        Ok(())
    }
}
