use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};

const STARTER_MANIFEST: &str = r#"# joinery.toml -- declare the types that need builders.
#
# Each member becomes one chained setter on the generated builder; the
# build method returns the populated instance.

[types."io.rama.vehicle.Vehicle"]
build-method = "build"

[types."io.rama.vehicle.Vehicle".members.year]
type = "int"

[types."io.rama.vehicle.Vehicle".members.model]
type = "java.lang.String"

[types."io.rama.vehicle.Vehicle".members.make]
type = "java.lang.String"
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the manifest (defaults to ./joinery.toml)
    #[arg(default_value = "joinery.toml")]
    pub path: PathBuf,
}

impl InitCommand {
    /// Run the init command
    pub fn run(&self) -> Result<()> {
        if self.path.exists() {
            bail!("{} already exists", self.path.display());
        }

        std::fs::write(&self.path, STARTER_MANIFEST)
            .wrap_err_with(|| format!("failed to write {}", self.path.display()))?;

        println!("Created {}", self.path.display());
        println!("Run `joinery generate` to produce builder sources.");
        Ok(())
    }
}
