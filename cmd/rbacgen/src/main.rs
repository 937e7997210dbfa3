use clap::{Parser, Subcommand};
use pkg_constants::defaults::{DEFAULT_INPUT_DIR, DEFAULT_NAME, DEFAULT_OUTPUT_DIR};
use pkg_rbac::ManifestOptions;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rbacgen",
    about = "Generates RBAC manifests from the RBAC annotations in source files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the role and role binding manifests
    Generate {
        /// Name to be used as prefix in identifier for manifests
        #[arg(long, default_value = DEFAULT_NAME)]
        name: String,

        /// Input directory pointing to annotated source files
        #[arg(long, default_value = DEFAULT_INPUT_DIR)]
        input_dir: PathBuf,

        /// Output directory where generated manifests will be saved
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            name,
            input_dir,
            output_dir,
        } => {
            let options = ManifestOptions {
                name,
                input_dir,
                output_dir,
                labels: BTreeMap::new(),
            };
            pkg_rbac::generate(&options)?;
            println!(
                "RBAC manifests generated under '{}' directory",
                options.output_dir.display()
            );
        }
    }

    Ok(())
}
