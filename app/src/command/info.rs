use loanform_config::Config;
use loanform_extraction::default_fields;
use tracing::info;

/// Strategy for displaying configuration information.
///
/// Outputs the config file location, storage settings and whether the field
/// list is the built-in catalogue or a custom one.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let config = Config::load_or_default()?;

        println!("=== loanform Configuration ===\n");

        println!("Config File:");
        if config_path.exists() {
            println!("  Path: {}", config_path.display());
        } else {
            println!("  Path: {} (not created, using defaults)", config_path.display());
        }
        println!();

        println!("Storage:");
        println!("  Enabled: {}", config.storage.enabled);
        println!("  JSON Dir: {}", config.storage.json_dir.display());
        println!("  Summary Dir: {}", config.storage.summary_dir.display());
        println!();

        println!("Extraction:");
        let custom = config.extraction.fields != default_fields();
        println!(
            "  Fields: {} ({})",
            config.extraction.fields.len(),
            if custom { "custom" } else { "built-in" }
        );

        info!("Validating field patterns");
        match config.extraction.build_library() {
            Ok(_) => println!("  Status: All patterns compile"),
            Err(e) => {
                println!("  Status: Invalid");
                println!("  Error: {e}");
            }
        }

        Ok(())
    }
}
