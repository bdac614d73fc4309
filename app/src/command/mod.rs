//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use loanform_config::Config;
use loanform_extraction::PatternLibrary;
use tracing::info;

mod extract;
mod fields;
mod info;
mod init;
mod version;

pub use extract::{ExtractInput, ExtractStrategy};
pub use fields::FieldsStrategy;
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Load the config (or defaults) and compile its field library.
///
/// A library that fails to build stops the command; extraction never runs
/// with a partial set of fields.
fn load_library() -> anyhow::Result<(Config, PatternLibrary)> {
    let config = Config::load_or_default()?;
    let library = config
        .extraction
        .build_library()
        .map_err(|e| anyhow::anyhow!("Failed to compile field patterns: {e}"))?;
    info!("Compiled {} field patterns", library.len());
    Ok((config, library))
}

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
