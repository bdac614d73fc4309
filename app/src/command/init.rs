use loanform_config::Config;

/// Strategy for initializing the configuration.
///
/// Writes the default configuration file to `~/loanform/config.json`,
/// including the full built-in field catalogue so it can be edited.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        Config::create_config()
    }
}
