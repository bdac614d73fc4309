/// Strategy for listing the active field library.
///
/// Shows each field in report order with its default, normalization and
/// compiled pattern.
#[derive(Debug, Clone, Copy)]
pub struct FieldsStrategy;

impl super::CommandStrategy for FieldsStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let (_, library) = super::load_library()?;

        println!("=== Fields ({}) ===\n", library.len());
        for spec in &library {
            println!("{}", spec.name());
            if !spec.default_value().is_empty() {
                println!("  Default:   {}", spec.default_value());
            }
            println!("  Normalize: {}", spec.normalize().as_str());
            println!("  Pattern:   {}", spec.pattern().as_str());
        }

        Ok(())
    }
}
