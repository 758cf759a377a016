//! Common CLI argument definitions shared by all seeding backends.

use clap::Args;
use seed_core::{ConfigError, ModelConfig, SeedConfig};
use std::path::PathBuf;

/// Common arguments shared by all seeding backends.
///
/// Flags given here form the top configuration layer: they override both
/// the `global` section and the per-model entries of the config file.
#[derive(Args, Clone, Debug)]
pub struct CommonSeedArgs {
    /// Path to schema YAML file
    #[arg(long, short = 's')]
    pub schema: PathBuf,

    /// Path to seeding config YAML file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Specific models to seed (comma-separated, empty = all models from schema)
    #[arg(long, value_delimiter = ',')]
    pub models: Vec<String>,

    /// Number of records per model (overrides the config file)
    #[arg(long)]
    pub count: Option<u64>,

    /// Delete existing records before seeding
    #[arg(long)]
    pub reset: bool,

    /// Append to existing records, continuing the record index (disables --reset)
    #[arg(long)]
    pub incremental: bool,

    /// Insert records one at a time in shuffled order
    #[arg(long)]
    pub randomize: bool,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Batch size for database inserts
    #[arg(long, default_value = "100")]
    pub batch_size: usize,

    /// Dry-run mode: validate schema and configuration and print the plan
    #[arg(long)]
    pub dry_run: bool,
}

impl CommonSeedArgs {
    /// Load the config file (or defaults) with `--seed` applied.
    pub fn load_config(&self) -> Result<SeedConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SeedConfig::from_file(path)?,
            None => SeedConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.global.seed = Some(seed);
        }
        Ok(config)
    }

    /// Per-run override layer built from the flags that were given.
    pub fn overrides(&self) -> ModelConfig {
        ModelConfig {
            count: self.count,
            reset: self.reset.then_some(true),
            incremental: self.incremental.then_some(true),
            randomize: self.randomize.then_some(true),
            ..ModelConfig::default()
        }
    }

    /// Whether `model` was selected with `--models` (all are by default).
    pub fn selects(&self, model: &str) -> bool {
        self.models.is_empty() || self.models.iter().any(|m| m == model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: CommonSeedArgs,
    }

    fn parse(argv: &[&str]) -> CommonSeedArgs {
        TestCli::try_parse_from(std::iter::once("seeder").chain(argv.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["--schema", "schema.yaml"]);

        assert_eq!(args.schema, PathBuf::from("schema.yaml"));
        assert_eq!(args.batch_size, 100);
        assert!(args.models.is_empty());
        assert!(args.selects("User"));
        assert_eq!(args.overrides(), ModelConfig::default());
    }

    #[test]
    fn test_flags_become_overrides() {
        let args = parse(&[
            "-s",
            "schema.yaml",
            "--count",
            "25",
            "--reset",
            "--randomize",
            "--models",
            "User,Post",
        ]);

        let overrides = args.overrides();
        assert_eq!(overrides.count, Some(25));
        assert_eq!(overrides.reset, Some(true));
        assert_eq!(overrides.incremental, None);
        assert_eq!(overrides.randomize, Some(true));

        assert!(args.selects("Post"));
        assert!(!args.selects("Comment"));
    }

    #[test]
    fn test_load_config_applies_seed() {
        let mut file = std::env::temp_dir();
        file.push(format!("seed-populate-config-{}.yaml", std::process::id()));
        let mut handle = std::fs::File::create(&file).unwrap();
        writeln!(handle, "global:\n  seed: 1\n  default_count: 5").unwrap();

        let path = file.to_string_lossy().to_string();
        let args = parse(&["-s", "schema.yaml", "-c", &path, "--seed", "9"]);
        let config = args.load_config().unwrap();
        std::fs::remove_file(&file).unwrap();

        assert_eq!(config.global.seed, Some(9));
        assert_eq!(config.global.default_count, Some(5));
    }
}
