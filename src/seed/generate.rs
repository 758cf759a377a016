//! Generate command handler.
//!
//! Seeds an in-memory store and writes every record as one JSON line:
//! `{"model": "User", "record": {...}}`, models in dependency order.

use anyhow::Context;
use seed_engine::MemoryStore;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use super::run::{build_seeder, load_registry, report_results, seed_selected};
use crate::GenerateArgs;

/// Run the generate command.
pub async fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let registry = load_registry(&args.common.schema)?;
    let store = MemoryStore::for_registry(&registry, args.id_format.into());
    let mut seeder = build_seeder(&args.common, registry, store.bindings())?;

    let results = seed_selected(&mut seeder, &args.common).await;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut written = 0u64;
    for planned in seeder.plan().iter().filter(|p| args.common.selects(&p.model)) {
        let Some(collection) = store.collection(&planned.model) else {
            continue;
        };
        for record in collection.snapshot().await {
            let line = serde_json::json!({
                "model": planned.model,
                "record": record.to_json(),
            });
            writeln!(out, "{line}")?;
            written += 1;
        }
    }
    out.flush()?;

    if let Some(path) = &args.output {
        tracing::info!("Wrote {} records to {}", written, path.display());
    }

    report_results(&results)
}
