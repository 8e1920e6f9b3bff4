//! Mark scheme - Entry point
//!
//! Extracts the mark scheme in the current directory and prints its rows.

use anyhow::Context;
use exam_navigator::{reconstruct_mark_lines, CleanerConfig, Pipeline, PipelineConfig};

fn main() -> anyhow::Result<()> {
    exam_navigator::logging::init();

    let dir = std::env::current_dir()?;
    let pipeline = Pipeline::new(PipelineConfig::mark_scheme());

    let outcome = pipeline.run(&dir, || Ok(CleanerConfig::mark_scheme()))?;
    println!("{}", outcome.describe());

    let output = pipeline.output_path(&dir);
    let content = pipeline
        .load(&dir)
        .with_context(|| format!("cannot read '{}'", output.display()))?;
    let rows = reconstruct_mark_lines(&content);
    tracing::info!(rows = rows.len(), "rebuilt mark scheme rows");

    // Fall back to the cleaned text when no row looks like a question reference
    if rows.is_empty() {
        println!("{}", content);
    } else {
        for row in rows {
            println!("{}", row);
        }
    }

    Ok(())
}
