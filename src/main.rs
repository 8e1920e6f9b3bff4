//! Exam Navigator - Entry point
//!
//! Extracts the question paper in the current directory and browses it.

use anyhow::Context;
use exam_navigator::{
    prompt_line, CleanerConfig, Navigator, PatternSet, Pipeline, PipelineConfig, Segmentation,
};

fn prompt_year() -> exam_navigator::Result<CleanerConfig> {
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout();
    let year = prompt_line(
        &mut stdin,
        &mut stdout,
        "Enter the year of the exam paper (e.g., 2023): ",
    )?
    .unwrap_or_default();
    Ok(CleanerConfig::question_paper(&year))
}

fn main() -> anyhow::Result<()> {
    exam_navigator::logging::init();

    let dir = std::env::current_dir()?;
    let pipeline = Pipeline::new(PipelineConfig::question_paper());

    let outcome = pipeline.run(&dir, prompt_year)?;
    println!("{}", outcome.describe());

    // A previous extraction stays browsable once the PDF is gone
    let output = pipeline.output_path(&dir);
    let content = pipeline
        .load(&dir)
        .with_context(|| format!("cannot read '{}'", output.display()))?;
    let segmentation = Segmentation::new(content, &PatternSet::default());
    tracing::info!(questions = segmentation.question_count(), "ready to browse");

    Navigator::new(&segmentation, std::io::stdin().lock(), std::io::stdout()).run()?;

    Ok(())
}
