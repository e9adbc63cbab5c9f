use crate::core::summary::{summarize, MappingSummary};
use crate::core::{Pipeline, RemapOutcome};
use crate::utils::error::Result;

pub struct RemapEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RemapEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract, transform and load once; returns the rendered request.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting origin remap");

        tracing::debug!("Extracting payloads...");
        let payloads = self.pipeline.extract()?;
        tracing::info!(
            "Parsed request with {} detail line(s) and {} mapping entries",
            payloads.request.detail.len(),
            payloads.mapping.len()
        );

        tracing::debug!("Transforming request...");
        let result = self.pipeline.transform(payloads)?;
        match &result.outcome {
            RemapOutcome::Replaced { from, to } => {
                tracing::info!("Origin remapped: {} -> {}", from, to)
            }
            RemapOutcome::Unchanged { origin } => {
                tracing::info!("Origin {} has no mapping, left unchanged", origin)
            }
        }

        tracing::debug!("Rendering result...");
        self.pipeline.load(result)
    }

    pub fn summarize(&self) -> Result<MappingSummary> {
        tracing::info!("Computing mapping summary");
        let payloads = self.pipeline.extract()?;
        summarize(&payloads.mapping)
    }
}
