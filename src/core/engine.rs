use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct QuoteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> QuoteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting quote comparison...");

        tracing::info!("Reading request...");
        let request = self.pipeline.extract()?;
        tracing::info!(
            "Read {} pricing option(s) and {} port(s)",
            request.options.present().count(),
            request.ports.len()
        );

        tracing::info!("Comparing options...");
        let outcome = self.pipeline.transform(request)?;
        tracing::info!(
            "Overall best option index: {}",
            outcome.comparison.overall_best
        );

        tracing::info!("Writing reports...");
        let output = self.pipeline.load(outcome)?;
        tracing::info!("Reports saved to: {}", output);

        Ok(output)
    }
}
