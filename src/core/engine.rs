use crate::core::Generator;
use crate::utils::error::Result;
use std::time::Instant;

pub struct GenEngine<G: Generator> {
    generator: G,
}

impl<G: Generator> GenEngine<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();

        tracing::info!("Sampling facts...");
        let facts = self.generator.sample().await?;
        tracing::info!("Sampled {} facts", facts.len());

        tracing::info!("Assembling instance...");
        let instance = self.generator.assemble(facts).await?;
        tracing::info!(
            "Assembled {} fact lines ({} summary)",
            instance.facts.len() + instance.summary.len(),
            instance.summary.len()
        );

        tracing::info!("Emitting instance...");
        let output = self.generator.emit(instance).await?;

        tracing::info!("Done in {:?}", started.elapsed());
        Ok(output)
    }
}
