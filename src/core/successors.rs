use crate::core::{ConfigProvider, Fact, Generator, Instance, InstanceStats, Storage, Term};
use crate::utils::error::Result;

/// Successor-chain fixtures: `succ(0,1). succ(1,2). ... succ(n-1,n).`
/// The predicate name is fixed because the consuming encodings join on
/// `succ/2` directly.
pub struct SuccessorGenerator<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SuccessorGenerator<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Generator for SuccessorGenerator<S, C> {
    async fn sample(&self) -> Result<Vec<Fact>> {
        let count = self.config.count() as i64;

        let facts = (0..count)
            .map(|i| Fact::new("succ", vec![Term::Int(i), Term::Int(i + 1)]))
            .collect();

        Ok(facts)
    }

    async fn assemble(&self, facts: Vec<Fact>) -> Result<Instance> {
        let count = facts.len();
        let text = Instance::render(&facts, &[]);

        let stats = InstanceStats {
            fact_count: count,
            max_value: Some(count as i64),
            domain_size: count as i64,
        };

        Ok(Instance {
            facts,
            summary: vec![],
            text,
            stats,
        })
    }

    async fn emit(&self, instance: Instance) -> Result<String> {
        let file_name = self.config.file_name().to_string();
        self.storage
            .write_file(&file_name, instance.text.as_bytes())
            .await?;
        Ok(file_name)
    }
}
