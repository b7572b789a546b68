use crate::core::{ConfigProvider, Fact, Generator, Instance, InstanceStats, Storage, Term};
use crate::utils::error::{GenError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// The classic fixture shape: N distinct values drawn from `1..=domain_size`,
/// followed by the `dom(1..D).`, `num(N).` and `max(M).` summary facts the
/// consuming encodings join against.
pub struct SelectionGenerator<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SelectionGenerator<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// 重複抽樣直到收集到指定數量的相異值
    fn draw_values(&self, rng: &mut impl Rng) -> Result<Vec<i64>> {
        let count = self.config.count();
        let domain = self.config.domain_size();

        if count as i64 > domain {
            return Err(GenError::ProcessingError {
                message: format!(
                    "Cannot draw {} distinct values from a domain of size {}",
                    count, domain
                ),
            });
        }

        let mut chosen: HashSet<i64> = HashSet::with_capacity(count);
        while chosen.len() < count {
            chosen.insert(rng.gen_range(1..=domain));
        }

        let mut values: Vec<i64> = chosen.into_iter().collect();
        values.sort_unstable();
        Ok(values)
    }

    fn facts_from_values(&self, values: &[i64]) -> Vec<Fact> {
        values
            .iter()
            .map(|&value| Fact::int(self.config.predicate(), value))
            .collect()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Generator for SelectionGenerator<S, C> {
    async fn sample(&self) -> Result<Vec<Fact>> {
        let mut rng = StdRng::from_entropy();
        let values = self.draw_values(&mut rng)?;

        tracing::debug!(
            "Drew {} distinct values from 1..={}",
            values.len(),
            self.config.domain_size()
        );

        Ok(self.facts_from_values(&values))
    }

    async fn assemble(&self, facts: Vec<Fact>) -> Result<Instance> {
        let max_value = facts
            .iter()
            .filter_map(|fact| match fact.terms.first() {
                Some(Term::Int(value)) => Some(*value),
                _ => None,
            })
            .max();

        let max_value = max_value.ok_or_else(|| GenError::ProcessingError {
            message: "No values were sampled".to_string(),
        })?;

        // 三條摘要事實：值域、數量、最大值
        let summary = vec![
            Fact::new("dom", vec![Term::Range(1, self.config.domain_size())]),
            Fact::int("num", facts.len() as i64),
            Fact::int("max", max_value),
        ];

        let text = Instance::render(&facts, &summary);
        let stats = InstanceStats {
            fact_count: facts.len(),
            max_value: Some(max_value),
            domain_size: self.config.domain_size(),
        };

        Ok(Instance {
            facts,
            summary,
            text,
            stats,
        })
    }

    async fn emit(&self, instance: Instance) -> Result<String> {
        let file_name = self.config.file_name().to_string();

        tracing::debug!(
            "Writing {} bytes to storage as {}",
            instance.text.len(),
            file_name
        );
        self.storage
            .write_file(&file_name, instance.text.as_bytes())
            .await?;

        Ok(file_name)
    }
}
