use crate::core::{ConfigProvider, Fact, Generator, Instance, InstanceStats, Storage, Term};
use crate::utils::error::{GenError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Random `tagreq/8` fixtures: a tag symbol, three positive and three
/// negative domain symbols, deduplicated until the requested number of
/// distinct facts has been collected.
pub struct TagRequestGenerator<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> TagRequestGenerator<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn draw_requests(&self, rng: &mut impl Rng) -> Result<Vec<Fact>> {
        let count = self.config.count();
        let domain = self.config.domain_size();
        let max_tag = self.config.max_tag() as i64;

        // 可產生的相異事實上限：tag 數 * 值域^6；溢位代表上限遠大於任何合理 count
        let capacity = (domain as i128)
            .checked_pow(6)
            .and_then(|c| c.checked_mul(max_tag as i128));
        if let Some(capacity) = capacity {
            if count as i128 > capacity {
                return Err(GenError::ProcessingError {
                    message: format!(
                        "Only {} distinct tagreq facts exist for max_tag={} and domain_size={}, \
                         cannot generate {}",
                        capacity, max_tag, domain, count
                    ),
                });
            }
        }

        let mut seen: HashSet<(i64, [i64; 6])> = HashSet::with_capacity(count);
        while seen.len() < count {
            let tag = rng.gen_range(1..=max_tag);
            let mut elements = [0i64; 6];
            for slot in elements.iter_mut() {
                *slot = rng.gen_range(1..=domain);
            }
            seen.insert((tag, elements));
        }

        let facts = seen
            .into_iter()
            .map(|(tag, d)| {
                Fact::new(
                    "tagreq",
                    vec![
                        Term::Sym(format!("t{}", tag)),
                        Term::Sym("p".to_string()),
                        Term::Sym(format!("d{}", d[0])),
                        Term::Sym(format!("d{}", d[1])),
                        Term::Sym(format!("d{}", d[2])),
                        Term::Sym("n".to_string()),
                        Term::Sym(format!("d{}", d[3])),
                        Term::Sym(format!("d{}", d[4])),
                        Term::Sym(format!("d{}", d[5])),
                    ],
                )
            })
            .collect();

        Ok(facts)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Generator for TagRequestGenerator<S, C> {
    async fn sample(&self) -> Result<Vec<Fact>> {
        let mut rng = StdRng::from_entropy();
        self.draw_requests(&mut rng)
    }

    async fn assemble(&self, facts: Vec<Fact>) -> Result<Instance> {
        let text = Instance::render(&facts, &[]);
        let stats = InstanceStats {
            fact_count: facts.len(),
            max_value: None,
            domain_size: self.config.domain_size(),
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
