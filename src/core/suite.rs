use crate::config::cli::LocalStorage;
use crate::config::suite_config::SuiteConfig;
use crate::config::GeneratorKind;
use crate::core::selection::SelectionGenerator;
use crate::core::successors::SuccessorGenerator;
use crate::core::tag_requests::TagRequestGenerator;
use crate::core::{ConfigProvider, Generator, Instance, Storage};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-instance view of the suite config, one per generated file.
#[derive(Debug, Clone)]
struct InstanceProfile {
    count: usize,
    domain_size: i64,
    predicate: String,
    max_tag: u32,
    file_name: String,
}

impl ConfigProvider for InstanceProfile {
    fn count(&self) -> usize {
        self.count
    }

    fn domain_size(&self) -> i64 {
        self.domain_size
    }

    fn predicate(&self) -> &str {
        &self.predicate
    }

    fn max_tag(&self) -> u32 {
        self.max_tag
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    pub file: String,
    pub count: usize,
    pub repetition: usize,
    pub fact_count: usize,
    pub max_value: Option<i64>,
    pub domain_size: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteManifest {
    pub suite: String,
    pub description: Option<String>,
    pub generator: GeneratorKind,
    pub generated_at: DateTime<Utc>,
    pub instances: Vec<ManifestEntry>,
}

/// Expands a suite config into a directory of instance files plus an
/// optional `manifest.json` describing what was generated.
pub struct SuiteRunner {
    config: SuiteConfig,
}

impl SuiteRunner {
    pub fn new(config: SuiteConfig) -> Self {
        Self { config }
    }

    fn expand_template(template: &str, count: usize, rep: usize) -> String {
        template
            .replace("{count}", &count.to_string())
            .replace("{rep}", &rep.to_string())
    }

    fn kind_label(kind: GeneratorKind) -> &'static str {
        match kind {
            GeneratorKind::Selection => "selection",
            GeneratorKind::Successors => "successors",
            GeneratorKind::TagRequests => "tag-requests",
        }
    }

    fn header(&self, count: usize, rep: usize) -> String {
        format!(
            "% suite {} | generator={} count={} rep={}\n% generated by asp-instgen {} at {}\n",
            self.config.suite.name,
            Self::kind_label(self.config.generator.kind),
            count,
            rep,
            env!("CARGO_PKG_VERSION"),
            Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
        )
    }

    async fn generate_one(
        &self,
        storage: LocalStorage,
        profile: InstanceProfile,
        rep: usize,
    ) -> Result<Instance> {
        let count = profile.count;
        let generator: Box<dyn Generator> = match self.config.generator.kind {
            GeneratorKind::Selection => Box::new(SelectionGenerator::new(storage, profile)),
            GeneratorKind::Successors => Box::new(SuccessorGenerator::new(storage, profile)),
            GeneratorKind::TagRequests => Box::new(TagRequestGenerator::new(storage, profile)),
        };

        let facts = generator.sample().await?;
        let mut instance = generator.assemble(facts).await?;

        // 套件模式輸出的檔案帶註解表頭，方便日後辨識來源
        instance.text = format!("{}{}", self.header(count, rep), instance.text);

        generator.emit(instance.clone()).await?;
        Ok(instance)
    }

    pub async fn run(&self) -> Result<String> {
        let storage = LocalStorage::new(self.config.output.path.clone());
        let template = self.config.filename_template();
        let mut entries = Vec::new();

        for &count in &self.config.instances.counts {
            for rep in 1..=self.config.repetitions() {
                let file_name = Self::expand_template(template, count, rep);
                let profile = InstanceProfile {
                    count,
                    domain_size: self.config.domain_size(),
                    predicate: self.config.predicate().to_string(),
                    max_tag: self.config.max_tag(),
                    file_name: file_name.clone(),
                };

                let instance = self.generate_one(storage.clone(), profile, rep).await?;
                tracing::info!(
                    "📄 Generated {} ({} facts)",
                    file_name,
                    instance.stats.fact_count
                );

                entries.push(ManifestEntry {
                    file: file_name,
                    count,
                    repetition: rep,
                    fact_count: instance.stats.fact_count,
                    max_value: instance.stats.max_value,
                    domain_size: instance.stats.domain_size,
                });
            }
        }

        if self.config.manifest_enabled() {
            let manifest = SuiteManifest {
                suite: self.config.suite.name.clone(),
                description: self.config.suite.description.clone(),
                generator: self.config.generator.kind,
                generated_at: Utc::now(),
                instances: entries,
            };

            let json = serde_json::to_string_pretty(&manifest)?;
            storage.write_file("manifest.json", json.as_bytes()).await?;
            tracing::info!("🗂️ Wrote manifest.json");
        }

        Ok(self.config.output.path.clone())
    }
}
