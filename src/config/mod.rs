pub mod cli;
pub mod suite_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{GenError, Result};
use crate::utils::validation::{
    self, validate_path, validate_positive_number, validate_predicate_name, Validate,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorKind {
    /// Random distinct integers plus dom/num/max summary facts
    Selection,
    /// Successor chain succ(0,1) ... succ(n-1,n)
    Successors,
    /// Deduplicated random tagreq/8 facts over symbolic domains
    TagRequests,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "instgen")]
#[command(about = "Random ASP fixture instance generator")]
pub struct CliConfig {
    /// Number of facts to generate
    #[arg(value_name = "COUNT")]
    pub count: usize,

    #[arg(long, value_enum, default_value_t = GeneratorKind::Selection)]
    pub generator: GeneratorKind,

    #[arg(long, default_value = "1000")]
    pub domain_size: i64,

    #[arg(long, default_value = "sel")]
    pub predicate: String,

    #[arg(long, default_value = "3", help = "Tag symbol count (tag-requests only)")]
    pub max_tag: u32,

    #[arg(long, help = "Write into this directory instead of stdout")]
    pub output_path: Option<String>,

    #[arg(long, default_value = "instance.lp")]
    pub file_name: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("count", self.count, 1)?;
        validation::validate_range("domain_size", self.domain_size, 1, i64::MAX)?;
        validate_predicate_name("predicate", &self.predicate)?;

        // 相異值抽樣：count 不可超過可抽的值域大小
        if self.generator == GeneratorKind::Selection && self.count as i64 > self.domain_size {
            return Err(GenError::InvalidConfigValueError {
                field: "count".to_string(),
                value: self.count.to_string(),
                reason: format!(
                    "Cannot draw {} distinct values from a domain of size {}",
                    self.count, self.domain_size
                ),
            });
        }

        if self.generator == GeneratorKind::TagRequests {
            validate_positive_number("max_tag", self.max_tag as usize, 1)?;
        }

        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
            validation::validate_non_empty_string("file_name", &self.file_name)?;
        }

        Ok(())
    }
}

impl ConfigProvider for CliConfig {
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
