use crate::config::GeneratorKind;
use crate::utils::error::{GenError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub suite: SuiteSection,
    pub generator: GeneratorSection,
    pub instances: InstancesSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteSection {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSection {
    pub kind: GeneratorKind,
    pub predicate: Option<String>,
    pub domain_size: Option<i64>,
    pub max_tag: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstancesSection {
    pub counts: Vec<usize>,
    pub repetitions: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: String,
    pub filename_template: Option<String>,
    pub manifest: Option<bool>,
}

impl SuiteConfig {
    /// 從 TOML 檔案載入套件配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GenError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GenError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INSTANCE_DIR})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn predicate(&self) -> &str {
        self.generator.predicate.as_deref().unwrap_or("sel")
    }

    pub fn domain_size(&self) -> i64 {
        self.generator.domain_size.unwrap_or(1000)
    }

    pub fn max_tag(&self) -> u32 {
        self.generator.max_tag.unwrap_or(3)
    }

    pub fn repetitions(&self) -> usize {
        self.instances.repetitions.unwrap_or(1)
    }

    pub fn filename_template(&self) -> &str {
        self.output
            .filename_template
            .as_deref()
            .unwrap_or("instance{count}_{rep}.lp")
    }

    pub fn manifest_enabled(&self) -> bool {
        self.output.manifest.unwrap_or(true)
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("suite.name", &self.suite.name)?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_predicate_name("generator.predicate", self.predicate())?;
        validation::validate_range("generator.domain_size", self.domain_size(), 1, i64::MAX)?;
        validation::validate_positive_number("instances.repetitions", self.repetitions(), 1)?;

        if self.instances.counts.is_empty() {
            return Err(GenError::MissingConfigError {
                field: "instances.counts".to_string(),
            });
        }

        for &count in &self.instances.counts {
            validation::validate_positive_number("instances.counts", count, 1)?;

            if self.generator.kind == GeneratorKind::Selection && count as i64 > self.domain_size()
            {
                return Err(GenError::InvalidConfigValueError {
                    field: "instances.counts".to_string(),
                    value: count.to_string(),
                    reason: format!(
                        "Cannot draw {} distinct values from a domain of size {}",
                        count,
                        self.domain_size()
                    ),
                });
            }
        }

        // 檔名樣板必須能區分不同的實例，否則檔案會互相覆蓋
        let template = self.filename_template();
        if self.instances.counts.len() > 1 && !template.contains("{count}") {
            return Err(GenError::InvalidConfigValueError {
                field: "output.filename_template".to_string(),
                value: template.to_string(),
                reason: "Template must contain {count} when multiple counts are configured"
                    .to_string(),
            });
        }
        if self.repetitions() > 1 && !template.contains("{rep}") {
            return Err(GenError::InvalidConfigValueError {
                field: "output.filename_template".to_string(),
                value: template.to_string(),
                reason: "Template must contain {rep} when repetitions > 1".to_string(),
            });
        }

        Ok(())
    }
}

impl Validate for SuiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_suite_config() {
        let toml_content = r#"
[suite]
name = "selection-small"
description = "Small selection instances"
version = "1.0.0"

[generator]
kind = "selection"
domain_size = 100

[instances]
counts = [5, 10]
repetitions = 2

[output]
path = "./test-instances"
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.suite.name, "selection-small");
        assert_eq!(config.generator.kind, GeneratorKind::Selection);
        assert_eq!(config.domain_size(), 100);
        assert_eq!(config.predicate(), "sel");
        assert_eq!(config.repetitions(), 2);
        assert_eq!(config.filename_template(), "instance{count}_{rep}.lp");
        assert!(config.manifest_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_INSTANCE_DIR", "/tmp/instances");

        let toml_content = r#"
[suite]
name = "env-test"

[generator]
kind = "successors"

[instances]
counts = [3]

[output]
path = "${TEST_INSTANCE_DIR}"
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.path, "/tmp/instances");

        std::env::remove_var("TEST_INSTANCE_DIR");
    }

    #[test]
    fn test_count_exceeding_domain_fails_validation() {
        let toml_content = r#"
[suite]
name = "too-big"

[generator]
kind = "selection"
domain_size = 10

[instances]
counts = [20]

[output]
path = "./out"
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_template_without_count_placeholder_fails() {
        let toml_content = r#"
[suite]
name = "bad-template"

[generator]
kind = "selection"

[instances]
counts = [5, 10]

[output]
path = "./out"
filename_template = "instance.lp"
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_counts_fails() {
        let toml_content = r#"
[suite]
name = "empty"

[generator]
kind = "selection"

[instances]
counts = []

[output]
path = "./out"
"#;

        let config = SuiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[suite]
name = "file-test"

[generator]
kind = "tag-requests"
max_tag = 4

[instances]
counts = [100]

[output]
path = "./out"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SuiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.suite.name, "file-test");
        assert_eq!(config.generator.kind, GeneratorKind::TagRequests);
        assert_eq!(config.max_tag(), 4);
    }
}
