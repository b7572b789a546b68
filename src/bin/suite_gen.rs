use asp_instgen::config::suite_config::SuiteConfig;
use asp_instgen::config::GeneratorKind;
use asp_instgen::utils::{logger, validation::Validate};
use asp_instgen::SuiteRunner;
use clap::Parser;

#[derive(Parser)]
#[command(name = "suite-gen")]
#[command(about = "Generate a family of ASP instance files from a TOML suite config")]
struct Args {
    /// Path to TOML suite configuration file
    #[arg(short, long, default_value = "instgen-suite.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show what would be generated without writing files
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting suite generator");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let config = match SuiteConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        perform_dry_run(&config);
        return Ok(());
    }

    let runner = SuiteRunner::new(config);

    match runner.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Suite generation completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Suite generation completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Suite generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                asp_instgen::utils::error::ErrorSeverity::Low => 0,
                asp_instgen::utils::error::ErrorSeverity::Medium => 2,
                asp_instgen::utils::error::ErrorSeverity::High => 1,
                asp_instgen::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn kind_label(kind: GeneratorKind) -> &'static str {
    match kind {
        GeneratorKind::Selection => "selection",
        GeneratorKind::Successors => "successors",
        GeneratorKind::TagRequests => "tag-requests",
    }
}

fn display_config_summary(config: &SuiteConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Suite: {} v{}",
        config.suite.name,
        config.suite.version.as_deref().unwrap_or("0.0.0")
    );
    println!("  Generator: {}", kind_label(config.generator.kind));
    println!("  Domain size: {}", config.domain_size());
    println!("  Counts: {:?}", config.instances.counts);
    println!("  Repetitions: {}", config.repetitions());
    println!("  Output: {}", config.output.path);
    println!("  Manifest: {}", config.manifest_enabled());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &SuiteConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("⚙️ Generator:");
    println!("  Kind: {}", kind_label(config.generator.kind));
    match config.generator.kind {
        GeneratorKind::Selection => {
            println!("  Predicate: {}", config.predicate());
            println!("  Values drawn from: 1..={}", config.domain_size());
        }
        GeneratorKind::Successors => {
            println!("  Chain predicate: succ/2");
        }
        GeneratorKind::TagRequests => {
            println!("  Tags: t1..t{}", config.max_tag());
            println!("  Domain symbols: d1..d{}", config.domain_size());
        }
    }

    println!();
    println!("💾 Files that would be generated:");
    let template = config.filename_template();
    for &count in &config.instances.counts {
        for rep in 1..=config.repetitions() {
            let file_name = template
                .replace("{count}", &count.to_string())
                .replace("{rep}", &rep.to_string());
            println!("  {} ({} facts)", file_name, count);
        }
    }

    if config.manifest_enabled() {
        println!("  manifest.json");
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
