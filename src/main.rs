use asp_instgen::domain::ports::Storage;
use asp_instgen::utils::{logger, validation::Validate};
use asp_instgen::{
    CliConfig, GenEngine, GeneratorKind, LocalStorage, Result, SelectionGenerator, StdoutStorage,
    SuccessorGenerator, TagRequestGenerator,
};
use clap::Parser;

async fn generate<S: Storage + 'static>(storage: S, config: CliConfig) -> Result<String> {
    match config.generator {
        GeneratorKind::Selection => {
            GenEngine::new(SelectionGenerator::new(storage, config))
                .run()
                .await
        }
        GeneratorKind::Successors => {
            GenEngine::new(SuccessorGenerator::new(storage, config))
                .run()
                .await
        }
        GeneratorKind::TagRequests => {
            GenEngine::new(TagRequestGenerator::new(storage, config))
                .run()
                .await
        }
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting instgen CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 未指定輸出目錄時寫到 stdout，此時成功訊息只走 stderr 日誌
    let to_stdout = config.output_path.is_none();

    let result = match &config.output_path {
        Some(path) => generate(LocalStorage::new(path.clone()), config.clone()).await,
        None => generate(StdoutStorage::new(), config.clone()).await,
    };

    match result {
        Ok(file_name) => {
            tracing::info!("✅ Instance generation completed successfully!");
            if !to_stdout {
                tracing::info!("📁 Output saved to: {}", file_name);
                println!("✅ Instance generation completed successfully!");
                println!("📁 Output saved to: {}", file_name);
            }
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Instance generation failed: {} (Category: {:?}, Severity: {:?})",
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
