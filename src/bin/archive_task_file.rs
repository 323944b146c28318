use clap::Parser;
use std::process;
use vsx_tools::core::archive;
use vsx_tools::utils::{logger, validation::Validate};
use vsx_tools::{ArchiveConfig, ArchiveOutcome, ToolError};

fn main() {
    let config = ArchiveConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("Archive config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        process::exit(1);
    }

    match archive::run(&config.task, &config.workspace) {
        Ok(ArchiveOutcome::Archived { from, to }) => {
            println!("Archived: {} -> {}", from.display(), to.display());
        }
        Ok(ArchiveOutcome::Skipped { path }) => {
            println!("Skip: task is not under .vscode/: {}", path.display());
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e {
                ToolError::TaskNotFound { .. } => 2,
                _ => 1,
            };
            process::exit(exit_code);
        }
    }
}
