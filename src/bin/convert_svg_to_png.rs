use clap::Parser;
use std::path::Path;
use std::process;
use vsx_tools::core::manifest::{self, MANIFEST_FILE};
use vsx_tools::utils::{logger, validation::Validate};
use vsx_tools::{ConversionRequest, ConvertConfig, ConvertEngine, ToolError};

fn main() {
    let config = ConvertConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("Convert config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        process::exit(1);
    }

    println!("Converting SVG to PNG:");
    println!("  Input: {}", config.input.display());
    println!("  Output: {}", config.output.display());
    println!("  Size: {}x{}px", config.size, config.size);
    println!();

    let engine = ConvertEngine::with_default_backends();
    let request = ConversionRequest {
        input: config.input,
        output: config.output,
        size: config.size,
    };

    match engine.run(&request) {
        Ok(summary) => {
            println!("✅ Conversion successful!");
            println!("   Output: {}", summary.output.display());
            println!("   Size: {} bytes", summary.bytes);
            println!("   Dimensions: {}x{}px", summary.size, summary.size);

            match manifest::update_icon_reference(
                Path::new(MANIFEST_FILE),
                &request.input,
                &request.output,
            ) {
                Ok(true) => println!("   Updated {} to reference the PNG icon", MANIFEST_FILE),
                Ok(false) => {}
                Err(e) => tracing::warn!("Manifest update skipped: {}", e),
            }
        }
        Err(e) => {
            match &e {
                ToolError::SvgNotFound { .. } => {
                    eprintln!("❌ Error: {}", e);
                    eprintln!("💡 Usage: convert-svg-to-png [INPUT] [OUTPUT] [SIZE]");
                    eprintln!("💡 Example: convert-svg-to-png icon.svg icon.png 128");
                }
                ToolError::NoBackendAvailable => {
                    eprintln!("❌ {}!", e);
                    eprintln!();
                    eprintln!("You can install one of these options:");
                    for backend in engine.backends() {
                        eprintln!("  {}: {}", backend.name(), backend.install_hint());
                    }
                }
                _ => {
                    eprintln!("❌ {}", e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                }
            }
            process::exit(1);
        }
    }
}
