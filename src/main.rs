use clap::Parser;
use profile_readme::utils::{logger, validation::Validate};
use profile_readme::{
    collect_profile, CliConfig, LinePrompter, LocalStorage, ProfileConfig, ReadmeEngine,
    ReadmeError, Result,
};
use std::io::{self, Write};

fn load_profile(config: &CliConfig) -> Result<ProfileConfig> {
    if config.needs_interactive_setup() {
        if !config.interactive {
            tracing::warn!(
                "⚠️  Configuration file {} not found. Starting interactive setup...",
                config.config
            );
        }

        let stdin = io::stdin();
        let profile = if config.stdout {
            // keep prompts out of the generated document
            collect_profile(&mut LinePrompter::new(stdin.lock(), io::stderr()))?
        } else {
            collect_profile(&mut LinePrompter::new(stdin.lock(), io::stdout()))?
        };
        profile.save(&config.config)?;
        return Ok(profile);
    }

    let profile = ProfileConfig::from_file(&config.config)?;
    tracing::info!("✅ Loaded configuration from {}", config.config);
    Ok(profile)
}

fn run(config: &CliConfig) -> Result<Option<String>> {
    config.validate()?;

    let profile = load_profile(config)?;
    profile.validate()?;

    let engine = ReadmeEngine::new(
        LocalStorage::new(config.output_dir.clone()),
        config.output_file.clone(),
    );

    if config.stdout {
        let content = engine.render(&profile)?;
        let mut out = io::stdout().lock();
        writeln!(out, "{}", content)?;
        return Ok(None);
    }

    engine.run(&profile).map(Some)
}

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting GitHub Profile README Generator");
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(Some(output_file)) => {
            let path = std::path::Path::new(&config.output_dir).join(output_file);
            println!("\n🎉 Your GitHub Profile README is ready!");
            println!("📁 File saved as: {}", path.display());
            println!("🔗 Copy the content to your GitHub profile repository!");
        }
        Ok(None) => {}
        Err(e) => report_and_exit(&e),
    }
}

fn report_and_exit(e: &ReadmeError) -> ! {
    tracing::error!(
        "❌ README generation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}
