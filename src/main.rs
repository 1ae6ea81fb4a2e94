//! lingo-tools CLI entry point.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Parser;
use lingo_tools::cli::{Args, CacheAction, Command, MigrateArgs, QuizArgs, SpeakArgs, VocabArgs};
use lingo_tools::config::{Settings, TtsConfig};
use lingo_tools::tts::{FsAudioStore, PiperSynthesizer, TtsService};
use lingo_tools::{logging, migrate, quiz, vocab};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let settings = Settings::load(args.config.as_deref()).context("Failed to load settings")?;

    match args.command {
        Command::Speak(speak_args) => speak(settings.tts, &speak_args),
        Command::Cache { action } => cache(settings.tts, action),
        Command::Migrate(migrate_args) => run_migrate(&migrate_args),
        Command::Quiz(quiz_args) => run_quiz(&quiz_args),
        Command::Vocab(vocab_args) => run_vocab(&vocab_args),
    }
}

fn tts_service(config: TtsConfig) -> Result<TtsService<PiperSynthesizer, FsAudioStore>> {
    let store = FsAudioStore::open(&config.cache_dir).with_context(|| {
        format!("Failed to open audio cache: {}", config.cache_dir.display())
    })?;
    let synthesizer = PiperSynthesizer::new(&config.piper_bin);
    Ok(TtsService::new(synthesizer, store, config))
}

fn speak(config: TtsConfig, args: &SpeakArgs) -> Result<()> {
    let request = args.to_request()?;
    let service = tts_service(config)?;

    let Some(audio) = service.speak(&request).context("Audio cache failure")? else {
        bail!("Failed to generate audio");
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &audio)
                .with_context(|| format!("Failed to write audio to: {}", path.display()))?;
            eprintln!("Audio saved to: {}", path.display());
            eprintln!("  Size: {} bytes", audio.len());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&audio)
                .and_then(|_| stdout.flush())
                .context("Failed to write audio to stdout")?;
        }
    }

    Ok(())
}

fn cache(config: TtsConfig, action: CacheAction) -> Result<()> {
    let service = tts_service(config)?;

    match action {
        CacheAction::Stats => {
            let stats = service.cache_stats().context("Failed to read cache")?;
            println!("Cache directory: {}", stats.location);
            println!("  Files: {}", stats.file_count);
            println!("  Size: {:.2} MB", stats.total_size_mb());
        }
        CacheAction::Clear => {
            let removed = service.clear_cache().context("Failed to clear cache")?;
            println!("Deleted {removed} cached files.");
        }
    }

    Ok(())
}

fn run_migrate(args: &MigrateArgs) -> Result<()> {
    let profile = args.profile();
    println!("Analyzing {}...", args.schema.display());

    let report = migrate::generate(&args.schema, &args.out_dir, profile)
        .context("Failed to generate migration")?;

    if report.is_empty() {
        println!("No camelCase columns found. All columns are already snake_case!");
        return Ok(());
    }

    println!("Found {} tables with camelCase columns", report.tables.len());
    println!("Total columns to migrate: {}", migrate::column_count(&report.tables));
    for path in report.migration_path.iter().chain(report.rollback_path.iter()) {
        println!("✓ Generated: {}", path.display());
    }

    println!("\nMigration Summary:");
    println!("{}", "=".repeat(60));
    print!("{}", migrate::render_summary(&report.tables));

    Ok(())
}

fn run_quiz(args: &QuizArgs) -> Result<()> {
    let experiments = quiz::load_experiments(&args.experiments)
        .with_context(|| format!("Failed to load {}", args.experiments.display()))?;
    println!("Found {} experiments", experiments.len());

    let mut sink = quiz::SqlScriptSink::new();
    let count = quiz::seed(&experiments, &mut sink).context("Failed to generate quiz questions")?;
    sink.write_to(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("Generated {count} quiz questions into {}", args.output.display());
    Ok(())
}

fn run_vocab(args: &VocabArgs) -> Result<()> {
    let languages = vocab::resolve_languages(&args.languages)?;

    let written = vocab::write_templates(&args.out_dir, &languages, args.limit)
        .context("Failed to write vocabulary templates")?;

    for file in &written {
        println!(
            "  ✓ Created {} with {} {} words",
            file.path.display(),
            file.words,
            file.language.name
        );
    }
    println!("Template files created; translations still need to be added.");

    Ok(())
}
