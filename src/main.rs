use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tasnif", about = "تصنيف — bilingual taxonomy browser")]
struct Cli {
    /// Taxonomy dataset (JSON). Defaults to the bundled Arabian dataset.
    dataset: Option<PathBuf>,

    /// Colour theme: default or desert.
    #[arg(long, default_value = "default")]
    theme: String,

    /// Write debug logs to /tmp/tasnif-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/tasnif-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("tasnif debug log started — tail -f /tmp/tasnif-debug.log");
    }

    let records = match &cli.dataset {
        Some(path) => tasnif_data::load_file(path)?,
        None => tasnif_data::sample::records(),
    };
    tracing::info!(records = records.len(), "dataset loaded");

    let config = tasnif_core::config::Config::load()
        .unwrap_or_else(|_| tasnif_core::config::Config::defaults());
    let theme = tasnif_tui::theme::Theme::by_name(&cli.theme);

    tasnif_tui::run(records, config, theme)
}
