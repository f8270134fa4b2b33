use anyhow::Result;
use clap::Parser;
use gridlock::app::App;
use gridlock::cli::{print_error, Cli, CliContext};
use gridlock::utils::get_log_dir;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.command.is_some() {
        return cli.execute().inspect_err(|e| print_error(&format!("{:#}", e)));
    }

    if cli.no_colors {
        std::env::set_var("NO_COLOR", "1");
    }

    setup_panic_hook();

    // Set up logging directory
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Write to file
    let file_appender = tracing_appender::rolling::never(&log_dir, "gridlock.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    let ctx = CliContext::load(cli.config, cli.preferences)?;
    tracing::info!(
        "Starting gridlock {} (config {:?}, preferences {:?})",
        env!("CARGO_PKG_VERSION"),
        ctx.config_path,
        ctx.preferences_path
    );

    let result = App::new(&ctx.config, &ctx.preferences_path).and_then(|mut app| app.run());
    if let Err(e) = &result {
        tracing::error!("Exiting with error: {:#}", e);
    }

    drop(guard);
    result
}
