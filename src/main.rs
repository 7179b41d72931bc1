use taskdeck::commands::Cli;

fn main() -> anyhow::Result<()> {
    // Structured logging is only wired up when the user asks for it;
    // normal sessions print plain console messages.
    if std::env::var("TASKDECK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Cli::menu()
}
