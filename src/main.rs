use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = deckhand::cli::parse_args(std::env::args_os());

    if let Err(err) = deckhand::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
