use prism_cli::config::PrismConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = prism_cli::cli().get_matches();

    let config = match PrismConfig::load(prism_cli::config_path(&matches)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(2);
        }
    };

    // stdout carries results only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match prism_cli::run(&matches, &config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
