use perf_measures::{run_suite, SuiteConfig, SuiteError};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "perfmeasures.json";

fn main() {
    // On Windows, set the console output codepage to UTF-8
    #[cfg(windows)]
    {
        if !std::process::Command::new("chcp")
            .arg("65001")
            .status()
            .map_or(false, |s| s.success())
        {
            eprintln!("Warning: Failed to set console codepage to UTF-8. Some characters may not display correctly.");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let outcome = SuiteConfig::load_or_default(&config_path)
        .map_err(SuiteError::from)
        .and_then(|config| run_suite(&config));

    if let Err(e) = outcome {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
