use probebench::bench::SuiteRunner;
use probebench::config::SuiteConfig;
use probebench::error::user_friendly_message;
use tracing::Level;

fn main() {
    // Diagnostics go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = SuiteRunner::new(SuiteConfig::default()).and_then(|runner| runner.run(&mut out));
    if let Err(e) = result {
        eprintln!("{}", user_friendly_message(&e));
        std::process::exit(1);
    }
}
