use clap::Parser;
use geotime::cli::output;
use geotime::cli::{execute_command, Cli};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        output::error(&e);
        std::process::exit(e.exit_code());
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a subscriber with formatted output directed to stderr
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotime::util::testing;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        testing::init_test_setup();
        Cli::command().debug_assert();
    }

    #[rstest::rstest]
    #[case(&["geotime", "range", "-1", "-5"])]
    #[case(&["geotime", "range", "-0.1", "0"])]
    #[case(&["geotime", "range", "550", "400"])]
    #[case(&["geotime", "width", "-0.1", "0"])]
    #[case(&["geotime", "width", "0", "-0.1"])]
    #[case(&["geotime", "position", "-0.1"])]
    fn given_negative_bounds_when_parsing_then_accepted(#[case] args: &[&str]) {
        let cli = Cli::try_parse_from(args);

        assert!(cli.is_ok(), "{:?}", cli.err());
    }

    #[test]
    fn given_negative_range_start_when_parsing_then_value_is_kept() {
        let cli = Cli::try_parse_from(["geotime", "range", "-0.1", "0"]).unwrap();

        assert!(matches!(
            cli.command,
            Some(geotime::cli::Commands::Range { start, end }) if start == -0.1 && end == 0.0
        ));
    }
}
