use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::{Catalog, Rank, TimeDivision};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else if let Err(e) = subscriber.try_init() {
        eprintln!("Error: Failed to set up logging: {}", e);
    }
}

/// Division literal for hand-built test catalogs.
pub fn division(
    id: &str,
    rank: Rank,
    start_mya: f64,
    end_mya: f64,
    parent_id: Option<&str>,
) -> TimeDivision {
    let mut name = id.to_string();
    if let Some(first) = name.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    TimeDivision {
        id: id.to_string(),
        name,
        rank,
        start_mya,
        end_mya,
        parent_id: parent_id.map(str::to_string),
        color: None,
    }
}

/// A small valid catalog: one eon, two eras, three periods.
pub fn small_catalog() -> Catalog {
    Catalog::new(vec![
        division("phanerozoic", Rank::Eon, 541.0, 0.0, None),
        division("paleozoic", Rank::Era, 541.0, 251.9, Some("phanerozoic")),
        division("mesozoic", Rank::Era, 251.9, 66.0, Some("phanerozoic")),
        division("cambrian", Rank::Period, 541.0, 485.4, Some("paleozoic")),
        division("ordovician", Rank::Period, 485.4, 443.8, Some("paleozoic")),
        division("jurassic", Rank::Period, 201.3, 145.0, Some("mesozoic")),
    ])
    .unwrap_or_else(|e| panic!("small test catalog is invalid: {e}"))
}
