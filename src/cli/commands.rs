//! Command dispatch: resolve arguments against the catalog and print results

use std::io::{self, BufRead};

use clap::CommandFactory;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::facts::{facts_for, key_events};
use crate::application::ordering::resolve_all;
use crate::application::{
    canonical_order, chronology_challenge, classify_placement, default_placement_targets,
    is_chronological, placement_challenge, random_question, ApplicationError, Placement, Sampler,
    TimelineScale,
};
use crate::cli::args::{ChallengeCommands, Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{
    build_forest, catalog, format_duration, normalize_id, Catalog, Rank, TimeDivision,
};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };
    let settings = Settings::load(cli.config.as_deref())?;
    let seed = cli.seed.or(settings.seed);
    debug!(?settings, ?seed, "settings loaded");
    let catalog = catalog();

    match command {
        Commands::Show { id } => cmd_show(catalog, id),
        Commands::Children { id } => cmd_children(catalog, id),
        Commands::Ancestors { id } => cmd_ancestors(catalog, id),
        Commands::Tree => cmd_tree(catalog),
        Commands::Range { start, end } => cmd_range(catalog, *start, *end),
        Commands::Overlaps { id } => cmd_overlaps(catalog, id),
        Commands::Sample { count, rank } => cmd_sample(
            catalog,
            count.unwrap_or(settings.sample_count),
            *rank,
            seed,
        ),
        Commands::Order { ids } => cmd_order(catalog, ids),
        Commands::Match { item, target } => cmd_match(catalog, item, target),
        Commands::Position { mya } => cmd_position(catalog, *mya),
        Commands::Width { start, end } => cmd_width(catalog, *start, *end),
        Commands::Challenge { command } => match command {
            ChallengeCommands::Chronology { difficulty } => {
                cmd_chronology(catalog, difficulty.unwrap_or(settings.difficulty), seed)
            }
            ChallengeCommands::Placement { targets } => cmd_placement(catalog, targets, seed),
        },
        Commands::Quiz => cmd_quiz(catalog, seed),
        Commands::Config { command } => cmd_config(command, &settings),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "geotime", &mut io::stdout());
            Ok(())
        }
    }
}

/// Normalize and resolve a user supplied id.
fn resolve<'c>(catalog: &'c Catalog, raw: &str) -> CliResult<&'c TimeDivision> {
    let id = normalize_id(raw);
    catalog
        .lookup(&id)
        .ok_or_else(|| ApplicationError::UnknownDivision(raw.to_string()).into())
}

fn print_divisions(divisions: &[&TimeDivision]) {
    for division in divisions {
        output::division_line(division);
    }
}

#[instrument(skip(catalog))]
fn cmd_show(catalog: &Catalog, id: &str) -> CliResult<()> {
    let division = resolve(catalog, id)?;
    let scale = TimelineScale::for_catalog(catalog);
    let (left, width) = scale.span_of(division);

    output::header(&division.name);
    output::field("id", &division.id);
    output::field("rank", &division.rank);
    output::field("span", &format!("{}–{} Mya", division.start_mya, division.end_mya));
    output::field("duration", &format_duration(division.duration()));
    output::field("timeline", &format!("{left:.2}% + {width:.2}%"));
    if let Some(color) = &division.color {
        output::field("color", color);
    }
    let lineage = catalog
        .ancestors_of(division)
        .iter()
        .map(|a| a.name.as_str())
        .join(" › ");
    if !lineage.is_empty() {
        output::field("within", &lineage);
    }
    let children = catalog.children_of(&division.id);
    if !children.is_empty() {
        output::field("contains", &children.iter().map(|c| c.name.as_str()).join(", "));
    }
    if division.is_forward_looking() {
        output::detail("(hypothetical: extends into the future)");
    }

    output::header("Facts");
    for fact in facts_for(&division.id) {
        output::detail(&format!("• {fact}"));
    }
    let events = key_events(&division.id);
    if !events.is_empty() {
        output::header("Key events");
        for event in events {
            output::detail(&format!("• {event}"));
        }
    }
    Ok(())
}

#[instrument(skip(catalog))]
fn cmd_children(catalog: &Catalog, id: &str) -> CliResult<()> {
    let children = catalog.children_of(&normalize_id(id));
    debug!("{} children", children.len());
    print_divisions(&children);
    Ok(())
}

#[instrument(skip(catalog))]
fn cmd_ancestors(catalog: &Catalog, id: &str) -> CliResult<()> {
    let division = resolve(catalog, id)?;
    print_divisions(&catalog.ancestors_of(division));
    Ok(())
}

#[instrument(skip(catalog))]
fn cmd_tree(catalog: &Catalog) -> CliResult<()> {
    for tree in build_forest(catalog) {
        output::info(&tree.to_tree_string());
    }
    Ok(())
}

#[instrument(skip(catalog))]
fn cmd_range(catalog: &Catalog, start: f64, end: f64) -> CliResult<()> {
    print_divisions(&catalog.periods_in_range(start, end));
    Ok(())
}

#[instrument(skip(catalog))]
fn cmd_overlaps(catalog: &Catalog, id: &str) -> CliResult<()> {
    let division = resolve(catalog, id)?;
    print_divisions(&catalog.overlapping_with(&division.id));
    Ok(())
}

#[instrument(skip(catalog))]
fn cmd_sample(
    catalog: &Catalog,
    count: usize,
    rank: Option<Rank>,
    seed: Option<u64>,
) -> CliResult<()> {
    let mut sampler = Sampler::from_seed_option(seed);
    print_divisions(&sampler.sample(catalog, count, rank));
    Ok(())
}

#[instrument(skip(catalog))]
fn cmd_order(catalog: &Catalog, ids: &[String]) -> CliResult<()> {
    let normalized: Vec<String> = ids.iter().map(|id| normalize_id(id)).collect();
    let divisions = resolve_all(catalog, &normalized)?;
    if is_chronological(&divisions) {
        output::success("Correct! The divisions are in chronological order.");
    } else {
        output::failure("Not quite right. Oldest first is:");
        for division in canonical_order(&divisions) {
            output::detail(&division.name);
        }
    }
    Ok(())
}

#[instrument(skip(catalog))]
fn cmd_match(catalog: &Catalog, item: &str, target: &str) -> CliResult<()> {
    let item = resolve(catalog, item)?;
    let target = resolve(catalog, target)?;
    match classify_placement(catalog, &item.id, &target.id) {
        Placement::Correct => output::success(&format!(
            "Correct! The {} belongs to the {}.",
            item.name, target.name
        )),
        Placement::Ancestor => output::failure(&format!(
            "The {} lies within the {}, but that is not its direct parent.",
            item.name, target.name
        )),
        Placement::Wrong | Placement::UnknownItem => output::failure(&format!(
            "The {} does not belong to the {}.",
            item.name, target.name
        )),
    }
    Ok(())
}

fn cmd_position(catalog: &Catalog, mya: f64) -> CliResult<()> {
    let scale = TimelineScale::for_catalog(catalog);
    output::info(&format!("{:.2}", scale.position_of(mya)));
    Ok(())
}

fn cmd_width(catalog: &Catalog, start: f64, end: f64) -> CliResult<()> {
    let scale = TimelineScale::for_catalog(catalog);
    output::info(&format!("{:.2}", scale.width_of(start, end)));
    Ok(())
}

#[instrument(skip(catalog))]
fn cmd_chronology(
    catalog: &Catalog,
    difficulty: crate::application::Difficulty,
    seed: Option<u64>,
) -> CliResult<()> {
    let mut sampler = Sampler::from_seed_option(seed);
    let challenge = chronology_challenge(&mut sampler, catalog, difficulty);
    output::header(&format!(
        "Arrange oldest to youngest ({difficulty}), then check with `geotime order`:"
    ));
    output::info(&challenge.iter().map(|d| d.id.as_str()).join(" "));
    Ok(())
}

#[instrument(skip(catalog))]
fn cmd_placement(catalog: &Catalog, targets: &[String], seed: Option<u64>) -> CliResult<()> {
    let target_ids: Vec<String> = if targets.is_empty() {
        default_placement_targets(catalog)
            .iter()
            .map(|d| d.id.clone())
            .collect()
    } else {
        targets.iter().map(|t| normalize_id(t)).collect()
    };
    let target_refs: Vec<&str> = target_ids.iter().map(String::as_str).collect();
    let mut sampler = Sampler::from_seed_option(seed);
    let item = placement_challenge(&mut sampler, catalog, &target_refs)?;
    output::header(&format!(
        "Where does the {} belong? Check with `geotime match {} <target>`:",
        item.name, item.id
    ));
    output::info(&target_refs.join(" "));
    Ok(())
}

#[instrument(skip(catalog))]
fn cmd_quiz(catalog: &Catalog, seed: Option<u64>) -> CliResult<()> {
    let mut sampler = Sampler::from_seed_option(seed);
    let question = random_question(&mut sampler, catalog)?;

    output::header(&question.prompt);
    for (i, option) in question.options.iter().enumerate() {
        output::detail(&format!("{}) {}", i + 1, option));
    }
    output::prompt(&format!("Answer [1-{}]:", question.options.len()));

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let choice = line
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| question.options.get(i))
        .ok_or_else(|| CliError::InvalidArgs(format!("not an option: {}", line.trim())))?;

    if question.is_correct(choice) {
        output::success("Correct! Well done.");
    } else {
        output::failure(&format!(
            "Incorrect. The correct answer is: {}",
            question.answer
        ));
    }
    Ok(())
}

fn cmd_config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::info("no config directory available"),
        },
    }
    Ok(())
}
