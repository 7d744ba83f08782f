// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Route traffic over an (n,k)-star network and report node and link loads.
//!
//! See `lib.rs` for details.

use std::io::{self, Write};
use std::str::FromStr;

use anyhow::{Result, bail};
use indicatif::ProgressBar;
use log::{LevelFilter, info};
use nkstar_graph::node::Node;
use nkstar_graph::params::StarParams;
use nkstar_graph::routing::checked_route;
use nkstar_graph::validate::check_route;
use nkstar_traffic::load::Aggregator;
use nkstar_traffic::summary::LoadSummary;
use nkstar_traffic::traffic::Traffic;
use sim_nkstar::config::{Config, Settings};
use sim_nkstar::report::{write_diagnostics, write_route, write_summary};
use simplelog::{ConfigBuilder, SimpleLogger};

/// Take the configured string and convert it to a Level
fn choose_level(lvl: &str) -> LevelFilter {
    match LevelFilter::from_str(lvl) {
        Ok(level) => level,
        Err(_) => {
            let default = LevelFilter::Error;
            println!("Unable to parse level string '{lvl}', defaulting to {default}");
            default
        }
    }
}

fn setup_logging(level: &str) -> Result<()> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    SimpleLogger::init(choose_level(level), config)?;
    Ok(())
}

fn run_single_route(params: &StarParams, source: &Node, destination: &Node) -> Result<()> {
    let route = checked_route(params, source, destination)?;
    let diagnostics = check_route(params, source, destination, &route);

    let mut out = io::stdout().lock();
    write_route(&mut out, params, &route)?;
    write_diagnostics(&mut out, &diagnostics)?;
    out.flush()?;

    if !diagnostics.is_empty() {
        bail!("route from {source} to {destination} is invalid");
    }
    Ok(())
}

fn run_aggregation(settings: &Settings) -> Result<()> {
    let params = settings.params;
    info!(
        "Building {} traffic for {params} ({} nodes)",
        settings.pattern,
        params.num_nodes()
    );
    let traffic = Traffic::from_pattern(
        &params,
        settings.pattern,
        settings.num_pairs,
        settings.seed,
    );

    let progress_bar = ProgressBar::new(traffic.len() as u64);
    let progress = |done: usize| progress_bar.inc(done as u64);

    let mut aggregator = Aggregator::new(params)
        .with_strategy(settings.strategy)
        .with_threads(settings.threads)
        .with_route_validation(settings.validate);
    if settings.progress {
        aggregator = aggregator.with_progress(&progress);
    }
    let stats = aggregator.run(&traffic)?;

    if settings.progress {
        progress_bar.finish();
    }

    stats.check_conservation()?;
    let summary = LoadSummary::new(&params, &stats);

    let mut out = io::stdout().lock();
    write_summary(&mut out, &params, &summary)?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let settings = Config::parse_all_sources()?.resolve()?;
    setup_logging(&settings.log_level)?;

    match &settings.endpoints {
        Some((source, destination)) => run_single_route(&settings.params, source, destination),
        None => run_aggregation(&settings),
    }
}
