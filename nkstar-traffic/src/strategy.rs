// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! How the routes of a traffic set are spread across threads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Execution strategy for an aggregation run.
///
/// Both strategies fold chunks of the traffic set into partial statistics
/// and combine them, so they produce identical results.
#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Route every pair on the calling thread
    Sequential,

    /// Route chunks of pairs on a rayon thread pool
    #[default]
    Parallel,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
