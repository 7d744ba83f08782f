// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

//! Shared types.

use std::error::Error;
use std::fmt;

use crate::node::Node;

/// A single label of the (n,k)-star label space `[0, n)`.
pub type Label = u8;

/// An ordered sequence of nodes from a source to a destination.
pub type Route = Vec<Node>;

// Errors

#[macro_export]
/// Build a [StarError] from a format string and arguments
macro_rules! star_error {
    ($($arg:tt)+) => {
        Err($crate::types::StarError(format!($($arg)+)))
    };
}

/// The `StarError` is what should be returned in the case of an error
#[derive(Debug, Clone, PartialEq)]
pub struct StarError(pub String);

impl fmt::Display for StarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {}", self.0)
    }
}

impl Error for StarError {}

/// The StarResult is the return type for checks that produce no value
pub type StarResult = Result<(), StarError>;
