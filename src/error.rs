//! Error type shared by every pattern in the crate.

use std::io;
use thiserror::Error;

use crate::price::Price;

/// Every failure a pattern illustration can report.
///
/// Most operations in this crate are total; the variants below cover the
/// few invalid-input paths (unknown factory keys, malformed chains, bad
/// measurements) plus the I/O and parsing needed to load a menu file.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid shape type: {0}")]
    InvalidArgument(String),

    #[error("topping '{suffix}' has no item to wrap")]
    MissingInner { suffix: String },

    #[error("chain has no base item")]
    EmptyChain,

    #[error("chain already has a base item")]
    DuplicateBase,

    #[error("topping '{suffix}' takes the price out of range")]
    PriceOutOfRange { suffix: String },

    #[error("base item cost must not be negative, got {0}")]
    NegativeBaseCost(Price),

    #[error("invalid price '{0}'")]
    InvalidPrice(String),

    #[error("invalid {field}: {value} (expected a finite, non-negative number)")]
    InvalidMeasurement { field: &'static str, value: f64 },

    #[error("no {format} file loaded")]
    NothingLoaded { format: &'static str },

    #[error("failed to read menu: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse menu: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
