// Factory Pattern - shapes created from a string key
// Callers only see `Box<dyn Shape>`; the factory decides which concrete type
// backs each key and refuses keys it does not know.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::error::{Error, Result};

// ============================================================================
// Products
// ============================================================================

pub trait Shape {
    fn name(&self) -> &'static str;
    fn draw(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Circle;

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn draw(&self) -> String {
        "Drawing a circle".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Rectangle;

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn draw(&self) -> String {
        "Drawing a rectangle".to_string()
    }
}

// ============================================================================
// Closed set of built-in kinds
// ============================================================================

/// The shapes this crate ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Circle, ShapeKind::Rectangle];

    pub fn key(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
        }
    }

    pub fn create(self) -> Box<dyn Shape> {
        match self {
            ShapeKind::Circle => Box::new(Circle),
            ShapeKind::Rectangle => Box::new(Rectangle),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ShapeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| Error::InvalidArgument(s.to_string()))
    }
}

// ============================================================================
// Registry-backed factory
// ============================================================================

pub type ShapeConstructor = fn() -> Box<dyn Shape>;

/// Maps keys to constructors. Keys are matched exactly (case-sensitive).
pub struct ShapeFactory {
    registry: BTreeMap<String, ShapeConstructor>,
}

impl ShapeFactory {
    /// A factory that knows only the built-in kinds.
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory.register("circle", || Box::new(Circle));
        factory.register("rectangle", || Box::new(Rectangle));
        factory
    }

    pub fn empty() -> Self {
        Self {
            registry: BTreeMap::new(),
        }
    }

    /// Adds or replaces the constructor for `key`. Returns `true` if the key is new.
    pub fn register(&mut self, key: impl Into<String>, constructor: ShapeConstructor) -> bool {
        let key = key.into();
        tracing::debug!(%key, "registering shape");
        self.registry.insert(key, constructor).is_none()
    }

    pub fn get_shape(&self, key: &str) -> Result<Box<dyn Shape>> {
        match self.registry.get(key) {
            Some(constructor) => {
                tracing::debug!(key, "creating shape");
                Ok(constructor())
            }
            None => {
                tracing::debug!(key, "unknown shape requested");
                Err(Error::InvalidArgument(key.to_string()))
            }
        }
    }

    /// Registered keys in sorted order.
    pub fn kinds(&self) -> Vec<&str> {
        self.registry.keys().map(String::as_str).collect()
    }
}

impl Default for ShapeFactory {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo(out: &mut impl Write) -> io::Result<()> {
    let factory = ShapeFactory::new();
    for key in ["circle", "rectangle", "triangle"] {
        match factory.get_shape(key) {
            Ok(shape) => writeln!(out, "{}: {}", shape.name(), shape.draw())?,
            Err(err) => writeln!(out, "{}: error: {}", key, err)?,
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
