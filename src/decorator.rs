// Decorator Pattern - priced items wrapped by toppings
// Each topping owns the item it wraps and adds a description suffix and a
// cost delta on top of it. Nothing is cached: every query walks the chain.

use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::price::Price;

// ============================================================================
// Component trait
// ============================================================================

/// Something with a human-readable description and a price.
pub trait PriceableItem {
    fn describe(&self) -> String;
    fn cost(&self) -> Price;
}

impl<T: PriceableItem + ?Sized> PriceableItem for &T {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn cost(&self) -> Price {
        (**self).cost()
    }
}

impl<T: PriceableItem + ?Sized> PriceableItem for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn cost(&self) -> Price {
        (**self).cost()
    }
}

// Rc/Arc let one inner chain sit under several outer decorators.
impl<T: PriceableItem + ?Sized> PriceableItem for Rc<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn cost(&self) -> Price {
        (**self).cost()
    }
}

impl<T: PriceableItem + ?Sized> PriceableItem for Arc<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn cost(&self) -> Price {
        (**self).cost()
    }
}

// ============================================================================
// Concrete component
// ============================================================================

/// The innermost element of every chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseItem {
    description: String,
    cost: Price,
}

impl BaseItem {
    pub fn new(description: impl Into<String>, cost: Price) -> Result<Self> {
        if cost.is_negative() {
            return Err(Error::NegativeBaseCost(cost));
        }
        Ok(Self {
            description: description.into(),
            cost,
        })
    }

    /// The plain pizza every demo starts from.
    pub fn thin_dough() -> Self {
        Self {
            description: "Thin dough".to_string(),
            cost: Price::new(4, 0),
        }
    }
}

impl PriceableItem for BaseItem {
    fn describe(&self) -> String {
        self.description.clone()
    }

    fn cost(&self) -> Price {
        self.cost
    }
}

// ============================================================================
// Decorators
// ============================================================================

#[derive(Debug, Clone)]
pub struct Mozzarella<P> {
    inner: P,
}

impl<P: PriceableItem> Mozzarella<P> {
    pub const SUFFIX: &'static str = ", mozzarella";
    pub const DELTA: Price = Price::new(0, 50);

    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: PriceableItem> PriceableItem for Mozzarella<P> {
    fn describe(&self) -> String {
        self.inner.describe() + Self::SUFFIX
    }

    fn cost(&self) -> Price {
        self.inner.cost() + Self::DELTA
    }
}

#[derive(Debug, Clone)]
pub struct TomatoSauce<P> {
    inner: P,
}

impl<P: PriceableItem> TomatoSauce<P> {
    pub const SUFFIX: &'static str = ", tomato sauce";
    pub const DELTA: Price = Price::new(0, 35);

    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: PriceableItem> PriceableItem for TomatoSauce<P> {
    fn describe(&self) -> String {
        self.inner.describe() + Self::SUFFIX
    }

    fn cost(&self) -> Price {
        self.inner.cost() + Self::DELTA
    }
}

/// A topping whose suffix and delta are chosen at runtime, e.g. from a menu file.
///
/// The delta may be negative to model a discount.
#[derive(Debug, Clone)]
pub struct Topping<P> {
    inner: P,
    suffix: String,
    delta: Price,
}

impl<P: PriceableItem> Topping<P> {
    pub fn new(inner: P, suffix: impl Into<String>, delta: Price) -> Self {
        Self {
            inner,
            suffix: suffix.into(),
            delta,
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn delta(&self) -> Price {
        self.delta
    }
}

impl<P: PriceableItem> PriceableItem for Topping<P> {
    fn describe(&self) -> String {
        let mut description = self.inner.describe();
        description.push_str(&self.suffix);
        description
    }

    fn cost(&self) -> Price {
        self.inner.cost() + self.delta
    }
}

// ============================================================================
// Fluent wrapping
// ============================================================================

/// Wrap any item without naming the decorator type.
///
/// ```
/// use design_patterns::decorator::{BaseItem, PriceableExt, PriceableItem};
///
/// let pizza = BaseItem::thin_dough().with_mozzarella().with_tomato_sauce();
/// assert_eq!(pizza.describe(), "Thin dough, mozzarella, tomato sauce");
/// assert_eq!(pizza.cost().to_string(), "4.85");
/// ```
pub trait PriceableExt: PriceableItem + Sized {
    fn with_mozzarella(self) -> Mozzarella<Self> {
        Mozzarella::new(self)
    }

    fn with_tomato_sauce(self) -> TomatoSauce<Self> {
        TomatoSauce::new(self)
    }

    fn with_topping(self, suffix: impl Into<String>, delta: Price) -> Topping<Self> {
        Topping::new(self, suffix, delta)
    }

    fn boxed<'a>(self) -> Box<dyn PriceableItem + 'a>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<T: PriceableItem> PriceableExt for T {}

// ============================================================================
// Runtime chain construction
// ============================================================================

/// Builds a boxed chain step by step when the layers are only known at runtime.
///
/// The typed decorators above cannot be built without an inner item; this
/// builder reports the same mistake as an error instead. It also keeps a
/// running total so that a chain whose cost would leave the `Price` range
/// is refused here rather than wrapped.
#[derive(Default)]
pub struct ChainBuilder {
    chain: Option<Box<dyn PriceableItem>>,
    total: Price,
    depth: usize,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, item: BaseItem) -> Result<Self> {
        if self.chain.is_some() {
            return Err(Error::DuplicateBase);
        }
        tracing::debug!(description = %item.describe(), cost = %item.cost(), "chain base set");
        self.total = item.cost();
        self.chain = Some(Box::new(item));
        Ok(self)
    }

    pub fn topping(mut self, suffix: impl Into<String>, delta: Price) -> Result<Self> {
        let suffix = suffix.into();
        let inner = self.chain.take().ok_or_else(|| Error::MissingInner {
            suffix: suffix.clone(),
        })?;
        self.total = match self.total.checked_add(delta) {
            Some(total) => total,
            None => return Err(Error::PriceOutOfRange { suffix }),
        };
        tracing::debug!(%suffix, %delta, depth = self.depth + 1, "wrapping chain");
        self.chain = Some(Box::new(Topping::new(inner, suffix, delta)));
        self.depth += 1;
        Ok(self)
    }

    /// The chain built so far, if a base has been set.
    pub fn current(&self) -> Option<&dyn PriceableItem> {
        self.chain.as_deref()
    }

    /// Number of toppings wrapped around the base.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn build(self) -> Result<Box<dyn PriceableItem>> {
        self.chain.ok_or(Error::EmptyChain)
    }
}

// ============================================================================
// Receipts and demo
// ============================================================================

/// A snapshot of an item's description and price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub ingredients: String,
    pub price: Price,
}

impl Receipt {
    pub fn of<P: PriceableItem + ?Sized>(item: &P) -> Self {
        Self {
            ingredients: item.describe(),
            price: item.cost(),
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Ingredients: {}", self.ingredients)?;
        write!(f, "Price: ${}", self.price)
    }
}

/// Receipts for the reference pizza: plain, then mozzarella, then tomato sauce.
pub fn reference_receipts() -> Vec<Receipt> {
    let pizza = BaseItem::thin_dough();
    let first = Receipt::of(&pizza);

    let pizza = Mozzarella::new(pizza);
    let second = Receipt::of(&pizza);

    let pizza = TomatoSauce::new(pizza);
    let third = Receipt::of(&pizza);

    vec![first, second, third]
}

pub fn write_receipts(receipts: &[Receipt], out: &mut impl Write) -> io::Result<()> {
    for receipt in receipts {
        writeln!(out, "{}", receipt)?;
    }
    Ok(())
}

pub fn demo(out: &mut impl Write) -> io::Result<()> {
    write_receipts(&reference_receipts(), out)
}

// ============================================================================
// Tests
// ============================================================================
