// Strategy Pattern - interchangeable shipping cost algorithms
// The calculator delegates to whichever strategy it currently holds; the
// strategy can be swapped at any time.

use std::io::Write;

use crate::error::{Error, Result};
use crate::price::Price;

// ============================================================================
// Input
// ============================================================================

/// What a shipment measures. Every dimension is finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parcel {
    weight: f64,
    volume: f64,
    distance: f64,
}

impl Parcel {
    pub fn new(weight: f64, volume: f64, distance: f64) -> Result<Self> {
        Ok(Self {
            weight: check("weight", weight)?,
            volume: check("volume", volume)?,
            distance: check("distance", distance)?,
        })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }
}

fn check(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidMeasurement { field, value })
    }
}

// ============================================================================
// Strategies
// ============================================================================

pub trait ShippingStrategy {
    fn name(&self) -> &str;

    /// The cost rounded to the nearest cent, so a cost under half a cent
    /// comes out as zero. Fails only if the cost is beyond [`Price::LIMIT`].
    fn calculate_cost(&self, parcel: &Parcel) -> Result<Price>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WeightBasedShipping;

impl WeightBasedShipping {
    pub const RATE: f64 = 0.5;
}

impl ShippingStrategy for WeightBasedShipping {
    fn name(&self) -> &str {
        "weight"
    }

    fn calculate_cost(&self, parcel: &Parcel) -> Result<Price> {
        Price::from_f64(parcel.weight * Self::RATE)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VolumeBasedShipping;

impl VolumeBasedShipping {
    pub const RATE: f64 = 0.1;
}

impl ShippingStrategy for VolumeBasedShipping {
    fn name(&self) -> &str {
        "volume"
    }

    fn calculate_cost(&self, parcel: &Parcel) -> Result<Price> {
        Price::from_f64(parcel.volume * Self::RATE)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceBasedShipping;

impl DistanceBasedShipping {
    pub const RATE: f64 = 0.2;
}

impl ShippingStrategy for DistanceBasedShipping {
    fn name(&self) -> &str {
        "distance"
    }

    fn calculate_cost(&self, parcel: &Parcel) -> Result<Price> {
        Price::from_f64(parcel.distance * Self::RATE)
    }
}

/// A strategy defined by a closure.
pub struct FnStrategy<F> {
    name: String,
    calculate: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(&Parcel) -> Result<Price>,
{
    pub fn new(name: impl Into<String>, calculate: F) -> Self {
        Self {
            name: name.into(),
            calculate,
        }
    }
}

impl<F> ShippingStrategy for FnStrategy<F>
where
    F: Fn(&Parcel) -> Result<Price>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn calculate_cost(&self, parcel: &Parcel) -> Result<Price> {
        (self.calculate)(parcel)
    }
}

// ============================================================================
// Context
// ============================================================================

pub struct ShippingCalculator {
    strategy: Box<dyn ShippingStrategy>,
}

impl ShippingCalculator {
    pub fn new(strategy: Box<dyn ShippingStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn ShippingStrategy>) {
        tracing::debug!(from = self.strategy.name(), to = strategy.name(), "switching strategy");
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn calculate_shipping_cost(&self, parcel: &Parcel) -> Result<Price> {
        self.strategy.calculate_cost(parcel)
    }
}

pub fn demo(out: &mut impl Write) -> Result<()> {
    let mut calculator = ShippingCalculator::new(Box::new(WeightBasedShipping));
    writeln!(out, "{}", calculator.calculate_shipping_cost(&Parcel::new(10.0, 0.0, 0.0)?)?)?;

    calculator.set_strategy(Box::new(VolumeBasedShipping));
    writeln!(out, "{}", calculator.calculate_shipping_cost(&Parcel::new(0.0, 5.0, 0.0)?)?)?;

    calculator.set_strategy(Box::new(DistanceBasedShipping));
    writeln!(out, "{}", calculator.calculate_shipping_cost(&Parcel::new(0.0, 0.0, 100.0)?)?)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_costs() {
        let mut calculator = ShippingCalculator::new(Box::new(WeightBasedShipping));
        let parcel = Parcel::new(10.0, 5.0, 100.0).unwrap();
        assert_eq!(calculator.calculate_shipping_cost(&parcel).unwrap(), Price::new(5, 0));
        assert_eq!(calculator.strategy_name(), "weight");

        calculator.set_strategy(Box::new(VolumeBasedShipping));
        assert_eq!(calculator.calculate_shipping_cost(&parcel).unwrap(), Price::new(0, 50));
        assert_eq!(calculator.strategy_name(), "volume");

        calculator.set_strategy(Box::new(DistanceBasedShipping));
        assert_eq!(calculator.calculate_shipping_cost(&parcel).unwrap(), Price::new(20, 0));
        assert_eq!(calculator.strategy_name(), "distance");
    }

    #[test]
    fn test_closure_strategy() {
        let flat = FnStrategy::new("flat", |_: &Parcel| Ok(Price::new(7, 99)));
        let calculator = ShippingCalculator::new(Box::new(flat));
        let parcel = Parcel::new(1.0, 1.0, 1.0).unwrap();
        assert_eq!(calculator.calculate_shipping_cost(&parcel).unwrap(), Price::new(7, 99));
        assert_eq!(calculator.strategy_name(), "flat");
    }

    #[test]
    fn test_parcel_rejects_bad_measurements() {
        assert!(matches!(
            Parcel::new(-1.0, 0.0, 0.0),
            Err(Error::InvalidMeasurement { field: "weight", .. })
        ));
        assert!(matches!(
            Parcel::new(0.0, f64::NAN, 0.0),
            Err(Error::InvalidMeasurement { field: "volume", .. })
        ));
        assert!(matches!(
            Parcel::new(0.0, 0.0, f64::INFINITY),
            Err(Error::InvalidMeasurement { field: "distance", .. })
        ));
        assert!(Parcel::new(0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_costs_round_to_the_cent() {
        let tiny = Parcel::new(0.0, 0.04, 0.0).unwrap();
        assert_eq!(VolumeBasedShipping.calculate_cost(&tiny).unwrap(), Price::ZERO);

        let small = Parcel::new(0.034, 0.26, 0.0).unwrap();
        assert_eq!(WeightBasedShipping.calculate_cost(&small).unwrap(), Price::from_cents(2));
        assert_eq!(VolumeBasedShipping.calculate_cost(&small).unwrap(), Price::from_cents(3));
    }

    #[test]
    fn test_overflowing_cost() {
        let parcel = Parcel::new(f64::MAX, 0.0, 0.0).unwrap();
        assert!(matches!(
            WeightBasedShipping.calculate_cost(&parcel),
            Err(Error::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "5\n0.5\n20\n");
    }
}
