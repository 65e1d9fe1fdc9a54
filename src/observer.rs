// Observer Pattern - weather displays following a measurement subject
// The subject keeps a set of observers and calls each one exactly once per
// change, handing itself over so observers pull what they need.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// ============================================================================
// Interfaces
// ============================================================================

pub trait Observer {
    fn update(&mut self, subject: &WeatherData);
}

pub type SharedObserver = Arc<Mutex<dyn Observer + Send>>;

pub trait Subject {
    /// Adds an observer. Returns `false` if this exact observer is already attached.
    fn attach(&mut self, observer: SharedObserver) -> bool;

    /// Removes an observer by identity. Returns `false` if it was not attached.
    fn detach<O: Observer + Send + ?Sized>(&mut self, observer: &Arc<Mutex<O>>) -> bool;

    fn notify(&self);
}

// A panicking observer must not take the whole subject down with it.
fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn same_observer<A: ?Sized, B: ?Sized>(a: &Arc<Mutex<A>>, b: &Arc<Mutex<B>>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

// ============================================================================
// Subject
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurements {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

/// Readings start at zero until the first `set_measurements`.
#[derive(Default)]
pub struct WeatherData {
    measurements: Measurements,
    observers: Vec<SharedObserver>,
}

impl WeatherData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_measurements(&mut self, temperature: f64, humidity: f64, pressure: f64) {
        self.measurements = Measurements {
            temperature,
            humidity,
            pressure,
        };
        self.notify();
    }

    pub fn measurements(&self) -> Measurements {
        self.measurements
    }

    pub fn temperature(&self) -> f64 {
        self.measurements.temperature
    }

    pub fn humidity(&self) -> f64 {
        self.measurements.humidity
    }

    pub fn pressure(&self) -> f64 {
        self.measurements.pressure
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Subject for WeatherData {
    fn attach(&mut self, observer: SharedObserver) -> bool {
        if self.observers.iter().any(|o| same_observer(o, &observer)) {
            tracing::debug!("observer already attached");
            return false;
        }
        self.observers.push(observer);
        tracing::debug!(count = self.observers.len(), "observer attached");
        true
    }

    fn detach<O: Observer + Send + ?Sized>(&mut self, observer: &Arc<Mutex<O>>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !same_observer(o, observer));
        let removed = self.observers.len() != before;
        tracing::debug!(removed, count = self.observers.len(), "observer detach");
        removed
    }

    fn notify(&self) {
        for observer in &self.observers {
            lock(observer).update(self);
        }
    }
}

// ============================================================================
// Observers
// ============================================================================

#[derive(Debug, Default)]
pub struct CurrentConditionsDisplay {
    temperature: f64,
    humidity: f64,
    lines: Vec<String>,
}

impl CurrentConditionsDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a display already attached to `subject`.
    pub fn register(subject: &mut WeatherData) -> Arc<Mutex<Self>> {
        let display = Arc::new(Mutex::new(Self::new()));
        subject.attach(display.clone());
        display
    }

    pub fn display(&self) -> String {
        format!(
            "Current conditions: {}F degrees and {}% humidity",
            self.temperature, self.humidity
        )
    }

    /// Every line rendered so far, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Observer for CurrentConditionsDisplay {
    fn update(&mut self, subject: &WeatherData) {
        self.temperature = subject.temperature();
        self.humidity = subject.humidity();
        let line = self.display();
        self.lines.push(line);
    }
}

/// Tracks min, max and average temperature across all updates.
#[derive(Debug, Default)]
pub struct StatisticsDisplay {
    readings: u32,
    sum: f64,
    min: f64,
    max: f64,
}

impl StatisticsDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn readings(&self) -> u32 {
        self.readings
    }

    pub fn average(&self) -> Option<f64> {
        (self.readings > 0).then(|| self.sum / f64::from(self.readings))
    }

    pub fn min(&self) -> Option<f64> {
        (self.readings > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (self.readings > 0).then_some(self.max)
    }

    pub fn display(&self) -> String {
        match self.average() {
            Some(avg) => format!("Avg/Max/Min temperature = {:.1}/{}/{}", avg, self.max, self.min),
            None => "Avg/Max/Min temperature = n/a".to_string(),
        }
    }
}

impl Observer for StatisticsDisplay {
    fn update(&mut self, subject: &WeatherData) {
        let temperature = subject.temperature();
        if self.readings == 0 {
            self.min = temperature;
            self.max = temperature;
        } else {
            self.min = self.min.min(temperature);
            self.max = self.max.max(temperature);
        }
        self.sum += temperature;
        self.readings += 1;
    }
}

pub fn demo(out: &mut impl Write) -> io::Result<()> {
    let mut weather = WeatherData::new();
    let current = CurrentConditionsDisplay::register(&mut weather);
    let stats = Arc::new(Mutex::new(StatisticsDisplay::new()));
    weather.attach(stats.clone());

    for (temperature, humidity, pressure) in [(80.0, 65.0, 30.4), (82.0, 70.0, 29.2), (78.0, 90.0, 29.2)] {
        weather.set_measurements(temperature, humidity, pressure);
        writeln!(out, "{}", lock(&current).display())?;
    }
    writeln!(out, "{}", lock(&stats).display())?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
