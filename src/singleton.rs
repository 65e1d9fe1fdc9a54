// Singleton Pattern - one process-wide database handle
// The instance lives in a `OnceLock`: created on first access, exactly once,
// even when several threads race for it.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::OnceLock;

static INSTANCE: OnceLock<Database> = OnceLock::new();
static INITIALIZATIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct Database {
    name: &'static str,
    queries: AtomicU64,
}

impl Database {
    // Private: the only way in is `instance()`.
    fn new() -> Self {
        INITIALIZATIONS.fetch_add(1, Ordering::SeqCst);
        tracing::info!("database instance created");
        Self {
            name: "primary",
            queries: AtomicU64::new(0),
        }
    }

    /// The shared instance, created on first call.
    pub fn instance() -> &'static Database {
        INSTANCE.get_or_init(Database::new)
    }

    /// How many times the instance has been constructed: 0 before first access, then 1.
    pub fn initializations() -> usize {
        INITIALIZATIONS.load(Ordering::SeqCst)
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Records a query and returns its sequence number, starting at 1.
    pub fn execute(&self, query: &str) -> u64 {
        let seq = self.queries.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(seq, query, "query executed");
        seq
    }

    pub fn query_count(&self) -> u64 {
        self.queries.load(Ordering::Relaxed)
    }
}

pub fn demo(out: &mut impl Write) -> io::Result<()> {
    let db1 = Database::instance();
    let db2 = Database::instance();
    writeln!(out, "Same instance: {}", std::ptr::eq(db1, db2))?;
    writeln!(out, "Initializations: {}", Database::initializations())?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
