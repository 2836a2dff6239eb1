//! Where the current instant comes from.

use std::fmt;
use std::sync::Arc;

use crate::duration::Duration;
use crate::error::Result;
use crate::instant::Instant;
use crate::util::{checked_add, checked_mul};


/// A **time source** gives the current instant, and nothing else.
///
/// The system clock is the obvious one, but tests usually want one that
/// stands still.
pub trait TimeSource: fmt::Debug + Send + Sync {

    /// The current instant.
    fn instant(&self) -> Result<Instant>;

    /// The current instant as milliseconds since the Unix epoch.
    fn millis(&self) -> Result<i64> {
        let instant = self.instant()?;
        checked_add(checked_mul(instant.seconds(), 1000)?, i64::from(instant.nanos() / 1_000_000))
    }
}

/// The operating system’s clock.
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn instant(&self) -> Result<Instant> {
        Ok(Instant::now())
    }
}

/// A source that always gives the same instant.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct FixedTimeSource {
    instant: Instant,
}

impl TimeSource for FixedTimeSource {
    fn instant(&self) -> Result<Instant> {
        Ok(self.instant)
    }
}

/// A source that runs a fixed duration ahead of another one, or behind it
/// if the duration is negative.
#[derive(Debug, Clone)]
pub struct OffsetTimeSource {
    source: Arc<dyn TimeSource>,
    offset: Duration,
}

impl TimeSource for OffsetTimeSource {
    fn instant(&self) -> Result<Instant> {
        self.source.instant()?.checked_add(self.offset)
    }
}


/// The operating system’s clock.
pub fn system() -> Arc<dyn TimeSource> {
    Arc::new(SystemTimeSource)
}

/// A source stuck at the given instant.
pub fn fixed(instant: Instant) -> Arc<dyn TimeSource> {
    Arc::new(FixedTimeSource { instant })
}

/// A source running the given duration away from another one. Offsetting
/// by nothing hands back the same source.
pub fn offset(source: Arc<dyn TimeSource>, offset: Duration) -> Arc<dyn TimeSource> {
    if offset.is_zero() {
        source
    }
    else {
        Arc::new(OffsetTimeSource { source, offset })
    }
}
