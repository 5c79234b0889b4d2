//! Output sink selection
//!
//! Each severity carries a [`SinkSet`]: any combination of the console and
//! file sinks, including none at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A single output destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sink {
    Console,
    File,
}

impl Sink {
    /// Fan-out order used by the dispatcher.
    pub const ALL: [Sink; 2] = [Sink::Console, Sink::File];

    const fn bit(self) -> u8 {
        match self {
            Sink::Console => 0x01,
            Sink::File => 0x02,
        }
    }
}

/// Set of sinks enabled for one severity.
///
/// # Example
///
/// ```
/// use leveled_logger::{Sink, SinkSet};
///
/// let sinks = SinkSet::CONSOLE | SinkSet::FILE;
/// assert!(sinks.contains(Sink::File));
/// assert_eq!(sinks, SinkSet::ALL);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Sink>", into = "Vec<Sink>")]
pub struct SinkSet(u8);

impl SinkSet {
    pub const NONE: SinkSet = SinkSet(0);
    pub const CONSOLE: SinkSet = SinkSet(0x01);
    pub const FILE: SinkSet = SinkSet(0x02);
    pub const ALL: SinkSet = SinkSet(0x03);

    #[inline]
    pub const fn contains(self, sink: Sink) -> bool {
        self.0 & sink.bit() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, sink: Sink) {
        self.0 |= sink.bit();
    }

    pub fn remove(&mut self, sink: Sink) {
        self.0 &= !sink.bit();
    }

    /// Enabled sinks in fan-out order.
    pub fn iter(self) -> impl Iterator<Item = Sink> {
        Sink::ALL.into_iter().filter(move |sink| self.contains(*sink))
    }
}

impl From<Sink> for SinkSet {
    fn from(sink: Sink) -> Self {
        SinkSet(sink.bit())
    }
}

impl From<Vec<Sink>> for SinkSet {
    fn from(sinks: Vec<Sink>) -> Self {
        sinks.into_iter().collect()
    }
}

impl From<SinkSet> for Vec<Sink> {
    fn from(set: SinkSet) -> Self {
        set.iter().collect()
    }
}

impl FromIterator<Sink> for SinkSet {
    fn from_iter<I: IntoIterator<Item = Sink>>(iter: I) -> Self {
        let mut set = SinkSet::NONE;
        for sink in iter {
            set.insert(sink);
        }
        set
    }
}

impl BitOr for SinkSet {
    type Output = SinkSet;

    fn bitor(self, rhs: SinkSet) -> SinkSet {
        SinkSet(self.0 | rhs.0)
    }
}

impl BitOr<Sink> for SinkSet {
    type Output = SinkSet;

    fn bitor(self, rhs: Sink) -> SinkSet {
        SinkSet(self.0 | rhs.bit())
    }
}

impl BitOrAssign for SinkSet {
    fn bitor_assign(&mut self, rhs: SinkSet) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for SinkSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
