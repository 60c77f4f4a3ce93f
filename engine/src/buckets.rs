//! FILENAME: engine/src/buckets.rs
//! PURPOSE: Derives the two categorical age bucketizations from the numeric age.
//! CONTEXT: This file contains the `Decade` bucket (dynamic ten-year bins whose
//! count depends on the oldest customer in the data) and the `LifeStage` bucket
//! (six fixed lifecycle bins). Both are attached to every record once at load
//! time and never recomputed.

use std::fmt;

use serde::Serialize;

/// A ten-year age bucket, identified by its lower bound (0, 10, 20, ...).
///
/// Buckets are contiguous and left-closed/right-open: age `a` belongs to
/// `[10k, 10k+10)` where `k = a / 10`. Ordering is numeric on the lower
/// bound, so `100-109` sorts after `90-99` where a plain string sort on the
/// labels would put it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decade(u32);

impl Decade {
    /// Returns the bucket containing `age`.
    pub fn of(age: u32) -> Self {
        Decade((age / 10) * 10)
    }

    /// Lower bound of the bucket, inclusive.
    pub fn start(self) -> u32 {
        self.0
    }

    /// Upper bound of the bucket, inclusive.
    pub fn end(self) -> u32 {
        self.0 + 9
    }

    /// Display label, e.g. `"20-29"`.
    pub fn label(self) -> String {
        format!("{}-{}", self.0, self.0 + 9)
    }

    /// All buckets from `0-9` through the one containing `max_age`.
    ///
    /// The result is gapless and covers every age in `[0, max_age]`; its
    /// length depends on the data, not on a fixed bucket count.
    pub fn spans_to(max_age: u32) -> Vec<Decade> {
        (0..=max_age / 10).map(|k| Decade(k * 10)).collect()
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.0 + 9)
    }
}

// Serialized as the display label so renderers receive "20-29", not 20.
impl Serialize for Decade {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// One of six fixed lifecycle buckets over the ages 18 through 99.
///
/// Bins are left-closed/right-open over the boundaries 18, 25, 35, 45, 55,
/// 65 and 100: age 24 is the last `18-25` age and age 25 opens `26-35`.
/// Ages below 18 or from 100 up carry no stage at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LifeStage {
    YoungAdult,    // 18-25
    EarlyCareer,   // 26-35
    MidCareer,     // 36-45
    Established,   // 46-55
    PreRetirement, // 56-65
    Senior,        // 65+
}

impl LifeStage {
    /// Every stage, in ascending age order. Grids over this dimension carry
    /// all six rows even when some have no matching records.
    pub const ALL: [LifeStage; 6] = [
        LifeStage::YoungAdult,
        LifeStage::EarlyCareer,
        LifeStage::MidCareer,
        LifeStage::Established,
        LifeStage::PreRetirement,
        LifeStage::Senior,
    ];

    /// Returns the stage containing `age`, or `None` outside `[18, 100)`.
    pub fn from_age(age: u32) -> Option<LifeStage> {
        match age {
            18..=24 => Some(LifeStage::YoungAdult),
            25..=34 => Some(LifeStage::EarlyCareer),
            35..=44 => Some(LifeStage::MidCareer),
            45..=54 => Some(LifeStage::Established),
            55..=64 => Some(LifeStage::PreRetirement),
            65..=99 => Some(LifeStage::Senior),
            _ => None,
        }
    }

    /// Display label, e.g. `"26-35"`.
    pub fn label(self) -> &'static str {
        match self {
            LifeStage::YoungAdult => "18-25",
            LifeStage::EarlyCareer => "26-35",
            LifeStage::MidCareer => "36-45",
            LifeStage::Established => "46-55",
            LifeStage::PreRetirement => "56-65",
            LifeStage::Senior => "65+",
        }
    }

    /// Position of this stage within [`LifeStage::ALL`].
    pub fn index(self) -> usize {
        match self {
            LifeStage::YoungAdult => 0,
            LifeStage::EarlyCareer => 1,
            LifeStage::MidCareer => 2,
            LifeStage::Established => 3,
            LifeStage::PreRetirement => 4,
            LifeStage::Senior => 5,
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Serialized as the display label, matching Decade.
impl Serialize for LifeStage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self.label())
    }
}
