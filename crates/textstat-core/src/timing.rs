//! Reading and speaking time estimation.
//!
//! Word count divided by a words-per-minute rate, ceiling-rounded to
//! whole minutes. Three tiers each for reading (125/225/350 wpm) and
//! speaking (100/160/200 wpm); the middle tier matches typical adult
//! rates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reading speed tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ReadingSpeed {
    /// Careful reading (125 wpm).
    Slow,
    /// Typical adult reading (225 wpm).
    #[default]
    Average,
    /// Skimming (350 wpm).
    Fast,
}

impl ReadingSpeed {
    /// Words per minute for this tier.
    pub const fn wpm(self) -> usize {
        match self {
            Self::Slow => 125,
            Self::Average => 225,
            Self::Fast => 350,
        }
    }
}

/// Speaking pace tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SpeakingPace {
    /// Deliberate delivery (100 wpm).
    Slow,
    /// Conversational delivery (160 wpm).
    #[default]
    Average,
    /// Rapid delivery (200 wpm).
    Fast,
}

impl SpeakingPace {
    /// Words per minute for this tier.
    pub const fn wpm(self) -> usize {
        match self {
            Self::Slow => 100,
            Self::Average => 160,
            Self::Fast => 200,
        }
    }
}

/// A duration estimate for a given word count and rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TimeEstimate {
    /// Whole minutes, ceiling-rounded.
    pub minutes: usize,
    /// The words-per-minute rate used.
    pub wpm: usize,
    /// Human-readable duration (e.g. "1 hr 5 min").
    pub display: String,
}

impl TimeEstimate {
    fn new(words: usize, wpm: usize) -> Self {
        let minutes = words.div_ceil(wpm);
        Self {
            minutes,
            wpm,
            display: format_duration(minutes),
        }
    }
}

/// Estimate reading time for `words` at the given speed.
pub fn reading_time(words: usize, speed: ReadingSpeed) -> TimeEstimate {
    TimeEstimate::new(words, speed.wpm())
}

/// Estimate speaking time for `words` at the given pace.
pub fn speaking_time(words: usize, pace: SpeakingPace) -> TimeEstimate {
    TimeEstimate::new(words, pace.wpm())
}

/// Format a whole-minute duration for display.
///
/// `0 → "< 1 min"`, `1 → "1 min"`, under an hour → `"N min"`, and at
/// an hour or more `"H hr"` or `"H hr M min"` (minutes omitted when
/// zero).
pub fn format_duration(minutes: usize) -> String {
    if minutes < 1 {
        return "< 1 min".to_string();
    }
    if minutes == 1 {
        return "1 min".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} min");
    }

    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{hours} hr")
    } else {
        format!("{hours} hr {rest} min")
    }
}
