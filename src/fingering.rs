use crate::consts::STRING_COUNT;
use crate::error::{FfResult, FretForgeError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// What a single string does in a chord shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StringState {
    Muted,
    Open,
    Fret(u8),
}

impl StringState {
    /// Integer convention: negative = muted, 0 = open, positive = fret.
    pub fn from_value(value: i32) -> FfResult<Self> {
        match value {
            v if v < 0 => Ok(Self::Muted),
            0 => Ok(Self::Open),
            v => u8::try_from(v)
                .map(Self::Fret)
                .map_err(|_| FretForgeError::Parse(format!("Fret {} is out of range", v))),
        }
    }

    pub fn normalized(self) -> Self {
        match self {
            Self::Fret(0) => Self::Open,
            other => other,
        }
    }

    /// The fret a finger must press, if any. `Fret(0)` behaves like an open string.
    pub fn pressed_fret(&self) -> Option<u8> {
        match *self {
            Self::Fret(f) if f > 0 => Some(f),
            _ => None,
        }
    }
}

impl fmt::Display for StringState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Muted => write!(f, "x"),
            Self::Open => write!(f, "0"),
            Self::Fret(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for StringState {
    type Err = FretForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token {
            "x" | "X" | "-" => Ok(Self::Muted),
            _ => token
                .parse::<i32>()
                .map_err(|_| FretForgeError::Parse(format!("Invalid string token '{}'", token)))
                .and_then(Self::from_value),
        }
    }
}

/// One entry per string, in caller order (string 1 = low E by convention).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingering {
    strings: [StringState; STRING_COUNT],
}

impl Fingering {
    /// `Fret(0)` is stored as `Open`, so equal shapes compare equal however they were built.
    pub fn new(strings: [StringState; STRING_COUNT]) -> Self {
        Self {
            strings: strings.map(StringState::normalized),
        }
    }

    pub fn from_states(states: &[StringState]) -> FfResult<Self> {
        let strings: [StringState; STRING_COUNT] =
            states.try_into().map_err(|_| FretForgeError::Length {
                expected: STRING_COUNT,
                actual: states.len(),
            })?;
        Ok(Self::new(strings))
    }

    /// Builds from integers where negative values mean muted, e.g. `[-1, 3, 2, 0, 1, 0]`.
    pub fn from_frets(values: &[i32]) -> FfResult<Self> {
        if values.len() != STRING_COUNT {
            return Err(FretForgeError::Length {
                expected: STRING_COUNT,
                actual: values.len(),
            });
        }
        let states = values
            .iter()
            .map(|&v| StringState::from_value(v))
            .collect::<FfResult<Vec<_>>>()?;
        Self::from_states(&states)
    }

    pub fn strings(&self) -> &[StringState; STRING_COUNT] {
        &self.strings
    }

    /// String index -> fret for every string a finger has to press.
    pub fn pressed(&self) -> BTreeMap<usize, u8> {
        self.strings
            .iter()
            .enumerate()
            .filter_map(|(s, state)| state.pressed_fret().map(|f| (s, f)))
            .collect()
    }
}

impl fmt::Display for Fingering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact = self
            .strings
            .iter()
            .all(|s| !matches!(s, StringState::Fret(n) if *n > 9));
        let parts: Vec<String> = self.strings.iter().map(|s| s.to_string()).collect();
        if compact {
            write!(f, "{}", parts.concat())
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl FromStr for Fingering {
    type Err = FretForgeError;

    /// Accepts `x32010` (one char per string) or separated tokens such as
    /// `1 3 3 2 1 1` / `x,10,12,12,11,x` for frets above 9.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let separated = s.contains(|c: char| c.is_whitespace() || c == ',');

        let states = if separated {
            s.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
                .map(StringState::from_str)
                .collect::<FfResult<Vec<_>>>()?
        } else {
            s.chars()
                .map(|c| StringState::from_str(&c.to_string()))
                .collect::<FfResult<Vec<_>>>()?
        };

        Self::from_states(&states)
    }
}

impl TryFrom<String> for Fingering {
    type Error = FretForgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Fingering> for String {
    fn from(value: Fingering) -> Self {
        value.to_string()
    }
}
