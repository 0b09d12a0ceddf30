//! Canonical coordinate keys.

use crate::quadray::Quadray;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Canonical, hashable key of a quadray.
///
/// Stores the bit patterns of the four *normalized* components, with
/// negative zero folded into positive zero. Two coordinates produce equal
/// keys iff their components are equal after normalization, so
/// `(1, 1, 1, 1)` and `(0, 0, 0, 0)` share a key.
///
/// The string form (`Display`) is `"a,b,c,d"` using the shortest
/// round-trip float formatting, so integer cells render as `"0,1,1,2"`.
/// [`FromStr`] parses that form back.
///
/// # Examples
///
/// ```
/// use quadcraft_core::{Quadray, QuadKey};
///
/// let k = Quadray::new(1.0, 2.0, 2.0, 3.0).to_key();
/// assert_eq!(k.to_string(), "0,1,1,2");
/// assert_eq!("0,1,1,2".parse::<QuadKey>().unwrap(), k);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuadKey([u64; 4]);

impl QuadKey {
    /// Key of `q` after normalization.
    pub fn from_quadray(q: &Quadray) -> Self {
        let n = q.normalized().components();
        // `+ 0.0` folds -0.0 into +0.0 so both hash alike.
        Self([
            (n[0] + 0.0).to_bits(),
            (n[1] + 0.0).to_bits(),
            (n[2] + 0.0).to_bits(),
            (n[3] + 0.0).to_bits(),
        ])
    }

    /// The normalized coordinate this key names.
    pub fn to_quadray(&self) -> Quadray {
        Quadray::from_components(self.0.map(f64::from_bits))
    }
}

impl From<Quadray> for QuadKey {
    fn from(q: Quadray) -> Self {
        Self::from_quadray(&q)
    }
}

impl From<&Quadray> for QuadKey {
    fn from(q: &Quadray) -> Self {
        Self::from_quadray(q)
    }
}

impl fmt::Display for QuadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0.map(f64::from_bits);
        write!(f, "{a},{b},{c},{d}")
    }
}

/// Errors from parsing a [`QuadKey`] string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyParseError {
    /// The string did not contain exactly four comma-separated parts.
    WrongArity {
        /// Number of parts found.
        found: usize,
    },
    /// A part was not a finite number.
    InvalidComponent {
        /// The offending text.
        text: String,
    },
}

impl fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongArity { found } => {
                write!(f, "expected 4 comma-separated components, found {found}")
            }
            Self::InvalidComponent { text } => {
                write!(f, "component '{text}' is not a finite number")
            }
        }
    }
}

impl Error for KeyParseError {}

impl FromStr for QuadKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(KeyParseError::WrongArity { found: parts.len() });
        }
        let mut components = [0.0f64; 4];
        for (slot, part) in components.iter_mut().zip(&parts) {
            let text = part.trim();
            match text.parse::<f64>() {
                Ok(v) if v.is_finite() => *slot = v,
                _ => {
                    return Err(KeyParseError::InvalidComponent {
                        text: text.to_string(),
                    })
                }
            }
        }
        Ok(Quadray::from_components(components).to_key())
    }
}
