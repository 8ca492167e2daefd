//! Stat names and the two alias vocabularies that map onto them.
//!
//! Conditions are written against either vocabulary (or the bare canonical
//! letters), case-insensitively:
//!
//! | canonical | batting | pitching |
//! |-----------|---------|----------|
//! | `a`       | `CON`   | `LOC`    |
//! | `b`       | `POW`   | `VEL`    |
//! | `c`       | `EYE`   | `STA`    |
//! | `d`       | `SPD`   | `FB`     |
//! | `e`       | `FLD`   | `BRK`    |

use std::fmt;

/// Number of trained stats.
pub const STAT_COUNT: usize = 5;

/// One of the five trained stats, named by its canonical variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stat {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vocabulary {
    Batting,
    Pitching,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 2] = [Vocabulary::Batting, Vocabulary::Pitching];

    /// Aliases in stat order.
    pub fn aliases(self) -> [&'static str; STAT_COUNT] {
        match self {
            Vocabulary::Batting => ["CON", "POW", "EYE", "SPD", "FLD"],
            Vocabulary::Pitching => ["LOC", "VEL", "STA", "FB", "BRK"],
        }
    }
}

impl Stat {
    pub const ALL: [Stat; STAT_COUNT] = [Stat::A, Stat::B, Stat::C, Stat::D, Stat::E];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical variable name (`a`..`e`).
    pub fn var(self) -> &'static str {
        ["a", "b", "c", "d", "e"][self.index()]
    }

    pub fn alias(self, vocab: Vocabulary) -> &'static str {
        vocab.aliases()[self.index()]
    }

    /// Resolve a canonical letter or an alias from either vocabulary,
    /// ignoring case.
    pub fn from_name(name: &str) -> Option<Stat> {
        if let Some(s) = Stat::ALL.iter().find(|s| s.var().eq_ignore_ascii_case(name)) {
            return Some(*s);
        }
        Vocabulary::ALL.iter().find_map(|v| {
            v.aliases()
                .iter()
                .position(|a| a.eq_ignore_ascii_case(name))
                .map(|i| Stat::ALL[i])
        })
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.var())
    }
}

/// Rewrite every alias to its canonical letter.
///
/// Only whole identifiers are rewritten: `fbx` and `econ` are left alone, so
/// the result still fails later with a clear unknown-variable error instead of
/// silently turning into something else.
pub fn canonicalize(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut rest = src;
    while let Some(start) = rest.find(is_ident_start) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let end = tail.find(|c: char| !is_ident_continue(c)).unwrap_or(tail.len());
        let ident = &tail[..end];
        match Stat::from_name(ident) {
            Some(stat) => out.push_str(stat.var()),
            None => out.push_str(ident),
        }
        rest = &tail[end..];
    }
    out.push_str(rest);
    out
}

#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
