use std::fmt;

/// Java language compatibility levels supported by the Android toolchain.
///
/// Ordering follows release order, so `V8 < V11 < V17 < V21`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JavaLevel {
    V8,
    V11,
    V17,
    V21,
}

impl JavaLevel {
    /// Parse a compatibility token (`1.8`/`8`, `11`, `17`, `21`) into a level.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1.8" | "8" => Some(Self::V8),
            "11" => Some(Self::V11),
            "17" => Some(Self::V17),
            "21" => Some(Self::V21),
            _ => None,
        }
    }

    /// The canonical token for this level.
    pub fn token(&self) -> &'static str {
        match self {
            Self::V8 => "1.8",
            Self::V11 => "11",
            Self::V17 => "17",
            Self::V21 => "21",
        }
    }

    /// All tokens accepted by [`parse`](Self::parse), for diagnostics.
    pub const ACCEPTED_TOKENS: &'static str = "1.8, 8, 11, 17, 21";
}

impl fmt::Display for JavaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
