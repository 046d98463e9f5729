use bitflags::bitflags;

use crate::log::log_error::LogError;

bitflags! {
    /// Severity flags for log records and filter masks for sinks.
    ///
    /// A record carries exactly one flag; a sink carries any union of them.
    /// `ALL` is the union of every discrete severity and [`Severity::NONE`]
    /// matches nothing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Severity: u32 {
        /// Very fine-grained tracing events.
        const TRACE = 1 << 0;
        /// Timing measurements, see [`crate::perf_timer::PerformanceTimer`].
        const TIME  = 1 << 1;
        /// Fine-grained events useful while debugging.
        const DEBUG = 1 << 2;
        /// Coarse-grained progress messages.
        const INFO  = 1 << 3;
        /// Potentially harmful situations.
        const WARN  = 1 << 4;
        /// Errors the process can still recover from.
        const ERROR = 1 << 5;
        /// Errors the process most likely cannot recover from.
        const PANIC = 1 << 6;

        const ALL = Self::TRACE.bits()
            | Self::TIME.bits()
            | Self::DEBUG.bits()
            | Self::INFO.bits()
            | Self::WARN.bits()
            | Self::ERROR.bits()
            | Self::PANIC.bits();
    }
}

/// Label printed for anything that is not exactly one severity.
pub const INVALID_LABEL: &str = "<invalid>";

impl Severity {
    /// The empty mask.
    pub const NONE: Self = Self::empty();

    /// Discrete severities in ascending order of importance.
    pub const DISCRETE: [Self; 7] = [
        Self::TRACE,
        Self::TIME,
        Self::DEBUG,
        Self::INFO,
        Self::WARN,
        Self::ERROR,
        Self::PANIC,
    ];

    /// Returns `true` when `self`, used as a mask, lets `severity` through.
    #[inline]
    #[must_use]
    pub const fn matches(self, severity: Self) -> bool {
        self.bits() & severity.bits() != 0
    }

    /// Fixed-width label used in formatted lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 7] = ["TRACE", "TIME ", "DEBUG", "INFO ", "WARN ", "ERROR", "PANIC"];
        Self::DISCRETE
            .iter()
            .position(|s| *s == self)
            .map_or(INVALID_LABEL, |i| LABELS[i])
    }

    /// Parses a mask expression such as `INFO | ERROR`, `all` or `NONE`.
    ///
    /// Names are case-insensitive; hexadecimal literals (`0x28`) are accepted
    /// bit-for-bit.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidMask`] if any component is not a known name.
    pub fn parse_mask(expr: &str) -> Result<Self, LogError> {
        // NONE contributes no bits, so it is dropped wherever it appears.
        let normalized = expr
            .to_ascii_uppercase()
            .replace("0X", "0x")
            .split('|')
            .map(str::trim)
            .filter(|part| *part != "NONE")
            .collect::<Vec<_>>()
            .join(" | ");
        bitflags::parser::from_str::<Self>(&normalized)
            .map_err(|e| LogError::InvalidMask(format!("{expr:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn all_is_union_of_discrete_severities() {
        let union = Severity::DISCRETE
            .iter()
            .fold(Severity::NONE, |acc, s| acc.union(*s));
        assert_eq!(union, Severity::ALL);
        assert_eq!(Severity::ALL, Severity::all());
    }

    #[test]
    fn discrete_flags_never_alias() {
        for (i, a) in Severity::DISCRETE.iter().enumerate() {
            assert_eq!(a.bits().count_ones(), 1);
            for b in &Severity::DISCRETE[i + 1..] {
                assert!(a.intersection(*b).is_empty(), "{a:?} aliases {b:?}");
            }
        }
    }

    #[test]
    fn none_matches_nothing() {
        for s in Severity::DISCRETE {
            assert!(!Severity::NONE.matches(s));
            assert!(Severity::ALL.matches(s));
        }
        assert!(!Severity::ALL.matches(Severity::NONE));
    }

    #[test]
    fn matches_is_intersection_test() {
        let mask = Severity::INFO.union(Severity::ERROR);
        for s in Severity::DISCRETE {
            assert_eq!(mask.matches(s), s == Severity::INFO || s == Severity::ERROR);
        }
    }

    #[test]
    fn set_operations() {
        let a = Severity::INFO | Severity::WARN;
        let b = Severity::WARN | Severity::ERROR;
        assert_eq!(a.intersection(b), Severity::WARN);
        assert_eq!(
            a.symmetric_difference(b),
            Severity::INFO | Severity::ERROR
        );
        assert_eq!(Severity::INFO.complement(), Severity::ALL.difference(Severity::INFO));
    }

    #[test]
    fn foreign_bits_are_kept_but_match_nothing_known() {
        let odd = Severity::from_bits_retain(1 << 20);
        assert_eq!(odd.bits(), 1 << 20);
        assert!(!Severity::ALL.matches(odd));
        assert_eq!(odd.label(), INVALID_LABEL);
    }

    #[test]
    fn labels_are_five_wide() {
        for s in Severity::DISCRETE {
            assert_eq!(s.label().len(), 5, "{s:?}");
        }
        assert_eq!((Severity::INFO | Severity::WARN).label(), "<invalid>");
        assert_eq!(Severity::NONE.label(), "<invalid>");
    }

    #[test]
    fn parse_mask_expressions() {
        assert_eq!(
            Severity::parse_mask("INFO | ERROR").unwrap(),
            Severity::INFO | Severity::ERROR
        );
        assert_eq!(Severity::parse_mask("all").unwrap(), Severity::ALL);
        assert_eq!(Severity::parse_mask(" none ").unwrap(), Severity::NONE);
        assert_eq!(Severity::parse_mask("").unwrap(), Severity::NONE);
        assert_eq!(Severity::parse_mask("NONE | INFO").unwrap(), Severity::INFO);
        assert_eq!(
            Severity::parse_mask("warn | none | error").unwrap(),
            Severity::WARN | Severity::ERROR
        );
        assert!(Severity::parse_mask("INFO ||").is_err());
        assert_eq!(
            Severity::parse_mask("0x28").unwrap(),
            Severity::INFO | Severity::ERROR
        );
        assert!(matches!(
            Severity::parse_mask("INFO | LOUD"),
            Err(LogError::InvalidMask(_))
        ));
    }
}
