//! Deployment expiry gate.
//!
//! Bench tooling builds are handed out with a shelf life: after the
//! configured date the application refuses to start and the operator is
//! pointed at a current build. The cutoff comes from configuration and the
//! clock is injected, so nothing here compares against a compiled-in date.

use chrono::{Local, NaiveDate};

/// Source of "today" for the gate check.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation used by the application.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Error returned when the deployment has passed its expiry date.
#[derive(Debug, PartialEq, Eq)]
pub struct Expired {
    pub expired_on: NaiveDate,
}

impl std::fmt::Display for Expired {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "This build expired on {}. Please install a current release.",
            self.expired_on
        )
    }
}

impl std::error::Error for Expired {}

/// Startup gate checked before the UI launches.
#[derive(Debug, Clone, Copy)]
pub struct ExpiryGate {
    expires_on: Option<NaiveDate>,
}

impl ExpiryGate {
    /// Build a gate from the configured cutoff. `None` disables the gate.
    pub fn new(expires_on: Option<NaiveDate>) -> Self {
        Self { expires_on }
    }

    /// Deny once today reaches the cutoff date.
    pub fn check(&self, clock: &dyn Clock) -> Result<(), Expired> {
        match self.expires_on {
            Some(expires_on) if clock.today() >= expires_on => Err(Expired {
                expired_on: expires_on,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_gate_allows_before_cutoff() {
        let gate = ExpiryGate::new(Some(date(2025, 4, 25)));
        assert!(gate.check(&FixedClock(date(2025, 4, 24))).is_ok());
    }

    #[test]
    fn test_gate_denies_on_cutoff_day() {
        let gate = ExpiryGate::new(Some(date(2025, 4, 25)));
        let result = gate.check(&FixedClock(date(2025, 4, 25)));
        assert_eq!(
            result,
            Err(Expired {
                expired_on: date(2025, 4, 25)
            })
        );
    }

    #[test]
    fn test_gate_denies_after_cutoff() {
        let gate = ExpiryGate::new(Some(date(2025, 4, 25)));
        assert!(gate.check(&FixedClock(date(2026, 1, 1))).is_err());
    }

    #[test]
    fn test_gate_disabled_without_cutoff() {
        let gate = ExpiryGate::new(None);
        assert!(gate.check(&FixedClock(date(2099, 12, 31))).is_ok());
    }
}
