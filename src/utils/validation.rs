//! Validation of user-supplied thresholds before any input is read.

use crate::core::{ReportConfig, SegmentConfig};

/// Configuration validation error types
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Break length must be at least 1: no run of ambiguous bases has length 0")]
    ZeroBreakLength,
    #[error("Big scaffold cutoff of {0} kb overflows")]
    BigScaffoldOverflow(u64),
}

/// Check segmentation thresholds.
///
/// # Errors
///
/// Returns `ValidationError::ZeroBreakLength` if the break length is zero.
pub fn validate_segment_config(config: &SegmentConfig) -> Result<(), ValidationError> {
    if config.break_length == Some(0) {
        return Err(ValidationError::ZeroBreakLength);
    }
    Ok(())
}

/// Build a [`ReportConfig`] from command-line units (big-scaffold cutoff in kilobases).
///
/// # Errors
///
/// Returns `ValidationError::BigScaffoldOverflow` if the cutoff does not fit in bases.
pub fn report_config_from_kb(
    big_scaffold_kb: u64,
    min_display_size: u64,
    min_gap_display: Option<u64>,
) -> Result<ReportConfig, ValidationError> {
    let big_scaffold_size = big_scaffold_kb
        .checked_mul(1_000)
        .ok_or(ValidationError::BigScaffoldOverflow(big_scaffold_kb))?;
    Ok(ReportConfig {
        big_scaffold_size,
        min_display_size,
        min_gap_display,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_segment_config() {
        assert!(validate_segment_config(&SegmentConfig::default()).is_ok());

        let config = SegmentConfig {
            gap_threshold: 9,
            break_length: Some(0),
        };
        assert_eq!(
            validate_segment_config(&config),
            Err(ValidationError::ZeroBreakLength)
        );

        // A zero gap threshold is allowed: every run is a gap
        let config = SegmentConfig {
            gap_threshold: 0,
            break_length: Some(20),
        };
        assert!(validate_segment_config(&config).is_ok());
    }

    #[test]
    fn test_report_config_from_kb() {
        let config = report_config_from_kb(50, 1_000, None).unwrap();
        assert_eq!(config, ReportConfig::default());

        assert_eq!(
            report_config_from_kb(u64::MAX, 1_000, None),
            Err(ValidationError::BigScaffoldOverflow(u64::MAX))
        );
    }
}
