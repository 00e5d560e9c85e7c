//! LMP / ultrasound reconciliation
//!
//! When both an LMP-based and an ultrasound-based gestational age exist,
//! the LMP estimate stands unless it disagrees with the ultrasound by more
//! than a threshold that grows with gestational age. The threshold is keyed
//! by the age recorded **at the time of the scan**, never by today's age.
//!
//! | Weeks at scan | Threshold (days) |
//! |---------------|------------------|
//! | ≤ 13          | 5                |
//! | 14-15         | 7                |
//! | 16-21         | 10               |
//! | 22-27         | 14               |
//! | ≥ 28          | 21               |

use crate::domain::{AgeEstimate, AogSource, BestAog};

/// Maximum tolerated LMP/UTZ difference for a scan done at `weeks_at_scan`
pub fn discrepancy_threshold_days(weeks_at_scan: u32) -> u32 {
    match weeks_at_scan {
        0..=13 => 5,
        14..=15 => 7,
        16..=21 => 10,
        22..=27 => 14,
        _ => 21,
    }
}

/// Selects the authoritative gestational age
///
/// An absent `weeks_at_scan` is read as 0 and so selects the tightest
/// threshold.
///
/// # Examples
///
/// ```
/// use prenatrack::core::reconcile::reconcile_aog;
/// use prenatrack::domain::{AgeEstimate, AogSource};
///
/// let lmp = AgeEstimate::from_days(100);
/// let utz = AgeEstimate::from_days(112);
///
/// let best = reconcile_aog(Some(lmp), Some(utz), Some(14)).unwrap();
/// assert_eq!(best.source, AogSource::UtzDiscrepancy { threshold_days: 7 });
/// assert_eq!(best.estimate, utz);
/// ```
pub fn reconcile_aog(
    lmp: Option<AgeEstimate>,
    utz: Option<AgeEstimate>,
    weeks_at_scan: Option<u32>,
) -> Option<BestAog> {
    let best = match (lmp, utz) {
        (None, None) => return None,
        (Some(lmp), None) => BestAog {
            estimate: lmp,
            source: AogSource::Lmp,
        },
        (None, Some(utz)) => BestAog {
            estimate: utz,
            source: AogSource::Utz,
        },
        (Some(lmp), Some(utz)) => {
            let diff = lmp.total_days.abs_diff(utz.total_days);
            let threshold_days = discrepancy_threshold_days(weeks_at_scan.unwrap_or(0));

            tracing::debug!(
                lmp_days = lmp.total_days,
                utz_days = utz.total_days,
                diff,
                threshold_days,
                "Reconciling LMP and UTZ dating"
            );

            if diff > threshold_days {
                BestAog {
                    estimate: utz,
                    source: AogSource::UtzDiscrepancy { threshold_days },
                }
            } else {
                BestAog {
                    estimate: lmp,
                    source: AogSource::LmpConcordant,
                }
            }
        }
    };

    Some(best)
}
