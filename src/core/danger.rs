//! Danger sign triage

use crate::domain::{DangerAlert, DangerSeverity, DangerSign};
use std::collections::BTreeSet;

/// Builds an alert for every flagged sign, in reference table order
pub fn danger_alerts(flagged: &BTreeSet<DangerSign>) -> Vec<DangerAlert> {
    let alerts: Vec<DangerAlert> = flagged.iter().copied().map(DangerAlert::from).collect();
    if !alerts.is_empty() {
        tracing::debug!(count = alerts.len(), "Danger signs flagged");
    }
    alerts
}

/// True when any alert is critical
pub fn requires_urgent_referral(alerts: &[DangerAlert]) -> bool {
    alerts
        .iter()
        .any(|alert| alert.severity == DangerSeverity::Critical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_no_alerts() {
        let alerts = danger_alerts(&BTreeSet::new());
        assert!(alerts.is_empty());
        assert!(!requires_urgent_referral(&alerts));
    }

    #[test]
    fn test_alerts_follow_table_order() {
        let flagged = BTreeSet::from([DangerSign::WateryDischarge, DangerSign::Bleeding]);
        let alerts = danger_alerts(&flagged);
        assert_eq!(alerts[0].sign, DangerSign::Bleeding);
        assert_eq!(alerts[1].sign, DangerSign::WateryDischarge);
    }

    #[test]
    fn test_warning_only_is_not_urgent() {
        let flagged = BTreeSet::from([DangerSign::Fever, DangerSign::Edema]);
        assert!(!requires_urgent_referral(&danger_alerts(&flagged)));
    }

    #[test]
    fn test_any_critical_is_urgent() {
        let flagged = BTreeSet::from([DangerSign::Fever, DangerSign::Headache]);
        assert!(requires_urgent_referral(&danger_alerts(&flagged)));
    }
}
