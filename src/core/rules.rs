//! Shared rule-table machinery
//!
//! Each rule engine is an ordered table of independent rules. A rule is a
//! predicate over a [`ClinicalContext`] plus a function producing one output
//! item. Evaluation keeps every rule whose predicate holds, in table order,
//! and never merges or removes items, so overlapping rules all contribute.

use crate::domain::{Comorbidity, ComorbiditySet};

/// Facts a rule may look at
///
/// Gestational-age predicates are false while `weeks` is unknown, which
/// makes every AOG-dependent rule silent until dating is available.
#[derive(Debug, Clone, Copy)]
pub struct ClinicalContext<'a> {
    pub weeks: Option<u32>,
    pub age: Option<u32>,
    pub gravidity: Option<u32>,
    pub parity: Option<u32>,
    pub comorbidities: &'a ComorbiditySet,
}

impl<'a> ClinicalContext<'a> {
    pub fn new(comorbidities: &'a ComorbiditySet) -> Self {
        Self {
            weeks: None,
            age: None,
            gravidity: None,
            parity: None,
            comorbidities,
        }
    }

    pub fn with_weeks(mut self, weeks: Option<u32>) -> Self {
        self.weeks = weeks;
        self
    }

    pub fn with_age(mut self, age: Option<u32>) -> Self {
        self.age = age;
        self
    }

    pub fn with_gravidity(mut self, gravidity: Option<u32>) -> Self {
        self.gravidity = gravidity;
        self
    }

    pub fn with_parity(mut self, parity: Option<u32>) -> Self {
        self.parity = parity;
        self
    }

    /// `lo <= weeks <= hi`
    pub fn weeks_within(&self, lo: u32, hi: u32) -> bool {
        self.weeks.is_some_and(|w| (lo..=hi).contains(&w))
    }

    pub fn weeks_at_least(&self, lo: u32) -> bool {
        self.weeks.is_some_and(|w| w >= lo)
    }

    pub fn weeks_at_most(&self, hi: u32) -> bool {
        self.weeks.is_some_and(|w| w <= hi)
    }

    pub fn weeks_below(&self, bound: u32) -> bool {
        self.weeks.is_some_and(|w| w < bound)
    }

    pub fn age_at_least(&self, years: u32) -> bool {
        self.age.is_some_and(|a| a >= years)
    }

    pub fn age_below(&self, years: u32) -> bool {
        self.age.is_some_and(|a| a < years)
    }

    pub fn has(&self, comorbidity: Comorbidity) -> bool {
        self.comorbidities.contains(comorbidity)
    }

    pub fn has_any(&self, comorbidities: &[Comorbidity]) -> bool {
        self.comorbidities.contains_any(comorbidities)
    }
}

/// One row of a rule table
pub struct Rule<T> {
    /// Short identifier used in debug logs
    pub name: &'static str,
    pub applies: fn(&ClinicalContext<'_>) -> bool,
    pub emit: fn(&ClinicalContext<'_>) -> T,
}

/// Evaluates a rule table in order, concatenating the outputs of every rule that fires
pub fn evaluate<T>(engine: &'static str, rules: &[Rule<T>], ctx: &ClinicalContext<'_>) -> Vec<T> {
    let fired: Vec<&Rule<T>> = rules.iter().filter(|rule| (rule.applies)(ctx)).collect();

    tracing::debug!(
        engine,
        weeks = ?ctx.weeks,
        fired = ?fired.iter().map(|rule| rule.name).collect::<Vec<_>>(),
        "Evaluated rule table"
    );

    fired.into_iter().map(|rule| (rule.emit)(ctx)).collect()
}
