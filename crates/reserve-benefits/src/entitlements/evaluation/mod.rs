mod rules;
mod schedule;

pub use schedule::{AcademicCreditTier, AnnualGrantTier, BenefitSchedule};

use serde::Serialize;

use super::domain::{BenefitCategory, BenefitValue, InputProfile, PayoutBucket, Timing};

/// Stateless evaluator applying the versioned benefit schedule to a profile.
///
/// Evaluation is a pure function of the profile and the schedule: no clock,
/// no I/O, no retained state. Callers must run
/// [`InputProfile::validate`](super::InputProfile::validate) first.
pub struct EntitlementEngine {
    schedule: BenefitSchedule,
}

impl EntitlementEngine {
    pub fn new(schedule: BenefitSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &BenefitSchedule {
        &self.schedule
    }

    /// Run every rule in table order and aggregate the triggered records
    /// into bucket subtotals and a chart breakdown.
    pub fn evaluate(&self, profile: &InputProfile) -> EvaluationResult {
        let mut records = Vec::new();

        for rule in rules::benefit_rules() {
            if !(rule.applies)(profile, &self.schedule) {
                continue;
            }
            let outcome = (rule.outcome)(profile, &self.schedule);
            records.push(EntitlementRecord {
                rule: rule.key,
                category: rule.category,
                category_label: rule.category.label(),
                label: rule.label,
                detail: outcome.detail,
                value: outcome.value,
                timing: rule.timing,
            });
        }

        let totals = PayoutTotals::from_records(&records, profile.reserve_days);
        let chart = records
            .iter()
            .filter_map(|record| {
                record
                    .value
                    .monetary()
                    .filter(|amount| *amount > 0.0)
                    .map(|amount| ChartSlice {
                        label: record.label,
                        amount,
                    })
            })
            .collect();

        EvaluationResult {
            schedule_version: self.schedule.version.clone(),
            records,
            totals,
            chart,
        }
    }
}

/// One triggered benefit rule, carrying the resolved value and the timing
/// class that decides which subtotal it lands in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitlementRecord {
    pub rule: &'static str,
    pub category: BenefitCategory,
    pub category_label: &'static str,
    pub label: &'static str,
    pub detail: String,
    pub value: BenefitValue,
    pub timing: Timing,
}

impl EntitlementRecord {
    pub fn bucket(&self) -> PayoutBucket {
        self.timing.bucket()
    }
}

/// Subtotals over the monetary amounts only; non-monetary markers never
/// contribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayoutTotals {
    pub immediate: f64,
    pub future: f64,
    pub potential: f64,
    pub total_all: f64,
    /// Direct pay per service day.
    pub immediate_per_day: f64,
    /// Full value per service day, assuming every entitlement is realized.
    pub value_per_day: f64,
}

impl PayoutTotals {
    fn from_records(records: &[EntitlementRecord], reserve_days: u32) -> Self {
        let mut immediate = 0.0;
        let mut future = 0.0;
        let mut potential = 0.0;

        for record in records {
            let Some(amount) = record.value.monetary() else {
                continue;
            };
            match record.bucket() {
                PayoutBucket::Immediate => immediate += amount,
                PayoutBucket::Future => future += amount,
                PayoutBucket::Potential => potential += amount,
            }
        }

        let total_all = immediate + future + potential;
        // Floor of one day so zero-day profiles divide cleanly.
        let divisor = f64::from(reserve_days.max(1));

        Self {
            immediate,
            future,
            potential,
            total_all,
            immediate_per_day: immediate / divisor,
            value_per_day: total_all / divisor,
        }
    }

    pub fn for_bucket(&self, bucket: PayoutBucket) -> f64 {
        match bucket {
            PayoutBucket::Immediate => self.immediate,
            PayoutBucket::Future => self.future,
            PayoutBucket::Potential => self.potential,
        }
    }
}

/// Chart-ready slice; only strictly positive monetary amounts appear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: &'static str,
    pub amount: f64,
}

/// Full evaluation output: the ordered records plus derived aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub schedule_version: String,
    pub records: Vec<EntitlementRecord>,
    pub totals: PayoutTotals,
    pub chart: Vec<ChartSlice>,
}

impl EvaluationResult {
    /// Records landing in the given subtotal bucket, in rule-table order.
    pub fn bucket_records(&self, bucket: PayoutBucket) -> impl Iterator<Item = &EntitlementRecord> {
        self.records
            .iter()
            .filter(move |record| record.bucket() == bucket)
    }
}
