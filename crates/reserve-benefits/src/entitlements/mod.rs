//! Reservist entitlement evaluation: domain model, versioned benefit
//! schedule, the rule engine, and the host-facing intake and HTTP surfaces.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod report;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{
    BenefitCategory, BenefitValue, DeclaredExpenses, InputProfile, PayoutBucket, ProfileError,
    Timing, UnitType,
};
pub use evaluation::{
    AcademicCreditTier, AnnualGrantTier, BenefitSchedule, ChartSlice, EntitlementEngine,
    EntitlementRecord, EvaluationResult, PayoutTotals,
};
pub use intake::{parse_profiles, IntakeError, LabeledProfile};
pub use report::{bucket_sections, BucketSection};
pub use router::entitlement_router;
