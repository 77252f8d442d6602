use serde::{Deserialize, Serialize};

/// Three-way unit classification driving differing ceilings and thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Combatant,
    CombatSupport,
    Rear,
}

impl UnitType {
    pub const fn label(self) -> &'static str {
        match self {
            UnitType::Combatant => "Combatant",
            UnitType::CombatSupport => "Combat support",
            UnitType::Rear => "Rear",
        }
    }

    pub const fn is_combatant(self) -> bool {
        matches!(self, UnitType::Combatant)
    }
}

/// Out-of-pocket amounts declared for reimbursement. A cost of zero is
/// equivalent to the expense not being claimed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclaredExpenses {
    pub therapy: f64,
    pub babysitter: f64,
    pub pet_boarding: f64,
    pub vacation_cancel: f64,
    pub camps: f64,
    pub tuition: f64,
    pub road_toll: f64,
    pub mortgage_rent: f64,
}

impl DeclaredExpenses {
    pub(crate) fn fields(&self) -> [(&'static str, f64); 8] {
        [
            ("therapy", self.therapy),
            ("babysitter", self.babysitter),
            ("pet_boarding", self.pet_boarding),
            ("vacation_cancel", self.vacation_cancel),
            ("camps", self.camps),
            ("tuition", self.tuition),
            ("road_toll", self.road_toll),
            ("mortgage_rent", self.mortgage_rent),
        ]
    }
}

/// Immutable service profile supplied by the host once per evaluation.
///
/// `monthly_salary` is the gross monthly salary; whether a net or
/// self-employed basis should apply instead is an open product question and
/// is deliberately not guessed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputProfile {
    pub monthly_salary: f64,
    pub reserve_days: u32,
    pub unit_type: UnitType,
    #[serde(default)]
    pub num_children: u32,
    #[serde(default)]
    pub is_married: bool,
    #[serde(default)]
    pub has_non_working_spouse: bool,
    #[serde(default)]
    pub is_student: bool,
    #[serde(default)]
    pub is_self_employed: bool,
    /// Service performed under an expedited Tzav 8 call-up.
    #[serde(default)]
    pub emergency_call_up: bool,
    #[serde(default)]
    pub served_during_holidays: bool,
    #[serde(default)]
    pub needs_medical_assistance: bool,
    #[serde(default)]
    pub needs_preferred_loans: bool,
    #[serde(default)]
    pub expenses: DeclaredExpenses,
}

impl InputProfile {
    /// Caller-side precondition for [`evaluate`](super::EntitlementEngine::evaluate):
    /// monetary fields must be finite and non-negative. The engine does not
    /// re-check and its behavior on unvalidated input is unspecified.
    pub fn validate(&self) -> Result<(), ProfileError> {
        check_amount("monthly_salary", self.monthly_salary)?;
        for (field, value) in self.expenses.fields() {
            check_amount(field, value)?;
        }
        Ok(())
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ProfileError> {
    if !value.is_finite() {
        return Err(ProfileError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ProfileError::Negative { field, value });
    }
    Ok(())
}

/// Validation errors raised before a profile reaches the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
}

/// Payment-timing class attached to each entitlement record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timing {
    /// Paid out with the regular service compensation.
    Immediate,
    /// Paid on a fixed future date.
    Future,
    /// Issued as a non-cash voucher with a nominal value.
    Voucher,
    /// General benefit the reservist must actively claim.
    Benefit,
}

impl Timing {
    pub const fn label(self) -> &'static str {
        match self {
            Timing::Immediate => "Immediate",
            Timing::Future => "Future",
            Timing::Voucher => "Voucher",
            Timing::Benefit => "Benefit",
        }
    }

    /// Bucket driving the subtotal math. Vouchers and claimable benefits both
    /// count toward the potential-realization subtotal.
    pub const fn bucket(self) -> PayoutBucket {
        match self {
            Timing::Immediate => PayoutBucket::Immediate,
            Timing::Future => PayoutBucket::Future,
            Timing::Voucher | Timing::Benefit => PayoutBucket::Potential,
        }
    }
}

/// Subtotal buckets exposed on the evaluation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutBucket {
    Immediate,
    Future,
    Potential,
}

impl PayoutBucket {
    pub const fn label(self) -> &'static str {
        match self {
            PayoutBucket::Immediate => "Direct payments",
            PayoutBucket::Future => "Future payments",
            PayoutBucket::Potential => "Potential realization",
        }
    }

    pub const fn ordered() -> [PayoutBucket; 3] {
        [
            PayoutBucket::Immediate,
            PayoutBucket::Future,
            PayoutBucket::Potential,
        ]
    }
}

/// Cosmetic grouping of records for display; subtotals are driven by
/// [`Timing`], never by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitCategory {
    ServicePay,
    FamilyGrants,
    SpecialGrants,
    AnnualGrants,
    ExpenseRefunds,
    Housing,
    Students,
    Vouchers,
    Employment,
    Health,
    General,
}

impl BenefitCategory {
    pub const fn label(self) -> &'static str {
        match self {
            BenefitCategory::ServicePay => "Service pay",
            BenefitCategory::FamilyGrants => "Family grants",
            BenefitCategory::SpecialGrants => "Special grants",
            BenefitCategory::AnnualGrants => "Annual grants",
            BenefitCategory::ExpenseRefunds => "Expense reimbursements",
            BenefitCategory::Housing => "Housing",
            BenefitCategory::Students => "Students",
            BenefitCategory::Vouchers => "Vouchers",
            BenefitCategory::Employment => "Employment",
            BenefitCategory::Health => "Health",
            BenefitCategory::General => "General benefits",
        }
    }
}

/// Resolved amount of a record: either a concrete currency amount or a
/// marker for entitlements whose value varies or is non-monetary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitValue {
    Monetary(f64),
    NonMonetary { note: String },
}

impl BenefitValue {
    pub fn non_monetary(note: impl Into<String>) -> Self {
        BenefitValue::NonMonetary { note: note.into() }
    }

    /// Numeric amount, if any. Non-monetary markers are excluded from every
    /// subtotal.
    pub fn monetary(&self) -> Option<f64> {
        match self {
            BenefitValue::Monetary(amount) => Some(*amount),
            BenefitValue::NonMonetary { .. } => None,
        }
    }
}
