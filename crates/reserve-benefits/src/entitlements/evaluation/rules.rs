use super::super::domain::{BenefitCategory, BenefitValue, InputProfile, Timing};
use super::schedule::BenefitSchedule;

/// One declarative benefit rule: an eligibility predicate plus an amount
/// builder. Rules are evaluated once, in table order, and do not
/// short-circuit each other; mutual exclusivity lives in the predicates.
pub(crate) struct BenefitRule {
    pub(crate) key: &'static str,
    pub(crate) category: BenefitCategory,
    pub(crate) label: &'static str,
    pub(crate) timing: Timing,
    pub(crate) applies: fn(&InputProfile, &BenefitSchedule) -> bool,
    /// Only invoked when `applies` returned true.
    pub(crate) outcome: fn(&InputProfile, &BenefitSchedule) -> RuleOutcome,
}

pub(crate) struct RuleOutcome {
    pub(crate) value: BenefitValue,
    pub(crate) detail: String,
}

impl RuleOutcome {
    fn monetary(amount: f64, detail: impl Into<String>) -> Self {
        Self {
            value: BenefitValue::Monetary(amount),
            detail: detail.into(),
        }
    }

    fn non_monetary(note: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            value: BenefitValue::non_monetary(note),
            detail: detail.into(),
        }
    }
}

pub(crate) fn benefit_rules() -> &'static [BenefitRule] {
    RULES
}

static RULES: &[BenefitRule] = &[
    BenefitRule {
        key: "nii_compensation",
        category: BenefitCategory::ServicePay,
        label: "National Insurance compensation",
        timing: Timing::Immediate,
        applies: |profile, _| profile.reserve_days > 0,
        outcome: nii_compensation,
    },
    BenefitRule {
        key: "emergency_supplement",
        category: BenefitCategory::ServicePay,
        label: "Wartime daily supplement",
        timing: Timing::Immediate,
        applies: |profile, _| profile.emergency_call_up && profile.reserve_days > 0,
        outcome: emergency_supplement,
    },
    BenefitRule {
        key: "family_grant_children",
        category: BenefitCategory::FamilyGrants,
        label: "Family grant (children under 14)",
        timing: Timing::Immediate,
        applies: |profile, schedule| {
            profile.num_children > 0
                && profile.reserve_days >= schedule.family_grant_children_min_days
                && profile.emergency_call_up
        },
        outcome: |_, schedule| {
            RuleOutcome::monetary(schedule.family_grant_children, "one-time grant")
        },
    },
    BenefitRule {
        key: "enlarged_family_grant_combatant",
        category: BenefitCategory::FamilyGrants,
        label: "Enlarged family grant (combatants)",
        timing: Timing::Immediate,
        applies: |profile, schedule| {
            profile.unit_type.is_combatant()
                && profile.reserve_days >= schedule.enlarged_family_combatant_min_days
        },
        outcome: |_, schedule| RuleOutcome::monetary(schedule.enlarged_family_grant, "one-time grant"),
    },
    BenefitRule {
        key: "enlarged_family_grant",
        category: BenefitCategory::FamilyGrants,
        label: "Enlarged family grant",
        timing: Timing::Immediate,
        applies: |profile, schedule| {
            !profile.unit_type.is_combatant()
                && profile.reserve_days >= schedule.enlarged_family_other_min_days
        },
        outcome: |_, schedule| {
            RuleOutcome::monetary(
                schedule.enlarged_family_grant,
                format!(
                    "for service of {}+ days",
                    schedule.enlarged_family_other_min_days
                ),
            )
        },
    },
    BenefitRule {
        key: "extended_family_grant",
        category: BenefitCategory::SpecialGrants,
        label: "Extended family grant",
        timing: Timing::Immediate,
        applies: |profile, schedule| {
            profile.is_married
                && profile.num_children > 0
                && extended_family_steps(profile, schedule) > 0
        },
        outcome: extended_family_grant,
    },
    BenefitRule {
        key: "personal_expenses_grant",
        category: BenefitCategory::SpecialGrants,
        label: "Enlarged personal-expenses grant",
        timing: Timing::Immediate,
        applies: |profile, _| profile.reserve_days / 10 > 0,
        outcome: personal_expenses_grant,
    },
    BenefitRule {
        key: "annual_grant",
        category: BenefitCategory::AnnualGrants,
        label: "Annual grant",
        timing: Timing::Future,
        applies: |profile, schedule| {
            schedule
                .annual_grant(profile.unit_type, profile.reserve_days)
                .is_some()
        },
        outcome: annual_grant,
    },
    BenefitRule {
        key: "therapy_refund",
        category: BenefitCategory::ExpenseRefunds,
        label: "Emotional/mental therapy refund",
        timing: Timing::Benefit,
        applies: |profile, _| profile.expenses.therapy > 0.0,
        outcome: |profile, schedule| {
            capped_refund(profile.expenses.therapy, schedule.therapy_ceiling)
        },
    },
    BenefitRule {
        key: "pet_boarding_refund",
        category: BenefitCategory::ExpenseRefunds,
        label: "Pet boarding refund",
        timing: Timing::Benefit,
        applies: |profile, schedule| {
            profile.expenses.pet_boarding > 0.0
                && profile.reserve_days >= schedule.pet_boarding_min_days
        },
        outcome: |profile, schedule| {
            capped_refund(profile.expenses.pet_boarding, schedule.pet_boarding_ceiling)
        },
    },
    BenefitRule {
        key: "babysitter_refund",
        category: BenefitCategory::ExpenseRefunds,
        label: "Babysitter / home help refund",
        timing: Timing::Benefit,
        applies: |profile, schedule| {
            profile.expenses.babysitter > 0.0
                && profile.reserve_days >= schedule.babysitter_min_days(profile.unit_type)
        },
        outcome: |profile, schedule| {
            capped_refund(
                profile.expenses.babysitter,
                schedule.babysitter_ceiling(profile.unit_type),
            )
        },
    },
    BenefitRule {
        key: "camps_refund",
        category: BenefitCategory::ExpenseRefunds,
        label: "Day camps / after-school care refund",
        timing: Timing::Benefit,
        applies: |profile, _| profile.expenses.camps > 0.0 && profile.served_during_holidays,
        outcome: camps_refund,
    },
    BenefitRule {
        key: "vacation_cancel_refund",
        category: BenefitCategory::ExpenseRefunds,
        label: "Cancelled vacation/flight refund",
        timing: Timing::Benefit,
        applies: |profile, _| profile.expenses.vacation_cancel > 0.0 && profile.emergency_call_up,
        outcome: vacation_cancel_refund,
    },
    BenefitRule {
        key: "road_toll_refund",
        category: BenefitCategory::ExpenseRefunds,
        label: "Toll road refund",
        timing: Timing::Benefit,
        applies: |profile, _| profile.expenses.road_toll > 0.0,
        outcome: |profile, schedule| RuleOutcome {
            value: BenefitValue::Monetary(
                profile
                    .expenses
                    .road_toll
                    .min(schedule.road_toll_monthly_ceiling),
            ),
            detail: format!(
                "up to {:.0} per calendar month",
                schedule.road_toll_monthly_ceiling
            ),
        },
    },
    BenefitRule {
        key: "mortgage_rent_assistance",
        category: BenefitCategory::Housing,
        label: "Mortgage/rent assistance",
        timing: Timing::Benefit,
        applies: |profile, _| profile.expenses.mortgage_rent > 0.0,
        outcome: mortgage_rent_assistance,
    },
    BenefitRule {
        key: "academic_credits",
        category: BenefitCategory::Students,
        label: "Academic credit points",
        timing: Timing::Benefit,
        applies: |profile, schedule| {
            profile.is_student && schedule.academic_credits(profile.reserve_days).is_some()
        },
        outcome: academic_credits,
    },
    BenefitRule {
        key: "tuition_assistance",
        category: BenefitCategory::Students,
        label: "Tuition assistance",
        timing: Timing::Benefit,
        applies: |profile, schedule| {
            profile.is_student
                && profile.expenses.tuition > 0.0
                && profile.reserve_days >= schedule.tuition_min_days
        },
        outcome: |profile, schedule| RuleOutcome {
            value: BenefitValue::Monetary(
                profile
                    .expenses
                    .tuition
                    .min(schedule.tuition_ceiling(profile.unit_type)),
            ),
            detail: "requires an application".to_string(),
        },
    },
    BenefitRule {
        key: "municipal_tax_discount",
        category: BenefitCategory::General,
        label: "Municipal tax discount",
        timing: Timing::Benefit,
        applies: |profile, schedule| profile.reserve_days >= schedule.municipal_discount_min_days,
        outcome: |_, _| {
            RuleOutcome::non_monetary("varies", "5-25%, apply to the local authority")
        },
    },
    BenefitRule {
        key: "vacation_voucher",
        category: BenefitCategory::Vouchers,
        label: "Vacation voucher",
        timing: Timing::Voucher,
        applies: |profile, schedule| profile.reserve_days >= schedule.vacation_voucher_min_days,
        outcome: |profile, schedule| RuleOutcome {
            value: BenefitValue::Monetary(schedule.vacation_voucher_value(profile.unit_type)),
            detail: "sent automatically to those eligible".to_string(),
        },
    },
    BenefitRule {
        key: "training_voucher",
        category: BenefitCategory::Vouchers,
        label: "Professional training voucher",
        timing: Timing::Voucher,
        applies: training_voucher_gate,
        outcome: |_, schedule| RuleOutcome {
            value: BenefitValue::Monetary(schedule.training_voucher_value),
            detail: "via the Ministry of Labor".to_string(),
        },
    },
    BenefitRule {
        key: "couples_assistance",
        category: BenefitCategory::SpecialGrants,
        label: "Couples assistance",
        timing: Timing::Benefit,
        // Only granted alongside the professional training voucher.
        applies: |profile, schedule| training_voucher_gate(profile, schedule) && profile.is_married,
        outcome: |_, schedule| {
            RuleOutcome::monetary(schedule.couples_assistance_grant, "one-time grant")
        },
    },
    BenefitRule {
        key: "spouse_grant",
        category: BenefitCategory::SpecialGrants,
        label: "Non-working spouse grant",
        timing: Timing::Immediate,
        applies: |profile, _| profile.is_married && profile.has_non_working_spouse,
        outcome: |_, schedule| RuleOutcome::monetary(schedule.spouse_grant, "one-time grant"),
    },
    BenefitRule {
        key: "self_employed_fund",
        category: BenefitCategory::Employment,
        label: "Self-employed assistance fund",
        timing: Timing::Benefit,
        applies: |profile, schedule| {
            profile.is_self_employed
                && profile.reserve_days >= schedule.self_employed_min_days
                && profile.emergency_call_up
        },
        outcome: |_, _| {
            RuleOutcome::non_monetary(
                "depends on turnover",
                "income-loss compensation via the Tax Authority",
            )
        },
    },
    BenefitRule {
        key: "licensing_fee_discount",
        category: BenefitCategory::General,
        label: "Vehicle licensing fee discount",
        timing: Timing::Benefit,
        applies: general_benefit_gate,
        outcome: |_, _| RuleOutcome::non_monetary("varies", "discounted vehicle licensing fees"),
    },
    BenefitRule {
        key: "public_transport_benefits",
        category: BenefitCategory::General,
        label: "Public transport benefits",
        timing: Timing::Benefit,
        applies: general_benefit_gate,
        outcome: |_, _| RuleOutcome::non_monetary("varies", "discounted public transport fares"),
    },
    BenefitRule {
        key: "health_insurance_benefits",
        category: BenefitCategory::General,
        label: "Supplementary health insurance benefits",
        timing: Timing::Benefit,
        applies: general_benefit_gate,
        outcome: |_, _| {
            RuleOutcome::non_monetary("varies", "discounted supplementary health insurance plans")
        },
    },
    BenefitRule {
        key: "culture_benefits",
        category: BenefitCategory::General,
        label: "Culture and leisure discounts",
        timing: Timing::Benefit,
        applies: general_benefit_gate,
        outcome: |_, _| {
            RuleOutcome::non_monetary("varies", "museums, theaters, and similar venues")
        },
    },
    BenefitRule {
        key: "lodging_benefits",
        category: BenefitCategory::General,
        label: "Hotel and lodging discounts",
        timing: Timing::Benefit,
        applies: general_benefit_gate,
        outcome: |_, _| {
            RuleOutcome::non_monetary("varies", "hotels, guest houses, and resort villages")
        },
    },
    BenefitRule {
        key: "medical_assistance",
        category: BenefitCategory::Health,
        label: "Dedicated medical assistance",
        timing: Timing::Benefit,
        applies: |profile, _| profile.needs_medical_assistance,
        outcome: |_, _| {
            RuleOutcome::non_monetary(
                "non-monetary",
                "via the Ministry of Defense rehabilitation branch for service-related injury or illness",
            )
        },
    },
    BenefitRule {
        key: "preferred_loans",
        category: BenefitCategory::General,
        label: "Preferred-terms loans",
        timing: Timing::Benefit,
        applies: |profile, _| profile.needs_preferred_loans,
        outcome: |_, _| {
            RuleOutcome::non_monetary("varies", "through participating banks and funds")
        },
    },
];

fn nii_compensation(profile: &InputProfile, schedule: &BenefitSchedule) -> RuleOutcome {
    let daily_rate = (profile.monthly_salary / 30.0).max(schedule.minimum_daily_rate);
    RuleOutcome::monetary(
        daily_rate * f64::from(profile.reserve_days),
        format!(
            "{:.2} per day for {} reserve days",
            daily_rate, profile.reserve_days
        ),
    )
}

fn emergency_supplement(profile: &InputProfile, schedule: &BenefitSchedule) -> RuleOutcome {
    RuleOutcome::monetary(
        schedule.emergency_daily_supplement * f64::from(profile.reserve_days),
        format!(
            "{:.2} per day under a Tzav 8 call-up",
            schedule.emergency_daily_supplement
        ),
    )
}

fn extended_family_steps(profile: &InputProfile, schedule: &BenefitSchedule) -> u32 {
    profile
        .reserve_days
        .saturating_sub(schedule.family_scaling_base_days)
        / 10
}

fn extended_family_grant(profile: &InputProfile, schedule: &BenefitSchedule) -> RuleOutcome {
    let steps = extended_family_steps(profile, schedule);
    RuleOutcome::monetary(
        f64::from(steps) * schedule.family_scaling_step_amount,
        format!(
            "{:.0} per 10 days served beyond the first {}",
            schedule.family_scaling_step_amount, schedule.family_scaling_base_days
        ),
    )
}

fn personal_expenses_grant(profile: &InputProfile, schedule: &BenefitSchedule) -> RuleOutcome {
    let steps = profile.reserve_days / 10;
    RuleOutcome::monetary(
        f64::from(steps) * schedule.personal_expenses_step_amount,
        format!(
            "{:.0} per full 10 days of service",
            schedule.personal_expenses_step_amount
        ),
    )
}

fn annual_grant(profile: &InputProfile, schedule: &BenefitSchedule) -> RuleOutcome {
    // The predicate guarantees a tier; zero keeps the outcome total if the
    // table is ever mis-edited.
    let amount = schedule
        .annual_grant(profile.unit_type, profile.reserve_days)
        .map(|tier| tier.amount)
        .unwrap_or(0.0);
    RuleOutcome::monetary(
        amount,
        format!(
            "for {} service days, paid on 1 May of the following year",
            profile.reserve_days
        ),
    )
}

fn capped_refund(declared: f64, ceiling: f64) -> RuleOutcome {
    RuleOutcome::monetary(declared.min(ceiling), "subject to receipts")
}

fn camps_refund(profile: &InputProfile, schedule: &BenefitSchedule) -> RuleOutcome {
    let ceiling = schedule.camps_ceiling_per_child * f64::from(profile.num_children);
    RuleOutcome::monetary(
        profile.expenses.camps.min(ceiling),
        format!("up to {:.0} per child", schedule.camps_ceiling_per_child),
    )
}

fn vacation_cancel_refund(profile: &InputProfile, schedule: &BenefitSchedule) -> RuleOutcome {
    let ceiling = schedule.vacation_cancel_family_ceiling
        + schedule.vacation_cancel_per_child * f64::from(profile.num_children);
    RuleOutcome::monetary(
        profile.expenses.vacation_cancel.min(ceiling),
        "following a Tzav 8 call-up",
    )
}

fn mortgage_rent_assistance(profile: &InputProfile, schedule: &BenefitSchedule) -> RuleOutcome {
    let declared = profile.expenses.mortgage_rent;
    let amount = match schedule.mortgage_rent_ceiling {
        Some(ceiling) => declared.min(ceiling),
        None => declared,
    };
    RuleOutcome::monetary(amount, "subject to receipts")
}

fn academic_credits(profile: &InputProfile, schedule: &BenefitSchedule) -> RuleOutcome {
    let points = schedule
        .academic_credits(profile.reserve_days)
        .unwrap_or_default();
    RuleOutcome::non_monetary(
        format!("{points} credit points"),
        "forwarded automatically to institutions",
    )
}

fn training_voucher_gate(profile: &InputProfile, schedule: &BenefitSchedule) -> bool {
    profile.reserve_days >= schedule.training_voucher_min_days && profile.emergency_call_up
}

fn general_benefit_gate(profile: &InputProfile, schedule: &BenefitSchedule) -> bool {
    profile.reserve_days >= schedule.general_benefits_min_days
}
