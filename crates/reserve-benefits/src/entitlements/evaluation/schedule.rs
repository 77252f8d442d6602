use serde::{Deserialize, Serialize};

use super::super::domain::UnitType;

/// One tier of the annual grant. Tiers are stored highest threshold first
/// and resolved first-match, so a profile never collects two tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualGrantTier {
    pub min_days: u32,
    pub amount: f64,
    /// The lowest published tier applies to combat units only.
    #[serde(default)]
    pub combatant_only: bool,
}

/// Academic credit-point tier for students, resolved first-match descending.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcademicCreditTier {
    pub min_days: u32,
    pub credit_points: u8,
}

/// The complete, versioned rule data: every rate, grant amount, ceiling, and
/// day threshold the evaluator consults. Threshold revisions are data edits
/// here, not branch-logic edits in the rule table.
///
/// The default schedule carries the published wartime figures; a different
/// revision can be loaded from JSON via the application config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitSchedule {
    pub version: String,

    /// Floor for the per-day National Insurance compensation rate.
    pub minimum_daily_rate: f64,
    /// Flat per-day supplement for emergency call-up service.
    pub emergency_daily_supplement: f64,

    pub family_grant_children: f64,
    pub family_grant_children_min_days: u32,
    pub enlarged_family_grant: f64,
    pub enlarged_family_combatant_min_days: u32,
    pub enlarged_family_other_min_days: u32,

    /// Extended family grant: one step per 10 days served beyond the base.
    pub family_scaling_base_days: u32,
    pub family_scaling_step_amount: f64,
    /// Personal-expenses grant: one step per full 10 days of service.
    pub personal_expenses_step_amount: f64,

    pub annual_grant_tiers: Vec<AnnualGrantTier>,

    pub therapy_ceiling: f64,
    pub babysitter_ceiling_combatant: f64,
    pub babysitter_ceiling_other: f64,
    pub babysitter_combatant_min_days: u32,
    pub babysitter_other_min_days: u32,
    pub pet_boarding_ceiling: f64,
    pub pet_boarding_min_days: u32,
    pub camps_ceiling_per_child: f64,
    pub vacation_cancel_family_ceiling: f64,
    pub vacation_cancel_per_child: f64,
    pub tuition_ceiling_combatant: f64,
    pub tuition_ceiling_other: f64,
    pub tuition_min_days: u32,
    pub road_toll_monthly_ceiling: f64,
    /// `None` means the declared cost is reimbursed in full.
    pub mortgage_rent_ceiling: Option<f64>,

    pub academic_credit_tiers: Vec<AcademicCreditTier>,

    pub vacation_voucher_min_days: u32,
    pub vacation_voucher_combatant: f64,
    pub vacation_voucher_combat_support: f64,
    pub vacation_voucher_rear: f64,
    pub training_voucher_value: f64,
    pub training_voucher_min_days: u32,
    pub couples_assistance_grant: f64,
    pub spouse_grant: f64,

    pub municipal_discount_min_days: u32,
    pub self_employed_min_days: u32,
    pub general_benefits_min_days: u32,
}

impl BenefitSchedule {
    pub fn babysitter_ceiling(&self, unit: UnitType) -> f64 {
        if unit.is_combatant() {
            self.babysitter_ceiling_combatant
        } else {
            self.babysitter_ceiling_other
        }
    }

    pub fn babysitter_min_days(&self, unit: UnitType) -> u32 {
        if unit.is_combatant() {
            self.babysitter_combatant_min_days
        } else {
            self.babysitter_other_min_days
        }
    }

    pub fn tuition_ceiling(&self, unit: UnitType) -> f64 {
        if unit.is_combatant() {
            self.tuition_ceiling_combatant
        } else {
            self.tuition_ceiling_other
        }
    }

    pub fn vacation_voucher_value(&self, unit: UnitType) -> f64 {
        match unit {
            UnitType::Combatant => self.vacation_voucher_combatant,
            UnitType::CombatSupport => self.vacation_voucher_combat_support,
            UnitType::Rear => self.vacation_voucher_rear,
        }
    }

    /// First annual tier met, scanning highest threshold downward. The
    /// combatant-only tier is skipped for other units rather than falling
    /// through to a lower tier.
    pub fn annual_grant(&self, unit: UnitType, days: u32) -> Option<&AnnualGrantTier> {
        self.annual_grant_tiers
            .iter()
            .find(|tier| days >= tier.min_days)
            .filter(|tier| !tier.combatant_only || unit.is_combatant())
    }

    /// Credit points for the highest tier met, if any.
    pub fn academic_credits(&self, days: u32) -> Option<u8> {
        self.academic_credit_tiers
            .iter()
            .find(|tier| days >= tier.min_days)
            .map(|tier| tier.credit_points)
    }
}

impl Default for BenefitSchedule {
    fn default() -> Self {
        Self {
            version: "2025-05".to_string(),
            minimum_daily_rate: 310.5,
            emergency_daily_supplement: 144.43,
            family_grant_children: 2_500.0,
            family_grant_children_min_days: 8,
            enlarged_family_grant: 2_000.0,
            enlarged_family_combatant_min_days: 10,
            enlarged_family_other_min_days: 30,
            family_scaling_base_days: 30,
            family_scaling_step_amount: 1_000.0,
            personal_expenses_step_amount: 466.0,
            annual_grant_tiers: vec![
                AnnualGrantTier {
                    min_days: 37,
                    amount: 5_400.0,
                    combatant_only: false,
                },
                AnnualGrantTier {
                    min_days: 20,
                    amount: 4_050.0,
                    combatant_only: false,
                },
                AnnualGrantTier {
                    min_days: 15,
                    amount: 2_700.0,
                    combatant_only: false,
                },
                AnnualGrantTier {
                    min_days: 10,
                    amount: 1_350.0,
                    combatant_only: true,
                },
            ],
            therapy_ceiling: 1_500.0,
            babysitter_ceiling_combatant: 2_500.0,
            babysitter_ceiling_other: 1_500.0,
            babysitter_combatant_min_days: 10,
            babysitter_other_min_days: 35,
            pet_boarding_ceiling: 500.0,
            pet_boarding_min_days: 8,
            camps_ceiling_per_child: 2_000.0,
            vacation_cancel_family_ceiling: 5_000.0,
            vacation_cancel_per_child: 2_500.0,
            tuition_ceiling_combatant: 12_000.0,
            tuition_ceiling_other: 5_000.0,
            tuition_min_days: 28,
            road_toll_monthly_ceiling: 300.0,
            mortgage_rent_ceiling: None,
            academic_credit_tiers: vec![
                AcademicCreditTier {
                    min_days: 28,
                    credit_points: 4,
                },
                AcademicCreditTier {
                    min_days: 14,
                    credit_points: 2,
                },
            ],
            vacation_voucher_min_days: 45,
            vacation_voucher_combatant: 4_500.0,
            vacation_voucher_combat_support: 3_000.0,
            vacation_voucher_rear: 1_500.0,
            training_voucher_value: 7_500.0,
            training_voucher_min_days: 45,
            couples_assistance_grant: 2_500.0,
            spouse_grant: 4_500.0,
            municipal_discount_min_days: 20,
            self_employed_min_days: 8,
            general_benefits_min_days: 10,
        }
    }
}
