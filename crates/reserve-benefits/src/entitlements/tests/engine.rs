use super::common::*;
use crate::entitlements::domain::{PayoutBucket, UnitType};

#[test]
fn wartime_combatant_profile_splits_immediate_and_future() {
    let engine = engine();
    let mut profile = base_profile(15_000.0, 30, UnitType::Combatant);
    profile.emergency_call_up = true;

    let result = engine.evaluate(&profile);

    // Salary-derived rate (500/day) beats the minimum daily rate.
    assert_close(
        record_amount(&result, "nii_compensation").expect("base compensation"),
        500.0 * 30.0,
    );
    assert_close(
        record_amount(&result, "emergency_supplement").expect("wartime supplement"),
        144.43 * 30.0,
    );
    // Combatant family grant fires at ten days; the non-combatant variant
    // must stay silent.
    assert_close(
        record_amount(&result, "enlarged_family_grant_combatant").expect("combatant grant"),
        2_000.0,
    );
    assert!(!has_record(&result, "enlarged_family_grant"));
    // No children, so the child-gated family grant stays out.
    assert!(!has_record(&result, "family_grant_children"));

    let expected_immediate = 500.0 * 30.0 + 144.43 * 30.0 + 2_000.0 + 3.0 * 466.0;
    assert_close(result.totals.immediate, expected_immediate);
    // 30 days lands in the 20-day annual tier, paid in the future bucket.
    assert_close(result.totals.future, 4_050.0);
    assert_close(result.totals.potential, 0.0);
    assert_close(
        result.totals.total_all,
        result.totals.immediate + result.totals.future + result.totals.potential,
    );
}

#[test]
fn zero_days_yields_zero_totals_without_division_error() {
    let engine = engine();
    let profile = base_profile(18_000.0, 0, UnitType::CombatSupport);

    let result = engine.evaluate(&profile);

    assert!(result.records.is_empty());
    assert_close(result.totals.total_all, 0.0);
    assert_close(result.totals.value_per_day, 0.0);
    assert_close(result.totals.immediate_per_day, 0.0);
}

#[test]
fn rear_profile_at_45_days_fires_voucher_and_couples_pair() {
    let engine = engine();
    let mut profile = base_profile(9_000.0, 45, UnitType::Rear);
    profile.emergency_call_up = true;
    profile.is_married = true;

    let result = engine.evaluate(&profile);

    assert_close(
        record_amount(&result, "training_voucher").expect("training voucher"),
        7_500.0,
    );
    assert_close(
        record_amount(&result, "couples_assistance").expect("couples assistance"),
        2_500.0,
    );
    // Rear units get the lowest vacation voucher value.
    assert_close(
        record_amount(&result, "vacation_voucher").expect("vacation voucher"),
        1_500.0,
    );

    // Without the training gate, couples assistance must not fire on its own.
    let mut below_gate = profile.clone();
    below_gate.reserve_days = 40;
    let result = engine.evaluate(&below_gate);
    assert!(!has_record(&result, "training_voucher"));
    assert!(!has_record(&result, "couples_assistance"));

    // Married is necessary but not sufficient.
    let mut unmarried = profile;
    unmarried.is_married = false;
    let result = engine.evaluate(&unmarried);
    assert!(has_record(&result, "training_voucher"));
    assert!(!has_record(&result, "couples_assistance"));
}

#[test]
fn babysitter_refund_uses_combatant_ceiling() {
    let engine = engine();
    let mut profile = base_profile(12_000.0, 10, UnitType::Combatant);
    profile.num_children = 1;
    profile.expenses.babysitter = 5_000.0;

    let result = engine.evaluate(&profile);

    assert_close(
        record_amount(&result, "babysitter_refund").expect("combatant refund"),
        2_500.0,
    );

    // Ten days is below the non-combatant gate entirely.
    let mut rear = base_profile(12_000.0, 10, UnitType::Rear);
    rear.num_children = 1;
    rear.expenses.babysitter = 5_000.0;
    let result = engine.evaluate(&rear);
    assert!(!has_record(&result, "babysitter_refund"));
}

#[test]
fn camps_refund_requires_holiday_service() {
    let engine = engine();
    let mut profile = base_profile(12_000.0, 20, UnitType::Combatant);
    profile.num_children = 2;
    profile.expenses.camps = 1_000.0;
    profile.served_during_holidays = false;

    let result = engine.evaluate(&profile);
    assert!(!has_record(&result, "camps_refund"));

    profile.served_during_holidays = true;
    let result = engine.evaluate(&profile);
    assert_close(
        record_amount(&result, "camps_refund").expect("camps refund"),
        1_000.0,
    );
}

#[test]
fn totals_equal_sum_of_monetary_amounts() {
    let engine = engine();
    let mut profile = base_profile(22_000.0, 52, UnitType::CombatSupport);
    profile.num_children = 3;
    profile.is_married = true;
    profile.has_non_working_spouse = true;
    profile.is_student = true;
    profile.is_self_employed = true;
    profile.emergency_call_up = true;
    profile.served_during_holidays = true;
    profile.needs_medical_assistance = true;
    profile.needs_preferred_loans = true;
    profile.expenses.therapy = 2_400.0;
    profile.expenses.babysitter = 1_000.0;
    profile.expenses.pet_boarding = 750.0;
    profile.expenses.vacation_cancel = 20_000.0;
    profile.expenses.camps = 9_000.0;
    profile.expenses.tuition = 14_000.0;
    profile.expenses.road_toll = 410.0;
    profile.expenses.mortgage_rent = 3_200.0;

    let result = engine.evaluate(&profile);

    let monetary_sum: f64 = result
        .records
        .iter()
        .filter_map(|record| record.value.monetary())
        .sum();
    let bucket_sum =
        result.totals.immediate + result.totals.future + result.totals.potential;

    assert_close(result.totals.total_all, monetary_sum);
    assert_close(result.totals.total_all, bucket_sum);

    // Non-monetary markers appear in the listing but never in the sums or
    // the chart.
    assert!(has_record(&result, "self_employed_fund"));
    assert!(has_record(&result, "medical_assistance"));
    assert!(result
        .chart
        .iter()
        .all(|slice| slice.amount > 0.0));
    let chart_sum: f64 = result.chart.iter().map(|slice| slice.amount).sum();
    assert_close(chart_sum, monetary_sum);
}

#[test]
fn evaluation_is_deterministic() {
    let engine = engine();
    let mut profile = base_profile(17_500.0, 33, UnitType::Combatant);
    profile.num_children = 2;
    profile.is_married = true;
    profile.emergency_call_up = true;
    profile.expenses.therapy = 900.0;

    let first = engine.evaluate(&profile);
    let second = engine.evaluate(&profile);

    assert_eq!(first, second);
}

#[test]
fn tier_grants_never_decrease_as_days_grow() {
    let engine = engine();
    let tiered_rules = [
        "annual_grant",
        "personal_expenses_grant",
        "extended_family_grant",
        "family_grant_children",
        "enlarged_family_grant_combatant",
    ];

    let mut previous = vec![0.0; tiered_rules.len()];
    for days in 0..=70 {
        let mut profile = base_profile(14_000.0, days, UnitType::Combatant);
        profile.num_children = 2;
        profile.is_married = true;
        profile.emergency_call_up = true;

        let result = engine.evaluate(&profile);
        for (slot, rule) in tiered_rules.iter().enumerate() {
            let amount = record_amount(&result, rule).unwrap_or(0.0);
            assert!(
                amount + 1e-9 >= previous[slot],
                "{rule} decreased from {} to {amount} at {days} days",
                previous[slot]
            );
            previous[slot] = amount;
        }
    }
}

#[test]
fn bucket_sections_group_records_by_timing() {
    let engine = engine();
    let mut profile = base_profile(15_000.0, 45, UnitType::Combatant);
    profile.emergency_call_up = true;

    let result = engine.evaluate(&profile);
    let sections = crate::entitlements::report::bucket_sections(&result);

    assert_eq!(sections.len(), 3);
    assert_eq!(sections[0].bucket, PayoutBucket::Immediate);
    assert_close(sections[0].subtotal, result.totals.immediate);
    assert_eq!(sections[1].bucket, PayoutBucket::Future);
    assert_eq!(sections[2].bucket, PayoutBucket::Potential);
    let listed: usize = sections.iter().map(|section| section.records.len()).sum();
    assert_eq!(listed, result.records.len());
}
