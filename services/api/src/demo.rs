use chrono::Local;
use clap::Args;
use reserve_benefits::config::AppConfig;
use reserve_benefits::entitlements::{
    bucket_sections, parse_profiles, BenefitValue, DeclaredExpenses, EvaluationResult,
    InputProfile, UnitType,
};
use reserve_benefits::error::AppError;
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Evaluate a whole CSV roster instead of a single profile
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Gross monthly salary
    #[arg(long, required_unless_present = "csv")]
    pub(crate) salary: Option<f64>,
    /// Reserve days served
    #[arg(long, required_unless_present = "csv")]
    pub(crate) days: Option<u32>,
    /// Unit type: combatant, combat-support, or rear
    #[arg(long, value_parser = crate::infra::parse_unit, required_unless_present = "csv")]
    pub(crate) unit: Option<UnitType>,
    /// Number of children under 14
    #[arg(long, default_value_t = 0)]
    pub(crate) children: u32,
    #[arg(long)]
    pub(crate) married: bool,
    #[arg(long)]
    pub(crate) non_working_spouse: bool,
    #[arg(long)]
    pub(crate) student: bool,
    #[arg(long)]
    pub(crate) self_employed: bool,
    /// Service under an emergency Tzav 8 call-up
    #[arg(long)]
    pub(crate) tzav8: bool,
    /// Service covering holiday periods
    #[arg(long)]
    pub(crate) holiday_service: bool,
    #[arg(long)]
    pub(crate) medical_assistance: bool,
    #[arg(long)]
    pub(crate) preferred_loans: bool,
    /// Declared therapy cost
    #[arg(long, default_value_t = 0.0)]
    pub(crate) therapy: f64,
    /// Declared babysitter / home help cost
    #[arg(long, default_value_t = 0.0)]
    pub(crate) babysitter: f64,
    /// Declared pet boarding cost
    #[arg(long, default_value_t = 0.0)]
    pub(crate) pet_boarding: f64,
    /// Declared cancelled vacation/flight cost
    #[arg(long, default_value_t = 0.0)]
    pub(crate) vacation_cancel: f64,
    /// Declared day camps / after-school care cost
    #[arg(long, default_value_t = 0.0)]
    pub(crate) camps: f64,
    /// Declared tuition cost
    #[arg(long, default_value_t = 0.0)]
    pub(crate) tuition: f64,
    /// Declared toll road cost
    #[arg(long, default_value_t = 0.0)]
    pub(crate) road_toll: f64,
    /// Declared mortgage or rent cost
    #[arg(long, default_value_t = 0.0)]
    pub(crate) mortgage_rent: f64,
    /// Print the raw JSON payload instead of the rendered breakdown
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print raw JSON payloads instead of rendered breakdowns
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = crate::infra::build_engine(&config)?;

    if let Some(path) = &args.csv {
        let file = File::open(path)?;
        let profiles = parse_profiles(file)?;
        for labeled in &profiles {
            let result = engine.evaluate(&labeled.profile);
            print_result(&labeled.label, &result, args.json)?;
        }
        return Ok(());
    }

    let profile = profile_from_args(&args);
    profile.validate()?;
    let result = engine.evaluate(&profile);
    print_result("profile", &result, args.json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = crate::infra::build_engine(&config)?;

    println!("Reserve benefits demo ({})", Local::now().date_naive());
    println!(
        "Schedule revision: {}",
        engine.schedule().version
    );

    for (label, profile) in demo_profiles() {
        println!();
        let result = engine.evaluate(&profile);
        print_result(label, &result, args.json)?;
    }

    Ok(())
}

fn profile_from_args(args: &EvaluateArgs) -> InputProfile {
    InputProfile {
        // required_unless_present guarantees these when --csv is absent
        monthly_salary: args.salary.unwrap_or_default(),
        reserve_days: args.days.unwrap_or_default(),
        unit_type: args.unit.unwrap_or(UnitType::Rear),
        num_children: args.children,
        is_married: args.married,
        has_non_working_spouse: args.non_working_spouse,
        is_student: args.student,
        is_self_employed: args.self_employed,
        emergency_call_up: args.tzav8,
        served_during_holidays: args.holiday_service,
        needs_medical_assistance: args.medical_assistance,
        needs_preferred_loans: args.preferred_loans,
        expenses: DeclaredExpenses {
            therapy: args.therapy,
            babysitter: args.babysitter,
            pet_boarding: args.pet_boarding,
            vacation_cancel: args.vacation_cancel,
            camps: args.camps,
            tuition: args.tuition,
            road_toll: args.road_toll,
            mortgage_rent: args.mortgage_rent,
        },
    }
}

fn print_result(label: &str, result: &EvaluationResult, json: bool) -> Result<(), AppError> {
    if json {
        match serde_json::to_string_pretty(result) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("  payload unavailable: {err}"),
        }
        return Ok(());
    }

    render_evaluation(label, result);
    Ok(())
}

fn render_evaluation(label: &str, result: &EvaluationResult) {
    println!("=== {label} ===");

    for section in bucket_sections(result) {
        println!("{} (subtotal {:.2})", section.bucket_label, section.subtotal);
        for record in section.records {
            match &record.value {
                BenefitValue::Monetary(amount) => {
                    println!("  - {}: {:.2} ({})", record.label, amount, record.detail);
                }
                BenefitValue::NonMonetary { note } => {
                    println!("  - {}: {} ({})", record.label, note, record.detail);
                }
            }
        }
    }

    println!(
        "Total value: {:.2} | immediate {:.2} | future {:.2} | potential {:.2}",
        result.totals.total_all,
        result.totals.immediate,
        result.totals.future,
        result.totals.potential
    );
    println!(
        "Per service day: {:.2} direct, {:.2} if fully realized",
        result.totals.immediate_per_day, result.totals.value_per_day
    );
}

fn demo_profiles() -> Vec<(&'static str, InputProfile)> {
    let wartime_parent = InputProfile {
        monthly_salary: 18_000.0,
        reserve_days: 32,
        unit_type: UnitType::Combatant,
        num_children: 2,
        is_married: true,
        has_non_working_spouse: false,
        is_student: false,
        is_self_employed: false,
        emergency_call_up: true,
        served_during_holidays: true,
        needs_medical_assistance: false,
        needs_preferred_loans: false,
        expenses: DeclaredExpenses {
            therapy: 1_200.0,
            babysitter: 3_000.0,
            camps: 4_500.0,
            road_toll: 220.0,
            ..DeclaredExpenses::default()
        },
    };

    let student = InputProfile {
        monthly_salary: 7_500.0,
        reserve_days: 45,
        unit_type: UnitType::Rear,
        num_children: 0,
        is_married: false,
        has_non_working_spouse: false,
        is_student: true,
        is_self_employed: false,
        emergency_call_up: true,
        served_during_holidays: false,
        needs_medical_assistance: false,
        needs_preferred_loans: false,
        expenses: DeclaredExpenses {
            tuition: 9_000.0,
            mortgage_rent: 2_600.0,
            ..DeclaredExpenses::default()
        },
    };

    let self_employed = InputProfile {
        monthly_salary: 24_000.0,
        reserve_days: 14,
        unit_type: UnitType::CombatSupport,
        num_children: 1,
        is_married: true,
        has_non_working_spouse: true,
        is_student: false,
        is_self_employed: true,
        emergency_call_up: true,
        served_during_holidays: false,
        needs_medical_assistance: false,
        needs_preferred_loans: true,
        expenses: DeclaredExpenses {
            vacation_cancel: 8_000.0,
            pet_boarding: 900.0,
            ..DeclaredExpenses::default()
        },
    };

    vec![
        ("Wartime combatant parent", wartime_parent),
        ("Student, rear unit, 45 days", student),
        ("Self-employed, combat support", self_employed),
    ]
}
