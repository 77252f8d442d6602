//! CSV intake for batch evaluation.
//!
//! Accepts a spreadsheet export with one service profile per row, so a unit
//! clerk can estimate entitlements for a whole roster at once. Rows are
//! validated on the way in; bad numbers or unknown unit labels are intake
//! errors, never silently clamped.

use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::domain::{DeclaredExpenses, InputProfile, ProfileError, UnitType};

/// A parsed roster row: the display label plus the validated profile.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledProfile {
    pub label: String,
    pub profile: InputProfile,
}

/// Errors raised while reading a roster export.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("row {row}: {source}")]
    InvalidProfile {
        row: usize,
        #[source]
        source: ProfileError,
    },
}

pub fn parse_profiles<R: Read>(reader: R) -> Result<Vec<LabeledProfile>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut profiles = Vec::new();

    for (index, record) in csv_reader.deserialize::<ProfileRow>().enumerate() {
        // Header occupies line 1.
        let row = index + 2;
        let parsed = record?;
        let labeled = parsed.into_labeled(row);
        labeled
            .profile
            .validate()
            .map_err(|source| IntakeError::InvalidProfile { row, source })?;
        profiles.push(labeled);
    }

    Ok(profiles)
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    #[serde(rename = "Label", default)]
    label: Option<String>,
    #[serde(rename = "Gross Salary")]
    gross_salary: f64,
    #[serde(rename = "Reserve Days")]
    reserve_days: u32,
    #[serde(rename = "Unit", deserialize_with = "unit_from_str")]
    unit: UnitType,
    #[serde(rename = "Children", default)]
    children: u32,
    #[serde(rename = "Married", default, deserialize_with = "flag_from_str")]
    married: bool,
    #[serde(
        rename = "Non-Working Spouse",
        default,
        deserialize_with = "flag_from_str"
    )]
    non_working_spouse: bool,
    #[serde(rename = "Student", default, deserialize_with = "flag_from_str")]
    student: bool,
    #[serde(rename = "Self-Employed", default, deserialize_with = "flag_from_str")]
    self_employed: bool,
    #[serde(rename = "Tzav 8", default, deserialize_with = "flag_from_str")]
    tzav_8: bool,
    #[serde(
        rename = "Holiday Service",
        default,
        deserialize_with = "flag_from_str"
    )]
    holiday_service: bool,
    #[serde(
        rename = "Medical Assistance",
        default,
        deserialize_with = "flag_from_str"
    )]
    medical_assistance: bool,
    #[serde(
        rename = "Preferred Loans",
        default,
        deserialize_with = "flag_from_str"
    )]
    preferred_loans: bool,
    #[serde(rename = "Therapy Cost", default)]
    therapy_cost: f64,
    #[serde(rename = "Babysitter Cost", default)]
    babysitter_cost: f64,
    #[serde(rename = "Pet Boarding Cost", default)]
    pet_boarding_cost: f64,
    #[serde(rename = "Vacation Cancel Cost", default)]
    vacation_cancel_cost: f64,
    #[serde(rename = "Camps Cost", default)]
    camps_cost: f64,
    #[serde(rename = "Tuition Cost", default)]
    tuition_cost: f64,
    #[serde(rename = "Road Toll Cost", default)]
    road_toll_cost: f64,
    #[serde(rename = "Mortgage Rent Cost", default)]
    mortgage_rent_cost: f64,
}

impl ProfileRow {
    fn into_labeled(self, row: usize) -> LabeledProfile {
        let label = self
            .label
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| format!("row {row}"));

        LabeledProfile {
            label,
            profile: InputProfile {
                monthly_salary: self.gross_salary,
                reserve_days: self.reserve_days,
                unit_type: self.unit,
                num_children: self.children,
                is_married: self.married,
                has_non_working_spouse: self.non_working_spouse,
                is_student: self.student,
                is_self_employed: self.self_employed,
                emergency_call_up: self.tzav_8,
                served_during_holidays: self.holiday_service,
                needs_medical_assistance: self.medical_assistance,
                needs_preferred_loans: self.preferred_loans,
                expenses: DeclaredExpenses {
                    therapy: self.therapy_cost,
                    babysitter: self.babysitter_cost,
                    pet_boarding: self.pet_boarding_cost,
                    vacation_cancel: self.vacation_cancel_cost,
                    camps: self.camps_cost,
                    tuition: self.tuition_cost,
                    road_toll: self.road_toll_cost,
                    mortgage_rent: self.mortgage_rent_cost,
                },
            },
        }
    }
}

fn unit_from_str<'de, D>(deserializer: D) -> Result<UnitType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().replace(['_', '-'], " ").as_str() {
        "combatant" | "combat" => Ok(UnitType::Combatant),
        "combat support" | "support" => Ok(UnitType::CombatSupport),
        "rear" | "home front" => Ok(UnitType::Rear),
        other => Err(serde::de::Error::custom(format!(
            "unknown unit type '{other}' (expected combatant, combat support, or rear)"
        ))),
    }
}

fn flag_from_str<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "" | "n" | "no" | "false" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid flag '{other}' (expected yes or no)"
        ))),
    }
}
