use metrics_exporter_prometheus::PrometheusHandle;
use reserve_benefits::config::AppConfig;
use reserve_benefits::entitlements::{EntitlementEngine, UnitType};
use reserve_benefits::error::AppError;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the engine from the configured schedule revision.
pub(crate) fn build_engine(config: &AppConfig) -> Result<EntitlementEngine, AppError> {
    let schedule = config.engine.load_schedule()?;
    Ok(EntitlementEngine::new(schedule))
}

pub(crate) fn parse_unit(raw: &str) -> Result<UnitType, String> {
    match raw
        .trim()
        .to_ascii_lowercase()
        .replace(['_', '-'], " ")
        .as_str()
    {
        "combatant" | "combat" => Ok(UnitType::Combatant),
        "combat support" | "support" => Ok(UnitType::CombatSupport),
        "rear" | "home front" => Ok(UnitType::Rear),
        other => Err(format!(
            "unknown unit type '{other}' (expected combatant, combat-support, or rear)"
        )),
    }
}
