//! End-to-end evaluation from a scenario file on disk.

use hv_app::{evaluate_voyage, load_scenario, AppError};
use hv_core::numeric::{nearly_equal, Tolerances};
use hv_results::DieselBaseline;
use std::path::Path;

#[test]
fn high_carbon_price_scenario_end_to_end() {
    let scenario = load_scenario(Path::new("../../scenarios/high_carbon_price.yaml"))
        .expect("sample scenario should load");
    let assessment = evaluate_voyage(&scenario, &DieselBaseline::default()).unwrap();

    let tol = Tolerances::default();
    let outcome = &assessment.outcome;

    // 400 km at 30 km/h, 1500 kW derated to 80%.
    assert!(nearly_equal(outcome.mission.duration_hours, 400.0 / 30.0, tol));
    assert!(nearly_equal(outcome.hydrogen.adjusted_power_kw, 1200.0, tol));
    assert!(nearly_equal(outcome.hydrogen.energy_required_kwh, 16_000.0, tol));

    let expected_h2 = 16_000.0 / (33.33 * 0.50);
    assert!(nearly_equal(outcome.hydrogen.hydrogen_needed_kg, expected_h2, tol));

    // Carbon cost at 250 USD/t on a 10 kg CO2e/kg H2 factor.
    let expected_emissions = expected_h2 * 10.0;
    assert!(nearly_equal(
        outcome.emissions.total_emissions_kg_co2e,
        expected_emissions,
        tol
    ));
    assert!(nearly_equal(
        outcome.cost.carbon_cost_usd,
        expected_emissions / 1000.0 * 250.0,
        tol
    ));
    assert_eq!(
        outcome.cost.total_cost_usd,
        outcome.cost.fuel_cost_usd + outcome.cost.carbon_cost_usd
    );

    // Baseline deltas come from the same emissions record.
    assert_eq!(
        assessment.baseline.baseline_emissions_total_kg_co2e,
        70.0 * 400.0
    );
    assert_eq!(
        assessment.baseline.carbon_savings_kg_co2e,
        70.0 * 400.0 - outcome.emissions.total_emissions_kg_co2e
    );
}

#[test]
fn missing_scenario_file_is_a_scenario_error() {
    let err = load_scenario(Path::new("../../scenarios/does_not_exist.yaml")).unwrap_err();
    assert!(matches!(err, AppError::Scenario(_)));
}

#[test]
fn zero_distance_never_reaches_the_pipeline() {
    let mut scenario = load_scenario(Path::new("../../scenarios/ferry_short_hop.yaml")).unwrap();
    scenario.route_km = 0.0;

    match evaluate_voyage(&scenario, &DieselBaseline::default()) {
        Err(AppError::Validation(msg)) => assert!(msg.contains("route_km")),
        other => panic!("expected validation failure, got {other:?}"),
    }
}
