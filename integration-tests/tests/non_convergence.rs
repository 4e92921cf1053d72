//! The step budget running out is reported, not raised.

use integration_tests::{CapturedWarnings, surface_pulse};
use soilmix_solvers::steady_state::{self, Config, Status};

#[test]
fn exhausted_budget_warns_and_returns_history() {
    let warnings = CapturedWarnings::install();

    let config = Config::new(Config::default().dt(), 1e-12, 1).unwrap();
    let solution = steady_state::solve_unobserved(&surface_pulse(), &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.history.as_array().dim(), (4, 2));
    assert!(warnings.contains("steady state not reached after 1 steps"));
}
