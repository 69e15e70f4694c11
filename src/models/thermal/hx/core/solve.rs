use std::collections::BTreeSet;

use log::{debug, warn};

use crate::support::hx::ShellAndTube;

use super::{
    ArrangementComparison, ConvergenceConfig, FlowArrangement, HxProblem, KnownValues, Parameter,
    Performance, Solution, SolveError, Values, coupled, derivation,
};

/// Unknown counts above this are allowed but unusual.
const TYPICAL_MAX_UNKNOWNS: usize = 5;

/// Derives the requested unknowns of `problem` and evaluates performance.
///
/// Every parameter reachable from the knowns is derived, not only the
/// requested ones. Requested unknowns that stay out of reach are listed in
/// [`Solution::unresolved`].
///
/// # Errors
///
/// Fails fast with [`SolveError::InsufficientKnowns`],
/// [`SolveError::NoUnknownsSelected`] or [`SolveError::MissingValue`] on
/// malformed input, and reports infeasible temperatures or a failed
/// shell-and-tube iteration.
pub fn solve(problem: &HxProblem, config: &ConvergenceConfig) -> Result<Solution, SolveError> {
    let HxProblem {
        known,
        unknowns,
        arrangement,
    } = problem;
    let arrangement = *arrangement;

    if known.is_empty() {
        return Err(SolveError::InsufficientKnowns);
    }
    if unknowns.is_empty() {
        return Err(SolveError::NoUnknownsSelected);
    }
    let mut values = known_values(known)?;

    if unknowns.len() > TYPICAL_MAX_UNKNOWNS {
        warn!(
            "{} unknowns requested; more than {TYPICAL_MAX_UNKNOWNS} rarely resolve",
            unknowns.len()
        );
    }
    for &parameter in unknowns.iter().filter(|&&p| known.contains(p)) {
        warn!("{parameter} is listed as both known and unknown; treating it as known");
    }

    loop {
        values = derivation::derive(values, arrangement)?;
        match coupled::resolve_outlets(&values, arrangement, config)? {
            Some(with_outlets) => values = with_outlets,
            None => break,
        }
    }

    SolveError::check_physical(arrangement, &values)?;
    let performance = Performance::evaluate(arrangement, &values)?;

    let unresolved: BTreeSet<Parameter> = unknowns
        .iter()
        .copied()
        .filter(|&p| !values.has(p))
        .collect();
    if !unresolved.is_empty() {
        debug!("{arrangement}: unresolved unknowns {unresolved:?}");
    }

    Ok(Solution {
        values: values.to_map(),
        performance,
        unresolved,
    })
}

/// Evaluates the same boundary temperatures under parallel flow, counter
/// flow and shell-and-tube with `layout`.
///
/// Any duty, capacity rates, `U` and `A` among the knowns feed the metrics;
/// a missing duty is derived per arrangement where possible.
///
/// # Errors
///
/// Returns [`SolveError::MissingValue`] if a known lacks a value or any of
/// the four terminal temperatures is absent. Per-arrangement failures are
/// reported inside the returned [`ArrangementComparison`].
pub fn compare_arrangements(
    known: &KnownValues,
    layout: ShellAndTube,
) -> Result<ArrangementComparison, SolveError> {
    let values = known_values(known)?;

    for parameter in [
        Parameter::HotInletTemperature,
        Parameter::HotOutletTemperature,
        Parameter::ColdInletTemperature,
        Parameter::ColdOutletTemperature,
    ] {
        if !values.has(parameter) {
            return Err(SolveError::MissingValue { parameter });
        }
    }

    let evaluate = |arrangement: FlowArrangement| {
        let values = derivation::derive(values, arrangement)?;
        SolveError::check_physical(arrangement, &values)?;
        Performance::evaluate(arrangement, &values)
    };

    Ok(ArrangementComparison {
        parallel_flow: evaluate(FlowArrangement::ParallelFlow),
        counter_flow: evaluate(FlowArrangement::CounterFlow),
        shell_and_tube: evaluate(FlowArrangement::ShellAndTube(layout)),
    })
}

/// Collects the declared knowns into a value record.
fn known_values(known: &KnownValues) -> Result<Values, SolveError> {
    known
        .iter()
        .try_fold(Values::default(), |values, (parameter, value)| match value {
            Some(v) if v.is_finite() => Ok(values.with(parameter, v)),
            _ => Err(SolveError::MissingValue { parameter }),
        })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    use Parameter::{
        Area, ColdInletTemperature, ColdMassFlowRate, ColdOutletTemperature, ColdSpecificHeat,
        HeatTransferRate, HotInletTemperature, HotMassFlowRate, HotOutletTemperature,
        HotSpecificHeat, OverallCoefficient,
    };

    fn celsius(c: f64) -> f64 {
        c + 273.15
    }

    fn solve_default(
        known: KnownValues,
        unknowns: impl IntoIterator<Item = Parameter>,
        arrangement: FlowArrangement,
    ) -> Result<Solution, SolveError> {
        solve(
            &HxProblem::new(known, unknowns, arrangement),
            &ConvergenceConfig::default(),
        )
    }

    /// Sized exchanger with both outlets unknown: U * A = 1200 W/K,
    /// C_h = 1500 W/K, C_c = 3000 W/K.
    fn rating_knowns() -> KnownValues {
        KnownValues::new()
            .with(OverallCoefficient, 400.0)
            .with(Area, 3.0)
            .with(HotInletTemperature, 360.0)
            .with(HotMassFlowRate, 0.5)
            .with(HotSpecificHeat, 3000.0)
            .with(ColdInletTemperature, 290.0)
            .with(ColdMassFlowRate, 1.0)
            .with(ColdSpecificHeat, 3000.0)
    }

    fn value(solution: &Solution, parameter: Parameter) -> f64 {
        solution.get(parameter).unwrap_or(f64::NAN)
    }

    #[test]
    fn energy_balance_closes() -> Result<(), SolveError> {
        let known = KnownValues::new()
            .with(HotInletTemperature, celsius(90.0))
            .with(HotOutletTemperature, celsius(60.0))
            .with(ColdInletTemperature, celsius(15.0))
            .with(HotMassFlowRate, 1.2)
            .with(HotSpecificHeat, 2100.0)
            .with(ColdMassFlowRate, 0.8)
            .with(ColdSpecificHeat, 4180.0);

        let solution = solve_default(
            known,
            [HeatTransferRate, ColdOutletTemperature],
            FlowArrangement::CounterFlow,
        )?;

        let q = value(&solution, HeatTransferRate);
        let hot = 1.2 * 2100.0 * 30.0;
        let cold =
            0.8 * 4180.0 * (value(&solution, ColdOutletTemperature) - celsius(15.0));
        assert_relative_eq!(q, hot, max_relative = 1e-6);
        assert_relative_eq!(q, cold, max_relative = 1e-6);
        assert!(solution.is_complete());
        Ok(())
    }

    #[test]
    fn sizing_area_from_coefficient() -> Result<(), SolveError> {
        let known = KnownValues::new()
            .with(HotInletTemperature, celsius(80.0))
            .with(HotOutletTemperature, celsius(50.0))
            .with(ColdInletTemperature, celsius(20.0))
            .with(ColdOutletTemperature, celsius(40.0))
            .with(HotMassFlowRate, 0.5)
            .with(HotSpecificHeat, 4000.0)
            .with(OverallCoefficient, 600.0);

        let solution = solve_default(known, [Area], FlowArrangement::CounterFlow)?;

        let lmtd = solution.performance.lmtd.unwrap_or_default();
        assert_relative_eq!(lmtd, 34.76, epsilon = 0.01);
        assert_relative_eq!(value(&solution, HeatTransferRate), 60_000.0, epsilon = 1e-6);
        assert_relative_eq!(
            value(&solution, Area),
            60_000.0 / (600.0 * lmtd),
            max_relative = 1e-9
        );
        // No cold-side specific heat, so its mass flow stays underived.
        assert!(!solution.values.contains_key(&ColdMassFlowRate));
        Ok(())
    }

    #[test]
    fn shell_and_tube_needs_more_area_than_counter_flow() -> Result<(), SolveError> {
        let known = KnownValues::new()
            .with(HotInletTemperature, celsius(80.0))
            .with(HotOutletTemperature, celsius(50.0))
            .with(ColdInletTemperature, celsius(20.0))
            .with(ColdOutletTemperature, celsius(40.0))
            .with(HeatTransferRate, 60_000.0)
            .with(OverallCoefficient, 600.0);

        let counter = solve_default(known.clone(), [Area], FlowArrangement::CounterFlow)?;
        let shell = solve_default(
            known,
            [Area],
            FlowArrangement::ShellAndTube(ShellAndTube::OneTwo),
        )?;

        let f = shell.performance.correction_factor.unwrap_or_default();
        assert!(f > 0.0 && f < 1.0);
        assert_relative_eq!(value(&shell, Area), value(&counter, Area) / f, max_relative = 1e-9);
        Ok(())
    }

    #[test]
    fn counter_flow_rating() -> Result<(), SolveError> {
        let solution = solve_default(
            rating_knowns(),
            [HotOutletTemperature, ColdOutletTemperature, HeatTransferRate],
            FlowArrangement::CounterFlow,
        )?;
        let perf = solution.performance;

        let eff = perf.effectiveness.unwrap_or(f64::NAN);
        assert!((0.0..=1.0).contains(&eff));
        assert_relative_eq!(eff, 0.495_88, epsilon = 1e-5);
        assert_relative_eq!(perf.ntu.unwrap_or_default(), 0.8);
        assert_relative_eq!(perf.capacity_ratio.unwrap_or_default(), 0.5);

        // The closed-form duty satisfies the rate equation.
        assert_relative_eq!(
            value(&solution, HeatTransferRate),
            1200.0 * perf.lmtd.unwrap_or_default(),
            max_relative = 1e-9
        );
        Ok(())
    }

    #[test]
    fn counter_flow_rating_with_rounded_equal_capacity_rates() -> Result<(), SolveError> {
        // 0.23 * 4400 and 0.55 * 1840 differ only in the last bit.
        let known = KnownValues::new()
            .with(OverallCoefficient, 1000.0)
            .with(Area, 2.0)
            .with(HotInletTemperature, 360.0)
            .with(HotMassFlowRate, 0.23)
            .with(HotSpecificHeat, 4400.0)
            .with(ColdInletTemperature, 290.0)
            .with(ColdMassFlowRate, 0.55)
            .with(ColdSpecificHeat, 1840.0);

        let solution = solve_default(
            known,
            [HotOutletTemperature, ColdOutletTemperature, HeatTransferRate],
            FlowArrangement::CounterFlow,
        )?;

        let ntu = 2000.0 / 1012.0;
        let balanced = ntu / (1.0 + ntu) * 1012.0 * 70.0;
        assert_relative_eq!(balanced, 47_038.51, epsilon = 0.01);
        assert_relative_eq!(value(&solution, HeatTransferRate), balanced, max_relative = 1e-6);
        Ok(())
    }

    #[test]
    fn rated_effectiveness_stays_in_unit_interval() -> Result<(), SolveError> {
        let damped = ConvergenceConfig {
            max_iters: 1000,
            relaxation: 0.5,
            ..ConvergenceConfig::default()
        };
        let arrangements = [
            (FlowArrangement::ParallelFlow, 5.0),
            (FlowArrangement::CounterFlow, 5.0),
            (FlowArrangement::ShellAndTube(ShellAndTube::OneTwo), 2.0),
        ];

        for (arrangement, max_ntu) in arrangements {
            for ntu in [0.1, 0.5, 1.0, 2.0, 5.0].into_iter().filter(|&n| n <= max_ntu) {
                for cr in [0.25, 0.5, 1.0] {
                    // C_h = 1000 W/K is the minimum rate.
                    let known = KnownValues::new()
                        .with(OverallCoefficient, ntu * 1000.0)
                        .with(Area, 1.0)
                        .with(HotInletTemperature, 360.0)
                        .with(HotMassFlowRate, 1.0)
                        .with(HotSpecificHeat, 1000.0)
                        .with(ColdInletTemperature, 290.0)
                        .with(ColdMassFlowRate, 1.0)
                        .with(ColdSpecificHeat, 1000.0 / cr);
                    let problem = HxProblem::new(
                        known,
                        [HotOutletTemperature, ColdOutletTemperature],
                        arrangement,
                    );

                    let solution = solve(&problem, &damped)?;
                    let eff = solution.performance.effectiveness.unwrap_or(f64::NAN);
                    assert!(
                        (0.0..=1.0).contains(&eff),
                        "{arrangement} at NTU = {ntu}, Cr = {cr}: effectiveness {eff}"
                    );
                }
            }
        }
        Ok(())
    }

    #[test]
    fn parallel_flow_rating_never_beats_counter_flow() -> Result<(), SolveError> {
        let unknowns = [HotOutletTemperature, ColdOutletTemperature];
        let parallel = solve_default(rating_knowns(), unknowns, FlowArrangement::ParallelFlow)?;
        let counter = solve_default(rating_knowns(), unknowns, FlowArrangement::CounterFlow)?;

        assert!(value(&parallel, HeatTransferRate) < value(&counter, HeatTransferRate));
        assert!(value(&parallel, HotOutletTemperature) > value(&parallel, ColdOutletTemperature));
        Ok(())
    }

    #[test]
    fn shell_and_tube_rating_converges() -> Result<(), SolveError> {
        let solution = solve_default(
            rating_knowns(),
            [HotOutletTemperature, ColdOutletTemperature],
            FlowArrangement::ShellAndTube(ShellAndTube::OneTwo),
        )?;

        let q = value(&solution, HeatTransferRate);
        assert_relative_eq!(q, 50_426.39, epsilon = 0.1);
        let cold = 3000.0 * (value(&solution, ColdOutletTemperature) - 290.0);
        assert_relative_eq!(q, cold, max_relative = 1e-6);

        let eff = solution.performance.effectiveness.unwrap_or(f64::NAN);
        assert!(eff > 0.0 && eff < 1.0);
        Ok(())
    }

    #[test]
    fn shell_and_tube_rating_reports_iteration_limit() {
        let problem = HxProblem::new(
            rating_knowns(),
            [HotOutletTemperature],
            FlowArrangement::ShellAndTube(ShellAndTube::OneTwo),
        );
        let config = ConvergenceConfig {
            max_iters: 1,
            ..ConvergenceConfig::default()
        };

        assert!(matches!(
            solve(&problem, &config),
            Err(SolveError::ConvergenceFailure { iters: 1, .. })
        ));
    }

    #[test]
    fn parallel_flow_outlet_crossing_is_invalid() {
        let known = KnownValues::new()
            .with(HotInletTemperature, celsius(90.0))
            .with(HotOutletTemperature, celsius(40.0))
            .with(ColdInletTemperature, celsius(20.0))
            .with(ColdOutletTemperature, celsius(60.0))
            .with(OverallCoefficient, 500.0)
            .with(Area, 2.0);

        assert!(matches!(
            solve_default(known, [HeatTransferRate], FlowArrangement::ParallelFlow),
            Err(SolveError::PhysicallyInvalidResult {
                hot: HotOutletTemperature,
                cold: ColdOutletTemperature,
                ..
            })
        ));
    }

    #[test]
    fn precondition_order() {
        assert_eq!(
            solve_default(KnownValues::new(), [], FlowArrangement::CounterFlow),
            Err(SolveError::InsufficientKnowns)
        );
        assert_eq!(
            solve_default(
                KnownValues::new().with(Area, 1.0),
                [],
                FlowArrangement::CounterFlow
            ),
            Err(SolveError::NoUnknownsSelected)
        );
        assert_eq!(
            solve_default(
                KnownValues::new().with(Area, 1.0).declare(HotSpecificHeat),
                [OverallCoefficient],
                FlowArrangement::CounterFlow
            ),
            Err(SolveError::MissingValue {
                parameter: HotSpecificHeat
            })
        );
        assert_eq!(
            solve_default(
                KnownValues::new().with(HotMassFlowRate, f64::NAN),
                [OverallCoefficient],
                FlowArrangement::CounterFlow
            ),
            Err(SolveError::MissingValue {
                parameter: HotMassFlowRate
            })
        );
    }

    #[test]
    fn unreachable_unknowns_are_listed() -> Result<(), SolveError> {
        let known = KnownValues::new()
            .with(HotInletTemperature, 350.0)
            .with(ColdInletTemperature, 300.0);

        let solution = solve_default(known, [Area, OverallCoefficient], FlowArrangement::CounterFlow)?;

        assert!(!solution.is_complete());
        assert_eq!(
            solution.unresolved.iter().copied().collect::<Vec<_>>(),
            vec![Area, OverallCoefficient]
        );
        assert_eq!(solution.values.len(), 2);
        Ok(())
    }

    #[test]
    fn known_and_unknown_parameter_keeps_its_value() -> Result<(), SolveError> {
        let known = KnownValues::new()
            .with(HeatTransferRate, 1000.0)
            .with(HotMassFlowRate, 0.1)
            .with(HotSpecificHeat, 1000.0)
            .with(HotInletTemperature, 350.0);

        let solution = solve_default(
            known,
            [HeatTransferRate, HotOutletTemperature],
            FlowArrangement::CounterFlow,
        )?;

        assert_relative_eq!(value(&solution, HeatTransferRate), 1000.0);
        assert_relative_eq!(value(&solution, HotOutletTemperature), 340.0);
        assert!(solution.is_complete());
        Ok(())
    }

    #[test]
    fn comparison_requires_all_terminal_temperatures() {
        let known = KnownValues::new()
            .with(HotInletTemperature, 350.0)
            .with(HotOutletTemperature, 330.0)
            .with(ColdInletTemperature, 300.0);

        assert_eq!(
            compare_arrangements(&known, ShellAndTube::OneTwo),
            Err(SolveError::MissingValue {
                parameter: ColdOutletTemperature
            })
        );
    }

    #[test]
    fn comparison_isolates_infeasible_arrangements() -> Result<(), SolveError> {
        // Cold outlet above hot outlet: only counter-type arrangements work.
        let known = KnownValues::new()
            .with(HotInletTemperature, celsius(90.0))
            .with(HotOutletTemperature, celsius(40.0))
            .with(ColdInletTemperature, celsius(20.0))
            .with(ColdOutletTemperature, celsius(60.0))
            .with(HotMassFlowRate, 0.4)
            .with(HotSpecificHeat, 2000.0)
            .with(ColdMassFlowRate, 0.5)
            .with(ColdSpecificHeat, 2000.0);

        let comparison = compare_arrangements(&known, ShellAndTube::TwoFour)?;

        assert!(matches!(
            comparison.parallel_flow,
            Err(SolveError::PhysicallyInvalidResult { .. })
        ));
        let counter = comparison.counter_flow?;
        let shell = comparison.shell_and_tube?;

        assert_eq!(counter.correction_factor, Some(1.0));
        assert_eq!(counter.effectiveness, shell.effectiveness);
        assert_relative_eq!(counter.effectiveness.unwrap_or_default(), 50.0 / 70.0, epsilon = 1e-9);
        assert!(shell.lmtd < counter.lmtd);
        Ok(())
    }
}
