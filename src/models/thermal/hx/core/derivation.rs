//! Dependency table for deriving unknown parameters.
//!
//! Each derivable parameter lists alternative routes in priority order. A
//! route fires when all of its prerequisites are present. The table is swept
//! until a full pass adds nothing.

use log::{debug, trace};

use super::{EffectiveLmtd, FlowArrangement, Parameter, SolveError, Values};

use super::Parameter::{
    Area, ColdInletTemperature as TcIn, ColdMassFlowRate as MC,
    ColdOutletTemperature as TcOut, ColdSpecificHeat as CpC, HeatTransferRate as Q,
    HotInletTemperature as ThIn, HotMassFlowRate as MH, HotOutletTemperature as ThOut,
    HotSpecificHeat as CpH, OverallCoefficient as U,
};

type Formula = fn(&[f64], FlowArrangement) -> Result<f64, SolveError>;

struct Route {
    requires: &'static [Parameter],
    formula: Formula,
}

struct Rule {
    target: Parameter,
    routes: &'static [Route],
}

fn effective_lmtd(arrangement: FlowArrangement, t: &[f64]) -> Result<f64, SolveError> {
    Ok(EffectiveLmtd::from_kelvin(arrangement, [t[0], t[1], t[2], t[3]])?.effective_kelvin())
}

static TABLE: &[Rule] = &[
    Rule {
        target: Q,
        routes: &[
            Route {
                requires: &[MH, CpH, ThIn, ThOut],
                formula: |v, _| Ok(v[0] * v[1] * (v[2] - v[3])),
            },
            Route {
                requires: &[MC, CpC, TcIn, TcOut],
                formula: |v, _| Ok(v[0] * v[1] * (v[3] - v[2])),
            },
            Route {
                requires: &[U, Area, ThIn, ThOut, TcIn, TcOut],
                formula: |v, a| Ok(v[0] * v[1] * effective_lmtd(a, &v[2..])?),
            },
        ],
    },
    Rule {
        target: ThOut,
        routes: &[Route {
            requires: &[ThIn, Q, MH, CpH],
            formula: |v, _| Ok(v[0] - v[1] / (v[2] * v[3])),
        }],
    },
    Rule {
        target: TcOut,
        routes: &[Route {
            requires: &[TcIn, Q, MC, CpC],
            formula: |v, _| Ok(v[0] + v[1] / (v[2] * v[3])),
        }],
    },
    Rule {
        target: MH,
        routes: &[Route {
            requires: &[Q, CpH, ThIn, ThOut],
            formula: |v, _| Ok(v[0] / (v[1] * (v[2] - v[3]))),
        }],
    },
    Rule {
        target: CpH,
        routes: &[Route {
            requires: &[Q, MH, ThIn, ThOut],
            formula: |v, _| Ok(v[0] / (v[1] * (v[2] - v[3]))),
        }],
    },
    Rule {
        target: MC,
        routes: &[Route {
            requires: &[Q, CpC, TcIn, TcOut],
            formula: |v, _| Ok(v[0] / (v[1] * (v[3] - v[2]))),
        }],
    },
    Rule {
        target: CpC,
        routes: &[Route {
            requires: &[Q, MC, TcIn, TcOut],
            formula: |v, _| Ok(v[0] / (v[1] * (v[3] - v[2]))),
        }],
    },
    Rule {
        target: ThIn,
        routes: &[Route {
            requires: &[ThOut, Q, MH, CpH],
            formula: |v, _| Ok(v[0] + v[1] / (v[2] * v[3])),
        }],
    },
    Rule {
        target: TcIn,
        routes: &[Route {
            requires: &[TcOut, Q, MC, CpC],
            formula: |v, _| Ok(v[0] - v[1] / (v[2] * v[3])),
        }],
    },
    Rule {
        target: Area,
        routes: &[Route {
            requires: &[Q, U, ThIn, ThOut, TcIn, TcOut],
            formula: |v, a| Ok(v[0] / (v[1] * effective_lmtd(a, &v[2..])?)),
        }],
    },
    Rule {
        target: U,
        routes: &[Route {
            requires: &[Q, Area, ThIn, ThOut, TcIn, TcOut],
            formula: |v, a| Ok(v[0] / (v[1] * effective_lmtd(a, &v[2..])?)),
        }],
    },
];

/// Applies the table to `values` until no rule can fire.
///
/// # Errors
///
/// Returns an error if a route needs an LMTD over infeasible temperatures.
pub(super) fn derive(mut values: Values, arrangement: FlowArrangement) -> Result<Values, SolveError> {
    loop {
        let before = values;
        for rule in TABLE {
            values = apply(rule, values, arrangement)?;
        }
        if values == before {
            return Ok(values);
        }
    }
}

fn apply(rule: &Rule, values: Values, arrangement: FlowArrangement) -> Result<Values, SolveError> {
    if values.has(rule.target) {
        return Ok(values);
    }

    for route in rule.routes {
        let Some(inputs) = values.all(route.requires) else {
            continue;
        };

        let value = (route.formula)(&inputs, arrangement)?;
        if value.is_finite() {
            trace!("derived {} = {value} from {:?}", rule.target, route.requires);
            return Ok(values.with(rule.target, value));
        }
        debug!(
            "skipping non-finite {} from {:?}: {value}",
            rule.target, route.requires
        );
    }

    Ok(values)
}
