//! End-to-end derivation: scenario, collection, emission.
//!
//! The array text is rendered completely in memory before it is returned,
//! so a failure at any stage leaves nothing half-written.

use coeffgen_core::Result;
use coeffgen_emit::{EmitConfig, Emitter};
use coeffgen_poly::{collect, CoefficientTable};
use tracing::{debug, info};

use crate::scenario::{Derivation, Scenario};

/// The result of one derivation run.
#[derive(Clone, Debug)]
pub struct Output {
    /// The dense coefficient table.
    pub table: CoefficientTable,
    /// The rendered array block.
    pub text: String,
}

/// Collects the equation of a derivation by powers of its pivot.
///
/// # Errors
///
/// Returns `UnknownSymbol` if the equation or pivot uses a symbol missing
/// from the derivation's table, and `DegreeOverflow` if the equation
/// exceeds the declared degree.
pub fn derive(derivation: &Derivation) -> Result<CoefficientTable> {
    let symbols = derivation.symbols();
    symbols.ensure_declared(derivation.pivot())?;
    for symbol in derivation.equation().symbols() {
        symbols.ensure_declared(&symbol)?;
    }

    debug!(
        terms = derivation.equation().len(),
        pivot = %derivation.pivot(),
        max_degree = derivation.max_degree(),
        "expanded equation"
    );

    collect(derivation.equation(), derivation.pivot(), derivation.max_degree())
}

/// Builds a scenario, derives its coefficients and renders them.
///
/// # Errors
///
/// Propagates the first error raised by any stage.
pub fn run(scenario: Scenario, config: &EmitConfig) -> Result<Output> {
    info!(scenario = %scenario, target = %config.target, "deriving coefficients");

    let derivation = scenario.build()?;
    let table = derive(&derivation)?;
    let text = Emitter::new(config.clone()).emit(&table);

    Ok(Output { table, text })
}
