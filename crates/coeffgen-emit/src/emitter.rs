//! Emission of coefficient tables as array literals.

use coeffgen_poly::{CoefficientTable, Expr, Monomial};
use coeffgen_rings::{One, Q};
use tracing::debug;

use crate::syntax::{ArraySyntax, Target};

/// Formatting options for one emitted array.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EmitConfig {
    /// Name of the emitted array.
    pub array_name: String,
    /// Comment text; derived from the pivot when `None`.
    pub comment: Option<String>,
    /// Output language.
    pub target: Target,
    /// Prefix for every element line.
    pub indent: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            array_name: "P".to_string(),
            comment: None,
            target: Target::C,
            indent: "    ".to_string(),
        }
    }
}

/// Writes coefficient tables in a fixed layout.
///
/// The layout is one comment line, one opening line sized `N + 1`, one line
/// per degree from 0 to N, and one closing line.
#[derive(Clone, Debug, Default)]
pub struct Emitter {
    config: EmitConfig,
}

impl Emitter {
    /// Creates an emitter.
    #[must_use]
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Renders the whole array block, newline-terminated.
    #[must_use]
    pub fn emit(&self, table: &CoefficientTable) -> String {
        self.emit_with(table, &self.config.target)
    }

    /// Renders the whole array block with an explicit syntax.
    #[must_use]
    pub fn emit_with(&self, table: &CoefficientTable, syntax: &impl ArraySyntax) -> String {
        let name = &self.config.array_name;
        let comment = self.config.comment.clone().unwrap_or_else(|| {
            format!(
                "Coefficients in ascending powers of {pivot}, i.e. {name}[N]*{pivot}^N.",
                pivot = table.pivot()
            )
        });

        let mut out = String::new();
        push_line(&mut out, &syntax.comment(&comment));
        push_line(&mut out, &syntax.open_array(name, table.len()));
        for (_, coeff) in table.iter() {
            let line = format!(
                "{}{}{}",
                self.config.indent,
                render_expr(coeff, syntax),
                syntax.separator()
            );
            push_line(&mut out, &line);
        }
        push_line(&mut out, syntax.close_array());

        debug!(entries = table.len(), bytes = out.len(), "emitted coefficient array");
        out
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Renders an expression as unambiguous infix arithmetic.
///
/// Terms keep the expression's canonical order. Powers are unrolled into
/// repeated factors, so only `+`, `-`, `*`, parentheses and symbol names
/// appear. Fractional literals are parenthesised.
#[must_use]
pub fn render_expr(expr: &Expr, syntax: &impl ArraySyntax) -> String {
    if expr.is_zero() {
        return syntax.zero();
    }

    let mut out = String::new();
    for (i, (m, c)) in expr.terms().iter().enumerate() {
        let negative = c.is_negative();
        match (i, negative) {
            (0, false) => {}
            (0, true) => out.push('-'),
            (_, true) => out.push_str(" - "),
            (_, false) => out.push_str(" + "),
        }
        out.push_str(&render_term(m, &c.abs(), syntax));
    }
    out
}

fn render_term(m: &Monomial, magnitude: &Q, syntax: &impl ArraySyntax) -> String {
    let factors: Vec<&str> = m
        .factors()
        .iter()
        .flat_map(|(s, e)| std::iter::repeat(s.name()).take(*e as usize))
        .collect();

    if factors.is_empty() {
        syntax.scalar(magnitude)
    } else if magnitude.is_one() {
        factors.join("*")
    } else {
        format!("{}*{}", syntax.scalar(magnitude), factors.join("*"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coeffgen_core::SymbolTable;
    use coeffgen_poly::collect;

    #[test]
    fn test_render_expr() {
        let mut table = SymbolTable::new();
        let a = Expr::symbol(table.declare("a"));
        let b = Expr::symbol(table.declare("b"));
        let c = Expr::symbol(table.declare("c"));

        // 2ab - c + 3
        let e = &(&(&a * &b).scale(&Q::from_integer(2)) - &c) + &Expr::from(3);
        assert_eq!(render_expr(&e, &Target::C), "2*a*b - c + 3");
        assert_eq!(render_expr(&e, &Target::Rust), "2.0*a*b - c + 3.0");

        let e = &(-&a.pow(2)) + &b.scale(&Q::new(1, 2));
        assert_eq!(render_expr(&e, &Target::C), "-a*a + (1.0/2.0)*b");

        assert_eq!(render_expr(&Expr::zero(), &Target::C), "0");
        assert_eq!(render_expr(&Expr::from(-4), &Target::Python), "-4");
    }

    #[test]
    fn test_emit_block_layout() {
        let mut table = SymbolTable::new();
        let sz = table.declare("z");
        let a = Expr::symbol(table.declare("a"));
        let z = Expr::symbol(sz.clone());

        // a + z^2: the z^1 slot must still appear
        let coeffs = collect(&(&a + &z.pow(2)), &sz, 2).unwrap();
        let out = Emitter::default().emit(&coeffs);

        assert_eq!(
            out,
            "// Coefficients in ascending powers of z, i.e. P[N]*z^N.\n\
             double P[3] = {\n    a,\n    0,\n    1,\n};\n"
        );
    }

    #[test]
    fn test_emit_custom_config() {
        let mut table = SymbolTable::new();
        let sx = table.declare("x");
        let x = Expr::symbol(sx.clone());

        let coeffs = collect(&(&x - &Expr::one()), &sx, 1).unwrap();
        let emitter = Emitter::new(EmitConfig {
            array_name: "coeffs".into(),
            comment: Some("x - 1".into()),
            target: Target::Python,
            indent: "  ".into(),
        });

        assert_eq!(emitter.emit(&coeffs), "# x - 1\ncoeffs = [\n  -1,\n  1,\n]\n");
        assert_eq!(emitter.config().target, Target::Python);
    }

    #[test]
    fn test_rust_target_keeps_array_name() {
        let mut table = SymbolTable::new();
        let sx = table.declare("alpha");
        let x = Expr::symbol(sx.clone());

        let coeffs = collect(&(&x + &Expr::from(2)), &sx, 1).unwrap();
        let emitter = Emitter::new(EmitConfig {
            array_name: "Coeffs".into(),
            target: Target::Rust,
            ..EmitConfig::default()
        });

        assert_eq!(
            emitter.emit(&coeffs),
            "// Coefficients in ascending powers of alpha, i.e. Coeffs[N]*alpha^N.\n\
             let Coeffs: [f64; 2] = [\n    2.0,\n    1.0,\n];\n"
        );
    }

    #[test]
    fn test_emit_is_deterministic() {
        let mut table = SymbolTable::new();
        let sz = table.declare("z");
        let e = (&Expr::symbol(table.declare("b")) + &Expr::symbol(sz.clone())).pow(3);
        let coeffs = collect(&e, &sz, 3).unwrap();

        let emitter = Emitter::default();
        assert_eq!(emitter.emit(&coeffs), emitter.emit(&coeffs.clone()));
    }
}
