use serde::Serialize;
use std::fmt;

/// A term inside a ground fact. `Range` renders as ASP interval notation
/// (`1..1000`), which solvers expand into the full integer interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Int(i64),
    Sym(String),
    Range(i64, i64),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Int(value) => write!(f, "{}", value),
            Term::Sym(name) => write!(f, "{}", name),
            Term::Range(low, high) => write!(f, "{}..{}", low, high),
        }
    }
}

/// A ground ASP fact, e.g. `sel(42).` or `tagreq(t1, p, d3, ...).`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub predicate: String,
    pub terms: Vec<Term>,
}

impl Fact {
    pub fn new(predicate: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            predicate: predicate.into(),
            terms,
        }
    }

    /// 單一整數參數的事實，最常見的形態
    pub fn int(predicate: impl Into<String>, value: i64) -> Self {
        Self::new(predicate, vec![Term::Int(value)])
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "{}.", self.predicate);
        }
        write!(f, "{}(", self.predicate)?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", term)?;
        }
        write!(f, ").")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InstanceStats {
    pub fact_count: usize,
    pub max_value: Option<i64>,
    pub domain_size: i64,
}

/// A fully assembled instance: the sampled facts, the trailing summary
/// facts, the rendered text that gets written out, and the stats that
/// end up in the suite manifest.
#[derive(Debug, Clone)]
pub struct Instance {
    pub facts: Vec<Fact>,
    pub summary: Vec<Fact>,
    pub text: String,
    pub stats: InstanceStats,
}

impl Instance {
    /// 渲染事實為一行一條的文字輸出
    pub fn render(facts: &[Fact], summary: &[Fact]) -> String {
        let mut lines = String::new();
        for fact in facts.iter().chain(summary.iter()) {
            lines.push_str(&fact.to_string());
            lines.push('\n');
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_display_single_int() {
        let fact = Fact::int("sel", 42);
        assert_eq!(fact.to_string(), "sel(42).");
    }

    #[test]
    fn test_fact_display_zero_arity() {
        let fact = Fact::new("ok", vec![]);
        assert_eq!(fact.to_string(), "ok.");
    }

    #[test]
    fn test_fact_display_mixed_terms() {
        let fact = Fact::new(
            "tagreq",
            vec![
                Term::Sym("t1".to_string()),
                Term::Sym("p".to_string()),
                Term::Int(3),
            ],
        );
        assert_eq!(fact.to_string(), "tagreq(t1, p, 3).");
    }

    #[test]
    fn test_range_term_display() {
        let fact = Fact::new("dom", vec![Term::Range(1, 1000)]);
        assert_eq!(fact.to_string(), "dom(1..1000).");
    }

    #[test]
    fn test_render_joins_facts_and_summary() {
        let facts = vec![Fact::int("sel", 1), Fact::int("sel", 7)];
        let summary = vec![Fact::int("num", 2), Fact::int("max", 7)];
        let text = Instance::render(&facts, &summary);
        assert_eq!(text, "sel(1).\nsel(7).\nnum(2).\nmax(7).\n");
    }
}
