//! Selector expression synthesis
//!
//! Selectors pick a value (a variation index, a rest timer) from the
//! runtime's week/day/set context. Synthesis builds an ordered list of
//! (condition, value) branches with one fallback; [`Cascade::render`] is the
//! only place that knows the target ternary syntax.

use crate::compiler::variation::Variation;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Fallback of the variation selector. The leading space is part of the
/// emitted format.
const VARIATION_FALLBACK: &str = " 1";

/// Day-level part of a week clause. Renders to nothing when neither the day
/// nor the sets are constrained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayClause {
    /// 0-based day in week; `None` when the week needs no day test
    pub day_in_week: Option<usize>,
    /// 0-based set indexes; empty means every set
    pub set_indexes: Vec<usize>,
}

impl DayClause {
    fn parts(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(day) = self.day_in_week {
            parts.push(format!("dayInWeek == {}", day + 1));
        }
        if !self.set_indexes.is_empty() {
            let sets = self
                .set_indexes
                .iter()
                .map(|s| format!("setIndex == {}", s + 1))
                .collect::<Vec<_>>()
                .join(" || ");
            parts.push(format!("({})", sets));
        }
        parts
    }
}

/// `week == W`, optionally narrowed by day/set tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekClause {
    /// 0-based week
    pub week: usize,
    pub days: Vec<DayClause>,
}

impl fmt::Display for WeekClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<Vec<String>> = self
            .days
            .iter()
            .map(DayClause::parts)
            .filter(|parts| !parts.is_empty())
            .collect();
        let week = format!("week == {}", self.week + 1);
        match terms.as_slice() {
            [] => write!(f, "({})", week),
            [single] => write!(f, "({} && {})", week, single.join(" && ")),
            many => {
                let alternatives = many
                    .iter()
                    .map(|parts| match parts.as_slice() {
                        [one] => one.clone(),
                        _ => format!("({})", parts.join(" && ")),
                    })
                    .collect::<Vec<_>>()
                    .join(" || ");
                write!(f, "({} && ({}))", week, alternatives)
            }
        }
    }
}

/// Disjunction of week clauses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition(pub Vec<WeekClause>);

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clauses = self
            .0
            .iter()
            .map(WeekClause::to_string)
            .collect::<Vec<_>>()
            .join(" || ");
        f.write_str(&clauses)
    }
}

/// Ordered (condition, value) branches with a fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cascade {
    branches: Vec<(Condition, String)>,
    fallback: String,
}

impl Cascade {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            branches: Vec::new(),
            fallback: fallback.into(),
        }
    }

    pub fn branch(&mut self, condition: Condition, value: impl ToString) {
        self.branches.push((condition, value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// `cond ? value :\n` per branch, then the fallback
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (condition, value) in &self.branches {
            out.push_str(&format!("{} ? {} :\n", condition, value));
        }
        out.push_str(&self.fallback);
        out
    }
}

/// Build the `variationExpr` selecting a 1-based variation index
///
/// A week's clauses only test `dayInWeek` when the exercise appears on more
/// than one distinct day of that week across all its variations.
pub fn variation_selector(variations: &[Variation]) -> String {
    let mut days_per_week: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    for day in variations.iter().flat_map(|v| &v.days) {
        days_per_week
            .entry(day.week)
            .or_default()
            .insert(day.day_in_week);
    }

    let mut cascade = Cascade::new(VARIATION_FALLBACK);
    for (index, variation) in variations.iter().enumerate() {
        let mut by_week: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
        for day in &variation.days {
            by_week.entry(day.week).or_default().insert(day.day_in_week);
        }
        let clauses = by_week
            .into_iter()
            .map(|(week, days)| {
                let use_day_in_week = days_per_week.get(&week).map_or(0, BTreeSet::len) > 1;
                let days = if use_day_in_week {
                    days.into_iter()
                        .map(|d| DayClause {
                            day_in_week: Some(d),
                            set_indexes: vec![],
                        })
                        .collect()
                } else {
                    vec![]
                };
                WeekClause { week, days }
            })
            .collect();
        cascade.branch(Condition(clauses), index + 1);
    }
    cascade.render()
}
