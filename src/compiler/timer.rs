//! Rest timer synthesis
//!
//! Collects custom rest timers per exercise and renders the `timerExpr`
//! selector. Exercises without any custom timer get no expression; the
//! runtime then falls back to the global rest timer setting.

use crate::compiler::aggregate::Occurrence;
use crate::compiler::selector::{Cascade, Condition, DayClause, WeekClause};
use crate::planner::PlannerExercise;
use crate::types::DayData;
use std::collections::{BTreeMap, BTreeSet};

/// Fallback rest timer, in seconds
pub const DEFAULT_TIMER: u32 = 180;

/// Where a timer value applies: a whole day, or one set of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTrigger {
    pub day: DayData,
    /// 0-based index across the occurrence's expanded sets
    pub set_index: Option<usize>,
}

/// Timer value to triggers, in first-seen value order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerMap {
    entries: Vec<(u32, Vec<TimerTrigger>)>,
}

impl TimerMap {
    fn push(&mut self, timer: u32, trigger: TimerTrigger) {
        match self.entries.iter_mut().find(|(t, _)| *t == timer) {
            Some((_, triggers)) => triggers.push(trigger),
            None => self.entries.push((timer, vec![trigger])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(u32, Vec<TimerTrigger>)] {
        &self.entries
    }
}

/// Record the custom timers of every occurrence
pub fn collect_timers(occurrences: &[Occurrence<'_>]) -> TimerMap {
    let mut map = TimerMap::default();
    for occurrence in occurrences {
        record_occurrence(&mut map, occurrence.day, occurrence.exercise);
    }
    map
}

fn record_occurrence(map: &mut TimerMap, day: DayData, exercise: &PlannerExercise) {
    // A timer declared on a line without a rep range applies to sets with no timer of their own
    let fallback = exercise
        .sets
        .iter()
        .find(|s| s.rep_range.is_none() && s.timer.is_some())
        .and_then(|s| s.timer);

    let effective: Vec<(u32, Option<u32>)> = exercise
        .sets
        .iter()
        .filter_map(|s| s.rep_range.map(|r| (r.number_of_sets, s.timer.or(fallback))))
        .collect();

    let uniform = match effective.first() {
        Some((_, first)) => {
            first.is_some() && effective.iter().all(|(_, timer)| timer == first)
        }
        None => fallback.is_some(),
    };
    if uniform {
        if let Some(timer) = effective.first().and_then(|(_, t)| *t).or(fallback) {
            map.push(
                timer,
                TimerTrigger {
                    day,
                    set_index: None,
                },
            );
        }
        return;
    }

    let mut set_index = 0usize;
    for (count, timer) in effective {
        let count = count as usize;
        if let Some(timer) = timer {
            for offset in 0..count {
                map.push(
                    timer,
                    TimerTrigger {
                        day,
                        set_index: Some(set_index + offset),
                    },
                );
            }
        }
        set_index += count;
    }
}

/// Per-day triggers of one timer value: `None` means the whole day
type DaySets = BTreeMap<usize, Option<BTreeSet<usize>>>;

/// Build the `timerExpr`, or `None` when the exercise has no custom timer
///
/// Week clauses test `dayInWeek` only when the exercise's timers span more
/// than one distinct day in week anywhere in the plan.
pub fn timer_selector(map: &TimerMap) -> Option<String> {
    if map.is_empty() {
        return None;
    }

    let distinct_days: BTreeSet<usize> = map
        .entries
        .iter()
        .flat_map(|(_, triggers)| triggers.iter().map(|t| t.day.day_in_week))
        .collect();
    let use_day_in_week = distinct_days.len() > 1;

    let mut cascade = Cascade::new(DEFAULT_TIMER.to_string());
    for (timer, triggers) in &map.entries {
        let mut by_week: BTreeMap<usize, DaySets> = BTreeMap::new();
        for trigger in triggers {
            let days = by_week.entry(trigger.day.week).or_default();
            let sets = days
                .entry(trigger.day.day_in_week)
                .or_insert_with(|| Some(BTreeSet::new()));
            match trigger.set_index {
                Some(index) => {
                    if let Some(indexes) = sets {
                        indexes.insert(index);
                    }
                }
                // A whole-day trigger covers every set
                None => *sets = None,
            }
        }

        let clauses = by_week
            .into_iter()
            .map(|(week, days)| WeekClause {
                week,
                days: days
                    .into_iter()
                    .map(|(day, sets)| DayClause {
                        day_in_week: use_day_in_week.then_some(day),
                        set_indexes: sets.map(|s| s.into_iter().collect()).unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect();
        cascade.branch(Condition(clauses), timer);
    }
    Some(cascade.render())
}
