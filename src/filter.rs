use crate::models::Record;
use crate::selection::SkillSelection;

/// Degree filter value that matches every candidate.
pub const ANY_DEGREE: &str = "all";

#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    pub ug_degree: String,
    pub min_ug_cgpa: f64,
    pub min_pg_cgpa: f64,
    pub require_pg: bool,
    pub min_exp: usize,
}

impl FilterParams {
    pub const DEFAULT_MIN_CGPA: f64 = 0.0;
    pub const DEFAULT_MIN_EXP: usize = 0;
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            ug_degree: ANY_DEGREE.to_string(),
            min_ug_cgpa: Self::DEFAULT_MIN_CGPA,
            min_pg_cgpa: Self::DEFAULT_MIN_CGPA,
            require_pg: false,
            min_exp: Self::DEFAULT_MIN_EXP,
        }
    }
}

/// Reads a CGPA threshold typed by the user; anything unusable means no threshold.
pub fn parse_cgpa(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Reads the leading whole number, so "3 years" and "2.5" count as 3 and 2.
/// Negative or non-numeric input means no minimum.
pub fn parse_min_exp(input: &str) -> usize {
    let input = input.trim_start();
    let input = input.strip_prefix('+').unwrap_or(input);
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input[..end].parse::<usize>().unwrap_or(0)
}

/// Candidates satisfying every active filter, in dataset order.
pub fn apply<'a>(
    records: &'a [Record],
    selection: &SkillSelection,
    params: &FilterParams,
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| matches(record, selection, params))
        .collect()
}

pub fn matches(record: &Record, selection: &SkillSelection, params: &FilterParams) -> bool {
    matches_experience(record, params.min_exp)
        && matches_ug_cgpa(record, params.min_ug_cgpa)
        && matches_pg_requirement(record, params.require_pg)
        && matches_pg_cgpa(record, params.min_pg_cgpa)
        && matches_ug_degree(record, &params.ug_degree)
        && matches_skills(record, selection)
}

fn matches_skills(record: &Record, selection: &SkillSelection) -> bool {
    selection.is_empty() || selection.iter().all(|skill| record.has_skill(skill))
}

fn matches_ug_degree(record: &Record, wanted: &str) -> bool {
    wanted == ANY_DEGREE || record.ug_degree().contains(wanted)
}

fn matches_ug_cgpa(record: &Record, min: f64) -> bool {
    record.ug_cgpa() >= min
}

fn matches_pg_requirement(record: &Record, require_pg: bool) -> bool {
    !require_pg || record.has_postgraduate()
}

// A missing CGPA on a named postgraduate degree still compares as 0.
fn matches_pg_cgpa(record: &Record, min: f64) -> bool {
    !record.has_postgraduate() || record.pg_cgpa() >= min
}

fn matches_experience(record: &Record, min: usize) -> bool {
    record.experience_count() >= min
}
