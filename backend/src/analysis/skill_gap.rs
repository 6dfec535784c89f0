//! Skill Gap Calculator
//!
//! Pure functions comparing a role's required skills with the user's
//! current selection. No I/O, no side effects.

use super::catalog::RoleSkillCatalog;
use super::types::SkillGapResult;
use std::collections::HashSet;

/// Compute match percentage and the matching/missing breakdown.
///
/// Both inputs have set semantics; duplicates are ignored. The returned
/// lists keep the order of `required`. An empty requirement set yields an
/// empty result with a 0% match.
pub fn compute_match<R, S>(required: &[R], selected: &[S]) -> SkillGapResult
where
    R: AsRef<str>,
    S: AsRef<str>,
{
    let selected: HashSet<&str> = selected.iter().map(|s| s.as_ref()).collect();

    let mut seen = HashSet::new();
    let mut matching_skills = Vec::new();
    let mut missing_skills = Vec::new();
    for skill in required.iter().map(|s| s.as_ref()) {
        if !seen.insert(skill) {
            continue;
        }
        if selected.contains(skill) {
            matching_skills.push(skill.to_string());
        } else {
            missing_skills.push(skill.to_string());
        }
    }

    SkillGapResult {
        match_percentage: match_percentage(matching_skills.len(), seen.len()),
        matching_skills,
        missing_skills,
    }
}

/// Role-keyed convenience: unknown or absent roles give an empty result
pub fn analyze<S: AsRef<str>>(
    catalog: &RoleSkillCatalog,
    role: Option<&str>,
    selected: &[S],
) -> SkillGapResult {
    match role {
        Some(role) if catalog.contains_role(role) => {
            compute_match(catalog.required_skills(role), selected)
        }
        _ => SkillGapResult::empty(),
    }
}

/// round(100 * matched / total), half rounded up, in integer arithmetic
fn match_percentage(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (200 * matched + total) / (2 * total);
    pct.min(100) as u8
}
