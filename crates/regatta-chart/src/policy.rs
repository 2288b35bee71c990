/// One row of the discipline policy table.
///
/// A rule matches when every needle appears in the normalized (trimmed,
/// lowercased) discipline name. "Either/or" spellings (English keyword vs
/// the German original) are separate rows with identical step/unit.
struct DisciplineRule {
    needles: &'static [&'static str],
    step: f64,
    unit: Option<&'static str>,
}

/// Ordered policy table; the first matching row wins.
///
/// Timed test disciplines (runs, sprint, agility course, paddling
/// ergometer) measure seconds; thrown/jumped ones measure meters.
const DISCIPLINE_RULES: &[DisciplineRule] = &[
    DisciplineRule {
        needles: &["1500"],
        step: 10.0,
        unit: Some("s"),
    },
    DisciplineRule {
        needles: &["1000"],
        step: 10.0,
        unit: Some("s"),
    },
    DisciplineRule {
        needles: &["sprint", "30"],
        step: 1.0,
        unit: Some("s"),
    },
    DisciplineRule {
        needles: &["agility"],
        step: 1.0,
        unit: Some("s"),
    },
    DisciplineRule {
        needles: &["paddel", "100"],
        step: 5.0,
        unit: Some("s"),
    },
    DisciplineRule {
        needles: &["ball throw"],
        step: 5.0,
        unit: Some("m"),
    },
    DisciplineRule {
        needles: &["ballwurf"],
        step: 5.0,
        unit: Some("m"),
    },
    DisciplineRule {
        needles: &["standing long jump"],
        step: 0.1,
        unit: Some("m"),
    },
    DisciplineRule {
        needles: &["standweitsprung"],
        step: 0.1,
        unit: Some("m"),
    },
];

fn matching_rule(name: &str) -> Option<&'static DisciplineRule> {
    let name = name.trim().to_lowercase();
    DISCIPLINE_RULES
        .iter()
        .find(|rule| rule.needles.iter().all(|needle| name.contains(needle)))
}

/// Measurement unit label for a discipline, when the policy table knows
/// one.
pub fn discipline_unit(name: &str) -> Option<&'static str> {
    matching_rule(name).and_then(|rule| rule.unit)
}

/// Tick step for a discipline's value axis.
///
/// Falls back to a tenth of the data range for disciplines outside the
/// table, or 1 when the range is degenerate.
pub fn discipline_step(name: &str, min: f64, max: f64) -> f64 {
    if let Some(rule) = matching_rule(name) {
        return rule.step;
    }
    if max > min {
        (max - min) / 10.0
    } else {
        1.0
    }
}
