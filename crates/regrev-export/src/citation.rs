//! Citation-label resolution.
//!
//! A citation label is the short human-facing string used to cite a source
//! document ("Protocol 12", "CSR Schedule 3.1", "EMA"). Resolution is an
//! ordered chain: manual override, curated short name, pattern rules
//! against the official name, then the document identifier as a fallback.

use std::sync::LazyLock;

use regex::Regex;

static PROTOCOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Protocol\s+\d+").expect("valid protocol pattern"));
static TECHNICAL_GUIDANCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Technical Guidance\s+\d+").expect("valid technical guidance pattern")
});
static SCHEDULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Schedule\s+[0-9.]+").expect("valid schedule pattern"));

/// One pattern rule against the official name. Returns the label when the
/// rule matches, `None` to fall through to the next rule.
type NameRule = fn(&str) -> Option<String>;

/// Rules are evaluated in this exact order; the first match wins.
const NAME_RULES: &[NameRule] = &[
    protocol_number,
    technical_guidance_number,
    csr_schedule_number,
    environmental_management_act,
    contaminated_sites_regulation,
];

fn protocol_number(name: &str) -> Option<String> {
    PROTOCOL_RE.find(name).map(|m| m.as_str().to_string())
}

fn technical_guidance_number(name: &str) -> Option<String> {
    TECHNICAL_GUIDANCE_RE.find(name).map(|m| m.as_str().to_string())
}

/// "Schedule N[.N]" only counts as a CSR schedule when the name mentions
/// CSR somewhere (any casing); plain schedules of other acts fall through.
fn csr_schedule_number(name: &str) -> Option<String> {
    let found = SCHEDULE_RE.find(name)?;
    if name.to_uppercase().contains("CSR") {
        Some(format!("CSR {}", found.as_str()))
    } else {
        None
    }
}

fn environmental_management_act(name: &str) -> Option<String> {
    name.contains("Environmental Management Act")
        .then(|| "EMA".to_string())
}

fn contaminated_sites_regulation(name: &str) -> Option<String> {
    name.contains("Contaminated Sites Regulation")
        .then(|| "CSR".to_string())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Resolve the citation label for one source document.
///
/// Precedence, first match wins: explicit `override_label`, then
/// `short_name`, then the official-name pattern rules in fixed order,
/// then `identifier` unchanged.
pub fn resolve_citation(
    official_name: Option<&str>,
    short_name: Option<&str>,
    identifier: &str,
    override_label: Option<&str>,
) -> String {
    if let Some(label) = non_empty(override_label) {
        return label.to_string();
    }
    if let Some(label) = non_empty(short_name) {
        return label.to_string();
    }
    if let Some(name) = non_empty(official_name) {
        for rule in NAME_RULES {
            if let Some(label) = rule(name) {
                return label;
            }
        }
    }
    identifier.to_string()
}
