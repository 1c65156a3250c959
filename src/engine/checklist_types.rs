// ==========================================
// LPA Audit System - Mandatory checklist types
// ==========================================
// The six audit checklist types rotated per auditor per week.
// The derived id rule is shared by the rotation and by the
// mandatory-checklist creation; both must yield byte-identical ids
// for the same type string.
// ==========================================

/// Mandatory checklist types, in rotation order
pub const CHECKLIST_TYPES: [&str; 6] = [
    "Processo",
    "Qualidade",
    "PCP & Produção",
    "MAN & MC",
    "Gestão de Pessoas",
    "IF",
];

/// Derive the canonical checklist id for a type label
///
/// Rule: lowercase, each whitespace run becomes a single hyphen, then
/// every character outside [a-z0-9-] is stripped, prefixed with
/// "ck-". Applied mechanically, so accented and symbol characters
/// simply disappear: "PCP & Produção" -> "ck-pcp--produo".
pub fn normalize_checklist_id(type_name: &str) -> String {
    let lower = type_name.to_lowercase();
    let mut base = String::with_capacity(lower.len());
    let mut in_whitespace = false;

    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                base.push('-');
                in_whitespace = true;
            }
            continue;
        }
        in_whitespace = false;
        if matches!(c, 'a'..='z' | '0'..='9' | '-') {
            base.push(c);
        }
    }

    format!("ck-{}", base)
}

/// Display name for a generated checklist assignment
pub fn checklist_display_name(type_name: &str) -> String {
    format!("Auditoria {}", type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_types_normalize_cleanly() {
        assert_eq!(normalize_checklist_id("Processo"), "ck-processo");
        assert_eq!(normalize_checklist_id("Qualidade"), "ck-qualidade");
        assert_eq!(normalize_checklist_id("IF"), "ck-if");
    }

    #[test]
    fn test_symbols_and_accents_are_stripped_not_transliterated() {
        // The '&' vanishes but the hyphens that replaced the spaces
        // around it remain, and 'ç'/'ã' are dropped outright.
        assert_eq!(normalize_checklist_id("PCP & Produção"), "ck-pcp--produo");
        assert_eq!(normalize_checklist_id("MAN & MC"), "ck-man--mc");
        assert_eq!(
            normalize_checklist_id("Gestão de Pessoas"),
            "ck-gesto-de-pessoas"
        );
    }

    #[test]
    fn test_whitespace_runs_collapse_to_one_hyphen() {
        assert_eq!(normalize_checklist_id("a  b\tc"), "ck-a-b-c");
    }

    #[test]
    fn test_all_mandatory_ids_are_distinct() {
        let mut ids: Vec<String> = CHECKLIST_TYPES
            .iter()
            .map(|t| normalize_checklist_id(t))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), CHECKLIST_TYPES.len());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(checklist_display_name("Processo"), "Auditoria Processo");
    }
}
