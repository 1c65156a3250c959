// ==========================================
// LPA Audit System - Fixed sector pattern
// ==========================================
// Each week audits exactly 5 of the 8 production sectors.
// The pattern repeats every 4 weeks; a 5th week in a month is
// filled by a rotation rule instead of a fixed row.
//
// Week 1 (cycle): Brochadeira, Chanfradeira, Prensa Ressalto,
//                 Inspeção Final, Estampa Furo
// Week 2 (cycle): Prensa Curvar, Mandrila, Fresa Canal,
//                 Brochadeira, Chanfradeira
// Week 3 (cycle): Prensa Ressalto, Inspeção Final, Estampa Furo,
//                 Prensa Curvar, Mandrila
// Week 4 (cycle): Fresa Canal, Brochadeira, Chanfradeira,
//                 Prensa Ressalto, Inspeção Final
// ==========================================

use crate::domain::Sector;

/// Canonical sector names in fixed index order
///
/// Pattern rows below index into this list. Registered sectors are
/// matched against these names by exact string comparison.
pub const CANONICAL_SECTOR_NAMES: [&str; 8] = [
    "Brochadeira",     // 0
    "Prensa Ressalto", // 1
    "Estampa Furo",    // 2
    "Mandrila",        // 3
    "Fresa Canal",     // 4
    "Chanfradeira",    // 5
    "Inspeção Final",  // 6
    "Prensa Curvar",   // 7
];

/// Fixed pattern rows keyed by (local_week - 1) % 4
const SECTOR_PATTERNS: [[usize; 5]; 4] = [
    [0, 5, 1, 6, 2], // week 1 of cycle
    [7, 3, 4, 0, 5], // week 2 of cycle
    [1, 6, 2, 7, 3], // week 3 of cycle
    [4, 0, 5, 1, 6], // week 4 of cycle
];

/// Ordered sector indices for a local week (1-4 follow the fixed
/// rows, 5 uses the rotation rule)
pub fn pattern_for_week(local_week: u32) -> Vec<usize> {
    if local_week == 5 {
        return week5_sector_indices();
    }
    let key = (local_week.saturating_sub(1) % 4) as usize;
    SECTOR_PATTERNS[key].to_vec()
}

/// Sector indices for a 5th local week
///
/// Avoids an exact repeat of week 4: candidates are the indices not
/// present in week 4's row, sorted by how rarely they appear across
/// the four fixed rows (ties keep original index order). If fewer
/// than 5 qualify, week 4's row backfills in its original order.
fn week5_sector_indices() -> Vec<usize> {
    let week4 = &SECTOR_PATTERNS[3];

    let mut usage = [0usize; 8];
    for pattern in &SECTOR_PATTERNS {
        for &idx in pattern {
            usage[idx] += 1;
        }
    }

    // sort_by_key is stable, so equal counts keep ascending index order
    let mut candidates: Vec<usize> = (0..8).filter(|idx| !week4.contains(idx)).collect();
    candidates.sort_by_key(|&idx| usage[idx]);

    let mut week5: Vec<usize> = candidates.into_iter().take(5).collect();
    if week5.len() < 5 {
        for &idx in week4 {
            if week5.len() == 5 {
                break;
            }
            if !week5.contains(&idx) {
                week5.push(idx);
            }
        }
    }

    week5
}

/// Resolve a canonical name against the registered sector catalog
///
/// Exact string match on `name`. Kept as the single lookup point so a
/// future version could switch to stable index references without
/// touching the distribution algorithm.
fn find_by_canonical_name<'a>(sectors: &'a [Sector], name: &str) -> Option<&'a Sector> {
    sectors.iter().find(|s| s.name == name)
}

/// Sectors to audit in a local week, resolved against the catalog
///
/// Unregistered canonical names are dropped, so the returned list may
/// hold fewer than 5 sectors. That is a policy decision, not an error.
pub fn sectors_for_week(local_week: u32, sectors: &[Sector]) -> Vec<Sector> {
    pattern_for_week(local_week)
        .into_iter()
        .filter_map(|idx| find_by_canonical_name(sectors, CANONICAL_SECTOR_NAMES[idx]))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_catalog() -> Vec<Sector> {
        CANONICAL_SECTOR_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| Sector {
                id: format!("sec{}", i + 1),
                name: (*name).to_string(),
                checklist_id: format!("ck{}", i + 1),
            })
            .collect()
    }

    #[test]
    fn test_each_fixed_row_has_no_repeats() {
        for pattern in &SECTOR_PATTERNS {
            let mut seen = pattern.to_vec();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), 5);
        }
    }

    #[test]
    fn test_every_sector_appears_at_least_twice_per_cycle() {
        let mut usage = [0usize; 8];
        for pattern in &SECTOR_PATTERNS {
            for &idx in pattern {
                usage[idx] += 1;
            }
        }
        for count in usage {
            assert!(count >= 2);
        }
    }

    #[test]
    fn test_week_numbers_wrap_around_the_4_week_cycle() {
        assert_eq!(pattern_for_week(1), pattern_for_week(9));
        assert_eq!(pattern_for_week(2), pattern_for_week(6));
        assert_ne!(pattern_for_week(1), pattern_for_week(2));
    }

    #[test]
    fn test_week5_selection_order() {
        // Not in week 4's row: 2, 3, 7 (all used twice across the
        // cycle), then backfill 4 and 0 from week 4's row.
        assert_eq!(week5_sector_indices(), vec![2, 3, 7, 4, 0]);
    }

    #[test]
    fn test_week5_avoids_exact_week4_repeat() {
        let week4 = pattern_for_week(4);
        let week5 = pattern_for_week(5);
        assert_ne!(week4, week5);
    }

    #[test]
    fn test_resolution_drops_unregistered_names() {
        let mut catalog = full_catalog();
        catalog.retain(|s| s.name != "Brochadeira");

        // Week 1's row includes Brochadeira, so one name fails to resolve
        let resolved = sectors_for_week(1, &catalog);
        assert_eq!(resolved.len(), 4);
        assert!(resolved.iter().all(|s| s.name != "Brochadeira"));
    }

    #[test]
    fn test_week1_resolves_expected_names_in_order() {
        let resolved = sectors_for_week(1, &full_catalog());
        let names: Vec<&str> = resolved.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Brochadeira",
                "Chanfradeira",
                "Prensa Ressalto",
                "Inspeção Final",
                "Estampa Furo"
            ]
        );
    }
}
