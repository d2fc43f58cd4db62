//! Entry-text parsing
//!
//! Turns raw textarea content into the candidate list and reports
//! duplicates for the UI warning. Matching is case-sensitive after trimming,
//! the same rule the selector applies defensively.

/// Split multiline text into trimmed, non-empty entries (duplicates kept;
/// the wheel and selector dedupe downstream).
pub fn parse_entries(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Unique entries plus the names that appeared more than once
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DuplicateInfo {
    /// First occurrence of every entry, in input order
    pub unique: Vec<String>,
    /// Entries seen at least twice, in order of first repeat
    pub duplicates: Vec<String>,
}

pub fn duplicate_info(entries: &[String]) -> DuplicateInfo {
    let mut info = DuplicateInfo::default();
    for entry in entries {
        if info.unique.iter().any(|e| e == entry) {
            if !info.duplicates.iter().any(|e| e == entry) {
                info.duplicates.push(entry.clone());
            }
        } else {
            info.unique.push(entry.clone());
        }
    }
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries_trims_and_drops_blanks() {
        let parsed = parse_entries("  Alice  \n\nBob\n   \nCarol\n");
        assert_eq!(parsed, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_parse_entries_empty_text() {
        assert!(parse_entries("").is_empty());
        assert!(parse_entries("\n\n  \n").is_empty());
    }

    #[test]
    fn test_duplicate_info() {
        let entries: Vec<String> = ["A", "B", "A", "C", "B", "A"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let info = duplicate_info(&entries);
        assert_eq!(info.unique, vec!["A", "B", "C"]);
        assert_eq!(info.duplicates, vec!["A", "B"]);
    }

    #[test]
    fn test_duplicates_are_case_sensitive() {
        let entries: Vec<String> = ["Ana", "ana"].iter().map(|s| s.to_string()).collect();
        let info = duplicate_info(&entries);
        assert_eq!(info.unique.len(), 2);
        assert!(info.duplicates.is_empty());
    }
}
