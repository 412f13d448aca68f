//! Petition document renderer.
//!
//! # Responsibility
//! - Turn a [`PetitionDraft`] into the fixed-layout petition text.
//!
//! # Invariants
//! - Rendering is pure: identical drafts yield byte-identical text.
//! - Field content is interpolated verbatim; rendering never fails.
//! - The layout (including the leading blank line and trailing newline)
//!   is byte-compatible with documents produced by earlier versions of
//!   this tool, so old and new stores read back identically.

use crate::model::petition::PetitionDraft;

/// Renders the full petition document for a draft.
///
/// The court heading and case-type line are upper-cased; the subject
/// line keeps the case type in its original case. Empty `facts` or
/// `reliefs` produce an empty list section with the surrounding
/// headings unchanged.
pub fn render_petition(draft: &PetitionDraft) -> String {
    let facts = numbered_lines(&draft.facts);
    let reliefs = numbered_lines(&draft.reliefs);

    format!(
        "
IN THE {court}

CASE TYPE: {case_upper}

PETITIONER: {petitioner}
RESPONDENT: {respondent}

SUBJECT: Petition regarding {case_type}

RESPECTFULLY SHOWETH:

1. That the petitioner is competent to file this petition.
2. That the respondent is connected with the present matter.

FACTS OF THE CASE:
{facts}

GROUNDS:
A. The above facts clearly establish cause of action.
B. The actions of the respondent are arbitrary and against natural justice.

RELIEFS SOUGHT:
{reliefs}

PRAYER:
It is humbly prayed that this Hon’ble Court may kindly grant the above reliefs
in the interest of justice.

Place: __________
Date: __________

(Signature)
Petitioner
",
        court = draft.court_name.to_uppercase(),
        case_upper = draft.case_type.to_uppercase(),
        petitioner = draft.petitioner,
        respondent = draft.respondent,
        case_type = draft.case_type,
        facts = facts,
        reliefs = reliefs,
    )
}

/// Formats items as a 1-based numbered list, one `N. item` line per
/// element in input order. Each line carries its own trailing newline;
/// an empty slice yields an empty string.
fn numbered_lines(items: &[String]) -> String {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, item));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{numbered_lines, render_petition};
    use crate::model::petition::PetitionDraft;

    fn draft() -> PetitionDraft {
        PetitionDraft {
            petitioner: "A. Petitioner".to_string(),
            respondent: "B. Respondent".to_string(),
            court_name: "High Court of Test".to_string(),
            case_type: "Test Dispute".to_string(),
            facts: vec!["first fact".to_string(), "second fact".to_string()],
            reliefs: vec!["only relief".to_string()],
        }
    }

    #[test]
    fn numbered_lines_are_one_based_and_ordered() {
        let lines = numbered_lines(&["A".to_string(), "B".to_string()]);
        assert_eq!(lines, "1. A\n2. B\n");
    }

    #[test]
    fn numbered_lines_empty_input_is_empty() {
        assert_eq!(numbered_lines(&[]), "");
    }

    #[test]
    fn render_is_deterministic() {
        let draft = draft();
        assert_eq!(render_petition(&draft), render_petition(&draft));
    }

    #[test]
    fn render_uppercases_heading_but_not_subject() {
        let text = render_petition(&draft());
        assert!(text.contains("\nIN THE HIGH COURT OF TEST\n"));
        assert!(text.contains("\nCASE TYPE: TEST DISPUTE\n"));
        assert!(text.contains("\nSUBJECT: Petition regarding Test Dispute\n"));
    }

    #[test]
    fn render_passes_field_content_through_verbatim() {
        let mut odd = draft();
        odd.petitioner = String::new();
        odd.respondent = "name \"with\" quotes; DROP TABLE petitions;".to_string();
        let text = render_petition(&odd);
        assert!(text.contains("\nPETITIONER: \n"));
        assert!(text.contains("RESPONDENT: name \"with\" quotes; DROP TABLE petitions;"));
    }

    #[test]
    fn render_with_empty_lists_keeps_surrounding_headings() {
        let mut empty = draft();
        empty.facts.clear();
        empty.reliefs.clear();
        let text = render_petition(&empty);
        assert!(text.contains("FACTS OF THE CASE:\n\n\nGROUNDS:"));
        assert!(text.contains("RELIEFS SOUGHT:\n\n\nPRAYER:"));
    }
}
