use petition_core::{render_petition, PetitionDraft};

fn sample_draft() -> PetitionDraft {
    PetitionDraft {
        petitioner: "Rahul Sharma".to_string(),
        respondent: "Electricity Board".to_string(),
        court_name: "District Civil Court, Kolkata".to_string(),
        case_type: "Electricity Bill Dispute".to_string(),
        facts: vec![
            "The petitioner received an inflated electricity bill.".to_string(),
            "Meter reading does not match actual consumption.".to_string(),
            "Complaints were made but not resolved.".to_string(),
        ],
        reliefs: vec![
            "Correct the electricity bill".to_string(),
            "Remove penalty charges".to_string(),
            "Provide compensation".to_string(),
        ],
    }
}

#[test]
fn render_is_byte_identical_across_calls() {
    let draft = sample_draft();
    assert_eq!(render_petition(&draft), render_petition(&draft));
}

#[test]
fn court_heading_is_uppercased_on_its_own_line() {
    let text = render_petition(&sample_draft());
    assert!(text
        .lines()
        .any(|line| line == "IN THE DISTRICT CIVIL COURT, KOLKATA"));
}

#[test]
fn subject_line_keeps_original_case() {
    let text = render_petition(&sample_draft());
    assert!(text
        .lines()
        .any(|line| line == "SUBJECT: Petition regarding Electricity Bill Dispute"));
    assert!(text.lines().any(|line| line == "CASE TYPE: ELECTRICITY BILL DISPUTE"));
}

#[test]
fn facts_section_numbers_inputs_in_order() {
    let mut draft = sample_draft();
    draft.facts = vec!["A".to_string(), "B".to_string()];
    let text = render_petition(&draft);

    let fact_lines: Vec<&str> = section_lines(&text, "FACTS OF THE CASE:", "GROUNDS:");
    assert_eq!(fact_lines, vec!["1. A", "2. B"]);
}

#[test]
fn empty_facts_section_has_no_numbered_lines() {
    let mut draft = sample_draft();
    draft.facts.clear();
    let text = render_petition(&draft);

    let fact_lines = section_lines(&text, "FACTS OF THE CASE:", "GROUNDS:");
    assert!(fact_lines.is_empty());
}

#[test]
fn reliefs_section_numbers_inputs_in_order() {
    let text = render_petition(&sample_draft());

    let relief_lines = section_lines(&text, "RELIEFS SOUGHT:", "PRAYER:");
    assert_eq!(
        relief_lines,
        vec![
            "1. Correct the electricity bill",
            "2. Remove penalty charges",
            "3. Provide compensation",
        ]
    );
}

#[test]
fn signature_block_placeholders_are_present() {
    let text = render_petition(&sample_draft());
    assert!(text.contains("Place: __________"));
    assert!(text.contains("Date: __________"));
    assert!(text.contains("(Signature)\nPetitioner"));
}

#[test]
fn long_and_unusual_content_renders_without_error() {
    let mut draft = sample_draft();
    draft.court_name = String::new();
    draft.facts = vec!["x".repeat(10_000), "line\nwith\nbreaks".to_string()];
    let text = render_petition(&draft);
    assert!(text.contains(&"x".repeat(10_000)));
    assert!(text.lines().any(|line| line == "IN THE "));
}

/// Non-empty lines strictly between the two section headings.
fn section_lines<'a>(text: &'a str, start: &str, end: &str) -> Vec<&'a str> {
    text.lines()
        .skip_while(|line| *line != start)
        .skip(1)
        .take_while(|line| *line != end)
        .filter(|line| !line.is_empty())
        .collect()
}
