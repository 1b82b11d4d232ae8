//! Fixed-width tables of hypotheses.

use std::fmt::Write;

use vspace_core::prelude::*;

use crate::algorithm::Outcome;
use crate::version_space::VersionSpace;

/// Column width used when none is configured.
pub const DEFAULT_COLUMN_WIDTH: usize = 10;

/// Render `hypotheses` as a table with one column per domain attribute.
///
/// Rows are ordered most specific first (fewest wildcards), then by value,
/// and numbered from 1.
pub fn render_table<'a>(
    hypotheses: impl IntoIterator<Item = &'a Hypothesis>,
    domain: &Domain,
    column_width: usize,
) -> Result<String> {
    let mut rows: Vec<&Hypothesis> = hypotheses.into_iter().collect();
    if rows.iter().any(|h| !domain.has_attribute_set(h.attributes())) {
        return Err(VspaceError::DomainMismatch);
    }
    rows.sort_by(|a, b| {
        a.wildcard_count()
            .cmp(&b.wildcard_count())
            .then_with(|| a.cmp(b))
    });

    let mut out = String::new();
    out.push_str(&cell("INDEX", column_width));
    for attribute in domain.attributes() {
        out.push_str(&cell(&attribute.as_str().to_uppercase(), column_width));
    }
    finish_line(&mut out);

    for (index, hypothesis) in rows.iter().enumerate() {
        out.push_str(&cell(&format!("{}.", index + 1), column_width));
        for attribute in domain.attributes() {
            let entry = hypothesis.entry(attribute).unwrap_or(&Entry::Empty);
            out.push_str(&cell(&entry.to_string(), column_width));
        }
        finish_line(&mut out);
    }
    Ok(out)
}

/// Both boundaries, G first.
pub fn render_version_space(space: &VersionSpace, domain: &Domain, column_width: usize) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "General boundary (G): {} hypotheses", space.general().len());
    out.push_str(&render_table(space.general(), domain, column_width)?);
    out.push('\n');
    let _ = writeln!(out, "Specific boundary (S):");
    out.push_str(&render_table([space.specific()], domain, column_width)?);
    Ok(out)
}

/// Render whatever a learner produced.
pub fn render_outcome(outcome: &Outcome, domain: &Domain, column_width: usize) -> Result<String> {
    match outcome {
        Outcome::Hypothesis { hypothesis } => render_table([hypothesis], domain, column_width),
        Outcome::Hypotheses { hypotheses } => render_table(hypotheses, domain, column_width),
        Outcome::VersionSpace { version_space } => {
            render_version_space(version_space, domain, column_width)
        }
    }
}

/// Left-align `text` in `width` columns, always leaving one space after it.
fn cell(text: &str, width: usize) -> String {
    let width = width.max(text.chars().count() + 1);
    format!("{:<width$}", text, width = width)
}

fn finish_line(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn weather() -> Domain {
        Domain::new([("Sky", vec!["Sunny", "Rainy"]), ("Wind", vec!["Strong", "Weak"])]).unwrap()
    }

    fn hyp(sky: Entry, wind: Entry) -> Hypothesis {
        Hypothesis::from_entries([("Sky", sky), ("Wind", wind)])
    }

    #[test]
    fn table_has_header_and_numbered_rows() {
        let hypotheses = BTreeSet::from([
            hyp(Entry::Any, Entry::Any),
            hyp(Entry::value("Sunny"), Entry::Any),
        ]);
        let table = render_table(&hypotheses, &weather(), 8).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "INDEX   SKY     WIND");
        assert_eq!(lines[1], "1.      Sunny   ?");
        assert_eq!(lines[2], "2.      ?       ?");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn long_cells_keep_a_separator() {
        let domain = Domain::new([("Outlook", vec!["Overcast"])]).unwrap();
        let h = Hypothesis::from_entries([("Outlook", Entry::value("Overcast"))]);
        let table = render_table([&h], &domain, 4).unwrap();
        assert_eq!(table.lines().nth(1), Some("1.  Overcast"));
        assert_eq!(table.lines().next(), Some("INDEX OUTLOOK"));
    }

    #[test]
    fn unsatisfiable_marker_is_rendered() {
        let domain = weather();
        let table = render_table([&Hypothesis::most_specific(&domain)], &domain, 6).unwrap();
        assert_eq!(table.lines().nth(1), Some("1.    ∅     ∅"));
    }

    #[test]
    fn foreign_hypotheses_are_rejected() {
        let stray = Hypothesis::from_entries([("Temp", Entry::Any)]);
        assert!(matches!(
            render_table([&stray], &weather(), 10),
            Err(VspaceError::DomainMismatch)
        ));
    }

    #[test]
    fn empty_set_renders_header_only() {
        let table = render_table(std::iter::empty(), &weather(), 10).unwrap();
        assert_eq!(table, "INDEX     SKY       WIND\n");
    }
}
