use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use tracing::debug;

use super::{DocumentKind, ExtractError};

/// Joins body paragraph texts with `\n`, in document order.
///
/// Tables, headers and footers are not part of the output.
pub fn extract_docx_text(data: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(data)
        .map_err(|e| ExtractError::parse(DocumentKind::Docx, e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();

    debug!("Extracted {} DOCX paragraph(s)", paragraphs.len());

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            // Hyperlinked text (portfolio, LinkedIn) is still résumé content
            ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::test_support::{build_docx, pack_docx as pack};
    use docx_rs::{Docx, Run, Table, TableCell, TableRow};

    #[test]
    fn test_paragraphs_are_newline_separated_in_order() {
        let bytes = build_docx(&["Jane Doe", "Senior Engineer", "Built payment systems"]);
        let text = extract_docx_text(&bytes).unwrap();

        let segments: Vec<&str> = text.split('\n').collect();
        assert_eq!(
            segments,
            vec!["Jane Doe", "Senior Engineer", "Built payment systems"]
        );
    }

    #[test]
    fn test_document_without_paragraphs_is_empty() {
        let bytes = pack(Docx::new());
        let text = super::super::extract_text(&bytes, "docx").unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_runs_within_a_paragraph_are_joined_without_separator() {
        let docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Rust, "))
                .add_run(Run::new().add_text("Go")),
        );
        let text = extract_docx_text(&pack(docx)).unwrap();
        assert_eq!(text, "Rust, Go");
    }

    #[test]
    fn test_tables_are_not_extracted() {
        let table = Table::new(vec![TableRow::new(vec![TableCell::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("InsideTable")))])]);
        let docx = Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Summary")))
            .add_table(table);

        let text = extract_docx_text(&pack(docx)).unwrap();
        assert!(text.contains("Summary"));
        assert!(!text.contains("InsideTable"));
    }

    #[test]
    fn test_internal_whitespace_is_preserved() {
        let bytes = build_docx(&["Skills:  Rust   Go", "", "• Led a team"]);
        let text = super::super::extract_text(&bytes, "docx").unwrap();
        assert_eq!(text, "Skills:  Rust   Go\n\n• Led a team");
    }

    #[test]
    fn test_invalid_archive_is_a_parse_error() {
        let err = extract_docx_text(b"PK\x03\x04 truncated").unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Parse {
                kind: DocumentKind::Docx,
                ..
            }
        ));
    }
}
