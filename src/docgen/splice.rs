//! Splices the rendered table into a host document between marker lines.
//!
//! Everything up to and including the first `BEGIN TABLE` line is kept, as
//! is everything from the first following `END TABLE` line to the end of
//! the document. The lines in between are replaced.

use crate::docgen::error::{BEGIN_MARKER, END_MARKER, SpliceError};
use crate::docgen::table::RenderedTable;

/// The untouched parts of a host document around the generated region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions<'a> {
    /// Lines up to and including the begin marker.
    pub prefix: &'a [&'a str],
    /// Lines from the end marker to the end of the document.
    pub suffix: &'a [&'a str],
}

/// Locate the marker lines in `lines`.
///
/// # Errors
///
/// Returns [`SpliceError::MissingMarker`] if either marker is absent or the
/// end marker does not follow the begin marker.
pub fn find_regions<'a>(lines: &'a [&'a str]) -> Result<Regions<'a>, SpliceError> {
    let begin = lines
        .iter()
        .position(|l| l.contains(BEGIN_MARKER))
        .ok_or(SpliceError::MissingMarker {
            marker: BEGIN_MARKER,
        })?;

    let end = lines[begin + 1..]
        .iter()
        .position(|l| l.contains(END_MARKER))
        .map(|offset| begin + 1 + offset)
        .ok_or(SpliceError::MissingMarker { marker: END_MARKER })?;

    Ok(Regions {
        prefix: &lines[..=begin],
        suffix: &lines[end..],
    })
}

/// Replace the region between the markers of `document` with `table`.
///
/// The document is split on `\n` only, so a trailing newline survives as
/// part of the suffix. Blocks are separated by a blank line.
///
/// # Errors
///
/// Returns [`SpliceError::MissingMarker`] if the document lacks a marker.
pub fn splice_document(document: &str, table: &RenderedTable) -> Result<String, SpliceError> {
    let lines: Vec<&str> = document.split('\n').collect();
    let regions = find_regions(&lines)?;

    tracing::debug!(
        prefix_lines = regions.prefix.len(),
        suffix_lines = regions.suffix.len(),
        replaced_lines = lines.len() - regions.prefix.len() - regions.suffix.len(),
        "located table markers"
    );

    Ok(format!(
        "{}\n\n{}\n\n{}\n\n{}",
        regions.prefix.join("\n"),
        table.toc.join("\n"),
        table.body.join("\n"),
        regions.suffix.join("\n"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Action, Catalog, Endpoint, Resource};

    fn single_resource_table() -> RenderedTable {
        let catalog = Catalog::new(vec![Resource::new(
            "X",
            &["Global"],
            vec![Endpoint::new(
                "/x",
                &[("Type", "x")],
                vec![Action::new("list", "List xs", &["type=<type>;actions=list"])],
            )],
        )]);
        RenderedTable::from_catalog(&catalog)
    }

    #[test]
    fn splices_between_markers() {
        let out = splice_document("A\nBEGIN TABLE\nold\nEND TABLE\nB", &single_resource_table())
            .unwrap();

        let expected = "A\nBEGIN TABLE\n\n\
            - [X](#x)\n\n\
            ## X\n\n\
            The **X** resource type supports the following scopes: **Global**\n\n\
            | API endpoint | Parameters into permissions engine | Available actions / examples |\n\
            | ------------ | ---------------------------------- | ---------------------------- |\n\
            | <code>/x</code> | <ul><li>Type</li><ul><li><code>x</code></li></ul></ul> \
            | <ul><li><code>list</code>: List xs</li><ul><li>`type=<type>;actions=list`</li></ul></ul> |\n\
            \n\n\
            END TABLE\nB";
        assert_eq!(out, expected);
    }

    #[test]
    fn keeps_prefix_and_suffix() {
        let out = splice_document(
            "---\ntitle: t\n---\n{/* BEGIN TABLE */}\nstale\nstale\n{/* END TABLE */}\ntail\n",
            &single_resource_table(),
        )
        .unwrap();
        assert!(out.starts_with("---\ntitle: t\n---\n{/* BEGIN TABLE */}\n\n- [X](#x)"));
        assert!(out.ends_with("\n\n{/* END TABLE */}\ntail\n"));
        assert!(!out.contains("stale"));
    }

    #[test]
    fn begin_marker_on_first_line() {
        let out = splice_document("BEGIN TABLE\nEND TABLE", &single_resource_table()).unwrap();
        assert!(out.starts_with("BEGIN TABLE\n\n- [X](#x)"));
        assert!(out.ends_with("\n\nEND TABLE"));
        assert_eq!(out.matches("BEGIN TABLE").count(), 1);
    }

    #[test]
    fn missing_begin_marker() {
        let err = splice_document("A\nEND TABLE\n", &single_resource_table()).unwrap_err();
        assert_eq!(
            err,
            SpliceError::MissingMarker {
                marker: BEGIN_MARKER
            }
        );
    }

    #[test]
    fn missing_end_marker() {
        let err = splice_document("A\nBEGIN TABLE\nold\n", &single_resource_table()).unwrap_err();
        assert_eq!(err, SpliceError::MissingMarker { marker: END_MARKER });
    }

    #[test]
    fn end_marker_before_begin_is_ignored() {
        let err =
            splice_document("END TABLE\nBEGIN TABLE\nold", &single_resource_table()).unwrap_err();
        assert_eq!(err, SpliceError::MissingMarker { marker: END_MARKER });
    }

    #[test]
    fn first_end_marker_wins() {
        let out = splice_document(
            "BEGIN TABLE\nx\nEND TABLE\nmid\nEND TABLE",
            &single_resource_table(),
        )
        .unwrap();
        assert!(out.ends_with("\n\nEND TABLE\nmid\nEND TABLE"));
    }

    #[test]
    fn splice_is_idempotent() {
        let table = single_resource_table();
        let once = splice_document("A\nBEGIN TABLE\nEND TABLE\nB\n", &table).unwrap();
        let twice = splice_document(&once, &table).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn find_regions_slices() {
        let lines = vec!["a", "BEGIN TABLE", "x", "y", "END TABLE", "b"];
        let regions = find_regions(&lines).unwrap();
        assert_eq!(regions.prefix, &["a", "BEGIN TABLE"]);
        assert_eq!(regions.suffix, &["END TABLE", "b"]);
    }
}
