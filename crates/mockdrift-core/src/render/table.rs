use crate::diff::model::DisplayRow;
use tabled::builder::Builder;
use tabled::settings::{Style, Width};

/// Total width of the detailed review table
pub const DETAIL_WIDTH: usize = 120;

/// Total width of the request/response path tables
pub const PATHS_WIDTH: usize = 40;

const DETAIL_HEADER: [&str; 4] = ["ACTION", "PATH", "MOCK", "REAL"];

/// Single-column table listing changed paths under `title`.
///
/// Returns `None` when there are no paths, so callers skip the table.
pub fn paths_table(title: &str, paths: &[String]) -> Option<String> {
    if paths.is_empty() {
        return None;
    }
    let mut builder = Builder::default();
    builder.push_record([title.to_string()]);
    builder.push_record([paths.join("\n")]);
    Some(finish(builder, PATHS_WIDTH))
}

/// ACTION / PATH / MOCK / REAL table for the detailed review
pub fn detail_table(rows: &[DisplayRow]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }
    let mut builder = Builder::default();
    builder.push_record(DETAIL_HEADER);
    for row in rows {
        builder.push_record([
            row.action.label().to_string(),
            row.path.clone(),
            row.mock.clone(),
            row.real.clone(),
        ]);
    }
    Some(finish(builder, DETAIL_WIDTH))
}

fn finish(builder: Builder, width: usize) -> String {
    let mut table = builder.build();
    table.with(Style::rounded()).with(Width::wrap(width));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::DiffAction;

    #[test]
    fn test_paths_table_lists_each_path() {
        let table = paths_table("REQUEST", &["query.page".to_string(), "headers.accept".to_string()])
            .unwrap();
        assert!(table.starts_with('╭'));
        assert!(table.contains("REQUEST"));
        assert!(table.contains("query.page"));
        assert!(table.contains("headers.accept"));
    }

    #[test]
    fn test_empty_inputs_render_nothing() {
        assert_eq!(paths_table("RESPONSE", &[]), None);
        assert_eq!(detail_table(&[]), None);
    }

    #[test]
    fn test_detail_table_has_header_and_labels() {
        let rows = vec![DisplayRow {
            action: DiffAction::Modified,
            path: "response.status".to_string(),
            mock: "200".to_string(),
            real: "500".to_string(),
        }];
        let table = detail_table(&rows).unwrap();
        for heading in DETAIL_HEADER {
            assert!(table.contains(heading));
        }
        assert!(table.contains("Property was modified"));
        assert!(table.contains("500"));
    }

    #[test]
    fn test_detail_table_respects_width() {
        let rows = vec![DisplayRow {
            action: DiffAction::Added,
            path: "response.body.items[0]".to_string(),
            mock: "N/A".to_string(),
            real: "x".repeat(400),
        }];
        let table = detail_table(&rows).unwrap();
        assert!(table.lines().all(|line| line.chars().count() <= DETAIL_WIDTH));
    }
}
