use pdfium_render::prelude::*;

use crate::domain::TableMatrix;

const VERTICAL_TOLERANCE: f32 = 3.0;
const COLUMN_GAP_FACTOR: f32 = 1.5;
const COLUMN_MERGE_TOLERANCE: f32 = 8.0;
const MIN_TABLE_ROWS: usize = 2;
const MIN_TABLE_COLS: usize = 2;

/// A run of characters sharing a baseline with no column-sized gap.
#[derive(Debug, Clone)]
struct TextFragment {
    text: String,
    left: f32,
    top: f32,
}

/// Detects grid-like regions on a page by clustering character fragments
/// into rows and columns. Only runs of at least 2 rows with at least 2
/// aligned columns qualify as tables.
pub(super) fn detect_tables(page: &PdfPage) -> Vec<TableMatrix> {
    tables_from_fragments(collect_fragments(page))
}

fn collect_fragments(page: &PdfPage) -> Vec<TextFragment> {
    let Ok(text_page) = page.text() else {
        return Vec::new();
    };

    let mut fragments: Vec<TextFragment> = Vec::new();
    let mut current = String::new();
    let mut start_left = 0.0f32;
    let mut current_top = 0.0f32;
    let mut last_right = 0.0f32;
    let mut last_top = 0.0f32;
    let mut last_height = 0.0f32;

    for char_info in text_page.chars().iter() {
        let Ok(bounds) = char_info.loose_bounds() else {
            continue;
        };
        let Some(unicode) = char_info.unicode_string() else {
            continue;
        };
        let Some(ch) = unicode.chars().next() else {
            continue;
        };
        if ch == '\n' || ch == '\r' {
            continue;
        }

        let left = bounds.left().value;
        let right = bounds.right().value;
        let top = bounds.top().value;
        let height = top - bounds.bottom().value;

        let breaks_fragment = !current.is_empty()
            && ((top - last_top).abs() > VERTICAL_TOLERANCE
                || left - last_right > last_height * COLUMN_GAP_FACTOR);

        if breaks_fragment {
            push_fragment(&mut fragments, &mut current, start_left, current_top);
        }

        if current.is_empty() {
            start_left = left;
            current_top = top;
        }

        current.push(ch);
        last_right = right;
        last_top = top;
        last_height = height;
    }

    push_fragment(&mut fragments, &mut current, start_left, current_top);

    fragments
}

fn push_fragment(fragments: &mut Vec<TextFragment>, current: &mut String, left: f32, top: f32) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        fragments.push(TextFragment {
            text: trimmed.to_string(),
            left,
            top,
        });
    }
    current.clear();
}

fn tables_from_fragments(mut fragments: Vec<TextFragment>) -> Vec<TableMatrix> {
    if fragments.is_empty() {
        return Vec::new();
    }

    // Page coordinates are bottom-up; a larger top value is higher on the page.
    fragments.sort_by(|a, b| {
        b.top
            .partial_cmp(&a.top)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                a.left
                    .partial_cmp(&b.left)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });

    find_table_regions(&group_into_rows(fragments))
        .into_iter()
        .map(build_matrix)
        .filter(|table| table.column_count() >= MIN_TABLE_COLS)
        .collect()
}

fn group_into_rows(fragments: Vec<TextFragment>) -> Vec<Vec<TextFragment>> {
    let mut rows: Vec<Vec<TextFragment>> = Vec::new();

    for fragment in fragments {
        match rows.last_mut() {
            Some(row) if (row[0].top - fragment.top).abs() <= VERTICAL_TOLERANCE => {
                row.push(fragment);
            }
            _ => rows.push(vec![fragment]),
        }
    }

    for row in &mut rows {
        row.sort_by(|a, b| {
            a.left
                .partial_cmp(&b.left)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    rows
}

fn find_table_regions(rows: &[Vec<TextFragment>]) -> Vec<Vec<Vec<TextFragment>>> {
    let mut regions = Vec::new();
    let mut current: Vec<Vec<TextFragment>> = Vec::new();

    for row in rows {
        if row.len() >= MIN_TABLE_COLS {
            current.push(row.clone());
        } else {
            if current.len() >= MIN_TABLE_ROWS {
                regions.push(std::mem::take(&mut current));
            }
            current.clear();
        }
    }

    if current.len() >= MIN_TABLE_ROWS {
        regions.push(current);
    }

    regions
}

fn build_matrix(region: Vec<Vec<TextFragment>>) -> TableMatrix {
    let mut column_starts: Vec<f32> = Vec::new();
    for row in &region {
        for fragment in row {
            let known = column_starts
                .iter()
                .any(|start| (start - fragment.left).abs() <= COLUMN_MERGE_TOLERANCE);
            if !known {
                column_starts.push(fragment.left);
            }
        }
    }
    column_starts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut rows = Vec::with_capacity(region.len());
    for row in region {
        let mut cells = vec![String::new(); column_starts.len()];
        for fragment in row {
            let index = column_starts
                .iter()
                .position(|start| (start - fragment.left).abs() <= COLUMN_MERGE_TOLERANCE)
                .unwrap_or(column_starts.len() - 1);
            if cells[index].is_empty() {
                cells[index] = fragment.text;
            } else {
                cells[index].push(' ');
                cells[index].push_str(&fragment.text);
            }
        }
        rows.push(cells);
    }

    TableMatrix::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(text: &str, left: f32, top: f32) -> TextFragment {
        TextFragment {
            text: text.to_string(),
            left,
            top,
        }
    }

    #[test]
    fn given_aligned_grid_when_detecting_then_returns_single_matrix() {
        let fragments = vec![
            fragment("Name", 10.0, 100.0),
            fragment("Qty", 80.0, 100.0),
            fragment("Widget", 10.0, 80.0),
            fragment("3", 80.0, 80.0),
        ];

        let tables = tables_from_fragments(fragments);

        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables[0].rows,
            vec![
                vec!["Name".to_string(), "Qty".to_string()],
                vec!["Widget".to_string(), "3".to_string()],
            ]
        );
    }

    #[test]
    fn given_prose_lines_when_detecting_then_returns_nothing() {
        let fragments = vec![
            fragment("This is a sentence.", 10.0, 100.0),
            fragment("Another sentence follows.", 10.0, 80.0),
            fragment("And a third one.", 10.0, 60.0),
        ];

        assert!(tables_from_fragments(fragments).is_empty());
    }

    #[test]
    fn given_single_multi_column_row_when_detecting_then_returns_nothing() {
        let fragments = vec![
            fragment("Left", 10.0, 100.0),
            fragment("Right", 200.0, 100.0),
        ];

        assert!(tables_from_fragments(fragments).is_empty());
    }

    #[test]
    fn given_row_missing_a_cell_when_detecting_then_cell_renders_empty() {
        let fragments = vec![
            fragment("A", 10.0, 100.0),
            fragment("B", 80.0, 100.0),
            fragment("C", 150.0, 100.0),
            fragment("1", 10.0, 80.0),
            fragment("3", 150.0, 80.0),
        ];

        let tables = tables_from_fragments(fragments);

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows[1][1], "");
    }
}
