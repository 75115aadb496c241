use docsift::domain::TableMatrix;
use docsift::infrastructure::extraction::{NO_TABLE_MESSAGE, format_table};

fn matrix(rows: &[&[&str]]) -> TableMatrix {
    TableMatrix::new(
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
}

#[test]
fn given_empty_table_when_formatting_then_returns_sentinel_message() {
    assert_eq!(format_table(&matrix(&[])), NO_TABLE_MESSAGE);
}

#[test]
fn given_two_by_two_table_when_formatting_then_renders_grid() {
    let output = format_table(&matrix(&[&["A", "B"], &["1", "2"]]));

    assert!(output.contains("| A | B |"));
    assert!(output.contains("| 1 | 2 |"));
    assert!(output.contains("+---+---+"));
    // The header row is separated from the body with a double rule.
    assert!(output.contains("+===+===+"));
}

#[test]
fn given_uneven_cell_widths_when_formatting_then_pads_to_widest_cell() {
    let output = format_table(&matrix(&[&["Name", "Qty"], &["Widget", "3"]]));

    assert!(output.contains("| Name   | Qty |"));
    assert!(output.contains("| Widget | 3   |"));
}

#[test]
fn given_ragged_rows_when_formatting_then_missing_cells_render_empty() {
    let output = format_table(&matrix(&[&["A", "B", "C"], &["1"]]));

    let widths: Vec<usize> = output.lines().map(|line| line.chars().count()).collect();
    assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn given_single_row_table_when_formatting_then_renders_header_only() {
    let output = format_table(&matrix(&[&["Only", "Header"]]));

    assert!(output.contains("| Only | Header |"));
    assert!(output.contains("+======+========+"));
}
