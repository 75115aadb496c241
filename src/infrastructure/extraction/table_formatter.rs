use crate::domain::TableMatrix;

pub const NO_TABLE_MESSAGE: &str = "No table detected.";

/// Renders a table as a fixed-width grid, first row as the header.
/// Ragged rows are tolerated; missing cells render empty.
pub fn format_table(table: &TableMatrix) -> String {
    if table.is_empty() {
        return NO_TABLE_MESSAGE.to_string();
    }

    let columns = table.column_count();
    let mut widths = vec![0usize; columns];
    for row in &table.rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let border = |fill: char| {
        let mut line = String::from("+");
        for width in &widths {
            line.extend(std::iter::repeat(fill).take(width + 2));
            line.push('+');
        }
        line
    };

    let render_row = |row: &[String]| {
        let mut line = String::from("|");
        for (index, width) in widths.iter().enumerate() {
            let cell = row.get(index).map(String::as_str).unwrap_or("");
            line.push(' ');
            line.push_str(cell);
            line.extend(std::iter::repeat(' ').take(width - cell.chars().count() + 1));
            line.push('|');
        }
        line
    };

    let mut lines = Vec::with_capacity(table.rows.len() * 2 + 1);
    lines.push(border('-'));
    lines.push(render_row(&table.rows[0]));
    lines.push(border('='));
    for row in &table.rows[1..] {
        lines.push(render_row(row));
        lines.push(border('-'));
    }

    lines.join("\n")
}
