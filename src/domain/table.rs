/// A table detected in a document: ordered rows of cell strings.
/// The first row is treated as the header when rendering. Rows may be
/// ragged; consumers must tolerate missing cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableMatrix {
    pub rows: Vec<Vec<String>>,
}

impl TableMatrix {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}
