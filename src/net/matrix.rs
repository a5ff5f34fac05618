use crate::net::NetError;

/// A dense `transitions × places` matrix of arc multiplicities.
///
/// The shape is fixed when the matrix is created. Rows are indexed by transitions,
/// columns by places.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncidenceMatrix {
    rows: usize,
    columns: usize,
    data: Vec<u32>,
}

impl IncidenceMatrix {
    /// A matrix of the given shape with all entries set to zero.
    pub fn zeros(rows: usize, columns: usize) -> IncidenceMatrix {
        IncidenceMatrix {
            rows,
            columns,
            data: vec![0; rows * columns],
        }
    }

    /// Build a matrix from a list of rows.
    ///
    /// All rows must have the same length, otherwise [`NetError::Shape`] is returned.
    /// An empty list of rows produces a `0 × 0` matrix.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<IncidenceMatrix, NetError> {
        let columns = rows.first().map(|it| it.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * columns);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(NetError::shape(
                    "matrix row",
                    format!("{columns} columns"),
                    format!("{} columns in row {index}", row.len()),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(IncidenceMatrix {
            rows: rows.len(),
            columns,
            data,
        })
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[u32] {
        assert!(row < self.rows, "Row {row} out of range ({} rows).", self.rows);
        &self.data[row * self.columns..(row + 1) * self.columns]
    }

    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn get(&self, row: usize, column: usize) -> u32 {
        self.row(row)[column]
    }

    /// Increase the entry at the given position by `amount`.
    pub(crate) fn add(&mut self, row: usize, column: usize, amount: u32) {
        assert!(row < self.rows && column < self.columns);
        let entry = &mut self.data[row * self.columns + column];
        *entry = entry.saturating_add(amount);
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> {
        (0..self.rows).map(|row| self.row(row))
    }
}
