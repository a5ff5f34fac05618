use crate::net::{IncidenceMatrix, PetriNet};
use std::fmt::{Display, Formatter};

/// Canonical, order-preserving text form of a net, used for snapshot comparisons.
///
/// ```text
/// Places: ['p1', 'p2']
/// Place names: ['p1', 'p2']
///
/// Transitions: ['t1']
/// Transition names: ['t1']
///
/// I (input) matrix:
/// [[1 0]]
///
/// O (output) matrix:
/// [[0 1]]
///
/// Initial marking M0: [1 0]
/// ```
impl Display for PetriNet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Places: {}", quoted_list(self.places()))?;
        writeln!(f, "Place names: {}", quoted_list(self.place_labels()))?;
        writeln!(f)?;
        writeln!(f, "Transitions: {}", quoted_list(self.transitions()))?;
        writeln!(
            f,
            "Transition names: {}",
            quoted_list(self.transition_labels())
        )?;
        writeln!(f)?;
        writeln!(f, "I (input) matrix:")?;
        writeln!(f, "{}", matrix_text(self.input()))?;
        writeln!(f)?;
        writeln!(f, "O (output) matrix:")?;
        writeln!(f, "{}", matrix_text(self.output()))?;
        writeln!(f)?;
        write!(
            f,
            "Initial marking M0: [{}]",
            spaced(self.initial_marking().iter())
        )
    }
}

fn quoted_list(items: &[String]) -> String {
    let items: Vec<String> = items.iter().map(|it| format!("'{it}'")).collect();
    format!("[{}]", items.join(", "))
}

fn spaced<'a>(values: impl Iterator<Item = &'a u32>) -> String {
    values
        .map(|it| it.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn matrix_text(matrix: &IncidenceMatrix) -> String {
    let rows: Vec<String> = matrix
        .iter_rows()
        .map(|row| format!("[{}]", spaced(row.iter())))
        .collect();
    format!("[{}]", rows.join("\n "))
}
