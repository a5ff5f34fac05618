//! Small nets used across the test suites.
//!
//! All nets are 1-safe under [`crate::net::FiringRule::Safe`]. Expected reachable sets are
//! given as bit patterns for [`super::mk_markings`] (most significant bit = first place).

use crate::net::{IncidenceMatrix, PetriNet};

fn matrix(rows: &[&[u32]]) -> IncidenceMatrix {
    IncidenceMatrix::from_rows(rows).expect("Invalid test matrix")
}

/// Three places in a ring: `t1: p1 -> p2`, `t2: p2 -> p3`, `t3: p3 -> p1`.
///
/// - From `100`, the single token circulates: `{100, 010, 001}`.
/// - From `101`, two tokens circulate: `{110, 011, 101}`.
/// - From `111`, every transition is enabled by tokens but each would put a second token
///   into an occupied place, so only `{111}` is reachable.
pub fn cyclic_net(initial: [u32; 3]) -> PetriNet {
    PetriNet::from_matrices(
        &["p1", "p2", "p3"],
        &["t1", "t2", "t3"],
        matrix(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]),
        matrix(&[&[0, 1, 0], &[0, 0, 1], &[1, 0, 0]]),
        initial,
    )
    .expect("Invalid cyclic net")
}

pub mod cyclic {
    pub const FROM_100: &[u32] = &[0b100, 0b010, 0b001];
    pub const FROM_101: &[u32] = &[0b110, 0b011, 0b101];
    pub const FROM_111: &[u32] = &[0b111];
}

/// A seven place net with a fork and a synchronisation:
///
/// ```text
/// T1: P1 -> P2 + P5      (fork)
/// T2: P4 + P6 -> P7      (join)
/// T3: P2 -> P3
/// T4: P3 -> P4
/// T5: P5 -> P6
/// ```
///
/// From `P1` the two branches interleave and finally join in `P7` (8 markings).
/// From `P1 + P6` the extra token in `P6` blocks `T5` until the join consumes it
/// (6 markings).
pub fn branching_net(initial: [u32; 7]) -> PetriNet {
    PetriNet::from_matrices(
        &["P1", "P2", "P3", "P4", "P5", "P6", "P7"],
        &["T1", "T2", "T3", "T4", "T5"],
        matrix(&[
            &[1, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 1, 0, 1, 0],
            &[0, 1, 0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0, 0, 0],
            &[0, 0, 0, 0, 1, 0, 0],
        ]),
        matrix(&[
            &[0, 1, 0, 0, 1, 0, 0],
            &[0, 0, 0, 0, 0, 0, 1],
            &[0, 0, 1, 0, 0, 0, 0],
            &[0, 0, 0, 1, 0, 0, 0],
            &[0, 0, 0, 0, 0, 1, 0],
        ]),
        initial,
    )
    .expect("Invalid branching net")
}

pub mod branching {
    pub const FROM_P1: &[u32] = &[
        0b0000001, 0b0001010, 0b0001100, 0b0010010, 0b0010100, 0b0100010, 0b0100100, 0b1000000,
    ];
    pub const FROM_P1_P6: &[u32] = &[
        0b0000011, 0b0000101, 0b0001110, 0b0010110, 0b0100110, 0b1000010,
    ];
}

/// Five places, a fork that fills three places and two ways back to `P1`:
///
/// ```text
/// T1: P1 -> P2 + P3 + P4
/// T2: P2 -> P1
/// T3: P4 + P5 -> P1
/// T4: P3 -> P5
/// ```
///
/// From `P1`, six markings are reachable; `10011` and `11000` are deadlocks.
pub fn fork_net(initial: [u32; 5]) -> PetriNet {
    PetriNet::from_matrices(
        &["P1", "P2", "P3", "P4", "P5"],
        &["T1", "T2", "T3", "T4"],
        matrix(&[
            &[1, 0, 0, 0, 0],
            &[0, 1, 0, 0, 0],
            &[0, 0, 0, 1, 1],
            &[0, 0, 1, 0, 0],
        ]),
        matrix(&[
            &[0, 1, 1, 1, 0],
            &[1, 0, 0, 0, 0],
            &[1, 0, 0, 0, 0],
            &[0, 0, 0, 0, 1],
        ]),
        initial,
    )
    .expect("Invalid fork net")
}

pub mod fork {
    pub const FROM_P1: &[u32] = &[0b01011, 0b01110, 0b10000, 0b10011, 0b10110, 0b11000];
    pub const DEADLOCKS: &[u32] = &[0b10011, 0b11000];
}

/// A producer that needs no input: `gen: -> buf`, `use: buf -> done`.
///
/// Reachable from `000`: `{000, 010, 001, 011}`; `gen` is blocked whenever `buf` is full,
/// so `011` is a deadlock.
pub fn source_net() -> PetriNet {
    PetriNet::from_matrices(
        &["idle", "buf", "done"],
        &["gen", "use"],
        matrix(&[&[0, 0, 0], &[0, 1, 0]]),
        matrix(&[&[0, 1, 0], &[0, 0, 1]]),
        [0, 0, 0],
    )
    .expect("Invalid source net")
}

pub mod source {
    pub const FROM_EMPTY: &[u32] = &[0b000, 0b010, 0b001, 0b011];
    pub const DEADLOCKS: &[u32] = &[0b011];
}
