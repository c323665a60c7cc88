//! Forward and inverse round engines.
//!
//! Both engines run the same round function over a window of round indices
//! and are generic over the number of tweakey schedules, which is what lets
//! the two- and three-tweakey variants share one implementation. The window
//! bounds are plain indices into the schedules, so a caller can run any
//! slice of the cipher: the common trunk, one output tail, or several pieces
//! back to back.

use super::{
    rows::{inv_sbox, rotate_cells, sbox, State},
    schedule::Schedule,
};

/// Run forward rounds `from..to` over the state.
///
/// One round substitutes every cell through the [S-box](sbox), XORs the
/// subkeys of all schedules into the top two rows and the fixed `0x02`
/// constant into row 2, rotates rows 1 to 3 right by one to three cells, and
/// mixes the columns.
pub fn encrypt_rounds<const TKS: usize, const ROUNDS: usize>(
    state: &mut State,
    schedules: [&Schedule<ROUNDS>; TKS],
    from: usize,
    to: usize,
) {
    let rows = &mut state.0;
    for round in from..to {
        for row in rows.iter_mut() {
            *row = sbox(*row);
        }

        for schedule in schedules {
            rows[0] ^= schedule[round][0];
            rows[1] ^= schedule[round][1];
        }
        rows[2] ^= 0x02;

        rows[1] = rotate_cells(rows[1], 1);
        rows[2] = rotate_cells(rows[2], 2);
        rows[3] = rotate_cells(rows[3], 3);

        rows[1] ^= rows[2];
        rows[2] ^= rows[0];
        let mixed = rows[3] ^ rows[2];
        rows[3] = rows[2];
        rows[2] = rows[1];
        rows[1] = rows[0];
        rows[0] = mixed;
    }
}

/// Undo forward rounds, iterating `from - 1` down to `to` and consuming the
/// same schedule entries as the forward direction.
///
/// Each step applies the inverse of the four round operations in reverse
/// order; the subkey XOR is its own inverse.
pub fn decrypt_rounds<const TKS: usize, const ROUNDS: usize>(
    state: &mut State,
    schedules: [&Schedule<ROUNDS>; TKS],
    from: usize,
    to: usize,
) {
    let rows = &mut state.0;
    for round in (to..from).rev() {
        let mixed = rows[3];
        rows[3] = rows[0];
        rows[0] = rows[1];
        rows[1] = rows[2];
        rows[3] ^= mixed;
        rows[2] = mixed ^ rows[0];
        rows[1] ^= rows[2];

        rows[1] = rotate_cells(rows[1], 3);
        rows[2] = rotate_cells(rows[2], 2);
        rows[3] = rotate_cells(rows[3], 1);

        for schedule in schedules {
            rows[0] ^= schedule[round][0];
            rows[1] ^= schedule[round][1];
        }
        rows[2] ^= 0x02;

        for row in rows.iter_mut() {
            *row = inv_sbox(*row);
        }
    }
}
