//! This module derives the constraint topology of diagonal Sudoku: the
//! units, i.e. the groups of nine cells which must contain every digit
//! exactly once, and the peer relation between cells. Since the geometry is
//! fixed, the topology is computed once on first use and then shared as
//! read-only state for the lifetime of the process.

use crate::{BLOCK_SIZE, SIZE, index};

use std::sync::OnceLock;

/// A group of nine cells, identified by their `(column, row)` coordinates,
/// which must contain every digit from the range `[1, 9]` exactly once.
/// Rows, columns, blocks, and the two diagonals are units.
pub type Unit = Vec<(usize, usize)>;

struct UnitTables {
    units: Vec<Unit>,
    containing: Vec<Vec<usize>>,
    peers: Vec<Vec<(usize, usize)>>
}

impl UnitTables {
    fn compute() -> UnitTables {
        let mut units: Vec<Unit> = Vec::new();

        for row in 0..SIZE {
            units.push((0..SIZE).map(|column| (column, row)).collect());
        }

        for column in 0..SIZE {
            units.push((0..SIZE).map(|row| (column, row)).collect());
        }

        for block_row in 0..BLOCK_SIZE {
            for block_column in 0..BLOCK_SIZE {
                let mut block = Vec::new();

                for inner_row in 0..BLOCK_SIZE {
                    for inner_column in 0..BLOCK_SIZE {
                        block.push((
                            block_column * BLOCK_SIZE + inner_column,
                            block_row * BLOCK_SIZE + inner_row
                        ));
                    }
                }

                units.push(block);
            }
        }

        units.push((0..SIZE).map(|i| (i, i)).collect());
        units.push((0..SIZE).map(|i| (SIZE - i - 1, i)).collect());

        let mut containing = vec![Vec::new(); SIZE * SIZE];

        for (unit_index, unit) in units.iter().enumerate() {
            for &(column, row) in unit {
                containing[index(column, row)].push(unit_index);
            }
        }

        let mut peers = Vec::with_capacity(SIZE * SIZE);

        for row in 0..SIZE {
            for column in 0..SIZE {
                let mut cell_peers: Vec<(usize, usize)> =
                    containing[index(column, row)].iter()
                        .flat_map(|&unit_index| units[unit_index].iter())
                        .copied()
                        .filter(|&cell| cell != (column, row))
                        .collect();
                cell_peers.sort_unstable();
                cell_peers.dedup();
                peers.push(cell_peers);
            }
        }

        UnitTables {
            units,
            containing,
            peers
        }
    }
}

fn tables() -> &'static UnitTables {
    static TABLES: OnceLock<UnitTables> = OnceLock::new();
    TABLES.get_or_init(UnitTables::compute)
}

/// Gets all units of the grid: the 9 rows, then the 9 columns, then the 9
/// blocks in row-major order, then the main diagonal (top-left to
/// bottom-right), then the anti diagonal (top-right to bottom-left), making
/// 29 units in total.
pub fn all_units() -> &'static [Unit] {
    &tables().units
}

/// Gets an iterator over the units which contain the given cell. Every cell
/// lies in its row, its column, and its block; a cell on a diagonal
/// additionally lies in that diagonal's unit, so between 3 and 5 units are
/// yielded.
///
/// # Arguments
///
/// * `column`: The column (x-coordinate) of the cell. Must be in the range
/// `[0, 9[`.
/// * `row`: The row (y-coordinate) of the cell. Must be in the range
/// `[0, 9[`.
pub fn units_of(column: usize, row: usize)
        -> impl Iterator<Item = &'static Unit> {
    let tables = tables();
    tables.containing[index(column, row)].iter()
        .map(move |&unit_index| &tables.units[unit_index])
}

/// Gets the peers of the given cell, i.e. all other cells which share at
/// least one unit with it, in lexicographic `(column, row)` order and
/// without duplicates. Cells not on a diagonal have 20 peers, cells on one
/// diagonal have 26, and the center cell, which lies on both diagonals, has
/// 32.
///
/// # Arguments
///
/// * `column`: The column (x-coordinate) of the cell. Must be in the range
/// `[0, 9[`.
/// * `row`: The row (y-coordinate) of the cell. Must be in the range
/// `[0, 9[`.
pub fn peers_of(column: usize, row: usize) -> &'static [(usize, usize)] {
    &tables().peers[index(column, row)]
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn unit_count_matches_topology() {
        assert_eq!(29, all_units().len());
    }

    #[test]
    fn every_unit_has_nine_distinct_cells() {
        for unit in all_units() {
            let mut sorted = unit.clone();
            sorted.sort_unstable();
            sorted.dedup();

            assert_eq!(9, unit.len());
            assert_eq!(9, sorted.len());
        }
    }

    #[test]
    fn off_diagonal_cells_lie_in_three_units() {
        assert_eq!(3, units_of(1, 0).count());
        assert_eq!(3, units_of(5, 4).count());
        assert_eq!(3, units_of(8, 4).count());
    }

    #[test]
    fn corner_cells_lie_on_one_diagonal() {
        assert_eq!(4, units_of(0, 0).count());
        assert_eq!(4, units_of(8, 0).count());
        assert_eq!(4, units_of(0, 8).count());
        assert_eq!(4, units_of(8, 8).count());
    }

    #[test]
    fn center_cell_lies_on_both_diagonals() {
        let main_diagonal: Unit = (0..9).map(|i| (i, i)).collect();
        let anti_diagonal: Unit = (0..9).map(|i| (8 - i, i)).collect();
        let units: Vec<&Unit> = units_of(4, 4).collect();

        assert_eq!(5, units.len());
        assert!(units.contains(&&main_diagonal));
        assert!(units.contains(&&anti_diagonal));
    }

    #[test]
    fn peer_counts_depend_on_diagonals() {
        assert_eq!(20, peers_of(1, 0).len());
        assert_eq!(20, peers_of(5, 4).len());
        assert_eq!(26, peers_of(0, 0).len());
        assert_eq!(26, peers_of(2, 2).len());
        assert_eq!(26, peers_of(6, 2).len());
        assert_eq!(32, peers_of(4, 4).len());
    }

    #[test]
    fn diagonals_connect_distant_cells() {
        assert!(peers_of(0, 0).contains(&(8, 8)));
        assert!(peers_of(8, 0).contains(&(0, 8)));
        assert!(peers_of(1, 0).contains(&(1, 8)));
        assert!(!peers_of(1, 0).contains(&(3, 5)));
    }

    #[test]
    fn peers_are_sorted_and_unique() {
        for row in 0..9 {
            for column in 0..9 {
                let peers = peers_of(column, row);

                assert!(peers.windows(2).all(|pair| pair[0] < pair[1]));
            }
        }
    }

    #[test]
    fn peer_relation_is_symmetric_and_irreflexive() {
        for row in 0..9 {
            for column in 0..9 {
                for &(peer_column, peer_row) in peers_of(column, row) {
                    assert_ne!((column, row), (peer_column, peer_row));
                    assert!(peers_of(peer_column, peer_row)
                        .contains(&(column, row)));
                }
            }
        }
    }
}
