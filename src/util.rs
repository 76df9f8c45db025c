//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used for storing
//! the candidate digits of a cell.

use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::hash::Hash;
use std::ops::{
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    Sub,
    SubAssign
};

const ALL_BITS: u16 = 0b11_1111_1110;

/// A set of Sudoku digits, that is, numbers from the range `[1, 9]`, stored
/// as a bit mask. This is used to track which digits are still possible for
/// a cell. It is cheap to copy and offers the usual set operations, where
/// mutations indicate whether they changed the set.
///
/// Sets can also be obtained by intersecting (`&`), uniting (`|`), and
/// subtracting (`-`) other sets, each also available as an assignment
/// operator.
///
/// # Example
///
/// ```
/// use sudoku_diagonals::digits;
/// use sudoku_diagonals::util::DigitSet;
///
/// let mut set = DigitSet::empty();
///
/// set.insert(3);
/// set.insert(7);
///
/// assert!(set.contains(3));
/// assert!(!set.contains(4));
/// assert_eq!(digits!(3, 7), set);
/// assert_eq!(vec![3, 7], set.iter().collect::<Vec<_>>());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitSet {
    bits: u16
}

fn mask(digit: usize) -> u16 {
    debug_assert!(digit >= 1 && digit <= 9,
        "digit {} outside the range [1, 9]", digit);
    1 << digit
}

impl DigitSet {

    /// Creates a new digit set that contains no digits.
    pub fn empty() -> DigitSet {
        DigitSet {
            bits: 0
        }
    }

    /// Creates a new digit set that contains all digits from the range
    /// `[1, 9]`.
    pub fn all() -> DigitSet {
        DigitSet {
            bits: ALL_BITS
        }
    }

    /// Creates a new digit set that contains exactly one digit.
    ///
    /// # Arguments
    ///
    /// * `digit`: The only element of the created set. Must be in the range
    /// `[1, 9]`.
    pub fn singleton(digit: usize) -> DigitSet {
        DigitSet {
            bits: mask(digit)
        }
    }

    /// Indicates whether this set contains the given digit.
    ///
    /// # Arguments
    ///
    /// * `digit`: The digit to check. Must be in the range `[1, 9]`.
    pub fn contains(&self, digit: usize) -> bool {
        self.bits & mask(digit) != 0
    }

    /// Inserts the given digit into this set, such that
    /// [DigitSet::contains] returns `true` for it afterwards.
    ///
    /// # Arguments
    ///
    /// * `digit`: The digit to insert. Must be in the range `[1, 9]`.
    ///
    /// Returns true, if and only if this set changed as a result of the
    /// operation.
    pub fn insert(&mut self, digit: usize) -> bool {
        let mask = mask(digit);
        let changed = self.bits & mask == 0;
        self.bits |= mask;
        changed
    }

    /// Removes the given digit from this set, such that
    /// [DigitSet::contains] returns `false` for it afterwards.
    ///
    /// # Arguments
    ///
    /// * `digit`: The digit to remove. Must be in the range `[1, 9]`.
    ///
    /// Returns true, if and only if this set changed as a result of the
    /// operation.
    pub fn remove(&mut self, digit: usize) -> bool {
        let mask = mask(digit);
        let changed = self.bits & mask != 0;
        self.bits &= !mask;
        changed
    }

    /// Gets the number of digits in this set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Indicates whether this set is empty.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// If this set contains exactly one digit, that digit is returned.
    /// Otherwise, `None` is returned.
    pub fn single(&self) -> Option<usize> {
        if self.len() == 1 {
            Some(self.bits.trailing_zeros() as usize)
        }
        else {
            None
        }
    }

    /// Returns an iterator over the digits in this set in ascending order.
    pub fn iter(&self) -> DigitSetIter {
        DigitSetIter {
            bits: self.bits
        }
    }
}

impl Display for DigitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{}", digit)?;
        }

        Ok(())
    }
}

/// An iterator over the digits contained in a [DigitSet], in ascending
/// order.
pub struct DigitSetIter {
    bits: u16
}

impl Iterator for DigitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            None
        }
        else {
            let digit = self.bits.trailing_zeros() as usize;
            self.bits &= self.bits - 1;
            Some(digit)
        }
    }
}

impl IntoIterator for DigitSet {
    type Item = usize;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> DigitSetIter {
        self.iter()
    }
}

impl BitAnd for DigitSet {
    type Output = DigitSet;

    fn bitand(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            bits: self.bits & rhs.bits
        }
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: DigitSet) {
        self.bits &= rhs.bits;
    }
}

impl BitOr for DigitSet {
    type Output = DigitSet;

    fn bitor(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            bits: self.bits | rhs.bits
        }
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: DigitSet) {
        self.bits |= rhs.bits;
    }
}

impl Sub for DigitSet {
    type Output = DigitSet;

    fn sub(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            bits: self.bits & !rhs.bits
        }
    }
}

impl SubAssign for DigitSet {
    fn sub_assign(&mut self, rhs: DigitSet) {
        self.bits &= !rhs.bits;
    }
}

/// Syntactic sugar for creating a [DigitSet](crate::util::DigitSet) that
/// contains the listed digits.
///
/// # Example
///
/// ```
/// use sudoku_diagonals::digits;
///
/// let set = digits!(2, 5, 9);
///
/// assert!(set.contains(5));
/// assert!(!set.contains(4));
/// assert_eq!(3, set.len());
/// ```
#[macro_export]
macro_rules! digits {
    ($($digit:expr),+) => {
        {
            let mut set = $crate::util::DigitSet::empty();
            $(set.insert($digit);)+
            set
        }
    };
}

pub(crate) fn contains_duplicate<I>(mut iter: I) -> bool
where
    I: Iterator,
    I::Item: Hash + Eq
{
    let mut set = HashSet::new();
    iter.any(|e| !set.insert(e))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn empty_set_contains_no_digit() {
        let set = DigitSet::empty();

        for digit in 1..=9 {
            assert!(!set.contains(digit));
        }

        assert!(set.is_empty());
        assert_eq!(0, set.len());
    }

    #[test]
    fn full_set_contains_every_digit() {
        let set = DigitSet::all();

        for digit in 1..=9 {
            assert!(set.contains(digit));
        }

        assert!(!set.is_empty());
        assert_eq!(9, set.len());
    }

    #[test]
    fn singleton_contains_only_its_digit() {
        let set = DigitSet::singleton(4);

        assert!(set.contains(4));
        assert!(!set.contains(3));
        assert!(!set.contains(5));
        assert_eq!(1, set.len());
    }

    #[test]
    fn insert_reports_change() {
        let mut set = DigitSet::empty();

        assert!(set.insert(4));
        assert!(!set.insert(4));
        assert!(set.contains(4));
        assert_eq!(1, set.len());
    }

    #[test]
    fn remove_reports_change() {
        let mut set = DigitSet::all();

        assert!(set.remove(4));
        assert!(!set.remove(4));
        assert!(!set.contains(4));
        assert_eq!(8, set.len());
    }

    #[test]
    fn single_identifies_solved_sets() {
        assert_eq!(None, DigitSet::empty().single());
        assert_eq!(None, DigitSet::all().single());
        assert_eq!(None, digits!(2, 3).single());
        assert_eq!(Some(7), DigitSet::singleton(7).single());
    }

    #[test]
    fn iteration_is_ascending() {
        let set = digits!(5, 2, 9, 1);
        let collected = set.iter().collect::<Vec<_>>();

        assert_eq!(vec![1, 2, 5, 9], collected);
    }

    #[test]
    fn intersection_keeps_common_digits() {
        let lhs = digits!(1, 2, 3);
        let rhs = digits!(2, 3, 4);

        assert_eq!(digits!(2, 3), lhs & rhs);
    }

    #[test]
    fn union_merges_digits() {
        let lhs = digits!(1, 2);
        let rhs = digits!(2, 9);

        assert_eq!(digits!(1, 2, 9), lhs | rhs);
    }

    #[test]
    fn difference_strips_digits() {
        let lhs = digits!(1, 2, 3);
        let rhs = digits!(2, 7);

        assert_eq!(digits!(1, 3), lhs - rhs);
    }

    #[test]
    fn assignment_operators_match_binary_operators() {
        let lhs = digits!(1, 4, 6);
        let rhs = digits!(4, 5, 6, 7);

        let mut intersection = lhs;
        intersection &= rhs;
        let mut union = lhs;
        union |= rhs;
        let mut difference = lhs;
        difference -= rhs;

        assert_eq!(lhs & rhs, intersection);
        assert_eq!(lhs | rhs, union);
        assert_eq!(lhs - rhs, difference);
    }

    #[test]
    fn display_concatenates_digits() {
        assert_eq!("", DigitSet::empty().to_string());
        assert_eq!("259", digits!(9, 5, 2).to_string());
        assert_eq!("123456789", DigitSet::all().to_string());
    }

    #[test]
    fn detects_duplicates() {
        assert!(!contains_duplicate([1, 2, 3].iter()));
        assert!(contains_duplicate([1, 2, 1].iter()));
        assert!(!contains_duplicate(Vec::<usize>::new().into_iter()));
    }
}
