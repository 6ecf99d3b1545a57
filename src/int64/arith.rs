//! Carry-propagating arithmetic and ordering on the two halves.

use std::cmp::Ordering;

use super::Int64;

impl Int64 {
    /// Adds `other` to `self` in place, wrapping at 64 bits.
    ///
    /// The low halves are added first; if they overflow, the carry goes into the high
    /// half addition. Returns `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quadword::Int64;
    ///
    /// let mut value = Int64::new(0xFFFF_FFFF, 0);
    /// value.add_in_place(&Int64::ONE).add_in_place(&Int64::ONE);
    /// assert_eq!(value, Int64::new(1, 1));
    /// ```
    pub fn add_in_place(&mut self, other: &Int64) -> &mut Self {
        let (low, carry) = self.low.overflowing_add(other.low);
        self.low = low;
        self.high = self
            .high
            .wrapping_add(other.high)
            .wrapping_add(u32::from(carry));
        self
    }

    /// Subtracts `other` from `self` in place, wrapping at 64 bits.
    ///
    /// Computed as the addition of the two's complement of `other`: both halves are
    /// complemented, added, then one is added. Returns `self` for chaining.
    pub fn subtract_in_place(&mut self, other: &Int64) -> &mut Self {
        let complement = Int64::new(!other.low, !other.high);
        self.add_in_place(&complement).add_in_place(&Int64::ONE)
    }

    /// Returns `self + other`, leaving both operands unchanged.
    #[must_use]
    pub fn add(&self, other: &Int64) -> Int64 {
        let mut result = *self;
        result.add_in_place(other);
        result
    }

    /// Returns `self - other`, leaving both operands unchanged.
    #[must_use]
    pub fn subtract(&self, other: &Int64) -> Int64 {
        let mut result = *self;
        result.subtract_in_place(other);
        result
    }

    /// Returns `true` if both halves match.
    #[must_use]
    pub fn equals(&self, other: &Int64) -> bool {
        self == other
    }

    /// Orders both values as unsigned 64-bit integers.
    #[must_use]
    pub fn unsigned_cmp(&self, other: &Int64) -> Ordering {
        self.high
            .cmp(&other.high)
            .then_with(|| self.low.cmp(&other.low))
    }

    /// Orders both values as two's complement signed 64-bit integers.
    ///
    /// Only the high half carries the sign; the low half is always compared unsigned.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn signed_cmp(&self, other: &Int64) -> Ordering {
        (self.high as i32)
            .cmp(&(other.high as i32))
            .then_with(|| self.low.cmp(&other.low))
    }

    /// Unsigned `self < other`, see [`Int64::unsigned_cmp`].
    #[must_use]
    pub fn less_than(&self, other: &Int64) -> bool {
        self.unsigned_cmp(other) == Ordering::Less
    }

    /// Unsigned `self > other`, see [`Int64::unsigned_cmp`].
    #[must_use]
    pub fn greater_than(&self, other: &Int64) -> bool {
        self.unsigned_cmp(other) == Ordering::Greater
    }
}

impl std::ops::Add for Int64 {
    type Output = Int64;

    fn add(self, rhs: Int64) -> Int64 {
        Int64::add(&self, &rhs)
    }
}

impl std::ops::Sub for Int64 {
    type Output = Int64;

    fn sub(self, rhs: Int64) -> Int64 {
        Int64::subtract(&self, &rhs)
    }
}

impl std::ops::AddAssign for Int64 {
    fn add_assign(&mut self, rhs: Int64) {
        self.add_in_place(&rhs);
    }
}

impl std::ops::SubAssign for Int64 {
    fn sub_assign(&mut self, rhs: Int64) {
        self.subtract_in_place(&rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::boundary_values;

    #[test]
    fn add_carries_into_high() {
        let sum = Int64::new(0xFFFF_FFFF, 0).add(&Int64::new(1, 0));
        assert_eq!(sum, Int64::new(0, 1));

        let sum = Int64::new(0x8000_0000, 2).add(&Int64::new(0x8000_0001, 3));
        assert_eq!(sum, Int64::new(1, 6));
    }

    #[test]
    fn add_wraps_at_64_bits() {
        assert_eq!(Int64::MAX.add(&Int64::ONE), Int64::ZERO);
        assert_eq!(
            Int64::new(0, 0xFFFF_FFFF).add(&Int64::new(5, 1)),
            Int64::new(5, 0)
        );
    }

    #[test]
    fn subtract_borrows_from_high() {
        assert_eq!(
            Int64::new(0, 1).subtract(&Int64::ONE),
            Int64::new(0xFFFF_FFFF, 0)
        );
        assert_eq!(Int64::ZERO.subtract(&Int64::ONE), Int64::MAX);
    }

    #[test]
    fn subtract_self_is_zero() {
        for value in boundary_values() {
            let difference = value.subtract(&value);
            assert_eq!(difference.low(), 0);
            assert_eq!(difference.high(), 0);
        }
    }

    #[test]
    fn add_then_subtract_is_identity() {
        let values = boundary_values();

        for &a in &values {
            for &b in &values {
                assert!(a.add(&b).subtract(&b).equals(&a), "{a} + {b} - {b}");
                assert_eq!(a.add(&b).to_u64(), a.to_u64().wrapping_add(b.to_u64()));
                assert_eq!(
                    a.subtract(&b).to_u64(),
                    a.to_u64().wrapping_sub(b.to_u64())
                );
            }
        }
    }

    #[test]
    fn non_mutating_leaves_operands() {
        let a = Int64::new(10, 20);
        let b = Int64::new(1, 2);
        let _ = a.add(&b);
        let _ = a.subtract(&b);
        assert_eq!(a, Int64::new(10, 20));
        assert_eq!(b, Int64::new(1, 2));
    }

    #[test]
    fn in_place_chaining() {
        let mut value = Int64::new(100, 0);
        value
            .add_in_place(&Int64::new(50, 1))
            .subtract_in_place(&Int64::new(25, 0));
        assert_eq!(value, Int64::new(125, 1));
    }

    #[test]
    fn operator_traits() {
        let mut value = Int64::new(0xFFFF_FFFF, 0) + Int64::ONE;
        assert_eq!(value, Int64::new(0, 1));
        value -= Int64::ONE;
        assert_eq!(value, Int64::new(0xFFFF_FFFF, 0));
        value += Int64::new(1, 1);
        assert_eq!(value - Int64::new(0, 2), Int64::ZERO);
    }

    #[test]
    fn unsigned_ordering() {
        let minus_one = Int64::MAX;
        let one = Int64::ONE;
        assert_eq!(minus_one.unsigned_cmp(&one), Ordering::Greater);
        assert!(minus_one.greater_than(&one));
        assert!(one.less_than(&minus_one));

        assert!(Int64::new(0xFFFF_FFFF, 0).less_than(&Int64::new(0, 1)));
        assert!(Int64::new(2, 7).greater_than(&Int64::new(1, 7)));
        assert!(!one.less_than(&one));
        assert!(!one.greater_than(&one));
    }

    #[test]
    fn signed_ordering() {
        let minus_one = Int64::MAX;
        let one = Int64::ONE;
        assert_eq!(minus_one.signed_cmp(&one), Ordering::Less);
        assert_eq!(
            Int64::new(0, 0x8000_0000).signed_cmp(&Int64::new(0xFFFF_FFFF, 0x7FFF_FFFF)),
            Ordering::Less
        );
        assert_eq!(
            Int64::new(5, 0xFFFF_FFFF).signed_cmp(&Int64::new(4, 0xFFFF_FFFF)),
            Ordering::Greater
        );
        assert_eq!(one.signed_cmp(&one), Ordering::Equal);
    }

    #[test]
    fn orderings_agree_with_native_integers() {
        let values = boundary_values();

        for a in &values {
            for b in &values {
                assert_eq!(a.unsigned_cmp(b), a.to_u64().cmp(&b.to_u64()));
                assert_eq!(a.signed_cmp(b), a.to_i64().cmp(&b.to_i64()));
            }
        }
    }
}
