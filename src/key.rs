use std::fmt;

use num_traits::Num;

/// The keys a [`Tree`][crate::Tree] can hold: plain numbers that can be compared with each other.
///
/// This is implemented for every type that is numeric, `Copy` and `PartialOrd`, which covers all
/// of the primitive integers and floats.
pub trait Key: Num + PartialOrd + Copy + fmt::Debug {
    /// Whether this key has a place in an ordering at all. Every integer does. A float does unless
    /// it is `NaN`, which compares as neither less than, equal to, nor greater than anything
    /// (including itself).
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Key;
    ///
    /// assert!(3.is_orderable());
    /// assert!(2.5_f64.is_orderable());
    /// assert!(!f64::NAN.is_orderable());
    /// ```
    fn is_orderable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }
}

impl<T> Key for T where T: Num + PartialOrd + Copy + fmt::Debug {}
