//! `DateRange`: a run of consecutive days.
//!
//! Iterates `[start, end)` one day at a time, forward or (via
//! [`Iterator::rev`]) backward.  An `end` on or before `start` yields
//! nothing.  The bounds are kept as serial numbers so that a range may end
//! on [`Date::MAX`] without constructing the day after it.

use crate::date::Date;

/// A half-open range of consecutive dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    front: i32,
    back: i32,
}

impl DateRange {
    /// Every day from `start` (inclusive) up to `end` (exclusive).
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            front: start.serial(),
            back: end.serial().max(start.serial()),
        }
    }

    /// Every day from `first` to `last`, both inclusive.
    pub fn inclusive(first: Date, last: Date) -> Self {
        Self {
            front: first.serial(),
            back: (last.serial() + 1).max(first.serial()),
        }
    }
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.front >= self.back {
            return None;
        }
        let d = Date::from_serial_unchecked(self.front);
        self.front += 1;
        Some(d)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.back - self.front).max(0) as usize;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for DateRange {
    fn next_back(&mut self) -> Option<Date> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(Date::from_serial_unchecked(self.back))
    }
}

impl ExactSizeIterator for DateRange {}

impl std::iter::FusedIterator for DateRange {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn forward_is_half_open() {
        let days: Vec<Date> = DateRange::new(date(2023, 2, 27), date(2023, 3, 2)).collect();
        assert_eq!(
            days,
            vec![date(2023, 2, 27), date(2023, 2, 28), date(2023, 3, 1)]
        );
    }

    #[test]
    fn backward_walks_from_the_last_day() {
        let days: Vec<Date> = DateRange::new(date(2023, 1, 1), date(2023, 1, 4))
            .rev()
            .collect();
        assert_eq!(days, vec![date(2023, 1, 3), date(2023, 1, 2), date(2023, 1, 1)]);
    }

    #[test]
    fn empty_when_end_not_after_start() {
        assert_eq!(DateRange::new(date(2023, 1, 5), date(2023, 1, 5)).count(), 0);
        assert_eq!(DateRange::new(date(2023, 1, 5), date(2023, 1, 1)).count(), 0);
        assert_eq!(DateRange::inclusive(date(2023, 1, 5), date(2023, 1, 4)).count(), 0);
    }

    #[test]
    fn inclusive_reaches_the_last_representable_day() {
        let days: Vec<Date> = DateRange::inclusive(date(9999, 12, 30), Date::MAX).collect();
        assert_eq!(days, vec![date(9999, 12, 30), Date::MAX]);
    }

    #[test]
    fn exact_len() {
        let r = DateRange::inclusive(date(2024, 2, 26), date(2024, 2, 29));
        assert_eq!(r.len(), 4);
        assert_eq!(r.last(), Some(date(2024, 2, 29)));
    }

    #[test]
    fn front_and_back_meet() {
        let mut r = DateRange::new(date(2023, 1, 1), date(2023, 1, 3));
        assert_eq!(r.next(), Some(date(2023, 1, 1)));
        assert_eq!(r.next_back(), Some(date(2023, 1, 2)));
        assert_eq!(r.next(), None);
        assert_eq!(r.next_back(), None);
    }
}
