//! Small sequence helpers with forgiving edge cases.
//!
//! Sizes of zero never panic (unlike `slice::windows` / `slice::chunks`);
//! they produce nothing.

use itertools::{EitherOrBoth, Itertools};

/// Rolling windows of `size` items. Empty when `size` is zero or larger than
/// the slice.
pub fn window<T>(items: &[T], size: usize) -> Vec<&[T]> {
    if size == 0 {
        return Vec::new();
    }
    items.windows(size).collect()
}

/// Consecutive chunks of `size` items; the last one may be shorter.
pub fn chunk<T>(items: &[T], size: usize) -> Vec<&[T]> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).collect()
}

/// Split `items` into groups at every element matching `is_separator`,
/// which sees each item's position and value. Separators and empty groups
/// are dropped.
pub fn split_on<T, F>(items: &[T], mut is_separator: F) -> Vec<Vec<T>>
where
    T: Clone,
    F: FnMut(usize, &T) -> bool,
{
    let mut groups: Vec<Vec<T>> = vec![Vec::new()];
    for (i, item) in items.iter().enumerate() {
        if is_separator(i, item) {
            groups.push(Vec::new());
        } else if let Some(current) = groups.last_mut() {
            current.push(item.clone());
        }
    }
    groups.retain(|g| !g.is_empty());
    groups
}

/// Pair up two sequences, padding the shorter one with `None`.
pub fn zip_longest<A, B>(
    a: impl IntoIterator<Item = A>,
    b: impl IntoIterator<Item = B>,
) -> Vec<(Option<A>, Option<B>)> {
    a.into_iter()
        .zip_longest(b)
        .map(|pair| match pair {
            EitherOrBoth::Both(l, r) => (Some(l), Some(r)),
            EitherOrBoth::Left(l) => (Some(l), None),
            EitherOrBoth::Right(r) => (None, Some(r)),
        })
        .collect()
}

/// The final `n` items (the whole slice when it is shorter)
pub fn last_n<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// Ascending in-place sort for numbers; NaNs compare equal to everything.
pub fn sort_numbers<T: PartialOrd>(values: &mut [T]) {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_pairs() {
        let v = [1, 2, 3, 4];
        assert_eq!(window(&v, 2), vec![&[1, 2][..], &[2, 3][..], &[3, 4][..]]);
        assert!(window(&v, 0).is_empty());
        assert!(window(&v, 5).is_empty());
        assert_eq!(window(&v, 4).len(), 1);
    }

    #[test]
    fn chunk_keeps_short_tail() {
        let v = [1, 2, 3, 4, 5];
        assert_eq!(chunk(&v, 2), vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
        assert!(chunk(&v, 0).is_empty());
        assert!(chunk::<i32>(&[], 3).is_empty());
    }

    #[test]
    fn split_on_drops_separators_and_empty_groups() {
        let v = [0, 1, 2, 0, 0, 3, 0];
        assert_eq!(split_on(&v, |_, x| *x == 0), vec![vec![1, 2], vec![3]]);
        assert!(split_on(&[0, 0], |_, x| *x == 0).is_empty());
    }

    #[test]
    fn split_on_can_split_by_position() {
        let v = ['a', 'b', 'c', 'd', 'e'];
        assert_eq!(split_on(&v, |i, _| i % 2 == 1), vec![vec!['a'], vec!['c'], vec!['e']]);
    }

    #[test]
    fn zip_longest_pads_both_sides() {
        let zipped = zip_longest(vec![1, 2, 3], vec!['a']);
        assert_eq!(zipped, vec![(Some(1), Some('a')), (Some(2), None), (Some(3), None)]);

        let zipped = zip_longest(Vec::<i32>::new(), vec!['b']);
        assert_eq!(zipped, vec![(None, Some('b'))]);
    }

    #[test]
    fn last_n_clamps() {
        let v = [1, 2, 3];
        assert_eq!(last_n(&v, 2), &[2, 3]);
        assert_eq!(last_n(&v, 10), &[1, 2, 3]);
        assert!(last_n(&v, 0).is_empty());
    }

    #[test]
    fn sort_numbers_ascending() {
        let mut v = vec![10, 2, 33, -4];
        sort_numbers(&mut v);
        assert_eq!(v, vec![-4, 2, 10, 33]);

        let mut f = vec![2.5, -1.0, 0.0];
        sort_numbers(&mut f);
        assert_eq!(f, vec![-1.0, 0.0, 2.5]);
    }
}
