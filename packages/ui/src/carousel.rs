/// Step `index` by `step` positions around a ring of `len` items.
pub fn cycle(index: usize, len: usize, step: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (index as isize % len + step).rem_euclid(len) as usize
}

#[cfg(test)]
mod tests {
    use super::cycle;

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(cycle(3, 4, 1), 0);
        assert_eq!(cycle(0, 4, -1), 3);
        assert_eq!(cycle(1, 4, 6), 3);
        assert_eq!(cycle(9, 4, 0), 1);
        assert_eq!(cycle(5, 0, 1), 0);
    }
}
