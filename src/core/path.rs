//! Shape checks on selection paths

use super::coord::Coordinate;

/// Check that every step in `path` heads the same way
///
/// The direction of a step is the sign of its row and column difference, so
/// the path must follow one of the eight straight lines. Step size is not
/// checked: `(0,0) (0,2) (0,4)` counts as linear.
///
/// # Examples
/// ```
/// use word_search::core::Coordinate;
/// use word_search::core::path::is_linear;
///
/// let row = [Coordinate::new(0, 0), Coordinate::new(0, 1), Coordinate::new(0, 2)];
/// assert!(is_linear(&row));
///
/// let bent = [Coordinate::new(0, 0), Coordinate::new(1, 1), Coordinate::new(1, 2)];
/// assert!(!is_linear(&bent));
/// ```
#[must_use]
pub fn is_linear(path: &[Coordinate]) -> bool {
    let [first, second, ..] = path else {
        return true;
    };
    let sign = first.sign_towards(*second);
    path.windows(2).all(|pair| pair[0].sign_towards(pair[1]) == sign)
}

/// Check that each cell in `path` touches the one before it
#[must_use]
pub fn is_contiguous(path: &[Coordinate]) -> bool {
    path.windows(2).all(|pair| pair[0].is_adjacent(pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(cells: &[(usize, usize)]) -> Vec<Coordinate> {
        cells.iter().map(|&(r, c)| Coordinate::new(r, c)).collect()
    }

    #[test]
    fn short_paths_are_linear() {
        assert!(is_linear(&[]));
        assert!(is_linear(&path(&[(3, 3)])));
        assert!(is_linear(&path(&[(3, 3), (9, 0)])));
    }

    #[test]
    fn straight_lines_are_linear() {
        assert!(is_linear(&path(&[(0, 0), (0, 1), (0, 2)])));
        assert!(is_linear(&path(&[(5, 5), (4, 4), (3, 3), (2, 2)])));
        assert!(is_linear(&path(&[(9, 0), (8, 1), (7, 2)])));
        assert!(is_linear(&path(&[(2, 7), (3, 7), (4, 7)])));
    }

    #[test]
    fn bends_are_not_linear() {
        assert!(!is_linear(&path(&[(0, 0), (1, 1), (1, 2)])));
        assert!(!is_linear(&path(&[(0, 0), (0, 1), (1, 1)])));
        assert!(!is_linear(&path(&[(4, 4), (4, 5), (4, 4)])));
    }

    #[test]
    fn gaps_still_count_as_linear() {
        assert!(is_linear(&path(&[(0, 0), (0, 2), (0, 4)])));
        assert!(!is_contiguous(&path(&[(0, 0), (0, 2), (0, 4)])));
    }

    #[test]
    fn contiguous_paths() {
        assert!(is_contiguous(&[]));
        assert!(is_contiguous(&path(&[(0, 0), (1, 1), (1, 2)])));
        assert!(!is_contiguous(&path(&[(0, 0), (2, 0)])));
    }
}
