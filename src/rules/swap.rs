use crate::*;

/// Whether either score is exactly double the other.
pub fn is_swap(score: Score, opponent: Score) -> bool {
    score == 2 * opponent || opponent == 2 * score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_swap() {
        assert!(is_swap(10, 20));
        assert!(is_swap(20, 10));
        assert!(is_swap(0, 0));
    }
    #[test]
    fn non_doubles_stay() {
        assert!(!is_swap(10, 21));
        assert!(!is_swap(15, 10));
        assert!(!is_swap(1, 0));
    }
}
