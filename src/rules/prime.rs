use crate::*;

/// Trial division; plenty for scores below 100.
pub fn is_prime(n: Score) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

/// Escalates a prime score to the next prime strictly above it.
///
/// The search stops below [`SCORE_CEILING`]. Non-primes, and primes with no
/// larger prime below the ceiling (97), come back unchanged.
pub fn boost(value: Score) -> Score {
    if is_prime(value) {
        (value + 1..SCORE_CEILING)
            .find(|n| is_prime(*n))
            .unwrap_or(value)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes_below_thirty() {
        let primes = (0..30).filter(|n| is_prime(*n)).collect::<Vec<_>>();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }
    #[test]
    fn boosts_primes() {
        assert_eq!(boost(2), 3);
        assert_eq!(boost(3), 5);
        assert_eq!(boost(7), 11);
        assert_eq!(boost(23), 29);
        assert_eq!(boost(89), 97);
    }
    #[test]
    fn ignores_composites() {
        assert_eq!(boost(0), 0);
        assert_eq!(boost(1), 1);
        assert_eq!(boost(4), 4);
        assert_eq!(boost(25), 25);
    }
    #[test]
    fn exhausted_search_is_unboosted() {
        assert_eq!(boost(97), 97);
    }
    #[test]
    fn boosts_stay_prime_and_in_range() {
        for n in (0..SCORE_CEILING).filter(|n| is_prime(*n)) {
            let boosted = boost(n);
            assert!(is_prime(boosted));
            assert!(boosted < SCORE_CEILING);
            assert!(boosted > n || n == 97);
        }
    }
}
