//! Recursive and accumulator-style arithmetic functions.

pub fn factorial_naive(n: u64) -> u128 {
    if n <= 1 {
        1
    } else {
        n as u128 * factorial_naive(n - 1)
    }
}

pub fn factorial_tail(n: u64) -> u128 {
    fn go(n: u64, acc: u128) -> u128 {
        if n <= 1 { acc } else { go(n - 1, acc * n as u128) }
    }
    go(n, 1)
}

pub fn fibonacci_naive(n: u64) -> u128 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci_naive(n - 1) + fibonacci_naive(n - 2),
    }
}

/// Accumulator loop; rustc does not guarantee tail calls, so this is written
/// iteratively.
pub fn fibonacci_tail(n: u64) -> u128 {
    if n == 0 {
        return 0;
    }
    let (mut a, mut b) = (0u128, 1u128);
    for _ in 1..n {
        let next = a + b;
        a = b;
        b = next;
    }
    b
}

pub fn sum_fold(n: u64) -> u128 {
    (1..=n).fold(0u128, |acc, x| acc + x as u128)
}

pub fn sum_tail(n: u64) -> u128 {
    let (mut i, mut acc) = (n, 0u128);
    while i > 0 {
        acc += i as u128;
        i -= 1;
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_small_values() {
        assert_eq!(factorial_naive(0), 1);
        assert_eq!(factorial_tail(0), 1);
        assert_eq!(factorial_naive(5), 120);
        assert_eq!(factorial_tail(10), 3_628_800);
    }

    #[test]
    fn factorial_upper_bound_fits() {
        assert_eq!(factorial_tail(34), 295_232_799_039_604_140_847_618_609_643_520_000_000);
    }

    #[test]
    fn fibonacci_values() {
        assert_eq!(fibonacci_naive(0), 0);
        assert_eq!(fibonacci_naive(1), 1);
        assert_eq!(fibonacci_naive(10), 55);
        assert_eq!(fibonacci_tail(10), 55);
        assert_eq!(fibonacci_tail(90), 2_880_067_194_370_816_120);
    }

    #[test]
    fn fibonacci_tail_reaches_upper_bound() {
        assert!(fibonacci_tail(186) > fibonacci_tail(185));
    }

    #[test]
    fn sums_match_closed_form() {
        assert_eq!(sum_fold(0), 0);
        assert_eq!(sum_tail(0), 0);
        assert_eq!(sum_fold(100), 5050);
        assert_eq!(sum_tail(100_000), 5_000_050_000);
    }
}
