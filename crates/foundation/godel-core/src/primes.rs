//! Position Primes
//!
//! The i-th character of a statement is carried by the i-th prime.

/// Trial-division primality test
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut d = 3u64;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Unbounded, restartable prime sequence starting at 2
#[derive(Debug, Clone)]
pub struct Primes {
    candidate: u64,
}

impl Primes {
    pub fn new() -> Self {
        Self { candidate: 2 }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let n = self.candidate;
            self.candidate = self.candidate.checked_add(1)?;
            if is_prime(n) {
                return Some(n);
            }
        }
    }
}

/// First `n` primes in increasing order
pub fn first_n_primes(n: usize) -> Vec<u64> {
    Primes::new().take(n).collect()
}
