use num::{BigUint, One, ToPrimitive, Zero};

/// Some(root) when root raised to the power `n` is exactly `x`, otherwise None
///
/// `n` must not be zero, callers report that as a Problem before reaching here.
pub(crate) fn exact_root(x: &BigUint, n: u32) -> Option<BigUint> {
    debug_assert!(n != 0);
    if n == 1 || x.is_zero() || x.is_one() {
        return Some(x.clone());
    }
    let root = x.nth_root(n);
    if root.pow(n) == *x {
        Some(root)
    } else {
        None
    }
}

fn is_small_prime(k: u64) -> bool {
    if k < 2 {
        return false;
    }
    let mut d = 2;
    while d <= k / d {
        if k % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

// Primes below this are divided out before any root is taken
const TRIAL_LIMIT: u32 = 1024;
// Every prime factor left after trial division is at least 2^TRIAL_BITS
const TRIAL_BITS: u64 = 10;
// Moduli tried per exponent before giving up on finding a non-residue
const RESIDUE_TESTS: usize = 8;

fn mod_pow(base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1u128;
    let mut base = u128::from(base % m);
    let m = u128::from(m);
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u64
}

/// Whether `x` might be a perfect `k`th power, `k` prime
///
/// For each prime m = 1 (mod k) a `k`th power x has x^((m-1)/k) = 1 or 0
/// modulo m, so a false answer is certain.
fn may_be_power(x: &BigUint, k: u64) -> bool {
    let mut tested = 0;
    let mut m = 1u64;
    while tested < RESIDUE_TESTS {
        m = match m.checked_add(k) {
            Some(next) => next,
            None => return true,
        };
        if !is_small_prime(m) {
            continue;
        }
        tested += 1;
        let r = (x % m).to_u64().unwrap_or(0);
        if r != 0 && mod_pow(r, (m - 1) / k, m) != 1 {
            return false;
        }
    }
    true
}

// Divides every factor p out of rest, returning how many there were
fn divide_out(rest: &mut BigUint, p: u32) -> u64 {
    let mut count = 0u64;
    // Divide by the largest power of p fitting a u32 first
    let mut chunk = p;
    let mut chunk_count = 1u64;
    while let Some(bigger) = chunk.checked_mul(p) {
        chunk = bigger;
        chunk_count += 1;
    }
    while (&*rest % chunk).is_zero() {
        *rest /= chunk;
        count += chunk_count;
    }
    while (&*rest % p).is_zero() {
        *rest /= p;
        count += 1;
    }
    count
}

/// Whether `x` is some integer raised to a power of at least two
///
/// Zero and one count as perfect powers, as they are for GMP.
pub(crate) fn is_perfect_power(x: &BigUint) -> bool {
    if x.is_zero() || x.is_one() {
        return true;
    }

    // Any exponent must divide the multiplicity of every small prime factor
    let mut rest = x.clone();
    let mut multiplicity = 0u64;
    for p in (2..TRIAL_LIMIT).filter(|&p| is_small_prime(u64::from(p))) {
        if !(&rest % p).is_zero() {
            continue;
        }
        let count = divide_out(&mut rest, p);
        multiplicity = num::Integer::gcd(&multiplicity, &count);
        if multiplicity == 1 {
            return false;
        }
    }
    if rest.is_one() {
        return true;
    }

    // rest >= (2^TRIAL_BITS)^k and rest < 2^bits
    let largest = (rest.bits() - 1) / TRIAL_BITS;
    // A composite exponent k = a * b means x is also a perfect a-th power
    for k in (2..=largest).filter(|&k| is_small_prime(k)) {
        if multiplicity != 0 && multiplicity % k != 0 {
            continue;
        }
        if !may_be_power(&rest, k) {
            continue;
        }
        let Ok(degree) = u32::try_from(k) else {
            break;
        };
        if exact_root(&rest, degree).is_some() {
            return true;
        }
    }
    false
}
