/// Compute the floor of the square root of `n` using Newton's method.
pub fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    // start above the root, so that the iteration decreases monotonically
    let bits = 128 - n.leading_zeros();
    let mut x = 1u128 << ((bits + 1) / 2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

#[cfg(test)]
mod test {
    use super::isqrt;

    #[test]
    fn integer_square_root() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(24), 4);
        assert_eq!(isqrt(25), 5);
        assert_eq!(isqrt(26), 5);
        assert_eq!(isqrt(u64::MAX as u128), u32::MAX as u128);
        assert_eq!(isqrt(u128::MAX), u64::MAX as u128);
    }
}
