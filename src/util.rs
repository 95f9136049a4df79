pub mod codec;
pub mod secret;

/// Takes a `bool` and converts it `Option<()>` to be used as early return point with `?`.
#[inline(always)]
#[must_use]
pub fn check(x: bool) -> Option<()> {
    if x {
        Some(())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_01() {
        assert_eq!(check(true), Some(()));
        assert_eq!(check(false), None);
    }
}
