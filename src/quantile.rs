/// Linear-interpolation quantile over already sorted values.
///
/// Interpolates between the two order statistics bracketing the fractional
/// rank `q * (n - 1)`. Returns `None` for an empty slice.
pub fn quantile_sorted(sorted: &[u64], q: f64) -> Option<f64> {
    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(f), Some(l)) => (*f as f64, *l as f64),
        _ => return None,
    };
    if q <= 0.0 {
        return Some(first);
    }
    if q >= 1.0 {
        return Some(last);
    }

    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let lo_v = sorted[lo] as f64;
    if lo == hi {
        return Some(lo_v);
    }

    let w = h - (lo as f64);
    Some(lo_v + (sorted[hi] as f64 - lo_v) * w)
}

pub fn quantile(values: &[u64], q: f64) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    quantile_sorted(&sorted, q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(quantile(&[42], 0.0), Some(42.0));
        assert_eq!(quantile(&[42], 0.37), Some(42.0));
        assert_eq!(quantile(&[42], 1.0), Some(42.0));
    }

    #[test]
    fn test_bounds_are_min_and_max() {
        let values = [1100, 50, 700, 3];
        assert_eq!(quantile(&values, 0.0), Some(3.0));
        assert_eq!(quantile(&values, 1.0), Some(1100.0));
    }

    #[test]
    fn test_interpolates_between_order_statistics() {
        // sorted: 10, 20, 30, 40 -> rank 0.5 * 3 = 1.5
        assert_eq!(quantile(&[40, 10, 30, 20], 0.5), Some(25.0));
        // rank 0.9 * 3 = 2.7 -> 30 + 0.7 * 10
        let v = quantile(&[40, 10, 30, 20], 0.9).unwrap();
        assert!((v - 37.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_rank_hits_value() {
        // sorted: 1, 2, 3, 4, 5 -> rank 0.25 * 4 = 1
        assert_eq!(quantile(&[5, 4, 3, 2, 1], 0.25), Some(2.0));
        assert_eq!(quantile(&[50, 1100], 1.0), Some(1100.0));
    }
}
