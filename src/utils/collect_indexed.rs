/// Maps every index in `0..len` through `f`, collecting the results in index order.
///
/// With the `parallel` feature enabled and `parallel == true`, the indexes are fanned out
/// over the rayon global pool. Output order is identical either way.
pub fn collect_indexed<T, F>(len: usize, parallel: bool, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;

            return (0..len).into_par_iter().map(&f).collect();
        }
    }

    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    (0..len).map(&f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_index_order() {
        let sequential = collect_indexed(1000, false, |index| index * 3);
        let parallel = collect_indexed(1000, true, |index| index * 3);

        assert_eq!(sequential, parallel);
        assert_eq!(sequential[999], 2997);
    }
}
