//! Pair and triple enumeration over a finite set of elements.
//!
//! All generators walk the slice in index order, so the output is
//! deterministic, but callers treat it as an unordered collection.

/// Every unordered pair `{x, y}` with `x != y`, each exactly once.
///
/// Fewer than two items yields nothing.
pub fn unordered_pairs<K>(items: &[K]) -> impl Iterator<Item = (&K, &K)> + '_ {
    items
        .iter()
        .enumerate()
        .flat_map(move |(i, x)| items[i + 1..].iter().map(move |y| (x, y)))
}

/// The full product `items x items`, diagonal included.
pub fn ordered_pairs<K>(items: &[K]) -> impl Iterator<Item = (&K, &K)> + '_ {
    items
        .iter()
        .flat_map(move |x| items.iter().map(move |y| (x, y)))
}

/// The full product `items x items x items`.
pub fn ordered_triples<K>(items: &[K]) -> impl Iterator<Item = (&K, &K, &K)> + '_ {
    ordered_pairs(items).flat_map(move |(x, y)| items.iter().map(move |z| (x, y, z)))
}

/// Build a relation from a condition over ordered pairs of `domain`.
///
/// With `inverse` set, every accepted `(x, y)` is emitted as `(y, x)`.
pub fn generate_relations<'a, K, F>(
    domain: &'a [K],
    condition: F,
    inverse: bool,
) -> impl Iterator<Item = (K, K)> + 'a
where
    K: Clone,
    F: Fn(&K, &K) -> bool + 'a,
{
    ordered_pairs(domain)
        .filter(move |(x, y)| condition(x, y))
        .map(move |(x, y)| {
            if inverse {
                (y.clone(), x.clone())
            } else {
                (x.clone(), y.clone())
            }
        })
}
