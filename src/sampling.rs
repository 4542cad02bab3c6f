use rand::seq::index;
use rand::Rng;

/// Draws `max` items uniformly without replacement when there are more than `max`,
/// otherwise returns all of them in their original order.
pub fn sample_edges<T: Clone, R: Rng + ?Sized>(items: &[T], max: usize, rng: &mut R) -> Vec<T> {
    if items.len() <= max {
        return items.to_vec();
    }
    index::sample(rng, items.len(), max)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}
