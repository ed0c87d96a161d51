//! Elite selection.
//!
//! The generational loop is truncation-based: the population is ranked by
//! value and the top `k` candidates become the parents of the next
//! generation. Ranking uses a stable sort, so candidates with equal value
//! keep their population order and runs are reproducible under a fixed seed.

use crate::eval::Scored;

/// Returns population indices ordered by descending value.
///
/// Ties keep their original relative order.
pub fn rank_descending(population: &[Scored]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| population[b].value().cmp(&population[a].value()));
    order
}

/// Returns the indices of the `k` best candidates, best first.
///
/// # Panics
/// Panics if `population` is empty.
pub fn select_elites(population: &[Scored], k: usize) -> Vec<usize> {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let mut order = rank_descending(population);
    order.truncate(k);
    order
}

/// Index of the best candidate; the earliest one wins ties.
///
/// # Panics
/// Panics if `population` is empty.
pub fn best_index(population: &[Scored]) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let mut best = 0;
    for (i, member) in population.iter().enumerate().skip(1) {
        if member.value() > population[best].value() {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;
    use crate::eval::Evaluation;

    fn make_population(values: &[u64]) -> Vec<Scored> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| Scored {
                // distinct candidates so the tests can tell them apart
                candidate: Candidate::from_bits((0..8).map(|b| i & (1 << b) != 0).collect()),
                evaluation: Evaluation {
                    value,
                    size: 0,
                    feasible: true,
                },
            })
            .collect()
    }

    #[test]
    fn test_rank_descending() {
        let pop = make_population(&[10, 50, 20, 40]);
        assert_eq!(rank_descending(&pop), vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_ties_are_stable() {
        let pop = make_population(&[7, 9, 7, 9, 7]);
        assert_eq!(rank_descending(&pop), vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_select_elites_truncates() {
        let pop = make_population(&[3, 1, 4, 1, 5, 9, 2, 6]);
        assert_eq!(select_elites(&pop, 3), vec![5, 7, 4]);
    }

    #[test]
    fn test_select_more_than_population() {
        let pop = make_population(&[1, 2]);
        assert_eq!(select_elites(&pop, 5), vec![1, 0]);
    }

    #[test]
    fn test_best_index_first_on_ties() {
        let pop = make_population(&[0, 8, 3, 8]);
        assert_eq!(best_index(&pop), 1);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        select_elites(&[], 1);
    }
}
