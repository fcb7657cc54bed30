use ndarray::Array2;

use super::*;

/// Deals the pair multiset onto the table with a uniform Fisher-Yates
/// shuffle; a given seed always produces the same deck.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShuffledDeckGenerator {
    seed: u64,
}

impl ShuffledDeckGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for ShuffledDeckGenerator {
    fn generate(self, config: GameConfig) -> DeckLayout {
        use rand::prelude::*;

        let total_cells = config.total_cells() as usize;

        let mut ids: Vec<u8> = Vec::with_capacity(total_cells);
        for id in 0..config.pairs {
            ids.push(id);
            ids.push(id);
        }
        let covered_exactly = ids.len() == total_cells;
        if !covered_exactly {
            log::warn!(
                "{} cells cannot be covered by {} exact pairs, filling the remainder cyclically",
                total_cells,
                config.pairs
            );
            let mut id = 0usize;
            while ids.len() < total_cells {
                ids.push((id % config.pairs.max(1) as usize) as u8);
                id += 1;
            }
            ids.truncate(total_cells);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for i in (1..ids.len()).rev() {
            let j = rng.random_range(0..=i);
            ids.swap(i, j);
        }

        let (size_x, size_y) = config.size;
        let faces = Array2::from_shape_fn((size_x as usize, size_y as usize), |(x, y)| {
            PairId::new(ids[y * size_x as usize + x])
        });

        let layout = DeckLayout {
            faces,
            pairs: config.pairs,
        };
        debug_assert!(!covered_exactly || layout.validate().is_ok());
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn face_counts(layout: &DeckLayout) -> Vec<u32> {
        let mut counts = vec![0u32; layout.pair_count() as usize];
        let (x_end, y_end) = layout.size();
        for x in 0..x_end {
            for y in 0..y_end {
                counts[layout[(x, y)].index() as usize] += 1;
            }
        }
        counts
    }

    #[test]
    fn reference_config_deals_each_identity_twice() {
        let layout = ShuffledDeckGenerator::new(42).generate(GameConfig::default());
        assert_eq!(layout.size(), (4, 3));
        assert_eq!(layout.pair_count(), 6);
        assert_eq!(face_counts(&layout), vec![2; 6]);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn same_seed_reproduces_the_deck() {
        let a = ShuffledDeckGenerator::new(7).generate(GameConfig::default());
        let b = ShuffledDeckGenerator::new(7).generate(GameConfig::default());
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_shuffle_differently() {
        let decks: Vec<_> = (0..16)
            .map(|seed| ShuffledDeckGenerator::new(seed).generate(GameConfig::default()))
            .collect();
        let distinct = decks
            .iter()
            .filter(|deck| **deck != decks[0])
            .count();
        assert!(distinct > 0, "16 seeds produced identical decks");
    }

    #[test]
    fn shuffle_is_not_positionally_biased() {
        // every identity should land on the first cell across enough seeds
        let mut seen = vec![false; 6];
        for seed in 0..300 {
            let layout = ShuffledDeckGenerator::new(seed).generate(GameConfig::default());
            seen[layout[(0, 0)].index() as usize] = true;
        }
        assert!(seen.iter().all(|&hit| hit), "first cell never saw some identity: {seen:?}");
    }

    #[test]
    fn odd_table_is_filled_cyclically() {
        let config = GameConfig::new((3, 3), 4);
        let layout = ShuffledDeckGenerator::new(1).generate(config);
        assert_eq!(layout.total_cells(), 9);
        let counts = face_counts(&layout);
        assert_eq!(counts.iter().sum::<u32>(), 9);
        assert!(counts.iter().all(|&count| count >= 2));
    }

    proptest! {
        #[test]
        fn any_seed_preserves_pair_multiplicity(seed in any::<u64>()) {
            let layout = ShuffledDeckGenerator::new(seed).generate(GameConfig::default());
            prop_assert!(layout.validate().is_ok());
        }

        #[test]
        fn any_even_table_is_covered_exactly(seed in any::<u64>(), x in 1u8..=8, y in 1u8..=8) {
            prop_assume!((x as u16 * y as u16) % 2 == 0);
            let config = GameConfig::new((x, y), x * y / 2);
            let layout = ShuffledDeckGenerator::new(seed).generate(config);
            prop_assert!(layout.validate().is_ok());
            prop_assert_eq!(layout.total_cells(), config.total_cells());
        }
    }
}
