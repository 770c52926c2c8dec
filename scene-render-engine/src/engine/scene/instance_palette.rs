use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Size of the 24-bit colour cube
const COLOUR_CUBE: usize = 256 * 256 * 256;

/// Produce `count` distinguishable colours for instance labelling.
///
/// Colours decode from evenly spaced integers across the 24-bit cube and are
/// then shuffled so shapes that are adjacent in the input do not read as a
/// gradient. The shuffle is seeded, so a palette can be reproduced exactly.
pub fn instance_palette(count: usize, seed: u64) -> Vec<Vec3> {
    let interval = COLOUR_CUBE / (count + 2);
    let mut colours: Vec<Vec3> = (1..=count).map(|i| decode_colour(interval * i)).collect();
    colours.shuffle(&mut StdRng::seed_from_u64(seed));
    colours
}

fn decode_colour(value: usize) -> Vec3 {
    let r = value % 256;
    let g = (value / 256) % 256;
    let b = (value / 256 / 256) % 256;
    Vec3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_palette() {
        assert!(instance_palette(0, 0).is_empty());
    }

    #[test]
    fn test_count_and_range() {
        let palette = instance_palette(100, 7);
        assert_eq!(palette.len(), 100);
        for colour in &palette {
            assert!(colour.cmpge(Vec3::ZERO).all() && colour.cmple(Vec3::ONE).all());
        }
    }

    #[test]
    fn test_pairwise_distinct_large() {
        let palette = instance_palette(10_000, 42);
        let unique: HashSet<[u32; 3]> = palette
            .iter()
            .map(|c| [c.x.to_bits(), c.y.to_bits(), c.z.to_bits()])
            .collect();
        assert_eq!(unique.len(), 10_000);
    }

    #[test]
    fn test_seed_determinism() {
        assert_eq!(instance_palette(64, 3), instance_palette(64, 3));
    }
}
