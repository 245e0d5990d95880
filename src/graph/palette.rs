//! Team color palette

use serde::{Deserialize, Serialize};

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Fill for nodes without a team
pub const NEUTRAL: Rgb = Rgb(0xbf, 0xbf, 0xbf);

/// 20-color categorical palette (light/dark pairs)
pub const CATEGORICAL_20: [Rgb; 20] = [
    Rgb(0x1f, 0x77, 0xb4),
    Rgb(0xae, 0xc7, 0xe8),
    Rgb(0xff, 0x7f, 0x0e),
    Rgb(0xff, 0xbb, 0x78),
    Rgb(0x2c, 0xa0, 0x2c),
    Rgb(0x98, 0xdf, 0x8a),
    Rgb(0xd6, 0x27, 0x28),
    Rgb(0xff, 0x98, 0x96),
    Rgb(0x94, 0x67, 0xbd),
    Rgb(0xc5, 0xb0, 0xd5),
    Rgb(0x8c, 0x56, 0x4b),
    Rgb(0xc4, 0x9c, 0x94),
    Rgb(0xe3, 0x77, 0xc2),
    Rgb(0xf7, 0xb6, 0xd2),
    Rgb(0x7f, 0x7f, 0x7f),
    Rgb(0xc7, 0xc7, 0xc7),
    Rgb(0xbc, 0xbd, 0x22),
    Rgb(0xdb, 0xdb, 0x8d),
    Rgb(0x17, 0xbe, 0xcf),
    Rgb(0x9e, 0xda, 0xe5),
];

/// Sample `count` colors evenly across the palette.
///
/// Position `i` maps to `i / (count - 1)` on [0, 1]; a single color takes the
/// first entry. With more than 20 teams neighbors can share a color.
pub fn spread(count: usize) -> Vec<Rgb> {
    let n = CATEGORICAL_20.len();
    (0..count)
        .map(|i| {
            let t = if count > 1 { i as f64 / (count - 1) as f64 } else { 0.0 };
            let idx = ((t * n as f64) as usize).min(n - 1);
            CATEGORICAL_20[idx]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Rgb(0x1f, 0x77, 0xb4).hex(), "#1f77b4");
        assert_eq!(NEUTRAL.hex(), "#bfbfbf");
    }

    #[test]
    fn test_spread_endpoints() {
        assert!(spread(0).is_empty());
        assert_eq!(spread(1), vec![CATEGORICAL_20[0]]);
        let two = spread(2);
        assert_eq!(two, vec![CATEGORICAL_20[0], CATEGORICAL_20[19]]);
    }

    #[test]
    fn test_spread_distinct_up_to_palette_size() {
        for count in 1..=20 {
            let colors = spread(count);
            let mut unique = colors.clone();
            unique.dedup();
            assert_eq!(unique.len(), count, "count {count} produced duplicates");
        }
    }
}
