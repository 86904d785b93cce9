//! Deterministic identicon avatars derived from node names.
//!
//! Nodes are identified only by a free-form name, so the dashboard derives a
//! placeholder avatar from a digest of that name: a 5x5 grid of cells, each
//! filled or empty, all filled cells sharing one hue. The derivation is a
//! pure function of the input text; rendering (SVG markup, terminal cells)
//! is kept out of the computation as thin adapters.

use std::fmt::Write as _;

use sha2::{Digest, Sha256};

/// Identicons are square grids of this many cells per side.
pub const GRID_SIZE: usize = 5;

/// Fixed saturation for identicon hues, in percent.
const SATURATION: f32 = 63.0;
/// Fixed lightness for identicon hues, in percent.
const LIGHTNESS: f32 = 30.0;

/// A color in the HSL model. `hue` in degrees `[0, 360)`, `saturation` and
/// `lightness` in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    /// Convert to 8-bit RGB for backends that cannot consume HSL directly
    /// (terminal cells, bitmaps).
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = (self.hue.rem_euclid(360.0)) / 60.0;
        let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let m = l - c / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (channel(r), channel(g), channel(b))
    }
}

/// A deterministic 5x5 identicon: fill pattern plus a single derived hue.
///
/// Derivation: the SHA-256 digest of the name is rendered as hex; cell
/// `(row, col)` is filled when the hex digit at index `row * 5 + col` is
/// even, and the hue comes from the digest's leading byte mapped linearly
/// onto the color wheel. The same name always produces the same identicon.
#[derive(Debug, Clone, PartialEq)]
pub struct Identicon {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
    color: Hsl,
}

impl Identicon {
    /// Derive the identicon for a name. Total over all inputs, including the
    /// empty string.
    pub fn from_name(name: &str) -> Self {
        let digest = Sha256::digest(name.as_bytes());
        let hex = hex::encode(digest);
        let digits: Vec<u32> = hex.bytes().map(|b| (b as char).to_digit(16).unwrap_or(0)).collect();

        let mut cells = [[false; GRID_SIZE]; GRID_SIZE];
        for (row, cells_row) in cells.iter_mut().enumerate() {
            for (col, cell) in cells_row.iter_mut().enumerate() {
                *cell = digits[row * GRID_SIZE + col] % 2 == 0;
            }
        }

        let hue = f32::from(digest[0]) / 256.0 * 360.0;
        Self {
            cells,
            color: Hsl {
                hue,
                saturation: SATURATION,
                lightness: LIGHTNESS,
            },
        }
    }

    /// Whether the cell at `(row, col)` is filled. Out-of-range coordinates
    /// read as empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// The single hue shared by all filled cells.
    pub fn color(&self) -> Hsl {
        self.color
    }

    /// Iterate over the grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool; GRID_SIZE]> {
        self.cells.iter()
    }

    /// Number of filled cells, out of 25.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c).count()
    }

    /// Render to an SVG fragment with one unit-square `rect` per filled
    /// cell. The only interpolated values are numbers formatted here, so the
    /// output carries no injectable content regardless of the input name.
    pub fn to_svg(&self) -> String {
        let Hsl {
            hue,
            saturation,
            lightness,
        } = self.color;
        let fill = format!("hsl({hue:.1}, {saturation:.0}%, {lightness:.0}%)");

        let mut rects = String::new();
        for (row, cells_row) in self.cells.iter().enumerate() {
            for (col, &filled) in cells_row.iter().enumerate() {
                if filled {
                    let _ = write!(
                        rects,
                        r#"<rect x="{row}" y="{col}" width="1" height="1" fill="{fill}" />"#
                    );
                }
            }
        }

        format!(r#"<svg viewBox="-1.5 -1.5 8 8" xmlns="http://www.w3.org/2000/svg">{rects}</svg>"#)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = Identicon::from_name("bootstrap-node-1");
        let b = Identicon::from_name("bootstrap-node-1");
        assert_eq!(a, b);
        assert_eq!(a.color(), b.color());
    }

    #[test]
    fn test_distinct_names_differ() {
        // Not a hard guarantee, but these digests are known to differ.
        let a = Identicon::from_name("alpha");
        let b = Identicon::from_name("beta");
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_name_is_valid() {
        let icon = Identicon::from_name("");
        assert!(icon.filled_count() <= GRID_SIZE * GRID_SIZE);
        assert!((0.0..360.0).contains(&icon.color().hue));
    }

    #[test]
    fn test_unicode_name() {
        let icon = Identicon::from_name("ノード 🌐");
        assert_eq!(icon, Identicon::from_name("ノード 🌐"));
    }

    #[test]
    fn test_hue_range() {
        for name in ["a", "b", "c", "node", "another-node", ""] {
            let hue = Identicon::from_name(name).color().hue;
            assert!((0.0..360.0).contains(&hue), "hue {hue} out of range");
        }
    }

    #[test]
    fn test_svg_rect_per_filled_cell() {
        let icon = Identicon::from_name("grpc.example.org");
        let svg = icon.to_svg();
        assert_eq!(svg.matches("<rect").count(), icon.filled_count());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_svg_output_inert() {
        // A hostile name must not leak into the markup.
        let svg = Identicon::from_name("<script>alert(1)</script>").to_svg();
        assert!(!svg.contains("script"));
    }

    #[test]
    fn test_rgb_conversion_bounds() {
        let gray = Hsl {
            hue: 120.0,
            saturation: 0.0,
            lightness: 50.0,
        };
        let (r, g, b) = gray.to_rgb();
        assert_eq!((r, g, b), (128, 128, 128));

        let black = Hsl {
            hue: 200.0,
            saturation: 63.0,
            lightness: 0.0,
        };
        assert_eq!(black.to_rgb(), (0, 0, 0));

        let white = Hsl {
            hue: 200.0,
            saturation: 63.0,
            lightness: 100.0,
        };
        assert_eq!(white.to_rgb(), (255, 255, 255));
    }

    #[test]
    fn test_rgb_primary_hues() {
        let red = Hsl {
            hue: 0.0,
            saturation: 100.0,
            lightness: 50.0,
        };
        assert_eq!(red.to_rgb(), (255, 0, 0));

        let green = Hsl {
            hue: 120.0,
            saturation: 100.0,
            lightness: 50.0,
        };
        assert_eq!(green.to_rgb(), (0, 255, 0));

        let blue = Hsl {
            hue: 240.0,
            saturation: 100.0,
            lightness: 50.0,
        };
        assert_eq!(blue.to_rgb(), (0, 0, 255));
    }
}
