//! Stable per-area color assignment.
//!
//! # Responsibility
//! - Map an area name to one palette color with no stored state.
//!
//! # Invariants
//! - Same name (ignoring case) yields the same color in every run.
//! - Result depends only on the name, never on which other areas exist.

/// ColorBrewer Set3, 12 qualitative colors.
pub const SET3_PALETTE: [&str; 12] = [
    "#8DD3C7", "#FFFFB3", "#BEBADA", "#FB8072", "#80B1D3", "#FDB462", "#B3DE69", "#FCCDE5",
    "#D9D9D9", "#BC80BD", "#CCEBC5", "#FFED6F",
];

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// 32-bit FNV-1a.
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Palette index for the lower-cased UTF-8 name.
fn palette_index(name: &str) -> usize {
    fnv1a_32(name.to_lowercase().as_bytes()) as usize % SET3_PALETTE.len()
}

/// Palette color for one area.
pub fn color_for(area: &str) -> &'static str {
    SET3_PALETTE[palette_index(area)]
}

#[cfg(test)]
mod tests {
    use super::{color_for, fnv1a_32, palette_index, SET3_PALETTE};

    #[test]
    fn fnv1a_matches_reference_vectors() {
        assert_eq!(fnv1a_32(b""), 0x811c_9dc5);
        assert_eq!(fnv1a_32(b"a"), 0xe40c_292c);
        assert_eq!(fnv1a_32(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn color_is_stable_across_calls() {
        let first = color_for("AWS");
        for _ in 0..1000 {
            assert_eq!(color_for("AWS"), first);
        }
    }

    #[test]
    fn color_ignores_case() {
        assert_eq!(color_for("AWS"), color_for("aws"));
        assert_eq!(color_for("Documents"), color_for("DOCUMENTS"));
    }

    #[test]
    fn index_stays_inside_palette() {
        for name in ["", "AI", "AWS", "General", "Documents indexers and query"] {
            assert!(palette_index(name) < SET3_PALETTE.len());
        }
    }

    #[test]
    fn known_names_map_to_expected_buckets() {
        // "a" hashes to 0xe40c292c = 3826002220, 3826002220 % 12 = 4.
        assert_eq!(palette_index("A"), 4);
        assert_eq!(color_for("a"), "#80B1D3");
    }
}
