// Expression mapping and bar rendering
//
// Both are pure projections of energy: no state, no I/O. The display line is
// always exactly one glyph, one space, and ten bar characters.

/// Number of segments in the energy bar
pub const BAR_WIDTH: u32 = 10;

/// Filled bar segment
const BAR_FILLED: char = '█';

/// Empty bar segment
const BAR_EMPTY: char = '░';

/// Map energy to a mood glyph
///
/// Bands are exhaustive over the whole f64 range (clamping happens upstream,
/// but out-of-domain values still land in the nearest band) and monotonic:
/// more energy never yields a less vital glyph.
pub fn expression_for(energy: f64) -> &'static str {
    if energy >= 90.0 {
        "(^_^)" // energetic
    } else if energy >= 40.0 {
        "(o_o)" // neutral
    } else if energy >= 20.0 {
        "(-_-)" // tired
    } else if energy > 0.0 {
        "(;_;)" // exhausted
    } else {
        "(x_x)" // out of energy
    }
}

/// Render the 10-segment energy bar
///
/// Filled segments = round(energy / 10); e.g. 45 energy rounds to 5 bars.
pub fn energy_bar(energy: f64) -> String {
    let filled = ((energy / 10.0).round() as i64).clamp(0, BAR_WIDTH as i64) as u32;
    let mut bar = String::with_capacity(BAR_WIDTH as usize * BAR_FILLED.len_utf8());
    for _ in 0..filled {
        bar.push(BAR_FILLED);
    }
    for _ in filled..BAR_WIDTH {
        bar.push(BAR_EMPTY);
    }
    bar
}

/// Full display line: glyph, single space, bar
pub fn display_line(expression: &str, energy: f64) -> String {
    format!("{} {}", expression, energy_bar(energy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expression_bands() {
        assert_eq!(expression_for(100.0), "(^_^)");
        assert_eq!(expression_for(90.0), "(^_^)");
        assert_eq!(expression_for(89.9), "(o_o)");
        assert_eq!(expression_for(45.0), "(o_o)");
        assert_eq!(expression_for(40.0), "(o_o)");
        assert_eq!(expression_for(39.9), "(-_-)");
        assert_eq!(expression_for(20.0), "(-_-)");
        assert_eq!(expression_for(19.9), "(;_;)");
        assert_eq!(expression_for(0.1), "(;_;)");
        assert_eq!(expression_for(0.0), "(x_x)");
    }

    #[test]
    fn test_expression_bands_are_monotonic() {
        // Walking up the energy scale must never step down in vitality
        let vitality = |glyph: &str| match glyph {
            "(x_x)" => 0,
            "(;_;)" => 1,
            "(-_-)" => 2,
            "(o_o)" => 3,
            "(^_^)" => 4,
            other => panic!("unknown glyph {other}"),
        };
        let mut prev = vitality(expression_for(0.0));
        for e in 1..=100 {
            let cur = vitality(expression_for(e as f64));
            assert!(cur >= prev, "vitality dropped at energy {e}");
            prev = cur;
        }
    }

    #[test]
    fn test_bar_full() {
        assert_eq!(energy_bar(100.0), "██████████");
    }

    #[test]
    fn test_bar_empty() {
        assert_eq!(energy_bar(0.0), "░░░░░░░░░░");
    }

    #[test]
    fn test_bar_half() {
        assert_eq!(energy_bar(50.0), "█████░░░░░");
    }

    #[test]
    fn test_bar_rounds_to_nearest_segment() {
        // 45 -> 4.5 -> rounds to 5 segments; 44 -> 4.4 -> 4 segments
        assert_eq!(energy_bar(45.0), "█████░░░░░");
        assert_eq!(energy_bar(44.0), "████░░░░░░");
        // 4 -> 0.4 -> 0 segments; 5 -> 0.5 -> 1 segment
        assert_eq!(energy_bar(4.0), "░░░░░░░░░░");
        assert_eq!(energy_bar(5.0), "█░░░░░░░░░");
    }

    #[test]
    fn test_bar_is_always_ten_segments() {
        for e in 0..=100 {
            let bar = energy_bar(e as f64);
            assert_eq!(bar.chars().count(), 10, "bad width at energy {e}");
        }
    }

    #[test]
    fn test_display_line_shape() {
        let line = display_line("(o_o)", 50.0);
        assert_eq!(line, "(o_o) █████░░░░░");
        // one glyph + one space + 10 bar chars
        assert_eq!(line.chars().count(), 5 + 1 + 10);
    }
}
