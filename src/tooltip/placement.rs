//! Tooltip placement relative to its target

use clap::ValueEnum;
use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// Side of the target the tip is drawn on.
///
/// Corner placements sit above (`n*`) or below (`s*`) the target and lean
/// toward the named side: `ne` shares the target's left edge and grows east,
/// `nw` shares its right edge and grows west.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    N,
    E,
    S,
    W,
    Nw,
    Ne,
    Sw,
    Se,
}

/// Compute the tip rectangle for a `width` x `height` tip next to `target`,
/// `offset` cells away, clamped into `viewport`.
pub fn place_tip(
    target: Rect,
    width: u16,
    height: u16,
    placement: Placement,
    offset: u16,
    viewport: Rect,
) -> Rect {
    let width = width.min(viewport.width);
    let height = height.min(viewport.height);

    let (tx, ty) = (i32::from(target.x), i32::from(target.y));
    let (tw, th) = (i32::from(target.width), i32::from(target.height));
    let (w, h, off) = (i32::from(width), i32::from(height), i32::from(offset));

    let center_x = tx + tw / 2 - w / 2;
    let center_y = ty + th / 2 - h / 2;
    let above = ty - off - h;
    let below = ty + th + off;

    let (x, y) = match placement {
        Placement::N => (center_x, above),
        Placement::S => (center_x, below),
        Placement::E => (tx + tw + off, center_y),
        Placement::W => (tx - off - w, center_y),
        Placement::Ne => (tx, above),
        Placement::Nw => (tx + tw - w, above),
        Placement::Se => (tx, below),
        Placement::Sw => (tx + tw - w, below),
    };

    Rect {
        x: clamp_axis(x, viewport.x, viewport.width, width),
        y: clamp_axis(y, viewport.y, viewport.height, height),
        width,
        height,
    }
}

// `size` is already capped at `len`, so the range is never empty
fn clamp_axis(pos: i32, start: u16, len: u16, size: u16) -> u16 {
    let min = i32::from(start);
    let max = min + i32::from(len) - i32::from(size);
    pos.clamp(min, max) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn target() -> Rect {
        Rect::new(10, 10, 10, 3)
    }

    #[test]
    fn test_north_centers_above_target() {
        let area = place_tip(target(), 8, 3, Placement::N, 1, VIEWPORT);
        assert_eq!(area, Rect::new(11, 6, 8, 3));
    }

    #[test]
    fn test_south_centers_below_target() {
        let area = place_tip(target(), 8, 3, Placement::S, 1, VIEWPORT);
        assert_eq!(area, Rect::new(11, 14, 8, 3));
    }

    #[test]
    fn test_east_and_west_center_vertically() {
        let east = place_tip(target(), 8, 3, Placement::E, 1, VIEWPORT);
        assert_eq!(east, Rect::new(21, 10, 8, 3));

        let west = place_tip(target(), 8, 3, Placement::W, 1, VIEWPORT);
        assert_eq!(west, Rect::new(1, 10, 8, 3));
    }

    #[test]
    fn test_corner_placements_share_an_edge() {
        assert_eq!(
            place_tip(target(), 6, 3, Placement::Ne, 0, VIEWPORT),
            Rect::new(10, 7, 6, 3)
        );
        assert_eq!(
            place_tip(target(), 6, 3, Placement::Nw, 0, VIEWPORT),
            Rect::new(14, 7, 6, 3)
        );
        assert_eq!(
            place_tip(target(), 6, 3, Placement::Se, 0, VIEWPORT),
            Rect::new(10, 13, 6, 3)
        );
        assert_eq!(
            place_tip(target(), 6, 3, Placement::Sw, 0, VIEWPORT),
            Rect::new(14, 13, 6, 3)
        );
    }

    #[test]
    fn test_tip_off_the_top_is_clamped() {
        let corner = Rect::new(0, 0, 4, 1);
        let area = place_tip(corner, 8, 3, Placement::N, 1, VIEWPORT);
        assert_eq!(area, Rect::new(0, 0, 8, 3));
    }

    #[test]
    fn test_tip_off_the_right_is_clamped() {
        let edge = Rect::new(75, 5, 5, 1);
        let area = place_tip(edge, 10, 3, Placement::E, 2, VIEWPORT);
        assert_eq!(area.x, 70);
        assert_eq!(area.right(), 80);
    }

    #[test]
    fn test_tip_larger_than_viewport_is_shrunk() {
        let area = place_tip(target(), 200, 50, Placement::S, 1, VIEWPORT);
        assert_eq!(area, VIEWPORT);
    }

    #[test]
    fn test_placement_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            placement: Placement,
        }

        let parsed: Wrapper = toml::from_str("placement = \"sw\"").unwrap();
        assert_eq!(parsed.placement, Placement::Sw);
        assert!(toml::from_str::<Wrapper>("placement = \"north\"").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_tip_always_inside_viewport(
            tx in 0u16..80, ty in 0u16..24,
            tw in 1u16..20, th in 1u16..5,
            width in 1u16..120, height in 1u16..40,
            offset in 0u16..5,
            placement in prop::sample::select(vec![
                Placement::N, Placement::E, Placement::S, Placement::W,
                Placement::Nw, Placement::Ne, Placement::Sw, Placement::Se,
            ])
        ) {
            let area = place_tip(Rect::new(tx, ty, tw, th), width, height, placement, offset, VIEWPORT);

            prop_assert!(area.x >= VIEWPORT.x && area.right() <= VIEWPORT.right());
            prop_assert!(area.y >= VIEWPORT.y && area.bottom() <= VIEWPORT.bottom());
            prop_assert_eq!(area.width, width.min(VIEWPORT.width));
            prop_assert_eq!(area.height, height.min(VIEWPORT.height));
        }
    }
}
