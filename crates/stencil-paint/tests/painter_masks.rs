//! Mask composition scenarios on a headless surface.
//!
//! Each scenario paints through nested masks and compares the whole grid
//! against a golden string: `'█'` for painted cells, `'.'` for untouched
//! ones.

use proptest::prelude::*;
use stencil_core::geometry::Rect;
use stencil_paint::{HeadlessSurface, Painter};
use stencil_style::{Ansi16, Color, Style, Theme};

/// Paint every cell of the surface, relying on the clip to discard.
fn fill_whole_surface(p: &mut Painter<'_>) {
    let size = p.size();
    for x in 0..size.width {
        for y in 0..size.height {
            p.draw_char(x, y, '█');
        }
    }
}

#[test]
fn full_mask_exposes_every_cell() {
    let mut surface = HeadlessSurface::new(10, 10);
    let theme = Theme::new();
    let mut painter = Painter::new(&mut surface, &theme);

    painter.with_mask(Rect::from_corners(0, 0, 10, 10), |p| {
        p.with_mask(Rect::from_corners(0, 0, 10, 10), |p| {
            fill_whole_surface(p);
        });
    });

    let want = "\
██████████
██████████
██████████
██████████
██████████
██████████
██████████
██████████
██████████
██████████
";
    assert_eq!(surface.render(), want);
}

#[test]
fn inset_mask_leaves_the_border_untouched() {
    let mut surface = HeadlessSurface::new(10, 10);
    let theme = Theme::new();
    let mut painter = Painter::new(&mut surface, &theme);

    painter.with_mask(Rect::from_corners(0, 0, 10, 10), |p| {
        p.with_mask(Rect::from_corners(1, 1, 9, 9), |p| {
            fill_whole_surface(p);
        });
    });

    let want = "\
..........
.████████.
.████████.
.████████.
.████████.
.████████.
.████████.
.████████.
.████████.
..........
";
    assert_eq!(surface.render(), want);
}

#[test]
fn single_cell_mask_exposes_the_first_cell() {
    let mut surface = HeadlessSurface::new(10, 10);
    let theme = Theme::new();
    let mut painter = Painter::new(&mut surface, &theme);

    painter.with_mask(Rect::from_corners(0, 0, 10, 10), |p| {
        p.with_mask(Rect::from_corners(0, 0, 1, 1), |p| {
            fill_whole_surface(p);
        });
    });

    let want = "\
█.........
..........
..........
..........
..........
..........
..........
..........
..........
..........
";
    assert_eq!(surface.render(), want);
}

#[test]
fn corner_mask_exposes_the_last_cell() {
    let mut surface = HeadlessSurface::new(10, 10);
    let theme = Theme::new();
    let mut painter = Painter::new(&mut surface, &theme);

    painter.with_mask(Rect::from_corners(0, 0, 10, 10), |p| {
        p.with_mask(Rect::from_corners(9, 9, 10, 10), |p| {
            fill_whole_surface(p);
        });
    });

    let want = "\
..........
..........
..........
..........
..........
..........
..........
..........
..........
.........█
";
    assert_eq!(surface.render(), want);
}

#[test]
fn mask_within_empty_mask_is_hidden() {
    let mut surface = HeadlessSurface::new(10, 10);
    let theme = Theme::new();
    let mut painter = Painter::new(&mut surface, &theme);

    painter.with_mask(Rect::from_corners(0, 0, 0, 0), |p| {
        // Non-empty on its own, but the empty outer clip absorbs it
        p.with_mask(Rect::from_corners(1, 1, 9, 9), |p| {
            fill_whole_surface(p);
        });
    });

    let want = "\
..........
..........
..........
..........
..........
..........
..........
..........
..........
..........
";
    assert_eq!(surface.render(), want);
}

#[test]
fn deeply_nested_masks_intersect_every_level() {
    let mut surface = HeadlessSurface::new(10, 10);
    let theme = Theme::new();
    let mut painter = Painter::new(&mut surface, &theme);

    painter.with_mask(Rect::from_corners(0, 0, 8, 8), |p| {
        p.with_mask(Rect::from_corners(2, 2, 10, 10), |p| {
            p.with_mask(Rect::from_corners(0, 4, 10, 6), |p| {
                fill_whole_surface(p);
            });
        });
    });

    // (0,0,8,8) ∩ (2,2,10,10) ∩ (0,4,10,6) = (2,4)-(8,6)
    let want = "\
..........
..........
..........
..........
..██████..
..██████..
..........
..........
..........
..........
";
    assert_eq!(surface.render(), want);
}

#[test]
fn wide_glyph_with_clipped_leading_cell_is_fully_dropped() {
    let mut surface = HeadlessSurface::new(10, 1);
    let theme = Theme::new();
    let mut painter = Painter::new(&mut surface, &theme);

    painter.with_mask(Rect::from_corners(1, 0, 10, 1), |p| {
        // Leading cell (0,0) is outside the mask even though the trailing
        // column (1,0) would be inside: nothing may be written.
        p.draw_char(0, 0, '日');
        // Leading cell inside writes normally.
        p.draw_char(2, 0, '日');
    });

    assert_eq!(surface.cell(0, 0), None);
    assert_eq!(surface.cell(1, 0), None);
    assert_eq!(surface.cell(2, 0).unwrap().ch, '日');
    assert_eq!(surface.render(), "..日......\n");
}

#[test]
fn offset_painting_inside_a_mask() {
    let mut surface = HeadlessSurface::new(10, 10);
    let theme = Theme::new();
    let mut painter = Painter::new(&mut surface, &theme);

    painter.with_mask(Rect::from_corners(2, 2, 8, 8), |p| {
        p.with_offset(2, 2, |p| {
            // Local (0,0)-(10,10) fill lands at absolute (2,2) onward,
            // clipped by the mask
            p.fill(Rect::from_corners(0, 0, 10, 10), '█');
        });
    });

    let want = "\
..........
..........
..██████..
..██████..
..██████..
..██████..
..██████..
..██████..
..........
..........
";
    assert_eq!(surface.render(), want);
}

#[test]
fn styles_flow_through_to_the_surface() {
    let mut surface = HeadlessSurface::new(4, 1);
    let theme = Theme::new().with_base(
        Style::new()
            .fg(Color::Ansi(Ansi16::Green))
            .bg(Color::Ansi(Ansi16::Black)),
    );
    let mut painter = Painter::new(&mut surface, &theme);

    painter.draw_char(0, 0, 'a');
    let reversed = painter.style().reverse();
    painter.with_style(reversed, |p| {
        p.draw_char(1, 0, 'b');
    });
    painter.draw_char(2, 0, 'c');

    assert_eq!(surface.render(), "abc.\n");
    // Reverse video swaps the effective colors on the middle cell
    assert_eq!(surface.render_fg(), "202.\n");
    assert_eq!(surface.render_bg(), "020.\n");
}

// ── Properties ──────────────────────────────────────────────────────────

fn mask_strategy() -> impl Strategy<Value = Rect> {
    (-5i32..=20, -5i32..=20, 0i32..=25, 0i32..=25)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn nested_clip_never_widens(a in mask_strategy(), b in mask_strategy()) {
        let mut surface = HeadlessSurface::new(20, 20);
        let theme = Theme::new();
        let mut painter = Painter::new(&mut surface, &theme);

        let mut outer = Rect::default();
        let mut inner = Rect::default();
        painter.with_mask(a, |p| {
            outer = p.clip();
            p.with_mask(b, |p| {
                inner = p.clip();
            });
        });

        // Empty child clips are trivially contained
        if !inner.is_empty() {
            prop_assert!(inner.left() >= outer.left());
            prop_assert!(inner.top() >= outer.top());
            prop_assert!(inner.right() <= outer.right());
            prop_assert!(inner.bottom() <= outer.bottom());
        }
    }

    #[test]
    fn drawing_is_confined_to_the_mask(mask in mask_strategy()) {
        let mut surface = HeadlessSurface::new(20, 20);
        let theme = Theme::new();
        let mut painter = Painter::new(&mut surface, &theme);

        painter.with_mask(mask, |p| {
            fill_whole_surface(p);
        });

        let visible = Rect::new(0, 0, 20, 20).intersection(&mask);
        for y in 0..20 {
            for x in 0..20 {
                let painted = surface.cell(x, y).is_some();
                prop_assert_eq!(
                    painted,
                    visible.contains(x, y),
                    "cell ({}, {}) for mask {:?}",
                    x, y, mask
                );
            }
        }
    }
}
