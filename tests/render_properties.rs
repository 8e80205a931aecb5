//! Property tests for glyph rasterization.

use embedded_graphics::geometry::Point;
use oled_text::raster::TEXT_LIMIT_X;
use oled_text::{draw_char, draw_text, Framebuffer, CHAR_PITCH, HEIGHT, WIDTH};
use proptest::prelude::*;

fn letter() -> impl Strategy<Value = char> {
    prop_oneof![
        proptest::char::range('A', 'Z'),
        proptest::char::range('a', 'z'),
    ]
}

fn non_letter() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("letters have glyphs", |c| !c.is_ascii_alphabetic())
}

fn origin() -> impl Strategy<Value = Point> {
    prop_oneof![
        (-200i32..300, -40i32..100).prop_map(|(x, y)| Point::new(x, y)),
        (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Point::new(x, y)),
        (i32::MAX - 16..=i32::MAX, -40i32..100).prop_map(|(x, y)| Point::new(x, y)),
        (-200i32..300, i32::MAX - 16..=i32::MAX).prop_map(|(x, y)| Point::new(x, y)),
    ]
}

/// A frame buffer with some pixels already lit.
fn prefilled() -> impl Strategy<Value = Framebuffer> {
    prop::collection::vec((0i32..WIDTH as i32, 0i32..HEIGHT as i32), 0..64).prop_map(|pixels| {
        let mut fb = Framebuffer::new();
        for (x, y) in pixels {
            fb.set_pixel(Point::new(x, y));
        }
        fb
    })
}

fn lit_pixels(fb: &Framebuffer) -> impl Iterator<Item = Point> + '_ {
    (0..HEIGHT as i32)
        .flat_map(|y| (0..WIDTH as i32).map(move |x| Point::new(x, y)))
        .filter(|&p| fb.is_set(p))
}

proptest! {
    #[test]
    fn non_letters_leave_buffer_unchanged(
        mut fb in prefilled(),
        c in non_letter(),
        at in origin(),
    ) {
        let before = fb.clone();
        draw_char(&mut fb, c, at);
        prop_assert_eq!(fb.as_bytes(), before.as_bytes());
    }

    #[test]
    fn redraw_after_clear_matches_fresh_draw(c in letter(), at in origin()) {
        let mut fresh = Framebuffer::new();
        draw_char(&mut fresh, c, at);

        let mut reused = Framebuffer::new();
        draw_char(&mut reused, c, at);
        reused.clear();
        draw_char(&mut reused, c, at);

        prop_assert_eq!(reused.as_bytes(), fresh.as_bytes());
    }

    #[test]
    fn drawing_twice_equals_drawing_once(text in "\\PC{0,32}", at in origin()) {
        let mut once = Framebuffer::new();
        draw_text(&mut once, &text, at);

        let mut twice = Framebuffer::new();
        draw_text(&mut twice, &text, at);
        draw_text(&mut twice, &text, at);

        prop_assert_eq!(twice.as_bytes(), once.as_bytes());
    }

    #[test]
    fn text_stays_inside_its_line(text in any::<String>(), at in origin()) {
        let mut fb = Framebuffer::new();
        draw_text(&mut fb, &text, at);

        // Glyphs start no later than the last cursor column below the
        // limit, or at the origin itself for the first character.
        // Widened so origins near i32::MAX do not overflow the bounds.
        let last_start = i64::from(at.x.max(TEXT_LIMIT_X - 1));
        let top = i64::from(at.y);
        for p in lit_pixels(&fb) {
            let (x, y) = (i64::from(p.x), i64::from(p.y));
            prop_assert!(x >= i64::from(at.x), "{:?} left of origin {:?}", p, at);
            prop_assert!(x < last_start + i64::from(CHAR_PITCH), "{:?} past the limit", p);
            prop_assert!(y >= top && y < top + 8, "{:?} outside the line", p);
        }
    }

    #[test]
    fn letters_only_text_lays_out_fixed_cells(
        text in "[A-Za-z]{1,30}",
        x in 0i32..WIDTH as i32,
    ) {
        let mut fb = Framebuffer::new();
        draw_text(&mut fb, &text, Point::new(x, 0));

        // Number of glyphs laid out before the cursor reaches the limit.
        let mut drawn = 0;
        let mut cursor = x;
        for _ in text.chars() {
            drawn += 1;
            cursor += CHAR_PITCH;
            if cursor >= TEXT_LIMIT_X {
                break;
            }
        }

        let mut expected = Framebuffer::new();
        for (i, c) in text.chars().take(drawn).enumerate() {
            draw_char(&mut expected, c, Point::new(x + i as i32 * CHAR_PITCH, 0));
        }
        prop_assert_eq!(fb.as_bytes(), expected.as_bytes());
    }
}
