//! Bucket fill on raw pixel buffers.

use crate::pixel::{PixelBuffer, Rgba};

/// Repaints the 4-connected region around `(x, y)` that exactly matches the
/// seed color with `fill`.
///
/// Returns the number of pixels repainted. A seed outside the buffer, or a
/// seed already colored `fill`, leaves the buffer untouched and returns 0.
pub fn flood_fill(buffer: &mut PixelBuffer, x: i64, y: i64, fill: Rgba) -> usize {
    let Some(target) = buffer.get(x, y) else {
        log::debug!("Fill seed ({x}, {y}) is outside the canvas");
        return 0;
    };
    if target == fill {
        return 0;
    }

    let width = buffer.width();
    let mut visited = vec![false; width * buffer.height()];
    let mut pending = vec![(x, y)];
    let mut filled = 0;

    while let Some((px, py)) = pending.pop() {
        if !buffer.contains(px, py) {
            continue;
        }
        let index = py as usize * width + px as usize;
        if visited[index] {
            continue;
        }
        visited[index] = true;

        if buffer.get(px, py) != Some(target) {
            continue;
        }
        buffer.set(px, py, fill);
        filled += 1;

        pending.push((px + 1, py));
        pending.push((px - 1, py));
        pending.push((px, py + 1));
        pending.push((px, py - 1));
    }

    log::debug!("Filled {filled} pixels from seed ({x}, {y})");
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::new(255, 0, 0, 255);

    fn white_with_black_center() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(3, 3, Rgba::WHITE);
        buffer.set(1, 1, Rgba::BLACK);
        buffer
    }

    #[test]
    fn test_fill_around_center() {
        let mut buffer = white_with_black_center();
        let filled = flood_fill(&mut buffer, 0, 0, RED);

        assert_eq!(filled, 8);
        for y in 0..3 {
            for x in 0..3 {
                let expected = if (x, y) == (1, 1) { Rgba::BLACK } else { RED };
                assert_eq!(buffer.get(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fill_same_color_is_noop() {
        let mut buffer = white_with_black_center();
        let before = buffer.clone();

        assert_eq!(flood_fill(&mut buffer, 0, 0, Rgba::WHITE), 0);
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_fill_out_of_bounds_seed_is_noop() {
        let mut buffer = white_with_black_center();
        let before = buffer.clone();

        assert_eq!(flood_fill(&mut buffer, -1, 0, RED), 0);
        assert_eq!(flood_fill(&mut buffer, 3, 0, RED), 0);
        assert_eq!(flood_fill(&mut buffer, 0, 3, RED), 0);
        assert_eq!(flood_fill(&mut buffer, i64::MAX, i64::MIN, RED), 0);
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_fill_does_not_cross_diagonals() {
        // Checkerboard: white cells only touch each other diagonally.
        let mut buffer = PixelBuffer::new(3, 3, Rgba::WHITE);
        for (x, y) in [(1, 0), (0, 1), (2, 1), (1, 2)] {
            buffer.set(x, y, Rgba::BLACK);
        }

        assert_eq!(flood_fill(&mut buffer, 0, 0, RED), 1);
        assert_eq!(buffer.get(0, 0), Some(RED));
        assert_eq!(buffer.get(1, 1), Some(Rgba::WHITE));
        assert_eq!(buffer.get(2, 2), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_stops_at_wall() {
        let mut buffer = PixelBuffer::new(5, 3, Rgba::TRANSPARENT);
        for y in 0..3 {
            buffer.set(2, y, Rgba::BLACK);
        }

        assert_eq!(flood_fill(&mut buffer, 4, 1, RED), 6);
        for y in 0..3 {
            assert_eq!(buffer.get(0, y), Some(Rgba::TRANSPARENT));
            assert_eq!(buffer.get(1, y), Some(Rgba::TRANSPARENT));
            assert_eq!(buffer.get(2, y), Some(Rgba::BLACK));
            assert_eq!(buffer.get(3, y), Some(RED));
            assert_eq!(buffer.get(4, y), Some(RED));
        }
    }

    #[test]
    fn test_fill_matches_exactly() {
        let mut buffer = PixelBuffer::new(3, 1, Rgba::WHITE);
        buffer.set(1, 0, Rgba::new(255, 255, 255, 254));

        assert_eq!(flood_fill(&mut buffer, 0, 0, RED), 1);
        assert_eq!(buffer.get(2, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_large_region_terminates() {
        let mut buffer = PixelBuffer::new(512, 512, Rgba::TRANSPARENT);
        assert_eq!(flood_fill(&mut buffer, 256, 256, RED), 512 * 512);
        assert_eq!(flood_fill(&mut buffer, 0, 0, RED), 0);
    }
}
