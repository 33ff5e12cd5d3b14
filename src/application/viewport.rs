use crate::config::Dimensions;

/// Viewport maps window pixels to grid cells at a fixed scale.
///
/// Cell size is the integer quotient of window and grid size per axis, so a few
/// pixels at the right or bottom edge may fall outside the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    cell_width: f32,
    cell_height: f32,
    grid_width: usize,
    grid_height: usize,
}

impl Viewport {
    pub fn new(window: Dimensions, grid: Dimensions) -> Self {
        Self {
            cell_width: (window.width / grid.width.max(1)) as f32,
            cell_height: (window.height / grid.height.max(1)) as f32,
            grid_width: grid.width as usize,
            grid_height: grid.height as usize,
        }
    }

    /// Size of one cell in pixels
    pub const fn cell_size(&self) -> (f32, f32) {
        (self.cell_width, self.cell_height)
    }

    /// Convert screen coordinates to grid coordinates, `None` off the grid
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Option<(i32, i32)> {
        if screen_x < 0.0 || screen_y < 0.0 {
            return None;
        }
        let x = (screen_x / self.cell_width).floor() as usize;
        let y = (screen_y / self.cell_height).floor() as usize;
        (x < self.grid_width && y < self.grid_height).then_some((x as i32, y as i32))
    }

    /// Top-left corner of a cell in screen coordinates
    pub fn cell_to_screen(&self, x: usize, y: usize) -> (f32, f32) {
        (x as f32 * self.cell_width, y as f32 * self.cell_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Viewport {
        Viewport::new(Dimensions::square(1024), Dimensions::square(64))
    }

    #[test]
    fn test_reference_cell_size() {
        assert_eq!(reference().cell_size(), (16.0, 16.0));
    }

    #[test]
    fn test_screen_to_cell() {
        let viewport = reference();
        assert_eq!(viewport.screen_to_cell(0.0, 0.0), Some((0, 0)));
        assert_eq!(viewport.screen_to_cell(15.9, 16.0), Some((0, 1)));
        assert_eq!(viewport.screen_to_cell(1023.0, 1023.0), Some((63, 63)));
        assert_eq!(viewport.screen_to_cell(1024.0, 0.0), None);
        assert_eq!(viewport.screen_to_cell(-1.0, 5.0), None);
    }

    #[test]
    fn test_uneven_division_leaves_margin() {
        let viewport = Viewport::new(Dimensions { width: 100, height: 50 }, Dimensions::square(30));
        assert_eq!(viewport.cell_size(), (3.0, 1.0));
        assert_eq!(viewport.screen_to_cell(89.0, 29.0), Some((29, 29)));
        assert_eq!(viewport.screen_to_cell(95.0, 10.0), None);
        assert_eq!(viewport.screen_to_cell(10.0, 40.0), None);
    }

    #[test]
    fn test_cell_to_screen() {
        assert_eq!(reference().cell_to_screen(3, 2), (48.0, 32.0));
    }
}
