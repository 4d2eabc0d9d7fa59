use egui::{Color32, ColorImage};
use itertools::Itertools;
use life::Simulation;

#[derive(Clone, Copy)]
pub struct Settings {
    pub dead: Color32,
    pub alive: Color32,
    /// Cell borders, only drawn while seeding.
    pub grid: Color32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dead: Color32::WHITE,
            alive: Color32::BLACK,
            grid: Color32::BLACK,
        }
    }
}

/// Draws the committed board, one `cell_size` square per cell. Live cells
/// leave a one pixel margin on every side.
pub fn render(simulation: &Simulation, settings: Settings) -> ColorImage {
    let cell = simulation.cell_size() as usize;
    let width = simulation.columns() * cell;
    let height = simulation.rows() * cell;
    let mut pixels = vec![settings.dead; width * height];
    let inset = 1..cell.saturating_sub(1);
    for (x, y) in simulation.board().live_cells() {
        let (left, top) = (x as usize * cell, y as usize * cell);
        for (dy, dx) in inset.clone().cartesian_product(inset.clone()) {
            pixels[(top + dy) * width + left + dx] = settings.alive;
        }
    }
    if simulation.is_seeding() {
        for (i, pixel) in pixels.iter_mut().enumerate() {
            if (i % width) % cell == 0 || (i / width) % cell == 0 {
                *pixel = settings.grid;
            }
        }
    }
    ColorImage::new([width, height], pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use life::Config;

    fn sim() -> Simulation {
        let config = Config {
            size: 4,
            cell_size: 5,
        };
        Simulation::with_seed(config, [(1, 2)])
    }

    fn count(image: &ColorImage, color: Color32) -> usize {
        image.pixels.iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn test_size() {
        let image = render(&sim(), Settings::default());
        assert_eq!(image.size, [20, 20]);
    }

    #[test]
    fn test_live_cell_is_inset() {
        let image = render(&sim(), Settings::default());
        assert_eq!(count(&image, Color32::BLACK), 3 * 3);
        let at = |x: usize, y: usize| image.pixels[y * 20 + x];
        assert_eq!(at(5, 10), Color32::WHITE);
        assert_eq!(at(6, 11), Color32::BLACK);
        assert_eq!(at(8, 13), Color32::BLACK);
        assert_eq!(at(9, 14), Color32::WHITE);
    }

    #[test]
    fn test_grid_while_seeding() {
        let mut sim = sim();
        sim.toggle_seed_mode();
        let settings = Settings {
            grid: Color32::GRAY,
            ..Default::default()
        };
        let image = render(&sim, settings);
        // Four grid rows and four grid columns of 20 pixels, sharing 16.
        assert_eq!(count(&image, Color32::GRAY), 4 * 20 + 4 * 20 - 16);
        assert_eq!(count(&image, Color32::BLACK), 3 * 3);
    }

    #[test]
    fn test_clicks_land_on_drawn_cell() {
        let mut sim = sim();
        let image = render(&sim, Settings::default());
        let side = sim.columns() * sim.cell_size() as usize;
        assert_eq!(image.size, [side, side]);
        // Every pixel drawn for cell (1, 2) maps back to it.
        let drawn: Vec<_> = (0..image.pixels.len())
            .filter(|&i| image.pixels[i] == Color32::BLACK)
            .map(|i| ((i % side) as f32, (i / side) as f32))
            .collect();
        sim.toggle_seed_mode();
        for (x, y) in drawn {
            sim.seed_toggle_cell(x, y);
            assert!(!sim.cell_at(1, 2));
            sim.seed_toggle_cell(x, y);
            assert!(sim.cell_at(1, 2));
        }
        // The last pixel of the image belongs to the last cell.
        sim.seed_toggle_cell((side - 1) as f32, (side - 1) as f32);
        assert!(sim.cell_at(3, 3));
    }
}
