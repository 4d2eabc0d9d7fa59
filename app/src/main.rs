mod app;
mod render;

use life::Simulation;

fn main() -> eframe::Result {
    env_logger::init();
    let simulation = Simulation::default();
    let side = (simulation.columns() * simulation.cell_size() as usize) as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("cgol")
            .with_inner_size([side, side])
            .with_resizable(false),
        ..Default::default()
    };
    log::info!("opening {side}x{side} window");
    eframe::run_native(
        "cgol",
        options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc, simulation)))),
    )
}
