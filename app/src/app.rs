use std::time::Instant;

use eframe::{CreationContext, Frame};
use egui::{
    Context, Key, Sense, TextureHandle, TextureOptions, ViewportCommand, load::SizedTexture,
};
use life::{FixedStep, Simulation};

use crate::render;

pub struct App {
    simulation: Simulation,
    clock: FixedStep,
    last_frame: Instant,
    texture: Option<TextureHandle>,
    settings: render::Settings,
}

impl App {
    /// Called once before the first frame.
    pub fn new(_cc: &CreationContext<'_>, simulation: Simulation) -> Self {
        Self {
            simulation,
            clock: FixedStep::default(),
            last_frame: Instant::now(),
            texture: None,
            settings: render::Settings::default(),
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let (close, toggle, slower, faster) = ctx.input(|i| {
            (
                i.key_pressed(Key::Escape),
                i.key_pressed(Key::Space),
                i.key_pressed(Key::S),
                i.key_pressed(Key::F),
            )
        });
        if close {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
        if toggle {
            self.simulation.toggle_seed_mode();
        }
        if slower {
            self.clock.slower();
        }
        if faster {
            self.clock.faster();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.handle_keys(ctx);

        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;
        self.clock.drive(&mut self.simulation, elapsed);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let image = render::render(&self.simulation, self.settings);
                let options = TextureOptions::NEAREST;
                let texture = match self.texture.take() {
                    Some(mut t) if t.size() == image.size => {
                        t.set(image, options);
                        t
                    }
                    _ => ctx.load_texture("board", image, options),
                };
                let size = texture.size_vec2();
                let sized_texture = SizedTexture::new(&texture, size);
                let response = ui.add(
                    egui::Image::new(sized_texture)
                        .fit_to_exact_size(size)
                        .sense(Sense::click()),
                );
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let offset = pos - response.rect.min;
                        self.simulation.seed_toggle_cell(offset.x, offset.y);
                    }
                }
                if response.secondary_clicked() {
                    self.simulation.toggle_seed_mode();
                }
                self.texture = Some(texture);
            });

        // The clock needs a steady stream of frames.
        ctx.request_repaint();
    }
}
