use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use projectile_sim::dynamics::state::SimConfig;
use projectile_sim::physics::{Environment, ENVIRONMENTS};
use projectile_sim::scenario::ParameterSet;
use projectile_sim::sim::{self, query, Playback, SimulationResult};

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let app = SimViz::new(ParameterSet::default());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Projectile Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

/// Everything the viewer shows, derived from `params` and `comparing`.
struct SimViz {
    params: ParameterSet,
    comparing: bool,
    config: SimConfig,
    result: SimulationResult,
    comparison: Vec<sim::Comparison>,
    playback: Playback,
}

impl SimViz {
    fn new(params: ParameterSet) -> Self {
        let config = SimConfig::default();
        let result = sim::integrate_with(&params, &config);
        let mut playback = Playback::for_results([&result]);
        playback.play();
        Self {
            params,
            comparing: false,
            config,
            result,
            comparison: Vec::new(),
            playback,
        }
    }

    /// Re-run after an input change and restart playback.
    fn rerun(&mut self) {
        self.result = sim::integrate_with(&self.params, &self.config);
        self.comparison = if self.comparing {
            sim::compare_environments(&self.params, &ENVIRONMENTS, &self.config)
        } else {
            Vec::new()
        };
        self.playback = if self.comparing {
            Playback::for_results(self.comparison.iter().map(|c| &c.result))
        } else {
            Playback::for_results([&self.result])
        };
        self.playback.play();
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;
        ui.horizontal(|ui| {
            changed |= ui
                .add(egui::Slider::new(&mut self.params.velocity, 0.0..=100.0).text("velocity m/s"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.params.angle, 0.0..=90.0).text("angle deg"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.params.initial_height, 0.0..=100.0).text("height m"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut self.params.mass, 0.1..=10.0).text("mass kg"))
                .changed();
        });
        ui.horizontal(|ui| {
            for env in ENVIRONMENTS.iter() {
                let selected = !self.comparing && self.params.gravity == env.gravity;
                if ui.selectable_label(selected, env.name).clicked() {
                    self.params.gravity = env.gravity;
                    self.comparing = false;
                    changed = true;
                }
            }
            changed |= ui.checkbox(&mut self.comparing, "compare worlds").changed();
            changed |= ui.checkbox(&mut self.params.air_resistance, "air resistance").changed();

            ui.separator();
            let label = if self.playback.is_playing() { "Pause" } else { "Play" };
            if ui.button(label).clicked() {
                self.playback.toggle();
            }
            if ui.button("Reset").clicked() {
                self.playback.reset();
            }
        });
        if changed {
            self.rerun();
        }
    }
}

impl eframe::App for SimViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let elapsed = ctx.input(|i| i.stable_dt) as f64;
        self.playback.advance(elapsed);
        if self.playback.is_playing() {
            ctx.request_repaint();
        }
        let now = self.playback.current_time();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            let env_name = Environment::label_for(self.params.gravity);
            ui.heading(format!("Launch on {env_name}"));
            let current = query::sample_at(&self.result, now);
            ui.label(format!(
                "t = {:.2} s  |  height {:.1} m  |  speed {:.1} m/s  |  apex {:.1} m  |  range {:.1} m  |  air time {:.2} s",
                now,
                current.y,
                current.v,
                self.result.max_height(),
                self.result.range(),
                self.result.time_of_flight(),
            ));
            self.controls(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_h = available.y / 2.0 - 8.0;
            let half_w = available.x / 2.0 - 8.0;

            ui.label("Trajectory Profile (m)");
            Plot::new("profile")
                .height(half_h)
                .x_axis_label("Downrange (m)")
                .data_aspect(1.0)
                .show(ui, |plot_ui| {
                    let shown: Vec<(&str, &SimulationResult)> = if self.comparing {
                        self.comparison
                            .iter()
                            .map(|c| (c.environment.name, &c.result))
                            .collect()
                    } else {
                        vec![(Environment::label_for(self.params.gravity), &self.result)]
                    };
                    for (name, result) in shown {
                        let trail: PlotPoints = query::trail_until(result, now)
                            .iter()
                            .map(|s| [s.x, s.y])
                            .collect();
                        plot_ui.line(Line::new(name, trail));
                        let marker = query::sample_at(result, now);
                        plot_ui.points(Points::new(name, vec![[marker.x, marker.y]]).radius(5.0));
                    }
                });

            ui.horizontal(|ui| {
                // Height vs Time
                ui.vertical(|ui| {
                    ui.label("Height (m)");
                    let points: PlotPoints = self.result.trajectory()
                        .iter()
                        .map(|s| [s.t, s.y])
                        .collect();
                    Plot::new("height")
                        .width(half_w)
                        .height(half_h - 24.0)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Height", points));
                        });
                });

                // Speed vs Time
                ui.vertical(|ui| {
                    ui.label("Speed (m/s)");
                    let points: PlotPoints = self.result.trajectory()
                        .iter()
                        .map(|s| [s.t, s.v])
                        .collect();
                    Plot::new("speed")
                        .width(half_w)
                        .height(half_h - 24.0)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Speed", points));
                        });
                });
            });
        });
    }
}
