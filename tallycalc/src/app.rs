//! tallycalc application

use egui::{Context, RichText};
use tallycore::{Config, Evaluator, Input, Operator};
use tracing::debug;

use crate::keys::{frame_inputs, KEY_HELP};
use crate::theme::{menu_bar, CalcColors, CalcTheme};

const BUTTON_ROWS: [[Input; 4]; 6] = [
    [
        Input::Operator(Operator::Mod),
        Input::ClearEntry,
        Input::ClearAll,
        Input::Backspace,
    ],
    [
        Input::Reciprocal,
        Input::Square,
        Input::SquareRoot,
        Input::Operator(Operator::Div),
    ],
    [
        Input::Digit('7'),
        Input::Digit('8'),
        Input::Digit('9'),
        Input::Operator(Operator::Mul),
    ],
    [
        Input::Digit('4'),
        Input::Digit('5'),
        Input::Digit('6'),
        Input::Operator(Operator::Sub),
    ],
    [
        Input::Digit('1'),
        Input::Digit('2'),
        Input::Digit('3'),
        Input::Operator(Operator::Add),
    ],
    [Input::Negate, Input::Digit('0'), Input::Point, Input::Equals],
];

pub struct TallyApp {
    calc: Evaluator,
    theme: CalcTheme,
    show_about: bool,
}

impl TallyApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        Self {
            calc: config.evaluator(),
            theme: CalcTheme::from_config(config),
            show_about: false,
        }
    }

    fn apply(&mut self, input: Input) {
        if !self.calc.is_enabled(input) {
            return;
        }
        // errors are already on screen as the entry sentinel
        if let Err(e) = self.calc.press(input) {
            debug!(?input, error = %e, "input rejected");
        }
    }

    fn render_button(&self, ui: &mut egui::Ui, input: Input, width: f32, height: f32) -> bool {
        let enabled = self.calc.is_enabled(input);
        let mut label = RichText::new(input.label());
        if !enabled {
            label = label.color(CalcColors::GREY);
        }
        ui.add_enabled_ui(enabled, |ui| {
            ui.add_sized([width, height], egui::Button::new(label))
        })
        .inner
        .clicked()
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(CalcColors::WHITE)
            .stroke(egui::Stroke::new(1.0, CalcColors::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // keep the temp line's height even when it is empty
                    let temp = self.calc.temp_text();
                    let temp = if temp.is_empty() { " ".to_string() } else { temp };
                    ui.label(
                        RichText::new(temp)
                            .font(self.theme.temp_font())
                            .color(CalcColors::GREY),
                    );
                    ui.label(
                        RichText::new(self.calc.entry_text())
                            .font(self.theme.entry_font())
                            .strong(),
                    );
                });
            });
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let spacing = ui.spacing().item_spacing;
        let btn_w = (ui.available_width() - 3.0 * spacing.x) / 4.0;
        let rows = BUTTON_ROWS.len() as f32;
        let btn_h = ((ui.available_height() - (rows - 1.0) * spacing.y) / rows).max(28.0);

        let mut clicked = Vec::new();
        for row in BUTTON_ROWS {
            ui.horizontal(|ui| {
                for input in row {
                    if self.render_button(ui, input, btn_w, btn_h) {
                        clicked.push(input);
                    }
                }
            });
        }
        for input in clicked {
            self.apply(input);
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about tally")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("tally");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("keys:");
                egui::Grid::new("key_help").num_columns(2).show(ui, |ui| {
                    for (keys, action) in KEY_HELP {
                        ui.label(*keys);
                        ui.label(*action);
                        ui.end_row();
                    }
                });
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for TallyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if !self.show_about {
            for input in frame_inputs(ctx) {
                self.apply(input);
            }
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("clear entry").clicked() {
                        self.apply(Input::ClearEntry);
                        ui.close_menu();
                    }
                    if ui.button("clear all").clicked() {
                        self.apply(Input::ClearAll);
                        ui.close_menu();
                    }
                    if ui.button("copy result").clicked() {
                        ctx.output_mut(|o| o.copied_text = self.calc.entry_text().to_string());
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(CalcColors::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_buttons(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }
    }
}
