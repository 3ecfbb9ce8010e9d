//! tally theme
//!
//! Black on white, 1px black outlines, square corners. Inputs that are
//! locked while an error is shown are drawn in grey.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use tallycore::Config;

pub struct CalcColors;

impl CalcColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    /// Disabled buttons and the temp line
    pub const GREY: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);
}

pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_button: f32,
    pub font_size_entry: f32,
    pub font_size_temp: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl CalcTheme {
    pub fn from_config(config: &Config) -> Self {
        Self {
            font_size_body: 14.0,
            font_size_button: 18.0,
            font_size_entry: config.font_size_entry,
            font_size_temp: config.font_size_temp,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }

    pub fn entry_font(&self) -> FontId {
        FontId::proportional(self.font_size_entry)
    }

    pub fn temp_font(&self) -> FontId {
        FontId::proportional(self.font_size_temp)
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_body - 3.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_button, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_body + 8.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();

        visuals.window_fill = CalcColors::WHITE;
        visuals.panel_fill = CalcColors::WHITE;
        visuals.faint_bg_color = CalcColors::WHITE;
        visuals.extreme_bg_color = CalcColors::WHITE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, CalcColors::BLACK);

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = CalcColors::WHITE;
            ws.weak_bg_fill = CalcColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, CalcColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, CalcColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.active);
        bw(&mut visuals.widgets.open);
        visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, CalcColors::BLACK);
        visuals.widgets.active.bg_fill = CalcColors::BLACK;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, CalcColors::WHITE);

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(CalcColors::WHITE)
        .stroke(Stroke::new(1.0, CalcColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}
