//! Small reusable egui building blocks for the panel.

use client_core::report::MetricTile;

pub const CARD_FILL_DARK: egui::Color32 = egui::Color32::from_rgb(36, 39, 46);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(96, 120, 235);
pub const POSITIVE: egui::Color32 = egui::Color32::from_rgb(82, 181, 120);
pub const NEGATIVE: egui::Color32 = egui::Color32::from_rgb(214, 96, 96);

pub fn card_frame(ui: &egui::Ui) -> egui::Frame {
    let fill = if ui.visuals().dark_mode {
        CARD_FILL_DARK
    } else {
        ui.visuals().extreme_bg_color
    };
    egui::Frame::NONE
        .fill(fill)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(16))
}

pub fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.label(egui::RichText::new(title).strong().size(20.0));
    ui.add_space(8.0);
}

pub fn field_caption(ui: &mut egui::Ui, caption: &str) {
    ui.label(
        egui::RichText::new(caption)
            .small()
            .strong()
            .color(ACCENT),
    );
}

/// Stacked label + full-width single-line input with a stable id.
pub fn labeled_text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    hint: &str,
    value: &mut String,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .hint_text(
            egui::RichText::new(hint).color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
        )
        .desired_width(f32::INFINITY);
    ui.add_sized([ui.available_width(), 34.0], edit)
}

pub fn metric_tile(ui: &mut egui::Ui, tile: &MetricTile, width: f32) {
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(14, 12))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.label(egui::RichText::new(tile.label).small().strong().color(ACCENT));
            ui.label(egui::RichText::new(&tile.value).size(26.0).strong());
        });
}

pub fn bullet(ui: &mut egui::Ui, marker: &str, color: egui::Color32, text: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(marker).color(color).strong());
        ui.label(text);
    });
}
