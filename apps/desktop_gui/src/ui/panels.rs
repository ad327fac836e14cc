//! Drawing of the report sections produced by `client_core::report`.

use chrono::{DateTime, Local};
use client_core::report::{
    CreativeCard, CreativesSection, InsightsSection, MetricsSection, PerformerRow,
};
use client_core::{ReportView, Section};

use crate::ui::widgets::{self, NEGATIVE, POSITIVE};

const PERFORMER_COLUMNS: [&str; 7] = [
    "Ad",
    "Impressions",
    "Clicks",
    "CTR",
    "Conversions",
    "Cost / Conv",
    "Score",
];

/// Draws every present section in order. Returns text the user asked to copy.
pub fn show_report(ui: &mut egui::Ui, view: &ReportView) -> Option<String> {
    let mut copied = None;
    for section in &view.sections {
        widgets::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            widgets::section_heading(ui, section.kind().title());
            match section {
                Section::Metrics(metrics) => show_metrics(ui, metrics),
                Section::Insights(insights) => show_insights(ui, insights),
                Section::Creatives(creatives) => {
                    if let Some(text) = show_creatives(ui, creatives) {
                        copied = Some(text);
                    }
                }
                Section::Recommendation(text) => {
                    ui.label(text);
                }
            }
        });
        ui.add_space(12.0);
    }

    if let Some(raw) = &view.generated_at {
        ui.label(
            egui::RichText::new(format!("Generated at {}", display_timestamp(raw)))
                .small()
                .weak(),
        );
    }
    copied
}

fn show_metrics(ui: &mut egui::Ui, metrics: &MetricsSection) {
    let spacing = ui.spacing().item_spacing.x;
    let width = ((ui.available_width() - spacing * 3.0) / 4.0 - 28.0).max(96.0);
    ui.horizontal_wrapped(|ui| {
        for tile in &metrics.tiles {
            widgets::metric_tile(ui, tile, width);
        }
    });

    if !metrics.top_performers.is_empty() {
        ui.add_space(12.0);
        ui.label(egui::RichText::new("Top performers").strong().color(POSITIVE));
        performer_table(ui, "top_performers", &metrics.top_performers);
    }
    if !metrics.bottom_performers.is_empty() {
        ui.add_space(12.0);
        ui.label(egui::RichText::new("Bottom performers").strong().color(NEGATIVE));
        performer_table(ui, "bottom_performers", &metrics.bottom_performers);
    }
}

fn performer_table(ui: &mut egui::Ui, id: &str, rows: &[PerformerRow]) {
    egui::Grid::new(id)
        .striped(true)
        .num_columns(PERFORMER_COLUMNS.len())
        .spacing([18.0, 6.0])
        .show(ui, |ui| {
            for column in PERFORMER_COLUMNS {
                ui.label(egui::RichText::new(column).small().strong());
            }
            ui.end_row();

            for row in rows {
                ui.label(&row.name);
                ui.label(&row.impressions);
                ui.label(&row.clicks);
                ui.label(&row.ctr);
                ui.label(&row.conversions);
                ui.label(&row.cost_per_conversion);
                ui.label(&row.score);
                ui.end_row();
            }
        });
}

fn show_insights(ui: &mut egui::Ui, insights: &InsightsSection) {
    ui.columns(2, |columns| {
        columns[0].label(
            egui::RichText::new("Top Performer Patterns")
                .strong()
                .color(POSITIVE),
        );
        for pattern in &insights.top_patterns {
            widgets::bullet(&mut columns[0], "✔", POSITIVE, pattern);
        }

        columns[1].label(
            egui::RichText::new("Bottom Performer Weaknesses")
                .strong()
                .color(NEGATIVE),
        );
        for weakness in &insights.bottom_weaknesses {
            widgets::bullet(&mut columns[1], "!", NEGATIVE, weakness);
        }
    });
}

fn show_creatives(ui: &mut egui::Ui, creatives: &CreativesSection) -> Option<String> {
    if creatives.cards.is_empty() {
        ui.label(egui::RichText::new("No creative variations were returned.").weak());
        return None;
    }

    let mut copied = None;
    for card in &creatives.cards {
        if show_creative_card(ui, card) {
            copied = Some(card.clipboard_text());
        }
        ui.add_space(8.0);
    }
    copied
}

fn show_creative_card(ui: &mut egui::Ui, card: &CreativeCard) -> bool {
    let mut copy_clicked = false;
    egui::Frame::group(ui.style())
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(card.label()).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    copy_clicked = ui
                        .small_button("Copy")
                        .on_hover_text("Copy headline, primary text and call to action")
                        .clicked();
                });
            });

            widgets::field_caption(ui, "HEADLINE");
            ui.label(egui::RichText::new(&card.headline).size(17.0).strong());

            widgets::field_caption(ui, "PRIMARY TEXT");
            ui.label(&card.primary_text);

            widgets::field_caption(ui, "CALL TO ACTION");
            ui.label(
                egui::RichText::new(&card.cta)
                    .strong()
                    .background_color(widgets::ACCENT)
                    .color(egui::Color32::WHITE),
            );

            ui.separator();
            widgets::field_caption(ui, "WHY THIS WORKS");
            ui.label(egui::RichText::new(&card.reasoning).italics().small());
        });
    copy_clicked
}

/// RFC 3339 timestamps are shown in local time; anything else verbatim.
pub fn display_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
