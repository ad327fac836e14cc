//! Desktop shell: configuration form, submission feedback, and the report.

use std::time::Duration;

use arboard::Clipboard;
use chrono::{Local, NaiveDate};
use client_core::{
    Configuration, Resolution, ReportView, SubmissionController, SubmissionError,
    SubmissionState,
};
use crossbeam_channel::{Receiver, Sender};
use shared::domain::Platform;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{category_label, UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::{panels, widgets};

const ENDPOINT_HINT: &str = "https://your-n8n-instance.com/webhook/ad-optimizer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Error,
    Notice,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    form: Configuration,
    controller: SubmissionController,
    status: String,
    status_banner: Option<StatusBanner>,
}

impl DesktopGuiApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        form: Configuration,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            form,
            controller: SubmissionController::new(),
            status: "Ready".to_string(),
            status_banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => {
                    tracing::warn!(
                        category = ?err.category(),
                        context = ?err.context(),
                        "ui error: {}",
                        err.message()
                    );
                    self.status_banner = Some(StatusBanner {
                        severity: StatusBannerSeverity::Error,
                        message: format!("{}: {}", category_label(err.category()), err.message()),
                    });
                }
                UiEvent::SubmissionResolved {
                    generation,
                    outcome,
                } => {
                    if self.controller.resolve(generation, outcome) == Resolution::Applied {
                        self.status = match self.controller.state() {
                            SubmissionState::Success(_) => "Report ready".to_string(),
                            _ => "Submission failed".to_string(),
                        };
                    }
                }
            }
        }
    }

    fn try_submit(&mut self) {
        if self.controller.is_submitting() {
            return;
        }

        let ticket = match self.controller.begin(&self.form) {
            Ok(ticket) => ticket,
            Err(err) => {
                self.status_banner = Some(StatusBanner {
                    severity: StatusBannerSeverity::Error,
                    message: UiError::validation(&err).message().to_string(),
                });
                return;
            }
        };

        self.status_banner = None;
        let generation = ticket.generation;
        if dispatch_backend_command(&self.cmd_tx, BackendCommand::Submit(ticket), &mut self.status)
        {
            self.status = "Analyzing & optimizing...".to_string();
        } else {
            self.controller.resolve(
                generation,
                Err(SubmissionError::transport(self.status.clone())),
            );
        }
    }

    fn copy_to_clipboard(&mut self, text: String) {
        let copied = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
        self.status_banner = Some(match copied {
            Ok(()) => StatusBanner {
                severity: StatusBannerSeverity::Notice,
                message: "Creative copied to clipboard".to_string(),
            },
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err}");
                StatusBanner {
                    severity: StatusBannerSeverity::Error,
                    message: format!("Could not copy to clipboard: {err}"),
                }
            }
        });
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.label(
                egui::RichText::new("Ad Creative Optimizer")
                    .size(34.0)
                    .strong()
                    .color(widgets::ACCENT),
            );
            ui.label(
                egui::RichText::new(
                    "AI-powered analysis of your Facebook & Google Ads performance with optimized creative recommendations",
                )
                .weak(),
            );
            ui.add_space(16.0);
        });
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        let mut submit_requested = false;

        widgets::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            widgets::section_heading(ui, "Configuration");

            let endpoint = widgets::labeled_text_field(
                ui,
                "endpoint_input",
                "n8n Webhook URL",
                ENDPOINT_HINT,
                &mut self.form.endpoint,
            );
            submit_requested |= enter_pressed(ui, &endpoint);
            ui.label(
                egui::RichText::new("Get this from your n8n workflow's Webhook Trigger node")
                    .small()
                    .weak(),
            );
            ui.add_space(10.0);

            ui.label(egui::RichText::new("Ad Platform").strong());
            ui.columns(Platform::ALL.len(), |columns| {
                for (column, platform) in columns.iter_mut().zip(Platform::ALL) {
                    let text = format!("{}\n{}", platform.label(), platform.subtitle());
                    let selected = self.form.platform == platform;
                    let button = egui::Button::new(text)
                        .selected(selected)
                        .min_size(egui::vec2(column.available_width(), 48.0));
                    if column.add(button).clicked() {
                        self.form.platform = platform;
                    }
                }
            });
            ui.add_space(10.0);

            let hint = self.form.account_id_hint();
            let account = widgets::labeled_text_field(
                ui,
                "account_id_input",
                "Account ID",
                hint,
                &mut self.form.account_id,
            );
            submit_requested |= enter_pressed(ui, &account);
            ui.add_space(10.0);

            ui.columns(2, |columns| {
                date_field(&mut columns[0], "start_date", "Start Date", &mut self.form.start_date);
                date_field(&mut columns[1], "end_date", "End Date", &mut self.form.end_date);
            });
            ui.add_space(14.0);

            let submitting = self.controller.is_submitting();
            let enabled = self.controller.can_submit(&self.form);
            ui.horizontal(|ui| {
                let label = if submitting {
                    "Analyzing & Optimizing..."
                } else {
                    "Optimize My Ads"
                };
                let button = egui::Button::new(egui::RichText::new(label).strong().size(16.0))
                    .min_size(egui::vec2(220.0, 40.0));
                if ui.add_enabled(enabled, button).clicked() {
                    submit_requested = true;
                }
                if submitting {
                    ui.spinner();
                }
            });
        });

        if submit_requested {
            self.try_submit();
        }
    }

    fn show_error_banner(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.controller.error_message().map(str::to_string) else {
            return;
        };

        ui.add_space(12.0);
        banner_frame(StatusBannerSeverity::Error).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("Error").strong().color(egui::Color32::WHITE));
                    ui.label(egui::RichText::new(&message).color(egui::Color32::WHITE));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        self.controller.dismiss();
                    }
                });
            });
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            ui.add_space(12.0);
            banner_frame(banner.severity).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.status_banner = None;
                        }
                    });
                });
            });
        }
    }

    fn show_report(&mut self, ui: &mut egui::Ui) {
        let Some(view) = ReportView::from_state(self.controller.state()) else {
            return;
        };
        ui.add_space(16.0);
        if let Some(text) = panels::show_report(ui, &view) {
            self.copy_to_clipboard(text);
        }
    }
}

fn enter_pressed(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

fn date_field(ui: &mut egui::Ui, id: &'static str, label: &str, slot: &mut Option<NaiveDate>) {
    ui.label(egui::RichText::new(label).strong());
    ui.horizontal(|ui| {
        let mut draft = slot.unwrap_or_else(|| Local::now().date_naive());
        let response = ui.add(egui_extras::DatePickerButton::new(&mut draft).id_salt(id));
        if response.changed() {
            *slot = Some(draft);
        }
        if slot.is_some() {
            if ui.small_button("Clear").clicked() {
                *slot = None;
            }
        } else {
            ui.label(egui::RichText::new("not selected").weak());
        }
    });
}

fn banner_frame(severity: StatusBannerSeverity) -> egui::Frame {
    let (fill, stroke) = match severity {
        StatusBannerSeverity::Error => (
            egui::Color32::from_rgb(111, 53, 53),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
        ),
        StatusBannerSeverity::Notice => (
            egui::Color32::from_rgb(46, 84, 66),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(92, 150, 118)),
        ),
    };
    egui::Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
}

fn show_footer(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Powered by").weak());
        ui.hyperlink_to("n8n", "https://n8n.io");
        ui.label("•");
        ui.hyperlink_to("Gemini AI", "https://ai.google.dev");
        ui.label("•");
        ui.hyperlink_to("egui", "https://www.egui.rs");
    });
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.status).small());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), show_footer);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.show_header(ui);
                    self.show_form(ui);
                    self.show_error_banner(ui);
                    self.show_status_banner(ui);
                    self.show_report(ui);
                });
        });

        if self.controller.is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
