use super::toast::ToastKind;
use super::DatasetLoader;
use crate::utils::color::Palette;
use crate::utils::file_size::FileSizeUtils;
use crate::utils::html_text;
use eframe::egui::{self, Align2, Color32, RichText};

enum UiAction {
    OpenChooser,
    ClearSelection,
    Submit,
    ToggleRawVisual,
    DismissToast(usize),
}

impl DatasetLoader {
    pub fn render(&mut self, ctx: &egui::Context) {
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Dataset Loader").color(Palette::accent()));
                ui.add_space(5.0);
                ui.label(
                    RichText::new(format!("Upload a dataset to {}", self.uploader.url()))
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
            });

            ui.add_space(20.0);
            self.render_file_input(ui, &mut actions);
            ui.add_space(20.0);

            ui.vertical_centered(|ui| {
                let button =
                    egui::Button::new("📤 Load Dataset").min_size(egui::vec2(200.0, 40.0));
                if ui.add_enabled(self.widget.upload_enabled(), button).clicked() {
                    actions.push(UiAction::Submit);
                }

                if self.widget.spinner_visible() {
                    ui.add_space(8.0);
                    ui.add(egui::Spinner::new().color(Palette::accent()));
                }
            });

            if !self.widget.visual().is_empty() {
                ui.add_space(20.0);
                self.render_visual(ui, &mut actions);
            }
        });

        self.render_toasts(ctx, &mut actions);

        for action in actions {
            self.apply(action);
        }
    }

    fn render_file_input(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let enabled = self.widget.input_enabled();

        ui.group(|ui| {
            ui.horizontal(|ui| {
                let icon = egui::Button::new(RichText::new("📂").size(20.0)).frame(false);
                if ui
                    .add_enabled(enabled, icon)
                    .on_hover_text("Choose a dataset file")
                    .clicked()
                {
                    actions.push(UiAction::OpenChooser);
                }

                match self.widget.selection() {
                    Some(file) => {
                        ui.label(self.widget.file_name())
                            .on_hover_text(FileSizeUtils::format_size(file.size));
                        if ui
                            .add_enabled(enabled, egui::Button::new("✖").small())
                            .on_hover_text("Clear selection")
                            .clicked()
                        {
                            actions.push(UiAction::ClearSelection);
                        }
                    }
                    None => {
                        ui.label(RichText::new("No file chosen").weak());
                    }
                }
            });
        });
    }

    fn render_visual(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Upload report").strong());
                let toggle = if self.show_raw_visual {
                    "Show Text"
                } else {
                    "Show HTML"
                };
                if ui.small_button(toggle).clicked() {
                    actions.push(UiAction::ToggleRawVisual);
                }
            });

            ui.add_space(6.0);
            egui::ScrollArea::vertical()
                .max_height(250.0)
                .show(ui, |ui| {
                    egui::Frame::none()
                        .fill(ui.style().visuals.extreme_bg_color)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            let text = if self.show_raw_visual {
                                self.widget.visual().to_string()
                            } else {
                                html_text::to_plain_text(self.widget.visual())
                            };
                            ui.label(RichText::new(text).monospace());
                        });
                });
        });
    }

    fn render_toasts(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        if self.widget.toasts().is_empty() {
            return;
        }

        egui::Area::new("toasts")
            .anchor(Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.set_max_width(320.0);
                for (index, toast) in self.widget.toasts().iter().enumerate() {
                    let fill = match toast.kind {
                        ToastKind::Success => Palette::success(),
                        ToastKind::Error => Palette::error(),
                    };

                    let response = egui::Frame::none()
                        .fill(fill)
                        .rounding(6.0)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if let Some(title) = &toast.title {
                                ui.label(RichText::new(title).strong().color(Color32::WHITE));
                            }
                            if !toast.message.is_empty() {
                                ui.label(RichText::new(&toast.message).color(Color32::WHITE));
                            }
                        })
                        .response;

                    // click to close
                    if response.interact(egui::Sense::click()).clicked() {
                        actions.push(UiAction::DismissToast(index));
                    }
                    ui.add_space(6.0);
                }
            });
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::OpenChooser => self.open_file_chooser(),
            UiAction::ClearSelection => self.clear_selection(),
            UiAction::Submit => {
                self.submit_upload();
            }
            UiAction::ToggleRawVisual => self.show_raw_visual = !self.show_raw_visual,
            UiAction::DismissToast(index) => self.widget.toasts_mut().dismiss(index),
        }
    }
}
