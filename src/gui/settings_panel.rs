use eframe::egui;

use super::{
    app::PracticeSelection,
    theme::Theme,
};
use crate::{
    core::TenseKind,
    morphology::form_catalog,
    practice::LearningMode,
};

/// Draw the session setup screen. Returns true when the start button was
/// clicked.
pub fn show(
    ui: &mut egui::Ui,
    selection: &mut PracticeSelection,
    theme: &Theme,
    notice: Option<&str>,
) -> bool {
    let mut start = false;

    ui.heading(theme.heading("Practice Settings"));
    ui.add_space(12.0);

    ui.label(theme.bold("Verb forms"));
    egui::Grid::new("form_grid").num_columns(2).spacing([24.0, 4.0]).show(ui, |ui| {
        for form in form_catalog() {
            let index = (form.number - 1) as usize;
            ui.checkbox(&mut selection.forms[index], form.name)
                .on_hover_text(form.description);
            if form.number % 2 == 0 {
                ui.end_row();
            }
        }
    });

    ui.add_space(12.0);
    ui.label(theme.bold("Conjugation types"));
    egui::Grid::new("tense_grid").num_columns(2).spacing([24.0, 4.0]).show(ui, |ui| {
        for (index, tense) in TenseKind::ALL.iter().enumerate() {
            ui.checkbox(&mut selection.tenses[index], tense.short_label());
            if index % 2 == 1 {
                ui.end_row();
            }
        }
    });

    ui.add_space(12.0);
    ui.label(theme.bold("Learning mode"));
    ui.horizontal(|ui| {
        ui.radio_value(&mut selection.mode, LearningMode::Mixed, "Mixed roots")
            .on_hover_text("Draw real roots from the catalog");
        ui.radio_value(&mut selection.mode, LearningMode::Patterns, "Patterns only")
            .on_hover_text("Drill the bare templates with the ف-ع-ل placeholder root");
    });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.label(theme.bold("Cards per session"));
        ui.add(egui::Slider::new(&mut selection.card_count, 5..=50));
    });

    if let Some(notice) = notice {
        ui.add_space(12.0);
        ui.colored_label(theme.red(), notice);
    }

    ui.add_space(16.0);
    if ui.button(egui::RichText::new("Start Practice").strong()).clicked() {
        start = true;
    }

    start
}
