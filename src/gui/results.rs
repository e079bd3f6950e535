use eframe::egui;

use super::theme::Theme;
use crate::practice::Score;

pub enum ResultsAction {
    PracticeAgain,
    BackToSettings,
}

pub fn show(ui: &mut egui::Ui, score: Score, theme: &Theme) -> Option<ResultsAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading(theme.heading("Session Complete"));
        ui.add_space(24.0);

        ui.label(
            egui::RichText::new(format!("{}/{}", score.correct, score.total)).size(48.0).strong(),
        );
        ui.label(format!("Accuracy: {}%", score.accuracy_percent()));
        ui.label(format!("Cards completed: {}", score.total));

        ui.add_space(32.0);
        ui.horizontal(|ui| {
            // Rough centering for the two buttons.
            ui.add_space(ui.available_width() / 2.0 - 120.0);
            if ui.button("Practice Again").clicked() {
                action = Some(ResultsAction::PracticeAgain);
            }
            if ui.button("Back to Settings").clicked() {
                action = Some(ResultsAction::BackToSettings);
            }
        });
    });

    action
}
