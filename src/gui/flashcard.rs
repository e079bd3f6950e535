use eframe::egui;

use super::theme::Theme;
use crate::{
    core::PracticeCard,
    practice::{
        CardPhase,
        Score,
    },
};

pub enum CardAction {
    Reveal,
    Mark(bool),
    Next,
}

/// Draw the current flashcard. Returns the control action the user took,
/// if any; keyboard shortcuts map to the same actions in the app shell.
pub fn show(
    ui: &mut egui::Ui,
    card: &PracticeCard,
    index: usize,
    total: usize,
    score: Score,
    phase: CardPhase,
    theme: &Theme,
) -> Option<CardAction> {
    let mut action = None;

    egui::Sides::new().show(
        ui,
        |ui| {
            ui.label(format!("Card {} of {}", index + 1, total));
        },
        |ui| {
            ui.label(format!("Score: {}/{}", score.correct, score.total));
        },
    );

    ui.add_space(32.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(card.question.word.as_str()).size(64.0).strong());
    });
    ui.add_space(24.0);

    if !matches!(phase, CardPhase::Prompt) {
        ui.vertical_centered(|ui| {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                egui::Grid::new("answer_grid").num_columns(2).spacing([24.0, 6.0]).show(
                    ui,
                    |ui| {
                        ui.label(theme.bold("Root"));
                        ui.label(
                            egui::RichText::new(card.answer.root_display.as_str()).size(20.0),
                        );
                        ui.end_row();

                        ui.label(theme.bold("Form"));
                        ui.label(format!(
                            "{} ({})",
                            card.answer.form_name, card.answer.form_description
                        ));
                        ui.end_row();

                        ui.label(theme.bold("Type"));
                        ui.label(card.answer.tense_name.as_str());
                        ui.end_row();

                        ui.label(theme.bold("Pattern"));
                        ui.label(egui::RichText::new(card.answer.pattern.as_str()).size(20.0));
                        ui.end_row();

                        ui.label(theme.bold("Meaning"));
                        ui.label(card.answer.gloss.as_str());
                        ui.end_row();
                    },
                );
            });
        });
        ui.add_space(16.0);
    }

    ui.vertical_centered(|ui| match phase {
        CardPhase::Prompt => {
            if ui.button("Reveal Answer (Space)").clicked() {
                action = Some(CardAction::Reveal);
            }
        }
        CardPhase::Revealed => {
            ui.horizontal(|ui| {
                if ui
                    .button(egui::RichText::new("Correct (1)").color(theme.green()))
                    .clicked()
                {
                    action = Some(CardAction::Mark(true));
                }
                if ui
                    .button(egui::RichText::new("Incorrect (0)").color(theme.red()))
                    .clicked()
                {
                    action = Some(CardAction::Mark(false));
                }
            });
        }
        CardPhase::Marked => {
            if ui.button("Next (Space)").clicked() {
                action = Some(CardAction::Next);
            }
        }
    });

    action
}
