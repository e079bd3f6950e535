use eframe::egui::{
    self,
    text::LayoutJob,
    FontId,
    TextFormat,
};
use egui_extras::{
    Column,
    TableBuilder,
};

use super::theme::Theme;
use crate::{
    core::TenseKind,
    morphology::{
        canonical_root,
        conjugate,
        display_pattern,
        examples,
        form_catalog,
        VerbForm,
    },
};

// Tense columns right-to-left, mirroring how the classical reference table
// is read.
const COLUMN_ORDER: [TenseKind; 8] = [
    TenseKind::PassiveParticiple,
    TenseKind::ActiveParticiple,
    TenseKind::VerbalNoun,
    TenseKind::PassiveImperfect,
    TenseKind::PassivePerfect,
    TenseKind::Imperative,
    TenseKind::Imperfect,
    TenseKind::Perfect,
];

/// Overlay window with all ten measures conjugated for the canonical root.
pub struct ReferenceTable {
    pub open: bool,
    pub color_coding: bool,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self { open: false, color_coding: false }
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if !self.open {
            return;
        }

        let mut open = self.open;
        egui::Window::new("Verb Form Reference")
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_size(egui::Vec2::new(980.0, 560.0))
            .show(ctx, |ui| {
                ui.checkbox(&mut self.color_coding, "Highlight templatic additions");
                ui.add_space(8.0);
                egui::ScrollArea::both().show(ui, |ui| {
                    self.table(ui, theme);
                });
            });
        self.open = open;
    }

    fn table(&self, ui: &mut egui::Ui, theme: &Theme) {
        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
        for _ in COLUMN_ORDER {
            builder = builder.column(Column::auto().at_least(92.0));
        }

        builder
            .column(Column::auto().at_least(72.0))
            .header(25.0, |mut header| {
                for tense in COLUMN_ORDER {
                    header.col(|ui| {
                        ui.label(theme.heading(tense.short_label()));
                    });
                }
                header.col(|ui| {
                    ui.label(theme.heading("Form"));
                });
            })
            .body(|mut body| {
                body.rows(30.0, form_catalog().len(), |mut row| {
                    let form = &form_catalog()[row.index()];
                    for tense in COLUMN_ORDER {
                        row.col(|ui| {
                            self.pattern_cell(ui, form, tense, theme);
                        });
                    }
                    row.col(|ui| {
                        ui.label(theme.bold(form.name)).on_hover_text(form.description);
                    });
                });
            });
    }

    fn pattern_cell(&self, ui: &mut egui::Ui, form: &VerbForm, tense: TenseKind, theme: &Theme) {
        let pattern = match display_pattern(form, tense, None) {
            Some(pattern) => pattern,
            None => {
                ui.label(egui::RichText::new("—").color(theme.comment()));
                return;
            }
        };

        // The canonical root is a fixed point of substitution, so this
        // reproduces the pattern; conjugating anyway keeps the cell honest
        // about what the engine would emit.
        let root = canonical_root();
        let word = conjugate(&root.letters, pattern).unwrap_or_else(|_| pattern.to_string());

        let response = if self.color_coding {
            ui.label(color_coded(&word, ui, theme))
        } else {
            ui.label(egui::RichText::new(word.as_str()).size(18.0))
        };

        let samples = examples(form.number, tense);
        if !samples.is_empty() {
            response.on_hover_ui(|ui| {
                ui.label(theme.heading("Examples"));
                for example in &samples {
                    ui.label(format!(
                        "{}  ({}, {})",
                        example.word, example.root_display, example.gloss
                    ));
                }
            });
        }
    }
}

impl Default for ReferenceTable {
    fn default() -> Self {
        Self::new()
    }
}

fn color_coded(word: &str, ui: &egui::Ui, theme: &Theme) -> LayoutJob {
    let base_color = ui.visuals().text_color();
    let font_id = FontId::proportional(18.0);

    let mut job = LayoutJob::default();
    for (run, is_root) in addition_runs(word) {
        let color = if is_root { base_color } else { theme.red() };
        job.append(&run, 0.0, TextFormat { font_id: font_id.clone(), color, ..Default::default() });
    }
    job
}

/// Split a conjugated word into alternating runs of root letters and
/// templatic additions (prefixes, infixes and diacritics). Runs, not single
/// glyphs, so Arabic letter joining survives inside each highlighted span.
/// Presentation only; no conjugation logic.
fn addition_runs(word: &str) -> Vec<(String, bool)> {
    let mut runs: Vec<(String, bool)> = Vec::new();

    for glyph in word.chars() {
        let is_root = matches!(glyph, 'ف' | 'ع' | 'ل');
        match runs.last_mut() {
            Some((run, root)) if *root == is_root => run.push(glyph),
            _ => runs.push((glyph.to_string(), is_root)),
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_runs_alternate_and_reassemble() {
        let word = "اِنْفَعَلَ";
        let runs = addition_runs(word);

        let rebuilt: String = runs.iter().map(|(run, _)| run.as_str()).collect();
        assert_eq!(rebuilt, word);

        for pair in runs.windows(2) {
            assert_ne!(pair[0].1, pair[1].1, "adjacent runs must alternate");
        }

        let root_runs: Vec<&str> =
            runs.iter().filter(|(_, is_root)| *is_root).map(|(run, _)| run.as_str()).collect();
        assert_eq!(root_runs, ["ف", "ع", "ل"]);
        assert!(!runs[0].1, "the اِنْ prefix is a templatic addition");
    }

    #[test]
    fn test_diacritics_count_as_additions() {
        let runs = addition_runs("فَعَّلَ");
        // ف + fatha + ع + fatha/shadda + ل + fatha
        assert_eq!(runs.len(), 6);
        assert_eq!(runs[0], ("ف".to_string(), true));
        assert_eq!(runs[1], ("\u{64E}".to_string(), false));
        assert_eq!(runs[3], ("\u{64E}\u{651}".to_string(), false));
    }
}
