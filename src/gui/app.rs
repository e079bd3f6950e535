use eframe::egui;

use super::{
    feedback::FeedbackFlash,
    flashcard::{
        self,
        CardAction,
    },
    reference_table::ReferenceTable,
    results::{
        self,
        ResultsAction,
    },
    settings_panel,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    core::TenseKind,
    practice::{
        build_session,
        CardPhase,
        LearningMode,
        Session,
        SessionState,
        DEFAULT_CARD_COUNT,
    },
};

/// What the settings screen has checked off. Translated to engine inputs
/// when a session starts.
pub struct PracticeSelection {
    pub forms: [bool; 10],
    pub tenses: [bool; 8],
    pub mode: LearningMode,
    pub card_count: usize,
}

impl Default for PracticeSelection {
    fn default() -> Self {
        Self {
            forms: [true; 10],
            tenses: [true; 8],
            mode: LearningMode::Mixed,
            card_count: DEFAULT_CARD_COUNT,
        }
    }
}

impl PracticeSelection {
    pub fn selected_forms(&self) -> Vec<u8> {
        self.forms
            .iter()
            .enumerate()
            .filter(|(_, selected)| **selected)
            .map(|(index, _)| index as u8 + 1)
            .collect()
    }

    pub fn selected_tenses(&self) -> Vec<TenseKind> {
        TenseKind::ALL
            .iter()
            .zip(self.tenses.iter())
            .filter(|(_, selected)| **selected)
            .map(|(tense, _)| *tense)
            .collect()
    }
}

enum Screen {
    Settings,
    Practice,
    Results,
}

pub struct SarfApp {
    screen: Screen,
    selection: PracticeSelection,
    session: Option<Session>,
    state: SessionState,
    theme: Theme,
    reference: ReferenceTable,
    feedback: FeedbackFlash,
    notice: Option<String>,
}

impl SarfApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        setup_fonts(&cc.egui_ctx);

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, theme.clone());
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        Self {
            screen: Screen::Settings,
            selection: PracticeSelection::default(),
            session: None,
            state: SessionState::new(),
            theme,
            reference: ReferenceTable::new(),
            feedback: FeedbackFlash::new(),
            notice: None,
        }
    }

    fn start_session(&mut self) {
        let forms = self.selection.selected_forms();
        let tenses = self.selection.selected_tenses();

        // Engine precondition: the UI rejects empty selections itself.
        if forms.is_empty() {
            self.notice = Some("Please select at least one verb form.".to_string());
            self.screen = Screen::Settings;
            return;
        }
        if tenses.is_empty() {
            self.notice = Some("Please select at least one conjugation type.".to_string());
            self.screen = Screen::Settings;
            return;
        }

        match build_session(&forms, &tenses, self.selection.mode, self.selection.card_count) {
            Ok(session) => {
                println!("Starting session with {} cards", session.len());
                self.session = Some(session);
                self.state = SessionState::new();
                self.notice = None;
                self.screen = Screen::Practice;
            }
            Err(error) => {
                self.notice = Some(error.to_string());
                self.screen = Screen::Settings;
            }
        }
    }

    fn back_to_settings(&mut self) {
        self.screen = Screen::Settings;
        self.session = None;
        self.state = SessionState::new();
    }

    fn apply_card_action(&mut self, action: CardAction) {
        let card_count = match &self.session {
            Some(session) => session.len(),
            None => return,
        };

        match action {
            CardAction::Reveal => {
                self.state = self.state.reveal();
            }
            CardAction::Mark(correct) => {
                let was_revealed = self.state.phase == CardPhase::Revealed;
                self.state = self.state.mark(correct);
                if was_revealed {
                    if correct {
                        self.feedback.flash("Correct! ✓", true);
                    } else {
                        self.feedback.flash("Keep practicing! ✗", false);
                    }
                }
            }
            CardAction::Next => {
                self.state = self.state.advance();
                if self.state.finished(card_count) {
                    self.screen = Screen::Results;
                }
            }
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // The reference overlay swallows everything except its close key.
        if self.reference.open {
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.reference.open = false;
            }
            return;
        }

        if !matches!(self.screen, Screen::Practice) {
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Space) || i.key_pressed(egui::Key::Enter)) {
            match self.state.phase {
                CardPhase::Prompt => self.apply_card_action(CardAction::Reveal),
                CardPhase::Marked => self.apply_card_action(CardAction::Next),
                CardPhase::Revealed => {}
            }
        }
        if self.state.phase == CardPhase::Revealed {
            if ctx.input(|i| i.key_pressed(egui::Key::Num1)) {
                self.apply_card_action(CardAction::Mark(true));
            } else if ctx.input(|i| i.key_pressed(egui::Key::Num0)) {
                self.apply_card_action(CardAction::Mark(false));
            }
        }
        if ctx.input(|i| i.key_pressed(egui::Key::R)) {
            self.reference.open = true;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.back_to_settings();
        }
    }
}

impl eframe::App for SarfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.theme.heading("Sarf"));
                ui.label("Arabic Verb Forms Practice");
                ui.separator();

                if ui.button("Reference (R)").clicked() {
                    self.reference.open = !self.reference.open;
                }
                if matches!(self.screen, Screen::Practice) {
                    if ui.button("New Session").clicked() {
                        self.start_session();
                    }
                    if ui.button("Settings (Esc)").clicked() {
                        self.back_to_settings();
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Settings => {
                let start = settings_panel::show(
                    ui,
                    &mut self.selection,
                    &self.theme,
                    self.notice.as_deref(),
                );
                if start {
                    self.start_session();
                }
            }
            Screen::Practice => {
                let mut action = None;
                if let Some(session) = &self.session {
                    if let Some(card) = session.card(self.state.index) {
                        action = flashcard::show(
                            ui,
                            card,
                            self.state.index,
                            session.len(),
                            self.state.score,
                            self.state.phase,
                            &self.theme,
                        );
                    }
                }
                if let Some(action) = action {
                    self.apply_card_action(action);
                }
            }
            Screen::Results => match results::show(ui, self.state.score, &self.theme) {
                Some(ResultsAction::PracticeAgain) => self.start_session(),
                Some(ResultsAction::BackToSettings) => self.back_to_settings(),
                None => {}
            },
        });

        self.reference.show(ctx, &self.theme);
        self.feedback.show(ctx, &self.theme);
    }
}

/// Best-effort Arabic font setup. Unlike bundled fonts this searches common
/// system locations; when nothing is found egui's defaults are left alone
/// and Arabic text may render as placeholder boxes.
fn setup_fonts(ctx: &egui::Context) {
    const CANDIDATES: [&str; 7] = [
        "/usr/share/fonts/truetype/noto/NotoNaskhArabic-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansArabic-Regular.ttf",
        "/usr/share/fonts/noto/NotoNaskhArabic-Regular.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/Library/Fonts/Arial Unicode.ttf",
        "C:\\Windows\\Fonts\\tahoma.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    for path in CANDIDATES {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => continue,
        };

        let mut fonts = egui::FontDefinitions::default();
        fonts
            .font_data
            .insert("arabic".to_owned(), std::sync::Arc::new(egui::FontData::from_owned(bytes)));
        fonts
            .families
            .entry(egui::FontFamily::Proportional)
            .or_default()
            .insert(0, "arabic".to_owned());
        fonts.families.entry(egui::FontFamily::Monospace).or_default().push("arabic".to_owned());
        ctx.set_fonts(fonts);

        println!("Loaded Arabic font: {}", path);
        return;
    }

    eprintln!("No Arabic-capable font found; Arabic text may not render correctly.");
}
