use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use crate::gui::theme::Theme;

const FLASH_DURATION: Duration = Duration::from_secs(2);

/// Short-lived corner toast for "correct"/"incorrect" feedback.
pub struct FeedbackFlash {
    message: Option<(String, bool)>,
    shown_at: Option<Instant>,
}

impl FeedbackFlash {
    pub fn new() -> Self {
        Self { message: None, shown_at: None }
    }

    pub fn flash(&mut self, message: impl Into<String>, success: bool) {
        self.message = Some((message.into(), success));
        self.shown_at = Some(Instant::now());
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        let expired = self.shown_at.map(|at| at.elapsed() >= FLASH_DURATION).unwrap_or(true);
        if expired {
            self.message = None;
            self.shown_at = None;
            return;
        }

        if let Some((message, success)) = &self.message {
            let color = if *success { theme.green() } else { theme.red() };

            egui::Window::new("feedback_flash")
                .order(egui::Order::Foreground)
                .collapsible(false)
                .resizable(false)
                .title_bar(false)
                .anchor(egui::Align2::RIGHT_TOP, egui::Vec2::new(-16.0, 16.0))
                .show(ctx, |ui| {
                    ui.label(egui::RichText::new(message).color(color).strong());
                });

            // Keep repainting so the toast disappears without user input.
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

impl Default for FeedbackFlash {
    fn default() -> Self {
        Self::new()
    }
}
