use eframe::egui;
use sarf::gui::SarfApp;

fn main() -> eframe::Result {
    println!("Keyboard shortcuts:");
    println!("  Space/Enter: reveal answer or next card");
    println!("  1: mark correct, 0: mark incorrect");
    println!("  R: reference table, Escape: back to settings");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 680.0])
            .with_title("Sarf - Arabic Verb Forms Practice"),
        ..Default::default()
    };

    eframe::run_native(
        "Sarf - Arabic Verb Forms Practice",
        options,
        Box::new(|cc| Ok(Box::new(SarfApp::new(cc)))),
    )
}
