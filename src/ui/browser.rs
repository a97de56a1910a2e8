//! Browse panel: title search and a read-only document view

use super::document_card;
use crate::app::{CardAction, DocManagerApp};
use crate::core::storage::KeyValueStorage;

/// Browse/search panel
pub struct BrowserPanel;

impl BrowserPanel {
    /// Show the browse panel
    pub fn show<S: KeyValueStorage>(ui: &mut egui::Ui, app: &mut DocManagerApp<S>) {
        let mut term = app.browse.term.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut term)
                .hint_text("Search by title...")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            app.browse.set_term(term);
        }
        ui.add_space(8.0);

        let mut action = None;
        egui::ScrollArea::vertical()
            .id_salt("browse_scroll")
            .show(ui, |ui| {
                if let Some(doc) = app.browse.active_document(&app.store) {
                    ui.label(document_card::title_text(doc, 24.0));
                    ui.add_space(8.0);
                    ui.label(&doc.content);
                    ui.add_space(8.0);
                    document_card::completed_marker(ui, doc);
                    if ui.link("\u{2190} Back to list").clicked() {
                        action = Some(Navigation::Back);
                    }
                    return;
                }

                let mut any = false;
                for doc in app.store.search(&app.browse.term) {
                    any = true;
                    if let Some(a) = document_card::show_summary(ui, doc) {
                        action = Some(Navigation::Card(a));
                    }
                }
                if !any {
                    ui.weak("No matching documents found.");
                }
            });

        match action {
            Some(Navigation::Back) => app.browse.close(),
            Some(Navigation::Card(a)) => app.apply(a),
            None => {}
        }
    }
}

enum Navigation {
    Back,
    Card(CardAction),
}
