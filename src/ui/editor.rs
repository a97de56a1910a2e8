//! Create/edit panel: the document form plus every document as a card

use super::document_card;
use crate::app::DocManagerApp;
use crate::core::storage::KeyValueStorage;

/// Create/edit panel
pub struct EditorPanel;

impl EditorPanel {
    /// Show the editor panel
    pub fn show<S: KeyValueStorage>(ui: &mut egui::Ui, app: &mut DocManagerApp<S>) {
        ui.vertical(|ui| {
            Self::show_form(ui, app);
            ui.add_space(12.0);
            ui.separator();

            let mut action = None;
            egui::ScrollArea::vertical()
                .id_salt("editor_cards_scroll")
                .show(ui, |ui| {
                    if app.store.documents().is_empty() {
                        ui.label("No documents yet.");
                    }
                    for doc in app.store.documents() {
                        let is_editing = app.form.editing == Some(doc.id);
                        if let Some(a) = document_card::show_editable(ui, doc, is_editing) {
                            action = Some(a);
                        }
                    }
                });

            if let Some(action) = action {
                app.apply(action);
            }
        });
    }

    /// Title/content inputs and the submit button
    fn show_form<S: KeyValueStorage>(ui: &mut egui::Ui, app: &mut DocManagerApp<S>) {
        ui.add(
            egui::TextEdit::singleline(&mut app.form.title)
                .hint_text("Enter your document title")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);
        ui.add(
            egui::TextEdit::multiline(&mut app.form.content)
                .hint_text("Content")
                .font(egui::TextStyle::Monospace)
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let label = if app.form.is_editing() {
                "Update Documentation"
            } else {
                "Add Documentation"
            };
            if ui.button(label).on_hover_text("Ctrl+Enter").clicked() {
                app.submit_form();
            }
            if app.form.is_editing() && ui.button("Cancel").clicked() {
                app.form.clear();
            }
        });
    }
}
