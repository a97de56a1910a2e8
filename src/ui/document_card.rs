//! Document cards shared by both panels

use crate::app::CardAction;
use crate::core::document::{Document, DocumentState};

const COMPLETED_COLOR: egui::Color32 = egui::Color32::from_rgb(152, 195, 121);
const EDIT_COLOR: egui::Color32 = egui::Color32::from_rgb(129, 162, 190);
const DELETE_COLOR: egui::Color32 = egui::Color32::from_rgb(224, 108, 117);

/// Title styled by completion state
pub fn title_text(doc: &Document, size: f32) -> egui::RichText {
    let text = egui::RichText::new(&doc.title).strong().size(size);
    match doc.state() {
        DocumentState::Completed => text.strikethrough().weak(),
        DocumentState::Active => text,
    }
}

pub fn completed_marker(ui: &mut egui::Ui, doc: &Document) {
    if doc.state() == DocumentState::Completed {
        ui.colored_label(COMPLETED_COLOR, "\u{2714} Completed");
    }
}

/// Card with Edit / Delete / Complete actions
pub fn show_editable(ui: &mut egui::Ui, doc: &Document, is_editing: bool) -> Option<CardAction> {
    let mut action = None;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(title_text(doc, 18.0));
            if is_editing {
                ui.weak("(editing)");
            }
        });
        ui.add_space(4.0);
        ui.label(&doc.content);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui
                .button(egui::RichText::new("Edit").color(EDIT_COLOR))
                .clicked()
            {
                action = Some(CardAction::Edit(doc.id));
            }
            if ui
                .button(egui::RichText::new("Delete").color(DELETE_COLOR))
                .clicked()
            {
                action = Some(CardAction::Delete(doc.id));
            }
            let toggle_label = match doc.state() {
                DocumentState::Completed => "Undo",
                DocumentState::Active => "Complete",
            };
            if ui
                .button(egui::RichText::new(toggle_label).color(COMPLETED_COLOR))
                .clicked()
            {
                action = Some(CardAction::ToggleCompleted(doc.id));
            }
        });

        completed_marker(ui, doc);
    });
    ui.add_space(6.0);

    action
}

/// Read-only summary card; clicking it opens the document
pub fn show_summary(ui: &mut egui::Ui, doc: &Document) -> Option<CardAction> {
    let response = egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(title_text(doc, 18.0));
            ui.add_space(4.0);
            ui.label(preview(&doc.content, 3));
            completed_marker(ui, doc);
        })
        .response
        .interact(egui::Sense::click());
    ui.add_space(6.0);

    if response.clicked() {
        Some(CardAction::Open(doc.id))
    } else {
        None
    }
}

/// First `max_lines` lines of `content`, with an ellipsis if cut
fn preview(content: &str, max_lines: usize) -> String {
    let mut lines = content.lines();
    let shown: Vec<&str> = lines.by_ref().take(max_lines).collect();
    if lines.next().is_some() {
        let mut text = shown.join("\n");
        text.push('\u{2026}');
        return text;
    }
    shown.join("\n")
}
