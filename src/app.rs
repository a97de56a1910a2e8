//! Main application state and UI coordination

use crate::core::config::{AppConfig, StartView};
use crate::core::document::{Document, DocumentId};
use crate::core::error::StoreResult;
use crate::core::storage::KeyValueStorage;
use crate::core::store::{DocumentStore, Upsert};
use crate::ui::{browser::BrowserPanel, editor::EditorPanel};

/// Which surface is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Edit,
    Browse,
}

impl From<StartView> for View {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Edit => View::Edit,
            StartView::Browse => View::Browse,
        }
    }
}

/// Uncommitted fields of the create/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    pub title: String,
    pub content: String,
    /// Document being edited, `None` when creating
    pub editing: Option<DocumentId>,
}

impl EditForm {
    /// Load a document into the form for editing
    pub fn begin_edit(&mut self, doc: &Document) {
        self.title = doc.title.clone();
        self.content = doc.content.clone();
        self.editing = Some(doc.id);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Commit the form to the store. Clears the form unless the input was
    /// rejected.
    pub fn submit<S: KeyValueStorage>(&mut self, store: &mut DocumentStore<S>) -> StoreResult<Upsert> {
        let outcome = store.upsert(self.editing, &self.title, &self.content)?;
        if outcome != Upsert::Rejected {
            self.clear();
        }
        Ok(outcome)
    }
}

/// Search term and opened document of the browse surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseState {
    pub term: String,
    pub active: Option<DocumentId>,
}

impl BrowseState {
    /// Change the search term; closes any opened document
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.active = None;
    }

    pub fn open(&mut self, id: DocumentId) {
        self.active = Some(id);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// The opened document, if it still exists
    pub fn active_document<'a, S: KeyValueStorage>(
        &self,
        store: &'a DocumentStore<S>,
    ) -> Option<&'a Document> {
        self.active.and_then(|id| store.get(id))
    }
}

/// User action on a document card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Edit(DocumentId),
    Delete(DocumentId),
    ToggleCompleted(DocumentId),
    Open(DocumentId),
}

/// Main application state
pub struct DocManagerApp<S> {
    /// The document store, the only thing that touches storage
    pub store: DocumentStore<S>,
    pub view: View,
    pub form: EditForm,
    pub browse: BrowseState,
    /// Last error shown to the user
    pub status: Option<String>,
    pub config: AppConfig,
}

impl<S: KeyValueStorage> DocManagerApp<S> {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, store: DocumentStore<S>, config: AppConfig) -> Self {
        if config.dark_theme() {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        }
        Self::from_parts(store, config)
    }

    pub fn from_parts(store: DocumentStore<S>, config: AppConfig) -> Self {
        Self {
            store,
            view: config.ui.default_view.into(),
            form: EditForm::default(),
            browse: BrowseState::default(),
            status: None,
            config,
        }
    }

    /// Switch surface; the new surface sees freshly persisted state
    pub fn show_view(&mut self, view: View) {
        if self.view != view {
            self.store.reload();
            self.view = view;
        }
    }

    /// Submit the create/edit form
    pub fn submit_form(&mut self) {
        match self.form.submit(&mut self.store) {
            Ok(Upsert::Rejected) => {
                self.status = Some("Title and content are both required".to_string());
            }
            Ok(Upsert::NotFound(id)) => {
                tracing::warn!("Edited document {} no longer exists", id);
                self.status = Some("That document was deleted".to_string());
            }
            Ok(_) => self.status = None,
            Err(e) => self.report(e),
        }
    }

    /// Apply an action taken on a document card
    pub fn apply(&mut self, action: CardAction) {
        let result = match action {
            CardAction::Edit(id) => {
                if let Some(doc) = self.store.get(id) {
                    self.form.begin_edit(doc);
                }
                Ok(())
            }
            CardAction::Delete(id) => self.store.remove(id).map(|_| {
                if self.form.editing == Some(id) {
                    self.form.clear();
                }
                if self.browse.active == Some(id) {
                    self.browse.close();
                }
            }),
            CardAction::ToggleCompleted(id) => self.store.toggle_completed(id).map(|_| ()),
            CardAction::Open(id) => {
                self.browse.open(id);
                Ok(())
            }
        };

        match result {
            Ok(()) => self.status = None,
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, e: crate::core::error::StoreError) {
        tracing::error!("Store operation failed: {}", e);
        self.status = Some(format!("Could not save: {}", e));
    }

    /// Render the top navigation bar
    fn render_nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Documentation Manager");
                ui.separator();
                if ui.selectable_label(self.view == View::Edit, "Add / Edit").clicked() {
                    self.show_view(View::Edit);
                }
                if ui.selectable_label(self.view == View::Browse, "My Documents").clicked() {
                    self.show_view(View::Browse);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} documents", self.store.documents().len()));
                });
            });
        });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let Some(message) = self.status.clone() else {
            return;
        };
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::from_rgb(224, 108, 117), message);
                if ui.small_button("Dismiss").clicked() {
                    self.status = None;
                }
            });
        });
    }
}

impl<S: KeyValueStorage> eframe::App for DocManagerApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        let (to_edit, to_browse, submit) = ctx.input(|i| {
            (
                i.modifiers.ctrl && i.key_pressed(egui::Key::Num1),
                i.modifiers.ctrl && i.key_pressed(egui::Key::Num2),
                i.modifiers.ctrl && i.key_pressed(egui::Key::Enter),
            )
        });
        if to_edit {
            self.show_view(View::Edit);
        }
        if to_browse {
            self.show_view(View::Browse);
        }
        if submit && self.view == View::Edit {
            self.submit_form();
        }

        self.render_nav_bar(ctx);
        self.render_status(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            View::Edit => EditorPanel::show(ui, self),
            View::Browse => BrowserPanel::show(ui, self),
        });
    }
}
