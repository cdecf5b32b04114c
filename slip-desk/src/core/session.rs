//! Editing session
//!
//! Owns the form store and keeps both views (editable form and printable
//! slip) in the rendered document up to date with the latest snapshot.

use std::sync::Arc;
use std::time::Duration;

use shared::form::{Edit, FieldPath, FormChange, FormStore, FormSubscription};
use shared::models::ShipmentForm;
use shared::{FormResult, util};
use slip_printer::{ExportJob, ExportReport, PrintHost, PrintResult, ReceiptSource, SurfaceRequest};
use tracing::{debug, instrument};

use super::document::{FORM_ROOT, PRINTABLE_ROOT, RenderedDocument};
use crate::binding::{self, BindingError, InputEvent};
use crate::utils::form_view::FormView;
use crate::utils::receipt_renderer::ReceiptRenderer;
use crate::utils::stylesheet::RECEIPT_CSS;

#[derive(Debug)]
pub struct Session {
    store: FormStore,
    view: FormSubscription,
    document: RenderedDocument,
    logo_url: String,
}

impl Session {
    pub fn new(logo_url: impl Into<String>) -> Self {
        Self::with_form(ShipmentForm::default(), logo_url)
    }

    /// Start from an existing record
    pub fn with_form(form: ShipmentForm, logo_url: impl Into<String>) -> Self {
        let store = FormStore::with_form(form);
        let view = store.subscribe();
        let mut session = Self {
            store,
            view,
            document: RenderedDocument::new(),
            logo_url: logo_url.into(),
        };
        let form = session.view.current();
        session.render(&form);
        session
    }

    /// Apply one edit and re-render both views
    pub fn apply(&mut self, edit: Edit) -> FormChange {
        let change = self.store.update(edit);
        if let Some(form) = self.view.latest() {
            self.render(&form);
        }
        change
    }

    /// Forward a user event on the input with element id `id`
    pub fn handle_input(
        &mut self,
        id: &str,
        event: InputEvent,
    ) -> Result<FormChange, BindingError> {
        let edit = binding::forward_by_id(id, event)?;
        Ok(self.apply(edit))
    }

    /// Apply `value` to the leaf at the dotted `path`
    pub fn apply_raw(&mut self, path: &str, value: &str) -> FormResult<FormChange> {
        let edit = path.parse::<FieldPath>()?.with_value(value)?;
        Ok(self.apply(edit))
    }

    pub fn form(&self) -> Arc<ShipmentForm> {
        self.store.snapshot()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn document(&self) -> &RenderedDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut RenderedDocument {
        &mut self.document
    }

    pub fn stylesheet(&self) -> &'static str {
        RECEIPT_CSS
    }

    /// Export the printable slip through `host`
    pub async fn print<H: PrintHost>(
        &self,
        host: &H,
        settle_delay: Duration,
    ) -> PrintResult<ExportReport> {
        let request = SurfaceRequest::print_preview(util::print_window_name());
        ExportJob::new(RECEIPT_CSS, request)
            .with_settle_delay(settle_delay)
            .run(self, host)
            .await
    }

    #[instrument(skip_all, fields(revision = self.store.revision()))]
    fn render(&mut self, form: &ShipmentForm) {
        let editor = FormView::new(form).render();
        let slip = ReceiptRenderer::new(form, &self.logo_url).render();
        debug!(form_bytes = editor.len(), slip_bytes = slip.len(), "views rendered");

        self.document.mount(FORM_ROOT, editor);
        self.document.mount(PRINTABLE_ROOT, slip);
    }
}

impl ReceiptSource for Session {
    fn receipt_markup(&self) -> Option<&str> {
        self.document.element_inner_html(PRINTABLE_ROOT)
    }
}
