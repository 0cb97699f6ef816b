//! Creation Dialog Controller
//!
//! Drives the server-rendered Bootstrap modal that creates an entity in the
//! list's context, then refreshes the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};
use wasm_bindgen::JsValue;
use web_sys::{HtmlButtonElement, HtmlFormElement};

use super::summit_list::ListController;
use crate::api::{self, ApiError};
use crate::context::MODE_ENUMERATE;
use crate::dialog::DialogPhase;
use crate::dom;

pub const DIALOG_ID: &str = "creationDialog";
pub const FORM_ID: &str = "creationForm";
pub const SUBMIT_ID: &str = "creationButton";
pub const SPINNER_ID: &str = "creationSpinner";

#[derive(Clone, Copy)]
pub struct DialogController {
    phase: StoredValue<DialogPhase>,
    list: ListController,
}

impl DialogController {
    /// Hook up the dialog's events. `Ok(None)` when the page has no dialog.
    pub fn install(list: ListController) -> Result<Option<Self>, JsValue> {
        let Some(dialog) = dom::by_id(DIALOG_ID) else {
            return Ok(None);
        };
        let controller = Self { phase: StoredValue::new(DialogPhase::Idle), list };

        dom::listen(&dialog, "show.bs.modal", move |_| controller.on_open())?;
        dom::listen(&dialog, "hide.bs.modal", move |ev| {
            if !controller.phase.with_value(DialogPhase::allows_close) {
                log::debug!("close vetoed while submitting");
                ev.prevent_default();
            }
        })?;
        match dom::by_id(SUBMIT_ID) {
            Some(button) => dom::listen(&button, "click", move |ev| {
                ev.prevent_default();
                controller.submit();
            })?,
            None => log::warn!("#{} has no #{}", DIALOG_ID, SUBMIT_ID),
        }
        Ok(Some(controller))
    }

    fn on_open(self) {
        self.phase.update_value(DialogPhase::open);
        if self.phase.with_value(DialogPhase::is_submitting) {
            return;
        }
        if let Some(form) = dom::by_id_as::<HtmlFormElement>(FORM_ID) {
            form.reset();
        }
        show_busy(false);
    }

    /// Post the form once; repeated clicks while in flight are ignored
    pub fn submit(self) {
        let mut claimed = false;
        self.phase.update_value(|phase| claimed = phase.begin_submit());
        if !claimed {
            log::debug!("submit ignored, dialog is not editing");
            return;
        }
        show_busy(true);

        let context = self.list.context();
        let fields = read_form();
        spawn_local(async move {
            let result = match fields {
                Ok(fields) => api::create_item(context, fields).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => self.list.refresh(MODE_ENUMERATE.to_string(), 0),
                Err(e) => log::error!("creating {} failed: {}", context, e),
            }

            self.phase.update_value(DialogPhase::finish);
            show_busy(false);
            dom::hide_modal(DIALOG_ID);
        });
    }
}

fn read_form() -> Result<Map<String, Value>, ApiError> {
    let form = dom::by_id_as::<HtmlFormElement>(FORM_ID)
        .ok_or_else(|| ApiError::Form(format!("missing #{}", FORM_ID)))?;
    dom::form_fields(&form).map_err(ApiError::form)
}

/// Spinner visible and submit disabled while busy
fn show_busy(busy: bool) {
    if let Some(spinner) = dom::by_id(SPINNER_ID) {
        dom::set_visible(&spinner, busy);
    }
    if let Some(button) = dom::by_id_as::<HtmlButtonElement>(SUBMIT_ID) {
        button.set_disabled(busy);
    }
}
