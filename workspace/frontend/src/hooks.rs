use crate::api_client::prediction::HttpPredictionService;
use crate::download::{alert, download_text};
use chrono::Utc;
use common::history::{EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
use common::session::load_model_info;
use common::{ModelInfoView, PredictionForm, PredictionService, PredictorSession, SubmitError};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Page session plus the actions that mutate it.
#[derive(Clone)]
pub struct PredictorHandle {
    pub session: Rc<RefCell<PredictorSession>>,
    pub submit: Callback<PredictionForm>,
    pub export: Callback<()>,
}

#[hook]
pub fn use_predictor() -> PredictorHandle {
    let session = use_mut_ref(PredictorSession::new);
    let update = use_force_update();

    let submit = {
        let session = session.clone();
        let update = update.clone();
        use_callback((), move |form: PredictionForm, _| {
            let begun = session.borrow_mut().begin(&form);
            let request = match begun {
                Ok(request) => request,
                Err(SubmitError::Busy) => {
                    log::debug!("Submission ignored, a prediction is already in flight");
                    return;
                }
                Err(err) => {
                    alert(&err.alert_message());
                    return;
                }
            };
            update.force_update();

            let session = session.clone();
            let update = update.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = HttpPredictionService.predict(&request).await;
                let completed = session.borrow_mut().complete(&request, outcome, Utc::now());
                update.force_update();

                if let Err(err) = completed {
                    log::error!("Submission failed: {}", err);
                    alert(&err.alert_message());
                }
            });
        })
    };

    let export = {
        let session = session.clone();
        use_callback((), move |_: (), _| {
            let csv = session.borrow().export_csv();
            match csv {
                Ok(csv) => {
                    if let Err(e) = download_text(EXPORT_FILE_NAME, EXPORT_MIME_TYPE, &csv) {
                        log::error!("CSV download failed: {}", e);
                        alert(&format!("Error: {}", e));
                    }
                }
                Err(err) => alert(&err.to_string()),
            }
        })
    };

    PredictorHandle {
        session,
        submit,
        export,
    }
}

/// Load `/model-info` once on mount.
#[hook]
pub fn use_model_info() -> ModelInfoView {
    let view = use_state(ModelInfoView::default);

    {
        let view = view.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                view.set(load_model_info(&HttpPredictionService).await);
            });
            || ()
        });
    }

    (*view).clone()
}
