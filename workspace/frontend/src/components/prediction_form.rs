use super::loading::Loading;
use common::{PredictionForm as FormValues, SpendField, StartupState};
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PredictionFormProps {
    pub busy: bool,
    pub on_submit: Callback<FormValues>,
}

fn field_value(form_data: &FormData, field: SpendField) -> String {
    form_data.get(field.name()).as_string().unwrap_or_default()
}

#[function_component(PredictionForm)]
pub fn prediction_form(props: &PredictionFormProps) -> Html {
    let form_ref = use_node_ref();

    let on_submit = {
        let form_ref = form_ref.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                log::error!("Prediction form element not mounted");
                return;
            };
            let form_data = match FormData::new_with_form(&form) {
                Ok(form_data) => form_data,
                Err(e) => {
                    log::error!("Could not read prediction form: {:?}", e);
                    return;
                }
            };

            let values = FormValues {
                rd: field_value(&form_data, SpendField::RdSpend),
                admin: field_value(&form_data, SpendField::Administration),
                market: field_value(&form_data, SpendField::MarketingSpend),
                state: form_data.get("state").as_string().unwrap_or_default(),
            };
            log::debug!("Prediction form submitted: {:?}", values);
            on_submit.emit(values);
        })
    };

    let spend_input = |field: SpendField| {
        html! {
            <div class="form-control">
                <label class="label" for={field.name()}>
                    <span class="label-text">{field.label()}</span>
                </label>
                <input
                    type="text"
                    inputmode="decimal"
                    id={field.name()}
                    name={field.name()}
                    class="input input-bordered w-full"
                    placeholder="0"
                />
            </div>
        }
    };

    html! {
        <form id="predict-form" ref={form_ref} onsubmit={on_submit} class="space-y-4">
            {spend_input(SpendField::RdSpend)}
            {spend_input(SpendField::Administration)}
            {spend_input(SpendField::MarketingSpend)}
            <div class="form-control">
                <label class="label" for="state">
                    <span class="label-text">{"State"}</span>
                </label>
                <select id="state" name="state" class="select select-bordered w-full">
                    { for StartupState::ALL.iter().map(|state| html! {
                        <option value={state.as_str()}>{state.as_str()}</option>
                    }) }
                </select>
            </div>
            <div class="flex items-center gap-4">
                <button id="predict-btn" type="submit" class="btn btn-primary" disabled={props.busy}>
                    {"Predict Profit"}
                </button>
                if props.busy {
                    <Loading text={Some("Predicting...".to_string())} />
                }
            </div>
        </form>
    }
}
