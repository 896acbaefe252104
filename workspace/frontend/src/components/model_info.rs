use super::charts::FeatureImportanceChart;
use common::ModelInfoView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModelInfoPanelProps {
    pub view: ModelInfoView,
}

#[function_component(ModelInfoPanel)]
pub fn model_info_panel(props: &ModelInfoPanelProps) -> Html {
    let body = match &props.view {
        ModelInfoView::Loading => html! {
            <div id="modelMeta" class="text-sm text-gray-500">{"Loading model info..."}</div>
        },
        ModelInfoView::Unavailable => html! {
            <div id="modelMeta" class="text-sm text-gray-500">
                {props.view.fallback_message().unwrap_or_default()}
            </div>
        },
        ModelInfoView::Ready { meta, chart } => html! {
            <>
                <div id="modelMeta" class="text-sm">
                    {"Trained on: "}<b>{meta.trained_on_label()}</b><br/>
                    {"Trained at: "}<b>{meta.trained_at_label()}</b><br/>
                    {"Train R²: "}<b>{meta.train_r2_label()}</b>
                    {" • Test R²: "}<b>{meta.test_r2_label()}</b>
                </div>
                <FeatureImportanceChart chart={chart.clone()} />
            </>
        },
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Model"}</h3>
                {body}
            </div>
        </div>
    }
}
