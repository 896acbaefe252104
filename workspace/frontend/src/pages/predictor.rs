use crate::components::charts::{HistoryTrendChart, ProfitChart};
use crate::components::{HistoryList, ModelInfoPanel, PredictionForm, ResultPanel};
use crate::hooks::{use_model_info, use_predictor};
use chrono::Local;
use common::HistoryTrend;
use yew::prelude::*;

#[function_component(PredictorPage)]
pub fn predictor_page() -> Html {
    let predictor = use_predictor();
    let model_info = use_model_info();

    let session = predictor.session.borrow();
    let entries = session.history().entries().to_vec();
    let trend = HistoryTrend::from_entries(&entries, &Local);

    html! {
        <div class="container mx-auto p-6 space-y-6">
            <h1 class="text-3xl font-bold">{"Startup Profit Predictor"}</h1>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body space-y-4">
                        <PredictionForm busy={session.is_busy()} on_submit={predictor.submit.clone()} />
                        <ResultPanel value={session.result_text()} />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title text-lg">{"Expenses vs. Profit"}</h3>
                        <ProfitChart chart={session.comparison()} />
                    </div>
                </div>
            </div>
            <ModelInfoPanel view={model_info} />
            if !trend.is_empty() {
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <HistoryTrendChart trend={trend.clone()} />
                    </div>
                </div>
            }
            <HistoryList entries={entries} on_export={predictor.export.clone()} />
        </div>
    }
}
