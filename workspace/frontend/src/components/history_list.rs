use chrono::Local;
use common::HistoryEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HistoryListProps {
    pub entries: Vec<HistoryEntry>,
    pub on_export: Callback<()>,
}

/// Every past prediction, redrawn in full on each update.
#[function_component(HistoryList)]
pub fn history_list(props: &HistoryListProps) -> Html {
    let on_export = {
        let on_export = props.on_export.clone();
        Callback::from(move |_| {
            log::debug!("User requested history export");
            on_export.emit(());
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title text-lg">{"Prediction History"}</h3>
                    <button id="export-history-btn" class="btn btn-outline btn-sm" onclick={on_export}>
                        {"Export CSV"}
                    </button>
                </div>
                <div id="history" class="max-h-64 overflow-y-auto text-sm space-y-1">
                    { for props.entries.iter().map(|entry| html! {
                        <div class="history-item">{entry.display_line(&Local)}</div>
                    }) }
                </div>
            </div>
        </div>
    }
}
