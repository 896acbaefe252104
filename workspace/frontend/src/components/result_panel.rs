use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    /// Formatted prediction; the panel stays hidden while `None`.
    pub value: Option<String>,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let Some(value) = &props.value else {
        return html! {};
    };

    html! {
        <div id="result" class="stat bg-base-200 rounded-box">
            <div class="stat-title">{"Predicted Profit"}</div>
            <div id="profit-value" class="stat-value text-primary">{value}</div>
        </div>
    }
}
