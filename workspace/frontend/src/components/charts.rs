use common::{ComparisonChart, HistoryTrend, ImportanceChart};
use plotly::common::{Marker, Mode, Orientation, Title};
use plotly::layout::{Axis, RangeMode};
use plotly::{Bar, Layout, Scatter};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        log::error!("Failed to serialize chart part: {}", e);
        Value::Null
    })
}

fn to_js(value: &Value) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&value.to_string())
}

#[derive(Properties, PartialEq)]
struct PlotlyChartProps {
    id: AttrValue,
    traces: Vec<Value>,
    layout: Value,
    #[prop_or(320)]
    height: u32,
}

/// Draws into its div with `Plotly.newPlot`, which replaces whatever was plotted there before.
#[function_component(PlotlyChart)]
fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.id.clone(), props.traces.clone(), props.layout.clone()),
        move |(container_ref, id, traces, layout)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(id);

                let data_js = js_sys::Array::new();
                let mut parsed = true;
                for trace in traces {
                    match to_js(trace) {
                        Ok(trace_js) => {
                            data_js.push(&trace_js);
                        }
                        Err(_) => parsed = false,
                    }
                }

                match (parsed, to_js(layout)) {
                    (true, Ok(layout_js)) => {
                        log::trace!("Plotting {} trace(s) into #{}", traces.len(), id);
                        newPlot(id, data_js.into(), layout_js);
                    }
                    _ => log::error!("Chart #{} could not be converted for Plotly", id),
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style={format!("width:100%; height:{}px;", props.height)}></div>
    }
}

fn base_layout(height: usize) -> Layout {
    Layout::new().show_legend(false).height(height)
}

#[derive(Properties, PartialEq)]
pub struct ComparisonChartProps {
    pub chart: ComparisonChart,
}

/// Expenses next to the predicted profit.
#[function_component(ProfitChart)]
pub fn profit_chart(props: &ComparisonChartProps) -> Html {
    let trace = Bar::new(props.chart.labels(), props.chart.values()).name("₹");
    let layout = base_layout(320).y_axis(Axis::new().range_mode(RangeMode::ToZero));

    html! {
        <PlotlyChart id="profit-chart" traces={vec![to_json(&trace)]} layout={to_json(&layout)} />
    }
}

#[derive(Properties, PartialEq)]
pub struct ImportanceChartProps {
    pub chart: ImportanceChart,
}

/// Horizontal bars of the model's feature importances.
#[function_component(FeatureImportanceChart)]
pub fn feature_importance_chart(props: &ImportanceChartProps) -> Html {
    let chart = &props.chart;
    let trace = Bar::new(chart.values.clone(), chart.labels.clone())
        .orientation(Orientation::Horizontal)
        .name("Importance")
        .marker(Marker::new().color_array(chart.colors.clone()));
    let layout = base_layout(260).x_axis(Axis::new().range_mode(RangeMode::ToZero));

    html! {
        <PlotlyChart id="importance-chart" traces={vec![to_json(&trace)]} layout={to_json(&layout)} height={260} />
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryTrendProps {
    pub trend: HistoryTrend,
}

/// Recent predictions and the spends they were made from.
#[function_component(HistoryTrendChart)]
pub fn history_trend_chart(props: &HistoryTrendProps) -> Html {
    let trend = &props.trend;
    let series = [
        ("Predicted Profit", &trend.profits),
        ("R&D Spend", &trend.rd_spends),
        ("Administration", &trend.administrations),
        ("Marketing Spend", &trend.marketing_spends),
    ];

    let traces = series
        .iter()
        .map(|(name, values)| {
            let trace = Scatter::new(trend.labels.clone(), (*values).clone())
                .mode(Mode::LinesMarkers)
                .name(*name);
            to_json(&trace)
        })
        .collect::<Vec<_>>();

    let layout = Layout::new()
        .title(Title::with_text("Recent predictions"))
        .height(320)
        .y_axis(Axis::new().range_mode(RangeMode::ToZero));

    html! {
        <PlotlyChart id="history-trend-chart" traces={traces} layout={to_json(&layout)} />
    }
}
