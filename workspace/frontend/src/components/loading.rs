use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

/// Inline spinner shown while a prediction is in flight.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div id="loading" class="flex items-center gap-2 text-sm text-gray-500">
            <span class="loading loading-spinner loading-sm"></span>
            {if let Some(text) = &props.text {
                html! { <span>{text}</span> }
            } else {
                html! {}
            }}
        </div>
    }
}
