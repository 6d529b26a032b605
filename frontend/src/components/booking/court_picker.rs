use shared::models::court::{LONG_SESSION_MINUTES, SHORT_SESSION_MINUTES};
use shared::{CourtTile, DurationControl};
use yew::prelude::*;

/// Values offered by the court-count selector.
pub const COURT_COUNT_OPTIONS: [u32; 4] = [1, 2, 3, 4];

#[derive(Properties, PartialEq, Clone)]
pub struct CourtTilesProps {
    pub courts: Vec<CourtTile>,
    pub on_click: Callback<String>,
    pub selected_label: String,
}

#[function_component(CourtTiles)]
pub fn court_tiles(props: &CourtTilesProps) -> Html {
    html! {
        <div class="space-y-3">
            <div class="grid grid-cols-2 sm:grid-cols-4 gap-3">
                {props.courts.iter().map(|court| {
                    let on_click = {
                        let on_click = props.on_click.clone();
                        let id = court.id.clone();
                        Callback::from(move |_: MouseEvent| on_click.emit(id.clone()))
                    };
                    html! {
                        <button
                            type="button"
                            key={court.id.clone()}
                            onclick={on_click}
                            aria-pressed={court.selected.to_string()}
                            aria-disabled={court.disabled.to_string()}
                            class={classes!(
                                "Court", "p-4", "rounded-lg", "border-2", "text-center", "font-medium",
                                "transition-colors", "duration-150",
                                court.selected.then_some("selectedCourt"),
                                court.disabled.then_some("disabledCourt"),
                                if court.disabled {
                                    classes!("bg-gray-100", "text-gray-400", "border-gray-200", "cursor-not-allowed")
                                } else if court.selected {
                                    classes!("bg-blue-600", "text-white", "border-blue-700")
                                } else {
                                    classes!("bg-white", "text-gray-800", "border-gray-300", "hover:border-blue-400")
                                }
                            )}
                        >
                            {&court.name}
                        </button>
                    }
                }).collect::<Html>()}
            </div>
            <p id="selectedCountLabel" class="text-sm text-gray-600">{&props.selected_label}</p>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CourtCountSelectProps {
    pub value: u32,
    pub on_change: Callback<u32>,
}

#[function_component(CourtCountSelect)]
pub fn court_count_select(props: &CourtCountSelectProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value().trim().parse::<u32>().unwrap_or(0));
        })
    };

    html! {
        <div class="space-y-1">
            <label for="court-number" class="block text-sm font-medium text-gray-700">{"Number of courts"}</label>
            <select
                id="court-number"
                name="court_number"
                onchange={on_change}
                class="w-full px-3 py-2 border border-gray-300 rounded-md"
            >
                {COURT_COUNT_OPTIONS.iter().map(|n| html! {
                    <option value={n.to_string()} selected={*n == props.value}>{n}</option>
                }).collect::<Html>()}
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct DurationSelectProps {
    pub control: DurationControl,
    pub on_change: Callback<u32>,
}

#[function_component(DurationSelect)]
pub fn duration_select(props: &DurationSelectProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value().trim().parse::<u32>().unwrap_or(0));
        })
    };

    html! {
        <div class="space-y-1">
            <label for="nonStop_duration" class="block text-sm font-medium text-gray-700">{"Duration (minutes)"}</label>
            <select
                id="nonStop_duration"
                name="nonStop_duration"
                disabled={props.control.disabled}
                onchange={on_change}
                class="w-full px-3 py-2 border border-gray-300 rounded-md disabled:bg-gray-100"
            >
                {[SHORT_SESSION_MINUTES, LONG_SESSION_MINUTES].iter().map(|m| html! {
                    <option value={m.to_string()} selected={*m == props.control.minutes}>{m}</option>
                }).collect::<Html>()}
            </select>
            if props.control.disabled {
                // Disabled selects are not submitted
                <input type="hidden" name="nonStop_duration" value={props.control.minutes.to_string()} />
            }
        </div>
    }
}
