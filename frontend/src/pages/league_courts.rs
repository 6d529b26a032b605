use crate::browser;
use serde::Deserialize;
use shared::{CourtCard, LeagueCourtPicker};
use yew::prelude::*;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueCourtsPageData {
    #[serde(default)]
    pub courts: Vec<CourtCard>,
    #[serde(default)]
    pub nbr_teams: u32,
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub action: String,
}

#[derive(Properties, PartialEq, Clone)]
pub struct LeagueCourtsProps {
    pub league_id: String,
}

/// Assigns courts to a league; exactly enough courts for the team count
/// must be ticked before saving.
#[function_component(LeagueCourts)]
pub fn league_courts(props: &LeagueCourtsProps) -> Html {
    let data = use_memo((), |_| {
        browser::page_data_or_default::<LeagueCourtsPageData>("league-courts-data")
    });
    let picker = {
        let data = data.clone();
        use_state(move || LeagueCourtPicker::new(data.courts.clone(), data.nbr_teams))
    };

    let on_toggle_info = {
        let picker = picker.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*picker).clone();
            next.toggle_info();
            picker.set(next);
        })
    };

    let on_submit = {
        let picker = picker.clone();
        Callback::from(move |e: SubmitEvent| {
            if picker.validate().is_err() {
                e.prevent_default();
            }
        })
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="max-w-4xl mx-auto px-4 py-8 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">{"League courts"}</h1>
                <button
                    id="toggleLeagueInfo"
                    type="button"
                    onclick={on_toggle_info}
                    aria-expanded={picker.info_open().to_string()}
                    class="px-3 py-1 text-sm bg-gray-100 rounded-md hover:bg-gray-200"
                >
                    {if picker.info_open() { "Hide league info" } else { "Show league info" }}
                </button>
            </div>

            if picker.info_open() {
                <div id="leagueInfo" class="p-4 bg-gray-50 border border-gray-200 rounded-md text-sm text-gray-700">
                    <p>{&data.info}</p>
                    <p>{format!("Select {} court(s).", picker.required())}</p>
                </div>
            }

            <form method="post" action={data.action.clone()} onsubmit={on_submit} class="space-y-4">
                <input type="hidden" name="league_id" value={props.league_id.clone()} />
                <div class="grid grid-cols-2 sm:grid-cols-3 gap-3">
                    {picker.cards().iter().map(|card| {
                        let checkbox_id = format!("court-{}", card.id);
                        let on_card_click = {
                            let picker = picker.clone();
                            let id = card.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*picker).clone();
                                next.toggle(&id);
                                picker.set(next);
                            })
                        };
                        let on_check = {
                            let picker = picker.clone();
                            let id = card.id.clone();
                            Callback::from(move |e: Event| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                let mut next = (*picker).clone();
                                next.set_checked(&id, input.checked());
                                picker.set(next);
                            })
                        };
                        html! {
                            <div
                                key={card.id.clone()}
                                onclick={on_card_click}
                                class={classes!(
                                    "court-card", "p-4", "rounded-lg", "border-2", "cursor-pointer",
                                    if card.checked { "border-blue-600" } else { "border-gray-200" }
                                )}
                            >
                                <input
                                    id={checkbox_id.clone()}
                                    name="courts"
                                    type="checkbox"
                                    value={card.id.clone()}
                                    checked={card.checked}
                                    onclick={stop.clone()}
                                    onchange={on_check}
                                    class="mr-2"
                                />
                                <label for={checkbox_id} onclick={stop.clone()} class="font-medium">{&card.name}</label>
                            </div>
                        }
                    }).collect::<Html>()}
                </div>

                <p class="text-sm text-gray-600">
                    {format!("{} of {} courts selected", picker.checked_count(), picker.required())}
                </p>

                <button
                    id="submitButton"
                    type="submit"
                    disabled={!picker.is_valid()}
                    class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {"Save courts"}
                </button>
            </form>
        </div>
    }
}
