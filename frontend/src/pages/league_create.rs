use crate::browser;
use log::debug;
use serde::Deserialize;
use shared::{ClubOption, LeagueForm};
use yew::prelude::*;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueCreatePageData {
    #[serde(default)]
    pub clubs: Vec<ClubOption>,
    #[serde(default)]
    pub action: String,
}

/// New league form. The submit button stays disabled until the chosen club
/// has enough courts for the requested number of teams.
#[function_component(LeagueCreate)]
pub fn league_create() -> Html {
    let data = use_memo((), |_| {
        browser::page_data_or_default::<LeagueCreatePageData>("league-create-data")
    });
    let form = {
        let data = data.clone();
        use_state(move || LeagueForm::new(data.clubs.clone()))
    };

    let on_club_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            let verdict = next.select_club(select.value());
            debug!("Club changed, capacity verdict: {:?}", verdict);
            form.set(next);
        })
    };

    // Bound to both `input` and `change` so spinner clicks and typing agree
    let on_teams = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_teams(input.value());
            form.set(next);
        })
    };
    let on_teams_input = {
        let on_teams = on_teams.clone();
        Callback::from(move |e: InputEvent| on_teams.emit(e.into()))
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            if !form.verdict().can_submit() {
                e.prevent_default();
            }
        })
    };

    let verdict = form.verdict();

    html! {
        <div class="max-w-xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Create league"}</h1>
            <form method="post" action={data.action.clone()} onsubmit={on_submit} class="space-y-4">
                <div class="space-y-1">
                    <label for="name" class="block text-sm font-medium text-gray-700">{"Name"}</label>
                    <input id="name" name="name" type="text" required={true} class="w-full px-3 py-2 border border-gray-300 rounded-md" />
                </div>

                <div class="space-y-1">
                    <label for="club_id" class="block text-sm font-medium text-gray-700">{"Club"}</label>
                    <select id="club_id" name="club_id" onchange={on_club_change} class="w-full px-3 py-2 border border-gray-300 rounded-md">
                        {form.clubs().iter().map(|club| html! {
                            <option
                                key={club.id.clone()}
                                value={club.id.clone()}
                                selected={club.id == form.club_id()}
                                data-courts={club.courts.to_string()}
                            >
                                {&club.name}
                            </option>
                        }).collect::<Html>()}
                    </select>
                </div>

                <div class="space-y-1">
                    <label for="nbr_teams" class="block text-sm font-medium text-gray-700">{"Number of teams"}</label>
                    <input
                        id="nbr_teams"
                        name="nbr_teams"
                        type="number"
                        min="0"
                        value={form.teams_input().to_string()}
                        oninput={on_teams_input}
                        onchange={on_teams}
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                    />
                </div>

                if let Some(warning) = verdict.warning() {
                    <div id="court-warning" class="p-3 text-sm text-yellow-800 bg-yellow-50 border border-yellow-200 rounded-md">
                        {warning}
                    </div>
                }

                <button
                    id="submitButton"
                    type="submit"
                    disabled={!verdict.can_submit()}
                    class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {"Create"}
                </button>
            </form>
        </div>
    }
}
