use crate::browser;
use crate::components::common_toast::ToastContext;
use serde::Deserialize;
use shared::models::league::check_edit_capacity;
use shared::models::page_state::{edit_href, edit_requested, tab_from_hash};
use shared::{ClubOption, LeagueForm};
use yew::prelude::*;

pub const TABS: [(&str, &str); 3] = [
    ("overview", "Overview"),
    ("teams", "Teams"),
    ("gamedays", "Game days"),
];

/// Tab to show for a `location.hash`; unknown names fall back to the first.
pub fn initial_tab(hash: &str) -> &'static str {
    tab_from_hash(hash)
        .and_then(|name| TABS.iter().find(|(id, _)| *id == name))
        .map(|(id, _)| *id)
        .unwrap_or(TABS[0].0)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueEditPageData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub clubs: Vec<ClubOption>,
    #[serde(default)]
    pub club_id: String,
    #[serde(default)]
    pub nbr_teams: u32,
    #[serde(default)]
    pub action: String,
}

impl LeagueEditPageData {
    pub fn form(&self) -> LeagueForm {
        let mut form = LeagueForm::new(self.clubs.clone());
        if !self.club_id.is_empty() {
            form.select_club(self.club_id.clone());
        }
        form.set_teams(self.nbr_teams.to_string());
        form
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LeagueEditProps {
    pub league_id: String,
}

#[function_component(LeagueEdit)]
pub fn league_edit(props: &LeagueEditProps) -> Html {
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let data = use_memo((), |_| {
        browser::page_data_or_default::<LeagueEditPageData>("league-edit-data")
    });
    let form = {
        let data = data.clone();
        use_state(move || data.form())
    };
    let active_tab = use_state(|| initial_tab(&browser::current_hash()));
    let edit_open = use_state(|| edit_requested(&browser::current_search()));

    let on_tab = |tab: &'static str| {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| {
            browser::set_hash(tab);
            active_tab.set(tab);
        })
    };

    let on_toggle_edit = {
        let edit_open = edit_open.clone();
        Callback::from(move |_: MouseEvent| {
            let open = !*edit_open;
            browser::push_href(&edit_href(&browser::current_href(), open));
            edit_open.set(open);
        })
    };

    let on_club_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.select_club(select.value());
            form.set(next);
        })
    };

    let on_teams = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_teams(input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            if let Err(err) = check_edit_capacity(form.available_courts(), form.team_count()) {
                e.prevent_default();
                toast.error(&err);
            }
        })
    };

    html! {
        <div class="max-w-4xl mx-auto px-4 py-8 space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">{&data.name}</h1>

            <div class="border-b border-gray-200">
                <nav class="-mb-px flex space-x-6" role="tablist">
                    {TABS.iter().map(|(id, label)| html! {
                        <button
                            key={*id}
                            type="button"
                            role="tab"
                            aria-selected={(*active_tab == *id).to_string()}
                            onclick={on_tab(*id)}
                            class={classes!(
                                "py-2", "px-1", "border-b-2", "text-sm", "font-medium",
                                if *active_tab == *id {
                                    classes!("border-blue-600", "text-blue-600")
                                } else {
                                    classes!("border-transparent", "text-gray-500", "hover:text-gray-700")
                                }
                            )}
                        >
                            {*label}
                        </button>
                    }).collect::<Html>()}
                </nav>
            </div>

            <div id={*active_tab} role="tabpanel">
                if *active_tab == "overview" {
                    <div class="space-y-4">
                        <button
                            type="button"
                            onclick={on_toggle_edit}
                            aria-expanded={edit_open.to_string()}
                            class="w-full flex justify-between items-center px-4 py-3 bg-gray-50 border border-gray-200 rounded-md"
                        >
                            <span class="font-medium">{"Edit league"}</span>
                            <span>{if *edit_open { "−" } else { "+" }}</span>
                        </button>

                        if *edit_open {
                            <form method="post" action={data.action.clone()} onsubmit={on_submit} class="space-y-4 px-4">
                                <input type="hidden" name="league_id" value={props.league_id.clone()} />
                                <div class="space-y-1">
                                    <label for="club_id" class="block text-sm font-medium text-gray-700">{"Club"}</label>
                                    <select id="club_id" name="club_id" onchange={on_club_change} class="w-full px-3 py-2 border border-gray-300 rounded-md">
                                        {form.clubs().iter().map(|club| html! {
                                            <option key={club.id.clone()} value={club.id.clone()} selected={club.id == form.club_id()}>
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
                                        oninput={on_teams}
                                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                                    />
                                </div>
                                <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                                    {"Save"}
                                </button>
                            </form>
                        }
                    </div>
                } else {
                    <p class="text-sm text-gray-600">
                        {format!("{} teams on {} courts", form.team_count(), form.available_courts())}
                    </p>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_tab_from_hash() {
        assert_eq!(initial_tab("#teams"), "teams");
        assert_eq!(initial_tab("#gamedays"), "gamedays");
        assert_eq!(initial_tab(""), "overview");
        assert_eq!(initial_tab("#"), "overview");
        assert_eq!(initial_tab("#unknown"), "overview");
    }

    #[test]
    fn test_page_data_restores_saved_club() {
        let data: LeagueEditPageData = serde_json::from_str(
            r#"{"clubs": [{"id": "a", "name": "A", "courts": 1}, {"id": "b", "name": "B", "courts": 2}],
                "club_id": "b", "nbr_teams": 4}"#,
        )
        .unwrap();
        let form = data.form();
        assert_eq!(form.club_id(), "b");
        assert_eq!(form.team_count(), 4);
        assert!(check_edit_capacity(form.available_courts(), form.team_count()).is_ok());
    }
}
