use crate::browser;
use crate::Route;
use log::warn;
use shared::models::locale::LANG_COOKIE;
use shared::models::page_state::with_query_param;
use shared::Language;
use yew::prelude::*;
use yew_router::prelude::*;

/// Persists the choice for the server and reloads the page in that language.
fn switch_language(language: Language) {
    browser::set_cookie(&language.cookie());
    let href = with_query_param(&browser::current_href(), LANG_COOKIE, Some(language.code()));
    browser::navigate(&href);
}

fn current_language() -> Language {
    browser::cookie(LANG_COOKIE)
        .and_then(|code| code.parse().ok())
        .unwrap_or_default()
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::NotFound);
    let search_open = use_state(|| false);
    let language = use_memo((), |_| current_language());

    let toggle_search = {
        let search_open = search_open.clone();
        Callback::from(move |_: MouseEvent| search_open.set(!*search_open))
    };

    let on_language = Callback::from(|e: Event| {
        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
        match select.value().parse::<Language>() {
            Ok(language) => switch_language(language),
            Err(e) => warn!("{}", e),
        }
    });

    let link = |to: Route, label: &'static str| {
        let active = current_route == to;
        html! {
            <Link<Route> to={to} classes={classes!(
                "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
                "transition-colors", "duration-200", "min-h-[44px]", "flex", "items-center",
                if active {
                    classes!("bg-white/20", "text-white")
                } else {
                    classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
                }
            )}>
                {label}
            </Link<Route>>
        }
    };

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-800", "to-blue-600",
            "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    <div class={classes!("flex", "items-center", "space-x-4")}>
                        <a href="/" class={classes!("text-lg", "font-medium", "bg-white", "text-blue-600", "px-2", "py-0.5", "rounded")}>
                            {"Courtside"}
                        </a>
                        <div class={classes!("hidden", "md:flex", "space-x-2")}>
                            {link(Route::Booking, "Book")}
                            {link(Route::LeagueCreate, "Leagues")}
                            {link(Route::Shop, "Shop")}
                            {link(Route::Notes, "Notes")}
                            {link(Route::Profile, "Profile")}
                        </div>
                    </div>

                    <div class={classes!("flex", "items-center", "space-x-2")}>
                        <form action="/search" method="get" class={classes!(
                            "md:block",
                            if *search_open { "block" } else { "hidden" }
                        )}>
                            <input
                                id="searchBar"
                                name="q"
                                type="search"
                                placeholder="Search"
                                class="px-3 py-1 rounded-md text-gray-900 text-sm"
                            />
                        </form>
                        <button
                            id="mobileSearchToggle"
                            type="button"
                            onclick={toggle_search}
                            aria-expanded={search_open.to_string()}
                            aria-label="Toggle search"
                            class="md:hidden p-2 rounded-md hover:bg-white/10"
                        >
                            {"🔍"}
                        </button>
                        <select
                            id="languageSelect"
                            onchange={on_language}
                            aria-label="Language"
                            class="bg-transparent text-sm border border-white/30 rounded-md px-2 py-1"
                        >
                            {Language::ALL.iter().map(|l| html! {
                                <option value={l.code()} selected={*l == *language} class="text-gray-900">
                                    {l.label()}
                                </option>
                            }).collect::<Html>()}
                        </select>
                    </div>
                </div>
            </div>
        </nav>
    }
}
