use yew::prelude::*;
use yew_router::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::components::common_toast::ToastProvider;
use crate::components::nav::Nav;

pub mod api;
pub mod browser;
pub mod components;
pub mod config;
pub mod flatpickr;
pub mod pages {
    pub mod booking;
    pub mod club_users;
    pub mod event_registration;
    pub mod gameday_edit;
    pub mod league_courts;
    pub mod league_create;
    pub mod league_edit;
    pub mod not_found;
    pub mod notes;
    pub mod profile;
    pub mod shop;
}

pub use shared;

use pages::{
    booking::Booking, club_users::ClubUsers, event_registration::EventRegistration,
    gameday_edit::GameDayEdit, league_courts::LeagueCourts, league_create::LeagueCreate,
    league_edit::LeagueEdit, not_found::NotFound, notes::Notes, profile::Profile, shop::Shop,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/booking")]
    Booking,
    #[at("/leagues/create")]
    LeagueCreate,
    #[at("/leagues/:league_id/edit")]
    LeagueEdit { league_id: String },
    #[at("/leagues/:league_id/courts")]
    LeagueCourts { league_id: String },
    #[at("/events/register")]
    EventRegistration,
    #[at("/club/users")]
    ClubUsers,
    #[at("/gamedays/:gameday_id/edit")]
    GameDayEdit { gameday_id: String },
    #[at("/shop")]
    Shop,
    #[at("/notes")]
    Notes,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <BrowserRouter>
                <div class="app-container">
                    <Nav />
                    <main class="flex-1">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </BrowserRouter>
        </ToastProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Booking} /> },
        Route::Booking => html! { <Booking /> },
        Route::LeagueCreate => html! { <LeagueCreate /> },
        Route::LeagueEdit { league_id } => {
            debug!("Rendering league edit for league: {}", league_id);
            html! { <LeagueEdit league_id={league_id} /> }
        }
        Route::LeagueCourts { league_id } => {
            debug!("Rendering court assignment for league: {}", league_id);
            html! { <LeagueCourts league_id={league_id} /> }
        }
        Route::EventRegistration => html! { <EventRegistration /> },
        Route::ClubUsers => html! { <ClubUsers /> },
        Route::GameDayEdit { gameday_id } => {
            debug!("Rendering game day edit for: {}", gameday_id);
            html! { <GameDayEdit gameday_id={gameday_id} /> }
        }
        Route::Shop => html! { <Shop /> },
        Route::Notes => html! { <Notes /> },
        Route::Profile => html! { <Profile /> },
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
