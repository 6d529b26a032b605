use crate::api::booking::check_matches;
use crate::browser;
use crate::components::booking::court_picker::{CourtCountSelect, CourtTiles, DurationSelect};
use crate::components::common_toast::ToastContext;
use crate::flatpickr::{first_selected_millis, FlatpickrManager, PickerOptions};
use chrono::DateTime;
use log::{debug, error, warn};
use serde::Deserialize;
use shared::{BookingGate, BookingWindow, CourtSelection, CourtTile, SharedError};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const DATE_INPUT_ID: &str = "date_NonStop";

/// Courts and defaults rendered by the server into `#booking-data`.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingPageData {
    #[serde(default)]
    pub courts: Vec<CourtTile>,
    #[serde(default = "default_court_count")]
    pub court_count: u32,
    #[serde(default)]
    pub action: String,
    /// Courts of a submission the server sent back, e.g. after a failed
    /// booking.
    #[serde(default)]
    pub selected_courts: Vec<String>,
}

impl Default for BookingPageData {
    fn default() -> Self {
        Self {
            courts: Vec::new(),
            court_count: default_court_count(),
            action: String::new(),
            selected_courts: Vec::new(),
        }
    }
}

fn default_court_count() -> u32 {
    2
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingState {
    pub selection: CourtSelection,
    pub gate: BookingGate,
    pub rejection: Option<SharedError>,
    /// Bumped on every rejected click so repeated identical rejections
    /// still notify.
    pub rejections: u32,
}

impl BookingState {
    pub fn new(data: &BookingPageData) -> Self {
        let mut state = Self {
            selection: CourtSelection::new(data.courts.clone(), data.court_count),
            gate: BookingGate::default(),
            rejection: None,
            rejections: 0,
        };
        if let Err(e) = state.selection.restore_selection(&data.selected_courts) {
            warn!("Discarding echoed court selection: {}", e);
            state.reject(e);
        }
        state
    }

    fn reject(&mut self, error: SharedError) {
        self.rejection = Some(error);
        self.rejections += 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingAction {
    DatePicked(Option<i64>),
    /// Busy courts reported for the window they were requested for.
    Availability {
        window: BookingWindow,
        busy: Vec<String>,
    },
    ClickCourt(String),
    SetCourtCount(u32),
    SetDuration(u32),
}

impl Reducible for BookingState {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BookingAction::DatePicked(millis) => {
                next.gate
                    .pick(millis.and_then(DateTime::from_timestamp_millis));
            }
            BookingAction::Availability { window, busy } => {
                if next.gate.window() != Some(window) {
                    debug!("Dropping availability for a superseded date");
                    return self;
                }
                let disabled = next.selection.apply_availability(&busy);
                debug!("{} court(s) unavailable for the chosen slot", disabled);
            }
            BookingAction::ClickCourt(id) => {
                if let Err(e) = next.selection.click(&id) {
                    next.reject(e);
                }
            }
            BookingAction::SetCourtCount(count) => next.selection.set_court_count(count),
            BookingAction::SetDuration(minutes) => {
                next.selection.set_duration(minutes);
            }
        }
        Rc::new(next)
    }
}

#[function_component(Booking)]
pub fn booking() -> Html {
    let toast = use_context::<ToastContext>().expect("Toast context not found");
    let data = use_memo((), |_| {
        browser::page_data_or_default::<BookingPageData>("booking-data")
    });
    let state = {
        let data = data.clone();
        use_reducer_eq(move || BookingState::new(&data))
    };

    // Date picker: every change asks the server which courts are taken
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let on_change = Closure::wrap(Box::new(
                move |selected_dates: JsValue, _date_str: JsValue, _instance: JsValue| {
                    let millis = first_selected_millis(&selected_dates);
                    dispatcher.dispatch(BookingAction::DatePicked(millis));

                    let Some(window) = millis.and_then(BookingWindow::from_millis) else {
                        return;
                    };
                    let dispatcher = dispatcher.clone();
                    spawn_local(async move {
                        match check_matches(&window.to_request()).await {
                            Ok(availability) => dispatcher.dispatch(BookingAction::Availability {
                                window,
                                busy: availability.busy_courts,
                            }),
                            Err(e) => error!("Availability check failed: {}", e),
                        }
                    });
                },
            )
                as Box<dyn Fn(JsValue, JsValue, JsValue)>);

            let mut manager = FlatpickrManager::new();
            if let Err(e) = manager.init(
                DATE_INPUT_ID,
                &PickerOptions::booking(),
                Some(on_change.as_ref().unchecked_ref::<js_sys::Function>()),
            ) {
                error!("Failed to initialize date picker: {:?}", e);
            }

            move || {
                drop(manager);
                drop(on_change);
            }
        });
    }

    {
        let toast = toast.clone();
        let rejection = state.rejection.clone();
        use_effect_with(state.rejections, move |count| {
            if *count > 0 {
                if let Some(e) = rejection {
                    toast.error(&e);
                }
            }
            || ()
        });
    }

    let on_court_click = {
        let state = state.clone();
        Callback::from(move |id: String| state.dispatch(BookingAction::ClickCourt(id)))
    };
    let on_count_change = {
        let state = state.clone();
        Callback::from(move |count: u32| state.dispatch(BookingAction::SetCourtCount(count)))
    };
    let on_duration_change = {
        let state = state.clone();
        Callback::from(move |minutes: u32| state.dispatch(BookingAction::SetDuration(minutes)))
    };

    let selection = &state.selection;
    let window = state.gate.window();

    html! {
        <div class="max-w-4xl mx-auto px-4 py-8 space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">{"Book a court"}</h1>

            <div class="space-y-1">
                <label for={DATE_INPUT_ID} class="block text-sm font-medium text-gray-700">{"Date and time"}</label>
                <input
                    id={DATE_INPUT_ID}
                    type="text"
                    placeholder="Select date and time"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md"
                />
            </div>

            if let Some(window) = window {
                <form id="form-container" method="post" action={data.action.clone()} class="space-y-6">
                    <input type="hidden" name="dateStart" value={window.to_request().date_start} />
                    <input type="hidden" name="dateEnd" value={window.to_request().date_end} />

                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <CourtCountSelect value={selection.court_count()} on_change={on_count_change} />
                        <DurationSelect control={selection.duration()} on_change={on_duration_change} />
                    </div>

                    <CourtTiles
                        courts={selection.courts().to_vec()}
                        on_click={on_court_click}
                        selected_label={selection.selected_label()}
                    />
                    {selection.selected_ids().into_iter().map(|id| html! {
                        <input type="hidden" name="courts" value={id} />
                    }).collect::<Html>()}

                    <div class="space-y-1">
                        <label for="num_player_total" class="block text-sm font-medium text-gray-700">{"Total players"}</label>
                        <input
                            id="num_player_total"
                            name="num_player_total"
                            type="number"
                            readonly={true}
                            value={selection.player_total().unwrap_or_else(|| selection.total_players()).to_string()}
                            class="w-full px-3 py-2 border border-gray-200 rounded-md bg-gray-50"
                        />
                    </div>

                    <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                        {"Book"}
                    </button>
                </form>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EVENING: i64 = 1_714_600_800_000;
    const NEXT_DAY: i64 = EVENING + 86_400_000;

    fn page_data(court_count: u32, selected_courts: &[&str]) -> BookingPageData {
        BookingPageData {
            courts: (1..=3)
                .map(|i| CourtTile::new(i.to_string(), format!("Court {}", i)))
                .collect(),
            court_count,
            action: String::new(),
            selected_courts: selected_courts.iter().map(|id| id.to_string()).collect(),
        }
    }

    fn state() -> Rc<BookingState> {
        Rc::new(BookingState::new(&page_data(1, &[])))
    }

    fn availability(millis: i64, busy: &[&str]) -> BookingAction {
        BookingAction::Availability {
            window: BookingWindow::from_millis(millis).unwrap(),
            busy: busy.iter().map(|id| id.to_string()).collect(),
        }
    }

    #[test]
    fn test_rejected_click_is_recorded() {
        let s = state().reduce(BookingAction::ClickCourt("1".to_string()));
        let s = s.reduce(BookingAction::ClickCourt("2".to_string()));
        assert_eq!(s.rejections, 1);
        assert_eq!(s.rejection, Some(SharedError::CourtLimit { allowed: 1 }));
        assert_eq!(s.selection.selected_ids(), vec!["1".to_string()]);
    }

    #[test]
    fn test_date_pick_opens_and_clears_form() {
        let s = state().reduce(BookingAction::DatePicked(Some(EVENING)));
        assert!(s.gate.form_visible());
        let s = s.reduce(BookingAction::DatePicked(None));
        assert!(!s.gate.form_visible());
    }

    #[test]
    fn test_availability_disables_busy_courts() {
        let s = state().reduce(BookingAction::DatePicked(Some(EVENING)));
        let s = s.reduce(availability(EVENING, &["2"]));
        assert!(s.selection.courts()[1].disabled);
        let s = s.reduce(BookingAction::ClickCourt("2".to_string()));
        assert_eq!(s.rejections, 0);
        assert_eq!(s.selection.selected_count(), 0);
    }

    #[test]
    fn test_late_availability_for_previous_date_is_dropped() {
        let s = state()
            .reduce(BookingAction::DatePicked(Some(EVENING)))
            .reduce(BookingAction::DatePicked(Some(NEXT_DAY)));

        let s = s.reduce(availability(EVENING, &["2"]));
        assert!(s.selection.courts().iter().all(|c| !c.disabled));

        let s = s.reduce(availability(NEXT_DAY, &["3"]));
        assert!(s.selection.courts()[2].disabled);
        assert!(!s.selection.courts()[1].disabled);
    }

    #[test]
    fn test_availability_after_clearing_the_date_is_dropped() {
        let s = state()
            .reduce(BookingAction::DatePicked(Some(EVENING)))
            .reduce(BookingAction::DatePicked(None));

        let s = s.reduce(availability(EVENING, &["1"]));
        assert!(!s.selection.courts()[0].disabled);
    }

    #[test]
    fn test_echoed_selection_is_restored() {
        let s = BookingState::new(&page_data(2, &["1", "3"]));
        assert_eq!(s.selection.selected_ids(), vec!["1".to_string(), "3".to_string()]);
        assert_eq!(s.rejections, 0);
    }

    #[test]
    fn test_overfull_echoed_selection_is_cleared_and_reported() {
        let s = BookingState::new(&page_data(1, &["1", "2"]));
        assert_eq!(s.selection.selected_count(), 0);
        assert_eq!(s.rejections, 1);
        assert_eq!(s.rejection, Some(SharedError::CourtLimit { allowed: 1 }));
    }

    #[test]
    fn test_page_data_defaults() {
        let data: BookingPageData = serde_json::from_str(r#"{"courts": [{"id": "7", "name": "Center"}]}"#).unwrap();
        assert_eq!(data.court_count, 2);
        assert_eq!(data.courts[0].name, "Center");
        assert!(data.selected_courts.is_empty());
    }
}
