use crate::api::users::search_users;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use log::error;
use shared::models::user_search::DEBOUNCE_MS;
use shared::{
    highlight_match, SearchAction, SearchGate, SearchRequest, Segment, UserSuggestionDto,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Pairs the search gate with the browser timer that fires it. Each input
/// cancels the armed timer; the request goes out [`DEBOUNCE_MS`] after the
/// last keystroke.
#[derive(Default)]
pub struct SearchDebouncer {
    gate: Rc<RefCell<SearchGate>>,
    timer: RefCell<Option<Timeout>>,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input<F>(&self, raw: &str, on_fire: F) -> SearchAction
    where
        F: FnOnce(DispatchedSearch) + 'static,
    {
        if let Some(handle) = self.timer.borrow_mut().take() {
            handle.cancel();
        }

        let action = self.gate.borrow_mut().on_input(raw);
        if let SearchAction::Schedule { .. } = action {
            let gate = self.gate.clone();
            let timeout = Timeout::new(DEBOUNCE_MS, move || {
                let request = gate.borrow_mut().fire();
                if let Some(request) = request {
                    on_fire(DispatchedSearch { request, gate });
                }
            });
            self.timer.borrow_mut().replace(timeout);
        }
        action
    }
}

/// A search that has left the debouncer, waiting for its response.
pub struct DispatchedSearch {
    pub request: SearchRequest,
    gate: Rc<RefCell<SearchGate>>,
}

impl DispatchedSearch {
    /// Suggestions to show for the response, `None` once a newer search went
    /// out or the query was shortened.
    pub fn accept(&self, users: Vec<UserSuggestionDto>) -> Option<Vec<UserSuggestionDto>> {
        self.gate.borrow().accept(self.request.ticket, users)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct UserSearchProps {
    pub input_id: AttrValue,
    pub input_name: AttrValue,
    pub label: AttrValue,
    pub value: String,
    pub on_input: Callback<String>,
    pub on_select: Callback<UserSuggestionDto>,
    #[prop_or(AttrValue::Static("Type at least 3 characters..."))]
    pub placeholder: AttrValue,
}

/// Search box with debounced suggestions from `/search_users`.
#[function_component(UserSearch)]
pub fn user_search(props: &UserSearchProps) -> Html {
    let suggestions = use_state(Vec::<UserSuggestionDto>::new);
    let show_suggestions = use_state(|| false);
    let highlight_query = use_state(String::new);
    let debouncer = use_memo((), |_| SearchDebouncer::new());
    let container = use_node_ref();

    // Clicking anywhere outside the search group closes the list
    {
        let container = container.clone();
        let show_suggestions = show_suggestions.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo_utils::document(), "click", move |event| {
                let inside = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .zip(container.get())
                    .map(|(target, group)| group.contains(Some(&target)))
                    .unwrap_or(false);
                if !inside {
                    show_suggestions.set(false);
                }
            });
            move || drop(listener)
        });
    }

    let on_search = {
        let on_input = props.on_input.clone();
        let suggestions = suggestions.clone();
        let show_suggestions = show_suggestions.clone();
        let highlight_query = highlight_query.clone();
        let debouncer = debouncer.clone();

        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            on_input.emit(value.clone());

            let suggestions = suggestions.clone();
            let show = show_suggestions.clone();
            let highlight_query = highlight_query.clone();
            let action = debouncer.input(&value, move |search| {
                spawn_local(async move {
                    let users = search_users(&search.request.query).await.unwrap_or_else(|e| {
                        error!("User search failed: {}", e);
                        Vec::new()
                    });
                    let Some(users) = search.accept(users) else {
                        return;
                    };
                    show.set(!users.is_empty());
                    highlight_query.set(search.request.query.clone());
                    suggestions.set(users);
                });
            });
            if action == SearchAction::Hide {
                show_suggestions.set(false);
            }
        })
    };

    let on_pick = {
        let on_select = props.on_select.clone();
        let show_suggestions = show_suggestions.clone();
        Callback::from(move |user: UserSuggestionDto| {
            on_select.emit(user);
            show_suggestions.set(false);
        })
    };

    html! {
        <div class="form-group relative" ref={container}>
            <label for={props.input_id.clone()} class="block text-sm font-medium text-gray-700">
                {props.label.clone()}
            </label>
            <input
                id={props.input_id.clone()}
                name={props.input_name.clone()}
                type="text"
                autocomplete="off"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={on_search}
                class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
            />

            if *show_suggestions {
                <div id="userSuggestions" class="absolute z-50 w-full mt-1 bg-slate-800 border border-white/15 rounded-b-md max-h-52 overflow-y-auto overflow-x-hidden">
                    {suggestions.iter().map(|user| {
                        let on_click = {
                            let on_pick = on_pick.clone();
                            let user = user.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                e.stop_propagation();
                                on_pick.emit(user.clone());
                            })
                        };
                        html! {
                            <div
                                key={user.id}
                                class="suggestion-item flex items-center p-2 text-white whitespace-nowrap cursor-pointer hover:bg-slate-700"
                                onclick={on_click}
                            >
                                <img
                                    src={user.photo_url()}
                                    alt={user.name.clone()}
                                    class="rounded-full mr-2 object-cover"
                                    width="32"
                                    height="32"
                                />
                                <span class="inline-block min-w-[200px]">
                                    {render_segments(&highlight_match(&user.name, &highlight_query))}
                                </span>
                                <span class="mx-2 text-white/50">{"-"}</span>
                                <span class="text-white/70">{&user.telephone}</span>
                                <span class="mx-2 text-white/50">{"-"}</span>
                                <span class="text-white/70">{&user.email}</span>
                            </div>
                        }
                    }).collect::<Html>()}
                </div>
            }
        </div>
    }
}

fn render_segments(segments: &[Segment]) -> Html {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => html! { {text.clone()} },
            Segment::Match(text) => html! { <strong class="text-blue-400">{text.clone()}</strong> },
        })
        .collect::<Html>()
}
