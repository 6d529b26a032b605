use gloo_timers::callback::Timeout;
use shared::SharedError;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-green-600 border-green-700",
            ToastType::Error => "bg-red-600 border-red-700",
            ToastType::Warning => "bg-amber-500 border-amber-600",
            ToastType::Info => "bg-sky-600 border-sky-700",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
            ToastType::Warning => "⚠",
            ToastType::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for manual dismiss
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration: Some(5000),
        }
    }

    /// Rule violations are warnings the user can act on and fade out;
    /// internal failures stay until dismissed.
    pub fn from_error(error: &SharedError) -> Self {
        if error.is_user_facing() {
            Self::new(error.to_string(), ToastType::Warning)
        } else {
            Self::new(error.to_string(), ToastType::Error).persistent()
        }
    }

    pub fn persistent(mut self) -> Self {
        self.duration = None;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

impl ToastContext {
    pub fn notify(&self, message: impl Into<String>, toast_type: ToastType) {
        self.add_toast.emit(Toast::new(message, toast_type));
    }

    pub fn error(&self, error: &SharedError) {
        self.add_toast.emit(Toast::from_error(error));
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Toasts on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(Uuid),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer_eq(ToastQueue::default);

    // Timers go through the dispatcher so a late dismissal never restores
    // an outdated list
    let add_toast = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |toast: Toast| {
            if let Some(duration_ms) = toast.duration {
                let dispatcher = dispatcher.clone();
                let id = toast.id;
                Timeout::new(duration_ms, move || dispatcher.dispatch(ToastAction::Dismiss(id)))
                    .forget();
            }
            dispatcher.dispatch(ToastAction::Push(toast));
        })
    };

    let remove_toast = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: Uuid| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let context = ToastContext {
        toasts: queue.toasts.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            <div class="toast-container">
                {props.children.clone()}
                <ToastList />
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2" role="status" aria-live="polite">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let on_close = {
        let toast_context = toast_context.clone();
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| {
            toast_context.remove_toast.emit(toast_id);
        })
    };

    html! {
        <div class={classes!(
            "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md",
            props.toast.toast_type.classes()
        )}>
            <span class="flex-shrink-0 mr-3 text-lg font-bold">{props.toast.toast_type.icon()}</span>
            <p class="flex-1 text-sm font-medium">{&props.toast.message}</p>
            <button
                onclick={on_close}
                class="flex-shrink-0 ml-3 text-white hover:text-gray-200 focus:outline-none"
            >
                {"×"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dismiss_keeps_later_toasts() {
        let first = Toast::new("Package added to cart", ToastType::Success);
        let second = Toast::new("Failed to add package to cart", ToastType::Error).persistent();
        let first_id = first.id;

        let queue = Rc::new(ToastQueue::default())
            .reduce(ToastAction::Push(first))
            .reduce(ToastAction::Push(second.clone()))
            .reduce(ToastAction::Dismiss(first_id));

        assert_eq!(queue.toasts, vec![second]);
    }

    #[test]
    fn test_rule_violations_are_warnings() {
        let toast = Toast::from_error(&SharedError::CourtLimit { allowed: 2 });
        assert_eq!(toast.toast_type, ToastType::Warning);
        assert_eq!(toast.message, "You can only select 2 court(s).");
        assert_eq!(toast.duration, Some(5000));
    }

    #[test]
    fn test_internal_errors_stay_until_dismissed() {
        let toast = Toast::from_error(&SharedError::Conversion("bad payload".to_string()));
        assert_eq!(toast.toast_type, ToastType::Error);
        assert_eq!(toast.duration, None);
    }
}
