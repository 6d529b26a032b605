use crate::browser;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ClickableRowProps {
    /// Target of the whole row; `None` renders a plain row.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Table row that navigates to `href` when clicked anywhere. Links and
/// buttons inside the row keep their own behavior.
#[function_component(ClickableRow)]
pub fn clickable_row(props: &ClickableRowProps) -> Html {
    let Some(href) = props.href.clone() else {
        return html! { <tr class={props.class.clone()}>{props.children.clone()}</tr> };
    };

    let on_click = Callback::from(move |e: MouseEvent| {
        let inner_control = e
            .target_dyn_into::<web_sys::Element>()
            .and_then(|el| el.closest("a, button, input").ok().flatten())
            .is_some();
        if !inner_control {
            browser::navigate(&href);
        }
    });

    html! {
        <tr
            onclick={on_click}
            class={classes!(props.class.clone(), "cursor-pointer", "hover:bg-gray-50")}
        >
            {props.children.clone()}
        </tr>
    }
}
