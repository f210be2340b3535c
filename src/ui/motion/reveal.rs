use leptos::html::Div;
use leptos::prelude::*;

use super::registry::{MotionRole, use_motion_registry};

/// Block that fades up once when scrolled into view.
#[component]
pub fn Reveal(
    /// CSS classes for the wrapping div
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    use_motion_registry().register(MotionRole::Reveal, node_ref);

    view! {
        <div node_ref=node_ref class=class>
            {children()}
        </div>
    }
}
