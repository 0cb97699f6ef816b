//! Placeholder Component
//!
//! Empty-state panel shown instead of an empty list.

use leptos::prelude::*;

use super::sprite_icon::{tabler, SpriteIcon};

#[component]
pub fn Placeholder(
    /// Tabler icon name, e.g. `mood-suprised`
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <div class="empty">
            <div class="empty-icon">
                <SpriteIcon href=tabler(&icon) icon_class="logo text-muted" />
            </div>
            <p class="empty-title">{title}</p>
            <p class="empty-subtitle text-muted">{subtitle}</p>
        </div>
    }
}
