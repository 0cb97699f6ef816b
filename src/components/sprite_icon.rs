//! Sprite Icon Component
//!
//! `<svg><use/></svg>` reference into an icon sprite sheet.

use leptos::prelude::*;

pub const TABLER_SPRITE: &str = "/static/tabler/tabler-sprite.svg";

/// Sprite URL for a named tabler icon
pub fn tabler(name: &str) -> String {
    format!("{}#tabler-{}", TABLER_SPRITE, name)
}

/// Inline SVG pointing at a sprite fragment
#[component]
pub fn SpriteIcon(
    #[prop(into)] href: String,
    #[prop(into, default = "icon".to_string())] icon_class: String,
) -> impl IntoView {
    let inner = format!(r#"<use href="{}"></use>"#, href);
    view! { <svg class=icon_class width="24" height="24" inner_html=inner></svg> }
}
