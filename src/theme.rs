//! Theme Preference
//!
//! system/dark/light preference kept in session storage under `theme-pref`.

use wasm_bindgen::JsValue;

use crate::dom;

pub const STORAGE_KEY: &str = "theme-pref";
const SPRITE_MOON: &str = "/static/tabler/tabler-sprite.svg#tabler-moon";
const SPRITE_SUN: &str = "/static/tabler/tabler-sprite.svg#tabler-sun";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePref {
    #[default]
    System,
    Dark,
    Light,
}

impl ThemePref {
    /// Unknown values read as `System`
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePref::Dark,
            Some("light") => ThemePref::Light,
            _ => ThemePref::System,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePref::System => "system",
            ThemePref::Dark => "dark",
            ThemePref::Light => "light",
        }
    }

    /// Switcher cycle: system -> dark -> light -> dark
    pub fn next(&self) -> Self {
        match self {
            ThemePref::System | ThemePref::Light => ThemePref::Dark,
            ThemePref::Dark => ThemePref::Light,
        }
    }

    /// Concrete `data-bs-theme` value
    pub fn resolve(&self, prefers_dark: bool) -> &'static str {
        match self {
            ThemePref::System if prefers_dark => "dark",
            ThemePref::System | ThemePref::Light => "light",
            ThemePref::Dark => "dark",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ThemePref::Dark => SPRITE_SUN,
            ThemePref::System | ThemePref::Light => SPRITE_MOON,
        }
    }
}

/// Current preference from session storage
pub fn current() -> ThemePref {
    let stored = dom::session_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    ThemePref::parse(stored.as_deref())
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Apply a preference to the document and the switcher icon
pub fn activate(pref: ThemePref) -> Result<(), JsValue> {
    let resolved = pref.resolve(prefers_dark());
    log::debug!("activating theme {} ({})", pref.as_str(), resolved);
    if let Some(root) = dom::document()?.document_element() {
        root.set_attribute("data-bs-theme", resolved)?;
    }
    if let Some(icon) = dom::by_id("themeSwitcherIcon") {
        if let Some(use_el) = icon.query_selector("use")? {
            use_el.set_attribute("href", pref.icon())?;
        }
    }
    Ok(())
}

/// Advance to the next preference, persist it and apply it
pub fn cycle() -> Result<ThemePref, JsValue> {
    let next = current().next();
    if let Some(storage) = dom::session_storage() {
        storage.set_item(STORAGE_KEY, next.as_str())?;
    }
    activate(next)?;
    Ok(next)
}

/// Apply the stored preference and hook up `#themeSwitcher`
pub fn install() -> Result<(), JsValue> {
    activate(current())?;
    let Some(switcher) = dom::by_id("themeSwitcher") else {
        return Ok(());
    };
    dom::listen(&switcher, "click", |ev| {
        ev.prevent_default();
        if let Err(e) = cycle() {
            log::error!("theme switch failed: {:?}", e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        assert_eq!(ThemePref::System.next(), ThemePref::Dark);
        assert_eq!(ThemePref::Dark.next(), ThemePref::Light);
        assert_eq!(ThemePref::Light.next(), ThemePref::Dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!(ThemePref::parse(None), ThemePref::System);
        assert_eq!(ThemePref::parse(Some("light")), ThemePref::Light);
        assert_eq!(ThemePref::parse(Some("sepia")), ThemePref::System);
    }

    #[test]
    fn test_resolve_and_icon() {
        assert_eq!(ThemePref::System.resolve(true), "dark");
        assert_eq!(ThemePref::System.resolve(false), "light");
        assert_eq!(ThemePref::Light.resolve(true), "light");
        assert_eq!(ThemePref::Dark.icon(), SPRITE_SUN);
        assert_eq!(ThemePref::System.icon(), SPRITE_MOON);
    }
}
