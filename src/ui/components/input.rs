//! Text input component.

use leptos::prelude::*;

/// Single-line text input.
#[component]
pub fn Input(
    /// Input ID attribute.
    #[prop(optional)]
    id: Option<&'static str>,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_classes = "flex h-10 w-full rounded-lg border border-panelBorder bg-background \
                        px-3 py-2 text-sm text-textPrimary placeholder:text-textMuted \
                        focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary";

    let classes = format!("{} {}", base_classes, class);

    view! {
        <input
            type="text"
            id=id
            class=classes
            placeholder=placeholder
            autocomplete="off"
        />
    }
}
