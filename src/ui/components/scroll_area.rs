//! Scrollable area component.

use leptos::prelude::*;

/// Scrollable container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ScrollArea id="chatBody" class="h-[400px]">
///         // Log entries here
///     </ScrollArea>
/// }
/// ```
#[component]
pub fn ScrollArea(
    /// Element ID.
    #[prop(optional)]
    id: Option<&'static str>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Scrollable content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "relative overflow-y-auto scrollbar-thin scrollbar-thumb-panelBorder \
         scrollbar-track-transparent {}",
        class
    );

    view! {
        <div id=id class=classes>
            {children()}
        </div>
    }
}
