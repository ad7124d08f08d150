//! Button component with variants and sizes.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled accent button.
    #[default]
    Primary,
    /// Transparent button for header actions.
    Ghost,
    /// Round floating action button.
    Floating,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-white hover:bg-primaryMuted",
            Self::Ghost => "bg-transparent text-textPrimary hover:bg-panel",
            Self::Floating => "bg-primary text-white shadow-lg rounded-full hover:scale-105",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Medium button (default).
    #[default]
    Md,
    /// Icon-only button.
    Icon,
    /// Large icon-only button.
    IconLg,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Md => "h-10 px-4 text-sm",
            Self::Icon => "h-10 w-10",
            Self::IconLg => "h-14 w-14",
        }
    }
}

/// Button component.
///
/// `id` is how the widget's triggers are addressed from the page.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button id="sendBtn" variant=ButtonVariant::Primary size=ButtonSize::Icon>
///         <SendIcon />
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Element ID.
    #[prop(optional)]
    id: Option<&'static str>,
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Accessible label for icon-only buttons.
    #[prop(optional)]
    aria_label: Option<&'static str>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center rounded-lg font-medium \
                        transition-colors focus-visible:outline-none focus-visible:ring-2 \
                        focus-visible:ring-primary focus-visible:ring-offset-2";

    let classes = format!(
        "{} {} {} {}",
        base_classes,
        variant.classes(),
        size.classes(),
        class
    );

    view! {
        <button type="button" id=id class=classes aria-label=aria_label>
            {children()}
        </button>
    }
}
