use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PillVariant {
    #[default]
    Default,
    Subtle,
    Elevated,
    /// Rounded square with a dot in each corner.
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PillSize {
    Sm,
    #[default]
    Default,
    Lg,
}

impl PillVariant {
    fn class(self) -> &'static str {
        match self {
            PillVariant::Default => "bg-white dark:bg-[#171717] text-[#737373] border border-[#f5f5f5] dark:border-[#1f1f1f] shadow-[inset_0_1px_2px_rgba(0,0,0,0.05),0_1px_2px_rgba(0,0,0,0.05)] dark:shadow-[inset_0_1px_2px_rgba(0,0,0,0.3),0_1px_2px_rgba(0,0,0,0.2)] rounded-full",
            PillVariant::Subtle => "bg-gray-50 dark:bg-[#1a1a1a] text-[#737373] border border-gray-200 dark:border-[#2a2a2a] shadow-[inset_0_1px_1px_rgba(0,0,0,0.03)] dark:shadow-[inset_0_1px_1px_rgba(0,0,0,0.2)] rounded-full",
            PillVariant::Elevated => "bg-white dark:bg-[#171717] text-[#737373] border border-[#f5f5f5] dark:border-[#1f1f1f] shadow-[inset_0_1px_2px_rgba(0,0,0,0.05),0_2px_4px_rgba(0,0,0,0.08)] dark:shadow-[inset_0_1px_2px_rgba(0,0,0,0.3),0_2px_4px_rgba(0,0,0,0.3)] rounded-full",
            PillVariant::Square => "bg-[#f5f5f5] dark:bg-[#1f1f1f] text-[#737373] border border-[#e5e5e5] dark:border-[#2a2a2a] rounded-md shadow-sm",
        }
    }
}

impl PillSize {
    fn class(self) -> &'static str {
        match self {
            PillSize::Sm => "px-2 py-0.5 text-xs leading-tight",
            PillSize::Default => "px-2.5 py-1 text-sm leading-tight",
            PillSize::Lg => "px-3 py-1.5 text-sm leading-tight",
        }
    }
}

#[component]
pub fn PillBadge(
    #[prop(optional)] variant: PillVariant,
    #[prop(optional)] size: PillSize,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!(
            "relative inline-flex items-center justify-center font-medium transition-all {} {} {class}",
            variant.class(),
            size.class(),
        )>
            {children()}
            {(variant == PillVariant::Square).then(|| view! { <CornerDots /> })}
        </span>
    }
}

/// Four small dots pinned to the corners of the nearest positioned parent.
#[component]
pub fn CornerDots(#[prop(optional)] tight: bool) -> impl IntoView {
    let corners = if tight {
        ["top-0.5 left-0.5", "top-0.5 right-0.5", "bottom-0.5 left-0.5", "bottom-0.5 right-0.5"]
    } else {
        ["top-1 left-1", "top-1 right-1", "bottom-1 left-1", "bottom-1 right-1"]
    };
    corners
        .into_iter()
        .map(|corner| {
            view! {
                <span class=format!(
                    "absolute w-1 h-1 rounded-full bg-[#a0a0a0] dark:bg-[#5a5a5a] {corner}",
                ) />
            }
        })
        .collect_view()
}
