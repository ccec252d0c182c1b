use leptos::{html, prelude::*};
use leptos_use::{on_click_outside, use_window_size, UseWindowSizeReturn};

use super::dom;
use crate::interaction::{
    chip::{logo_url, Chip},
    device::DeviceCapability,
};

#[derive(Clone, Copy)]
struct DeviceContext(Signal<DeviceCapability>);

/// Classify the device once for the whole tree; re-evaluated on resize.
pub fn provide_device_capability() {
    let UseWindowSizeReturn { width, .. } = use_window_size();
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    // touch support is re-read with every width change
    let device = Memo::new(move |_| {
        let width = width.get();
        let (touch_events, points) = if mounted.get() {
            dom::touch_support()
        } else {
            (false, 0)
        };
        DeviceCapability::classify(width, touch_events, points)
    });
    provide_context(DeviceContext(device.into()));
}

/// Logo chip that expands to show its label. Renders nothing for unknown
/// technologies.
#[component]
pub fn TechChip(#[prop(into)] tech: String) -> impl IntoView {
    logo_url(&tech).map(|logo| view! { <ChipBody tech logo /> })
}

#[component]
fn ChipBody(tech: String, logo: String) -> impl IntoView {
    let title = tech.clone();
    let alt = tech.clone();
    let DeviceContext(device) = expect_context::<DeviceContext>();

    let chip = RwSignal::new(Chip::new(device.get_untracked().interaction_mode()));
    Effect::watch(
        move || device.get().interaction_mode(),
        move |mode, _, _| chip.update(|c| c.set_mode(*mode)),
        false,
    );

    let container = NodeRef::<html::Div>::new();
    let label = NodeRef::<html::Span>::new();
    let text_width = RwSignal::new(None::<f64>);
    let measure = move || {
        let width = label
            .get_untracked()
            .map(|el| el.offset_width() as f64)
            .filter(|w| *w > 0.0);
        if width.is_some() {
            text_width.set(width);
        }
    };

    let _ = on_click_outside(container, move |_| {
        chip.update(|c| c.outside_interaction())
    });

    let expanded = move || chip.get().is_expanded();

    view! {
        <div
            node_ref=container
            class="group relative inline-flex h-7 cursor-pointer select-none items-center overflow-hidden rounded-full border border-transparent bg-gray-100 transition-all duration-500 ease-in-out hover:bg-gray-200 dark:bg-[#2a2a2a] dark:hover:border-gray-600 dark:hover:bg-[#3a3a3a] md:cursor-default"
            style=move || {
                format!(
                    "{} -webkit-tap-highlight-color: transparent; touch-action: manipulation;",
                    chip.get().css(text_width.get()),
                )
            }
            title=title
            on:mouseenter=move |_| {
                measure();
                chip.update(|c| c.pointer_enter());
            }
            on:mouseleave=move |_| chip.update(|c| c.pointer_leave())
            on:click=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                measure();
                chip.update(|c| c.tap());
            }
        >
            <img
                src=logo
                alt=alt
                width="16"
                height="16"
                class="absolute left-[0.375rem] h-4 w-4 shrink-0"
            />
            <span
                node_ref=label
                class=move || {
                    if expanded() {
                        "absolute left-[1.75rem] whitespace-nowrap pr-2 text-xs font-medium opacity-100 transition-opacity duration-200"
                    } else {
                        "invisible absolute left-[1.75rem] whitespace-nowrap pr-2 text-xs font-medium opacity-0"
                    }
                }
            >
                {tech}
            </span>
        </div>
    }
}

#[component]
pub fn TechChips(techs: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {techs.iter().map(|tech| view! { <TechChip tech=*tech /> }).collect_view()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    fn render(tech: &'static str) -> String {
        let owner = Owner::new();
        owner.set();
        provide_context(DeviceContext(Signal::stored(DeviceCapability::default())));
        view! { <TechChip tech /> }.to_html()
    }

    #[test]
    fn test_server_render_labels_chip() {
        let html = render("React");
        assert!(html.contains(r#"title="React""#));
        assert!(html.contains(r#"alt="React""#));
        // title, alt and the label itself
        assert_eq!(html.matches("React").count(), 3);
    }

    #[test]
    fn test_unknown_tech_renders_nothing() {
        let html = render("COBOL");
        assert!(!html.contains("COBOL"));
        assert!(!html.contains("<img"));
    }
}
