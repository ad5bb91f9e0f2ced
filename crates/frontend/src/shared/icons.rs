use leptos::prelude::*;

/// Stroke-only 24x24 icon frame
fn outline(size: u32, shapes: AnyView) -> AnyView {
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {shapes}
        </svg>
    }
    .into_any()
}

/// Sidebar icons are 20px, toolbar icons 16px
pub fn icon(name: &str) -> AnyView {
    match name {
        "payments" => outline(
            20,
            view! {
                <rect x="2" y="5" width="20" height="14" rx="2" />
                <path d="M2 10h20" />
            }
            .into_any(),
        ),
        "services" => outline(
            20,
            view! {
                <rect x="3" y="3" width="7" height="7" rx="1" />
                <rect x="14" y="3" width="7" height="7" rx="1" />
                <rect x="14" y="14" width="7" height="7" rx="1" />
                <rect x="3" y="14" width="7" height="7" rx="1" />
            }
            .into_any(),
        ),
        "medication" => outline(
            20,
            view! {
                <path d="M10.5 20.5 3.5 13.5a5 5 0 0 1 7-7l7 7a5 5 0 0 1-7 7z" />
                <path d="m8.5 8.5 7 7" />
            }
            .into_any(),
        ),
        "plus" => outline(16, view! { <path d="M12 5v14M5 12h14" /> }.into_any()),
        "refresh" => outline(
            16,
            view! { <path d="M21 12a9 9 0 1 1-3-6.7L21 8M21 3v5h-5" /> }.into_any(),
        ),
        "edit" => outline(
            16,
            view! { <path d="M12 20h9M16.5 3.5a2.1 2.1 0 0 1 3 3L7 19l-4 1 1-4z" /> }.into_any(),
        ),
        "power" => outline(
            16,
            view! { <path d="M12 2v10M18.4 6.6a9 9 0 1 1-12.8 0" /> }.into_any(),
        ),
        "save" => outline(
            16,
            view! { <path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2zM17 21v-8H7v8" /> }
                .into_any(),
        ),
        _ => outline(20, view! { <circle cx="12" cy="12" r="10" /> }.into_any()),
    }
}
