use crate::domain::a001_payment_type::ui::PaymentTypeList;
use crate::domain::a002_service_group::ui::ServiceGroupList;
use crate::domain::a003_medication_instruction::ui::MedicationInstructionList;
use crate::shared::icons::icon;
use crate::shared::notifications::{NotificationService, Toasts};
use leptos::prelude::*;

/// Master-data screens reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    PaymentTypes,
    ServiceGroups,
    MedicationInstructions,
}

impl Screen {
    pub const ALL: [Screen; 3] = [
        Screen::PaymentTypes,
        Screen::ServiceGroups,
        Screen::MedicationInstructions,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::PaymentTypes => "Payment types",
            Screen::ServiceGroups => "Service groups",
            Screen::MedicationInstructions => "Medication instructions",
        }
    }

    fn icon_name(self) -> &'static str {
        match self {
            Screen::PaymentTypes => "payments",
            Screen::ServiceGroups => "services",
            Screen::MedicationInstructions => "medication",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(NotificationService::new());
    let active = RwSignal::new(Screen::PaymentTypes);

    view! {
        <div class="app">
            <nav class="sidebar">
                {Screen::ALL
                    .into_iter()
                    .map(|screen| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == screen {
                                        "sidebar__item sidebar__item--active"
                                    } else {
                                        "sidebar__item"
                                    }
                                }
                                on:click=move |_| active.set(screen)
                            >
                                {icon(screen.icon_name())}
                                <span>{screen.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <main class="app__main">
                {move || match active.get() {
                    Screen::PaymentTypes => view! { <PaymentTypeList /> }.into_any(),
                    Screen::ServiceGroups => view! { <ServiceGroupList /> }.into_any(),
                    Screen::MedicationInstructions => view! { <MedicationInstructionList /> }.into_any(),
                }}
            </main>
            <Toasts />
        </div>
    }
}
