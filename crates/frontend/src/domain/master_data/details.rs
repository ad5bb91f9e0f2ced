use super::screen::MasterDataScreen;
use crate::shared::entity_controller::EntityController;
use crate::shared::forms::{DynamicField, FieldBinding, FieldValue, FormContext};
use crate::shared::icons::icon;
use contracts::domain::common::EntityRecord;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(i64),
}

/// Create/edit form of one record, rendered field by field through
/// [`DynamicField`] bound to a shared [`FormContext`].
///
/// A failed save keeps the form open with the entered values.
pub fn master_data_details<S: MasterDataScreen>(
    controller: EntityController<S::Record>,
    mode: EditorMode,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = FormContext::new(S::to_values(&S::Record::default()));
    let base = StoredValue::new(S::Record::default());
    let loading = RwSignal::new(matches!(mode, EditorMode::Edit(_)));
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let controller = StoredValue::new(controller);

    let ctl = controller.get_value();
    match mode {
        EditorMode::Edit(id) => {
            wasm_bindgen_futures::spawn_local(async move {
                match ctl.get_by_id(id).await {
                    Ok(record) => {
                        form.reset(S::to_values(&record));
                        base.set_value(record);
                    }
                    Err(e) => error.set(Some(format!("Failed to load: {}", e))),
                }
                loading.set(false);
            });
        }
        EditorMode::Create => {
            wasm_bindgen_futures::spawn_local(async move {
                match ctl.get_next_code(S::CODE_PREFIX, S::CODE_PAD).await {
                    // keep whatever the user typed while the request was out
                    Ok(code) if form.value(S::CODE_FIELD).is_empty() => {
                        form.set_value(S::CODE_FIELD, FieldValue::Text(code));
                    }
                    Ok(_) => {}
                    Err(e) => log::warn!("next code for {} unavailable: {}", S::CODE_PREFIX, e),
                }
            });
        }
    }

    let submit = move || {
        if !form.validate_all() {
            return;
        }
        let record = S::from_values(base.get_value(), &form.snapshot());
        if let Err(e) = record.validate() {
            error.set(Some(e));
            return;
        }
        error.set(None);
        saving.set(true);
        let ctl = controller.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = ctl.save(record).await;
            saving.set(false);
            match result {
                Ok(_) => on_close.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let rules = S::rules();
    let fields = S::fields()
        .into_iter()
        .map(|descriptor| {
            let name = descriptor.name.clone();
            let fetcher = controller.with_value(|ctl| S::suggestions(&name, ctl));
            let binding = FieldBinding::FormContext { form, name };
            match fetcher {
                Some(fetcher) => view! {
                    <DynamicField
                        descriptor=descriptor
                        binding=binding
                        rules=rules.clone()
                        fetch_suggestions=fetcher
                    />
                }
                .into_any(),
                None => view! {
                    <DynamicField descriptor=descriptor binding=binding rules=rules.clone() />
                }
                .into_any(),
            }
        })
        .collect_view();

    let title = match mode {
        EditorMode::Create => format!("New {}", S::Record::element_name().to_lowercase()),
        EditorMode::Edit(_) => format!("Edit {}", S::Record::element_name().to_lowercase()),
    };
    let busy = Signal::derive(move || saving.get() || loading.get());

    view! {
        <div class="details">
            <div class="details__header">
                <h2 class="details__title">{title}</h2>
                {move || loading.get().then(|| view! { <Spinner /> })}
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <form
                class="details__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                {fields}
            </form>

            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| submit()
                    disabled=busy
                >
                    {icon("save")}
                    {move || if saving.get() { " Saving..." } else { " Save" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=Signal::derive(move || saving.get())
                >
                    "Cancel"
                </Button>
            </Flex>
        </div>
    }
}
