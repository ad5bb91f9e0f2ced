use super::details::{master_data_details, EditorMode};
use super::screen::MasterDataScreen;
use crate::shared::entity_controller::{EntityController, HttpServiceAdapter};
use crate::shared::forms::{DynamicField, FieldBinding, FieldDescriptor, FieldKind, FieldOption, FieldValue};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::common::EntityRecord;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

pub const STATUS_ALL: &str = "all";

const STATUS_OPTIONS: &[(&str, &str)] = &[(STATUS_ALL, "All"), ("Y", "Active"), ("N", "Inactive")];

/// Records passing the filter bar.
///
/// `search` is matched case-insensitively against every grid cell;
/// `status` is `"all"` or an active flag letter.
pub fn filter_records<T: EntityRecord>(
    items: &[T],
    cells: impl Fn(&T) -> Vec<String>,
    search: &str,
    status: &str,
) -> Vec<T> {
    let needle = search.trim().to_lowercase();
    items
        .iter()
        .filter(|r| status == STATUS_ALL || status.is_empty() || r.active_flag().as_str() == status)
        .filter(|r| {
            needle.is_empty()
                || cells(r)
                    .iter()
                    .any(|c| c.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Generic list page: grid, filter bar, create/edit/deactivate and an
/// inline details panel.
pub fn master_data_page<S: MasterDataScreen>() -> impl IntoView {
    let notifications = use_notifications();
    let controller = StoredValue::new(EntityController::<S::Record>::new(
        Arc::new(HttpServiceAdapter::<S::Record>::new()),
        Arc::new(notifications),
    ));
    let (items, loading, error) =
        controller.with_value(|ctl| (ctl.items(), ctl.is_loading(), ctl.error()));

    let editor = RwSignal::new(None::<EditorMode>);
    let search = RwSignal::new(FieldValue::Null);
    let status = RwSignal::new(FieldValue::text(STATUS_ALL));

    let load = move || {
        let ctl = controller.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = ctl.fetch_all().await;
        });
    };

    let set_active = move |id: i64, active: bool| {
        let ctl = controller.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = ctl.update_active_status(id, active).await;
        });
    };

    let rows = Signal::derive(move || {
        filter_records(
            &items.get(),
            S::cells,
            &search.get().as_input_string(),
            &status.get().as_input_string(),
        )
    });

    load();

    let search_field = FieldDescriptor::new(FieldKind::Text, "search", "Search")
        .placeholder("Code or name");
    let status_field = FieldDescriptor::new(FieldKind::Radio, "status", "Status")
        .options(FieldOption::from_pairs(STATUS_OPTIONS))
        .inline();

    let headers = S::columns()
        .into_iter()
        .map(|title| {
            view! {
                <TableHeaderCell resizable=true min_width=120.0>
                    {title}
                </TableHeaderCell>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{S::Record::list_name()}</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {move || items.get().len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editor.set(Some(EditorMode::Create))
                        disabled=loading
                    >
                        {icon("plus")}
                        {format!(" New {}", S::Record::element_name().to_lowercase())}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Large>
                        <DynamicField
                            descriptor=search_field
                            binding=FieldBinding::Standalone {
                                value: search.into(),
                                on_change: Callback::new(move |v| search.set(v)),
                                submitted: Signal::stored(false),
                            }
                        />
                        <DynamicField
                            descriptor=status_field
                            binding=FieldBinding::Standalone {
                                value: status.into(),
                                on_change: Callback::new(move |v| status.set(v)),
                                submitted: Signal::stored(false),
                            }
                        />
                    </Flex>
                </div>

                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| load()
                            disabled=loading
                        >
                            "Retry"
                        </Button>
                    </div>
                })}

                {move || editor.get().map(|mode| {
                    view! {
                        <div class="details-panel">
                            {master_data_details::<S>(
                                controller.get_value(),
                                mode,
                                Callback::new(move |_| editor.set(None)),
                            )}
                        </div>
                    }
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {headers}
                                <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                rows.get()
                                    .into_iter()
                                    .map(|record| {
                                        let id = record.identity();
                                        let active = record.active_flag().is_active();
                                        let cells = S::cells(&record)
                                            .into_iter()
                                            .map(|text| view! {
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                                                </TableCell>
                                            })
                                            .collect_view();
                                        view! {
                                            <TableRow>
                                                {cells}
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {if active {
                                                            view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge> }.into_any()
                                                        } else {
                                                            view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Inactive"</Badge> }.into_any()
                                                        }}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Flex gap=FlexGap::Small>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| editor.set(Some(EditorMode::Edit(id)))
                                                                disabled=loading
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| set_active(id, !active)
                                                                disabled=loading
                                                            >
                                                                {icon("power")}
                                                                {if active { " Deactivate" } else { " Activate" }}
                                                            </Button>
                                                        </Flex>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_payment_type::aggregate::PaymentType;
    use contracts::domain::common::ActiveFlag;

    fn payment(id: i64, code: &str, name: &str, active: bool) -> PaymentType {
        PaymentType {
            pay_id: id,
            pay_code: code.into(),
            pay_name: name.into(),
            r_active_yn: ActiveFlag::from_bool(active),
            ..Default::default()
        }
    }

    fn cells(r: &PaymentType) -> Vec<String> {
        vec![r.pay_code.clone(), r.pay_name.clone()]
    }

    #[test]
    fn test_filter_by_status_and_search() {
        let items = vec![
            payment(1, "PAY001", "Cash", true),
            payment(2, "PAY002", "Credit card", false),
            payment(3, "PAY003", "Insurance", true),
        ];

        assert_eq!(filter_records(&items, cells, "", STATUS_ALL).len(), 3);
        assert_eq!(filter_records(&items, cells, "", "N")[0].pay_id, 2);
        assert_eq!(filter_records(&items, cells, "CARD", STATUS_ALL)[0].pay_id, 2);
        assert!(filter_records(&items, cells, "card", "Y").is_empty());
        assert_eq!(filter_records(&items, cells, " pay00 ", "Y").len(), 2);
    }
}
