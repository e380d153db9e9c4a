pub mod state;

use self::state::create_state;
use crate::domain::service_centers::ServiceCentersService;
use crate::shared::dialog::{alert, confirm};
use crate::shared::fallback::MutationOutcome;
use crate::shared::list_state::LoadPhase;
use crate::shared::list_utils::{
    contains_ci, create_sort_toggle, get_sort_indicator, sort_list, Searchable, Sortable,
};
use contracts::domain::service_center::ServiceCenter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

impl Searchable for ServiceCenter {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(
            [self.name.as_str(), self.address.as_str(), self.phone.as_str()],
            filter,
        )
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "address" => Some(self.address.clone()),
            "phone" => Some(self.phone.clone()),
            "opening_hours" => Some(self.opening_hours.clone()),
            _ => None,
        }
    }
}

impl Sortable for ServiceCenter {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "address" => self.address.to_lowercase().cmp(&other.address.to_lowercase()),
            "id" => self.id.cmp(&other.id),
            _ => Ordering::Equal,
        }
    }
}

fn coordinates(center: &ServiceCenter) -> String {
    format!("{:.4}, {:.4}", center.latitude, center.longitude)
}

#[component]
#[allow(non_snake_case)]
pub fn ServiceCenterList() -> impl IntoView {
    let service = StoredValue::new(ServiceCentersService::browser());
    let state = create_state();
    let search = RwSignal::new(String::new());
    let show_form = RwSignal::new(false);
    let sort_field = RwSignal::new(String::new());
    let sort_ascending = RwSignal::new(true);

    // form fields bound to the dialog inputs
    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let opening_hours = RwSignal::new(String::new());
    let latitude = RwSignal::new(String::new());
    let longitude = RwSignal::new(String::new());

    let load = move || {
        state.update(|s| s.list.begin_load());
        spawn_local(async move {
            let result = service.get_value().list().await;
            state.update(|s| s.list.finish_load(result));
        });
    };

    let settle = move |outcome: MutationOutcome<ServiceCenter>| {
        let mut reload = false;
        state.update(|s| reload = s.list.apply_mutation(outcome));
        if reload {
            load();
        }
    };

    Effect::new(move |_| load());

    Effect::new(move |_| {
        let text = search.get();
        state.update(|s| s.list.search = text);
    });

    let fill_form = move || {
        let form = state.with_untracked(|s| s.form.clone());
        name.set(form.name);
        address.set(form.address);
        phone.set(form.phone);
        opening_hours.set(form.opening_hours);
        latitude.set(form.latitude);
        longitude.set(form.longitude);
        show_form.set(true);
    };

    let open_create = move || {
        state.update(|s| s.start_create());
        fill_form();
    };

    let open_edit = move |center: ServiceCenter| {
        state.update(|s| s.start_edit(&center));
        fill_form();
    };

    let submit = move || {
        state.update(|s| {
            s.form.name = name.get_untracked();
            s.form.address = address.get_untracked();
            s.form.phone = phone.get_untracked();
            s.form.opening_hours = opening_hours.get_untracked();
            s.form.latitude = latitude.get_untracked();
            s.form.longitude = longitude.get_untracked();
            s.saving = true;
        });
        let (editing, form) = state.with_untracked(|s| (s.editing, s.form.clone()));
        spawn_local(async move {
            match service.get_value().save_form(editing, &form).await {
                Ok(outcome) => {
                    show_form.set(false);
                    settle(outcome);
                }
                Err(e) => alert(&format!("Không thể lưu trung tâm dịch vụ: {}", e)),
            }
            state.update(|s| s.saving = false);
        });
    };

    let remove = move |id: i64| {
        if !confirm("Xóa trung tâm dịch vụ này?") {
            return;
        }
        spawn_local(async move {
            match service.get_value().remove(id).await {
                Ok(outcome) => settle(outcome),
                Err(e) => alert(&format!("Không thể xóa: {}", e)),
            }
        });
    };

    let rows = move || {
        let mut items = state.with(|s| s.list.visible());
        let field = sort_field.get();
        if !field.is_empty() {
            sort_list(&mut items, &field, sort_ascending.get());
        }
        items
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Quản lý Trung tâm dịch vụ"</h1>
                </div>
                <div class="page__header-right" style="display: flex; gap: 8px;">
                    <Input value=search placeholder="Tìm kiếm..." />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                        "Thêm"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                        "Làm mới"
                    </Button>
                </div>
            </div>

            {move || {
                state
                    .with(|s| s.list.banner.clone())
                    .map(|banner| {
                        view! {
                            <MessageBar intent=MessageBarIntent::Warning>
                                <MessageBarBody>{banner}</MessageBarBody>
                            </MessageBar>
                        }
                    })
            }}

            <div class="page__content">
                <Show
                    when=move || state.with(|s| s.list.phase != LoadPhase::Loading)
                    fallback=|| view! { <div style="padding: 24px;">"Đang tải..."</div> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>
                                    <div style="cursor: pointer;" on:click=create_sort_toggle("name", sort_field, sort_ascending)>
                                        "Tên"
                                        {move || get_sort_indicator(&sort_field.get(), "name", sort_ascending.get())}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>
                                    <div style="cursor: pointer;" on:click=create_sort_toggle("address", sort_field, sort_ascending)>
                                        "Địa chỉ"
                                        {move || get_sort_indicator(&sort_field.get(), "address", sort_ascending.get())}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>"Điện thoại"</TableHeaderCell>
                                <TableHeaderCell>"Giờ mở cửa"</TableHeaderCell>
                                <TableHeaderCell>"Tọa độ"</TableHeaderCell>
                                <TableHeaderCell>"Thao tác"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                rows()
                                    .into_iter()
                                    .map(|c| {
                                        let id = c.id;
                                        let coords = coordinates(&c);
                                        let for_edit = c.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{c.name}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{c.address}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{c.phone}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{c.opening_hours}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span style="font-family: monospace;">{coords}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            on_click=move |_| open_edit(for_edit.clone())
                                                        >
                                                            "Sửa"
                                                        </Button>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| remove(id)
                                                        >
                                                            "Xóa"
                                                        </Button>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </Show>
            </div>

            <Dialog open=show_form>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>
                            {move || {
                                if state.with(|s| s.editing.is_some()) {
                                    "Sửa trung tâm dịch vụ"
                                } else {
                                    "Thêm trung tâm dịch vụ"
                                }
                            }}
                        </DialogTitle>
                        <DialogContent>
                            <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 8px;">
                                <Input value=name placeholder="Tên" />
                                <Input value=phone placeholder="Điện thoại" />
                                <Input value=address placeholder="Địa chỉ" />
                                <Input value=opening_hours placeholder="Giờ mở cửa (08:00 - 17:00)" />
                                <Input value=latitude placeholder="Vĩ độ" />
                                <Input value=longitude placeholder="Kinh độ" />
                            </div>
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| show_form.set(false)
                            >
                                "Hủy"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || state.with(|s| s.saving))
                                on_click=move |_| submit()
                            >
                                "Lưu"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}
