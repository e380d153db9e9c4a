pub mod state;

use self::state::create_state;
use crate::domain::part_requests::PartRequestsService;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::dialog::alert;
use crate::shared::list_state::LoadPhase;
use crate::shared::list_utils::{contains_ci, Searchable};
use contracts::domain::part_request::PartRequest;
use contracts::enums::PartRequestStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

impl Searchable for PartRequest {
    fn matches_filter(&self, filter: &str) -> bool {
        let claim = self.claim_id.map(|c| c.to_string()).unwrap_or_default();
        contains_ci(
            [
                claim.as_str(),
                self.part_id.as_str(),
                self.part_name.as_str(),
                self.status.code(),
            ],
            filter,
        )
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "claim_id" => self.claim_id.map(|c| c.to_string()),
            "part" => Some(display_part(self)),
            "status" => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

/// Part name, or the part id when the name is missing
fn display_part(request: &PartRequest) -> String {
    if request.part_name.is_empty() {
        request.part_id.clone()
    } else {
        request.part_name.clone()
    }
}

fn status_style(status: PartRequestStatus) -> &'static str {
    match status {
        PartRequestStatus::Approved => "padding: 2px 8px; border-radius: 12px; background: #d4edda; color: #155724;",
        PartRequestStatus::Rejected => "padding: 2px 8px; border-radius: 12px; background: #f8d7da; color: #721c24;",
        _ => "padding: 2px 8px; border-radius: 12px; background: #fff3cd; color: #856404;",
    }
}

fn claim_label(claim_id: Option<i64>) -> String {
    claim_id.map(|c| format!("#{}", c)).unwrap_or_else(|| "-".to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn PartRequestList() -> impl IntoView {
    let service = StoredValue::new(PartRequestsService::browser());
    let state = create_state();
    let search = RwSignal::new(String::new());
    let show_details = RwSignal::new(false);

    let load = move || {
        state.update(|s| s.list.begin_load());
        spawn_local(async move {
            let result = service.get_value().list().await;
            state.update(|s| s.list.finish_load(result));
        });
    };

    Effect::new(move |_| load());

    Effect::new(move |_| {
        let text = search.get();
        state.update(|s| s.list.search = text);
    });

    let update_status = move |id: i64, status: PartRequestStatus| {
        spawn_local(async move {
            match service.get_value().update_status(id, status).await {
                Ok(outcome) => {
                    let mut reload = false;
                    state.update(|s| reload = s.list.apply_mutation(outcome));
                    if reload {
                        load();
                    }
                }
                Err(e) => alert(&format!("Không thể cập nhật trạng thái: {}", e)),
            }
        });
    };

    let open_details = move |request: PartRequest| {
        state.update(|s| s.selected = Some(request));
        show_details.set(true);
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Yêu cầu phụ tùng"</h1>
                </div>
                <div class="page__header-right" style="display: flex; gap: 8px;">
                    <Input value=search placeholder="Tìm theo Claim/Part/Trạng thái..." />
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
                                <TableHeaderCell>"Claim"</TableHeaderCell>
                                <TableHeaderCell>"Phụ tùng"</TableHeaderCell>
                                <TableHeaderCell>"Số lượng"</TableHeaderCell>
                                <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                                <TableHeaderCell>"Ngày yêu cầu"</TableHeaderCell>
                                <TableHeaderCell>"Thao tác"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                state
                                    .with(|s| s.list.visible())
                                    .into_iter()
                                    .map(|r| {
                                        let id = r.id;
                                        let status = r.status;
                                        let part = display_part(&r);
                                        let for_details = r.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{claim_label(r.claim_id)}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{part}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{r.quantity}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span style=status_style(status)>{status.code()}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span style="font-family: monospace;">
                                                            {format_optional_datetime(r.requested_at.as_deref())}
                                                        </span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            on_click=move |_| open_details(for_details.clone())
                                                        >
                                                            "Xem"
                                                        </Button>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Primary
                                                            disabled={status == PartRequestStatus::Approved}
                                                            on_click=move |_| update_status(id, PartRequestStatus::Approved)
                                                        >
                                                            "Duyệt"
                                                        </Button>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Subtle
                                                            disabled={status == PartRequestStatus::Rejected}
                                                            on_click=move |_| update_status(id, PartRequestStatus::Rejected)
                                                        >
                                                            "Từ chối"
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

            <Dialog open=show_details>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Chi tiết yêu cầu"</DialogTitle>
                        <DialogContent>
                            {move || {
                                state
                                    .with(|s| s.selected.clone())
                                    .map(|r| {
                                        view! {
                                            <div style="background: #f8f9fa; padding: 12px; border-radius: 6px;">
                                                <div><strong>"Claim: "</strong>{claim_label(r.claim_id)}</div>
                                                <div><strong>"Part: "</strong>{display_part(&r)}</div>
                                                <div><strong>"Số lượng: "</strong>{r.quantity}</div>
                                                <div><strong>"Trạng thái: "</strong>{r.status.display_name()}</div>
                                                <div>
                                                    <strong>"Ngày yêu cầu: "</strong>
                                                    {format_optional_datetime(r.requested_at.as_deref())}
                                                </div>
                                            </div>
                                        }
                                    })
                            }}
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    state.update(|s| s.selected = None);
                                    show_details.set(false);
                                }
                            >
                                "Đóng"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}
