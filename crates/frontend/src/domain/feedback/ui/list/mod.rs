pub mod state;

use self::state::create_state;
use crate::domain::feedback::FeedbackService;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::dialog::alert;
use crate::shared::fallback::MutationOutcome;
use crate::shared::list_state::LoadPhase;
use crate::shared::list_utils::{contains_ci, Searchable};
use contracts::domain::feedback::Feedback;
use contracts::enums::FeedbackStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

impl Searchable for Feedback {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(
            [
                self.customer_name.as_str(),
                self.email.as_str(),
                self.message.as_str(),
            ],
            filter,
        )
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "customer_name" => Some(self.customer_name.clone()),
            "email" => Some(self.email.clone()),
            "message" => Some(self.message.clone()),
            "status" => Some(self.status.code().to_string()),
            _ => None,
        }
    }
}

fn status_style(status: FeedbackStatus) -> &'static str {
    match status {
        FeedbackStatus::Replied => "padding: 2px 8px; border-radius: 12px; background: #d4edda; color: #155724;",
        _ => "padding: 2px 8px; border-radius: 12px; background: #fff3cd; color: #856404;",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn FeedbackList() -> impl IntoView {
    let service = StoredValue::new(FeedbackService::browser());
    let state = create_state();
    let search = RwSignal::new(String::new());
    let reply_text = RwSignal::new(String::new());
    let show_reply = RwSignal::new(false);

    let load = move || {
        state.update(|s| s.list.begin_load());
        spawn_local(async move {
            let result = service.get_value().list().await;
            state.update(|s| s.list.finish_load(result));
        });
    };

    // applies a mutation outcome, reloading when the server took it
    let settle = move |outcome: MutationOutcome<Feedback>| {
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

    let open_reply = move |feedback: Feedback| {
        reply_text.set(String::new());
        state.update(|s| s.selected = Some(feedback));
        show_reply.set(true);
    };

    let send_reply = move || {
        let text = reply_text.get_untracked();
        let Some(selected) = state.with_untracked(|s| s.selected.clone()) else {
            return;
        };
        if text.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match service.get_value().reply(selected.id, &text).await {
                Ok(outcome) => settle(outcome),
                Err(e) => alert(&format!("Không thể gửi trả lời: {}", e)),
            }
            reply_text.set(String::new());
            state.update(|s| s.selected = None);
            show_reply.set(false);
        });
    };

    let close_feedback = move |id: i64| {
        spawn_local(async move {
            match service
                .get_value()
                .update_status(id, FeedbackStatus::Closed)
                .await
            {
                Ok(outcome) => settle(outcome),
                Err(e) => alert(&format!("Không thể cập nhật trạng thái: {}", e)),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Quản lý Feedback"</h1>
                </div>
                <div class="page__header-right" style="display: flex; gap: 8px;">
                    <Input value=search placeholder="Tìm kiếm..." />
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
                                <TableHeaderCell>"Khách hàng"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Nội dung"</TableHeaderCell>
                                <TableHeaderCell>"Ngày"</TableHeaderCell>
                                <TableHeaderCell>"Trạng thái"</TableHeaderCell>
                                <TableHeaderCell>"Thao tác"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                state
                                    .with(|s| s.list.visible())
                                    .into_iter()
                                    .map(|f| {
                                        let id = f.id;
                                        let status = f.status;
                                        let for_reply = f.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{f.customer_name}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{f.email}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{f.message}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span style="font-family: monospace;">
                                                            {format_optional_datetime(f.created_at.as_deref())}
                                                        </span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span style=status_style(status)>{status.code()}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            on_click=move |_| open_reply(for_reply.clone())
                                                        >
                                                            "Trả lời"
                                                        </Button>
                                                        <Show when=move || status != FeedbackStatus::Closed>
                                                            <Button
                                                                size=ButtonSize::Small
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| close_feedback(id)
                                                            >
                                                                "Đóng"
                                                            </Button>
                                                        </Show>
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

            <Dialog open=show_reply>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"Trả lời Feedback"</DialogTitle>
                        <DialogContent>
                            {move || {
                                state
                                    .with(|s| s.selected.clone())
                                    .map(|f| {
                                        view! {
                                            <div style="background: #f8f9fa; padding: 12px; border-radius: 6px; margin-bottom: 12px;">
                                                <div>
                                                    <strong>"Khách: "</strong>
                                                    {format!("{} ({})", f.customer_name, f.email)}
                                                </div>
                                                <div style="white-space: pre-wrap; margin-top: 8px;">{f.message}</div>
                                            </div>
                                        }
                                    })
                            }}
                            <Textarea value=reply_text placeholder="Nhập nội dung trả lời..." />
                        </DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| {
                                    state.update(|s| s.selected = None);
                                    show_reply.set(false);
                                }
                            >
                                "Hủy"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || reply_text.get().trim().is_empty())
                                on_click=move |_| send_reply()
                            >
                                "Gửi"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}
