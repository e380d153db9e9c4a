use crate::domain::feedback::ui::list::FeedbackList;
use crate::domain::part_requests::ui::list::PartRequestList;
use crate::domain::service_centers::ui::list::ServiceCenterList;
use crate::system::auth::RequireRole;
use contracts::enums::UserRole;
use leptos::prelude::*;
use thaw::*;

/// Admin screens reachable from the top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminPage {
    #[default]
    Feedback,
    PartRequests,
    ServiceCenters,
}

impl AdminPage {
    pub fn all() -> [AdminPage; 3] {
        [AdminPage::Feedback, AdminPage::PartRequests, AdminPage::ServiceCenters]
    }

    pub fn title(&self) -> &'static str {
        match self {
            AdminPage::Feedback => "Feedback",
            AdminPage::PartRequests => "Yêu cầu phụ tùng",
            AdminPage::ServiceCenters => "Trung tâm dịch vụ",
        }
    }

    /// Roles allowed to open the page
    pub fn roles(&self) -> Vec<UserRole> {
        match self {
            AdminPage::PartRequests => vec![UserRole::Admin, UserRole::EvmStaff],
            AdminPage::Feedback | AdminPage::ServiceCenters => vec![UserRole::Admin],
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let active = RwSignal::new(AdminPage::default());

    view! {
        <div class="app">
            <div class="app__nav" style="display: flex; gap: 8px; padding: 8px 16px;">
                {AdminPage::all()
                    .into_iter()
                    .map(|page| {
                        let appearance = Signal::derive(move || {
                            if active.get() == page {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Subtle
                            }
                        });
                        view! {
                            <Button appearance=appearance on_click=move |_| active.set(page)>
                                {page.title()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                let page = active.get();
                let roles = page.roles();
                match page {
                    AdminPage::Feedback => {
                        view! { <RequireRole roles=roles><FeedbackList /></RequireRole> }.into_any()
                    }
                    AdminPage::PartRequests => {
                        view! { <RequireRole roles=roles><PartRequestList /></RequireRole> }.into_any()
                    }
                    AdminPage::ServiceCenters => {
                        view! { <RequireRole roles=roles><ServiceCenterList /></RequireRole> }.into_any()
                    }
                }
            }}
        </div>
    }
}
