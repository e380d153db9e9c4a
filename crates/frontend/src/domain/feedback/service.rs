use contracts::domain::feedback::{Feedback, FeedbackReply};
use contracts::enums::FeedbackStatus;
use contracts::shared::page::ListQuery;

use super::api::FeedbackApi;
use super::mirror::{seed, STORAGE_KEY};
use crate::shared::date_utils::now_rfc3339;
use crate::shared::fallback::{load_or_mirror, mutate_or_mirror, Loaded, MutationOutcome};
use crate::shared::http::{ApiClient, FetchError, GlooTransport, HttpTransport};
use crate::shared::mirror::MirrorStore;
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use crate::system::auth::{BrowserNavigator, Navigator};

pub const FEEDBACK_BANNER: &str =
    "API Feedback chưa sẵn sàng, đang hiển thị dữ liệu tạm (mock).";

/// Feedback list and moderation with the `mock_feedback` mirror as fallback
#[derive(Debug, Clone)]
pub struct FeedbackService<T = GlooTransport, S = BrowserStorage, N = BrowserNavigator> {
    api: FeedbackApi<T, S, N>,
    mirror: MirrorStore<Feedback, S>,
    query: ListQuery,
}

impl FeedbackService {
    pub fn browser() -> Self {
        Self::new(ApiClient::browser(), BrowserStorage)
    }
}

impl<T, S, N> FeedbackService<T, S, N>
where
    T: HttpTransport,
    S: KeyValueStorage,
    N: Navigator,
{
    pub fn new(client: ApiClient<T, S, N>, storage: S) -> Self {
        Self {
            query: client.config().list_query(),
            api: FeedbackApi::new(client),
            mirror: MirrorStore::new(STORAGE_KEY, seed, storage),
        }
    }

    pub fn mirror(&self) -> &MirrorStore<Feedback, S> {
        &self.mirror
    }

    pub async fn list(&self) -> Result<Loaded<Vec<Feedback>>, FetchError> {
        load_or_mirror(
            self.api.list(&self.query),
            || self.mirror.read_mock(),
            FEEDBACK_BANNER,
        )
        .await
    }

    /// Sends a reply; offline the record is marked REPLIED with the reply
    /// text and time.
    pub async fn reply(
        &self,
        id: i64,
        reply: &str,
    ) -> Result<MutationOutcome<Feedback>, FetchError> {
        let body = FeedbackReply {
            reply: reply.to_string(),
        };
        mutate_or_mirror(self.api.reply(id, &body), || {
            let replied_at = now_rfc3339();
            self.mirror.update_by_id(id, |f| {
                f.status = FeedbackStatus::Replied;
                f.last_reply = Some(reply.to_string());
                f.replied_at = Some(replied_at.clone());
            })
        })
        .await
    }

    pub async fn update_status(
        &self,
        id: i64,
        status: FeedbackStatus,
    ) -> Result<MutationOutcome<Feedback>, FetchError> {
        mutate_or_mirror(self.api.update_status(id, status), || {
            self.mirror.update_by_id(id, |f| f.status = status)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fallback::DataSource;
    use crate::shared::storage::MemoryStorage;
    use crate::test_support::{offline_client, test_client, RecordingNavigator, StubTransport};
    use contracts::enums::UserRole;
    use crate::system::auth::SessionStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_server_error_shows_seeded_feedback() {
        let (client, transport, storage) = offline_client();
        transport.push_text(500, "boom");
        let service = FeedbackService::new(client, storage);

        let loaded = service.list().await.unwrap();

        assert_eq!(loaded.source, DataSource::Mirror);
        assert_eq!(
            loaded.warning.as_deref(),
            Some("API Feedback chưa sẵn sàng, đang hiển thị dữ liệu tạm (mock).")
        );
        let ids: Vec<i64> = loaded.value.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(loaded.value[0].customer_name, "Nguyễn Văn A");
        assert_eq!(loaded.value[1].message, "Cần hỗ trợ tra cứu claim.");
    }

    #[tokio::test]
    async fn test_odd_stored_records_are_not_reseeded() {
        let (client, transport, storage) = offline_client();
        let stored = json!([
            {"id": 7, "customerName": null, "email": "a@ev.vn", "message": "Pin yếu", "status": "NEW"},
            {"id": 8, "customerName": "Trần B", "message": "Đang xử lý", "status": "IN_REVIEW"}
        ])
        .to_string();
        storage.set_item(STORAGE_KEY, &stored).unwrap();
        transport.push_text(500, "boom");
        let service = FeedbackService::new(client, storage.clone());

        let loaded = service.list().await.unwrap();

        assert_eq!(loaded.source, DataSource::Mirror);
        let ids: Vec<i64> = loaded.value.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![7, 8]);
        assert_eq!(loaded.value[0].customer_name, "");
        assert_eq!(loaded.value[1].status, FeedbackStatus::New);
        assert_eq!(storage.get_item(STORAGE_KEY).unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_remote_list_leaves_mirror_untouched() {
        let (client, transport, storage) = offline_client();
        transport.push_json(200, json!([{"id": 9, "message": "ok", "status": "CLOSED"}]));
        let service = FeedbackService::new(client, storage.clone());

        let loaded = service.list().await.unwrap();

        assert_eq!(loaded.source, DataSource::Remote);
        assert_eq!(loaded.warning, None);
        assert_eq!(loaded.value[0].status, FeedbackStatus::Closed);
        assert_eq!(storage.get_item(STORAGE_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_offline_reply_marks_replied() {
        let (client, transport, storage) = offline_client();
        transport.push_network_error("offline");
        let service = FeedbackService::new(client, storage);

        let outcome = service.reply(2, "Đã hỗ trợ").await.unwrap();

        let MutationOutcome::Mirrored(items) = outcome else {
            panic!("expected mirrored outcome");
        };
        assert_eq!(items[1].status, FeedbackStatus::Replied);
        assert_eq!(items[1].last_reply.as_deref(), Some("Đã hỗ trợ"));
        assert!(items[1].replied_at.is_some());
        assert_eq!(items[0].status, FeedbackStatus::New);
        assert_eq!(service.mirror().read_mock(), items);
    }

    #[tokio::test]
    async fn test_offline_status_update_only_touches_target() {
        let (client, transport, storage) = offline_client();
        transport.push_status(503);
        let service = FeedbackService::new(client, storage.clone());
        service.mirror().read_mock();
        let before: Vec<serde_json::Value> =
            serde_json::from_str(&storage.get_item(STORAGE_KEY).unwrap().unwrap()).unwrap();

        service.update_status(1, FeedbackStatus::Closed).await.unwrap();

        let after: Vec<serde_json::Value> =
            serde_json::from_str(&storage.get_item(STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(after[0]["status"], json!("CLOSED"));
        assert_eq!(before[1], after[1]);
    }

    #[tokio::test]
    async fn test_unauthorized_does_not_fall_back() {
        let transport = StubTransport::new();
        transport.push_status(401);
        let storage = MemoryStorage::new();
        SessionStore::new(storage.clone()).save("t", UserRole::Admin);
        let navigator = RecordingNavigator::at("/admin/feedback");
        let client = test_client(transport, storage.clone(), navigator.clone());
        let service = FeedbackService::new(client, storage.clone());

        let err = service.list().await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(navigator.redirects(), vec!["/login".to_string()]);
        assert_eq!(storage.get_item(STORAGE_KEY).unwrap(), None);
        assert_eq!(storage.get_item("token").unwrap(), None);
    }

    #[tokio::test]
    async fn test_remote_reply_reports_remote() {
        let (client, transport, storage) = offline_client();
        transport.push_json(200, json!({"feedbackId": 1}));
        let service = FeedbackService::new(client, storage);

        let outcome = service.reply(1, "Cảm ơn").await.unwrap();

        assert_eq!(outcome, MutationOutcome::Remote);
        assert_eq!(
            transport.requests()[0].body.as_deref(),
            Some(r#"{"reply":"Cảm ơn"}"#)
        );
    }
}
