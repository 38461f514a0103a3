use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct EntryDoc {
    pub id: String,
    pub title: String,
    pub content: String,
    /// RFC 3339 creation time
    pub date: String,
    /// RFC 3339 time of the last update; absent until the first update
    pub updated_at: Option<String>,
}

#[derive(ToSchema)]
pub struct EntryInputDoc { pub title: String, pub content: String }

#[derive(ToSchema)]
pub struct AckDoc { pub success: bool }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::entries::list_entries,
        crate::routes::entries::create_entry,
        crate::routes::entries::get_entry,
        crate::routes::entries::update_entry,
        crate::routes::entries::delete_entry,
    ),
    components(
        schemas(
            HealthResponse,
            EntryDoc,
            EntryInputDoc,
            AckDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "entries")
    )
)]
pub struct ApiDoc;
