use serde::Deserialize;

/// The acting member, passed explicitly on every call that needs one.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: String,
}

/// An optional viewer; absent means an anonymous visitor.
#[derive(Debug, Deserialize)]
pub struct ViewerQuery {
    pub viewer_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub content: String,
}
