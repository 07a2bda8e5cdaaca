use axum::response::Html;

const CHATBOT_PAGE: &str = include_str!("../../../assets/chatbot.html");

pub async fn chatbot_page() -> Html<&'static str> {
    Html(CHATBOT_PAGE)
}
