use tracing::info;

pub enum ApiPath {
    Static(&'static str),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
        }
    }
}

/// Prefix every backend api route is nested under.
pub const BACKEND_API_PREFIX: &str = "/api";

#[derive(Debug, Clone)]
pub enum BackendApiChatbot {
    Generate,
}

impl BackendApiChatbot {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiChatbot::Generate => ApiPath::Static("/empathic-chatbot"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BackendApiPing {
    Ping,
}

impl BackendApiPing {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiPing::Ping => ApiPath::Static("/ping"),
        }
    }
}

/// Pages served outside of the api prefix.
#[derive(Debug, Clone)]
pub enum BackendPage {
    Index,
    Chatbot,
}

impl BackendPage {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendPage::Index => ApiPath::Static("/"),
            BackendPage::Chatbot => ApiPath::Static("/chatbot"),
        }
    }
}

/// Joins a base url with an api path, e.g. `http://localhost:3000/api/ping`.
pub fn backend_api_url(base_url: &str, path: &ApiPath) -> String {
    format!(
        "{}{}{}",
        base_url.trim_end_matches('/'),
        BACKEND_API_PREFIX,
        path.as_str()
    )
}

pub fn print_all_backend_api_paths() {
    for chatbot in [BackendApiChatbot::Generate].iter() {
        info!("POST {}{}", BACKEND_API_PREFIX, chatbot.path().as_str());
    }

    for ping in [BackendApiPing::Ping].iter() {
        info!("GET  {}{}", BACKEND_API_PREFIX, ping.path().as_str());
    }

    for page in [BackendPage::Index, BackendPage::Chatbot].iter() {
        info!("GET  {}", page.path().as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_api_url_joins_prefix() {
        assert_eq!(
            backend_api_url("http://localhost:3000", &BackendApiChatbot::Generate.path()),
            "http://localhost:3000/api/empathic-chatbot"
        );
    }

    #[test]
    fn test_backend_api_url_trims_trailing_slash() {
        assert_eq!(
            backend_api_url("http://localhost:3000/", &BackendApiPing::Ping.path()),
            "http://localhost:3000/api/ping"
        );
    }
}
