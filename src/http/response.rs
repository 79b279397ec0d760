/// A well-formed HTTP response, whatever its status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 4xx and 5xx responses are still recorded, only labelled differently.
    pub fn is_error_status(&self) -> bool {
        self.status >= 400
    }
}
