use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: RequestMethod,
    pub url: String,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: RequestMethod::Get,
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestMethod {
    Get,
}

impl Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequestMethod::Get => "GET",
        };
        write!(f, "{}", s)
    }
}
