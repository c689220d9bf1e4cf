//! 路径参数提取器
//!
//! 把路径中的正整数 ID 解析为 i64，非法值直接以 400 `ApiResponse` 拒绝，
//! 处理函数无需再做格式校验。

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use crate::models::{ApiResponse, ErrorCode};

/// 路径参数不合法
#[derive(Debug)]
pub struct InvalidPathParam {
    pub name: &'static str,
    pub raw: String,
}

impl fmt::Display for InvalidPathParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid path parameter '{}': {}", self.name, self.raw)
    }
}

impl ResponseError for InvalidPathParam {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            self.to_string(),
        ))
    }
}

/// 解析正整数 ID
pub fn parse_positive_id(name: &'static str, raw: &str) -> Result<i64, InvalidPathParam> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(InvalidPathParam {
            name,
            raw: raw.to_string(),
        }),
    }
}

/// 定义从路径参数提取 i64 的提取器
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = $crate::utils::extractor::InvalidPathParam;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let raw = req.match_info().get($param).unwrap_or_default();
                std::future::ready(
                    $crate::utils::extractor::parse_positive_id($param, raw).map($name),
                )
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{FromRequest, test::TestRequest};

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id("id", "17").ok(), Some(17));
        assert!(parse_positive_id("id", "0").is_err());
        assert!(parse_positive_id("id", "-3").is_err());
        assert!(parse_positive_id("id", "abc").is_err());
    }

    #[actix_web::test]
    async fn test_extractor_reads_match_info() {
        let req = TestRequest::default().param("id", "5").to_http_request();
        let id = SafeIDI64::extract(&req).await.map(|v| v.0).ok();
        assert_eq!(id, Some(5));

        let req = TestRequest::default().param("id", "x").to_http_request();
        assert!(SafeIDI64::extract(&req).await.is_err());
    }
}
