// src/middleware/flash.rs

// Avisos "flash": gravados num cookie no redirect e consumidos
// (e apagados) pela próxima tela renderizada.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::models::view::Notice;

pub const NOTICE_COOKIE: &str = "notice";

pub struct Flash {
    jar: CookieJar,
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Flash {
            jar: CookieJar::from_headers(&parts.headers),
        })
    }
}

impl Flash {
    /// Lê o aviso pendente e devolve o jar com o cookie já removido.
    /// Um cookie corrompido é simplesmente descartado.
    pub fn take(self) -> (CookieJar, Option<Notice>) {
        let notice = self
            .jar
            .get(NOTICE_COOKIE)
            .and_then(|cookie| serde_json::from_str::<Notice>(cookie.value()).ok());

        let jar = if self.jar.get(NOTICE_COOKIE).is_some() {
            self.jar.remove(Cookie::build(NOTICE_COOKIE).path("/"))
        } else {
            self.jar
        };

        (jar, notice)
    }

    pub fn set(self, notice: Notice) -> CookieJar {
        match serde_json::to_string(&notice) {
            Ok(value) => self.jar.add(
                Cookie::build((NOTICE_COOKIE, value))
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax),
            ),
            Err(e) => {
                tracing::warn!("Falha ao serializar aviso: {}", e);
                self.jar
            }
        }
    }

    pub fn success(self, message: impl Into<String>) -> CookieJar {
        self.set(Notice::success(message))
    }

    pub fn danger(self, message: impl Into<String>) -> CookieJar {
        self.set(Notice::danger(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::view::NoticeLevel;
    use axum::http::{header, HeaderMap, HeaderValue};

    fn flash_with_cookie(raw: &str) -> Flash {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(raw).unwrap());
        Flash {
            jar: CookieJar::from_headers(&headers),
        }
    }

    #[test]
    fn set_then_take_returns_the_notice_once() {
        let empty = Flash {
            jar: CookieJar::new(),
        };
        let jar = empty.success("Product added");
        let stored = jar.get(NOTICE_COOKIE).unwrap().value().to_string();

        let flash = Flash {
            jar: CookieJar::new().add(Cookie::new(NOTICE_COOKIE, stored)),
        };
        let (_, notice) = flash.take();
        let notice = notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Product added");
    }

    #[test]
    fn take_without_cookie_yields_nothing() {
        let flash = Flash {
            jar: CookieJar::new(),
        };
        let (_, notice) = flash.take();
        assert!(notice.is_none());
    }

    #[test]
    fn garbage_cookie_is_ignored() {
        let (jar, notice) = flash_with_cookie("notice=not-json").take();
        assert!(notice.is_none());
        assert!(jar.get(NOTICE_COOKIE).is_none());
    }
}
