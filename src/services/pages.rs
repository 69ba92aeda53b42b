//! Server-rendered pages: the dashboard and the per-code stats view.
//!
//! Plain `format!` templates; page routes fail with plain text, not JSON.

use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use tracing::error;

use crate::config::Config;
use crate::errors::LinkletError;
use crate::repository::{Link, LinkStore};

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <style>body{{font-family:sans-serif;margin:2rem}}table{{border-collapse:collapse}}\
         th,td{{border:1px solid #ccc;padding:.4rem .8rem;text-align:left}}</style>\n\
         </head>\n<body>\n{}\n</body>\n</html>\n",
        html_escape(title),
        body
    )
}

fn link_row(base_url: &str, link: &Link) -> String {
    let short_url = format!("{}/{}", base_url.trim_end_matches('/'), link.code);
    let last_clicked = link
        .last_clicked
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "never".to_string());

    format!(
        "<tr><td><a href=\"/code/{code}\">{code}</a></td>\
         <td><a href=\"{short}\">{short}</a></td>\
         <td>{target}</td><td>{clicks}</td><td>{last}</td></tr>",
        code = html_escape(&link.code),
        short = html_escape(&short_url),
        target = html_escape(&link.target_url),
        clicks = link.total_clicks,
        last = html_escape(&last_clicked),
    )
}

pub struct PageService;

impl PageService {
    pub async fn dashboard(
        store: web::Data<Arc<dyn LinkStore>>,
        config: web::Data<Config>,
    ) -> impl Responder {
        let links = match store.list(None).await {
            Ok(links) => links,
            Err(e) => {
                error!("Dashboard failed to load links: {}", e);
                return HttpResponse::InternalServerError()
                    .insert_header(("Content-Type", "text/plain; charset=utf-8"))
                    .body("Internal Server Error");
            }
        };

        let rows: String = links
            .iter()
            .map(|link| link_row(&config.public_base_url, link))
            .collect();

        let body = format!(
            "<h1>Linklet</h1>\n<p>{} links. Create via <code>POST /api/links</code>.</p>\n\
             <table>\n<tr><th>Code</th><th>Short URL</th><th>Target</th>\
             <th>Clicks</th><th>Last clicked</th></tr>\n{}\n</table>",
            links.len(),
            rows
        );

        HttpResponse::Ok()
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .body(page("Linklet", &body))
    }

    pub async fn stats(
        store: web::Data<Arc<dyn LinkStore>>,
        config: web::Data<Config>,
        code: web::Path<String>,
    ) -> impl Responder {
        let link = match store.get(&code).await {
            Ok(link) => link,
            Err(LinkletError::NotFound(_)) => {
                return HttpResponse::NotFound()
                    .insert_header(("Content-Type", "text/plain; charset=utf-8"))
                    .body("Not Found");
            }
            Err(e) => {
                error!("Stats page failed for {}: {}", code, e);
                return HttpResponse::InternalServerError()
                    .insert_header(("Content-Type", "text/plain; charset=utf-8"))
                    .body("Internal Server Error");
            }
        };

        let short_url = format!(
            "{}/{}",
            config.public_base_url.trim_end_matches('/'),
            link.code
        );
        let last_clicked = link
            .last_clicked
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| "never".to_string());

        let body = format!(
            "<h1>{code}</h1>\n<table>\n\
             <tr><th>Short URL</th><td><a href=\"{short}\">{short}</a></td></tr>\n\
             <tr><th>Target</th><td>{target}</td></tr>\n\
             <tr><th>Total clicks</th><td>{clicks}</td></tr>\n\
             <tr><th>Last clicked</th><td>{last}</td></tr>\n\
             <tr><th>Created</th><td>{created}</td></tr>\n\
             </table>\n<p><a href=\"/\">Back</a></p>",
            code = html_escape(&link.code),
            short = html_escape(&short_url),
            target = html_escape(&link.target_url),
            clicks = link.total_clicks,
            last = html_escape(&last_clicked),
            created = html_escape(&link.created_at.to_rfc3339()),
        );

        HttpResponse::Ok()
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .body(page(&format!("Linklet - {}", link.code), &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape("<script>\"&\"</script>"),
            "&lt;script&gt;&quot;&amp;&quot;&lt;/script&gt;"
        );
        assert_eq!(html_escape("plain"), "plain");
    }
}
