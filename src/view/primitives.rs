// src/view/primitives.rs
//
// Styled building blocks of the page. Text arguments are escaped here;
// arguments named `inner` or `cells` are markup and are inserted as is.

use url::Url;

use crate::utils::html::escape;

pub const STYLESHEET: &str = r#"
.container { max-width: 1200px; margin: 0 auto; padding: 20px; font-family: sans-serif; }
.title { margin-bottom: 20px; color: #333; }
.sub-title { margin-bottom: 15px; color: #444; }
.form { margin-bottom: 20px; }
.input, .select { box-sizing: border-box; width: 100%; padding: 10px; margin-bottom: 10px; border: 1px solid #ddd; border-radius: 4px; }
.select { cursor: pointer; }
.button { display: inline-block; padding: 10px 15px; background-color: #007bff; color: white; border: none; border-radius: 4px; cursor: pointer; transition: background-color 0.3s; margin-bottom: 10px; text-decoration: none; font-size: 14px; }
.button:hover { background-color: #0056b3; }
.table { width: 100%; border-collapse: collapse; margin-bottom: 20px; }
.th { background-color: #f8f9fa; padding: 12px; text-align: left; border-bottom: 2px solid #dee2e6; }
.td { padding: 12px; border-bottom: 1px solid #dee2e6; }
.alert { padding: 12px; background-color: #d4edda; color: #155724; border: 1px solid #c3e6cb; border-radius: 4px; margin-bottom: 15px; }
.alert-error { background-color: #f8d7da; color: #721c24; border-color: #f5c6cb; }
.link { color: #007bff; text-decoration: none; }
.link:hover { text-decoration: underline; }
.message { color: #6c757d; font-style: italic; }
"#;

pub fn document(title: &str, inner: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        STYLESHEET,
        inner
    )
}

pub fn container(inner: &str) -> String {
    format!("<div class=\"container\">\n{}</div>", inner)
}

pub fn title(text: &str) -> String {
    format!("<h1 class=\"title\">{}</h1>\n", escape(text))
}

pub fn sub_title(text: &str) -> String {
    format!("<h2 class=\"sub-title\">{}</h2>\n", escape(text))
}

pub fn submit_button(label: &str) -> String {
    format!(
        "<button class=\"button\" type=\"submit\">{}</button>\n",
        escape(label)
    )
}

/// An anchor styled as a button that downloads `href`.
pub fn download_button(href: &str, label: &str) -> String {
    format!(
        "<a class=\"button\" href=\"{}\" download>{}</a>\n",
        escape(href),
        escape(label)
    )
}

/// Success notice.
pub fn alert(text: &str) -> String {
    format!("<div class=\"alert\" role=\"status\">{}</div>\n", escape(text))
}

pub fn error_alert(text: &str) -> String {
    format!(
        "<div class=\"alert alert-error\" role=\"alert\">{}</div>\n",
        escape(text)
    )
}

pub fn message(text: &str) -> String {
    format!("<p class=\"message\">{}</p>\n", escape(text))
}

/// Link opened in a new browsing context. Only `http` and `https` targets
/// become anchors; anything else is shown as plain text.
pub fn external_link(href: &str, label: &str) -> String {
    let href = href.trim();
    let linkable = Url::parse(href)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false);
    if !linkable {
        return escape(href);
    }

    format!(
        "<a class=\"link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape(href),
        escape(label)
    )
}

pub fn td(cells: &str) -> String {
    format!("<td class=\"td\">{}</td>", cells)
}

pub fn text_td(text: &str) -> String {
    td(&escape(text))
}

pub fn row(cells: &[String]) -> String {
    format!("<tr>{}</tr>\n", cells.concat())
}

pub fn table(headers: &[&str], rows: &[String]) -> String {
    let head: String = headers
        .iter()
        .map(|h| format!("<th class=\"th\">{}</th>", escape(h)))
        .collect();

    format!(
        "<table class=\"table\">\n<thead>\n<tr>{}</tr>\n</thead>\n<tbody>\n{}</tbody>\n</table>\n",
        head,
        rows.concat()
    )
}
