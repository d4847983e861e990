//! Page shell shared by every screen.

pub const APP_TITLE: &str = "Tez Değerlendirme Sistemi";

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #f6f7f8; color: #111827; }
header { position: sticky; top: 0; background: #fff; border-bottom: 1px solid #e5e7eb; padding: 0 2.5rem; height: 4rem; display: flex; align-items: center; }
header a, header button { color: inherit; text-decoration: none; font-weight: 700; }
header form { margin: 0; }
header button { height: auto; padding: 0; background: none; border: 0; font-size: 1rem; }
main { display: flex; flex-direction: column; align-items: center; padding: 2.5rem 1rem; }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: 0.75rem; padding: 2rem; width: 100%; max-width: 1100px; box-sizing: border-box; }
.alert { background: #fef2f2; color: #b91c1c; border: 1px solid #fecaca; border-radius: 0.5rem; padding: 0.75rem 1rem; margin-bottom: 1rem; }
.badge { display: inline-block; border-radius: 0.375rem; padding: 0.25rem 0.5rem; font-size: 10px; font-weight: 700; text-transform: uppercase; }
.badge-uygun { background: #f0fdf4; color: #15803d; }
.badge-uyari { background: #fefce8; color: #a16207; }
.badge-hata { background: #fef2f2; color: #b91c1c; }
.badge-na { background: #f3f4f6; color: #4b5563; }
.badge-bilgi { background: #eff6ff; color: #2563eb; }
.kpis { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-bottom: 2.5rem; }
.bar { height: 0.5rem; background: #f3f4f6; border-radius: 9999px; overflow: hidden; }
.bar > div { height: 100%; }
.red { color: #dc2626; }
.green { color: #16a34a; }
.filters a { padding: 0.25rem 0.75rem; font-size: 10px; font-weight: 900; border-radius: 0.5rem; color: #6b7280; text-decoration: none; }
.filters a.active { background: #fff; color: #111827; }
table { width: 100%; border-collapse: collapse; text-align: left; font-size: 0.875rem; }
td, th { padding: 1rem 1.5rem; border-bottom: 1px solid #f3f4f6; }
button { height: 3rem; padding: 0 2rem; border-radius: 0.5rem; font-weight: 700; cursor: pointer; }
button[disabled] { background: #9ca3af; cursor: not-allowed; }
.spinner { width: 5rem; height: 5rem; border-radius: 50%; border: 4px solid #2b7cee; border-top-color: transparent; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;

/// Escapes text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Home link. Inside a session it posts to the session's reset action, so
/// leaving the flow also cancels whatever the session was doing.
fn home_link(reset_action: Option<&str>) -> String {
    match reset_action {
        Some(action) => format!(
            r#"<form method="post" action="{}"><button type="submit">{APP_TITLE}</button></form>"#,
            escape(action)
        ),
        None => format!(r#"<a href="/">{APP_TITLE}</a>"#),
    }
}

/// Wraps a screen body in the document shell. `refresh_secs` reloads the page;
/// `reset_action` is set for pages that belong to a session.
pub fn page(body: &str, refresh_secs: Option<u32>, reset_action: Option<&str>) -> String {
    let refresh = refresh_secs
        .map(|s| format!("<meta http-equiv=\"refresh\" content=\"{s}\">"))
        .unwrap_or_default();
    let home = home_link(reset_action);
    format!(
        r#"<!DOCTYPE html>
<html lang="tr">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{refresh}<title>{APP_TITLE}</title>
<style>{STYLE}</style>
</head>
<body>
<header>{home}</header>
<main>
{body}
</main>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape("<b>\"Ayşe\" & 'Ali'</b>"),
            "&lt;b&gt;&quot;Ayşe&quot; &amp; &#39;Ali&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_refresh_only_when_requested() {
        assert!(page("x", Some(3), None).contains("content=\"3\""));
        assert!(!page("x", None, None).contains("http-equiv"));
    }

    #[test]
    fn test_header_resets_inside_a_session() {
        let html = page("x", None, Some("/evaluations/abc/reset"));
        assert!(html.contains(
            "<header><form method=\"post\" action=\"/evaluations/abc/reset\">"
        ));
        assert!(!html.contains("<a href=\"/\">"));

        let outside = page("x", None, None);
        let link = format!("<header><a href=\"/\">{APP_TITLE}</a></header>");
        assert!(outside.contains(&link));
    }
}
