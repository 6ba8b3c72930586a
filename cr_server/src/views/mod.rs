//! Server-side HTML rendering.
//!
//! Every page is wrapped in the same shell (header, navigation, edit-mode
//! toggle, footer). Page bodies live in [`pages`].

pub mod pages;

use chess_registry::{Route, create::Notice, create::NoticeKind};
use std::fmt::Write;

/// Shared chrome inputs
#[derive(Debug, Clone, Copy)]
pub struct Shell<'a> {
    pub site_title: &'a str,
    pub route: Route,
    pub is_editing: bool,
    pub notice: Option<&'a Notice>,
}

/// Escape text for HTML element content and attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Wrap a page body in the shell
pub fn layout(shell: Shell<'_>, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 2048);
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{page} | {site}</title>\n</head>\n<body data-route=\"{route}\">\n",
        page = escape(shell.route.title()),
        site = escape(shell.site_title),
        route = shell.route,
    );

    let _ = write!(
        html,
        "<header class=\"shell-header\">\n<a class=\"brand\" href=\"/\">{}</a>\n<nav>\n",
        escape(shell.site_title)
    );
    // The create page is reached from the registry, not the nav bar
    for route in Route::navigable().filter(|r| *r != Route::CreateTournament) {
        let Some(path) = route.path() else { continue };
        let current = if route == shell.route {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = writeln!(html, "<a href=\"{path}\"{current}>{}</a>", route.title());
    }
    html.push_str("</nav>\n");
    html.push_str(&edit_mode_toggle(shell.route, shell.is_editing));
    html.push_str("</header>\n");

    if let Some(notice) = shell.notice {
        html.push_str(&render_notice(notice));
    }

    html.push_str("<main>\n");
    html.push_str(body);
    html.push_str("</main>\n");
    let _ = write!(
        html,
        "<footer class=\"shell-footer\">&copy; {}</footer>\n</body>\n</html>\n",
        escape(shell.site_title)
    );
    html
}

fn edit_mode_toggle(route: Route, is_editing: bool) -> String {
    let return_to = route.path().unwrap_or("/");
    let (label, next) = if is_editing {
        ("Exit Edit Mode", "false")
    } else {
        ("Admin Edit Mode", "true")
    };
    format!(
        "<form class=\"edit-toggle\" method=\"post\" action=\"/admin/edit-mode\">\n\
         <input type=\"hidden\" name=\"enabled\" value=\"{next}\">\n\
         <input type=\"hidden\" name=\"return_to\" value=\"{return_to}\">\n\
         <button type=\"submit\">{label}</button>\n</form>\n"
    )
}

/// Toast-style notice banner
pub fn render_notice(notice: &Notice) -> String {
    let (class, role) = match notice.kind {
        NoticeKind::Success => ("notice notice-success", "status"),
        NoticeKind::Destructive => ("notice notice-destructive", "alert"),
    };
    format!(
        "<div class=\"{class}\" role=\"{role}\">\n<strong>{}</strong>\n<p>{}</p>\n</div>\n",
        escape(&notice.title),
        escape(&notice.description)
    )
}
