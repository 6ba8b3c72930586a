//! Page bodies, one function per view.

use super::escape;
use chess_registry::{
    Route, SiteContent, TournamentRecord, TournamentStatus,
    create::{CreateFlow, FlowState, TournamentForm},
};
use std::fmt::Write;

/// Upcoming and ongoing events featured on the landing page
const FEATURED_LIMIT: usize = 3;

fn path(route: Route) -> &'static str {
    route.path().unwrap_or("/")
}

fn status_badge(status: TournamentStatus) -> String {
    format!(
        "<span class=\"status status-{}\">{}</span>",
        status.as_str().to_lowercase(),
        status
    )
}

fn tournament_card(record: &TournamentRecord) -> String {
    let t = &record.tournament;
    let mut html = String::new();
    let _ = write!(
        html,
        "<article class=\"tournament\" data-id=\"{}\">\n<h3>{}</h3>\n{}\n\
         <p class=\"meta\">{} &middot; {} &middot; {}</p>\n",
        record.id,
        escape(&t.name),
        status_badge(t.status),
        escape(&t.location),
        escape(&t.dates),
        escape(&t.category),
    );
    let region: Vec<&str> = [t.country.as_deref(), t.continent.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !region.is_empty() {
        let _ = writeln!(html, "<p class=\"region\">{}</p>", escape(&region.join(", ")));
    }
    if let Some(link) = &t.link {
        let _ = writeln!(
            html,
            "<a class=\"register\" href=\"{}\" rel=\"noopener\">Register</a>",
            escape(link)
        );
    }
    html.push_str("</article>\n");
    html
}

pub fn home(site: &SiteContent, tournaments: &[TournamentRecord]) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<section class=\"hero\">\n<h1>{}</h1>\n\
         <a class=\"cta\" href=\"{}\">Browse Tournaments</a>\n\
         <a class=\"cta-secondary\" href=\"{}\">Start Learning</a>\n</section>\n",
        escape(&site.tagline),
        path(Route::Tournaments),
        path(Route::Learn),
    );

    let live: Vec<&TournamentRecord> = tournaments
        .iter()
        .filter(|r| r.tournament.status != TournamentStatus::Completed)
        .collect();
    let _ = write!(
        html,
        "<section class=\"stats\">\n<p><strong>{}</strong> tournaments listed</p>\n\
         <p><strong>{}</strong> open or in progress</p>\n</section>\n",
        tournaments.len(),
        live.len()
    );

    html.push_str("<section class=\"featured\">\n<h2>Featured Events</h2>\n");
    if live.is_empty() {
        html.push_str("<p class=\"empty\">No upcoming events yet.</p>\n");
    }
    for record in live.into_iter().take(FEATURED_LIMIT) {
        html.push_str(&tournament_card(record));
    }
    html.push_str("</section>\n");
    html
}

pub fn tournaments(tournaments: &[TournamentRecord], is_editing: bool) -> String {
    let mut html = String::from("<section class=\"registry\">\n<h1>Tournament Registry</h1>\n");
    if is_editing {
        let _ = writeln!(
            html,
            "<a class=\"cta\" href=\"{}\">New Tournament</a>",
            path(Route::CreateTournament)
        );
    }

    for status in TournamentStatus::ALL {
        let group: Vec<&TournamentRecord> = tournaments
            .iter()
            .filter(|r| r.tournament.status == status)
            .collect();
        if group.is_empty() {
            continue;
        }
        let _ = writeln!(html, "<h2>{status}</h2>");
        for record in group {
            html.push_str(&tournament_card(record));
        }
    }

    if tournaments.is_empty() {
        html.push_str("<p class=\"empty\">No tournaments registered.</p>\n");
    }
    html.push_str("</section>\n");
    html
}

/// Create page body for the flow's current state
pub fn create_tournament(flow: &CreateFlow) -> String {
    match flow.state() {
        FlowState::Gated => create_gated(flow.return_route()),
        FlowState::Editing => create_form(flow.form(), flow.return_route(), false),
        FlowState::Submitting => create_form(flow.form(), flow.return_route(), true),
        FlowState::Done { id } => format!(
            "<section class=\"create-done\">\n<p>Tournament {id} committed.</p>\n\
             <a href=\"{}?created={id}\">Back to Registry</a>\n</section>\n",
            path(flow.return_route())
        ),
    }
}

fn create_gated(return_route: Route) -> String {
    format!(
        "<section class=\"access-denied\">\n<h1>Access Denied</h1>\n\
         <p>You must be in Admin Edit Mode to create new tournament entries.</p>\n\
         <a class=\"return\" href=\"{}\">Return to Base</a>\n</section>\n",
        path(return_route)
    )
}

fn text_input(label: &str, name: &str, value: &str, placeholder: &str, disabled: bool) -> String {
    format!(
        "<label>{label}\n<input type=\"text\" name=\"{name}\" value=\"{}\" placeholder=\"{}\"{}>\n</label>\n",
        escape(value),
        escape(placeholder),
        if disabled { " disabled" } else { "" }
    )
}

fn create_form(form: &TournamentForm, exit: Route, submitting: bool) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<section class=\"create\">\n<a class=\"back\" href=\"{back}\">Back to Registry</a>\n\
         <h1>New Registry</h1>\n\
         <form method=\"post\" action=\"{action}\">\n",
        back = path(exit),
        action = path(Route::CreateTournament),
    );
    html.push_str(&text_input(
        "Tournament Full Name",
        "name",
        &form.name,
        "e.g. MALAYSIAN MASTERS 2026",
        submitting,
    ));
    html.push_str(&text_input(
        "Primary Venue",
        "location",
        &form.location,
        "Location / City",
        submitting,
    ));
    html.push_str(&text_input(
        "Event Schedule",
        "dates",
        &form.dates,
        "Feb 20-25, 2026",
        submitting,
    ));
    html.push_str(&text_input(
        "Classification",
        "category",
        &form.category,
        "e.g. Open, U12, U18",
        submitting,
    ));
    html.push_str(&text_input(
        "Registration URL",
        "link",
        &form.link,
        "https://chess-results.com/...",
        submitting,
    ));
    html.push_str(&text_input(
        "Region / Country",
        "country",
        &form.country,
        "Malaysia",
        submitting,
    ));
    html.push_str(&text_input(
        "Continent",
        "continent",
        &form.continent,
        "Asia",
        submitting,
    ));

    let _ = writeln!(
        html,
        "<label>Initial Status\n<select name=\"status\"{}>",
        if submitting { " disabled" } else { "" }
    );
    for status in TournamentStatus::ALL {
        let selected = if status == form.status { " selected" } else { "" };
        let _ = writeln!(html, "<option value=\"{status}\"{selected}>{status}</option>");
    }
    html.push_str("</select>\n</label>\n");

    let _ = write!(
        html,
        "<button type=\"submit\"{}>{}</button>\n\
         <a class=\"abort\" href=\"{}\">Abort</a>\n</form>\n</section>\n",
        if submitting { " disabled" } else { "" },
        if submitting {
            "Committing..."
        } else {
            "Commit to Registry"
        },
        path(exit),
    );
    html
}

pub fn learn(site: &SiteContent) -> String {
    let mut html = String::from("<section class=\"learn\">\n<h1>Learn</h1>\n");
    for track in &site.learning {
        let _ = write!(
            html,
            "<article class=\"track\">\n<h2>{}</h2>\n<span class=\"level\">{}</span>\n<p>{}</p>\n",
            escape(&track.title),
            escape(&track.level),
            escape(&track.summary),
        );
        if !track.topics.is_empty() {
            html.push_str("<ul>\n");
            for topic in &track.topics {
                let _ = writeln!(html, "<li>{}</li>", escape(topic));
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</article>\n");
    }
    html.push_str("</section>\n");
    html
}

pub fn resources(site: &SiteContent) -> String {
    let mut html = String::from("<section class=\"resources\">\n<h1>Resources</h1>\n<ul>\n");
    for resource in &site.resources {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\" rel=\"noopener\">{}</a> <span class=\"kind\">{}</span> {}</li>",
            escape(&resource.url),
            escape(&resource.title),
            escape(&resource.kind),
            escape(&resource.description),
        );
    }
    html.push_str("</ul>\n</section>\n");
    html
}

pub fn contact(site: &SiteContent) -> String {
    let contact = &site.contact;
    let mut html = String::from("<section class=\"contact\">\n<h1>Contact</h1>\n");
    let _ = writeln!(
        html,
        "<p>Email: <a href=\"mailto:{0}\">{0}</a></p>",
        escape(&contact.email)
    );
    if let Some(phone) = &contact.phone {
        let _ = writeln!(html, "<p>Phone: {}</p>", escape(phone));
    }
    if let Some(address) = &contact.address {
        let _ = writeln!(html, "<p>Address: {}</p>", escape(address));
    }
    for social in &contact.socials {
        let _ = writeln!(
            html,
            "<a class=\"social\" href=\"{}\" rel=\"noopener\">{}</a>",
            escape(&social.url),
            escape(&social.label)
        );
    }
    html.push_str("</section>\n");
    html
}

pub fn not_found(request_path: &str) -> String {
    format!(
        "<section class=\"not-found\">\n<h1>404 Page Not Found</h1>\n\
         <p>Nothing lives at <code>{}</code>.</p>\n<a href=\"/\">Return Home</a>\n</section>\n",
        escape(request_path)
    )
}
