// HTML Renderer
// View models -> a complete HTML document with embedded Plotly figures

use crate::charts::Figure;
use crate::content::{Card, Link};
use crate::navigation::Page;
use crate::views::{ChartBlock, ContactFormView, Hero, Section, View};
use serde::Serialize;
use tracing::warn;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap');
body { margin: 0; font-family: 'Inter', sans-serif; background: #f7f9fb; color: #1a2f3a; }
.shell { display: flex; min-height: 100vh; }
.sidebar { width: 240px; background: #ffffff; border-right: 1px solid #e8edf2; padding: 1.5rem 1rem; }
.sidebar h3 { margin-top: 0; }
.sidebar nav a { display: block; padding: 0.45rem 0.6rem; border-radius: 8px; color: #1a2f3a; text-decoration: none; }
.sidebar nav a.active { background: #e8f4f8; color: #2c5364; font-weight: 600; }
.sidebar .caption { color: #6b7c8a; font-size: 0.8rem; }
main { flex: 1; padding: 2rem; max-width: 1100px; }
.hero-section { background: linear-gradient(135deg, #0f2027 0%, #203a43 50%, #2c5364 100%); padding: 2.5rem 2rem; border-radius: 16px; color: white; margin-bottom: 1.5rem; box-shadow: 0 8px 32px rgba(0,0,0,0.15); }
.hero-name { font-size: 2.4rem; font-weight: 700; margin-bottom: 0.2rem; }
.hero-title { font-size: 1.1rem; font-weight: 300; color: #b0d4e8; margin-bottom: 1rem; }
.hero-bio { font-size: 0.95rem; line-height: 1.7; color: #d0e4f0; max-width: 800px; }
.contact-badge { display: inline-block; background: rgba(255,255,255,0.12); border: 1px solid rgba(255,255,255,0.2); padding: 0.3rem 0.9rem; border-radius: 20px; color: #b0d4e8; font-size: 0.85rem; margin: 0.2rem; }
.metrics { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 1rem; }
.metric-card { background: #ffffff; border: 1px solid #e8edf2; border-radius: 12px; padding: 1.2rem; text-align: center; box-shadow: 0 2px 8px rgba(0,0,0,0.04); transition: transform 0.2s ease; }
.metric-card:hover { transform: translateY(-2px); box-shadow: 0 4px 16px rgba(0,0,0,0.08); }
.metric-value { font-size: 1.8rem; font-weight: 700; color: #203a43; }
.metric-label { font-size: 0.8rem; font-weight: 500; color: #6b7c8a; text-transform: uppercase; letter-spacing: 0.5px; }
.section-header { font-size: 1.4rem; font-weight: 600; border-bottom: 3px solid #2c5364; padding-bottom: 0.5rem; margin: 2rem 0 1rem 0; }
.project-card { background: linear-gradient(to right, #f8fbfd, #ffffff); border-left: 4px solid #2c5364; padding: 1.2rem 1.5rem; border-radius: 0 12px 12px 0; margin-bottom: 1rem; box-shadow: 0 1px 6px rgba(0,0,0,0.04); }
.project-title { font-weight: 600; font-size: 1.05rem; margin-bottom: 0.3rem; }
.project-desc { font-size: 0.9rem; color: #4a5c6a; line-height: 1.6; }
.columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 1rem; }
.skill-tag { display: inline-block; background: #e8f4f8; color: #2c5364; padding: 0.3rem 0.8rem; border-radius: 20px; font-size: 0.8rem; font-weight: 500; margin: 0.2rem; }
.timeline-item { border-left: 2px solid #2c5364; padding-left: 1.5rem; padding-bottom: 1.5rem; position: relative; }
.timeline-item::before { content: ''; position: absolute; left: -6px; top: 4px; width: 10px; height: 10px; border-radius: 50%; background: #2c5364; }
.timeline-year { font-size: 0.75rem; font-weight: 600; color: #2c5364; text-transform: uppercase; letter-spacing: 0.5px; }
.timeline-title { font-weight: 600; font-size: 0.95rem; }
.timeline-subtitle { font-size: 0.85rem; color: #6b7c8a; }
.contact-form label { display: block; margin-top: 0.8rem; font-size: 0.85rem; }
.contact-form input, .contact-form textarea { width: 100%; padding: 0.5rem; border: 1px solid #e8edf2; border-radius: 8px; font-family: inherit; }
.contact-form button { margin-top: 1rem; padding: 0.5rem 1.4rem; border: 1px solid #2c5364; background: #ffffff; border-radius: 8px; cursor: pointer; }
.success { margin-top: 1rem; padding: 0.8rem 1rem; background: #e6f4ea; color: #1e6b34; border-radius: 8px; }
footer { text-align: center; color: #6b7c8a; font-size: 0.8rem; margin: 2rem 0 1rem 0; }
"#;

/// How page links are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// `/research`, served by the HTTP server.
    Server,
    /// `research.html`, for a static export.
    Static,
}

impl LinkStyle {
    pub fn href(&self, page: Page) -> String {
        match (self, page) {
            (LinkStyle::Server, Page::Home) => "/".to_string(),
            (LinkStyle::Server, p) => format!("/{}", p.slug()),
            (LinkStyle::Static, Page::Home) => "index.html".to_string(),
            (LinkStyle::Static, p) => format!("{}.html", p.slug()),
        }
    }
}

/// Everything drawn around a view.
#[derive(Debug, Clone, PartialEq)]
pub struct Chrome {
    pub site_title: String,
    pub nav: Vec<(Page, String)>,
    pub quick_links: Vec<Link>,
    /// Already formatted, e.g. "October 2026".
    pub last_updated: String,
    pub footer: String,
    pub links: LinkStyle,
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Serialize for embedding inside a `<script>` element.
fn script_json<T: Serialize>(value: &T, fallback: &str) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json.replace("</", "<\\/"),
        Err(e) => {
            warn!(error = %e, "failed to serialize chart, rendering empty");
            fallback.to_string()
        }
    }
}

// ============================================================================
// DOCUMENT
// ============================================================================

pub fn render_page(view: &View, chrome: &Chrome) -> String {
    let mut body = String::new();
    for section in &view.sections {
        body.push_str(&render_section(section, chrome.links));
    }
    document(chrome, Some(view.page), &view.title, &body)
}

pub fn render_not_found(chrome: &Chrome, path: &str) -> String {
    let body = format!(
        "<div class=\"section-header\">Page not found</div>\n<p>Nothing lives at <code>{}</code>. <a href=\"{}\">Back home</a></p>\n",
        escape(path),
        chrome.links.href(Page::Home)
    );
    document(chrome, None, "Not found", &body)
}

fn document(chrome: &Chrome, active: Option<Page>, title: &str, body: &str) -> String {
    let mut nav = String::new();
    for (page, label) in &chrome.nav {
        let class = if Some(*page) == active { " class=\"active\"" } else { "" };
        nav.push_str(&format!(
            "<a href=\"{}\"{}>{}</a>\n",
            chrome.links.href(*page),
            class,
            escape(label)
        ));
    }

    let quick_links = chrome
        .quick_links
        .iter()
        .map(anchor)
        .collect::<Vec<_>>()
        .join(" · ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · {site_title}</title>
<script src="{cdn}"></script>
<style>{style}</style>
</head>
<body>
<div class="shell">
<aside class="sidebar">
<h3>Navigation</h3>
<nav>
{nav}</nav>
<hr>
<h5>Quick Links</h5>
<p>{quick_links}</p>
<hr>
<p class="caption">Last updated: {last_updated}</p>
</aside>
<main>
{body}<hr>
<footer>{footer}</footer>
</main>
</div>
</body>
</html>
"#,
        title = escape(title),
        site_title = escape(&chrome.site_title),
        cdn = PLOTLY_CDN,
        style = STYLE,
        nav = nav,
        quick_links = quick_links,
        last_updated = escape(&chrome.last_updated),
        body = body,
        footer = escape(&chrome.footer),
    )
}

// ============================================================================
// SECTIONS
// ============================================================================

fn render_section(section: &Section, links: LinkStyle) -> String {
    match section {
        Section::Hero(hero) => render_hero(hero),
        Section::Metrics { tiles } => {
            let cards: String = tiles
                .iter()
                .map(|t| {
                    format!(
                        "<div class=\"metric-card\"><div class=\"metric-value\">{}</div><div class=\"metric-label\">{}</div></div>",
                        escape(&t.value),
                        escape(&t.label)
                    )
                })
                .collect();
            format!("<div class=\"metrics\">{cards}</div>\n")
        }
        Section::Header { text } => format!("<div class=\"section-header\">{}</div>\n", escape(text)),
        Section::Subheading { text } => format!("<h5>{}</h5>\n", escape(text)),
        Section::Timeline { entries } => entries
            .iter()
            .map(|e| {
                let detail = e
                    .detail
                    .as_ref()
                    .map(|d| format!("<div class=\"timeline-subtitle\">{}</div>", escape(d)))
                    .unwrap_or_default();
                format!(
                    "<div class=\"timeline-item\"><div class=\"timeline-year\">{}</div><div class=\"timeline-title\">{}</div><div class=\"timeline-subtitle\">{}</div>{}</div>\n",
                    escape(&e.year),
                    escape(&e.title),
                    escape(&e.subtitle),
                    detail
                )
            })
            .collect(),
        Section::Tags { tags } => {
            let spans = tags
                .iter()
                .map(|t| format!("<span class=\"skill-tag\">{}</span>", escape(t)))
                .collect::<Vec<_>>()
                .join(" ");
            format!("<div class=\"tags\">{spans}</div>\n")
        }
        Section::Cards { cards } => cards.iter().map(render_card).collect(),
        Section::Columns { columns } => {
            let cols: String = columns
                .iter()
                .map(|col| format!("<div>{}</div>", col.iter().map(render_card).collect::<String>()))
                .collect();
            format!("<div class=\"columns\">{cols}</div>\n")
        }
        Section::Chart(chart) => render_chart(chart),
        Section::Divider => "<hr>\n".to_string(),
        Section::ContactForm(form) => render_form(form, links),
    }
}

fn render_hero(hero: &Hero) -> String {
    let bio: String = hero
        .bio
        .iter()
        .map(|p| format!("<p>{}</p>", escape(p)))
        .collect();
    let badges = hero
        .badges
        .iter()
        .map(|b| format!("<span class=\"contact-badge\">{}</span>", escape(b)))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "<div class=\"hero-section\"><div class=\"hero-name\">{}</div><div class=\"hero-title\">{}</div><div class=\"hero-bio\">{}</div><div style=\"margin-top:1rem;\">{}</div></div>\n",
        escape(&hero.name),
        escape(&hero.title),
        bio,
        badges
    )
}

fn render_card(card: &Card) -> String {
    let mut lines: Vec<String> = card.body.iter().map(|l| escape(l)).collect();
    lines.extend(card.links.iter().map(anchor));
    format!(
        "<div class=\"project-card\"><div class=\"project-title\">{}</div><div class=\"project-desc\">{}</div></div>\n",
        escape(&card.title),
        lines.join("<br>")
    )
}

fn anchor(link: &Link) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
        escape(&link.url),
        escape(&link.label)
    )
}

fn render_chart(chart: &ChartBlock) -> String {
    let Figure { data, layout } = &chart.figure;
    let id = escape(&chart.id);
    format!(
        "<div class=\"chart\" id=\"{id}\" style=\"height:{}px\"></div>\n<script>Plotly.newPlot(\"{id}\", {}, {}, {{\"responsive\": true, \"displaylogo\": false}});</script>\n",
        layout.height,
        script_json(data, "[]"),
        script_json(layout, "{}"),
    )
}

fn render_form(form: &ContactFormView, links: LinkStyle) -> String {
    let fields: String = form
        .fields
        .iter()
        .map(|f| {
            let input = if f.multiline {
                format!("<textarea id=\"{0}\" name=\"{0}\" rows=\"5\"></textarea>", escape(&f.name))
            } else {
                format!("<input id=\"{0}\" name=\"{0}\" type=\"text\">", escape(&f.name))
            };
            format!("<label for=\"{}\">{}</label>{}", escape(&f.name), escape(&f.label), input)
        })
        .collect();

    // A static export has no server to post to, so the acknowledgement is
    // revealed in place instead.
    let (open, ack) = match (links, &form.acknowledgement) {
        (LinkStyle::Server, ack) => (
            format!("<form class=\"contact-form\" method=\"post\" action=\"{}\">", links.href(Page::Contact)),
            ack.as_ref()
                .map(|a| format!("<div class=\"success\">{}</div>", escape(a)))
                .unwrap_or_default(),
        ),
        (LinkStyle::Static, ack) => (
            "<form class=\"contact-form\" onsubmit=\"document.getElementById('contact-ack').hidden=false;return false;\">".to_string(),
            ack.as_ref()
                .map(|a| format!("<div class=\"success\" id=\"contact-ack\" hidden>{}</div>", escape(a)))
                .unwrap_or_default(),
        ),
    };

    format!(
        "{open}{fields}<button type=\"submit\">{}</button></form>{ack}\n",
        escape(&form.submit_label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactFormState;
    use crate::site::Site;
    use crate::views::ViewState;
    use chrono::NaiveDate;

    fn chrome(links: LinkStyle) -> Chrome {
        Site::default().chrome(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(), links)
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_script_json_cannot_close_script_tag() {
        let json = script_json(&"</script><script>alert(1)", "null");
        assert!(!json.contains("</script>"));
    }

    #[test]
    fn test_link_styles() {
        assert_eq!(LinkStyle::Server.href(Page::Home), "/");
        assert_eq!(LinkStyle::Server.href(Page::Skills), "/skills");
        assert_eq!(LinkStyle::Static.href(Page::Home), "index.html");
        assert_eq!(LinkStyle::Static.href(Page::Contact), "contact.html");
    }

    #[test]
    fn test_page_marks_active_nav_entry() {
        let site = Site::default();
        let view = site.render(&ViewState::new(Page::Skills));
        let html = render_page(&view, &chrome(LinkStyle::Server));

        assert!(html.contains("<a href=\"/skills\" class=\"active\">Skills &amp; Tools</a>"));
        assert!(html.contains("<a href=\"/\">Home</a>"));
        assert!(html.contains("Last updated: February 2026"));
    }

    #[test]
    fn test_each_chart_gets_a_plot_call() {
        let site = Site::default();
        let view = site.render(&ViewState::new(Page::Achievements));
        let html = render_page(&view, &chrome(LinkStyle::Server));

        assert_eq!(html.matches("Plotly.newPlot(").count(), view.charts().count());
        assert!(html.contains("id=\"achievements-business\""));
    }

    #[test]
    fn test_server_form_posts_and_shows_acknowledgement() {
        let site = Site::default();
        let idle = render_page(
            &site.render(&ViewState::new(Page::Contact)),
            &chrome(LinkStyle::Server),
        );
        assert!(idle.contains("method=\"post\" action=\"/contact\""));
        assert!(!idle.contains("class=\"success\""));

        let submitted = render_page(
            &site.render(&ViewState::new(Page::Contact).with_contact(ContactFormState::Submitted)),
            &chrome(LinkStyle::Server),
        );
        assert!(submitted.contains("<div class=\"success\">Thanks for reaching out! I&#39;ll get back to you soon.</div>"));
    }

    #[test]
    fn test_static_form_reveals_acknowledgement_in_place() {
        let site = Site::default();
        let html = render_page(
            &site.render(&ViewState::new(Page::Contact).with_contact(ContactFormState::Submitted)),
            &chrome(LinkStyle::Static),
        );
        assert!(html.contains("id=\"contact-ack\" hidden"));
        assert!(!html.contains("method=\"post\""));
    }

    #[test]
    fn test_not_found_escapes_path() {
        let html = render_not_found(&chrome(LinkStyle::Server), "/<b>");
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("class=\"active\""));
    }
}
