//! Terminal viewer for the job feed.
//!
//! A line-oriented stand-in for the browser view: it renders the
//! filtered card list, accepts filter commands, and emulates scrolling
//! so the feed session's near-end trigger can be exercised
//! interactively. All state lives in the session; this binary only
//! renders and forwards input.

mod config;
mod render;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jobfeed_client::api::JobsApi;
use jobfeed_feed::session::FeedSession;
use jobfeed_feed::trigger::{ScrollTrigger, Viewport};

use crate::config::ViewerConfig;

/// Nominal rendered height of one card, in scroll units.
const CARD_HEIGHT: f64 = 100.0;
/// Nominal height of the emulated window.
const WINDOW_HEIGHT: f64 = 600.0;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobfeed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ViewerConfig::from_env();
    tracing::info!(
        api_url = %config.api_url,
        page_size = config.page_size,
        "Starting job feed viewer",
    );

    let api = JobsApi::new(config.api_url.clone());
    let trigger = ScrollTrigger::new(config.scroll_threshold);
    let mut session = FeedSession::new(Box::new(api), Box::new(trigger), config.page_size);

    // Mount: load the first page before the prompt appears.
    session.load_next_page().await;
    print_listing(&session, &config);
    print_help();

    let mut scroll_top: f64 = 0.0;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let mut parts = line.splitn(3, char::is_whitespace);
        match parts.next().unwrap_or("") {
            "" => {}
            "scroll" => {
                let delta: f64 = match parts.next().and_then(|v| v.parse().ok()) {
                    Some(d) => d,
                    None => {
                        println!("usage: scroll <delta>");
                        continue;
                    }
                };
                let content_height = session.visible_records().len() as f64 * CARD_HEIGHT;
                scroll_top = (scroll_top + delta)
                    .clamp(0.0, (content_height - WINDOW_HEIGHT).max(0.0));

                let viewport = Viewport {
                    scroll_top,
                    viewport_height: WINDOW_HEIGHT,
                    content_height,
                };
                if session.notify_near_end(&viewport).await {
                    print_listing(&session, &config);
                } else {
                    println!(
                        "-- scrolled to {scroll_top:.0} ({:.0}%)",
                        viewport.scrolled_fraction() * 100.0
                    );
                }
            }
            "filter" => match (parts.next(), parts.next()) {
                (Some(field), Some(value)) => {
                    match session.set_filter_field(field, value.trim()) {
                        Ok(()) => print_listing(&session, &config),
                        Err(e) => println!("{e}"),
                    }
                }
                _ => println!("usage: filter <field> <value>"),
            },
            "clear" => {
                session.clear_filters();
                print_listing(&session, &config);
            }
            "show" => {
                let index: Option<usize> = parts.next().and_then(|v| v.parse().ok());
                let visible = session.visible_records();
                match index.and_then(|i| visible.get(i)) {
                    Some(job) => println!("{}", render::render_detail(job)),
                    None => println!("usage: show <index> (0..{})", visible.len()),
                }
            }
            "list" => print_listing(&session, &config),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command: {other} (try 'help')"),
        }
    }

    session.shutdown();
    Ok(())
}

/// Render the filtered card list, mirroring the store's read contract:
/// visible records, the loading flag, and the active filters.
fn print_listing(session: &FeedSession, config: &ViewerConfig) {
    let visible = session.visible_records();

    println!();
    if visible.is_empty() && !session.state().loading() {
        println!("No jobs match the filters.");
    }
    for (index, job) in visible.iter().enumerate() {
        // Keyed by identifier plus position in the filtered list;
        // identifiers alone can repeat across pages.
        let key = format!("{}-{index}", job.jd_uid);
        print!("{}", render::render_card(job, &key, config.card_word_limit));
    }
    if session.state().loading() {
        println!("Loading...");
    }

    let filters = session.state().filters();
    if !filters.is_empty() {
        println!(
            "-- {} of {} jobs match the filters",
            visible.len(),
            session.state().records().len()
        );
    } else {
        println!(
            "-- {} jobs loaded (page {})",
            session.state().records().len(),
            session.state().page()
        );
    }
}

fn print_help() {
    println!("commands:");
    println!("  scroll <delta>          emulate scrolling; near the bottom loads more");
    println!("  filter <field> <value>  set one filter field");
    println!("                          (min_experience, company_name, location,");
    println!("                           remote, role, min_base_pay)");
    println!("  clear                   clear all filters");
    println!("  show <index>            full details for a visible job");
    println!("  list                    re-render the listing");
    println!("  quit                    exit");
}
