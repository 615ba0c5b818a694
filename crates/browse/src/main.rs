//! Print one gallery screen as JSON.
//!
//! ```text
//! gallery-browse users
//! gallery-browse user <id>
//! gallery-browse album <id> [pages]
//! ```

use anyhow::{bail, Context};
use gallery_core::types::DbId;
use gallery_source::SourceConfig;
use gallery_views::{AlbumFeedSession, Gallery};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, PartialEq, Eq)]
enum Screen {
    Users,
    User(DbId),
    Album { id: DbId, pages: usize },
}

impl Screen {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let arg = |i: usize| args.get(i).map(String::as_str);

        match arg(0) {
            Some("users") | None => Ok(Screen::Users),
            Some("user") => {
                let id = parse_id(arg(1), "user")?;
                Ok(Screen::User(id))
            }
            Some("album") => {
                let id = parse_id(arg(1), "album")?;
                let pages = match arg(2) {
                    Some(raw) => raw
                        .parse()
                        .with_context(|| format!("pages must be a number, got {raw:?}"))?,
                    None => 1,
                };
                Ok(Screen::Album { id, pages })
            }
            Some(other) => {
                bail!("unknown screen {other:?}, expected users | user <id> | album <id> [pages]")
            }
        }
    }
}

fn parse_id(raw: Option<&str>, what: &str) -> anyhow::Result<DbId> {
    let raw = raw.with_context(|| format!("missing {what} id"))?;
    raw.parse()
        .with_context(|| format!("{what} id must be an integer, got {raw:?}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "gallery_browse=debug,gallery_views=debug,gallery_query=debug".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let screen = Screen::parse(&args)?;

    let config = SourceConfig::from_env()?;
    let gallery = Gallery::connect(&config)?;
    tracing::info!(?screen, "Rendering screen");

    let output = match screen {
        Screen::Users => serde_json::to_value(gallery.user_list().await?.as_ref())?,
        Screen::User(id) => serde_json::to_value(gallery.user_profile(id).await?.as_ref())?,
        Screen::Album { id, pages } => {
            let mut session = AlbumFeedSession::new(gallery, id);
            session.open().await?;
            for _ in 1..pages {
                if session.load_more().await?.is_none() {
                    break;
                }
            }
            serde_json::json!({
                "album": session.album(),
                "photos": session.photos(),
                "hasMore": session.can_load_more(),
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
