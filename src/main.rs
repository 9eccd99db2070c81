use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use pawboard::presenter::present;
use pawboard::shell::TermShell;
use pawboard::{
    ActionOutcome, ClientConfig, HttpPostApi, PostStore, Session, User, ViewPhase, ViewState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env automatically only in debug builds to reduce manual setup overhead.
    if cfg!(debug_assertions) {
        let _ = dotenv::dotenv();
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let post_id: i64 = std::env::args()
        .nth(1)
        .context("usage: pawboard <post-id>")?
        .parse()
        .context("post id must be an integer")?;

    let config = ClientConfig::from_env();
    let session = session_from_env();
    info!(api_base = %config.api_base, post_id, "starting pawboard detail client");
    info!("logged in: {}", session.is_logged_in);

    let shell = Arc::new(TermShell);
    let store = PostStore::new(
        Arc::new(HttpPostApi::new(&config)),
        shell.clone(),
        shell.clone(),
        shell,
    );

    store.load(post_id).await;
    render(&store.state(), &session, &config);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "reload" => {
                store.load(post_id).await;
                render(&store.state(), &session, &config);
            }
            "delete" => {
                if store.delete(post_id).await == ActionOutcome::Done {
                    break;
                }
            }
            "complete" => {
                store.complete(post_id).await;
                render(&store.state(), &session, &config);
            }
            "quit" | "exit" => break,
            "" => {}
            other => println!("unknown command '{other}' (reload | delete | complete | quit)"),
        }
    }
    Ok(())
}

/// Viewer identity from the environment; absent means browsing anonymously.
fn session_from_env() -> Session {
    match std::env::var("PAWBOARD_USER_ID")
        .ok()
        .and_then(|v| v.parse().ok())
    {
        Some(user_id) => {
            let name = std::env::var("PAWBOARD_USER_NAME")
                .unwrap_or_else(|_| format!("user {user_id}"));
            Session::logged_in(User { user_id, name })
        }
        None => Session::anonymous(),
    }
}

fn render(state: &ViewState, session: &Session, config: &ClientConfig) {
    match state.phase() {
        ViewPhase::Loading => println!("Loading post..."),
        ViewPhase::Failed(err) => println!("{err}"),
        ViewPhase::Empty => println!("No post loaded."),
        ViewPhase::Ready => {
            let Some(post) = &state.post else { return };
            let view = present(post, session, config);
            println!("[{}] {}", view.status.text, view.title);
            println!("by {} at {}", view.author_name, view.created_at);
            for url in &view.image_urls {
                println!("  image: {url}");
            }
            println!("Name: {}", view.animal_name);
            println!("Age: {}", view.animal_age);
            println!("Category: {}", view.animal_category);
            println!("Breed: {}", view.animal_breed);
            println!("Gender: {}", view.gender);
            println!("{}: {}", view.time_label, view.time_value);
            println!("{}: {}", view.location_label, view.location_value);
            println!(
                "{}: ({:.6}, {:.6})",
                view.map_label, view.map.latitude, view.map.longitude
            );
            println!();
            println!("{}", view.content);
            if view.controls.any() {
                println!("(you may edit, delete or complete this post)");
            }
        }
    }
}
