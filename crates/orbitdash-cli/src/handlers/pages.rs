//! Page command handlers.

use std::path::Path;

use orbitdash_core::{NewPage, Page};

use crate::bootstrap::CliContext;
use crate::commands::PageCommand;
use crate::error::CliError;

/// Dispatch a `pages` subcommand.
pub async fn execute(ctx: &CliContext, command: PageCommand) -> Result<(), CliError> {
    match command {
        PageCommand::List => {
            let pages = ctx.pages().list().await?;
            if pages.is_empty() {
                println!("No pages stored.");
                println!("Use 'orbitdash pages put <slug> --title <title> --body <html>' to add one.");
                return Ok(());
            }
            println!("{:<32} {:<40} Updated", "Slug", "Title");
            for page in pages {
                println!(
                    "{:<32} {:<40} {}",
                    page.slug,
                    truncate(&page.title, 39),
                    page.updated_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        PageCommand::Show { slug } => {
            let page = show(ctx, &slug).await?;
            println!("# {}", page.title);
            println!();
            println!("{}", page.body);
        }
        PageCommand::Put {
            slug,
            title,
            body,
            file,
        } => {
            let page = put(ctx, slug, title, body, file.as_deref()).await?;
            println!("Saved /page/{}", page.slug);
        }
        PageCommand::Remove { slug } => {
            ctx.pages().remove(&slug).await?;
            println!("Removed /page/{slug}");
        }
    }
    Ok(())
}

pub async fn show(ctx: &CliContext, slug: &str) -> Result<Page, CliError> {
    ctx.pages()
        .get(slug)
        .await?
        .ok_or_else(|| CliError::NotFound(format!("page '{slug}'")))
}

/// Store a page whose body comes from `body` or, failing that, `file`.
pub async fn put(
    ctx: &CliContext,
    slug: String,
    title: String,
    body: Option<String>,
    file: Option<&Path>,
) -> Result<Page, CliError> {
    let body = match (body, file) {
        (Some(body), _) => body,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            return Err(CliError::Arguments(
                "provide the page body with --body or --file".to_string(),
            ));
        }
    };
    Ok(ctx.pages().save(&NewPage::new(slug, title, body)).await?)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
        out.push_str("...");
        out
    }
}
