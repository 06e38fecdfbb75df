//! Interactive command loop over a browser session.

use std::io::Write;
use std::path::Path;

use bytes::Bytes;
use tabled::{Table, Tabled};

use docdesk_browser::{BrowserSession, PreviewMode};
use docdesk_client::HttpDocumentService;
use docdesk_core::error::AppError;
use docdesk_core::result::AppResult;
use docdesk_core::traits::UploadOutcome;
use docdesk_entity::item::FileItem;
use docdesk_entity::view::ViewMode;

/// One row of the column listing.
#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Visibility")]
    visibility: String,
}

impl From<&FileItem> for ItemRow {
    fn from(item: &FileItem) -> Self {
        match item {
            FileItem::Folder(f) => Self {
                name: format!("{}/", f.name),
                kind: "folder".to_string(),
                category: format!("{} items", f.child_count),
                visibility: format!("{:?}", f.visibility).to_lowercase(),
            },
            FileItem::File(f) => Self {
                name: f.name.clone(),
                kind: "file".to_string(),
                category: format!("{:?}", f.mime_category).to_lowercase(),
                visibility: format!("{:?}", f.visibility).to_lowercase(),
            },
        }
    }
}

/// Run the shell until `quit` or end of input.
pub async fn run(mut session: BrowserSession<HttpDocumentService>) -> AppResult<()> {
    println!("DocDesk — type 'help' for commands.");
    print_location(&session);

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => return Err(AppError::internal(format!("Input error: {e}"))),
        }

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else { continue };
        let args: Vec<&str> = parts.collect();

        let result = match command {
            "ls" => {
                print_location(&session);
                Ok(())
            }
            "cd" => descend(&mut session, &args.join(" ")),
            "up" => {
                let crumbs = session.breadcrumbs().len();
                session.jump_to_breadcrumb(crumbs.saturating_sub(2));
                print_location(&session);
                Ok(())
            }
            "jump" => jump(&mut session, &args),
            "view" => switch_view(&mut session, &args),
            "mkdir" => mkdir(&mut session, &args).await,
            "put" => put(&mut session, &args.join(" ")).await,
            "rm" => rm(&mut session, &args.join(" ")).await,
            "open" => open(&session, &args.join(" ")),
            "refresh" => match session.refresh().await {
                Ok(()) => {
                    print_location(&session);
                    Ok(())
                }
                Err(e) => Err(e),
            },
            "help" => {
                print_help();
                Ok(())
            }
            "quit" | "exit" => break,
            other => Err(AppError::validation(format!(
                "Unknown command '{other}'; type 'help'"
            ))),
        };

        // Failures are notifications; navigation state is untouched and
        // the user can retry.
        if let Err(e) = result {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

fn print_location(session: &BrowserSession<HttpDocumentService>) {
    let trail: Vec<&str> = session
        .breadcrumbs()
        .iter()
        .map(|b| b.name.as_str())
        .collect();
    println!("[{}] {}", session.view(), trail.join(" > "));

    let Some(column) = session.columns().last() else {
        return;
    };
    if column.items.is_empty() {
        println!("(empty)");
        return;
    }
    let rows: Vec<ItemRow> = column.items.iter().map(ItemRow::from).collect();
    println!("{}", Table::new(rows));
}

fn find_in_open_column(
    session: &BrowserSession<HttpDocumentService>,
    name: &str,
) -> AppResult<FileItem> {
    session
        .columns()
        .last()
        .ok_or_else(|| AppError::internal("No open column"))?
        .items
        .iter()
        .find(|item| item.name() == name || format!("{}/", item.name()) == name)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("No item named '{name}' here")))
}

fn descend(session: &mut BrowserSession<HttpDocumentService>, name: &str) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::validation("Usage: cd <folder>"));
    }
    let item = find_in_open_column(session, name)?;
    if !item.is_folder() {
        return Err(AppError::validation(format!("'{name}' is not a folder")));
    }
    let at = session.columns().len() - 1;
    session.descend(&item, at);
    print_location(session);
    Ok(())
}

fn jump(session: &mut BrowserSession<HttpDocumentService>, args: &[&str]) -> AppResult<()> {
    let index: usize = args
        .first()
        .and_then(|a| a.parse().ok())
        .ok_or_else(|| AppError::validation("Usage: jump <breadcrumb index>"))?;
    session.jump_to_breadcrumb(index);
    print_location(session);
    Ok(())
}

fn switch_view(session: &mut BrowserSession<HttpDocumentService>, args: &[&str]) -> AppResult<()> {
    let view: ViewMode = args
        .first()
        .ok_or_else(|| AppError::validation("Usage: view <all|public|private>"))?
        .parse()?;
    session.switch_view(view);
    print_location(session);
    Ok(())
}

async fn mkdir(session: &mut BrowserSession<HttpDocumentService>, args: &[&str]) -> AppResult<()> {
    let is_public = args.contains(&"--public");
    let name = args
        .iter()
        .filter(|a| **a != "--public")
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    session.create_folder(&name, is_public).await?;
    println!("Created folder '{}'.", name.trim());
    print_location(session);
    Ok(())
}

async fn put(session: &mut BrowserSession<HttpDocumentService>, path: &str) -> AppResult<()> {
    if path.is_empty() {
        return Err(AppError::validation("Usage: put <local file>"));
    }
    let file_name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::validation(format!("'{path}' is not a file path")))?
        .to_string();
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::validation(format!("Cannot read '{path}': {e}")))?;
    let data = Bytes::from(data);

    match session.upload(&file_name, data.clone(), false).await? {
        UploadOutcome::Completed => {
            println!("Uploaded '{file_name}'.");
        }
        UploadOutcome::ConfirmOverwrite => {
            let replace = dialoguer::Confirm::new()
                .with_prompt(format!(
                    "A file named '{file_name}' already exists. Replace it?"
                ))
                .default(false)
                .interact()
                .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
            if !replace {
                println!("Cancelled.");
                return Ok(());
            }
            session.upload(&file_name, data, true).await?;
            println!("Replaced '{file_name}'.");
        }
    }
    print_location(session);
    Ok(())
}

async fn rm(session: &mut BrowserSession<HttpDocumentService>, name: &str) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::validation("Usage: rm <name>"));
    }
    let item = find_in_open_column(session, name)?;
    session.delete(&item).await?;
    println!("Deleted '{name}'.");
    print_location(session);
    Ok(())
}

fn open(session: &BrowserSession<HttpDocumentService>, name: &str) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::validation("Usage: open <file>"));
    }
    let item = find_in_open_column(session, name)?;
    let FileItem::File(entry) = &item else {
        return Err(AppError::validation(format!("'{name}' is a folder; use cd")));
    };
    let preview = session.preview(entry);
    match preview.mode {
        PreviewMode::InlineImage => println!("Inline image preview: {}", preview.url),
        PreviewMode::InlinePdf => println!("Inline PDF preview: {}", preview.url),
        PreviewMode::DownloadOnly => println!("Download: {}", preview.url),
    }
    if let Some(thumb) = session.thumbnail_url(entry) {
        println!("Thumbnail: {thumb}");
    }
    Ok(())
}

fn print_help() {
    println!(
        "Commands:\n\
         \x20 ls                     show breadcrumbs and the open column\n\
         \x20 cd <folder>            descend into a folder\n\
         \x20 up                     go up one level\n\
         \x20 jump <n>               jump to breadcrumb n (0 = root)\n\
         \x20 view <all|public|private>  switch the view partition\n\
         \x20 mkdir <name> [--public]    create a top-level folder\n\
         \x20 put <local file>       upload into the open folder\n\
         \x20 rm <name>              delete a file or folder\n\
         \x20 open <file>            show how a file would be previewed\n\
         \x20 refresh                refetch the tree\n\
         \x20 quit                   exit"
    );
}
