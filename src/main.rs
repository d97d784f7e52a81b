use serde::Serialize;
use shelfwise::adapters::outbound::console::{ConsoleNavigator, StderrNotifier, TerminalRenderer};
use shelfwise::adapters::outbound::filesystem::{FileTokenStorage, StdoutPresenter};
use shelfwise::adapters::outbound::network::{CachingBookRepository, RestApiClient};
use shelfwise::adapters::outbound::time::SystemClock;
use shelfwise::application::dto::{Lookup, OutputFormat, SearchState, SessionSummary};
use shelfwise::application::use_cases::{
    AccountUseCase, AuthorDirectoryUseCase, BookDetailUseCase, BrowseCatalogUseCase,
    ExternalBookUseCase, PublishBookUseCase, ReadingListsUseCase, SearchAggregator, SessionStore,
};
use shelfwise::cli::{Args, Command};
use shelfwise::config::{discover_config, load_config_from_path, Settings};
use shelfwise::library::domain::{AuthorUpdate, BookUpdate, Registration};
use shelfwise::ports::inbound::SessionPort;
use shelfwise::ports::outbound::{Notifier, OutputPresenter, View};
use shelfwise::shared::error::ExitCode;
use shelfwise::shared::security::{validate_file_size, validate_not_symlink};
use shelfwise::shared::Result;
use std::path::Path;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Largest book manifest accepted by `publish` (4 MiB)
const MAX_MANIFEST_SIZE: u64 = 4 * 1024 * 1024;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::for_error(&e)
        }
    };

    process::exit(code.as_i32());
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "shelfwise=debug" } else { "shelfwise=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Writes a view as JSON or as rendered text
struct Output {
    format: OutputFormat,
    presenter: StdoutPresenter,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
        let content = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Text => text(value),
        };
        self.presenter.present(&content)
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config_file = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(args.overrides(), config_file, |key| {
        std::env::var(key).ok()
    })?;
    tracing::debug!(api_url = %settings.api_url, token_file = %settings.token_file.display(), "settings resolved");

    // Create adapters (Dependency Injection)
    let tokens = Arc::new(FileTokenStorage::new(&settings.token_file));
    let api = RestApiClient::new(&settings.api_url, settings.request_timeout, tokens.clone())?;
    let books = CachingBookRepository::new(api.clone());
    let navigator = ConsoleNavigator::new();
    let notifier = match args.format {
        OutputFormat::Json => StderrNotifier::quiet(),
        OutputFormat::Text => StderrNotifier::new(),
    };
    let output = Output {
        format: args.format,
        presenter: StdoutPresenter::new(),
    };

    let mut session = SessionStore::new(tokens, &navigator, SystemClock);
    session.restore()?;

    let book_detail = BookDetailUseCase::new(books.clone(), api.clone(), &notifier);

    match args.command {
        Command::Login { username, password } => {
            AccountUseCase::new(api.clone())
                .login(&mut session, &username, &password)
                .await?;
            let summary = SessionSummary::of(&session);
            if !summary.authenticated {
                anyhow::bail!("The API issued a token that could not be read; you are not logged in");
            }
            output.emit(&summary, TerminalRenderer::whoami)?;
        }
        Command::Register {
            username,
            email,
            password,
            author,
        } => {
            let registration = Registration::new(&username, &email, &password, author);
            AccountUseCase::new(api.clone())
                .register(&mut session, &registration)
                .await?;
            notifier.report(&format!("Account '{}' created.", username));
            output.emit(&SessionSummary::of(&session), TerminalRenderer::whoami)?;
        }
        Command::Logout => {
            AccountUseCase::new(api.clone()).logout(&mut session)?;
            notifier.report("Logged out.");
            output.emit(&SessionSummary::of(&session), TerminalRenderer::whoami)?;
        }
        Command::Whoami => {
            output.emit(&SessionSummary::of(&session), TerminalRenderer::whoami)?;
        }
        Command::Featured => {
            let featured = BrowseCatalogUseCase::new(books.clone()).featured().await?;
            output.emit(&featured, |books| {
                TerminalRenderer::book_list("Featured books", books)
            })?;
        }
        Command::Search { query } => {
            let search = SearchAggregator::new(books.clone(), &notifier, settings.search_mode);
            search.search(&query).await;
            let state = search.state();
            output.emit(&state, TerminalRenderer::search)?;
            if matches!(state, SearchState::Failed { .. }) {
                return Ok(ExitCode::ApplicationError);
            }
        }
        Command::Book { id } => {
            let view = book_detail.load(&session, &id).await?;
            output.emit(&view, TerminalRenderer::book_detail)?;
        }
        Command::Download { id } => {
            let view = match book_detail.load(&session, &id).await? {
                Lookup::Found(mut view) => {
                    book_detail.trigger_download(&mut view).await?;
                    Lookup::Found(view)
                }
                Lookup::NotFound => Lookup::NotFound,
            };
            output.emit(&view, TerminalRenderer::book_detail)?;
        }
        Command::External { md5 } => {
            let view = ExternalBookUseCase::new(books.clone(), &navigator)
                .open(&md5)
                .await?;
            match navigator.last_view() {
                Some(View::Book { id }) => {
                    notifier.report("Already in the library, showing the local book.");
                    let local = book_detail.load(&session, &id).await?;
                    output.emit(&local, TerminalRenderer::book_detail)?;
                }
                _ => output.emit(&view, TerminalRenderer::external_book)?,
            }
        }
        Command::Import { md5 } => {
            let receipt = ExternalBookUseCase::new(books.clone(), &navigator)
                .import(&session, &md5)
                .await?;
            notifier.report(&format!("Imported as {} ({}).", receipt.id, receipt.status));
            if let Some(View::Book { id }) = navigator.last_view() {
                let view = book_detail.load(&session, &id).await?;
                output.emit(&view, TerminalRenderer::book_detail)?;
            }
        }
        Command::Read { id, chapter } => {
            let chapter = BrowseCatalogUseCase::new(books.clone())
                .read_chapter(&id, chapter)
                .await?;
            output.emit(&chapter, TerminalRenderer::chapter)?;
        }
        Command::Lists => {
            let shelf = ReadingListsUseCase::new(books.clone(), api.clone())
                .load(&session)
                .await?;
            output.emit(&shelf, TerminalRenderer::shelf)?;
        }
        Command::AddToList { id, list } => match book_detail.load(&session, &id).await? {
            Lookup::Found(view) => {
                book_detail.add_to_list(&session, &view, list).await?;
            }
            Lookup::NotFound => {
                output.emit(&Lookup::<()>::NotFound, |_| "Book not found.\n".to_string())?;
            }
        },
        Command::Authors { name } => {
            let authors = AuthorDirectoryUseCase::new(api.clone()).search(&name).await?;
            output.emit(&authors, |authors| TerminalRenderer::authors(authors))?;
        }
        Command::Author { id } => {
            let profile = AuthorDirectoryUseCase::new(api.clone()).profile(&id).await?;
            output.emit(&profile, TerminalRenderer::author_profile)?;
        }
        Command::MyBooks => {
            let profile = AuthorDirectoryUseCase::new(api.clone())
                .my_panel(&session)
                .await?;
            output.emit(&Lookup::Found(profile), TerminalRenderer::author_profile)?;
        }
        Command::Publish { manifest } => {
            let yaml = read_manifest(&manifest)?;
            let created = PublishBookUseCase::new(books.clone(), &navigator, &notifier)
                .publish(&session, &yaml)
                .await?;
            output.emit(&created, |created| {
                format!("Published book {} ({}).\n", created.id, created.status)
            })?;
        }
        Command::UpdateBook {
            id,
            title,
            image,
            biography,
        } => {
            let update = BookUpdate {
                title,
                image,
                biography,
            };
            let book = PublishBookUseCase::new(books.clone(), &navigator, &notifier)
                .update(&session, &id, &update)
                .await?;
            output.emit(&book, |book| {
                TerminalRenderer::book_list("Updated", std::slice::from_ref(book))
            })?;
        }
        Command::DeleteBook { id } => {
            PublishBookUseCase::new(books.clone(), &navigator, &notifier)
                .delete(&session, &id)
                .await?;
        }
        Command::UpdateProfile {
            name,
            biography,
            picture,
        } => {
            let update = AuthorUpdate {
                name,
                biography,
                profile_picture: picture,
            };
            let author = AuthorDirectoryUseCase::new(api.clone())
                .update_profile(&session, &update)
                .await?;
            output.emit(&author, |author| {
                TerminalRenderer::authors(std::slice::from_ref(author))
            })?;
        }
    }

    Ok(ExitCode::Success)
}

/// Reads a book manifest, refusing symlinks and oversized files
fn read_manifest(path: &Path) -> Result<String> {
    validate_not_symlink(path, "read")?;
    let metadata = std::fs::metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read manifest {}: {}", path.display(), e)
    })?;
    validate_file_size(metadata.len(), path, MAX_MANIFEST_SIZE)?;
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read manifest {}: {}", path.display(), e))
}
