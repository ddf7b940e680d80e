use rusty_catalog::{
    adapters::memory::BookRepository as InMemoryBookRepository,
    application::catalog::LibraryService, shell::Shell,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize adapters
    let repository = InMemoryBookRepository::new();
    let service = LibraryService::new(Box::new(repository));

    // Run the console shell over stdin/stdout
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(service, stdin.lock(), stdout.lock());
    shell.run()
}
