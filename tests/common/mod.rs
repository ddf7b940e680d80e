use rusty_catalog::adapters::memory::BookRepository as InMemoryBookRepository;
use rusty_catalog::application::catalog::LibraryService;
use rusty_catalog::domain::book::Book;
use rusty_catalog::domain::value_objects::BookId;

/// テスト用のLibraryServiceを作成（インメモリリポジトリ）
///
/// 本番と同じアダプタを使うことで、テストと本番の一貫性を保証する。
pub fn create_test_service() -> LibraryService {
    LibraryService::new(Box::new(InMemoryBookRepository::new()))
}

/// 紙書籍のサンプル: "1984"（328ページ）
#[allow(dead_code)]
pub fn printed_1984() -> Book {
    Book::printed(BookId::new("B002"), "1984", "George Orwell", 328)
}

/// 電子書籍のサンプル
#[allow(dead_code)]
pub fn ebook_sample() -> Book {
    Book::ebook(
        BookId::new("E001"),
        "Snow Crash",
        "Neal Stephenson",
        "https://example.com/snow-crash.epub",
    )
}
