use serde::{Deserialize, Serialize};

use super::{BookId, BorrowBookError, FeeAmount};

/// 電子書籍の延滞料金（1日あたり、セント）
pub const EBOOK_LATE_FEE_CENTS_PER_DAY: u64 = 10;

/// 紙書籍の延滞料金（1日あたり、セント）
pub const PRINTED_LATE_FEE_CENTS_PER_DAY: u64 = 50;

/// 書籍の形態
///
/// 形態ごとの固有属性と延滞料金レートを持つ。
/// 継承ではなくタグ付きバリアントで表現する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format")]
pub enum BookFormat {
    /// 紙書籍
    Printed { num_pages: u32 },
    /// 電子書籍
    EBook { download_url: String },
}

/// Book集約 - カタログに登録される1冊の書籍
///
/// 不変条件：
/// - book_idはリポジトリ内で一意
/// - borrowedは貸出成功までfalse、返却成功までtrue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub format: BookFormat,
    pub borrowed: bool,
}

impl Book {
    /// 紙書籍を新規登録する（初期状態は貸出可能）
    pub fn printed(
        book_id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        num_pages: u32,
    ) -> Self {
        Self {
            book_id,
            title: title.into(),
            author: author.into(),
            format: BookFormat::Printed { num_pages },
            borrowed: false,
        }
    }

    /// 電子書籍を新規登録する（初期状態は貸出可能）
    pub fn ebook(
        book_id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        download_url: impl Into<String>,
    ) -> Self {
        Self {
            book_id,
            title: title.into(),
            author: author.into(),
            format: BookFormat::EBook {
                download_url: download_url.into(),
            },
            borrowed: false,
        }
    }
}

/// 純粋関数：延滞料金を計算する
///
/// ビジネスルール：
/// - 電子書籍は1日10セント、紙書籍は1日50セント
/// - 負の延滞日数は0日に切り上げる（料金が負になることはない）
///
/// 副作用なし。
pub fn calculate_late_fee(book: &Book, days_late: i64) -> FeeAmount {
    let days = days_late.max(0) as u64;
    let rate = match book.format {
        BookFormat::EBook { .. } => EBOOK_LATE_FEE_CENTS_PER_DAY,
        BookFormat::Printed { .. } => PRINTED_LATE_FEE_CENTS_PER_DAY,
    };
    FeeAmount::from_cents(days * rate)
}

/// 純粋関数：書籍を借りる
///
/// ビジネスルール：
/// - 貸出中の書籍は借りられない
///
/// 副作用なし。貸出中になった新しいBookを返す。
pub fn borrow_book(book: &Book) -> Result<Book, BorrowBookError> {
    if book.borrowed {
        return Err(BorrowBookError::AlreadyBorrowed);
    }

    Ok(Book {
        borrowed: true,
        ..book.clone()
    })
}

/// 純粋関数：書籍を返却する
///
/// 延滞料金の精算はアプリケーション層の責務。支払いが成功した後にのみ
/// 呼ばれることを想定する。
///
/// 副作用なし。貸出可能に戻った新しいBookを返す。
pub fn return_book(book: &Book) -> Book {
    Book {
        borrowed: false,
        ..book.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed_book() -> Book {
        Book::printed(BookId::new("B002"), "1984", "George Orwell", 328)
    }

    fn ebook() -> Book {
        Book::ebook(
            BookId::new("E001"),
            "Snow Crash",
            "Neal Stephenson",
            "https://example.com/snow-crash.epub",
        )
    }

    // TDD: コンストラクタのテスト
    #[test]
    fn test_printed_book_starts_available() {
        let book = printed_book();
        assert!(!book.borrowed);
        assert_eq!(book.book_id, BookId::new("B002"));
        assert_eq!(book.title, "1984");
        assert_eq!(book.author, "George Orwell");
        assert_eq!(book.format, BookFormat::Printed { num_pages: 328 });
    }

    #[test]
    fn test_ebook_starts_available() {
        let book = ebook();
        assert!(!book.borrowed);
        assert_eq!(
            book.format,
            BookFormat::EBook {
                download_url: "https://example.com/snow-crash.epub".to_string()
            }
        );
    }

    // TDD: calculate_late_fee() のテスト
    #[test]
    fn test_late_fee_is_zero_when_not_late() {
        assert_eq!(calculate_late_fee(&printed_book(), 0), FeeAmount::zero());
        assert_eq!(calculate_late_fee(&ebook(), 0), FeeAmount::zero());
    }

    #[test]
    fn test_late_fee_clamps_negative_days_to_zero() {
        // 料金が負になることはない
        assert_eq!(calculate_late_fee(&printed_book(), -3), FeeAmount::zero());
        assert_eq!(calculate_late_fee(&ebook(), -10), FeeAmount::zero());
    }

    #[test]
    fn test_printed_late_fee_is_fifty_cents_per_day() {
        // 4日延滞で$2.00
        assert_eq!(
            calculate_late_fee(&printed_book(), 4),
            FeeAmount::from_cents(200)
        );
    }

    #[test]
    fn test_ebook_late_fee_is_ten_cents_per_day() {
        // 10日延滞で$1.00
        assert_eq!(calculate_late_fee(&ebook(), 10), FeeAmount::from_cents(100));
    }

    // TDD: borrow_book() のテスト
    #[test]
    fn test_borrow_book_success() {
        let book = printed_book();
        let result = borrow_book(&book);
        assert!(result.is_ok());

        let borrowed = result.unwrap();
        assert!(borrowed.borrowed);
        // 書誌情報は変わらない
        assert_eq!(borrowed.book_id, book.book_id);
        assert_eq!(borrowed.title, book.title);
    }

    #[test]
    fn test_borrow_book_fails_when_already_borrowed() {
        let book = borrow_book(&printed_book()).unwrap();
        let result = borrow_book(&book);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), BorrowBookError::AlreadyBorrowed);
    }

    // TDD: return_book() のテスト
    #[test]
    fn test_return_book_makes_book_available() {
        let book = borrow_book(&printed_book()).unwrap();
        let returned = return_book(&book);
        assert!(!returned.borrowed);
    }

    #[test]
    fn test_borrow_then_return_round_trip_preserves_identity() {
        let book = printed_book();
        let borrowed = borrow_book(&book).unwrap();
        let returned = return_book(&borrowed);
        assert_eq!(returned, book);
    }
}
