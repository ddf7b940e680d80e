use crate::domain::{self, value_objects::*};
use crate::domain::book::Book;
use crate::ports::book_repository::BookRepository;
use crate::ports::payment::PaymentMethod;

use super::errors::{CatalogError, Result};

/// 返却精算の結果
///
/// 支払い失敗はエラーではなく正常な結果のひとつ。数値の番兵（-1）で
/// 表現せず、型で区別する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// 支払い成功。精算した延滞料金（0の場合もある）
    Paid(FeeAmount),
    /// 支払い失敗。書籍は貸出中のまま
    PaymentDeclined(FeeAmount),
}

/// 図書館サービス - カタログの貸出・返却・一覧を取りまとめる
///
/// リポジトリを1つ専有し（コンポジション）、支払い手段は返却操作ごとに
/// 呼び出し側から渡される（所有しない）。
///
/// 単一スレッド前提。find→更新の間に原子性の保証はないため、並行化する
/// 場合はリポジトリポートの排他制御を再設計する必要がある。
pub struct LibraryService {
    repository: Box<dyn BookRepository>,
}

impl LibraryService {
    pub fn new(repository: Box<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// 書籍をカタログに登録する
    ///
    /// 検証はBook構築時のものだけ。同じIDは上書きになる。
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        tracing::debug!(book_id = %book.book_id, title = %book.title, "adding book");
        self.repository
            .save(book)
            .map_err(CatalogError::RepositoryError)
    }

    /// 書籍を借りる
    ///
    /// ビジネスルール：
    /// - IDが存在しない場合は`Ok(None)`（エラーではない）
    /// - 貸出中の場合は`AlreadyBorrowed`エラー。状態は変わらない
    /// - 成功時はborrowedをtrueにして貸出後の書籍を返す
    pub fn borrow_book(&mut self, book_id: &BookId) -> Result<Option<Book>> {
        let book = match self.find(book_id)? {
            Some(book) => book,
            None => return Ok(None),
        };

        let borrowed = domain::book::borrow_book(&book)?;
        self.repository
            .save(borrowed.clone())
            .map_err(CatalogError::RepositoryError)?;

        tracing::info!(book_id = %book_id, "book borrowed");
        Ok(Some(borrowed))
    }

    /// 書籍を返却し、延滞料金を精算する
    ///
    /// ビジネスルール：
    /// - IDが存在しない場合は`BookNotFound`エラー
    /// - 料金は書籍の形態と延滞日数から計算する（負の日数は0扱い）
    /// - 支払い成功時のみborrowedをfalseに戻し、`Paid(fee)`を返す
    /// - 支払い失敗時は状態を変えず`PaymentDeclined(fee)`を返す
    pub fn return_book_and_pay_fine(
        &mut self,
        book_id: &BookId,
        days_late: i64,
        payment: &dyn PaymentMethod,
    ) -> Result<ReturnOutcome> {
        let book = self.find(book_id)?.ok_or(CatalogError::BookNotFound)?;

        let fee = domain::book::calculate_late_fee(&book, days_late);

        if !payment.pay(fee) {
            tracing::warn!(book_id = %book_id, %fee, "payment declined, book stays borrowed");
            return Ok(ReturnOutcome::PaymentDeclined(fee));
        }

        let returned = domain::book::return_book(&book);
        self.repository
            .save(returned)
            .map_err(CatalogError::RepositoryError)?;

        tracing::info!(book_id = %book_id, %fee, "book returned, late fee paid");
        Ok(ReturnOutcome::Paid(fee))
    }

    /// 全書籍を登録順で取得する
    ///
    /// 読み取り専用。表示はコンソールシェルの責務。
    pub fn list_books(&self) -> Result<Vec<Book>> {
        self.repository
            .find_all()
            .map_err(CatalogError::RepositoryError)
    }

    fn find(&self, book_id: &BookId) -> Result<Option<Book>> {
        self.repository
            .find_by_id(book_id)
            .map_err(CatalogError::RepositoryError)
    }
}
