use thiserror::Error;

use crate::domain::BorrowBookError;

/// カタログ管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 既に貸出中
    #[error("Book is already borrowed")]
    AlreadyBorrowed,

    /// 書籍が見つからない（返却操作で使用）
    ///
    /// 貸出操作では不在はエラーではなく`Ok(None)`を返す。
    /// この非対称は参照元の仕様を意図的に維持している。
    #[error("Book not found")]
    BookNotFound,

    /// リポジトリのエラー
    #[error("Repository error")]
    RepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<BorrowBookError> for CatalogError {
    fn from(err: BorrowBookError) -> Self {
        match err {
            BorrowBookError::AlreadyBorrowed => CatalogError::AlreadyBorrowed,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogError>;
