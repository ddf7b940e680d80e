use crate::domain::book::Book;
use crate::domain::value_objects::BookId;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍リポジトリポート
///
/// カタログの保存先を抽象化する。現在の実装はインメモリのみだが、
/// アプリケーション層は保存先の種類を知らない。
pub trait BookRepository {
    /// 書籍を保存する
    ///
    /// 同じIDの書籍が存在する場合は上書きする（エラーにしない）。
    fn save(&mut self, book: Book) -> Result<()>;

    /// IDで書籍を検索する
    ///
    /// 見つからない場合は`Ok(None)`。不在はエラーではなく正常な結果。
    fn find_by_id(&self, book_id: &BookId) -> Result<Option<Book>>;

    /// 全書籍を取得する
    ///
    /// 順序は決定的で、現在の内容の登録順を再現する。
    fn find_all(&self) -> Result<Vec<Book>>;
}
