use crate::domain::book::Book;
use crate::domain::value_objects::BookId;
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};

/// BookRepositoryのインメモリ実装
///
/// プロセス内メモリのみに保存する（再起動で消える）。
/// find_allが登録順を再現できるよう、Vecで保持する。
#[derive(Debug, Default)]
pub struct BookRepository {
    books: Vec<Book>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }
}

impl BookRepositoryTrait for BookRepository {
    /// 保存する。同じIDが存在する場合は元の位置のまま上書き
    fn save(&mut self, book: Book) -> Result<()> {
        match self.books.iter_mut().find(|b| b.book_id == book.book_id) {
            Some(existing) => *existing = book,
            None => self.books.push(book),
        }
        Ok(())
    }

    fn find_by_id(&self, book_id: &BookId) -> Result<Option<Book>> {
        Ok(self.books.iter().find(|b| &b.book_id == book_id).cloned())
    }

    /// 登録順で全件を返す
    fn find_all(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }
}
