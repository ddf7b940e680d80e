use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::adapters::payment::{CardPayment, CashPayment};
use crate::application::catalog::{CatalogError, LibraryService, ReturnOutcome};
use crate::domain::book::Book;
use crate::domain::value_objects::BookId;
use crate::ports::payment::PaymentMethod;

/// コンソールシェル - 対話メニューのアダプタ
///
/// 入力の解析・検証と結果の表示だけを担い、業務ロジックは持たない。
/// 利用者の入力をLibraryServiceの4操作に対応付ける。
///
/// 入出力をジェネリックにすることで、テストではインメモリのバッファを
/// 差し込める。
pub struct Shell<R, W> {
    service: LibraryService,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(service: LibraryService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// メニューループを実行する
    ///
    /// 入力がEOFに達するか、Exitが選ばれるまで繰り返す。
    /// アプリケーション層のエラーはすべてここで捕捉して表示する。
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };

            match choice.trim() {
                "1" => self.add_printed_book()?,
                "2" => self.add_ebook()?,
                "3" => self.list_books()?,
                "4" => self.borrow_book()?,
                "5" => self.return_book()?,
                "6" => self.export_catalog()?,
                "7" => {
                    writeln!(self.output, "Exiting... Goodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice, try again!")?,
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "LIBRARY MANAGEMENT SYSTEM")?;
        writeln!(self.output, "1. Add Printed Book")?;
        writeln!(self.output, "2. Add EBook")?;
        writeln!(self.output, "3. List All Books")?;
        writeln!(self.output, "4. Borrow Book")?;
        writeln!(self.output, "5. Return Book")?;
        writeln!(self.output, "6. Export Catalog (JSON)")?;
        writeln!(self.output, "7. Exit")?;
        Ok(())
    }

    fn add_printed_book(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Enter Book ID: ")? else {
            return Ok(());
        };
        let Some(title) = self.prompt("Enter Title: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Enter Author: ")? else {
            return Ok(());
        };
        let Some(pages) = self.prompt_number::<u32>("Enter Number of Pages: ")? else {
            return Ok(());
        };

        let book = Book::printed(BookId::new(id), title, author, pages);
        match self.service.add_book(book) {
            Ok(()) => writeln!(self.output, "Printed Book added successfully!"),
            Err(e) => self.render_error(&e),
        }
    }

    fn add_ebook(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Enter Book ID: ")? else {
            return Ok(());
        };
        let Some(title) = self.prompt("Enter Title: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Enter Author: ")? else {
            return Ok(());
        };
        let Some(url) = self.prompt("Enter Download URL: ")? else {
            return Ok(());
        };

        let book = Book::ebook(BookId::new(id), title, author, url);
        match self.service.add_book(book) {
            Ok(()) => writeln!(self.output, "EBook added successfully!"),
            Err(e) => self.render_error(&e),
        }
    }

    fn list_books(&mut self) -> io::Result<()> {
        let books = match self.service.list_books() {
            Ok(books) => books,
            Err(e) => return self.render_error(&e),
        };

        writeln!(self.output)?;
        writeln!(self.output, "--- Library Books ---")?;
        for book in &books {
            writeln!(
                self.output,
                "ID: {} | Title: {} | Author: {} | Borrowed: {}",
                book.book_id,
                book.title,
                book.author,
                if book.borrowed { "Yes" } else { "No" }
            )?;
        }
        writeln!(self.output, "----------------------")
    }

    fn borrow_book(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Enter Book ID to borrow: ")? else {
            return Ok(());
        };

        match self.service.borrow_book(&BookId::new(id)) {
            Ok(Some(book)) => writeln!(self.output, "You borrowed: {}", book.title),
            Ok(None) => writeln!(self.output, "Book not found!"),
            Err(e) => self.render_error(&e),
        }
    }

    fn return_book(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt("Enter Book ID to return: ")? else {
            return Ok(());
        };
        let Some(days_late) = self.prompt_number::<i64>("Enter days late: ")? else {
            return Ok(());
        };
        let Some(payment) = self.prompt_payment_method()? else {
            return Ok(());
        };

        match self
            .service
            .return_book_and_pay_fine(&BookId::new(id), days_late, payment.as_ref())
        {
            Ok(ReturnOutcome::Paid(fee)) => {
                writeln!(self.output, "Book returned. Late fee paid: {}", fee)
            }
            Ok(ReturnOutcome::PaymentDeclined(fee)) => writeln!(
                self.output,
                "Payment of {} declined. Book is still borrowed.",
                fee
            ),
            Err(e) => self.render_error(&e),
        }
    }

    fn export_catalog(&mut self) -> io::Result<()> {
        let books = match self.service.list_books() {
            Ok(books) => books,
            Err(e) => return self.render_error(&e),
        };

        let json = serde_json::to_string_pretty(&books).map_err(io::Error::other)?;
        writeln!(self.output, "{}", json)
    }

    /// 支払い手段を選択させる（1 = 現金、2 = カード）
    fn prompt_payment_method(&mut self) -> io::Result<Option<Box<dyn PaymentMethod>>> {
        let Some(choice) = self.prompt("Payment method (1 = Cash, 2 = Card): ")? else {
            return Ok(None);
        };

        if choice.trim() == "2" {
            let Some(card_number) = self.prompt("Enter Card Number: ")? else {
                return Ok(None);
            };
            Ok(Some(Box::new(CardPayment::new(card_number))))
        } else {
            Ok(Some(Box::new(CashPayment::new())))
        }
    }

    /// 1行読み込む。EOFの場合はNone
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// 数値を読み込む。解析できない入力は再入力を促す
    fn prompt_number<T: FromStr>(&mut self, label: &str) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid input! Please enter a number.")?,
            }
        }
    }

    fn render_error(&mut self, err: &CatalogError) -> io::Result<()> {
        let message = match err {
            CatalogError::AlreadyBorrowed => "Book already borrowed!",
            CatalogError::BookNotFound => "Book not found!",
            CatalogError::RepositoryError(e) => {
                // 内部エラーの詳細はログに記録し、利用者には一般的なメッセージのみ
                tracing::error!("repository error: {}", e);
                "Internal error, please try again."
            }
        };
        writeln!(self.output, "Error: {}", message)
    }
}
